//! The windowing engine.
//!
//! Given a sequence of nodes and pagination arguments, the engine
//! resolves the `after`/`before` cursor boundaries against a sorted
//! working copy, slices according to `first`/`last`, and derives the
//! page flags. All of the boundary-condition policy lives here:
//!
//! - `first`+`last` together, non-positive counts, and crossed cursors
//!   are argument errors;
//! - undecodable cursors degrade to "no boundary on that side";
//! - an `after` past every node (resp. a `before` preceding every node)
//!   short-circuits to an empty page with the matching flag defaults;
//! - explicit flag overrides in [`ConnectionOptions`] always win.
//!
//! The input slice is never mutated; each call operates on its own copy.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::future::Future;

use tracing::debug;

use crate::definition::{ConnectionDefinition, CursorToComparable};
use crate::error::{ConnectionError, ConnectionResult};
use crate::types::{Connection, ConnectionArguments, ConnectionOptions, Edge, PageInfo};

// =============================================================================
// Boundary Search
// =============================================================================

/// Smallest index whose node sorts strictly after `after`.
///
/// Nodes are sorted under `cmp`. A node comparing equal to `after`
/// places the boundary at the next index (the boundary node itself is
/// excluded). `None` means `after` sorts past every node.
fn find_start_index<C, N, F>(nodes: &[N], after: Option<&C>, cmp: &F) -> Option<usize>
where
    N: Borrow<C>,
    F: Fn(&C, &C) -> Ordering,
{
    let Some(after) = after else {
        return Some(0);
    };
    for (i, node) in nodes.iter().enumerate() {
        match cmp(after, node.borrow()) {
            Ordering::Equal => return Some(i + 1),
            Ordering::Less => return Some(i),
            Ordering::Greater => {}
        }
    }
    None
}

/// Largest index whose node sorts strictly before `before`.
///
/// Symmetric back-to-front scan. `None` means `before` sorts at or
/// before the very first node, leaving nothing in the window.
fn find_end_index<C, N, F>(nodes: &[N], before: Option<&C>, cmp: &F) -> Option<usize>
where
    N: Borrow<C>,
    F: Fn(&C, &C) -> Ordering,
{
    let Some(before) = before else {
        return nodes.len().checked_sub(1);
    };
    for (i, node) in nodes.iter().enumerate().rev() {
        match cmp(before, node.borrow()) {
            Ordering::Equal => return i.checked_sub(1),
            Ordering::Greater => return Some(i),
            Ordering::Less => {}
        }
    }
    None
}

/// Decode one cursor boundary, degrading to `None` on failure.
///
/// An unusable token is not an error: stale or tampered cursors fall
/// back to "no filter on that side" rather than failing the request.
fn decode_boundary<C>(
    decode: &CursorToComparable<C>,
    cursor: Option<&str>,
    side: &'static str,
) -> Option<C> {
    let cursor = cursor?;
    let key = decode(cursor);
    if key.is_none() {
        debug!(cursor, side, "undecodable cursor, treating boundary as absent");
    }
    key
}

/// Assemble a connection from already-windowed edges.
fn edges_to_connection<N>(
    edges: Vec<Edge<N>>,
    has_previous_page: bool,
    has_next_page: bool,
) -> Connection<N> {
    let start_cursor = edges.first().map(|e| e.cursor.clone());
    let end_cursor = edges.last().map(|e| e.cursor.clone());

    Connection {
        edges,
        page_info: PageInfo {
            start_cursor,
            end_cursor,
            has_previous_page,
            has_next_page,
        },
    }
}

// =============================================================================
// Windowing Operations
// =============================================================================

impl<C> ConnectionDefinition<C> {
    /// Build a connection from an in-memory sequence of nodes.
    ///
    /// `data` is windowed by the decoded `after`/`before` boundaries and
    /// the `first`/`last` counts; the caller's slice is left untouched.
    /// See the module docs for the full edge-case policy.
    pub fn connection_from_array<N>(
        &self,
        data: &[N],
        args: &ConnectionArguments,
        options: &ConnectionOptions,
    ) -> ConnectionResult<Connection<N>>
    where
        N: Borrow<C> + Clone,
    {
        if args.first.is_some() && args.last.is_some() {
            return Err(ConnectionError::FirstAndLast);
        }
        if args.first.is_some_and(|n| n <= 0) || args.last.is_some_and(|n| n <= 0) {
            return Err(ConnectionError::NonPositiveCount);
        }

        if data.is_empty() {
            return Ok(edges_to_connection(
                Vec::new(),
                options.has_previous_page.unwrap_or(false),
                options.has_next_page.unwrap_or(false),
            ));
        }

        // Descending traversal reuses the ascending boundary logic
        // against the reversed order.
        let cmp = |a: &C, b: &C| {
            let ord = (self.comparator)(a, b);
            if options.desc {
                ord.reverse()
            } else {
                ord
            }
        };

        let after_key = decode_boundary(&self.cursor_to_comparable, args.after.as_deref(), "after");
        let before_key =
            decode_boundary(&self.cursor_to_comparable, args.before.as_deref(), "before");

        if let (Some(after), Some(before)) = (&after_key, &before_key) {
            if cmp(after, before) == Ordering::Greater {
                return Err(ConnectionError::CrossedCursors);
            }
        }

        let mut nodes: Vec<N> = data.to_vec();
        if !options.sorted {
            nodes.sort_by(|a, b| cmp(a.borrow(), b.borrow()));
        }

        let Some(mut start_index) = find_start_index(&nodes, after_key.as_ref(), &cmp) else {
            // 'after' sorts past every node
            return Ok(edges_to_connection(
                Vec::new(),
                options.has_previous_page.unwrap_or(!nodes.is_empty()),
                options.has_next_page.unwrap_or(false),
            ));
        };

        let Some(mut end_index) = find_end_index(&nodes, before_key.as_ref(), &cmp) else {
            // 'before' sorts at or before the very first node
            return Ok(edges_to_connection(
                Vec::new(),
                options.has_previous_page.unwrap_or(false),
                options.has_next_page.unwrap_or(!nodes.is_empty()),
            ));
        };

        if start_index > end_index {
            return Err(ConnectionError::CrossedCursors);
        }

        let mut edges: Vec<Edge<N>> = nodes[start_index..=end_index]
            .iter()
            .map(|node| Edge {
                cursor: (self.comparable_to_cursor)(node.borrow()),
                node: node.clone(),
            })
            .collect();

        if let Some(first) = args.first {
            let first = first as usize;
            if first < edges.len() {
                end_index = first - 1;
                edges.truncate(first);
            }
        } else if let Some(last) = args.last {
            let last = last as usize;
            if last < edges.len() {
                start_index = edges.len() - last;
                edges.drain(..start_index);
            }
        }

        Ok(edges_to_connection(
            edges,
            options.has_previous_page.unwrap_or(start_index > 0),
            options.has_next_page.unwrap_or(end_index < nodes.len() - 1),
        ))
    }

    /// Build a connection from the resolved value of an asynchronous
    /// array-producing operation.
    ///
    /// The upstream error passes through unchanged; windowing errors
    /// convert into `E` via `From`. The await is single and
    /// non-cancelable - apply cancellation upstream if needed.
    pub async fn connection_from_future<N, F, E>(
        &self,
        data: F,
        args: &ConnectionArguments,
        options: &ConnectionOptions,
    ) -> Result<Connection<N>, E>
    where
        N: Borrow<C> + Clone,
        F: Future<Output = Result<Vec<N>, E>>,
        E: From<ConnectionError>,
    {
        let data = data.await?;
        Ok(self.connection_from_array(&data, args, options)?)
    }
}
