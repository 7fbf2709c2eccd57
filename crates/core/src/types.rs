//! Connection data model.
//!
//! These types implement the Relay connection pattern for cursor-based
//! pagination, commonly used with GraphQL but also applicable to other
//! APIs. All of them are transient: constructed per windowing call and
//! discarded once the caller has consumed the result.

use serde::{Deserialize, Serialize};

/// Opaque cursor for pagination.
///
/// The token format is a strategy concern (see `segue-cursors`); the
/// engine never looks inside it.
pub type ConnectionCursor = String;

// =============================================================================
// Arguments & Options
// =============================================================================

/// Pagination arguments for a windowing call.
///
/// Supports forward pagination (`first`/`after`) and backward
/// pagination (`last`/`before`). `first` and `last` are mutually
/// exclusive and must be 1 or greater when present; the engine rejects
/// anything else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConnectionArguments {
    /// Number of edges to keep from the front of the window.
    pub first: Option<i32>,
    /// Cursor the window starts strictly after.
    pub after: Option<ConnectionCursor>,
    /// Number of edges to keep from the back of the window.
    pub last: Option<i32>,
    /// Cursor the window ends strictly before.
    pub before: Option<ConnectionCursor>,
}

/// Caller-declared properties of the input and page-flag overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionOptions {
    /// When set, returned verbatim instead of the derived value.
    pub has_previous_page: Option<bool>,
    /// When set, returned verbatim instead of the derived value.
    pub has_next_page: Option<bool>,
    /// The input is already sorted by the active comparator
    /// (ascending for `desc: false`, descending for `desc: true`).
    pub sorted: bool,
    /// Traverse in descending order; boundary semantics are mirrored.
    pub desc: bool,
}

// =============================================================================
// Output Types
// =============================================================================

/// A single item in a paginated result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge<N> {
    /// The actual item.
    pub node: N,
    /// Cursor for this item (used for pagination).
    pub cursor: ConnectionCursor,
}

/// Information about the current page in a paginated result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Cursor of the first edge in this page, `None` when the page is empty.
    pub start_cursor: Option<ConnectionCursor>,
    /// Cursor of the last edge in this page, `None` when the page is empty.
    pub end_cursor: Option<ConnectionCursor>,
    /// Whether there are items before this page.
    pub has_previous_page: bool,
    /// Whether there are more items after this page.
    pub has_next_page: bool,
}

/// Paginated result set with edges and page info.
///
/// Fully materialized and immutable - serializes directly into the
/// `edges`/`pageInfo` fields of a graph-query response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection<N> {
    /// List of edges (node + cursor pairs), in traversal order.
    pub edges: Vec<Edge<N>>,
    /// Information about the current page.
    pub page_info: PageInfo,
}
