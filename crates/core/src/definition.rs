//! The connection definition factory.
//!
//! A [`ConnectionDefinition`] is the composition root of the engine: it
//! validates that the three strategy functions were supplied, then
//! closes over them to provide the windowing operations implemented in
//! [`crate::window`]. Definitions are read-only after construction, so
//! a single instance can serve any number of concurrent calls.

use std::cmp::Ordering;

use crate::error::{DefinitionError, DefinitionResult};
use crate::types::ConnectionCursor;

/// Total-order comparator over the comparable key type.
pub(crate) type Comparator<C> = Box<dyn Fn(&C, &C) -> Ordering + Send + Sync>;

/// Encoder from comparable key to opaque cursor token.
pub(crate) type ComparableToCursor<C> = Box<dyn Fn(&C) -> ConnectionCursor + Send + Sync>;

/// Decoder from cursor token back to comparable key.
///
/// Returns `None` for tokens it cannot decode; the engine treats those
/// as "no boundary", never as an error.
pub(crate) type CursorToComparable<C> = Box<dyn Fn(&str) -> Option<C> + Send + Sync>;

// =============================================================================
// ConnectionDefinition
// =============================================================================

/// A pagination scheme over the comparable key type `C`.
///
/// Built with [`ConnectionDefinition::builder`]; the windowing
/// operations live in [`crate::window`].
///
/// # Example
///
/// ```
/// use segue_core::ConnectionDefinition;
///
/// let definition = ConnectionDefinition::builder()
///     .comparator(|a: &u64, b: &u64| a.cmp(b))
///     .comparable_to_cursor(|n| format!("item:{n}"))
///     .cursor_to_comparable(|c: &str| c.strip_prefix("item:")?.parse().ok())
///     .build()
///     .unwrap();
///
/// let connection = definition
///     .connection_from_array(&[1u64, 2, 3], &Default::default(), &Default::default())
///     .unwrap();
/// assert_eq!(connection.edges.len(), 3);
/// ```
pub struct ConnectionDefinition<C> {
    pub(crate) comparator: Comparator<C>,
    pub(crate) comparable_to_cursor: ComparableToCursor<C>,
    pub(crate) cursor_to_comparable: CursorToComparable<C>,
}

impl<C> ConnectionDefinition<C> {
    /// Start building a definition.
    pub fn builder() -> ConnectionDefinitionBuilder<C> {
        ConnectionDefinitionBuilder::default()
    }
}

impl<C> std::fmt::Debug for ConnectionDefinition<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionDefinition").finish_non_exhaustive()
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Builder for [`ConnectionDefinition`].
///
/// All three strategies are required; [`build`](Self::build) reports
/// each missing one with its own [`DefinitionError`] variant.
pub struct ConnectionDefinitionBuilder<C> {
    comparator: Option<Comparator<C>>,
    comparable_to_cursor: Option<ComparableToCursor<C>>,
    cursor_to_comparable: Option<CursorToComparable<C>>,
}

impl<C> Default for ConnectionDefinitionBuilder<C> {
    fn default() -> Self {
        Self {
            comparator: None,
            comparable_to_cursor: None,
            cursor_to_comparable: None,
        }
    }
}

impl<C> ConnectionDefinitionBuilder<C> {
    /// Set the total-order comparator over keys.
    pub fn comparator<F>(mut self, comparator: F) -> Self
    where
        F: Fn(&C, &C) -> Ordering + Send + Sync + 'static,
    {
        self.comparator = Some(Box::new(comparator));
        self
    }

    /// Set the key-to-cursor encoder.
    pub fn comparable_to_cursor<F>(mut self, encode: F) -> Self
    where
        F: Fn(&C) -> ConnectionCursor + Send + Sync + 'static,
    {
        self.comparable_to_cursor = Some(Box::new(encode));
        self
    }

    /// Set the cursor-to-key decoder.
    pub fn cursor_to_comparable<F>(mut self, decode: F) -> Self
    where
        F: Fn(&str) -> Option<C> + Send + Sync + 'static,
    {
        self.cursor_to_comparable = Some(Box::new(decode));
        self
    }

    /// Validate that every strategy was supplied and assemble the
    /// definition.
    pub fn build(self) -> DefinitionResult<ConnectionDefinition<C>> {
        Ok(ConnectionDefinition {
            comparator: self.comparator.ok_or(DefinitionError::MissingComparator)?,
            comparable_to_cursor: self
                .comparable_to_cursor
                .ok_or(DefinitionError::MissingComparableToCursor)?,
            cursor_to_comparable: self
                .cursor_to_comparable
                .ok_or(DefinitionError::MissingCursorToComparable)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder_with_all() -> ConnectionDefinitionBuilder<i64> {
        ConnectionDefinition::builder()
            .comparator(|a: &i64, b: &i64| a.cmp(b))
            .comparable_to_cursor(|n| n.to_string())
            .cursor_to_comparable(|c| c.parse().ok())
    }

    #[test]
    fn test_build_succeeds_with_all_strategies() {
        assert!(builder_with_all().build().is_ok());
    }

    // Chaque stratégie absente est signalée par sa propre erreur

    #[test]
    fn test_requires_comparator() {
        let result = ConnectionDefinition::<i64>::builder()
            .comparable_to_cursor(|n| n.to_string())
            .cursor_to_comparable(|c| c.parse().ok())
            .build();
        assert_eq!(result.err(), Some(DefinitionError::MissingComparator));
    }

    #[test]
    fn test_requires_comparable_to_cursor() {
        let result = ConnectionDefinition::<i64>::builder()
            .comparator(|a: &i64, b: &i64| a.cmp(b))
            .cursor_to_comparable(|c| c.parse().ok())
            .build();
        assert_eq!(
            result.err(),
            Some(DefinitionError::MissingComparableToCursor)
        );
    }

    #[test]
    fn test_requires_cursor_to_comparable() {
        let result = ConnectionDefinition::<i64>::builder()
            .comparator(|a: &i64, b: &i64| a.cmp(b))
            .comparable_to_cursor(|n| n.to_string())
            .build();
        assert_eq!(
            result.err(),
            Some(DefinitionError::MissingCursorToComparable)
        );
    }
}
