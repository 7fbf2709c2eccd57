//! Error types for the pagination engine.
//!
//! This module defines two error families:
//!
//! - [`DefinitionError`] - Construction-time errors (missing strategy)
//! - [`ConnectionError`] - Per-call argument errors
//!
//! Both are fatal to their operation and surfaced to the caller; the
//! engine never silently corrects them. Undecodable cursors are *not*
//! errors - they degrade to "no boundary on that side" inside the
//! engine. Error conversion into caller types is automatic via `From`
//! implementations, allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// Definition Errors
// =============================================================================

/// Construction errors raised by [`crate::ConnectionDefinitionBuilder::build`].
///
/// Each missing strategy function is reported with its own variant so
/// callers see exactly which one was not supplied.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionError {
    /// No comparator was supplied.
    #[error("Must provide 'comparator'")]
    MissingComparator,

    /// No key-to-cursor encoder was supplied.
    #[error("Must provide 'comparable_to_cursor'")]
    MissingComparableToCursor,

    /// No cursor-to-key decoder was supplied.
    #[error("Must provide 'cursor_to_comparable'")]
    MissingCursorToComparable,
}

// =============================================================================
// Connection Errors
// =============================================================================

/// Argument errors raised by the windowing engine.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionError {
    /// `first` and `last` were both supplied.
    #[error("Must not provide both 'first' and 'last'")]
    FirstAndLast,

    /// `first` or `last` was zero or negative.
    #[error("'first' and 'last' must be 1 or greater")]
    NonPositiveCount,

    /// The decoded `before` boundary precedes the decoded `after`
    /// boundary under the active comparator, either directly or after
    /// boundary resolution collapsed the window.
    #[error("'before' must be after 'after'")]
    CrossedCursors,
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for definition construction.
pub type DefinitionResult<T> = Result<T, DefinitionError>;

/// Result type for windowing calls.
pub type ConnectionResult<T> = Result<T, ConnectionError>;
