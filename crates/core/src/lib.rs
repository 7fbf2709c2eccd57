//! Core pagination engine for Segue.
//!
//! This crate implements Relay-style cursor pagination ("connections")
//! over an ordered, comparable in-memory collection. It is the innermost
//! layer of the workspace - pure computation, no I/O, no runtime.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   segue-demo (binary)                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │        segue-graphql        │        segue-cursors          │
//! │     (API integration)       │     (codec strategies)        │
//! ├─────────────────────────────┴───────────────────────────────┤
//! │                 segue-core  ← YOU ARE HERE                  │
//! │           (types, definition, windowing engine)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Connection data model (Connection, Edge, PageInfo, arguments)
//! - [`definition`] - The [`ConnectionDefinition`] factory and its builder
//! - [`window`] - The windowing engine (boundary search, slicing, page info)
//! - [`error`] - Error types
//!
//! # Key Concepts
//!
//! ## Strategy triple
//!
//! A [`ConnectionDefinition`] closes over three caller-supplied functions:
//! a total-order comparator over the comparable key type `C`, an encoder
//! from key to opaque cursor token, and a decoder from token back to key
//! (returning `None` for tokens it cannot decode). Nodes relate to keys
//! through `Borrow<C>`: a node borrows as its own ordering key, while a
//! decoded cursor yields a bare key.
//!
//! ## Windowing
//!
//! [`ConnectionDefinition::connection_from_array`] locates the cursor
//! boundaries in a sorted working copy of the input, slices according to
//! `first`/`last`, and derives `has_previous_page`/`has_next_page` -
//! unless the caller overrides them through [`types::ConnectionOptions`].
//! The caller's slice is never mutated.

pub mod definition;
pub mod error;
pub mod types;
pub mod window;

pub use definition::{ConnectionDefinition, ConnectionDefinitionBuilder};
pub use error::{ConnectionError, ConnectionResult, DefinitionError, DefinitionResult};
pub use types::{
    Connection, ConnectionArguments, ConnectionCursor, ConnectionOptions, Edge, PageInfo,
};
