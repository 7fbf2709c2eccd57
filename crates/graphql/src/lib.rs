//! GraphQL integration for Segue connections.
//!
//! Bridges `segue-core` connections into async-graphql schemas and
//! provides a small axum-based serving harness.
//!
//! # Exposing a paginated field
//!
//! async-graphql object types are concrete, so typed Edge/Connection
//! pairs are generated per node type with [`connection_types!`]:
//!
//! ```ignore
//! use segue_graphql::connection_types;
//!
//! #[derive(async_graphql::SimpleObject)]
//! struct Track { title: String }
//!
//! impl From<catalog::Track> for Track { /* ... */ }
//!
//! connection_types!(Track, catalog::Track, TrackEdge, TrackConnection);
//!
//! // in a resolver:
//! let connection = definition.connection_from_array(&tracks, &args, &options)?;
//! Ok(TrackConnection::from(connection))
//! ```

mod server;
mod types;

pub use server::{serve, ServerConfig};
pub use types::PageInfo;
