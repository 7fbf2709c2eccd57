//! GraphQL schema for the track catalog.

use std::sync::Arc;

use async_graphql::{Context, EmptyMutation, EmptySubscription, Object, Result, Schema};
use chrono::{DateTime, Utc};

use segue_core::{ConnectionArguments, ConnectionDefinition, ConnectionOptions};
use segue_cursors::document::{self, DocumentId};
use segue_graphql::connection_types;

use crate::catalog;

// -----------------------------------------------------------------------------
// Schema Configuration
// -----------------------------------------------------------------------------

/// Maximum query depth (DoS protection).
pub const MAX_QUERY_DEPTH: usize = 15;

/// Maximum query complexity score (DoS protection).
pub const MAX_QUERY_COMPLEXITY: usize = 500;

/// Maximum page size for pagination.
const MAX_PAGE_SIZE: i32 = 100;

/// The demo schema type.
pub type DemoSchema = Schema<TrackQuery, EmptyMutation, EmptySubscription>;

/// Catalog plus its pagination scheme, shared by all resolvers.
pub struct CatalogContext {
    pub tracks: Vec<catalog::Track>,
    pub definition: ConnectionDefinition<DocumentId>,
}

impl CatalogContext {
    pub fn new(tracks: Vec<catalog::Track>) -> Self {
        Self {
            tracks,
            definition: document::definition(),
        }
    }
}

/// Build the demo schema over a catalog.
pub fn build_schema(catalog: Arc<CatalogContext>) -> DemoSchema {
    Schema::build(TrackQuery, EmptyMutation, EmptySubscription)
        .data(catalog)
        .limit_depth(MAX_QUERY_DEPTH)
        .limit_complexity(MAX_QUERY_COMPLEXITY)
        .finish()
}

// -----------------------------------------------------------------------------
// Query Root
// -----------------------------------------------------------------------------

/// Query root for the track catalog.
#[derive(Default)]
pub struct TrackQuery;

#[Object]
impl TrackQuery {
    /// Get a track by id.
    async fn track<'ctx>(&self, ctx: &Context<'ctx>, id: String) -> Result<Option<Track>> {
        let catalog = ctx.data::<Arc<CatalogContext>>()?;

        let id = DocumentId::from_hex(&id)
            .map_err(|e| async_graphql::Error::new(format!("Invalid track id: {}", e)))?;

        Ok(catalog
            .tracks
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .map(Track::from))
    }

    /// List tracks with cursor pagination.
    async fn tracks<'ctx>(
        &self,
        ctx: &Context<'ctx>,
        first: Option<i32>,
        after: Option<String>,
        last: Option<i32>,
        before: Option<String>,
        #[graphql(default)] order: Order,
    ) -> Result<TrackConnection> {
        let catalog = ctx.data::<Arc<CatalogContext>>()?;

        // Cap page sizes; non-positive values still reach the engine
        // and are rejected there.
        let args = ConnectionArguments {
            first: first.map(|n| n.min(MAX_PAGE_SIZE)),
            after,
            last: last.map(|n| n.min(MAX_PAGE_SIZE)),
            before,
        };

        // The catalog is stored ascending, so only ascending traversal
        // can skip the sort pass.
        let options = ConnectionOptions {
            sorted: order == Order::Asc,
            desc: order == Order::Desc,
            ..Default::default()
        };

        let connection = catalog
            .definition
            .connection_from_array(&catalog.tracks, &args, &options)?;

        Ok(TrackConnection::from(connection))
    }
}

// -----------------------------------------------------------------------------
// GraphQL Types
// -----------------------------------------------------------------------------

/// Traversal direction.
#[derive(async_graphql::Enum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Order {
    #[default]
    Asc,
    Desc,
}

/// Track type.
#[derive(async_graphql::SimpleObject)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub duration_secs: i32,
    pub released_at: DateTime<Utc>,
}

impl From<catalog::Track> for Track {
    fn from(t: catalog::Track) -> Self {
        Self {
            id: t.id.to_hex(),
            title: t.title,
            artist: t.artist,
            duration_secs: t.duration_secs as i32,
            released_at: t.released_at,
        }
    }
}

connection_types!(Track, catalog::Track, TrackEdge, TrackConnection);
