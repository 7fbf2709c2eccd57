//! Axum serving harness for a connection-bearing schema.

use std::future::Future;

use async_graphql::http::GraphiQLSource;
use async_graphql::{EmptyMutation, EmptySubscription, ObjectType, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use tracing::info;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub enable_playground: bool,
}

impl ServerConfig {
    fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 4000,
            enable_playground: true,
        }
    }
}

/// Serve a query-only schema until the shutdown future resolves.
///
/// Routes `/graphql` (queries, plus GraphiQL on GET), `/health`, and -
/// when the playground is enabled - GraphiQL at the root. Shutdown is
/// graceful: in-flight requests complete before the task returns.
pub async fn serve<Q, F>(
    schema: Schema<Q, EmptyMutation, EmptySubscription>,
    config: ServerConfig,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    Q: ObjectType + 'static,
    F: Future<Output = ()> + Send + 'static,
{
    let mut app = Router::new()
        .route("/graphql", get(graphiql).post(graphql_handler::<Q>))
        .route("/health", get(health_check))
        .with_state(schema);

    if config.enable_playground {
        app = app.route("/", get(graphiql));
    }

    let listener = tokio::net::TcpListener::bind(config.addr()).await?;

    info!("⚡ GraphQL server listening on http://{}", config.addr());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}

/// GraphQL query handler.
async fn graphql_handler<Q>(
    State(schema): State<Schema<Q, EmptyMutation, EmptySubscription>>,
    req: GraphQLRequest,
) -> GraphQLResponse
where
    Q: ObjectType + 'static,
{
    schema.execute(req.into_inner()).await.into()
}

/// GraphiQL playground UI.
async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
