use axum::{
    extract::{Query, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::limit::ConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;

use crate::catalog::store::ReferenceCatalog;
use crate::cli::ServeArgs;
use crate::matching::engine::ReferenceMatcher;

/// Longest reference string accepted by the search API
pub const MAX_QUERY_LENGTH: usize = 1024;

/// Shared application state, loaded once at startup
pub struct AppState {
    pub catalog: ReferenceCatalog,
}

/// Error response for rejected requests
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_type: String,
}

/// Query parameters for the search endpoint
#[derive(Deserialize)]
struct SearchParams {
    /// Raw reference string, e.g. "FO 371/15/12"
    q: Option<String>,
}

/// Build a 400 response with a user-facing message
fn bad_request(error_type: &str, user_message: &str) -> Response {
    tracing::debug!("Rejected search request ({error_type})");
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: user_message.to_string(),
            error_type: error_type.to_string(),
        }),
    )
        .into_response()
}

/// Run the web server
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded, the tokio runtime cannot
/// be created, or the server fails to start.
pub fn run(args: ServeArgs, dataset: &Path) -> anyhow::Result<()> {
    let catalog = ReferenceCatalog::load_from_file(dataset)?;
    tracing::info!(
        "Loaded {} catalog rows from {}",
        catalog.len(),
        dataset.display()
    );

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move { run_server(args, catalog).await })
}

/// Routes plus security headers, timeout and concurrency limit.
///
/// Does not include per-IP rate limiting, which needs the peer address that
/// only a real listener provides; see [`create_router`].
pub fn routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/api/search", get(search_handler))
        .route("/api/dataset", get(dataset_handler))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                // Security headers for browser protection
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-content-type-options"),
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-frame-options"),
                    HeaderValue::from_static("DENY"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("referrer-policy"),
                    HeaderValue::from_static("strict-origin-when-cross-origin"),
                ))
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    Duration::from_secs(30),
                ))
                .layer(ConcurrencyLimitLayer::new(100)),
        )
}

/// Create the application router with all routes and middleware configured.
#[allow(clippy::missing_panics_doc)] // Panics only on invalid governor config (constants are valid)
pub fn create_router(catalog: ReferenceCatalog) -> Router {
    let state = Arc::new(AppState { catalog });

    let governor_conf = GovernorConfigBuilder::default()
        .per_second(10) // 10 requests per second per IP
        .burst_size(50)
        .finish()
        .unwrap();

    routes(state).layer(GovernorLayer {
        config: Arc::new(governor_conf),
    })
}

async fn run_server(args: ServeArgs, catalog: ReferenceCatalog) -> anyhow::Result<()> {
    let app = create_router(catalog);

    let addr = format!("{}:{}", args.address, args.port);
    println!("Starting fo-lookup web server at http://{addr}");

    if args.open {
        let _ = open::that(format!("http://{addr}"));
    }

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Main page handler
async fn index_handler() -> Html<&'static str> {
    Html(include_str!("templates/index.html"))
}

/// API endpoint for reference lookups.
///
/// Malformed, excluded and unmatched queries are answered with 200 and a
/// status message; only a missing or oversized query is a client error.
async fn search_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Response {
    let raw = params.q.unwrap_or_default();

    if raw.is_empty() {
        return bad_request(
            "missing_query",
            "Please enter a text string containing a '/'.",
        );
    }

    if raw.len() > MAX_QUERY_LENGTH {
        return bad_request("query_too_long", "Query exceeds maximum length limit");
    }

    let outcome = ReferenceMatcher::new(&state.catalog.table).lookup(&raw);
    Json(outcome.to_json(&raw)).into_response()
}

/// Summary of the loaded catalog
async fn dataset_handler(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!(state.catalog.summary()))
}
