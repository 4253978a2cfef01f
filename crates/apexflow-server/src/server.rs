//! HTTP server implementation using axum.

use std::future::Future;

use apexflow_core::{trending_coins, validate_symbol, TokenInfo, TrendingCoin};
use apexflow_insights::{trending_stories, TrendingStory};
use apexflow_relay::ChatRequest;
use apexflow_telemetry::Metrics;
use axum::extract::{MatchedPath, Path, Request, State};
use axum::http::header;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::cors::cors_layer;
use crate::dispatch::{dispatch, parse_prompt, AssistantReply};
use crate::error::ServerResult;
use crate::state::AppState;

/// Routes listed by the index endpoint.
const ENDPOINTS: [&str; 8] = [
    "GET /health",
    "POST /api/chat",
    "POST /api/assistant",
    "POST /api/automations/parse",
    "GET /api/tokens/{symbol}",
    "GET /api/trending",
    "GET /api/stories",
    "GET /metrics",
];

#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub automation: Option<apexflow_core::AutomationDetails>,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub listed: bool,
    pub token: TokenInfo,
}

/// Create the axum router.
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(state.config());

    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/chat", post(chat))
        .route("/api/assistant", post(assistant))
        .route("/api/automations/parse", post(parse_automation))
        .route("/api/tokens/{symbol}", get(token))
        .route("/api/trending", get(trending))
        .route("/api/stories", get(stories))
        .route("/metrics", get(metrics))
        .route_layer(middleware::from_fn(track_requests))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Count requests per matched route.
async fn track_requests(req: Request, next: Next) -> Response {
    if let Some(path) = req.extensions().get::<MatchedPath>() {
        Metrics::http_request(path.as_str());
    }
    next.run(req).await
}

async fn index() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "ApexFlow API Server",
        "endpoints": ENDPOINTS,
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "Server is running",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// Relay pass-through: upstream JSON on success, classified error otherwise.
async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> ServerResult<Json<Value>> {
    let data = state.relay().forward(&request).await?;
    Ok(Json(data))
}

async fn assistant(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Json<AssistantReply> {
    Json(dispatch(&state, &request).await)
}

async fn parse_automation(
    State(state): State<AppState>,
    Json(request): Json<ParseRequest>,
) -> Json<ParseResponse> {
    Json(ParseResponse {
        automation: parse_prompt(&state, &request.prompt),
    })
}

async fn token(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> ServerResult<Json<TokenResponse>> {
    let symbol = validate_symbol(&symbol)?;
    let tokens = state.tokens();
    Ok(Json(TokenResponse {
        listed: tokens.is_listed(&symbol),
        token: tokens.token_info(&symbol),
    }))
}

async fn trending() -> Json<&'static [TrendingCoin]> {
    Json(trending_coins())
}

async fn stories() -> Json<Vec<TrendingStory>> {
    Json(trending_stories(&mut rand::thread_rng(), Utc::now()))
}

async fn metrics() -> ServerResult<Response> {
    let body = Metrics::gather_text()?;
    Ok(([(header::CONTENT_TYPE, Metrics::content_type())], body).into_response())
}

/// Serve the API until `shutdown` resolves.
pub async fn run_server<F>(state: AppState, shutdown: F) -> ServerResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = state.config().bind_addr();
    let environment = state.config().environment;
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, environment = %environment, "Starting API server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("API server stopped");
    Ok(())
}
