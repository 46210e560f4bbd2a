//! JSON HTTP transport for the sentiment service.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET`  | `/` | Service index: name, version, endpoint map |
//! | `GET`  | `/health` | Health check (returns model version) |
//! | `POST` | `/predict` | Classify a batch of 1–10 texts |
//! | `GET`  | `/metrics` | Prometheus-style exposition document |
//!
//! # Error Contract
//!
//! All error responses share one JSON schema:
//!
//! ```json
//! { "error": { "code": "bad_request", "message": "texts must contain at least 1 item" } }
//! ```
//!
//! Batch-shape validation happens here, before the classification core runs;
//! the core itself has no failure modes.
//!
//! # CORS
//!
//! All origins, methods, and headers are permitted to support browser-based
//! clients.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::classify::classify_batch;
use crate::config::Config;
use crate::metrics::MetricsRegistry;
use crate::models::BatchResult;
use crate::scorer::Scorer;

/// Largest batch accepted by `POST /predict` (and the `classify` CLI command).
pub const MAX_BATCH_SIZE: usize = 10;

/// Shared application state passed to all route handlers via Axum's `State`
/// extractor. The metrics registry is created here, once per process, and
/// every handler updates the same instance.
#[derive(Clone)]
pub struct AppState {
    scorer: Arc<Scorer>,
    metrics: Arc<MetricsRegistry>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            scorer: Arc::new(Scorer::from_config(config)),
            metrics: Arc::new(MetricsRegistry::new()),
        }
    }
}

/// Builds the router with all route handlers and the permissive CORS layer.
///
/// Split out from [`run_server`] so tests can serve the router on an
/// ephemeral port.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handle_root))
        .route("/health", get(handle_health))
        .route("/predict", post(handle_predict))
        .route("/metrics", get(handle_metrics))
        .layer(cors)
        .with_state(state)
}

/// Starts the HTTP server.
///
/// Binds to the address configured in `[server].bind` and runs indefinitely
/// until the process is terminated.
pub async fn run_server(config: &Config) -> anyhow::Result<()> {
    let bind_addr = config.server.bind.clone();
    let app = build_router(AppState::new(config));

    log::info!("sentiment server listening on http://{}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============ Error response ============

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

/// Inner error detail with a machine-readable code and human-readable message.
#[derive(Serialize)]
struct ErrorDetail {
    code: String,
    message: String,
}

/// Internal error type that converts into an Axum HTTP response.
struct AppError {
    status: StatusCode,
    code: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code,
                message: self.message,
            },
        };
        (self.status, Json(body)).into_response()
    }
}

/// Constructs a 400 Bad Request error.
fn bad_request(message: impl Into<String>) -> AppError {
    AppError {
        status: StatusCode::BAD_REQUEST,
        code: "bad_request".to_string(),
        message: message.into(),
    }
}

// ============ GET / ============

/// Handler for `GET /`.
///
/// Returns the service name, version, and a map of available endpoints.
async fn handle_root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Sentiment Analysis API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "/health",
            "predict": "/predict",
            "metrics": "/metrics",
        },
    }))
}

// ============ GET /health ============

/// JSON response body for `GET /health`.
#[derive(Serialize)]
struct HealthResponse {
    /// Always `"healthy"` when the server is running.
    status: String,
    is_model_loaded: bool,
    /// The scorer's model version.
    version: String,
}

/// Handler for `GET /health`.
///
/// Used by load balancers and monitoring tools.
async fn handle_health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        is_model_loaded: true,
        version: state.scorer.model_version().to_string(),
    })
}

// ============ POST /predict ============

/// JSON request body for `POST /predict`.
#[derive(Deserialize)]
struct PredictRequest {
    texts: Vec<String>,
}

/// Handler for `POST /predict`.
///
/// Validates the batch shape, runs the classification pipeline, and returns
/// the verdicts in input order. Returns `400` when `texts` is empty or holds
/// more than [`MAX_BATCH_SIZE`] items.
async fn handle_predict(
    State(state): State<AppState>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<BatchResult>, AppError> {
    if request.texts.is_empty() {
        return Err(bad_request("texts must contain at least 1 item"));
    }
    if request.texts.len() > MAX_BATCH_SIZE {
        return Err(bad_request(format!(
            "texts must contain at most {} items",
            MAX_BATCH_SIZE
        )));
    }

    log::info!("received prediction request for {} texts", request.texts.len());

    let result = classify_batch(&state.scorer, &state.metrics, &request.texts);

    log::info!(
        "processed {} predictions in {:.3}s",
        result.count,
        result.processing_time
    );

    Ok(Json(result))
}

// ============ GET /metrics ============

/// Handler for `GET /metrics`.
///
/// Renders the registry's counters as a plain-text exposition document for
/// pull-based collectors.
async fn handle_metrics(State(state): State<AppState>) -> Response {
    (
        [(header::CONTENT_TYPE, "text/plain")],
        state.metrics.render(),
    )
        .into_response()
}
