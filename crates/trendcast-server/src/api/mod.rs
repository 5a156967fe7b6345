use std::any::Any;
use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Extension, Json, Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use trendcast_agent::{build_agent_response, AgentError, Pipeline};

use crate::middleware::{request_id, RequestId, REQUEST_ID_HEADER};

const NO_TOPICS_MESSAGE: &str = "No topics available. Try again shortly.";
const GENERATION_FAILED_MESSAGE: &str = "Agent generation failed. Please retry later.";

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<Pipeline>,
}

/// Error body served by `/api/agent`: `{"error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    status: StatusCode,
    error: &'static str,
}

impl ApiError {
    fn no_topics() -> Self {
        Self {
            status: StatusCode::SERVICE_UNAVAILABLE,
            error: NO_TOPICS_MESSAGE,
        }
    }

    fn generation_failed() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: GENERATION_FAILED_MESSAGE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    feeds: usize,
}

fn map_agent_error(request_id: &str, error: &AgentError) -> ApiError {
    match error {
        AgentError::NoDataAvailable => {
            tracing::info!(request_id, "no trending topics available");
            ApiError::no_topics()
        }
        AgentError::SynthesisDefect { .. } => {
            tracing::error!(request_id, error = %error, "agent generation failed");
            ApiError::generation_failed()
        }
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static(REQUEST_ID_HEADER)])
}

/// Panics inside a handler become the same 500 body as any other failure.
fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<&str>()
        .map(ToString::to_string)
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_default();
    tracing::error!(panic = %detail, "request handler panicked");
    ApiError::generation_failed().into_response()
}

fn with_service_layers(router: Router) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(build_cors())
            .layer(axum::middleware::from_fn(request_id))
            .layer(CatchPanicLayer::custom(panic_response)),
    )
}

pub fn build_app(state: AppState) -> Router {
    let routes = Router::new()
        .route("/api/agent", get(agent))
        .route("/api/health", get(health))
        .with_state(state);
    with_service_layers(routes)
}

async fn agent(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Response {
    let topics = state.pipeline.fetch_trending_topics().await;

    match build_agent_response(&topics) {
        Ok(payload) => {
            tracing::info!(
                request_id = %req_id.0,
                topics = payload.topics.len(),
                "generated agent response"
            );
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(e) => map_agent_error(&req_id.0, &e).into_response(),
    }
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthData {
        status: "ok",
        feeds: state.pipeline.feed_count(),
    })
}
