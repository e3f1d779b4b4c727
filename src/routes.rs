// Route definitions and rejection handling

use crate::auth::{self, Unauthorized};
use crate::config::Config;
use crate::handlers;
use crate::llm::LlmProvider;
use crate::models::ErrorMessage;
use std::convert::Infallible;
use std::sync::Arc;
use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};

/// Application state shared across handlers
pub struct AppState {
    pub provider: Arc<dyn LlmProvider>,
    pub config: Arc<Config>,
}

/// Rejection for an empty or whitespace-only prompt
#[derive(Debug)]
pub struct InvalidPrompt;

impl warp::reject::Reject for InvalidPrompt {}

/// Rejection when the upstream call cannot be opened
#[derive(Debug)]
pub struct UpstreamUnavailable;

impl warp::reject::Reject for UpstreamUnavailable {}

pub fn configure_routes(
    state: Arc<AppState>,
) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    // GET /health
    let health = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .and_then(handlers::health_handler);

    // POST /api/consultation
    // The bearer check runs before the body is touched, so an unauthorized
    // request never reaches the handler or the upstream provider.
    let consultation = warp::path("api")
        .and(warp::path("consultation"))
        .and(warp::path::end())
        .and(warp::post())
        .and(auth::require_bearer(state.config.access_token.clone()))
        .and(with_state(state.clone()))
        .and(warp::body::json())
        .and_then(handlers::consultation_handler);

    // GET / and the rest of the static frontend bundle
    let frontend = warp::get().and(warp::fs::dir(state.config.static_dir.clone()));

    health.or(consultation).or(frontend)
}

fn with_state(
    state: Arc<AppState>,
) -> impl Filter<Extract = (Arc<AppState>,), Error = Infallible> + Clone {
    warp::any().map(move || state.clone())
}

/// Map typed rejections to JSON error bodies
pub async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let (code, message) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "not found")
    } else if err.find::<Unauthorized>().is_some() {
        (StatusCode::UNAUTHORIZED, "unauthorized")
    } else if err.find::<InvalidPrompt>().is_some() {
        (StatusCode::BAD_REQUEST, "prompt must not be empty")
    } else if err.find::<UpstreamUnavailable>().is_some() {
        (StatusCode::BAD_GATEWAY, "upstream unavailable")
    } else if err
        .find::<warp::filters::body::BodyDeserializeError>()
        .is_some()
    {
        (StatusCode::BAD_REQUEST, "invalid request body")
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "method not allowed")
    } else {
        (StatusCode::INTERNAL_SERVER_ERROR, "internal error")
    };

    let json = warp::reply::json(&ErrorMessage {
        code: code.as_u16(),
        message: message.to_string(),
    });

    Ok(warp::reply::with_status(json, code))
}
