//! HTTP route handlers.

use askama::Template;
use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tracing::{debug, warn};

use crate::domain::{Position, Stop};
use crate::loader::{LoadError, parse_route};
use crate::planner::{PlanError, PlanOutcome, Planner, TripConfig};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/itinerary/plan", post(plan_itinerary))
        .route("/itinerary/plan-file", post(plan_route_file))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with the route form.
async fn index_page(State(state): State<AppState>) -> impl IntoResponse {
    Html(
        IndexTemplate::new(&state.config)
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Plan overnight stops for a route given as JSON.
async fn plan_itinerary(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: PlanItineraryRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!(body = %String::from_utf8_lossy(&body), "Rejected plan request body");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let stops = req.to_stops().map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;
    let config = req.trip.apply(&state.config);

    plan_and_respond(&headers, &config, &stops, req.total_length())
}

/// Plan overnight stops for a route given in the route file format.
async fn plan_route_file(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(trip): Query<TripOverrides>,
    body: String,
) -> Result<Response, AppError> {
    let route = parse_route(&body)?;
    let config = trip.apply(&state.config);

    plan_and_respond(&headers, &config, &route.stops, route.total_length)
}

/// Run the planner and render the outcome as HTML or JSON.
fn plan_and_respond(
    headers: &HeaderMap,
    config: &TripConfig,
    stops: &[Stop],
    total_length: Position,
) -> Result<Response, AppError> {
    let outcome = Planner::new(config).solve(stops, total_length)?;

    debug!(
        found = outcome.is_found(),
        floors_tried = outcome.floors_tried(),
        "Planned itinerary"
    );

    if accepts_html(headers) {
        render_html(&outcome, total_length)
    } else {
        Ok(Json(PlanItineraryResponse::from_outcome(&outcome, total_length)).into_response())
    }
}

fn render_html(outcome: &PlanOutcome, total_length: Position) -> Result<Response, AppError> {
    let template = PlanResultsTemplate {
        plan: PlanView::from_outcome(outcome, total_length.value()),
    };
    let html = template.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;

    Ok(Html(html).into_response())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        match e {
            PlanError::InvalidRequest(message) => AppError::BadRequest { message },
        }
    }
}

impl From<LoadError> for AppError {
    fn from(e: LoadError) -> Self {
        match e {
            LoadError::Io(_) => AppError::Internal {
                message: e.to_string(),
            },
            _ => AppError::BadRequest {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(%status, %message, "Request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
