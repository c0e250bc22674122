//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::planner::{PlanError, plan_route};

use super::dto::*;
use super::state::AppState;

/// Message returned when either address fails to resolve.
const UNRESOLVED_MESSAGE: &str = "Unable to geocode one or both addresses";

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/route", post(find_route))
        .route("/metro-stations", get(list_stations))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

async fn index() -> Json<StatusResponse> {
    Json(StatusResponse {
        message: "Backend running!".to_string(),
    })
}

/// Every station in the network, in dataset order.
async fn list_stations(State(state): State<AppState>) -> Json<Vec<StationResult>> {
    Json(
        state
            .graph
            .stations()
            .iter()
            .map(StationResult::from_station)
            .collect(),
    )
}

/// Plan a route between two addresses.
async fn find_route(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PlanRouteResponse>, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: PlanRouteRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(&body), "invalid route request");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let plan = plan_route(
        state.geocoder.as_ref(),
        &state.graph,
        &state.config,
        &req.from,
        &req.to,
    )
    .await?;

    Ok(Json(PlanRouteResponse::from_plan(&plan)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    BadGateway { message: String },
    Internal { message: String },
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        match e {
            PlanError::InvalidRequest(message) => AppError::BadRequest { message },
            PlanError::Unresolved { addresses } => {
                warn!(?addresses, "geocoding found no match");
                AppError::BadRequest {
                    message: UNRESOLVED_MESSAGE.to_string(),
                }
            }
            PlanError::Geocoder(e) => {
                error!(error = %e, "geocoder failed");
                AppError::BadGateway {
                    message: "Geocoding failed".to_string(),
                }
            }
            PlanError::NoRouteFound => AppError::NotFound {
                message: e.to_string(),
            },
            PlanError::UnknownStation(_) => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::BadGateway { message } => (StatusCode::BAD_GATEWAY, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse {
            success: false,
            error: message,
        });
        (status, body).into_response()
    }
}
