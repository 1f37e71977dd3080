//! HTTP surface of the planner: `POST /api/planner` and error-to-response mapping

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::post,
};
use serde::Serialize;
use tracing::{debug, error};

use crate::{
    error::PlannerError,
    models::{PlannerRequest, PlannerResponse},
    planner::PlannerService,
};

/// Body of a 400 response
#[derive(Serialize)]
struct ValidationErrorBody {
    errors: Vec<String>,
}

/// Body of a 500 response; never carries the underlying cause
#[derive(Serialize)]
struct InternalErrorBody {
    error: String,
}

impl IntoResponse for PlannerError {
    fn into_response(self) -> Response {
        match self {
            PlannerError::Validation { messages } => (
                StatusCode::BAD_REQUEST,
                Json(ValidationErrorBody { errors: messages }),
            )
                .into_response(),
            other => {
                error!("Planner request failed: {}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(InternalErrorBody {
                        error: other.user_message(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

#[derive(Clone)]
struct ApiState {
    service: Arc<PlannerService>,
    request_timeout: Duration,
}

/// Planner routes; every request must finish within `request_timeout`
pub fn router(service: Arc<PlannerService>, request_timeout: Duration) -> Router {
    Router::new()
        .route("/planner", post(plan_trip))
        .with_state(ApiState {
            service,
            request_timeout,
        })
}

async fn plan_trip(
    State(state): State<ApiState>,
    payload: Result<Json<PlannerRequest>, JsonRejection>,
) -> Result<Json<PlannerResponse>, PlannerError> {
    let Json(request) = payload.map_err(reject_body)?;
    let response = tokio::time::timeout(state.request_timeout, state.service.plan(&request))
        .await
        .map_err(|_| PlannerError::Timeout {
            seconds: state.request_timeout.as_secs(),
        })??;
    Ok(Json(response))
}

fn reject_body(rejection: JsonRejection) -> PlannerError {
    debug!("Rejected planner body: {}", rejection.body_text());
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return PlannerError::validation("Request body is too large");
    }
    match rejection {
        JsonRejection::JsonDataError(e) => PlannerError::validation(e.body_text()),
        JsonRejection::MissingJsonContentType(_) => {
            PlannerError::validation("Expected request with `Content-Type: application/json`")
        }
        _ => PlannerError::validation("Request body must be a JSON object"),
    }
}
