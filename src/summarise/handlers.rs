use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use tracing::debug;

use crate::{
    app_state::AppState,
    pipeline::{PageRequest, PipelineError, SummaryResponse},
    summarise::dtos::{ErrorResponse, INVALID_URL, SUMMARISE_FAILED, SummariseRequest},
};

#[utoipa::path(
    post,
    path = "/api/summarise",
    tag = "summarise",
    request_body = SummariseRequest,
    responses(
        (status = 200, description = "Page summarised and translated", body = SummaryResponse),
        (status = 400, description = "Missing or malformed URL", body = ErrorResponse),
        (status = 500, description = "Fetch or storage failure", body = ErrorResponse)
    )
)]
pub async fn summarise(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(body)) => SummariseRequest::from_json(&body),
        Err(rejection) => {
            debug!(error = %rejection, "unreadable request body");
            None
        }
    };
    let Some(request) = request else {
        return bad_request();
    };

    match state.pipeline.handle(PageRequest::new(request.url)).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(PipelineError::InvalidInput(_)) => bad_request(),
        // cause already logged by the pipeline; never echo it back
        Err(PipelineError::FetchFailed(_) | PipelineError::HardPersistFailed) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(SUMMARISE_FAILED)),
        )
            .into_response(),
    }
}

fn bad_request() -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(INVALID_URL))).into_response()
}
