use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::app_state::AppState;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    status: String,
    raw_store: String,
    result_store: String,
}

/// The raw-text store is a hard dependency and decides the status code; the
/// result store is only reported.
#[utoipa::path(
    get,
    path = "/healthz",
    tag = "health",
    responses(
        (status = 200, description = "Health check successful", body = HealthResponse),
        (status = 503, description = "Raw-text store unavailable")
    )
)]
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, StatusCode> {
    let writer = state.pipeline.writer();
    let (raw, result) = tokio::join!(writer.raw_store().ping(), writer.result_store().ping());

    if let Err(err) = raw {
        error!(error = %err, "raw-text store health check failed");
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    }

    let result_store = match result {
        Ok(()) => "healthy",
        Err(err) => {
            warn!(error = %err, "result store health check failed");
            "degraded"
        }
    };

    info!(result_store, "Health check passed");
    Ok(Json(HealthResponse {
        status: "OK".to_string(),
        raw_store: "healthy".to_string(),
        result_store: result_store.to_string(),
    }))
}
