use axum::{
    Router,
    http::HeaderName,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    app_state::AppState,
    health::{self, HealthResponse, health_check},
    pipeline::SummaryResponse,
    summarise::{
        self,
        dtos::{ErrorResponse, SummariseRequest},
    },
};

const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(OpenApi)]
#[openapi(
    paths(summarise::handlers::summarise, health::health_check),
    components(schemas(SummariseRequest, SummaryResponse, ErrorResponse, HealthResponse)),
    tags(
        (name = "summarise", description = "Summarise a web page and translate the summary to Urdu"),
        (name = "health", description = "Liveness and store reachability")
    )
)]
pub struct ApiDoc;

pub fn router(state: AppState) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        .route("/api/summarise", post(summarise::summarise))
        .route("/healthz", get(health_check))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::new(request_id)),
        )
        .with_state(state)
}
