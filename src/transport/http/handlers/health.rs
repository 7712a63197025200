use crate::transport::http::types::{AppState, HealthResponse};
use axum::extract::State;
use axum::Json;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up; reports collection sizes", body = HealthResponse)
    )
)]
pub async fn healthcheck_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let stats = state.service.stats();
    Json(HealthResponse {
        status: "ok".to_string(),
        users: stats.users,
        tenders: stats.tenders,
        bids: stats.bids,
    })
}
