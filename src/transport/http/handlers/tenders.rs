use crate::domain::model::{NewTender, Tender};
use crate::transport::http::handlers::common::json_422;
use crate::transport::http::types::{AppState, MessageResponse, TenderResponse, MSG_TENDER_CREATED};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    post,
    path = "/api/tenders",
    request_body = NewTender,
    responses(
        (status = 201, description = "Tender created", body = TenderResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = MessageResponse)
    )
)]
pub async fn create_tender_handler(
    State(state): State<AppState>,
    request: Result<Json<NewTender>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match request {
        Ok(v) => v,
        Err(e) => {
            return json_422(
                e,
                r#"{"title","description","minBid","deadline","creatorWallet"}"#,
            )
            .into_response();
        }
    };

    let tender = state.service.create_tender(request);
    (
        StatusCode::CREATED,
        Json(TenderResponse {
            message: MSG_TENDER_CREATED.to_string(),
            tender,
        }),
    )
        .into_response()
}

#[utoipa::path(
    get,
    path = "/api/tenders",
    responses(
        (status = 200, description = "All tenders in creation order", body = Vec<Tender>)
    )
)]
pub async fn list_tenders_handler(State(state): State<AppState>) -> Json<Vec<Tender>> {
    Json(state.service.list_tenders())
}
