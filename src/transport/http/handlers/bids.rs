use crate::domain::model::{Bid, NewBid};
use crate::transport::http::handlers::common::json_422;
use crate::transport::http::types::{AppState, BidResponse, MessageResponse, MSG_BID_PLACED};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    post,
    path = "/api/bids",
    request_body = NewBid,
    responses(
        (status = 201, description = "Bid placed (the tender id is not required to exist)", body = BidResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = MessageResponse)
    )
)]
pub async fn place_bid_handler(
    State(state): State<AppState>,
    request: Result<Json<NewBid>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match request {
        Ok(v) => v,
        Err(e) => {
            return json_422(e, r#"{"tenderId","bidderWallet","amount","txHash"}"#)
                .into_response();
        }
    };

    let bid = state.service.place_bid(request);
    (
        StatusCode::CREATED,
        Json(BidResponse {
            message: MSG_BID_PLACED.to_string(),
            bid,
        }),
    )
        .into_response()
}

#[utoipa::path(
    get,
    path = "/api/bids/{tender_id}",
    params(
        ("tender_id" = String, Path, description = "Tender id the bids were placed against")
    ),
    responses(
        (status = 200, description = "Bids for the tender in placement order (empty if none)", body = Vec<Bid>)
    )
)]
pub async fn list_bids_handler(
    State(state): State<AppState>,
    Path(tender_id): Path<String>,
) -> Json<Vec<Bid>> {
    Json(state.service.list_bids_for_tender(&tender_id))
}
