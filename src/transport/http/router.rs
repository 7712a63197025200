use crate::domain::model::{
    Bid, Credentials, NewBid, NewTender, NewUser, Role, Tender, TenderStatus, User,
};
use crate::transport::http::handlers::{bids, health, tenders, users};
use crate::transport::http::types::{
    BidResponse, HealthResponse, MessageResponse, TenderResponse, UserResponse,
};
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        users::register_handler,
        users::login_handler,
        tenders::create_tender_handler,
        tenders::list_tenders_handler,
        bids::place_bid_handler,
        bids::list_bids_handler
    ),
    components(schemas(
        User,
        Role,
        NewUser,
        Credentials,
        Tender,
        TenderStatus,
        NewTender,
        Bid,
        NewBid,
        UserResponse,
        TenderResponse,
        BidResponse,
        MessageResponse,
        HealthResponse
    ))
)]
pub struct ApiDoc;

pub fn create_router(app_state: crate::transport::http::types::AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route("/api/register", post(users::register_handler))
        .route("/api/login", post(users::login_handler))
        .route(
            "/api/tenders",
            post(tenders::create_tender_handler).get(tenders::list_tenders_handler),
        )
        .route("/api/bids", post(bids::place_bid_handler))
        .route("/api/bids/:tender_id", get(bids::list_bids_handler))
        .with_state(app_state)
}
