use crate::app::marketplace_service::MarketplaceService;
use crate::domain::model::{Bid, Tender, User};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub service: MarketplaceService,
}

impl AppState {
    pub fn new(service: MarketplaceService) -> Self {
        Self { service }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(MarketplaceService::in_memory())
    }
}

/// Body of every failed request.
#[derive(Deserialize, Serialize, Debug, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Deserialize, Serialize, Debug, ToSchema)]
pub struct UserResponse {
    pub message: String,
    pub user: User,
}

#[derive(Deserialize, Serialize, Debug, ToSchema)]
pub struct TenderResponse {
    pub message: String,
    pub tender: Tender,
}

#[derive(Deserialize, Serialize, Debug, ToSchema)]
pub struct BidResponse {
    pub message: String,
    pub bid: Bid,
}

#[derive(Deserialize, Serialize, Debug, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub users: usize,
    pub tenders: usize,
    pub bids: usize,
}

pub const MSG_USER_REGISTERED: &str = "User registered successfully";
pub const MSG_LOGIN_OK: &str = "Login successful";
pub const MSG_TENDER_CREATED: &str = "Tender created";
pub const MSG_BID_PLACED: &str = "Bid placed";
