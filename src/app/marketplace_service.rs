//! The marketplace service.
//!
//! Implements the six operations behind the HTTP API: registration, login,
//! tender creation and listing, bid placement and per-tender bid listing.
//! Operations are synchronous and never hold the store across an `.await`.
//! The service mints identifiers and timestamps; the store only keeps records.

use crate::domain::model::{Bid, Credentials, NewBid, NewTender, NewUser, Tender, TenderRecord, User};
use crate::domain::MarketplaceError;
use crate::storage::{InMemoryStore, MarketplaceStore, StoreStats};
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct MarketplaceService {
    store: Arc<dyn MarketplaceStore>,
}

impl MarketplaceService {
    pub fn new(store: Arc<dyn MarketplaceStore>) -> Self {
        Self { store }
    }

    /// A service over a fresh, empty in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryStore::new()))
    }

    pub fn register(&self, input: NewUser) -> Result<User, MarketplaceError> {
        let user = User::new(input, Uuid::new_v4(), Utc::now());
        match self.store.insert_user(user) {
            Ok(user) => {
                info!(user_id = %user.id, role = ?user.role, "user registered");
                Ok(user)
            }
            Err(e) => {
                warn!(error = %e, "registration rejected");
                Err(e)
            }
        }
    }

    pub fn login(&self, credentials: Credentials) -> Result<User, MarketplaceError> {
        match self.store.find_user(&credentials) {
            Some(user) => {
                info!(user_id = %user.id, "user logged in");
                Ok(user)
            }
            None => {
                warn!("login rejected");
                Err(MarketplaceError::Unauthorized)
            }
        }
    }

    /// Creates an `active` tender. The creator wallet is not checked against
    /// registered users.
    pub fn create_tender(&self, input: NewTender) -> Tender {
        let tender = self
            .store
            .insert_tender(TenderRecord::new(input, Uuid::new_v4(), Utc::now()));
        info!(
            tender_id = %tender.id,
            creator_wallet = tender.creator_wallet.as_deref().unwrap_or_default(),
            "tender created"
        );
        tender
    }

    pub fn list_tenders(&self) -> Vec<Tender> {
        self.store.tenders()
    }

    /// Records a bid. Succeeds whether or not `tender_id` names a tender, and
    /// applies no status, minimum-bid or bidder checks.
    pub fn place_bid(&self, input: NewBid) -> Bid {
        let bid = self
            .store
            .insert_bid(Bid::new(input, Uuid::new_v4(), Utc::now()));
        info!(
            bid_id = %bid.id,
            tender_id = bid.tender_id.as_deref().unwrap_or_default(),
            bidder_wallet = bid.bidder_wallet.as_deref().unwrap_or_default(),
            "bid placed"
        );
        bid
    }

    /// Empty when no bid names `tender_id`, including when no such tender exists.
    pub fn list_bids_for_tender(&self, tender_id: &str) -> Vec<Bid> {
        self.store.bids_for_tender(tender_id)
    }

    pub fn users(&self) -> Vec<User> {
        self.store.users()
    }

    pub fn stats(&self) -> StoreStats {
        self.store.stats()
    }
}

impl Default for MarketplaceService {
    fn default() -> Self {
        Self::in_memory()
    }
}
