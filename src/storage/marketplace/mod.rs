//! Storage seam for the user, tender and bid collections.

use crate::domain::model::{Bid, Credentials, Tender, TenderRecord, User};
use crate::domain::MarketplaceError;
use serde::Serialize;

pub mod memory;

pub use memory::InMemoryStore;

/// Collection sizes, reported by the health probe.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoreStats {
    pub users: usize,
    pub tenders: usize,
    pub bids: usize,
}

/// Contract for any backing store of the marketplace collections.
///
/// Each method is a single atomic step: implementations must not let another
/// writer interleave between the checks and the writes a method performs.
pub trait MarketplaceStore: Send + Sync {
    /// Appends `user` unless a stored user has the same email.
    fn insert_user(&self, user: User) -> Result<User, MarketplaceError>;

    /// First stored user matching both login fields exactly.
    fn find_user(&self, credentials: &Credentials) -> Option<User>;

    /// All users in registration order.
    fn users(&self) -> Vec<User>;

    fn insert_tender(&self, tender: TenderRecord) -> Tender;

    /// All tenders in creation order, joined with their bids.
    fn tenders(&self) -> Vec<Tender>;

    /// Appends `bid` to the bid collection and links it to its tender when
    /// `bid.tender_id` names a stored tender.
    fn insert_bid(&self, bid: Bid) -> Bid;

    /// Bids whose `tender_id` equals `tender_id`, in placement order.
    fn bids_for_tender(&self, tender_id: &str) -> Vec<Bid>;

    fn stats(&self) -> StoreStats;
}
