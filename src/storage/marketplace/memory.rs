//! Process-local store. Nothing survives a restart.

use super::{MarketplaceStore, StoreStats};
use crate::domain::model::{Bid, Credentials, Tender, TenderRecord, User};
use crate::domain::MarketplaceError;
use indexmap::IndexMap;
use parking_lot::RwLock;
use uuid::Uuid;

#[derive(Default)]
struct Collections {
    users: Vec<User>,
    tenders: IndexMap<Uuid, TenderRecord>,
    bids: IndexMap<Uuid, Bid>,
}

impl Collections {
    fn join(&self, record: &TenderRecord) -> Tender {
        let bids = record
            .bid_ids
            .iter()
            .filter_map(|id| self.bids.get(id).cloned())
            .collect();
        record.to_tender(bids)
    }
}

/// In-memory implementation of [`MarketplaceStore`].
///
/// All three collections sit behind one lock, held only for the duration of
/// a single method call.
#[derive(Default)]
pub struct InMemoryStore {
    inner: RwLock<Collections>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MarketplaceStore for InMemoryStore {
    fn insert_user(&self, user: User) -> Result<User, MarketplaceError> {
        let mut inner = self.inner.write();
        if inner.users.iter().any(|u| u.email == user.email) {
            return Err(MarketplaceError::Conflict);
        }
        inner.users.push(user.clone());
        Ok(user)
    }

    fn find_user(&self, credentials: &Credentials) -> Option<User> {
        self.inner
            .read()
            .users
            .iter()
            .find(|u| u.matches(credentials))
            .cloned()
    }

    fn users(&self) -> Vec<User> {
        self.inner.read().users.clone()
    }

    fn insert_tender(&self, tender: TenderRecord) -> Tender {
        let mut inner = self.inner.write();
        let view = inner.join(&tender);
        inner.tenders.insert(tender.id, tender);
        view
    }

    fn tenders(&self) -> Vec<Tender> {
        let inner = self.inner.read();
        inner.tenders.values().map(|t| inner.join(t)).collect()
    }

    fn insert_bid(&self, bid: Bid) -> Bid {
        let mut inner = self.inner.write();
        if let Some(tender) = bid.tender_key().and_then(|key| inner.tenders.get_mut(&key)) {
            tender.bid_ids.push(bid.id);
        }
        inner.bids.insert(bid.id, bid.clone());
        bid
    }

    fn bids_for_tender(&self, tender_id: &str) -> Vec<Bid> {
        self.inner
            .read()
            .bids
            .values()
            .filter(|b| b.is_for_tender(tender_id))
            .cloned()
            .collect()
    }

    fn stats(&self) -> StoreStats {
        let inner = self.inner.read();
        StoreStats {
            users: inner.users.len(),
            tenders: inner.tenders.len(),
            bids: inner.bids.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{NewBid, NewTender, NewUser};
    use chrono::Utc;

    fn user(email: &str, wallet: &str) -> User {
        User::new(
            NewUser {
                name: Some("Alice".to_string()),
                email: Some(email.to_string()),
                wallet_address: Some(wallet.to_string()),
                role: None,
            },
            Uuid::new_v4(),
            Utc::now(),
        )
    }

    fn bid_for(tender_id: &str) -> Bid {
        Bid::new(
            NewBid {
                tender_id: Some(tender_id.to_string()),
                bidder_wallet: Some("addr2".to_string()),
                amount: Some(150.into()),
                tx_hash: Some("tx123".to_string()),
            },
            Uuid::new_v4(),
            Utc::now(),
        )
    }

    #[test]
    fn duplicate_email_is_rejected_once_stored() {
        let store = InMemoryStore::new();
        store.insert_user(user("a@x.com", "addr1")).unwrap();
        let err = store.insert_user(user("a@x.com", "addr9")).unwrap_err();
        assert_eq!(err, MarketplaceError::Conflict);
        assert_eq!(store.stats().users, 1);
    }

    #[test]
    fn same_wallet_different_email_is_allowed() {
        let store = InMemoryStore::new();
        store.insert_user(user("a@x.com", "addr1")).unwrap();
        store.insert_user(user("b@x.com", "addr1")).unwrap();
        assert_eq!(store.users().len(), 2);
    }

    #[test]
    fn bid_is_linked_to_existing_tender_without_copying() {
        let store = InMemoryStore::new();
        let tender = store.insert_tender(TenderRecord::new(NewTender::default(), Uuid::new_v4(), Utc::now()));
        let placed = store.insert_bid(bid_for(&tender.id.to_string()));

        let tenders = store.tenders();
        assert_eq!(tenders[0].bids, vec![placed.clone()]);
        assert_eq!(store.bids_for_tender(&tender.id.to_string()), vec![placed]);
        assert_eq!(store.stats().bids, 1);
    }

    #[test]
    fn bid_for_unknown_tender_is_still_stored() {
        let store = InMemoryStore::new();
        let placed = store.insert_bid(bid_for("no-such-tender"));
        assert_eq!(store.bids_for_tender("no-such-tender"), vec![placed]);
        assert!(store.bids_for_tender("other").is_empty());
    }

    #[test]
    fn tenders_keep_creation_order() {
        let store = InMemoryStore::new();
        let ids: Vec<Uuid> = (0..3)
            .map(|_| {
                store
                    .insert_tender(TenderRecord::new(NewTender::default(), Uuid::new_v4(), Utc::now()))
                    .id
            })
            .collect();
        let listed: Vec<Uuid> = store.tenders().iter().map(|t| t.id).collect();
        assert_eq!(listed, ids);
    }

    #[test]
    fn concurrent_registrations_admit_one_user_per_email() {
        let store = InMemoryStore::new();
        let accepted: usize = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|i| {
                    let store = &store;
                    scope.spawn(move || store.insert_user(user("a@x.com", &format!("addr{i}"))).is_ok())
                })
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap() as usize)
                .sum()
        });
        assert_eq!(accepted, 1);
        assert_eq!(store.stats().users, 1);
    }

    #[test]
    fn non_canonical_tender_id_is_not_linked() {
        let store = InMemoryStore::new();
        let tender = store.insert_tender(TenderRecord::new(NewTender::default(), Uuid::new_v4(), Utc::now()));
        let canonical = tender.id.to_string();
        let spellings = [
            canonical.to_uppercase(),
            tender.id.simple().to_string(),
            format!("{{{}}}", canonical),
            format!("urn:uuid:{}", canonical),
        ];
        for spelling in &spellings {
            store.insert_bid(bid_for(spelling));
        }

        assert!(store.tenders()[0].bids.is_empty());
        assert!(store.bids_for_tender(&canonical).is_empty());
        for spelling in &spellings {
            assert_eq!(store.bids_for_tender(spelling).len(), 1);
        }
    }
}
