use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Number;
use utoipa::ToSchema;
use uuid::Uuid;

/// An offer against a tender.
///
/// `tender_id` is kept as sent: it is not required to resolve to a tender.
#[derive(Deserialize, Serialize, Debug, ToSchema, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bid {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tender_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bidder_wallet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<f64>)]
    pub amount: Option<Number>,
    /// Reference to the ledger transaction backing the bid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_hash: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize, Serialize, Debug, ToSchema, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewBid {
    #[serde(default)]
    pub tender_id: Option<String>,
    #[serde(default)]
    pub bidder_wallet: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<f64>)]
    pub amount: Option<Number>,
    #[serde(default)]
    pub tx_hash: Option<String>,
}

impl Bid {
    pub fn new(input: NewBid, id: Uuid, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            tender_id: input.tender_id,
            bidder_wallet: input.bidder_wallet,
            amount: input.amount,
            tx_hash: input.tx_hash,
            created_at,
        }
    }

    pub fn is_for_tender(&self, tender_id: &str) -> bool {
        self.tender_id.as_deref() == Some(tender_id)
    }

    /// Tender id as a key, only when it is spelled exactly as a tender id is
    /// rendered. Must agree with [`Bid::is_for_tender`].
    pub fn tender_key(&self) -> Option<Uuid> {
        let raw = self.tender_id.as_deref()?;
        Uuid::parse_str(raw)
            .ok()
            .filter(|id| id.to_string() == raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bid_for(tender_id: &str) -> Bid {
        Bid::new(
            NewBid {
                tender_id: Some(tender_id.to_string()),
                ..NewBid::default()
            },
            Uuid::new_v4(),
            Utc::now(),
        )
    }

    #[test]
    fn tender_key_accepts_only_the_rendered_form() {
        let id = Uuid::new_v4();
        assert_eq!(bid_for(&id.to_string()).tender_key(), Some(id));
        assert_eq!(bid_for(&id.to_string().to_uppercase()).tender_key(), None);
        assert_eq!(bid_for(&id.simple().to_string()).tender_key(), None);
        assert_eq!(bid_for("road-1").tender_key(), None);
    }
}
