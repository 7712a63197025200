use super::Bid;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Number;
use utoipa::ToSchema;
use uuid::Uuid;

/// Lifecycle status of a tender. Tenders are created `active` and no
/// operation moves them out of it.
#[derive(Deserialize, Serialize, Debug, ToSchema, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TenderStatus {
    Active,
}

/// Stored form of a tender: bids are referenced by id only and joined from
/// the bid collection when the tender is read.
#[derive(Debug, Clone, PartialEq)]
pub struct TenderRecord {
    pub id: Uuid,
    pub title: Option<String>,
    pub description: Option<String>,
    pub min_bid: Option<Number>,
    pub deadline: Option<String>,
    pub creator_wallet: Option<String>,
    pub status: TenderStatus,
    pub bid_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// A tender as returned to clients, with its bids in placement order.
#[derive(Deserialize, Serialize, Debug, ToSchema, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tender {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<f64>)]
    pub min_bid: Option<Number>,
    /// Free-form deadline, stored as sent (e.g. `2025-01-01`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator_wallet: Option<String>,
    pub status: TenderStatus,
    pub bids: Vec<Bid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize, Serialize, Debug, ToSchema, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewTender {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<f64>)]
    pub min_bid: Option<Number>,
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub creator_wallet: Option<String>,
}

impl TenderRecord {
    pub fn new(input: NewTender, id: Uuid, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: input.title,
            description: input.description,
            min_bid: input.min_bid,
            deadline: input.deadline,
            creator_wallet: input.creator_wallet,
            status: TenderStatus::Active,
            bid_ids: Vec::new(),
            created_at,
        }
    }

    /// Materializes the client view, given the tender's bids in order.
    pub fn to_tender(&self, bids: Vec<Bid>) -> Tender {
        Tender {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            min_bid: self.min_bid.clone(),
            deadline: self.deadline.clone(),
            creator_wallet: self.creator_wallet.clone(),
            status: self.status,
            bids,
            created_at: self.created_at,
        }
    }
}
