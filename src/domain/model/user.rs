use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Role a user registers with.
#[derive(Deserialize, Serialize, Debug, ToSchema, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Government,
    Bidder,
}

/// A registered marketplace participant.
#[derive(Deserialize, Serialize, Debug, ToSchema, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Uniqueness key for registration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    pub created_at: DateTime<Utc>,
}

/// Registration input.
#[derive(Deserialize, Serialize, Debug, ToSchema, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub wallet_address: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
}

/// Login input. Both fields must match a stored user exactly.
#[derive(Deserialize, Serialize, Debug, ToSchema, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub wallet_address: Option<String>,
}

impl User {
    pub fn new(input: NewUser, id: Uuid, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: input.name,
            email: input.email,
            wallet_address: input.wallet_address,
            role: input.role,
            created_at,
        }
    }

    /// Exact match on both login fields; two absent values compare equal.
    pub fn matches(&self, credentials: &Credentials) -> bool {
        self.email == credentials.email && self.wallet_address == credentials.wallet_address
    }
}
