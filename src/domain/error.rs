use thiserror::Error;

/// Failures surfaced by marketplace operations.
///
/// Only registration and login can fail; every other operation succeeds
/// regardless of missing relations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarketplaceError {
    #[error("User already exists")]
    Conflict,

    #[error("Invalid credentials")]
    Unauthorized,
}
