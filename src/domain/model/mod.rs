//! Domain model for the tender marketplace.
//!
//! Records are created once and never mutated, except for the bid links a
//! tender accumulates. Every attribute that comes from a request body is
//! optional: an absent input yields an absent attribute.

pub mod bid;
pub mod tender;
pub mod user;

pub use bid::{Bid, NewBid};
pub use tender::{NewTender, Tender, TenderRecord, TenderStatus};
pub use user::{Credentials, NewUser, Role, User};
