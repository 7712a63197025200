pub mod router;
pub mod types;
pub mod handlers {
    pub mod bids;
    pub mod common;
    pub mod health;
    pub mod tenders;
    pub mod users;
}

pub use router::{create_router, ApiDoc};
pub use types::AppState;
