pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::marketplace_service::MarketplaceService;
pub use domain::model::{Bid, Role, Tender, TenderStatus, User};
pub use domain::MarketplaceError;
pub use storage::{InMemoryStore, MarketplaceStore};
