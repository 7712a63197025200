pub mod marketplace;

pub use marketplace::{InMemoryStore, MarketplaceStore, StoreStats};
