//! Cache Module
//!
//! In-memory store with a fixed time-to-live. Staleness is checked lazily on
//! read; there is no background sweep.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::TtlCache;
