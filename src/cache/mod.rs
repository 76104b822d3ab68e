//! Cache Module
//!
//! Time-to-live cache layered over an injected key/value store.

mod clock;
mod entry;
mod store;


// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use store::ExpiringCache;
