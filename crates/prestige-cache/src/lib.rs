//! # prestige-cache
//!
//! General-purpose expiring cache used for search results and any other
//! memoized lookup.
//!
//! ## Features
//! - Per-entry TTL with lazy eviction on read
//! - Bounded size with insertion-order eviction (oldest inserted goes first, not LRU)
//! - Concurrent get/set/invalidate without a global lock on the read path
//! - Regex-based bulk invalidation
//! - Hit/miss statistics
//! - Injectable [`Clock`] so expiry is testable without sleeping

pub mod clock;
pub mod error;
pub mod keys;
pub mod ttl;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::CacheError;
pub use keys::{CacheKeys, CacheTtl};
pub use ttl::{CacheEntry, CacheStats, TtlCache, DEFAULT_MAX_ENTRIES, DEFAULT_TTL};
