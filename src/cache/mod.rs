//! Page item cache module
//!
//! Provides the cache store abstraction the paginator writes page items
//! through, the key layout used to address and group those entries, and an
//! in-memory store.
//!
//! # Overview
//!
//! - `CacheStore` - load/save/remove plus tag lookup
//! - `ConfigHash` - fingerprint of (adapter identity, page size), used as key
//!   suffix and group tag
//! - `MemoryCacheStore` - in-process store with optional LRU bound

mod keys;
mod memory;
mod types;

pub use keys::{parse_page_key, ConfigHash, CACHE_KEY_PREFIX};
pub use memory::MemoryCacheStore;
pub use types::{CacheStats, CacheStore};

#[cfg(test)]
mod tests;
