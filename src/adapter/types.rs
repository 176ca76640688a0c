//! Adapter trait
//!
//! An adapter is the data source behind a paginator: it knows how many
//! items exist and can fetch a contiguous slice of them.

use crate::error::Result;

/// Ordered, countable data source
pub trait Adapter {
    /// Item type produced by this source
    type Item;

    /// Stable identity of the underlying collection
    ///
    /// Two adapters over the same data (e.g. the same query with the same
    /// parameters) must report the same identity, including across
    /// processes, so that cached pages can be shared between them. It is
    /// part of every cache key this adapter's pages are stored under.
    fn identity(&self) -> String;

    /// Total number of items
    ///
    /// Called whenever a paginator needs the total; adapters backed by an
    /// expensive count should memoize it.
    fn count(&self) -> usize;

    /// Fetch up to `limit` items starting at the zero-based `offset`
    fn items(&self, offset: usize, limit: usize) -> Result<Vec<Self::Item>>;
}
