//! Paginator builder

use super::engine::Paginator;
use crate::adapter::Adapter;
use crate::config::PaginatorConfig;
use crate::error::{Error, Result};
use std::sync::Arc;

/// Step-by-step construction of a [`Paginator`]
#[derive(Debug)]
pub struct PaginatorBuilder<A> {
    adapter: Option<Arc<A>>,
    config: Option<Arc<PaginatorConfig>>,
    item_count_per_page: Option<i64>,
    page_range: Option<usize>,
    current_page_number: Option<i64>,
    cache_enabled: bool,
}

impl<A> Default for PaginatorBuilder<A> {
    fn default() -> Self {
        Self {
            adapter: None,
            config: None,
            item_count_per_page: None,
            page_range: None,
            current_page_number: None,
            cache_enabled: true,
        }
    }
}

impl<A: Adapter> PaginatorBuilder<A> {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the data source (required)
    #[must_use]
    pub fn adapter(mut self, adapter: Arc<A>) -> Self {
        self.adapter = Some(adapter);
        self
    }

    /// Set the shared defaults
    #[must_use]
    pub fn config(mut self, config: Arc<PaginatorConfig>) -> Self {
        self.config = Some(config);
        self
    }

    /// Override the page size (below 1 means a single page)
    #[must_use]
    pub fn item_count_per_page(mut self, count: i64) -> Self {
        self.item_count_per_page = Some(count);
        self
    }

    /// Override the page range
    #[must_use]
    pub fn page_range(mut self, page_range: usize) -> Self {
        self.page_range = Some(page_range);
        self
    }

    /// Set the starting page
    #[must_use]
    pub fn current_page_number(mut self, page_number: i64) -> Self {
        self.current_page_number = Some(page_number);
        self
    }

    /// Turn caching on or off for the paginator
    #[must_use]
    pub fn cache_enabled(mut self, enabled: bool) -> Self {
        self.cache_enabled = enabled;
        self
    }

    /// Build the paginator
    pub fn build(self) -> Result<Paginator<A>> {
        let adapter = self
            .adapter
            .ok_or_else(|| Error::invalid_config("Paginator requires an adapter"))?;
        if self.page_range == Some(0) {
            return Err(Error::invalid_value("page_range", "must be at least 1"));
        }

        let mut paginator = Paginator::with_config(adapter, self.config.unwrap_or_default())?;
        paginator.set_cache_enabled(self.cache_enabled);
        if let Some(count) = self.item_count_per_page {
            paginator.set_item_count_per_page(count);
        }
        if let Some(page_range) = self.page_range {
            paginator.set_page_range(page_range);
        }
        if let Some(page_number) = self.current_page_number {
            paginator.set_current_page_number(page_number);
        }

        Ok(paginator)
    }
}
