//! Paginator configuration
//!
//! A `PaginatorConfig` carries the defaults every paginator falls back to
//! (page size, page range, scrolling style) and the optional cache store.
//! It is built once at startup, usually from a YAML or JSON file, and shared
//! as `Arc<PaginatorConfig>`; per-paginator setters shadow its values.

use crate::cache::{CacheStore, MemoryCacheStore};
use crate::error::{Error, Result};
use crate::window::ScrollingStyle;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Default number of items per page
pub const DEFAULT_ITEM_COUNT_PER_PAGE: usize = 10;

/// Default number of page numbers shown in a navigation window
pub const DEFAULT_PAGE_RANGE: usize = 10;

// ============================================================================
// Cache Settings
// ============================================================================

/// What to do when the cache store fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheErrorPolicy {
    /// Log the failure and fall back to the adapter
    #[default]
    TreatAsMiss,
    /// Return the failure to the caller as `Error::Cache`
    Propagate,
}

/// Cache section of the configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheSettings {
    /// Whether page items are cached at all
    #[serde(default)]
    pub enabled: bool,

    /// Entry bound for the in-memory store created from a config file
    #[serde(default)]
    pub capacity: Option<usize>,

    /// Handling of cache store failures during page lookups
    #[serde(default)]
    pub error_policy: CacheErrorPolicy,
}

// ============================================================================
// Paginator Config
// ============================================================================

/// Defaults shared by paginators
#[derive(Clone, Serialize, Deserialize)]
pub struct PaginatorConfig {
    /// Items per page when a paginator sets none
    #[serde(default = "default_item_count_per_page")]
    pub item_count_per_page: usize,

    /// Window width when a paginator sets none
    #[serde(default = "default_page_range")]
    pub page_range: usize,

    /// Window strategy when a caller names none
    #[serde(default)]
    pub scrolling_style: ScrollingStyle,

    /// Cache behavior
    #[serde(default)]
    pub cache: CacheSettings,

    /// Active cache store
    #[serde(skip)]
    store: Option<Arc<dyn CacheStore>>,
}

fn default_item_count_per_page() -> usize {
    DEFAULT_ITEM_COUNT_PER_PAGE
}

fn default_page_range() -> usize {
    DEFAULT_PAGE_RANGE
}

impl Default for PaginatorConfig {
    fn default() -> Self {
        Self {
            item_count_per_page: DEFAULT_ITEM_COUNT_PER_PAGE,
            page_range: DEFAULT_PAGE_RANGE,
            scrolling_style: ScrollingStyle::default(),
            cache: CacheSettings::default(),
            store: None,
        }
    }
}

impl fmt::Debug for PaginatorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaginatorConfig")
            .field("item_count_per_page", &self.item_count_per_page)
            .field("page_range", &self.page_range)
            .field("scrolling_style", &self.scrolling_style)
            .field("cache", &self.cache)
            .field("store", &self.store)
            .finish()
    }
}

impl PaginatorConfig {
    /// Create a config with the built-in defaults and no cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default page size
    #[must_use]
    pub fn with_item_count_per_page(mut self, count: usize) -> Self {
        self.item_count_per_page = count;
        self
    }

    /// Set the default page range
    #[must_use]
    pub fn with_page_range(mut self, range: usize) -> Self {
        self.page_range = range;
        self
    }

    /// Set the default scrolling style
    #[must_use]
    pub fn with_scrolling_style(mut self, style: ScrollingStyle) -> Self {
        self.scrolling_style = style;
        self
    }

    /// Attach a cache store and enable caching
    #[must_use]
    pub fn with_cache_store(mut self, store: Arc<dyn CacheStore>) -> Self {
        self.store = Some(store);
        self.cache.enabled = true;
        self
    }

    /// Set the cache failure policy
    #[must_use]
    pub fn with_cache_error_policy(mut self, policy: CacheErrorPolicy) -> Self {
        self.cache.error_policy = policy;
        self
    }

    /// The cache store, if one is attached and caching is enabled
    pub fn cache_store(&self) -> Option<&Arc<dyn CacheStore>> {
        self.store.as_ref().filter(|_| self.cache.enabled)
    }

    /// Check the defaults are usable
    pub fn validate(&self) -> Result<()> {
        if self.item_count_per_page == 0 {
            return Err(Error::invalid_value(
                "item_count_per_page",
                "must be at least 1",
            ));
        }
        if self.page_range == 0 {
            return Err(Error::invalid_value("page_range", "must be at least 1"));
        }
        if self.cache.capacity == Some(0) {
            return Err(Error::invalid_value(
                "cache.capacity",
                "must be at least 1 (omit for an unbounded cache)",
            ));
        }
        Ok(())
    }

    /// Wrap in an `Arc` for sharing between paginators
    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    // ========================================================================
    // Loading
    // ========================================================================

    /// Parse a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.finish()
    }

    /// Parse a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.finish()
    }

    /// Load from a `.json`, `.yaml` or `.yml` file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let contents = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json_str(&contents)
        } else {
            Self::from_yaml_str(&contents)
        }
    }

    /// Validate a freshly parsed config and attach the store it asks for
    fn finish(mut self) -> Result<Self> {
        self.validate()?;
        if self.cache.enabled {
            let store = match self.cache.capacity {
                Some(capacity) => MemoryCacheStore::with_capacity(capacity),
                None => MemoryCacheStore::new(),
            };
            tracing::debug!(capacity = ?self.cache.capacity, "attaching in-memory cache store");
            self.store = Some(Arc::new(store));
        }
        Ok(self)
    }
}
