//! Paginator implementation
//!
//! Page counts, page items and page sets are computed on first read and
//! memoized; each setter drops exactly the memoized values that depend on
//! it. Page items go through the configured cache store when caching is on.

use super::builder::PaginatorBuilder;
use super::types::{PageItems, PageSet};
use crate::adapter::Adapter;
use crate::cache::{parse_page_key, CacheStore, ConfigHash};
use crate::config::{CacheErrorPolicy, PaginatorConfig};
use crate::error::{Error, Result};
use crate::window::ScrollingStyle;
use once_cell::unsync::OnceCell;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Splits an adapter's items into pages
///
/// One paginator serves one logical caller (a request or a session) and is
/// not meant to be shared between threads. Several paginators may share
/// the same adapter, config and cache store.
pub struct Paginator<A: Adapter> {
    /// Data source (shared, never disposed by the paginator)
    adapter: Arc<A>,
    /// Defaults and cache store
    config: Arc<PaginatorConfig>,
    /// Per-instance cache switch
    cache_enabled: bool,
    /// Page size override
    item_count_per_page: Option<usize>,
    /// Page range override
    page_range: Option<usize>,
    /// Current page as set, normalized on read
    current_page_number: i64,
    page_count: OnceCell<usize>,
    current_items: OnceCell<PageItems<A::Item>>,
    pages: RefCell<HashMap<ScrollingStyle, PageSet>>,
}

impl<A: Adapter> fmt::Debug for Paginator<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Paginator")
            .field("config", &self.config)
            .field("cache_enabled", &self.cache_enabled)
            .field("item_count_per_page", &self.item_count_per_page)
            .field("page_range", &self.page_range)
            .field("current_page_number", &self.current_page_number)
            .field("page_count", &self.page_count.get())
            .field("current_items_loaded", &self.current_items.get().is_some())
            .finish_non_exhaustive()
    }
}

impl<A: Adapter> Paginator<A> {
    /// Create a paginator with the built-in defaults and no cache
    pub fn new(adapter: Arc<A>) -> Self {
        Self::from_parts(adapter, Arc::new(PaginatorConfig::default()))
    }

    /// Create a paginator using shared defaults
    pub fn with_config(adapter: Arc<A>, config: Arc<PaginatorConfig>) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(adapter, config))
    }

    /// Start building a paginator
    pub fn builder() -> PaginatorBuilder<A> {
        PaginatorBuilder::new()
    }

    fn from_parts(adapter: Arc<A>, config: Arc<PaginatorConfig>) -> Self {
        Self {
            adapter,
            config,
            cache_enabled: true,
            item_count_per_page: None,
            page_range: None,
            current_page_number: 1,
            page_count: OnceCell::new(),
            current_items: OnceCell::new(),
            pages: RefCell::new(HashMap::new()),
        }
    }

    /// The data source
    pub fn adapter(&self) -> &Arc<A> {
        &self.adapter
    }

    /// The shared defaults
    pub fn config(&self) -> &PaginatorConfig {
        &self.config
    }

    // ========================================================================
    // Counts
    // ========================================================================

    /// Number of pages, 0 for an empty collection
    pub fn page_count(&self) -> usize {
        *self.page_count.get_or_init(|| {
            self.total_item_count()
                .div_ceil(self.item_count_per_page())
        })
    }

    /// Number of items in the collection (asks the adapter every time)
    pub fn total_item_count(&self) -> usize {
        self.adapter.count()
    }

    /// Page size, from this paginator or the config
    pub fn item_count_per_page(&self) -> usize {
        self.item_count_per_page
            .unwrap_or(self.config.item_count_per_page)
            .max(1)
    }

    /// Set the page size
    ///
    /// A value below 1 puts the whole collection on a single page.
    pub fn set_item_count_per_page(&mut self, count: i64) -> &mut Self {
        let count = usize::try_from(count)
            .ok()
            .filter(|count| *count > 0)
            .unwrap_or_else(|| self.total_item_count().max(1));

        self.item_count_per_page = Some(count);
        self.page_count.take();
        self.current_items.take();
        self.pages.get_mut().clear();
        self
    }

    // ========================================================================
    // Current Page
    // ========================================================================

    /// Current page, clamped into the valid page range
    pub fn current_page_number(&self) -> usize {
        self.normalize_page_number(self.current_page_number)
    }

    /// Set the current page
    ///
    /// The raw value is kept and clamped on every read, so a later page size
    /// change still yields a valid page.
    pub fn set_current_page_number(&mut self, page_number: i64) -> &mut Self {
        self.current_page_number = page_number;
        self.current_items.take();
        self.pages.get_mut().clear();
        self
    }

    /// Number of page numbers a window shows
    pub fn page_range(&self) -> usize {
        self.page_range.unwrap_or(self.config.page_range).max(1)
    }

    /// Set the window width (at least 1)
    pub fn set_page_range(&mut self, page_range: usize) -> &mut Self {
        self.page_range = Some(page_range.max(1));
        self.pages.get_mut().clear();
        self
    }

    // ========================================================================
    // Normalization
    // ========================================================================

    /// Clamp a page number into `[1, max(page_count, 1)]`
    pub fn normalize_page_number(&self, page_number: i64) -> usize {
        usize::try_from(page_number)
            .unwrap_or(0)
            .clamp(1, self.page_count().max(1))
    }

    /// Clamp an item number into `[1, item_count_per_page]`
    pub fn normalize_item_number(&self, item_number: i64) -> usize {
        usize::try_from(item_number)
            .unwrap_or(0)
            .clamp(1, self.item_count_per_page())
    }

    /// Absolute 1-based position of an item given its position on a page
    ///
    /// Uses the current page when `page_number` is `None`.
    pub fn absolute_item_number(&self, item_number: i64, page_number: Option<i64>) -> usize {
        let item_number = self.normalize_item_number(item_number);
        let page_number = match page_number {
            Some(page_number) => self.normalize_page_number(page_number),
            None => self.current_page_number(),
        };

        (page_number - 1) * self.item_count_per_page() + item_number
    }

    /// Page numbers from `lower` to `upper` inclusive, both normalized
    pub fn pages_in_range(&self, lower: i64, upper: i64) -> Vec<usize> {
        let lower = self.normalize_page_number(lower);
        let upper = self.normalize_page_number(upper);
        (lower..=upper).collect()
    }

    // ========================================================================
    // Cache Control
    // ========================================================================

    /// Whether page items are cached: needs both this paginator's switch
    /// and a store in the config
    pub fn cache_enabled(&self) -> bool {
        self.cache_store().is_some()
    }

    /// Turn caching on or off for this paginator
    pub fn set_cache_enabled(&mut self, enabled: bool) -> &mut Self {
        self.cache_enabled = enabled;
        self
    }

    /// Fingerprint of (adapter identity, page size), the cache group tag
    pub fn cache_internal_id(&self) -> ConfigHash {
        ConfigHash::new(&self.adapter.identity(), self.item_count_per_page())
    }

    /// Cache key of one page under the current configuration
    pub fn cache_id(&self, page_number: usize) -> String {
        self.cache_internal_id().page_key(page_number)
    }

    /// Remove cached items of one page, or of every page of this
    /// configuration when `page_number` is `None`
    ///
    /// Store failures are returned whatever the error policy.
    pub fn clear_page_item_cache(&self, page_number: Option<usize>) -> Result<()> {
        let Some(store) = self.cache_store() else {
            return Ok(());
        };
        let hash = self.cache_internal_id();

        match page_number {
            Some(page_number) => {
                let key = hash.page_key(page_number);
                if store.remove(&key)? {
                    debug!("Removed cached page {}", key);
                }
            }
            None => {
                let mut removed = 0;
                for id in store.ids_matching_tags(&hash.tags())? {
                    if let Some(page_number) = parse_page_key(&id) {
                        if store.remove(&hash.page_key(page_number))? {
                            removed += 1;
                        }
                    }
                }
                debug!("Removed {} cached pages tagged {}", removed, hash);
            }
        }

        Ok(())
    }

    fn cache_store(&self) -> Option<&Arc<dyn CacheStore>> {
        if self.cache_enabled {
            self.config.cache_store()
        } else {
            None
        }
    }

    /// Apply the configured policy to a cache failure met during a lookup
    fn tolerate(&self, err: Error) -> Result<()> {
        match self.config.cache.error_policy {
            CacheErrorPolicy::TreatAsMiss => {
                warn!("Ignoring cache failure: {}", err);
                Ok(())
            }
            CacheErrorPolicy::Propagate if err.is_cache() => Err(err),
            CacheErrorPolicy::Propagate => Err(Error::cache(err.to_string())),
        }
    }
}

impl<A> Paginator<A>
where
    A: Adapter,
    A::Item: Clone + Serialize + DeserializeOwned,
{
    // ========================================================================
    // Items
    // ========================================================================

    /// Items on a page (the page number is normalized first)
    ///
    /// Served from the cache when possible, otherwise fetched from the
    /// adapter and written back to the cache.
    pub fn items_for_page(&self, page_number: i64) -> Result<PageItems<A::Item>> {
        let page_number = self.normalize_page_number(page_number);
        let cache = self
            .cache_store()
            .map(|store| (&**store, self.cache_internal_id()));

        if let Some((store, hash)) = &cache {
            if let Some(items) = self.load_cached(*store, &hash.page_key(page_number))? {
                return Ok(items);
            }
        }

        let limit = self.item_count_per_page();
        let offset = (page_number - 1) * limit;
        debug!(
            "Fetching page {} from adapter (offset {}, limit {})",
            page_number, offset, limit
        );
        let items = PageItems::new(self.adapter.items(offset, limit)?);

        if let Some((store, hash)) = &cache {
            self.store_cached(*store, hash, page_number, &items)?;
        }

        Ok(items)
    }

    /// Items on the current page (memoized)
    pub fn current_items(&self) -> Result<PageItems<A::Item>> {
        self.current_items
            .get_or_try_init(|| self.items_for_page(self.current_page_number))
            .cloned()
    }

    /// Number of items on the current page
    pub fn current_item_count(&self) -> Result<usize> {
        Ok(self.current_items()?.len())
    }

    /// Fetch one item
    ///
    /// `item_number` is 1-based within the page; negative values count back
    /// from the page's last item. `page_number` defaults to the current
    /// page (so does page 0); negative values count back from the last page.
    pub fn item(&self, item_number: i64, page_number: Option<i64>) -> Result<A::Item> {
        let page_number = match page_number {
            None | Some(0) => self.current_page_number() as i64,
            Some(page_number) if page_number < 0 => self.page_count() as i64 + 1 + page_number,
            Some(page_number) => page_number,
        };

        let page = self.items_for_page(page_number)?;
        let item_count = page.len();
        if item_count == 0 {
            return Err(Error::PageNotFound { page: page_number });
        }

        let item_number = if item_number < 0 {
            item_count as i64 + 1 + item_number
        } else {
            item_number
        };
        let item_number = self.normalize_item_number(item_number);

        if item_number > item_count {
            return Err(Error::ItemNotFound {
                page: page_number,
                item: item_number,
            });
        }

        Ok(page[item_number - 1].clone())
    }

    // ========================================================================
    // Page Sets
    // ========================================================================

    /// Navigation snapshot using `style`, or the configured default style
    ///
    /// Memoized per style until the current page, page size or page range
    /// changes.
    pub fn pages(&self, style: Option<ScrollingStyle>) -> Result<PageSet> {
        let style = style.unwrap_or(self.config.scrolling_style);

        if let Some(pages) = self.pages.borrow().get(&style) {
            return Ok(pages.clone());
        }

        let pages = self.create_pages(style)?;
        self.pages.borrow_mut().insert(style, pages.clone());
        Ok(pages)
    }

    /// Same as [`pages`](Self::pages) with the style given by name
    pub fn pages_for_name(&self, style: &str) -> Result<PageSet> {
        self.pages(Some(style.parse()?))
    }

    fn create_pages(&self, style: ScrollingStyle) -> Result<PageSet> {
        let page_count = self.page_count();
        let current = self.current_page_number();
        let item_count_per_page = self.item_count_per_page();
        let pages_in_range = style.pages(current, page_count, self.page_range());

        let mut pages = PageSet {
            page_count,
            item_count_per_page,
            first: 1,
            current,
            last: page_count,
            previous: (current > 1).then(|| current - 1),
            next: (current < page_count).then(|| current + 1),
            first_page_in_range: pages_in_range.first().copied(),
            last_page_in_range: pages_in_range.last().copied(),
            pages_in_range,
            current_item_count: None,
            total_item_count: None,
            first_item_number: None,
            last_item_number: None,
        };

        if page_count > 0 {
            let current_item_count = self.current_item_count()?;
            let first_item_number = (current - 1) * item_count_per_page + 1;

            pages.current_item_count = Some(current_item_count);
            pages.total_item_count = Some(self.total_item_count());
            pages.first_item_number = Some(first_item_number);
            pages.last_item_number = Some(first_item_number + current_item_count - 1);
        }

        Ok(pages)
    }

    // ========================================================================
    // Cache Access
    // ========================================================================

    /// Cached items of every page of this configuration, by page number
    ///
    /// Store failures and undecodable entries are returned whatever the
    /// error policy.
    pub fn page_item_cache(&self) -> Result<BTreeMap<usize, PageItems<A::Item>>> {
        let mut cached = BTreeMap::new();
        let Some(store) = self.cache_store() else {
            return Ok(cached);
        };
        let hash = self.cache_internal_id();

        for id in store.ids_matching_tags(&hash.tags())? {
            let Some(page_number) = parse_page_key(&id) else {
                continue;
            };
            if let Some(value) = store.load(&hash.page_key(page_number))? {
                let items: Vec<A::Item> = serde_json::from_value(value)
                    .map_err(|e| Error::cache(format!("Undecodable cache entry '{id}': {e}")))?;
                cached.insert(page_number, PageItems::new(items));
            }
        }

        Ok(cached)
    }

    fn load_cached(&self, store: &dyn CacheStore, key: &str) -> Result<Option<PageItems<A::Item>>> {
        let value = match store.load(key) {
            Ok(Some(value)) => value,
            Ok(None) => {
                debug!("Cache miss for {}", key);
                return Ok(None);
            }
            Err(e) => {
                self.tolerate(e)?;
                return Ok(None);
            }
        };

        match serde_json::from_value::<Vec<A::Item>>(value) {
            Ok(items) => {
                debug!("Cache hit for {}", key);
                Ok(Some(PageItems::new(items)))
            }
            Err(e) => {
                self.tolerate(Error::cache(format!("Undecodable cache entry '{key}': {e}")))?;
                Ok(None)
            }
        }
    }

    fn store_cached(
        &self,
        store: &dyn CacheStore,
        hash: &ConfigHash,
        page_number: usize,
        items: &PageItems<A::Item>,
    ) -> Result<()> {
        let key = hash.page_key(page_number);
        let value = match serde_json::to_value(items.as_slice()) {
            Ok(value) => value,
            Err(e) => {
                return self.tolerate(Error::cache(format!(
                    "Cannot encode items for '{key}': {e}"
                )))
            }
        };

        match store.save(&key, value, &hash.tags()) {
            Ok(()) => Ok(()),
            Err(e) => self.tolerate(e),
        }
    }
}
