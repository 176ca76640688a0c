//! Paginator value types
//!
//! `PageItems` is the item sequence of one page, `PageSet` the navigation
//! snapshot handed to the view layer.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::ops::Deref;
use std::sync::Arc;

// ============================================================================
// Page Items
// ============================================================================

/// Items of a single page
///
/// Cheap to clone: the items are shared. Dereferences to a slice.
#[derive(Debug, PartialEq, Eq)]
pub struct PageItems<T> {
    items: Arc<[T]>,
}

impl<T> PageItems<T> {
    /// Wrap fetched items
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: items.into(),
        }
    }

    /// Borrow the items as a slice
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> Clone for PageItems<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T> Default for PageItems<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> Deref for PageItems<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> From<Vec<T>> for PageItems<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<'a, T> IntoIterator for &'a PageItems<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Serialize> Serialize for PageItems<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.items.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for PageItems<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::new)
    }
}

// ============================================================================
// Page Set
// ============================================================================

/// Navigation snapshot for the current page
///
/// Built by [`Paginator::pages`](super::Paginator::pages). Item numbers are
/// 1-based positions in the whole collection; the item fields are present
/// whenever the collection has at least one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSet {
    /// Total number of pages
    pub page_count: usize,
    /// Page size
    pub item_count_per_page: usize,
    /// Always 1
    pub first: usize,
    /// Current (normalized) page
    pub current: usize,
    /// Equal to `page_count`
    pub last: usize,
    /// Page before `current`, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<usize>,
    /// Page after `current`, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<usize>,
    /// Page numbers chosen by the scrolling style, ascending
    pub pages_in_range: Vec<usize>,
    /// Smallest entry of `pages_in_range`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_page_in_range: Option<usize>,
    /// Largest entry of `pages_in_range`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_page_in_range: Option<usize>,
    /// Number of items on the current page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_item_count: Option<usize>,
    /// Number of items in the collection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_item_count: Option<usize>,
    /// Absolute number of the first item on the current page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_item_number: Option<usize>,
    /// Absolute number of the last item on the current page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_item_number: Option<usize>,
}

impl PageSet {
    /// Check if `page` is the current page
    pub fn is_current(&self, page: usize) -> bool {
        self.current == page
    }

    /// Check if the collection has no pages
    pub fn is_empty(&self) -> bool {
        self.page_count == 0
    }
}
