//! Adapter implementations
//!
//! Ready-made data sources for in-memory data, caller-provided callbacks
//! and page-number-only navigation.

use super::types::Adapter;
use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt;

// ============================================================================
// Vec Adapter
// ============================================================================

/// Adapter over an in-memory sequence
#[derive(Debug, Clone)]
pub struct VecAdapter<T> {
    identity: String,
    items: Vec<T>,
}

impl<T> VecAdapter<T> {
    /// Create an adapter with an explicit identity
    pub fn new(identity: impl Into<String>, items: Vec<T>) -> Self {
        Self {
            identity: identity.into(),
            items,
        }
    }

    /// Borrow the underlying items
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: Serialize> VecAdapter<T> {
    /// Create an adapter whose identity is a digest of its contents
    ///
    /// Equal item sequences produce equal identities.
    pub fn fingerprinted(items: Vec<T>) -> Result<Self> {
        let mut hasher = blake3::Hasher::new();
        serde_json::to_writer(&mut hasher, &items)?;
        Ok(Self {
            identity: format!("vec:{}", hasher.finalize().to_hex()),
            items,
        })
    }
}

impl<T: Clone> Adapter for VecAdapter<T> {
    type Item = T;

    fn identity(&self) -> String {
        self.identity.clone()
    }

    fn count(&self) -> usize {
        self.items.len()
    }

    fn items(&self, offset: usize, limit: usize) -> Result<Vec<T>> {
        Ok(self.items.iter().skip(offset).take(limit).cloned().collect())
    }
}

// ============================================================================
// Callback Adapter
// ============================================================================

type CountFn = Box<dyn Fn() -> usize + Send + Sync>;
type FetchFn<T> = Box<dyn Fn(usize, usize) -> anyhow::Result<Vec<T>> + Send + Sync>;

/// Adapter delegating to caller-supplied closures
///
/// Useful for wrapping a database query: `count` runs the `COUNT(*)`,
/// `fetch` runs the `LIMIT`/`OFFSET` select.
pub struct CallbackAdapter<T> {
    identity: String,
    count: CountFn,
    fetch: FetchFn<T>,
}

impl<T> CallbackAdapter<T> {
    /// Create a new callback adapter
    pub fn new<C, F>(identity: impl Into<String>, count: C, fetch: F) -> Self
    where
        C: Fn() -> usize + Send + Sync + 'static,
        F: Fn(usize, usize) -> anyhow::Result<Vec<T>> + Send + Sync + 'static,
    {
        Self {
            identity: identity.into(),
            count: Box::new(count),
            fetch: Box::new(fetch),
        }
    }
}

impl<T> fmt::Debug for CallbackAdapter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackAdapter")
            .field("identity", &self.identity)
            .finish_non_exhaustive()
    }
}

impl<T> Adapter for CallbackAdapter<T> {
    type Item = T;

    fn identity(&self) -> String {
        self.identity.clone()
    }

    fn count(&self) -> usize {
        (self.count)()
    }

    fn items(&self, offset: usize, limit: usize) -> Result<Vec<T>> {
        (self.fetch)(offset, limit).map_err(|e| Error::adapter(format!("{e:#}")))
    }
}

// ============================================================================
// Null Adapter
// ============================================================================

/// Adapter reporting a count but carrying no data
///
/// For navigation over a collection the caller renders itself: only page
/// numbers and item counts are meaningful.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAdapter {
    count: usize,
}

impl NullAdapter {
    /// Create a null adapter over `count` items
    pub fn new(count: usize) -> Self {
        Self { count }
    }
}

impl Adapter for NullAdapter {
    type Item = ();

    fn identity(&self) -> String {
        format!("null:{}", self.count)
    }

    fn count(&self) -> usize {
        self.count
    }

    fn items(&self, offset: usize, limit: usize) -> Result<Vec<()>> {
        let available = self.count.saturating_sub(offset).min(limit);
        Ok(vec![(); available])
    }
}
