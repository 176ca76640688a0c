//! Cache key layout
//!
//! Page entries live under `Paginator_<page>_<config hash>` and are tagged
//! with the bare config hash. The config hash is a blake3 digest of the
//! adapter identity and the page size, so two paginators over the same
//! adapter and page size share entries, and changing the page size moves
//! to a fresh key space.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Prefix namespacing paginator entries in a shared cache
pub const CACHE_KEY_PREFIX: &str = "Paginator_";

/// Regex for page entry keys: Paginator_<page>_<hex digest>
static PAGE_KEY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Paginator_(\d+)_([0-9a-f]{64})$").unwrap());

/// Stable fingerprint of one paginator configuration
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigHash(String);

impl ConfigHash {
    /// Fingerprint an adapter identity together with a page size
    pub fn new(adapter_identity: &str, item_count_per_page: usize) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&(adapter_identity.len() as u64).to_le_bytes());
        hasher.update(adapter_identity.as_bytes());
        hasher.update(&(item_count_per_page as u64).to_le_bytes());
        Self(hasher.finalize().to_hex().to_string())
    }

    /// Hex form, also used as the group tag
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Cache key for one page of this configuration
    pub fn page_key(&self, page_number: usize) -> String {
        format!("{CACHE_KEY_PREFIX}{page_number}_{}", self.0)
    }

    /// Tag list attached to every entry of this configuration
    pub fn tags(&self) -> Vec<String> {
        vec![self.0.clone()]
    }
}

impl fmt::Display for ConfigHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extract the page number from a page entry key
///
/// Returns `None` for keys that do not have the page entry shape.
pub fn parse_page_key(key: &str) -> Option<usize> {
    PAGE_KEY_REGEX
        .captures(key)
        .and_then(|caps| caps.get(1))
        .and_then(|page| page.as_str().parse().ok())
}
