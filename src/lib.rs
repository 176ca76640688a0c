//! # Solidafy Paginator
//!
//! A data-source-agnostic pagination engine: splits any countable
//! collection into pages, fetches only the items of the requested page,
//! caches fetched pages in a pluggable store and computes the set of page
//! numbers a navigation control should show.
//!
//! ## Features
//!
//! - **Lazy Retrieval**: Items are fetched from the adapter one page at a time
//! - **Page Item Cache**: Shared cache store with per-configuration invalidation
//! - **Scrolling Styles**: All, Sliding, Elastic and Jumping page windows
//! - **View Snapshots**: Serializable `PageSet` for template rendering
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use solidafy_paginator::{Paginator, Result, ScrollingStyle, VecAdapter};
//! use std::sync::Arc;
//!
//! fn main() -> Result<()> {
//!     let adapter = VecAdapter::fingerprinted((1..=23).collect::<Vec<u32>>())?;
//!     let mut paginator = Paginator::new(Arc::new(adapter));
//!     paginator.set_item_count_per_page(10).set_current_page_number(3);
//!
//!     let items = paginator.current_items()?;
//!     assert_eq!(items.as_slice(), &[21, 22, 23]);
//!
//!     let pages = paginator.pages(Some(ScrollingStyle::Sliding))?;
//!     assert_eq!(pages.previous, Some(2));
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                          Paginator                              │
//! │  page_count()  items_for_page()  item()  pages(style) → PageSet │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌────────────────┬─────────────┴──────────┬──────────────────────┐
//! │    Adapter     │      Cache Store       │    Page Window       │
//! ├────────────────┼────────────────────────┼──────────────────────┤
//! │ VecAdapter     │ MemoryCacheStore (LRU) │ All                  │
//! │ CallbackAdapter│ Tag index per config   │ Sliding              │
//! │ NullAdapter    │ Error policy           │ Elastic / Jumping    │
//! └────────────────┴────────────────────────┴──────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
// Allow common clippy pedantic lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::unused_self)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::return_self_not_must_use)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the paginator
pub mod error;

/// Common types and type aliases
pub mod types;

/// Shared paginator defaults
pub mod config;

/// Data source adapters
pub mod adapter;

/// Page item cache stores
pub mod cache;

/// Page window strategies
pub mod window;

/// Paginator engine
pub mod paginator;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use adapter::{Adapter, CallbackAdapter, NullAdapter, VecAdapter};
pub use cache::{CacheStats, CacheStore, ConfigHash, MemoryCacheStore};
pub use config::{CacheErrorPolicy, CacheSettings, PaginatorConfig};
pub use paginator::{PageItems, PageSet, Paginator, PaginatorBuilder};
pub use window::{PageWindow, ScrollingStyle};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
