//! Paginator module
//!
//! The orchestrator tying an adapter, the page item cache and a page window
//! strategy together.
//!
//! # Overview
//!
//! - `Paginator` - page counts, normalization, page items, page sets
//! - `PaginatorBuilder` - validated construction
//! - `PageItems` - shared item sequence of one page
//! - `PageSet` - navigation snapshot for view rendering

mod builder;
mod engine;
mod types;

pub use builder::PaginatorBuilder;
pub use engine::Paginator;
pub use types::{PageItems, PageSet};
