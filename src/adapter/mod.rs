//! Adapter module
//!
//! Data sources a paginator reads from.
//!
//! # Overview
//!
//! The paginator only needs a total count and ranged retrieval from its data
//! source. Sorting, filtering and query building stay with the adapter.
//!
//! - `VecAdapter` - in-memory items
//! - `CallbackAdapter` - closures, e.g. around a database query
//! - `NullAdapter` - a count without data

mod adapters;
mod types;

pub use adapters::{CallbackAdapter, NullAdapter, VecAdapter};
pub use types::Adapter;
