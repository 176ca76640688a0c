//! Page window module
//!
//! Supports: All, Sliding, Elastic, Jumping
//!
//! # Overview
//!
//! A page window ("scrolling style") decides which page numbers a navigation
//! control shows around the current page. Every strategy is a pure function
//! of the current page, the page count and the configured page range.

mod strategies;
mod types;

pub use strategies::{AllPages, ElasticWindow, JumpingWindow, SlidingWindow};
pub use types::{PageWindow, ScrollingStyle};
