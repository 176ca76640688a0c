//! Page window types and traits
//!
//! Defines the scrolling style selector and the trait every window
//! strategy implements.

use super::strategies::{AllPages, ElasticWindow, JumpingWindow, SlidingWindow};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Core trait for page window strategies
///
/// Implementations are pure: the same inputs always produce the same window.
pub trait PageWindow: Send + Sync + fmt::Debug {
    /// Compute the ascending page numbers to expose around `current_page`.
    ///
    /// The result lies within `[1, page_count]`, contains `current_page`
    /// (clamped into range) and is empty only when `page_count` is 0.
    fn pages(&self, current_page: usize, page_count: usize, page_range: usize) -> Vec<usize>;
}

/// Selects which window strategy a paginator uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollingStyle {
    /// Every page from first to last
    All,
    /// Fixed-width window centered on the current page
    #[default]
    Sliding,
    /// Window that widens away from the edges and narrows toward them
    Elastic,
    /// Fixed blocks of `page_range` pages
    Jumping,
}

impl ScrollingStyle {
    /// All available styles
    pub const ALL: [ScrollingStyle; 4] = [
        ScrollingStyle::All,
        ScrollingStyle::Sliding,
        ScrollingStyle::Elastic,
        ScrollingStyle::Jumping,
    ];

    /// Style name as accepted by [`FromStr`]
    pub fn name(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Sliding => "sliding",
            Self::Elastic => "elastic",
            Self::Jumping => "jumping",
        }
    }

    /// The strategy implementing this style
    pub fn window(self) -> &'static dyn PageWindow {
        match self {
            Self::All => &AllPages,
            Self::Sliding => &SlidingWindow,
            Self::Elastic => &ElasticWindow,
            Self::Jumping => &JumpingWindow,
        }
    }

    /// Shorthand for `self.window().pages(..)`
    pub fn pages(self, current_page: usize, page_count: usize, page_range: usize) -> Vec<usize> {
        self.window().pages(current_page, page_count, page_range)
    }
}

impl fmt::Display for ScrollingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScrollingStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "sliding" => Ok(Self::Sliding),
            "elastic" => Ok(Self::Elastic),
            "jumping" => Ok(Self::Jumping),
            _ => Err(Error::invalid_strategy(s)),
        }
    }
}

/// Inclusive run of page numbers with both bounds brought into `[1, page_count]`
pub(crate) fn page_span(lower: usize, upper: usize, page_count: usize) -> Vec<usize> {
    let last = page_count.max(1);
    let lower = lower.clamp(1, last);
    let upper = upper.clamp(1, last);
    (lower..=upper).collect()
}
