//! Page window strategy implementations
//!
//! Each strategy decides which page numbers surround the current page.

use super::types::{page_span, PageWindow};

// ============================================================================
// All Pages
// ============================================================================

/// Exposes every page
///
/// Suited to small collections where the whole page list fits the UI.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllPages;

impl PageWindow for AllPages {
    fn pages(&self, _current_page: usize, page_count: usize, _page_range: usize) -> Vec<usize> {
        if page_count == 0 {
            return Vec::new();
        }
        page_span(1, page_count, page_count)
    }
}

// ============================================================================
// Sliding Window
// ============================================================================

/// Fixed-width window centered on the current page
///
/// Near either end the window is anchored to the first or last page and
/// extended the other way, so it always holds `min(page_range, page_count)`
/// pages. Example with a range of 5 over 20 pages:
/// - page 1 → `1..=5`
/// - page 10 → `8..=12`
/// - page 20 → `16..=20`
#[derive(Debug, Clone, Copy, Default)]
pub struct SlidingWindow;

impl PageWindow for SlidingWindow {
    fn pages(&self, current_page: usize, page_count: usize, page_range: usize) -> Vec<usize> {
        if page_count == 0 {
            return Vec::new();
        }

        let range = page_range.clamp(1, page_count);
        let current = current_page.clamp(1, page_count);
        let delta = range.div_ceil(2);

        // Close to the end: pin the window to the last page
        if current > delta && current - delta > page_count - range {
            return page_span(page_count - range + 1, page_count, page_count);
        }

        let offset = current - delta.min(current);
        page_span(offset + 1, offset + range, page_count)
    }
}

// ============================================================================
// Elastic Window
// ============================================================================

/// Sliding window whose width depends on the distance to the edges
///
/// At the first and last page the window holds `page_range` pages. Moving
/// inward it grows one page per step up to `2 * page_range - 1`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElasticWindow;

impl PageWindow for ElasticWindow {
    fn pages(&self, current_page: usize, page_count: usize, page_range: usize) -> Vec<usize> {
        if page_count == 0 {
            return Vec::new();
        }

        let original = page_range.clamp(1, page_count);
        let current = current_page.clamp(1, page_count);
        let reach = original + current - 1;

        let mut range = original * 2 - 1;
        if reach < range {
            range = reach;
        } else if reach > page_count {
            range = original + page_count - current;
        }

        SlidingWindow.pages(current, page_count, range)
    }
}

// ============================================================================
// Jumping Window
// ============================================================================

/// Fixed blocks of `page_range` pages
///
/// With a range of 10 the blocks are `1..=10`, `11..=20`, ... and the window
/// only moves when the current page crosses a block boundary. The final
/// block is cut short at the last page.
#[derive(Debug, Clone, Copy, Default)]
pub struct JumpingWindow;

impl PageWindow for JumpingWindow {
    fn pages(&self, current_page: usize, page_count: usize, page_range: usize) -> Vec<usize> {
        if page_count == 0 {
            return Vec::new();
        }

        let range = page_range.max(1);
        let current = current_page.clamp(1, page_count);

        let delta = match current % range {
            0 => range,
            rest => rest,
        };
        let offset = current - delta;

        page_span(offset + 1, offset + range, page_count)
    }
}
