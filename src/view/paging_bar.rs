//! One-line paging control widget.

use crate::state::PagingControl;
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

/// Paging control tracking page geometry and rendering a status line.
///
/// The engine pushes page size, active index and total size into this after
/// every dispatch; the demo reads the active index back when it fires
/// paging events.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PagingBar {
    page_size: u32,
    active_index: usize,
    total: u64,
}

impl PagingBar {
    /// A bar with nothing loaded yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of pages for the current size and total.
    pub fn total_pages(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(self.page_size))
    }

    /// The total record count last pushed by the engine.
    pub fn total_size(&self) -> u64 {
        self.total
    }

    /// Render the bar as a single line, e.g. `Page 2/5 · 43 records`.
    pub fn render(&self) -> Line<'static> {
        let pages = self.total_pages();
        let current = if pages == 0 { 0 } else { self.active_index as u64 + 1 };
        Line::from(vec![
            Span::styled(
                format!("Page {current}/{pages}"),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(format!(" · {} records · {} per page", self.total, self.page_size)),
        ])
    }
}

impl PagingControl for PagingBar {
    fn set_page_size(&mut self, page_size: u32) {
        self.page_size = page_size;
    }

    fn set_active_index(&mut self, index: usize) {
        self.active_index = index;
    }

    fn set_total_size(&mut self, total: u64) {
        self.total = total;
    }

    fn active_index(&self) -> usize {
        self.active_index
    }
}
