//! PageView Widget
//!
//! A borderless viewport over the prebuilt page lines.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::StatefulWidget;

/// Scroll state for the page viewport
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageViewState {
    /// First page row shown
    pub scroll_offset: usize,
    /// Page height in rows (as of the last render)
    pub total_lines: usize,
    /// Viewport height in rows (as of the last render)
    pub viewport_height: usize,
}

impl PageViewState {
    /// Largest offset that still fills the viewport
    pub fn max_scroll(&self) -> usize {
        self.total_lines.saturating_sub(self.viewport_height)
    }

    /// Scroll by delta (positive = down)
    pub fn scroll(&mut self, delta: isize) {
        let offset = self.scroll_offset.saturating_add_signed(delta);
        self.scroll_offset = offset.min(self.max_scroll());
    }

    /// Put `row` at the top of the viewport (clamped)
    pub fn scroll_to(&mut self, row: usize) {
        self.scroll_offset = row.min(self.max_scroll());
    }

    /// Update the page and viewport sizes, clamping the offset
    pub fn set_extent(&mut self, total_lines: usize, viewport_height: usize) {
        self.total_lines = total_lines;
        self.viewport_height = viewport_height;
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
    }
}

/// A borderless, scrollable page
pub struct PageView<'a> {
    lines: &'a [Line<'a>],
}

impl<'a> PageView<'a> {
    /// View over `lines`
    pub fn new(lines: &'a [Line<'a>]) -> Self {
        Self { lines }
    }
}

impl StatefulWidget for PageView<'_> {
    type State = PageViewState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        state.set_extent(self.lines.len(), usize::from(area.height));

        for (row, line) in (area.y..area.bottom()).zip(self.lines.iter().skip(state.scroll_offset)) {
            buf.set_line(area.x, row, line, area.width);
        }
    }
}
