//! Page Layout
//!
//! Builds the whole landing page as one tall column of lines and remembers
//! which rows each section occupies. The viewport scrolls over it; the row
//! ranges drive visibility reports and pointer hit testing.
//!
//! ```text
//! row 0   ┌ Hero ─────────┐
//!         │               │
//!         ├ Services ─────┤  sections[1] = start..end
//!         │               │
//!   ...   ├ ...           ┤
//!         └ Newsletter ───┘
//! ```

pub mod nav;
pub mod sections;

use std::ops::Range;

use ratatui::text::Line;

use showcase_core::{Clock, SectionId, Showcase};

/// Blank rows between sections
const SECTION_GAP: usize = 2;

/// Narrowest wrap width used for section text
const MIN_TEXT_WIDTH: usize = 20;

/// One frame's worth of page content
#[derive(Debug, Default)]
pub struct PageFrame {
    /// Every row of the page, top to bottom
    pub lines: Vec<Line<'static>>,
    sections: [Range<usize>; SectionId::ALL.len()],
}

impl PageFrame {
    /// Lay out every section
    ///
    /// `width` is the viewport width in columns, `focused` marks one
    /// section heading, and `opacity` gives each section's entrance fade.
    pub fn build<C: Clock + Clone>(
        page: &Showcase<C>,
        width: u16,
        focused: Option<SectionId>,
        opacity: impl Fn(SectionId) -> f32,
    ) -> Self {
        let text_width = usize::from(width).saturating_sub(4).max(MIN_TEXT_WIDTH);
        let mut frame = Self::default();

        for section in SectionId::ALL {
            let is_focused = focused == Some(section);
            let lines = match section {
                SectionId::Hero => sections::hero(page, text_width, is_focused),
                SectionId::Services => sections::services(page, text_width, is_focused),
                SectionId::Products => sections::products(page, text_width, is_focused),
                SectionId::Testimonials => sections::testimonials(page, text_width, is_focused),
                SectionId::Newsletter => sections::newsletter(page, text_width, is_focused),
            };

            let start = frame.lines.len();
            frame.lines.extend(sections::faded(lines, opacity(section)));
            frame.sections[section.index()] = start..frame.lines.len();
            frame
                .lines
                .extend(std::iter::repeat_with(Line::default).take(SECTION_GAP));
        }

        frame
    }

    /// Rows occupied by `section`
    pub fn rows(&self, section: SectionId) -> Range<usize> {
        self.sections[section.index()].clone()
    }

    /// First row of `section`
    pub fn top_of(&self, section: SectionId) -> usize {
        self.sections[section.index()].start
    }

    /// Section covering page row `row`, if any
    pub fn section_at(&self, row: usize) -> Option<SectionId> {
        SectionId::ALL
            .into_iter()
            .find(|section| self.sections[section.index()].contains(&row))
    }

    /// Share of `section`'s rows inside a viewport at `scroll` of `height` rows
    #[allow(clippy::cast_precision_loss)]
    pub fn visible_fraction(&self, section: SectionId, scroll: usize, height: usize) -> f32 {
        let rows = &self.sections[section.index()];
        if rows.is_empty() {
            return 0.0;
        }
        let top = rows.start.max(scroll);
        let bottom = rows.end.min(scroll.saturating_add(height));
        bottom.saturating_sub(top) as f32 / rows.len() as f32
    }
}
