//! Navbar and dropdown rendering

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use showcase_core::NavMenu;

use crate::theme;

const BRAND: &str = " Pycoder Tech ";

/// One rendered navbar row
#[derive(Debug)]
pub struct NavBar {
    /// The row itself
    pub line: Line<'static>,
    /// Starting column of each item, in item order
    pub columns: Vec<u16>,
    /// Background for the whole row
    pub background: Style,
}

/// Render the top bar
///
/// The bar turns solid once the page has scrolled. The highlighted item is
/// only marked while the navbar has keyboard focus.
pub fn navbar(nav: &NavMenu, focused: bool) -> NavBar {
    let background = if nav.is_scrolled() {
        Style::default().bg(theme::SURFACE_BG)
    } else {
        Style::default().bg(theme::PAGE_BG)
    };

    let mut spans = vec![Span::styled(BRAND, theme::accent().add_modifier(Modifier::BOLD))];
    let mut column = BRAND.width();
    let mut columns = Vec::with_capacity(nav.items().len());

    for (i, item) in nav.items().iter().enumerate() {
        spans.push(Span::raw(" "));
        column += 1;

        let label = if item.has_dropdown() {
            format!(" {} ▾ ", item.name)
        } else {
            format!(" {} ", item.name)
        };
        let style = if focused && i == nav.highlighted() {
            theme::selected()
        } else if nav.is_current(item) {
            theme::accent()
        } else {
            theme::body()
        };

        columns.push(u16::try_from(column).unwrap_or(u16::MAX));
        column += label.width();
        spans.push(Span::styled(label, style));
    }

    NavBar {
        line: Line::from(spans),
        columns,
        background,
    }
}

/// Lines of the open dropdown, if any, with its left column
pub fn dropdown(nav: &NavMenu, columns: &[u16]) -> Option<(u16, Vec<Line<'static>>)> {
    let index = nav.open_dropdown()?;
    let item = nav.items().get(index)?;
    let column = columns.get(index).copied().unwrap_or(0);

    let width = item
        .dropdown
        .iter()
        .map(|link| link.name.width())
        .max()
        .unwrap_or(0)
        + 2;

    let lines = item
        .dropdown
        .iter()
        .map(|link| {
            let style = if nav.is_current_link(link) {
                theme::accent()
            } else {
                theme::body()
            };
            Line::styled(format!(" {:<width$}", link.name), style.bg(theme::SURFACE_BG))
        })
        .collect();

    Some((column, lines))
}
