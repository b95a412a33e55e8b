//! Navbar state
//!
//! Which dropdown is open, which item has keyboard focus, whether the page
//! has scrolled far enough to switch the bar to its solid style, and which
//! route counts as current.

use serde::Serialize;
use tracing::trace;

use crate::items::ItemSet;

/// Scroll offset past which the navbar switches to its solid style
pub const SCROLLED_THRESHOLD: usize = 10;

/// A plain link
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Label
    pub name: &'static str,
    /// Route
    pub path: &'static str,
}

/// A top-level navbar entry, optionally with a dropdown
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Label
    pub name: &'static str,
    /// Route
    pub path: &'static str,
    /// Dropdown entries (empty for plain links)
    pub dropdown: &'static [NavLink],
}

impl NavItem {
    /// Whether the item opens a dropdown
    #[must_use]
    pub fn has_dropdown(&self) -> bool {
        !self.dropdown.is_empty()
    }
}

/// Navbar controller
#[derive(Clone, Debug)]
pub struct NavMenu {
    items: ItemSet<NavItem>,
    highlighted: usize,
    open_dropdown: Option<usize>,
    menu_open: bool,
    scrolled: bool,
    current_path: String,
}

impl NavMenu {
    /// Navbar over `items` with the given current route
    pub fn new(items: ItemSet<NavItem>, current_path: impl Into<String>) -> Self {
        Self {
            items,
            highlighted: 0,
            open_dropdown: None,
            menu_open: false,
            scrolled: false,
            current_path: current_path.into(),
        }
    }

    /// Navbar entries
    pub fn items(&self) -> &ItemSet<NavItem> {
        &self.items
    }

    /// Index of the keyboard-highlighted entry
    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// Index of the entry whose dropdown is open
    pub fn open_dropdown(&self) -> Option<usize> {
        self.open_dropdown
    }

    /// Whether the compact (mobile) menu is expanded
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Whether the page is scrolled past [`SCROLLED_THRESHOLD`]
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Open the dropdown of entry `index`, or close it if it is already open
    ///
    /// Entries without a dropdown and out-of-range indices close any open
    /// dropdown.
    pub fn toggle_dropdown(&mut self, index: usize) {
        let opens = self.items.get(index).is_some_and(NavItem::has_dropdown);
        self.open_dropdown = if opens && self.open_dropdown != Some(index) {
            Some(index)
        } else {
            None
        };
        trace!(open = ?self.open_dropdown, "Navbar dropdown toggled");
    }

    /// Toggle the dropdown of the highlighted entry
    pub fn toggle_highlighted(&mut self) {
        self.toggle_dropdown(self.highlighted);
    }

    /// Expand or collapse the compact menu
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        if !self.menu_open {
            self.open_dropdown = None;
        }
    }

    /// Close the compact menu and any dropdown
    pub fn close(&mut self) {
        self.menu_open = false;
        self.open_dropdown = None;
    }

    /// Move the highlight right (wrapping); an open dropdown follows it
    pub fn highlight_next(&mut self) {
        self.highlighted = (self.highlighted + 1) % self.items.len();
        self.follow_highlight();
    }

    /// Move the highlight left (wrapping); an open dropdown follows it
    pub fn highlight_previous(&mut self) {
        self.highlighted = (self.highlighted + self.items.len() - 1) % self.items.len();
        self.follow_highlight();
    }

    /// Record the page scroll offset
    pub fn set_scrolled(&mut self, offset: usize) {
        self.scrolled = offset > SCROLLED_THRESHOLD;
    }

    /// Change the current route
    pub fn set_current_path(&mut self, path: impl Into<String>) {
        self.current_path = path.into();
    }

    /// Whether `item` is the current route
    ///
    /// Entries with a dropdown match any route below their path; plain
    /// links must match exactly.
    pub fn is_current(&self, item: &NavItem) -> bool {
        if item.has_dropdown() {
            self.current_path.starts_with(item.path)
        } else {
            self.current_path == item.path
        }
    }

    /// Whether dropdown `link` is the current route
    pub fn is_current_link(&self, link: &NavLink) -> bool {
        self.current_path == link.path
    }

    fn follow_highlight(&mut self) {
        if self.open_dropdown.is_some() {
            let highlighted = self.items.get(self.highlighted).is_some_and(NavItem::has_dropdown);
            self.open_dropdown = highlighted.then_some(self.highlighted);
        }
    }
}
