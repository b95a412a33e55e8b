//! Keyboard mapping
//!
//! Translates key presses into [`Action`]s given what currently has focus.
//! Kept free of terminal I/O so the bindings can be tested directly.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use showcase_core::{RotatorEvent, SectionId, SurfaceEvent};

/// What receives section-specific keys
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    /// The navbar
    Nav,
    /// A page section
    Section(SectionId),
}

impl Focus {
    /// Next focus target (Tab)
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Nav => Self::Section(SectionId::Hero),
            Self::Section(SectionId::Newsletter) => Self::Nav,
            Self::Section(section) => Self::Section(section.next()),
        }
    }

    /// Previous focus target (Shift-Tab)
    #[must_use]
    pub fn previous(self) -> Self {
        match self {
            Self::Nav => Self::Section(SectionId::Newsletter),
            Self::Section(SectionId::Hero) => Self::Nav,
            Self::Section(section) => Self::Section(section.previous()),
        }
    }

    /// Focused section, if focus is on the page
    pub fn section(self) -> Option<SectionId> {
        match self {
            Self::Nav => None,
            Self::Section(section) => Some(section),
        }
    }

    /// Status bar label
    pub fn label(self) -> &'static str {
        match self {
            Self::Nav => "Navigation",
            Self::Section(section) => section.title(),
        }
    }

    /// Key hints for the status bar
    pub fn hints(self) -> &'static str {
        match self {
            Self::Nav => "←/→ item  Enter open  Esc close",
            Self::Section(SectionId::Hero) => "↑/↓ scroll",
            Self::Section(SectionId::Services | SectionId::Products | SectionId::Testimonials) => {
                "←/→ prev/next  1-9 jump"
            }
            Self::Section(SectionId::Newsletter) => "type email  Enter subscribe",
        }
    }
}

/// What a key press asks the app to do
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Leave the app
    Quit,
    /// Move focus forward
    FocusNext,
    /// Move focus backward
    FocusPrevious,
    /// Scroll by rows (positive = down)
    Scroll(isize),
    /// Scroll by viewport pages (positive = down)
    ScrollPage(isize),
    /// Jump to the top of the page
    ScrollTop,
    /// Jump to the bottom of the page
    ScrollBottom,
    /// Forward to the page core
    Surface(SurfaceEvent),
    /// Nothing bound
    Ignore,
}

/// Map a key press
///
/// `dropdown_open` lets `Esc` close an open navbar menu before it quits.
pub fn map_key(focus: Focus, dropdown_open: bool, key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Action::Quit,
            KeyCode::Home => Action::ScrollTop,
            KeyCode::End => Action::ScrollBottom,
            _ => Action::Ignore,
        };
    }

    match key.code {
        KeyCode::Tab => return Action::FocusNext,
        KeyCode::BackTab => return Action::FocusPrevious,
        KeyCode::Esc if dropdown_open => return Action::Surface(SurfaceEvent::NavClose),
        KeyCode::Esc => return Action::Quit,
        KeyCode::Up => return Action::Scroll(-1),
        KeyCode::Down => return Action::Scroll(1),
        KeyCode::PageUp => return Action::ScrollPage(-1),
        KeyCode::PageDown => return Action::ScrollPage(1),
        KeyCode::Home => return Action::ScrollTop,
        KeyCode::End => return Action::ScrollBottom,
        _ => {}
    }

    match focus {
        Focus::Nav => match key.code {
            KeyCode::Left => Action::Surface(SurfaceEvent::NavHighlightPrevious),
            KeyCode::Right => Action::Surface(SurfaceEvent::NavHighlightNext),
            KeyCode::Enter => Action::Surface(SurfaceEvent::NavToggle),
            KeyCode::Char('q') => Action::Quit,
            _ => Action::Ignore,
        },
        Focus::Section(SectionId::Newsletter) => match key.code {
            KeyCode::Char(character) => Action::Surface(SurfaceEvent::NewsletterInput { character }),
            KeyCode::Backspace => Action::Surface(SurfaceEvent::NewsletterBackspace),
            KeyCode::Enter => Action::Surface(SurfaceEvent::NewsletterSubmit),
            _ => Action::Ignore,
        },
        Focus::Section(section @ (SectionId::Services | SectionId::Products | SectionId::Testimonials)) => {
            let event = match key.code {
                KeyCode::Left => RotatorEvent::Previous,
                KeyCode::Right => RotatorEvent::Next,
                KeyCode::Char(digit @ '1'..='9') => {
                    let n = digit.to_digit(10).map_or(0, |d| d as usize);
                    RotatorEvent::GoTo(n - 1)
                }
                KeyCode::Char('q') => return Action::Quit,
                _ => return Action::Ignore,
            };
            Action::Surface(SurfaceEvent::Rotator { section, event })
        }
        Focus::Section(SectionId::Hero) => match key.code {
            KeyCode::Char('q') => Action::Quit,
            _ => Action::Ignore,
        },
    }
}
