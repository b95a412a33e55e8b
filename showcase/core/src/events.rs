//! Surface Events - Messages from the presentation surface to the core
//!
//! Surfaces (the terminal UI, tests, anything that renders the page)
//! translate raw input into these events. They are the only mutation entry
//! points the core exposes to a surface.

use serde::{Deserialize, Serialize};

/// Sections of the landing page, top to bottom
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SectionId {
    /// Headline with typed phrases and code snippet
    Hero,
    /// Service cards filtered by category tabs
    Services,
    /// Featured products tab switcher
    Products,
    /// Client testimonial carousel
    Testimonials,
    /// Call to action and newsletter signup
    Newsletter,
}

impl SectionId {
    /// All sections in page order
    pub const ALL: [SectionId; 5] = [
        Self::Hero,
        Self::Services,
        Self::Products,
        Self::Testimonials,
        Self::Newsletter,
    ];

    /// Position in page order
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Hero => 0,
            Self::Services => 1,
            Self::Products => 2,
            Self::Testimonials => 3,
            Self::Newsletter => 4,
        }
    }

    /// Next section (wrapping)
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous section (wrapping)
    #[must_use]
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Heading shown for the section
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::Services => "Our Services",
            Self::Products => "Our Products",
            Self::Testimonials => "Client Success Stories",
            Self::Newsletter => "Get Started",
        }
    }
}

/// User input aimed at a rotator
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RotatorEvent {
    /// Next button
    Next,
    /// Previous button
    Previous,
    /// Dot / tab button for a specific item
    GoTo(usize),
    /// Pointer moved over the rotator
    PointerEnter,
    /// Pointer left the rotator
    PointerLeave,
}

/// Events sent from a surface to the [`Showcase`](crate::Showcase)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SurfaceEvent {
    /// Input for the rotator that belongs to `section`
    Rotator {
        /// Target section
        section: SectionId,
        /// The input
        event: RotatorEvent,
    },

    /// Portion of a section currently inside the viewport (0.0 to 1.0)
    SectionVisibility {
        /// Observed section
        section: SectionId,
        /// Visible fraction of the section's height
        fraction: f32,
    },

    /// Page scroll position changed (in rows or pixels, surface-defined)
    Scrolled {
        /// Distance from the top of the page
        offset: usize,
    },

    /// A character typed into the newsletter address field
    NewsletterInput {
        /// The typed character
        character: char,
    },

    /// Delete the last character of the newsletter address
    NewsletterBackspace,

    /// Submit the newsletter form
    NewsletterSubmit,

    /// Move the navbar highlight right
    NavHighlightNext,

    /// Move the navbar highlight left
    NavHighlightPrevious,

    /// Open or close the highlighted navbar dropdown
    NavToggle,

    /// Close any open navbar dropdown
    NavClose,

    /// The surface is going away
    Unmount,
}
