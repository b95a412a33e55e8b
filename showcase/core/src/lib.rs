//! Showcase Core - Headless State Machines for the Pycoder Landing Page
//!
//! This crate holds everything on the landing page that changes over time,
//! completely independent of any UI framework: the carousel and tab
//! rotators, the hero typewriter, the newsletter form, navbar state and
//! scroll reveals. Surfaces (the terminal UI, tests) feed it input and
//! render its projections.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                     Presentation Surface                      │
//! │               (showcase-tui, tests, headless)                 │
//! └──────────────┬─────────────────────────────────▲──────────────┘
//!                │ SurfaceEvent (up)               │ snapshots / notices (down)
//! ┌──────────────▼─────────────────────────────────┴──────────────┐
//! │                           Showcase                            │
//! │  ┌──────────┐ ┌────────────┐ ┌──────────────┐ ┌────────────┐  │
//! │  │ Rotator  │ │ Typewriter │ │ Subscription │ │  NavMenu   │  │
//! │  │  (x3)    │ │ LineReveal │ │              │ │ RevealLatch│  │
//! │  └────┬─────┘ └─────┬──────┘ └──────┬───────┘ └────────────┘  │
//! │       └─────────────┴───────────────┘                         │
//! │                 Scheduler<K, C: Clock> (one per machine)      │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`Rotator`]: carousel state machine (cross-fade, autoplay, cooldown)
//! - [`Scheduler`] and [`Clock`]: cancellable one-shot timers over an
//!   injectable time source ([`ManualClock`] in tests)
//! - [`Showcase`]: owns every machine on the page
//! - [`SurfaceEvent`]: input from surfaces
//!
//! # Quick Start
//!
//! ```
//! use std::time::Duration;
//! use showcase_core::{ManualClock, SectionId, RotatorEvent, Showcase, ShowcaseConfig, SurfaceEvent};
//!
//! let clock = ManualClock::new();
//! let mut page = Showcase::new(&ShowcaseConfig::default(), clock.clone());
//!
//! page.handle_event(SurfaceEvent::Rotator {
//!     section: SectionId::Testimonials,
//!     event: RotatorEvent::Next,
//! });
//! clock.advance(Duration::from_millis(500));
//! page.poll();
//!
//! assert_eq!(page.active_testimonial().author, "Michael Chen");
//! ```

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod config;
pub mod content;
pub mod easing;
pub mod events;
pub mod items;
pub mod messages;
pub mod navigation;
pub mod newsletter;
pub mod reveal;
pub mod rotator;
pub mod scheduler;
pub mod showcase;
pub mod typewriter;

// Re-exports for convenience
pub use config::{
    default_config_path, load_config, load_config_from_path, ConfigError, ConfigOverrides,
    ConfigSource, ShowcaseConfig,
};
pub use easing::{CrossFade, Easing};
pub use events::{RotatorEvent, SectionId, SurfaceEvent};
pub use items::{ItemSet, ItemSetError};
pub use messages::{Motion, PauseReason, Playback, RotatorNotice, RotatorPhase, RotatorSnapshot};
pub use navigation::{NavItem, NavLink, NavMenu};
pub use newsletter::{SubscribeError, Subscription, SubscriptionState};
pub use reveal::RevealLatch;
pub use rotator::{Rotator, RotatorConfig, RotatorTimer};
pub use scheduler::{Clock, ManualClock, Scheduler, SystemClock, TimerId};
pub use showcase::Showcase;
pub use typewriter::{LineReveal, Typewriter, TypewriterConfig, TypewriterPhase};
