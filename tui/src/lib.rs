//! Showcase TUI - Terminal rendition of the Pycoder landing page
//!
//! A thin surface over `showcase-core`: it turns key presses and mouse
//! movement into `SurfaceEvent`s, polls the page every frame, and draws the
//! result through a layered compositor.
//!
//! # Architecture
//!
//! - **Compositor**: z-ordered layers (page body, navbar, dropdown, status bar)
//! - **Page**: section renderers laid out into one scrollable column
//! - **Widgets**: the borderless page viewport
//! - **Input**: focus tracking and key bindings

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod compositor;
pub mod input;
pub mod page;
pub mod theme;
pub mod widgets;

pub use app::App;
