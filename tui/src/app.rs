//! Main Application
//!
//! The App struct manages the TUI lifecycle as a thin display client:
//! - Event loop (keyboard, mouse, resize)
//! - The [`Showcase`] page core, polled every frame
//! - A [`PageFrame`] rebuilt from the core and drawn through the compositor
//!
//! Raw terminal input becomes [`SurfaceEvent`]s; everything that changes
//! over time (carousels, typewriter, newsletter) lives in the core.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{Event, EventStream, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::StatefulWidget;
use ratatui::Terminal;
use tracing::{debug, info};

use showcase_core::reveal::ENTRANCE_DURATION;
use showcase_core::{
    Easing, RotatorEvent, SectionId, Showcase, ShowcaseConfig, SurfaceEvent, SystemClock,
};

use crate::compositor::{Compositor, LayerId};
use crate::input::{map_key, Action, Focus};
use crate::page::nav::{dropdown, navbar};
use crate::page::PageFrame;
use crate::theme;
use crate::widgets::{PageView, PageViewState};

/// Rows taken by the navbar at the top
const NAVBAR_HEIGHT: u16 = 1;

/// Rows taken by the status bar at the bottom
const STATUS_HEIGHT: u16 = 1;

/// Rows not available to the page body
const CHROME_HEIGHT: u16 = NAVBAR_HEIGHT + STATUS_HEIGHT;

/// Rows per mouse wheel notch
const WHEEL_STEP: isize = 3;

/// Main application state
pub struct App {
    // === Core State ===
    /// Is the app still running?
    running: bool,
    /// The landing page state machines
    page: Showcase<SystemClock>,

    // === UI Components ===
    /// The layered compositor
    compositor: Compositor,
    /// Layer assignments
    layers: AppLayers,
    /// Page content for the current frame
    frame: PageFrame,
    /// Viewport over the page
    view: PageViewState,

    // === Input State ===
    focus: Focus,
    /// Last known mouse position
    pointer: Option<(u16, u16)>,
    /// Whether the pointer is over the testimonial carousel
    over_carousel: bool,

    // === Reveal State ===
    /// When each section's entrance fade began
    revealed_at: [Option<Instant>; SectionId::ALL.len()],
    /// Offset last sent to the core
    reported_scroll: Option<usize>,

    /// Terminal size
    size: (u16, u16),
}

/// Layer IDs for UI regions
struct AppLayers {
    page: LayerId,
    navbar: LayerId,
    dropdown: LayerId,
    status: LayerId,
}

impl App {
    /// Create a new App for the current terminal
    pub fn new(config: &ShowcaseConfig) -> anyhow::Result<Self> {
        let size = crossterm::terminal::size()?;
        Ok(Self::with_size(config, size))
    }

    fn with_size(config: &ShowcaseConfig, size: (u16, u16)) -> Self {
        let area = Rect::new(0, 0, size.0, size.1);
        let mut compositor = Compositor::new(area);

        let page = compositor.create_layer(
            Rect::new(0, NAVBAR_HEIGHT, area.width, area.height.saturating_sub(CHROME_HEIGHT)),
            0,
        );
        let navbar = compositor.create_layer(Rect::new(0, 0, area.width, NAVBAR_HEIGHT), 10);
        let status = compositor.create_layer(
            Rect::new(0, area.height.saturating_sub(STATUS_HEIGHT), area.width, STATUS_HEIGHT),
            10,
        );
        let dropdown = compositor.create_layer(Rect::new(0, NAVBAR_HEIGHT, 1, 1), 20);
        for layer in [page, navbar, status, dropdown] {
            compositor.set_opaque(layer, true);
        }
        compositor.set_visible(dropdown, false);

        Self {
            running: true,
            page: Showcase::new(config, SystemClock::new()),
            compositor,
            layers: AppLayers {
                page,
                navbar,
                dropdown,
                status,
            },
            frame: PageFrame::default(),
            view: PageViewState::default(),
            focus: Focus::Section(SectionId::Hero),
            pointer: None,
            over_carousel: false,
            revealed_at: [None; SectionId::ALL.len()],
            reported_scroll: None,
            size,
        }
    }

    /// Main event loop
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        // Target ~10 FPS; fades are short enough that this reads smoothly
        let frame_duration = Duration::from_millis(100);

        let mut event_stream = EventStream::new();

        self.update();
        self.render(terminal)?;

        while self.running {
            let frame_start = Instant::now();

            tokio::select! {
                biased;

                // Check for terminal events - highest priority
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        // Only handle Press events (not Release or Repeat)
                        Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                            self.handle_key(key);
                        }
                        Some(Ok(Event::Mouse(mouse))) => self.handle_mouse(mouse),
                        Some(Ok(Event::Resize(w, h))) => self.handle_resize(w, h),
                        Some(Ok(_)) => {}
                        Some(Err(e)) => {
                            tracing::warn!(error = %e, "Terminal event error");
                        }
                        None => self.running = false,
                    }
                }

                // Frame tick
                () = tokio::time::sleep(Duration::from_millis(16)) => {}
            }

            self.update();
            self.render(terminal)?;

            // Frame rate limiting
            let elapsed = frame_start.elapsed();
            if elapsed < frame_duration {
                tokio::time::sleep(frame_duration - elapsed).await;
            }
        }

        self.page.handle_event(SurfaceEvent::Unmount);
        Ok(())
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Handle keyboard input
    fn handle_key(&mut self, key: KeyEvent) {
        let dropdown_open = self.page.nav().open_dropdown().is_some();
        match map_key(self.focus, dropdown_open, key) {
            Action::Quit => {
                info!("Quit requested");
                self.running = false;
            }
            Action::FocusNext => self.set_focus(self.focus.next()),
            Action::FocusPrevious => self.set_focus(self.focus.previous()),
            Action::Scroll(rows) => self.view.scroll(rows),
            Action::ScrollPage(pages) => {
                let page = isize::try_from(self.view.viewport_height.max(1)).unwrap_or(1);
                self.view.scroll(pages.saturating_mul(page));
            }
            Action::ScrollTop => self.view.scroll_to(0),
            Action::ScrollBottom => self.view.scroll_to(usize::MAX),
            Action::Surface(event) => self.page.handle_event(event),
            Action::Ignore => {}
        }
    }

    /// Move focus, scrolling the focused section into view
    fn set_focus(&mut self, focus: Focus) {
        if self.focus == Focus::Nav && focus != Focus::Nav {
            self.page.handle_event(SurfaceEvent::NavClose);
        }
        self.focus = focus;
        if let Some(section) = focus.section() {
            self.view.scroll_to(self.frame.top_of(section));
        }
        debug!(focus = focus.label(), "Focus changed");
    }

    /// Handle mouse input
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.view.scroll(-WHEEL_STEP),
            MouseEventKind::ScrollDown => self.view.scroll(WHEEL_STEP),
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.pointer = Some((mouse.column, mouse.row));
            }
            _ => {}
        }
    }

    /// Handle terminal resize
    fn handle_resize(&mut self, width: u16, height: u16) {
        self.size = (width, height);
        self.compositor.resize(Rect::new(0, 0, width, height));

        let page_height = height.saturating_sub(CHROME_HEIGHT);
        self.compositor.move_layer(self.layers.page, 0, NAVBAR_HEIGHT);
        self.compositor.resize_layer(self.layers.page, width, page_height);

        self.compositor
            .resize_layer(self.layers.navbar, width, NAVBAR_HEIGHT);

        self.compositor
            .move_layer(self.layers.status, 0, height.saturating_sub(STATUS_HEIGHT));
        self.compositor
            .resize_layer(self.layers.status, width, STATUS_HEIGHT);

        debug!(width, height, "Terminal resized");
    }

    // =========================================================================
    // Per-frame update
    // =========================================================================

    /// Advance the core and rebuild the page
    fn update(&mut self) {
        self.page.poll();
        for (section, notice) in self.page.drain_notices() {
            debug!(?section, ?notice, "Rotator notice");
        }

        let now = Instant::now();
        for section in SectionId::ALL {
            let slot = &mut self.revealed_at[section.index()];
            if slot.is_none() && self.page.is_revealed(section) {
                *slot = Some(now);
            }
        }

        let revealed_at = self.revealed_at;
        self.frame = PageFrame::build(&self.page, self.size.0, self.focus.section(), |section| {
            entrance_opacity(revealed_at[section.index()], now)
        });
        self.view.set_extent(
            self.frame.lines.len(),
            usize::from(self.size.1.saturating_sub(CHROME_HEIGHT)),
        );

        self.report_viewport();
        self.update_hover();
    }

    /// Tell the core where the viewport is
    fn report_viewport(&mut self) {
        let scroll = self.view.scroll_offset;
        if self.reported_scroll != Some(scroll) {
            self.reported_scroll = Some(scroll);
            self.page.handle_event(SurfaceEvent::Scrolled { offset: scroll });
        }

        for section in SectionId::ALL {
            if self.page.is_revealed(section) {
                continue;
            }
            let fraction = self
                .frame
                .visible_fraction(section, scroll, self.view.viewport_height);
            if fraction > 0.0 {
                self.page
                    .handle_event(SurfaceEvent::SectionVisibility { section, fraction });
            }
        }
    }

    /// Page row under screen row `y` of the page layer
    fn page_row(&self, y: u16) -> usize {
        self.view.scroll_offset + usize::from(y.saturating_sub(NAVBAR_HEIGHT))
    }

    /// Forward pointer enter/leave for the carousel
    fn update_hover(&mut self) {
        let over = self.pointer.is_some_and(|(x, y)| {
            self.compositor.layer_at(x, y) == Some(self.layers.page)
                && self.frame.section_at(self.page_row(y)) == Some(SectionId::Testimonials)
        });

        if over != self.over_carousel {
            self.over_carousel = over;
            let event = if over {
                RotatorEvent::PointerEnter
            } else {
                RotatorEvent::PointerLeave
            };
            self.page.handle_event(SurfaceEvent::Rotator {
                section: SectionId::Testimonials,
                event,
            });
        }
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Render the UI
    fn render(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> anyhow::Result<()> {
        self.render_page();
        self.render_navbar();
        self.render_status();

        terminal.draw(|frame| {
            let output = self.compositor.composite();
            let area = frame.area();
            let buf = frame.buffer_mut();

            for y in 0..area.height.min(output.area.height) {
                for x in 0..area.width.min(output.area.width) {
                    buf[(x, y)] = output[(x, y)].clone();
                }
            }
        })?;

        Ok(())
    }

    /// Render page layer
    fn render_page(&mut self) {
        if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.page) {
            buf.reset();
            let area = buf.area;
            buf.set_style(area, Style::default().bg(theme::PAGE_BG));
            PageView::new(&self.frame.lines).render(area, buf, &mut self.view);
        }
    }

    /// Render navbar and dropdown layers
    fn render_navbar(&mut self) {
        let bar = navbar(self.page.nav(), self.focus == Focus::Nav);

        if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.navbar) {
            buf.reset();
            let area = buf.area;
            buf.set_style(area, bar.background);
            buf.set_line(area.x, area.y, &bar.line, area.width);
        }

        match dropdown(self.page.nav(), &bar.columns) {
            Some((column, lines)) => {
                let width = lines.iter().map(Line::width).max().unwrap_or(1);
                let width = u16::try_from(width).unwrap_or(u16::MAX);
                let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);

                self.compositor
                    .move_layer(self.layers.dropdown, column, NAVBAR_HEIGHT);
                self.compositor
                    .resize_layer(self.layers.dropdown, width, height);
                self.compositor.set_visible(self.layers.dropdown, true);

                if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.dropdown) {
                    buf.reset();
                    let area = buf.area;
                    buf.set_style(area, Style::default().bg(theme::SURFACE_BG));
                    for (y, line) in (area.y..area.bottom()).zip(&lines) {
                        buf.set_line(area.x, y, line, area.width);
                    }
                }
            }
            None => self.compositor.set_visible(self.layers.dropdown, false),
        }
    }

    /// Render status bar
    fn render_status(&mut self) {
        let carousel = if self.over_carousel {
            "carousel paused (hover)"
        } else if self.page.carousel().cooldown_active() {
            "carousel paused (cooldown)"
        } else if self.page.carousel().autoplay_enabled() {
            "carousel autoplay"
        } else {
            "carousel manual"
        };

        let line = Line::from(vec![
            Span::styled(format!(" {} ", self.focus.label()), theme::selected()),
            Span::styled(format!(" {}", self.focus.hints()), theme::body()),
            Span::styled(format!(" | Tab focus  q quit | {carousel}"), theme::muted()),
        ]);

        if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.status) {
            buf.reset();
            let area = buf.area;
            buf.set_style(area, Style::default().bg(theme::SURFACE_BG));
            buf.set_line(area.x, area.y, &line, area.width);
        }
    }
}

/// Entrance fade for a section revealed at `revealed_at`
///
/// Unrevealed sections are fully faded.
fn entrance_opacity(revealed_at: Option<Instant>, now: Instant) -> f32 {
    let Some(start) = revealed_at else {
        return 0.0;
    };
    let progress = now.saturating_duration_since(start).as_secs_f32() / ENTRANCE_DURATION.as_secs_f32();
    Easing::EaseOutCubic.apply(progress)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn app() -> App {
        App::with_size(&ShowcaseConfig::default(), (100, 30))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_entrance_opacity() {
        let now = Instant::now();
        assert_eq!(entrance_opacity(None, now), 0.0);
        assert!((entrance_opacity(Some(now), now + ENTRANCE_DURATION) - 1.0).abs() < f32::EPSILON);
        let halfway = entrance_opacity(Some(now), now + ENTRANCE_DURATION / 2);
        assert!(halfway > 0.5 && halfway < 1.0);
    }

    #[test]
    fn test_focus_scrolls_section_into_view() {
        let mut app = app();
        app.update();

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Section(SectionId::Services));
        assert_eq!(app.view.scroll_offset, app.frame.top_of(SectionId::Services));

        app.update();
        assert!(app.page.is_revealed(SectionId::Services));
        assert!(app.page.nav().is_scrolled());
    }

    #[test]
    fn test_pointer_over_carousel_pauses_it() {
        let mut app = app();
        app.update();
        app.set_focus(Focus::Section(SectionId::Testimonials));
        app.update();

        // Second row of the section, offset by the navbar
        let row = app.frame.top_of(SectionId::Testimonials) + 1 + usize::from(NAVBAR_HEIGHT)
            - app.view.scroll_offset;
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 10,
            row: u16::try_from(row).unwrap(),
            modifiers: KeyModifiers::NONE,
        });
        app.update();
        assert!(app.over_carousel);
        assert!(!app.page.carousel().autoplay_enabled());

        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 10,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        app.update();
        assert!(!app.over_carousel);
        assert!(app.page.carousel().autoplay_enabled());
    }

    #[test]
    fn test_chrome_rows_match_hit_testing() {
        let mut app = app();
        app.handle_resize(80, 20);
        let layers = &app.layers;

        assert_eq!(app.compositor.layer_at(0, NAVBAR_HEIGHT - 1), Some(layers.navbar));
        assert_eq!(app.compositor.layer_at(0, NAVBAR_HEIGHT), Some(layers.page));
        assert_eq!(app.compositor.layer_at(0, 20 - STATUS_HEIGHT - 1), Some(layers.page));
        assert_eq!(app.compositor.layer_at(0, 20 - STATUS_HEIGHT), Some(layers.status));

        app.view.scroll_to(5);
        assert_eq!(app.page_row(NAVBAR_HEIGHT), app.view.scroll_offset);
        assert_eq!(app.page_row(NAVBAR_HEIGHT + 3), app.view.scroll_offset + 3);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }
}
