//! Showcase - Page Orchestrator
//!
//! Owns one instance of every state machine on the landing page and routes
//! [`SurfaceEvent`]s to them. A surface drives it with three calls:
//!
//! ```text
//! input ──► handle_event(SurfaceEvent)
//! tick  ──► poll()            (delivers due timers everywhere)
//! frame ──► accessors / drain_notices()
//! ```
//!
//! All machines share one [`Clock`], each with its own scheduler, so
//! disposing the page cancels every outstanding timer at once.

use tracing::{debug, info, trace};

use crate::config::ShowcaseConfig;
use crate::content::{self, CtaFeature, Product, Service, ServiceCategory, Stat, Testimonial};
use crate::events::{RotatorEvent, SectionId, SurfaceEvent};
use crate::items::ItemSet;
use crate::messages::RotatorNotice;
use crate::navigation::NavMenu;
use crate::newsletter::Subscription;
use crate::reveal::RevealLatch;
use crate::rotator::Rotator;
use crate::scheduler::{Clock, Scheduler, SystemClock};
use crate::typewriter::{LineReveal, Typewriter};

/// Route the page is served at
pub const HOME_PATH: &str = "/";

/// The landing page
#[derive(Debug)]
pub struct Showcase<C: Clock + Clone = SystemClock> {
    nav: NavMenu,
    reveals: [RevealLatch; SectionId::ALL.len()],
    scroll_offset: usize,

    typewriter: Typewriter<C>,
    code: LineReveal<C>,

    services: ItemSet<Service>,
    service_tabs: Rotator<C>,

    products: ItemSet<Product>,
    product_tabs: Rotator<C>,

    testimonials: ItemSet<Testimonial>,
    carousel: Rotator<C>,

    newsletter: Subscription<C>,

    disposed: bool,
}

impl<C: Clock + Clone> Showcase<C> {
    /// Mount the page
    ///
    /// The hero is revealed immediately; other sections wait for
    /// visibility reports.
    pub fn new(config: &ShowcaseConfig, clock: C) -> Self {
        let services = content::services();
        let products = content::products();
        let testimonials = content::testimonials();

        let categories = ItemSet::from_static(ServiceCategory::ALL.to_vec());
        let service_tabs = Rotator::for_items(&categories, config.services, Scheduler::new(clock.clone()));
        let product_tabs = Rotator::for_items(&products, config.products, Scheduler::new(clock.clone()));
        let carousel = Rotator::for_items(&testimonials, config.testimonials, Scheduler::new(clock.clone()));

        let mut reveals = [RevealLatch::default(); SectionId::ALL.len()];
        reveals[SectionId::Hero.index()].observe(1.0);

        info!(
            source = %config.source(),
            autoplay = config.testimonials.autoplay,
            "Showcase mounted"
        );

        Self {
            nav: NavMenu::new(content::nav_items(), HOME_PATH),
            reveals,
            scroll_offset: 0,
            typewriter: Typewriter::new(content::hero_phrases(), config.typewriter, Scheduler::new(clock.clone())),
            code: LineReveal::new(content::code_snippet(), config.code_step, Scheduler::new(clock.clone())),
            services,
            service_tabs,
            products,
            product_tabs,
            testimonials,
            carousel,
            newsletter: Subscription::new(config.submit_delay, Scheduler::new(clock)),
            disposed: false,
        }
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Apply one surface event
    pub fn handle_event(&mut self, event: SurfaceEvent) {
        if self.disposed {
            trace!(?event, "Ignoring event after unmount");
            return;
        }

        match event {
            SurfaceEvent::Rotator { section, event } => self.route_rotator(section, event),
            SurfaceEvent::SectionVisibility { section, fraction } => {
                if self.reveals[section.index()].observe(fraction) {
                    debug!(?section, fraction, "Section revealed");
                }
            }
            SurfaceEvent::Scrolled { offset } => {
                self.scroll_offset = offset;
                self.nav.set_scrolled(offset);
            }
            SurfaceEvent::NewsletterInput { character } => self.newsletter.push_char(character),
            SurfaceEvent::NewsletterBackspace => self.newsletter.backspace(),
            SurfaceEvent::NewsletterSubmit => {
                if let Err(err) = self.newsletter.submit() {
                    debug!(%err, "Newsletter submit refused");
                }
            }
            SurfaceEvent::NavHighlightNext => self.nav.highlight_next(),
            SurfaceEvent::NavHighlightPrevious => self.nav.highlight_previous(),
            SurfaceEvent::NavToggle => self.nav.toggle_highlighted(),
            SurfaceEvent::NavClose => self.nav.close(),
            SurfaceEvent::Unmount => self.dispose(),
        }
    }

    fn route_rotator(&mut self, section: SectionId, event: RotatorEvent) {
        match self.rotator_mut(section) {
            Some(rotator) => rotator.handle_event(event),
            None => trace!(?section, "Section has no rotator"),
        }
    }

    // =========================================================================
    // Timers & lifecycle
    // =========================================================================

    /// Deliver due timers to every machine; returns how many fired
    pub fn poll(&mut self) -> usize {
        if self.disposed {
            return 0;
        }
        self.typewriter.poll()
            + self.code.poll()
            + self.service_tabs.poll()
            + self.product_tabs.poll()
            + self.carousel.poll()
            + self.newsletter.poll()
    }

    /// Cancel every timer; later events and polls are ignored
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.typewriter.dispose();
        self.code.dispose();
        self.service_tabs.dispose();
        self.product_tabs.dispose();
        self.carousel.dispose();
        self.newsletter.dispose();
        self.disposed = true;
        info!("Showcase unmounted");
    }

    /// Whether the page has been unmounted
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Rotator notices from every section since the last call
    pub fn drain_notices(&mut self) -> Vec<(SectionId, RotatorNotice)> {
        let mut notices = Vec::new();
        for section in [SectionId::Services, SectionId::Products, SectionId::Testimonials] {
            if let Some(rotator) = self.rotator_mut(section) {
                notices.extend(rotator.drain_notices().into_iter().map(|n| (section, n)));
            }
        }
        notices
    }

    // =========================================================================
    // Read-only projections
    // =========================================================================

    /// The rotator behind `section`, if it has one
    pub fn rotator(&self, section: SectionId) -> Option<&Rotator<C>> {
        match section {
            SectionId::Services => Some(&self.service_tabs),
            SectionId::Products => Some(&self.product_tabs),
            SectionId::Testimonials => Some(&self.carousel),
            SectionId::Hero | SectionId::Newsletter => None,
        }
    }

    fn rotator_mut(&mut self, section: SectionId) -> Option<&mut Rotator<C>> {
        match section {
            SectionId::Services => Some(&mut self.service_tabs),
            SectionId::Products => Some(&mut self.product_tabs),
            SectionId::Testimonials => Some(&mut self.carousel),
            SectionId::Hero | SectionId::Newsletter => None,
        }
    }

    /// Navbar state
    pub fn nav(&self) -> &NavMenu {
        &self.nav
    }

    /// Last reported scroll offset
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Whether `section` has scrolled into view at least once
    pub fn is_revealed(&self, section: SectionId) -> bool {
        self.reveals[section.index()].is_revealed()
    }

    /// Hero phrase typewriter
    pub fn typewriter(&self) -> &Typewriter<C> {
        &self.typewriter
    }

    /// Hero code snippet reveal
    pub fn code_reveal(&self) -> &LineReveal<C> {
        &self.code
    }

    /// Service category tab switcher
    pub fn service_tabs(&self) -> &Rotator<C> {
        &self.service_tabs
    }

    /// Featured product tab switcher
    pub fn product_tabs(&self) -> &Rotator<C> {
        &self.product_tabs
    }

    /// Testimonial carousel
    pub fn carousel(&self) -> &Rotator<C> {
        &self.carousel
    }

    /// Newsletter form
    pub fn newsletter(&self) -> &Subscription<C> {
        &self.newsletter
    }

    /// All service cards
    pub fn services(&self) -> &ItemSet<Service> {
        &self.services
    }

    /// All products
    pub fn products(&self) -> &ItemSet<Product> {
        &self.products
    }

    /// All testimonials
    pub fn testimonials(&self) -> &ItemSet<Testimonial> {
        &self.testimonials
    }

    /// The selected service category tab
    pub fn active_service_category(&self) -> ServiceCategory {
        ServiceCategory::from_index(self.service_tabs.current_index()).unwrap_or(ServiceCategory::All)
    }

    /// Service cards under the selected category tab
    pub fn visible_services(&self) -> Vec<&Service> {
        let category = self.active_service_category();
        self.services.iter().filter(|s| category.includes(s.id)).collect()
    }

    /// Product shown in the product panel
    pub fn active_product(&self) -> &Product {
        self.products
            .get(self.product_tabs.current_index())
            .unwrap_or_else(|| self.products.first())
    }

    /// Testimonial shown in the carousel
    pub fn active_testimonial(&self) -> &Testimonial {
        self.testimonials
            .get(self.carousel.current_index())
            .unwrap_or_else(|| self.testimonials.first())
    }

    /// Impact figures
    pub fn stats(&self) -> ItemSet<Stat> {
        content::stats()
    }

    /// Call-to-action selling points
    pub fn cta_features(&self) -> ItemSet<CtaFeature> {
        content::cta_features()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::scheduler::ManualClock;

    fn page() -> (Showcase<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        (Showcase::new(&ShowcaseConfig::default(), clock.clone()), clock)
    }

    #[test]
    fn test_initial_page() {
        let (page, _) = page();
        assert!(page.is_revealed(SectionId::Hero));
        assert!(!page.is_revealed(SectionId::Testimonials));
        assert_eq!(page.active_service_category(), ServiceCategory::All);
        assert_eq!(page.visible_services().len(), 6);
        assert_eq!(page.active_product().id, "pyanalytics");
        assert_eq!(page.active_testimonial().author, "Sarah Johnson");
        assert!(page.rotator(SectionId::Hero).is_none());
    }

    #[test]
    fn test_service_tab_filters_after_transition() {
        let (mut page, clock) = page();
        page.handle_event(SurfaceEvent::Rotator {
            section: SectionId::Services,
            event: RotatorEvent::GoTo(3),
        });
        // Still showing the old tab during the swap
        assert_eq!(page.visible_services().len(), 6);

        clock.advance(Duration::from_millis(300));
        page.poll();
        assert_eq!(page.active_service_category(), ServiceCategory::Development);
        let ids: Vec<_> = page.visible_services().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["api-development", "cloud-deployment"]);
    }

    #[test]
    fn test_section_reveal_latches() {
        let (mut page, _) = page();
        page.handle_event(SurfaceEvent::SectionVisibility {
            section: SectionId::Products,
            fraction: 0.2,
        });
        page.handle_event(SurfaceEvent::SectionVisibility {
            section: SectionId::Products,
            fraction: 0.0,
        });
        assert!(page.is_revealed(SectionId::Products));
    }

    #[test]
    fn test_scroll_updates_navbar() {
        let (mut page, _) = page();
        page.handle_event(SurfaceEvent::Scrolled { offset: 40 });
        assert!(page.nav().is_scrolled());
        assert_eq!(page.scroll_offset(), 40);
    }

    #[test]
    fn test_newsletter_flow() {
        let (mut page, clock) = page();
        for character in "hi@pycoder.dev".chars() {
            page.handle_event(SurfaceEvent::NewsletterInput { character });
        }
        page.handle_event(SurfaceEvent::NewsletterSubmit);
        clock.advance(Duration::from_millis(1500));
        page.poll();
        assert_eq!(
            page.newsletter().state(),
            crate::newsletter::SubscriptionState::Subscribed
        );
    }

    #[test]
    fn test_unmount_stops_everything() {
        let (mut page, clock) = page();
        page.handle_event(SurfaceEvent::Unmount);
        assert!(page.is_disposed());

        page.handle_event(SurfaceEvent::Rotator {
            section: SectionId::Testimonials,
            event: RotatorEvent::Next,
        });
        clock.advance(Duration::from_secs(60));
        assert_eq!(page.poll(), 0);
        assert_eq!(page.carousel().current_index(), 0);
        assert_eq!(page.typewriter().visible_text(), "");
        assert!(page.typewriter().is_disposed());
        assert!(page.code_reveal().is_disposed());
        assert_eq!(page.code_reveal().visible_lines(), 0);
    }
}
