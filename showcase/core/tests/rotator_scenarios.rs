//! Rotator Scenario Tests
//!
//! Drive rotators and the full page through timelines on a manual clock and
//! check the observable behaviour at each step.

use std::num::NonZeroUsize;
use std::time::Duration;

use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use showcase_core::{
    ManualClock, Motion, PauseReason, Rotator, RotatorConfig, RotatorEvent, RotatorNotice,
    RotatorSnapshot, RotatorTimer, Scheduler, SectionId, Showcase, ShowcaseConfig, SurfaceEvent,
};

// =============================================================================
// Helpers
// =============================================================================

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn rotator(len: usize, config: RotatorConfig) -> (Rotator<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let len = NonZeroUsize::new(len).expect("len must be non-zero");
    (Rotator::new(len, config, Scheduler::new(clock.clone())), clock)
}

/// Jump the clock to `at` and deliver everything that came due
fn run_until(rotator: &mut Rotator<ManualClock>, clock: &ManualClock, at: u64) {
    clock.set(ms(at));
    rotator.poll();
}

fn autoplay_timers(rotator: &Rotator<ManualClock>) -> usize {
    rotator
        .scheduler()
        .pending_matching(|timer| *timer == RotatorTimer::AutoAdvance)
}

// =============================================================================
// Timelines
// =============================================================================

#[test]
fn test_end_to_end_autoplay_timeline() {
    let config = RotatorConfig::testimonials();
    let (mut r, clock) = rotator(3, config);
    assert_eq!(r.current_index(), 0);

    run_until(&mut r, &clock, 6000);
    assert!(r.is_transitioning());
    assert_eq!(r.current_index(), 0);

    run_until(&mut r, &clock, 6500);
    assert_eq!(r.current_index(), 1);
    assert!(!r.is_transitioning());

    run_until(&mut r, &clock, 12_500);
    assert_eq!(r.current_index(), 2);

    run_until(&mut r, &clock, 18_500);
    assert_eq!(r.current_index(), 0);
}

#[test]
fn test_single_large_step_matches_small_steps() {
    let (mut stepped, stepped_clock) = rotator(3, RotatorConfig::testimonials());
    for t in (0..=18_500).step_by(100) {
        run_until(&mut stepped, &stepped_clock, t);
    }

    let (mut jumped, jumped_clock) = rotator(3, RotatorConfig::testimonials());
    run_until(&mut jumped, &jumped_clock, 18_500);

    assert_eq!(stepped.snapshot(), jumped.snapshot());
    assert_eq!(jumped.current_index(), 0);
}

#[test]
fn test_manual_navigation_cooldown() {
    let (mut r, clock) = rotator(5, RotatorConfig::testimonials());

    r.handle_event(RotatorEvent::Next);
    assert!(!r.autoplay_enabled());
    assert!(r.cooldown_active());

    run_until(&mut r, &clock, 500);
    assert_eq!(r.current_index(), 1);

    run_until(&mut r, &clock, 8000);
    assert!(r.autoplay_enabled());
    assert!(!r.cooldown_active());

    run_until(&mut r, &clock, 13_999);
    assert_eq!(r.current_index(), 1);
    assert!(!r.is_transitioning());

    run_until(&mut r, &clock, 14_000);
    assert!(r.is_transitioning());

    run_until(&mut r, &clock, 14_500);
    assert_eq!(r.current_index(), 2);
}

#[test]
fn test_repeated_navigation_restarts_cooldown() {
    let (mut r, clock) = rotator(5, RotatorConfig::testimonials());

    r.handle_event(RotatorEvent::Next);
    run_until(&mut r, &clock, 5000);
    r.handle_event(RotatorEvent::Previous);

    run_until(&mut r, &clock, 12_999);
    assert!(!r.autoplay_enabled());

    run_until(&mut r, &clock, 13_000);
    assert!(r.autoplay_enabled());
    assert_eq!(
        r.scheduler()
            .pending_matching(|t| *t == RotatorTimer::CooldownElapsed),
        0
    );
}

#[test]
fn test_notices_describe_timeline() {
    let (mut r, clock) = rotator(3, RotatorConfig::testimonials());
    r.handle_event(RotatorEvent::GoTo(2));
    run_until(&mut r, &clock, 500);

    assert_eq!(
        r.drain_notices(),
        vec![
            RotatorNotice::TransitionStarted { from: 0, to: 2 },
            RotatorNotice::AutoplayPaused {
                reason: PauseReason::Cooldown
            },
            RotatorNotice::TransitionCompleted { index: 2 },
        ]
    );
    assert!(r.drain_notices().is_empty());
}

#[test]
fn test_next_then_previous_within_fade_returns_to_start() {
    let (mut r, clock) = rotator(5, RotatorConfig::testimonials());

    r.handle_event(RotatorEvent::Next);
    run_until(&mut r, &clock, 100);
    r.handle_event(RotatorEvent::Previous);
    assert_eq!(r.pending_target(), None);

    run_until(&mut r, &clock, 600);
    assert_eq!(r.current_index(), 0);
    assert!(!r.is_transitioning());
    assert!(r.cooldown_active());
    assert_eq!(
        r.drain_notices(),
        vec![
            RotatorNotice::TransitionStarted { from: 0, to: 1 },
            RotatorNotice::AutoplayPaused {
                reason: PauseReason::Cooldown
            },
            RotatorNotice::TransitionCancelled { from: 1, index: 0 },
        ]
    );
}

// =============================================================================
// Properties
// =============================================================================

#[test]
fn test_wraparound_both_directions() {
    let (mut r, clock) = rotator(4, RotatorConfig::product_tabs());
    r.go_to(3);
    run_until(&mut r, &clock, 300);

    r.next();
    run_until(&mut r, &clock, 600);
    assert_eq!(r.current_index(), 0);

    r.previous();
    run_until(&mut r, &clock, 900);
    assert_eq!(r.current_index(), 3);
}

#[test]
fn test_goto_current_is_noop() {
    let (mut r, clock) = rotator(3, RotatorConfig::testimonials());
    run_until(&mut r, &clock, 1000);
    let before = r.snapshot();
    let deadline = r.scheduler().next_deadline();

    assert!(!r.go_to(0));
    r.handle_event(RotatorEvent::GoTo(0));

    assert_eq!(r.snapshot(), before);
    assert_eq!(r.scheduler().next_deadline(), deadline);
    assert!(r.autoplay_enabled());
}

#[test]
fn test_random_operations_keep_invariants() {
    for seed in 0..32 {
        let mut rng = StdRng::seed_from_u64(seed);
        let len = rng.gen_range(1..=7);
        let (mut r, clock) = rotator(len, RotatorConfig::testimonials());
        let mut now = 0;

        for _ in 0..200 {
            match rng.gen_range(0..8) {
                0 => {
                    r.next();
                }
                1 => {
                    r.previous();
                }
                2 => {
                    r.go_to(rng.gen_range(0..len + 3));
                }
                3 => r.pause_autoplay(),
                4 => r.resume_autoplay(),
                5 => r.handle_event(RotatorEvent::Next),
                6 => r.handle_event(if rng.gen_bool(0.5) {
                    RotatorEvent::PointerEnter
                } else {
                    RotatorEvent::PointerLeave
                }),
                _ => {
                    now += rng.gen_range(0..9000);
                    run_until(&mut r, &clock, now);
                }
            }

            assert!(r.current_index() < len, "seed {seed}: index out of range");
            if let Some(target) = r.pending_target() {
                assert!(target < len, "seed {seed}: target out of range");
                assert_ne!(target, r.current_index(), "seed {seed}: no-op transition");
            }
            assert_eq!(
                r.scheduler()
                    .pending_matching(|t| *t == RotatorTimer::TransitionComplete),
                usize::from(r.is_transitioning()),
                "seed {seed}: fade timer out of step with pending target"
            );
            assert!(autoplay_timers(&r) <= 1, "seed {seed}: duplicate autoplay timers");
            assert!(
                r.scheduler()
                    .pending_matching(|t| *t == RotatorTimer::TransitionComplete)
                    <= 1,
                "seed {seed}: concurrent transitions"
            );
            if !r.autoplay_enabled() {
                assert_eq!(autoplay_timers(&r), 0, "seed {seed}: timer while paused");
            }
        }
    }
}

#[test]
fn test_disposal_freezes_state() {
    let (mut r, clock) = rotator(5, RotatorConfig::testimonials());
    run_until(&mut r, &clock, 6200);
    assert!(r.is_transitioning());

    r.handle_event(RotatorEvent::Next);
    r.dispose();
    let frozen = r.snapshot();

    run_until(&mut r, &clock, 1_000_000);
    r.handle_event(RotatorEvent::Previous);
    r.resume_autoplay();

    assert_eq!(r.snapshot(), frozen);
    assert_eq!(
        frozen,
        RotatorSnapshot {
            len: 5,
            current_index: 0,
            pending_target: None,
            is_transitioning: false,
            autoplay_enabled: false,
            cooldown_active: false,
        }
    );
    assert!(r.scheduler().is_idle());
}

#[test]
fn test_retarget_lands_on_latest_request() {
    let (mut r, clock) = rotator(5, RotatorConfig::product_tabs());
    r.go_to(1);
    run_until(&mut r, &clock, 100);
    r.go_to(4);
    run_until(&mut r, &clock, 200);
    r.go_to(3);
    assert_eq!(r.phase().motion, Motion::Transitioning { target: 3 });

    run_until(&mut r, &clock, 300);
    assert_eq!(r.current_index(), 3);
}

// =============================================================================
// Whole Page
// =============================================================================

#[test]
fn test_page_carousel_pauses_on_hover() {
    let clock = ManualClock::new();
    let mut page = Showcase::new(&ShowcaseConfig::default(), clock.clone());

    page.handle_event(SurfaceEvent::Rotator {
        section: SectionId::Testimonials,
        event: RotatorEvent::PointerEnter,
    });
    clock.set(ms(30_000));
    page.poll();
    assert_eq!(page.active_testimonial().author, "Sarah Johnson");

    page.handle_event(SurfaceEvent::Rotator {
        section: SectionId::Testimonials,
        event: RotatorEvent::PointerLeave,
    });
    clock.set(ms(36_500));
    page.poll();
    assert_eq!(page.active_testimonial().author, "Michael Chen");

    let notices = page.drain_notices();
    assert!(notices
        .iter()
        .all(|(section, _)| *section == SectionId::Testimonials));
}

#[test]
fn test_page_product_tabs_do_not_autoplay() {
    let clock = ManualClock::new();
    let mut page = Showcase::new(&ShowcaseConfig::default(), clock.clone());

    clock.set(ms(60_000));
    page.poll();
    assert_eq!(page.active_product().id, "pyanalytics");

    page.handle_event(SurfaceEvent::Rotator {
        section: SectionId::Products,
        event: RotatorEvent::GoTo(2),
    });
    clock.set(ms(60_300));
    page.poll();
    assert_eq!(page.active_product().title, "DataFlow Engine");
}
