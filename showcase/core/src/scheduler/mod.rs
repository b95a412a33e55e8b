//! Scheduler - Cancellable One-Shot Timers
//!
//! Every state machine in this crate expresses its deferred work (fade
//! windows, autoplay countdowns, keystrokes, simulated submissions) as
//! one-shot timers on a [`Scheduler`]. The scheduler never runs callbacks
//! itself: the owning machine drains due timers with
//! [`Scheduler::pop_due`] and dispatches them. Because the machine owns its
//! scheduler, no timer can outlive the machine it belongs to.
//!
//! # Timing Model
//!
//! ```text
//! schedule(500ms) ──► queue ordered by (deadline, id)
//!                          │
//!    clock.now() >= deadline?
//!                          │
//!                   pop_due() ──► (TimerId, payload)
//!                          │
//!       now() == deadline while the payload is dispatched
//! ```
//!
//! While a due timer is being dispatched, [`Scheduler::now`] reports that
//! timer's deadline rather than the clock's current time. Timers scheduled
//! from inside a dispatch are therefore anchored to the instant the previous
//! one fired, which keeps periodic work drift-free and makes a manual clock
//! advanced in a single large step behave exactly like one advanced in
//! small increments.

mod clock;

pub use clock::{Clock, ManualClock, SystemClock};

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

/// Shortest delay used for self-rescheduling periodic work
///
/// Periodic timers rescheduled from inside a dispatch with a zero delay
/// would come due again in the same drain loop and never let it finish.
pub const MIN_TIMER_DELAY: Duration = Duration::from_millis(1);

/// Opaque handle to a scheduled timer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// One-shot timer queue over an injectable [`Clock`]
///
/// `K` is the payload delivered when a timer comes due; each state machine
/// uses its own small enum.
#[derive(Debug)]
pub struct Scheduler<K, C = SystemClock> {
    clock: C,
    /// Pending timers keyed by deadline; ids are monotonic so ties keep scheduling order
    queue: BTreeMap<(Duration, TimerId), K>,
    /// Reverse index for cancellation
    deadlines: HashMap<TimerId, Duration>,
    next_id: u64,
    /// Deadline of the timer currently being dispatched
    dispatching_at: Option<Duration>,
}

impl<K, C: Clock> Scheduler<K, C> {
    /// Create an empty scheduler driven by `clock`
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            queue: BTreeMap::new(),
            deadlines: HashMap::new(),
            next_id: 0,
            dispatching_at: None,
        }
    }

    /// The underlying clock
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Current scheduling time
    ///
    /// Equal to the deadline of the timer being dispatched, otherwise the
    /// clock's time.
    pub fn now(&self) -> Duration {
        self.dispatching_at.unwrap_or_else(|| self.clock.now())
    }

    /// Schedule `payload` to come due after `delay`
    pub fn schedule(&mut self, delay: Duration, payload: K) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;

        let deadline = self.now().saturating_add(delay);
        self.queue.insert((deadline, id), payload);
        self.deadlines.insert(id, deadline);

        tracing::trace!(timer = id.0, deadline = ?deadline, "Timer scheduled");
        id
    }

    /// Cancel a pending timer. Returns `false` if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.deadlines.remove(&id) {
            Some(deadline) => {
                self.queue.remove(&(deadline, id));
                tracing::trace!(timer = id.0, "Timer cancelled");
                true
            }
            None => false,
        }
    }

    /// Cancel every pending timer, returning how many were dropped
    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.queue.len();
        self.queue.clear();
        self.deadlines.clear();
        self.dispatching_at = None;
        dropped
    }

    /// Number of pending timers
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Number of pending timers whose payload satisfies `predicate`
    pub fn pending_matching(&self, predicate: impl Fn(&K) -> bool) -> usize {
        self.queue.values().filter(|payload| predicate(payload)).count()
    }

    /// Whether no timers are pending
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    /// Deadline of a pending timer
    pub fn deadline(&self, id: TimerId) -> Option<Duration> {
        self.deadlines.get(&id).copied()
    }

    /// Earliest pending deadline
    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue.keys().next().map(|(deadline, _)| *deadline)
    }

    /// Time until the earliest pending deadline (zero if already due)
    ///
    /// Event loops use this to decide how long they may wait for input.
    pub fn time_until_next(&self) -> Option<Duration> {
        self.next_deadline()
            .map(|deadline| deadline.saturating_sub(self.clock.now()))
    }

    /// Remove and return the earliest timer that has come due
    ///
    /// Callers drain in a loop until this returns `None`; that final call
    /// also ends the dispatch window opened by the previous one.
    pub fn pop_due(&mut self) -> Option<(TimerId, K)> {
        let now = self.clock.now();
        let key = match self.queue.keys().next() {
            Some(&key) if key.0 <= now => key,
            _ => {
                self.dispatching_at = None;
                return None;
            }
        };

        let payload = self.queue.remove(&key)?;
        self.deadlines.remove(&key.1);
        self.dispatching_at = Some(key.0);
        Some((key.1, payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Tick {
        A,
        B,
    }

    #[test]
    fn test_timers_fire_in_deadline_order() {
        let clock = ManualClock::new();
        let mut scheduler = Scheduler::new(clock.clone());

        scheduler.schedule(ms(300), Tick::B);
        scheduler.schedule(ms(100), Tick::A);

        assert!(scheduler.pop_due().is_none());

        clock.advance(ms(300));
        assert_eq!(scheduler.pop_due().map(|(_, t)| t), Some(Tick::A));
        assert_eq!(scheduler.now(), ms(100));
        assert_eq!(scheduler.pop_due().map(|(_, t)| t), Some(Tick::B));
        assert_eq!(scheduler.now(), ms(300));
        assert!(scheduler.pop_due().is_none());
        assert!(scheduler.is_idle());
    }

    #[test]
    fn test_ties_keep_scheduling_order() {
        let clock = ManualClock::new();
        let mut scheduler = Scheduler::new(clock.clone());

        let first = scheduler.schedule(ms(50), Tick::B);
        let second = scheduler.schedule(ms(50), Tick::A);
        clock.advance(ms(50));

        assert_eq!(scheduler.pop_due().map(|(id, _)| id), Some(first));
        assert_eq!(scheduler.pop_due().map(|(id, _)| id), Some(second));
    }

    #[test]
    fn test_cancel_removes_timer() {
        let clock = ManualClock::new();
        let mut scheduler = Scheduler::new(clock.clone());

        let id = scheduler.schedule(ms(100), Tick::A);
        assert_eq!(scheduler.pending(), 1);
        assert!(scheduler.cancel(id));
        assert!(!scheduler.cancel(id));
        assert_eq!(scheduler.pending(), 0);

        clock.advance(ms(1000));
        assert!(scheduler.pop_due().is_none());
    }

    #[test]
    fn test_schedule_during_dispatch_is_anchored_to_deadline() {
        let clock = ManualClock::new();
        let mut scheduler = Scheduler::new(clock.clone());

        scheduler.schedule(ms(100), Tick::A);
        clock.advance(ms(1000));

        let (_, tick) = scheduler.pop_due().expect("due");
        assert_eq!(tick, Tick::A);
        let follow_up = scheduler.schedule(ms(100), Tick::B);
        assert_eq!(scheduler.deadline(follow_up), Some(ms(200)));

        assert_eq!(scheduler.pop_due().map(|(_, t)| t), Some(Tick::B));
        assert!(scheduler.pop_due().is_none());
        assert_eq!(scheduler.now(), ms(1000));
    }

    #[test]
    fn test_pending_matching_and_time_until_next() {
        let clock = ManualClock::new();
        let mut scheduler = Scheduler::new(clock.clone());

        scheduler.schedule(ms(400), Tick::A);
        scheduler.schedule(ms(600), Tick::B);
        scheduler.schedule(ms(800), Tick::B);

        assert_eq!(scheduler.pending_matching(|t| *t == Tick::B), 2);
        clock.advance(ms(150));
        assert_eq!(scheduler.time_until_next(), Some(ms(250)));

        assert_eq!(scheduler.cancel_all(), 3);
        assert_eq!(scheduler.time_until_next(), None);
    }
}
