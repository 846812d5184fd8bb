//! Horizontal project navigator
//!
//! A small input-driven state machine. All gameplay with time goes through
//! injected `now_ms` timestamps:
//! - Wheel events coalesce in a 50 ms window; the net dominant-axis delta
//!   decides the direction once the window closes.
//! - A touch gesture navigates at most once, when horizontal displacement
//!   from touch-start crosses the threshold.
//! - A transition locks the machine for a settle delay; requests while
//!   locked are ignored, not queued.
//! - Stepping past either end is a hand-off to the surrounding page, never
//!   a wrap and never an index change.

use crate::tuning::CarouselTuning;

/// Machine phase. `Transitioning` is a short-lived lock that expires at
/// `until_ms`; expiry is observed by [`Carousel::poll`] or any navigation
/// attempt, whichever sees the timestamp first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    Idle,
    Transitioning { until_ms: f64 },
}

/// Which neighboring page section receives control at a boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOff {
    /// Retreated past the first slide
    Before,
    /// Advanced past the last slide
    After,
}

/// Result of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavOutcome {
    /// The carousel moved; apply the translation and active markers.
    Moved { index: usize, offset_percent: f32 },
    /// A transition is still settling; the request was dropped.
    Locked,
    /// Boundary: scroll the adjacent section instead.
    HandOff(HandOff),
    /// Out-of-range target from a caller bug; nothing happened.
    Rejected,
}

#[derive(Debug, Default)]
struct WheelWindow {
    dx: f64,
    dy: f64,
    deadline_ms: Option<f64>,
}

#[derive(Debug, Default)]
struct SwipeTracker {
    start_x: Option<f32>,
    fired: bool,
}

/// The navigator. `current_index` is the single source of truth for the
/// active slide, the active pagination dot, and the track offset.
pub struct Carousel {
    current: usize,
    total: usize,
    phase: Phase,
    hint_dismissed: bool,
    wheel: WheelWindow,
    swipe: SwipeTracker,
    tuning: CarouselTuning,
}

impl Carousel {
    /// A carousel always has at least one slide.
    pub fn new(total: usize, tuning: CarouselTuning) -> Self {
        Self {
            current: 0,
            total: total.max(1),
            phase: Phase::Idle,
            hint_dismissed: false,
            wheel: WheelWindow::default(),
            swipe: SwipeTracker::default(),
            tuning,
        }
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Track translation for the current slide, in percent of viewport width.
    #[inline]
    pub fn offset_percent(&self) -> f32 {
        -(self.current as f32) * 100.0
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, Phase::Transitioning { .. })
    }

    /// True once any transition has left slide 0. One-way for the page
    /// lifetime; the onboarding scroll hint keys off this.
    pub fn hint_dismissed(&self) -> bool {
        self.hint_dismissed
    }

    /// Expire the transition lock if its deadline has passed.
    fn refresh(&mut self, now_ms: f64) {
        if let Phase::Transitioning { until_ms } = self.phase {
            if now_ms >= until_ms {
                self.phase = Phase::Idle;
            }
        }
    }

    /// Direct navigation to a slide index.
    pub fn go_to(&mut self, target: usize, now_ms: f64) -> NavOutcome {
        if target >= self.total {
            return NavOutcome::Rejected;
        }
        self.refresh(now_ms);
        if self.is_transitioning() {
            return NavOutcome::Locked;
        }

        if self.current == 0 && target != 0 {
            self.hint_dismissed = true;
        }
        self.current = target;
        self.phase = Phase::Transitioning {
            until_ms: now_ms + self.tuning.settle_ms,
        };
        NavOutcome::Moved {
            index: target,
            offset_percent: self.offset_percent(),
        }
    }

    fn nav(&mut self, dir: i64, now_ms: f64) -> NavOutcome {
        self.refresh(now_ms);
        if self.is_transitioning() {
            return NavOutcome::Locked;
        }
        let target = self.current as i64 + dir;
        if target < 0 {
            return NavOutcome::HandOff(HandOff::Before);
        }
        if target >= self.total as i64 {
            return NavOutcome::HandOff(HandOff::After);
        }
        self.go_to(target as usize, now_ms)
    }

    /// One slide forward, or a hand-off at the end.
    pub fn advance(&mut self, now_ms: f64) -> NavOutcome {
        self.nav(1, now_ms)
    }

    /// One slide back, or a hand-off at the start.
    pub fn retreat(&mut self, now_ms: f64) -> NavOutcome {
        self.nav(-1, now_ms)
    }

    /// Accumulate a wheel event into the open coalescing window. Returns the
    /// window deadline when this event opened a new window, so the host can
    /// schedule a poll; `None` while a window is already open.
    pub fn on_wheel(&mut self, dx: f64, dy: f64, now_ms: f64) -> Option<f64> {
        let opened = self.wheel.deadline_ms.is_none();
        if opened {
            self.wheel.deadline_ms = Some(now_ms + self.tuning.wheel_window_ms);
        }
        self.wheel.dx += dx;
        self.wheel.dy += dy;
        if opened { self.wheel.deadline_ms } else { None }
    }

    /// Drive time-based transitions: expire the settle lock, and flush a
    /// wheel window whose deadline has passed, navigating once on the sign
    /// of the dominant axis of the net delta.
    pub fn poll(&mut self, now_ms: f64) -> Option<NavOutcome> {
        self.refresh(now_ms);
        let deadline = self.wheel.deadline_ms?;
        if now_ms < deadline {
            return None;
        }
        let (dx, dy) = (self.wheel.dx, self.wheel.dy);
        self.wheel = WheelWindow::default();

        // Dominant axis decides; vertical wins ties
        let delta = if dx.abs() > dy.abs() { dx } else { dy };
        if delta == 0.0 {
            return None;
        }
        Some(if delta > 0.0 {
            self.advance(now_ms)
        } else {
            self.retreat(now_ms)
        })
    }

    /// A finger touched down; begin tracking a gesture.
    pub fn touch_start(&mut self, x: f32) {
        self.swipe = SwipeTracker {
            start_x: Some(x),
            fired: false,
        };
    }

    /// Finger moved. Navigates at most once per gesture, when horizontal
    /// displacement since touch-start crosses the threshold.
    pub fn touch_move(&mut self, x: f32, now_ms: f64) -> Option<NavOutcome> {
        let start = self.swipe.start_x?;
        if self.swipe.fired {
            return None;
        }
        let dx = x - start;
        if dx.abs() <= self.tuning.swipe_threshold {
            return None;
        }
        self.swipe.fired = true;
        // Finger moving left drags the next slide in
        Some(if dx < 0.0 {
            self.advance(now_ms)
        } else {
            self.retreat(now_ms)
        })
    }

    /// Gesture over; the next touch starts fresh.
    pub fn touch_end(&mut self) {
        self.swipe = SwipeTracker::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn carousel(total: usize) -> Carousel {
        Carousel::new(total, CarouselTuning::default())
    }

    #[test]
    fn test_go_to_moves_and_locks() {
        let mut c = carousel(4);
        assert_eq!(c.current_index(), 0);

        let out = c.go_to(1, 0.0);
        assert_eq!(
            out,
            NavOutcome::Moved {
                index: 1,
                offset_percent: -100.0
            }
        );
        assert!(c.is_transitioning());

        // A second request inside the settle delay is dropped
        assert_eq!(c.go_to(0, 500.0), NavOutcome::Locked);
        assert_eq!(c.current_index(), 1);

        // After the delay the lock has expired
        assert_eq!(
            c.go_to(0, 900.0),
            NavOutcome::Moved {
                index: 0,
                offset_percent: 0.0
            }
        );
    }

    #[test]
    fn test_advance_past_end_hands_off() {
        let mut c = carousel(4);
        c.go_to(3, 0.0);
        assert_eq!(c.advance(1000.0), NavOutcome::HandOff(HandOff::After));
        assert_eq!(c.current_index(), 3);
    }

    #[test]
    fn test_retreat_past_start_hands_off() {
        let mut c = carousel(4);
        assert_eq!(c.retreat(0.0), NavOutcome::HandOff(HandOff::Before));
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn test_out_of_range_target_is_rejected() {
        let mut c = carousel(4);
        assert_eq!(c.go_to(7, 0.0), NavOutcome::Rejected);
        assert_eq!(c.current_index(), 0);
        assert!(!c.is_transitioning());
    }

    #[test]
    fn test_wheel_burst_coalesces_to_one_transition() {
        let mut c = carousel(4);

        // First event opens the window and reports its deadline
        assert_eq!(c.on_wheel(0.0, 10.0, 0.0), Some(50.0));
        for t in [5.0, 12.0, 30.0, 49.0] {
            assert_eq!(c.on_wheel(0.0, 10.0, t), None);
        }

        // Nothing fires before the window closes
        assert_eq!(c.poll(49.0), None);

        let out = c.poll(50.0);
        assert_eq!(
            out,
            Some(NavOutcome::Moved {
                index: 1,
                offset_percent: -100.0
            })
        );
        // Window consumed; no second transition
        assert_eq!(c.poll(51.0), None);
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn test_wheel_net_direction_and_dominant_axis() {
        let mut c = carousel(4);
        c.go_to(2, 0.0);

        // Horizontal delta dominates the smaller vertical one
        c.on_wheel(-40.0, 5.0, 1000.0);
        assert_eq!(
            c.poll(1100.0),
            Some(NavOutcome::Moved {
                index: 1,
                offset_percent: -100.0
            })
        );

        // Opposing deltas cancel to a net direction
        c.on_wheel(0.0, 30.0, 2000.0);
        c.on_wheel(0.0, -50.0, 2010.0);
        assert_eq!(
            c.poll(2100.0),
            Some(NavOutcome::Moved {
                index: 0,
                offset_percent: 0.0
            })
        );
    }

    #[test]
    fn test_wheel_while_locked_is_dropped() {
        let mut c = carousel(4);
        c.go_to(1, 0.0);
        c.on_wheel(0.0, 10.0, 10.0);
        assert_eq!(c.poll(60.0), Some(NavOutcome::Locked));
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn test_swipe_fires_once_per_gesture() {
        let mut c = carousel(4);
        c.touch_start(200.0);

        assert_eq!(c.touch_move(170.0, 0.0), None); // under threshold
        assert_eq!(
            c.touch_move(140.0, 0.0),
            Some(NavOutcome::Moved {
                index: 1,
                offset_percent: -100.0
            })
        );
        // Same gesture cannot fire again
        assert_eq!(c.touch_move(60.0, 0.0), None);
        c.touch_end();

        // Next gesture, after the settle delay, swipes back
        c.touch_start(100.0);
        assert_eq!(
            c.touch_move(180.0, 1000.0),
            Some(NavOutcome::Moved {
                index: 0,
                offset_percent: 0.0
            })
        );
    }

    #[test]
    fn test_move_without_touch_start_is_ignored() {
        let mut c = carousel(4);
        assert_eq!(c.touch_move(500.0, 0.0), None);
    }

    #[test]
    fn test_hint_dismissal_is_one_way() {
        let mut c = carousel(4);
        assert!(!c.hint_dismissed());

        c.go_to(1, 0.0);
        assert!(c.hint_dismissed());

        c.go_to(0, 1000.0);
        assert!(c.hint_dismissed());
    }

    #[test]
    fn test_single_slide_carousel_only_hands_off() {
        let mut c = carousel(1);
        assert_eq!(c.advance(0.0), NavOutcome::HandOff(HandOff::After));
        assert_eq!(c.retreat(0.0), NavOutcome::HandOff(HandOff::Before));
        assert_eq!(c.current_index(), 0);
    }

    proptest! {
        #[test]
        fn prop_index_always_in_range(
            total in 1usize..8,
            ops in prop::collection::vec((0u8..5, 0usize..10, 0.0f64..10.0), 0..50),
        ) {
            let mut c = carousel(total);
            let mut now = 0.0;
            for (op, target, dt) in ops {
                now += dt * 100.0;
                match op {
                    0 => { c.advance(now); }
                    1 => { c.retreat(now); }
                    2 => { c.go_to(target, now); }
                    3 => { c.on_wheel(0.0, target as f64 - 4.0, now); }
                    _ => { c.poll(now); }
                }
                prop_assert!(c.current_index() < c.total());
            }
        }

        #[test]
        fn prop_moved_offset_matches_index(
            total in 2usize..8,
            targets in prop::collection::vec(0usize..8, 1..20),
        ) {
            let mut c = carousel(total);
            let mut now = 0.0;
            for target in targets {
                now += 1000.0;
                if let NavOutcome::Moved { index, offset_percent } = c.go_to(target, now) {
                    prop_assert_eq!(index, c.current_index());
                    prop_assert_eq!(offset_percent, -(index as f32) * 100.0);
                }
            }
        }
    }
}
