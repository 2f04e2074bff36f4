//! Frame-clock driven counter animations.
//!
//! A counter is a pure function of the frame time: it holds its start
//! instant, duration and easing curve, and is sampled once per rendered
//! frame. Counters never share state, so any number of them can run at once
//! and finish in any order.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Source of frame timestamps.
pub trait FrameClock {
    /// Timestamp of the frame being rendered.
    fn now(&self) -> Instant;
}

/// Frame clock backed by the monotonic system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl FrameClock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Ease-out quartic: `1 - (1 - p)^4`.
#[must_use]
pub fn ease_out_quart(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(4)
}

/// Animation of a single value from zero to a target.
#[derive(Debug, Clone, Copy)]
pub struct CounterAnimation {
    target: f64,
    started_at: Instant,
    duration: Duration,
    easing: fn(f64) -> f64,
}

impl CounterAnimation {
    /// Animate towards `target`, starting at `started_at`, with ease-out quartic.
    #[must_use]
    pub fn new(target: f64, started_at: Instant, duration: Duration) -> Self {
        Self {
            target,
            started_at,
            duration,
            easing: ease_out_quart,
        }
    }

    /// Replace the easing curve.
    #[must_use]
    pub fn with_easing(mut self, easing: fn(f64) -> f64) -> Self {
        self.easing = easing;
        self
    }

    /// Final value of the animation.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Linear progress in `[0, 1]` at `now`; zero before the start instant.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Whether the animation has reached its end at `now`.
    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Displayed value at `now`. Returns exactly the target once finished.
    #[must_use]
    pub fn sample(&self, now: Instant) -> f64 {
        let progress = self.progress(now);
        if progress >= 1.0 {
            self.target
        } else {
            self.target * (self.easing)(progress)
        }
    }
}

/// Independent counters keyed by the element they drive.
#[derive(Debug, Clone)]
pub struct CounterArena<K: Ord + Copy> {
    counters: BTreeMap<K, CounterAnimation>,
}

impl<K: Ord + Copy> CounterArena<K> {
    /// Create an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self {
            counters: BTreeMap::new(),
        }
    }

    /// Start (or restart from zero) the counter for `key`.
    pub fn start(&mut self, key: K, animation: CounterAnimation) {
        self.counters.insert(key, animation);
    }

    /// Value of the counter for `key` at `now`.
    #[must_use]
    pub fn sample(&self, key: K, now: Instant) -> Option<f64> {
        self.counters.get(&key).map(|c| c.sample(now))
    }

    /// Counter for `key`.
    #[must_use]
    pub fn get(&self, key: K) -> Option<&CounterAnimation> {
        self.counters.get(&key)
    }

    /// Whether every counter has finished at `now`.
    #[must_use]
    pub fn all_finished(&self, now: Instant) -> bool {
        self.counters.values().all(|c| c.is_finished(now))
    }

    /// Number of counters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counters.len()
    }

    /// Whether the arena holds no counters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    /// Drop every counter.
    pub fn clear(&mut self) {
        self.counters.clear();
    }
}

impl<K: Ord + Copy> Default for CounterArena<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn easing_endpoints() {
        assert!(ease_out_quart(0.0).abs() < f64::EPSILON);
        assert!((ease_out_quart(1.0) - 1.0).abs() < f64::EPSILON);
        assert!((ease_out_quart(0.5) - 0.9375).abs() < 1e-12);
    }

    #[test]
    fn easing_is_monotonic() {
        let mut last = 0.0;
        for i in 1..=100 {
            let v = ease_out_quart(f64::from(i) / 100.0);
            assert!(v >= last);
            last = v;
        }
    }

    #[test]
    fn zero_before_start() {
        let t0 = Instant::now();
        let counter = CounterAnimation::new(1000.0, t0 + Duration::from_millis(200), SECOND);
        assert!(counter.sample(t0).abs() < f64::EPSILON);
        assert!(!counter.is_finished(t0));
    }

    #[test]
    fn halfway_follows_easing() {
        let t0 = Instant::now();
        let counter = CounterAnimation::new(1000.0, t0, SECOND);
        let v = counter.sample(t0 + Duration::from_millis(500));
        assert!((v - 937.5).abs() < 1e-6);
    }

    #[test]
    fn snaps_exactly_to_target() {
        let t0 = Instant::now();
        let target = 19_334.59;
        let counter = CounterAnimation::new(target, t0, SECOND);
        assert_eq!(counter.sample(t0 + SECOND).to_bits(), target.to_bits());
        assert_eq!(
            counter.sample(t0 + Duration::from_secs(5)).to_bits(),
            target.to_bits()
        );
        assert!(counter.is_finished(t0 + SECOND));
    }

    #[test]
    fn zero_duration_is_immediately_done() {
        let t0 = Instant::now();
        let counter = CounterAnimation::new(7.0, t0, Duration::ZERO);
        assert!((counter.sample(t0) - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn custom_easing() {
        let t0 = Instant::now();
        let counter = CounterAnimation::new(100.0, t0, SECOND).with_easing(|p| p);
        assert!((counter.sample(t0 + Duration::from_millis(250)) - 25.0).abs() < 1e-9);
    }

    #[test]
    fn arena_counters_are_independent() {
        let t0 = Instant::now();
        let mut arena = CounterArena::new();
        arena.start("a", CounterAnimation::new(100.0, t0, SECOND));
        arena.start("b", CounterAnimation::new(50.0, t0, Duration::from_secs(2)));

        let t1 = t0 + Duration::from_millis(1500);
        assert!((arena.sample("a", t1).unwrap() - 100.0).abs() < f64::EPSILON);
        assert!(arena.sample("b", t1).unwrap() < 50.0);
        assert!(!arena.all_finished(t1));
        assert!(arena.all_finished(t0 + Duration::from_secs(2)));
    }

    #[test]
    fn arena_restart_begins_from_zero() {
        let t0 = Instant::now();
        let mut arena = CounterArena::new();
        arena.start(1, CounterAnimation::new(100.0, t0, SECOND));
        let mid = t0 + Duration::from_millis(600);
        assert!(arena.sample(1, mid).unwrap() > 0.0);

        arena.start(1, CounterAnimation::new(200.0, mid, SECOND));
        assert!(arena.sample(1, mid).unwrap().abs() < f64::EPSILON);
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn arena_missing_key() {
        let arena: CounterArena<u8> = CounterArena::default();
        assert!(arena.sample(0, Instant::now()).is_none());
        assert!(arena.is_empty());
        assert!(arena.all_finished(Instant::now()));
    }

    #[test]
    fn system_clock_advances() {
        let clock = SystemClock;
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
