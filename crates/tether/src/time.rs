//! Timers and frame pacing.
//!
//! Everything here reads time through a [`Clock`], so the same code runs
//! against the monotonic system clock in a program and a [`ManualClock`] in
//! tests.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use tether_core::config::FrameRate;
use tether_core::profiling::profile_function;

/// A monotonic time source, measured from an arbitrary origin.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Monotonic clock backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same reading, so a test can keep one copy and hand
/// another to the code under test.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn set(&self, now: Duration) {
        self.now.set(now);
    }
}

impl Clock for ManualClock {
    #[inline]
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// A pausable stopwatch with an optional countdown.
///
/// A bounded timer stops advancing once its duration has run out; an
/// unbounded one never finishes. Stop times saturate at `Duration::MAX`.
/// Readings are taken lazily, whenever
/// [`elapsed`](Self::elapsed), [`remaining`](Self::remaining) or
/// [`finished`](Self::finished) is called.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use tether::time::{ManualClock, Timer};
///
/// let clock = ManualClock::new();
/// let mut timer = Timer::start(clock.clone(), Some(Duration::from_secs(1)));
///
/// clock.advance(Duration::from_millis(400));
/// timer.pause();
/// clock.advance(Duration::from_secs(10));
/// assert_eq!(timer.elapsed(), Duration::from_millis(400));
/// ```
#[derive(Debug, Clone)]
pub struct Timer<C: Clock = SystemClock> {
    clock: C,
    begin: Duration,
    now: Duration,
    stop: Option<Duration>,
    duration: Option<Duration>,
    paused: bool,
}

impl Timer<SystemClock> {
    /// An unbounded, running timer on the system clock.
    pub fn new() -> Self {
        Self::start(SystemClock::new(), None)
    }

    /// A running countdown of `duration` on the system clock.
    pub fn with_duration(duration: Duration) -> Self {
        Self::start(SystemClock::new(), Some(duration))
    }
}

impl Default for Timer<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Timer<C> {
    pub fn start(clock: C, duration: Option<Duration>) -> Self {
        let now = clock.now();
        Self {
            clock,
            begin: now,
            now,
            stop: duration.map(|d| now.saturating_add(d)),
            duration,
            paused: false,
        }
    }

    fn sample(&mut self) {
        if self.paused {
            return;
        }
        let now = self.clock.now();
        self.now = match self.stop {
            Some(stop) => now.min(stop),
            None => now,
        };
    }

    /// Freeze the timer. Does nothing if already paused.
    pub fn pause(&mut self) {
        if !self.paused {
            self.sample();
            self.paused = true;
        }
    }

    /// Resume a paused timer; the time spent paused is not counted.
    pub fn unpause(&mut self) {
        if !self.paused {
            return;
        }
        let now = self.clock.now();
        let paused_for = now.saturating_sub(self.now);
        self.now = now;
        self.begin = self.begin.saturating_add(paused_for);
        self.stop = self.stop.map(|stop| stop.saturating_add(paused_for));
        self.paused = false;
    }

    /// Restart from the current clock reading with the same duration.
    pub fn reset(&mut self, start_paused: bool) {
        let now = self.clock.now();
        self.now = now;
        self.begin = now;
        self.stop = self.duration.map(|d| now.saturating_add(d));
        self.paused = start_paused;
    }

    pub fn elapsed(&mut self) -> Duration {
        self.sample();
        self.now.saturating_sub(self.begin)
    }

    /// Time left before the timer finishes, or `None` for an unbounded timer.
    pub fn remaining(&mut self) -> Option<Duration> {
        self.sample();
        self.stop.map(|stop| stop.saturating_sub(self.now))
    }

    pub fn finished(&mut self) -> bool {
        self.sample();
        self.stop.is_some_and(|stop| self.now >= stop)
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[inline]
    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    /// Clock reading at which the timer finishes.
    #[inline]
    pub fn stop_time(&self) -> Option<Duration> {
        self.stop
    }

    #[inline]
    pub fn clock(&self) -> &C {
        &self.clock
    }
}

/// Counts presented frames and reports the average rate since the last reset.
#[derive(Debug, Clone)]
pub struct FrameCounter<C: Clock = SystemClock> {
    timer: Timer<C>,
    frames: u64,
}

impl FrameCounter<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock::new())
    }
}

impl Default for FrameCounter<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> FrameCounter<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            timer: Timer::start(clock, None),
            frames: 0,
        }
    }

    #[inline]
    pub fn tick(&mut self) {
        self.frames += 1;
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Frames per second averaged over the time since the last reset.
    ///
    /// Zero until any time has passed.
    pub fn average_fps(&mut self) -> f32 {
        let secs = self.timer.elapsed().as_secs_f32();
        if secs > 0.0 {
            self.frames as f32 / secs
        } else {
            0.0
        }
    }

    pub fn reset(&mut self) {
        self.timer.reset(false);
        self.frames = 0;
    }
}

/// Holds a loop to a target frame rate by sleeping out the rest of each
/// frame's budget.
#[derive(Debug, Clone)]
pub struct FrameLimiter<C: Clock = SystemClock> {
    timer: Timer<C>,
    budget: Option<Duration>,
    last_frame: Duration,
}

impl FrameLimiter<SystemClock> {
    pub fn new(frame_rate: FrameRate) -> Self {
        Self::with_clock(SystemClock::new(), frame_rate)
    }
}

impl<C: Clock> FrameLimiter<C> {
    pub fn with_clock(clock: C, frame_rate: FrameRate) -> Self {
        Self {
            timer: Timer::start(clock, None),
            budget: frame_rate
                .target()
                .map(|fps| Duration::from_secs(1) / fps),
            last_frame: Duration::ZERO,
        }
    }

    /// Time allotted to one frame, `None` when uncapped.
    #[inline]
    pub fn frame_budget(&self) -> Option<Duration> {
        self.budget
    }

    /// How long to wait so the current frame fills its budget.
    pub fn frame_delay(&mut self) -> Duration {
        let Some(budget) = self.budget else {
            return Duration::ZERO;
        };
        let spent = self.timer.elapsed().saturating_sub(self.last_frame);
        budget.saturating_sub(spent)
    }

    /// Start the next frame's budget now.
    pub fn mark_frame(&mut self) {
        self.last_frame = self.timer.elapsed();
    }

    /// Sleep out the current frame's budget, then start the next frame.
    /// Returns the time slept.
    pub fn throttle(&mut self) -> Duration {
        profile_function!();

        let delay = self.frame_delay();
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
        self.mark_frame();
        delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_bounded_timer_finishes() {
        let clock = ManualClock::new();
        let mut timer = Timer::start(clock.clone(), Some(1000 * MS));

        assert!(!timer.finished());
        assert_eq!(timer.remaining(), Some(1000 * MS));

        clock.advance(999 * MS);
        assert!(!timer.finished());
        assert_eq!(timer.remaining(), Some(MS));

        clock.advance(MS);
        assert!(timer.finished());
        assert_eq!(timer.remaining(), Some(Duration::ZERO));
    }

    #[test]
    fn test_elapsed_clamps_to_stop() {
        let clock = ManualClock::new();
        let mut timer = Timer::start(clock.clone(), Some(500 * MS));

        clock.advance(2000 * MS);
        assert_eq!(timer.elapsed(), 500 * MS);
        assert!(timer.finished());
    }

    #[test]
    fn test_unbounded_timer_never_finishes() {
        let clock = ManualClock::new();
        let mut timer = Timer::start(clock.clone(), None);

        clock.advance(Duration::from_secs(3600));
        assert!(!timer.finished());
        assert_eq!(timer.remaining(), None);
        assert_eq!(timer.elapsed(), Duration::from_secs(3600));
    }

    #[test]
    fn test_paused_time_is_not_counted() {
        let clock = ManualClock::new();
        let mut timer = Timer::start(clock.clone(), Some(1000 * MS));

        clock.advance(300 * MS);
        timer.pause();
        assert!(timer.is_paused());

        clock.advance(5000 * MS);
        assert_eq!(timer.elapsed(), 300 * MS);
        assert_eq!(timer.remaining(), Some(700 * MS));
        assert!(!timer.finished());

        timer.unpause();
        assert!(!timer.is_paused());
        assert_eq!(timer.elapsed(), 300 * MS);

        clock.advance(200 * MS);
        assert_eq!(timer.elapsed(), 500 * MS);
        assert_eq!(timer.remaining(), Some(500 * MS));
        assert_eq!(timer.stop_time(), Some(6000 * MS));
    }

    #[test]
    fn test_pause_and_unpause_are_idempotent() {
        let clock = ManualClock::new();
        let mut timer = Timer::start(clock.clone(), None);

        clock.advance(100 * MS);
        timer.pause();
        clock.advance(100 * MS);
        timer.pause();
        assert_eq!(timer.elapsed(), 100 * MS);

        timer.unpause();
        timer.unpause();
        clock.advance(50 * MS);
        assert_eq!(timer.elapsed(), 150 * MS);
    }

    #[test]
    fn test_reset_restarts_from_now() {
        let clock = ManualClock::new();
        let mut timer = Timer::start(clock.clone(), Some(100 * MS));

        clock.advance(150 * MS);
        assert!(timer.finished());

        timer.reset(true);
        assert!(timer.is_paused());
        assert!(!timer.finished());
        assert_eq!(timer.elapsed(), Duration::ZERO);
        assert_eq!(timer.stop_time(), Some(250 * MS));

        clock.advance(40 * MS);
        timer.unpause();
        clock.advance(60 * MS);
        assert_eq!(timer.remaining(), Some(40 * MS));
    }

    #[test]
    fn test_max_duration_saturates() {
        let clock = ManualClock::new();
        clock.advance(5 * MS);
        let mut timer = Timer::start(clock.clone(), Some(Duration::MAX));

        assert_eq!(timer.stop_time(), Some(Duration::MAX));
        assert!(!timer.finished());
        assert_eq!(timer.remaining(), Some(Duration::MAX - 5 * MS));

        clock.advance(100 * MS);
        timer.pause();
        clock.advance(Duration::from_secs(60));
        timer.unpause();

        assert_eq!(timer.stop_time(), Some(Duration::MAX));
        assert_eq!(timer.elapsed(), 100 * MS);
        assert!(!timer.finished());

        timer.reset(false);
        assert_eq!(timer.stop_time(), Some(Duration::MAX));
        assert!(!timer.finished());
    }

    #[test]
    fn test_system_timer_runs() {
        let mut timer = Timer::new();
        assert!(!timer.is_paused());
        assert_eq!(timer.remaining(), None);
        assert!(Timer::with_duration(Duration::from_secs(60)).remaining().is_some());
    }

    #[test]
    fn test_frame_counter_average() {
        let clock = ManualClock::new();
        let mut counter = FrameCounter::with_clock(clock.clone());
        assert_eq!(counter.average_fps(), 0.0);

        for _ in 0..30 {
            counter.tick();
            clock.advance(Duration::from_millis(50));
        }
        assert_eq!(counter.frames(), 30);
        assert!((counter.average_fps() - 20.0).abs() < 0.01);

        counter.reset();
        assert_eq!(counter.frames(), 0);
        assert_eq!(counter.average_fps(), 0.0);
    }

    #[test]
    fn test_frame_limiter_delay() {
        let clock = ManualClock::new();
        let mut limiter = FrameLimiter::with_clock(clock.clone(), FrameRate::Capped(50));
        assert_eq!(limiter.frame_budget(), Some(20 * MS));

        clock.advance(5 * MS);
        assert_eq!(limiter.frame_delay(), 15 * MS);

        clock.advance(30 * MS);
        assert_eq!(limiter.frame_delay(), Duration::ZERO);

        limiter.mark_frame();
        clock.advance(12 * MS);
        assert_eq!(limiter.frame_delay(), 8 * MS);
    }

    #[test]
    fn test_uncapped_limiter_never_waits() {
        let clock = ManualClock::new();
        let mut limiter = FrameLimiter::with_clock(clock, FrameRate::Uncapped);

        assert_eq!(limiter.frame_budget(), None);
        assert_eq!(limiter.frame_delay(), Duration::ZERO);
        assert_eq!(limiter.throttle(), Duration::ZERO);
    }
}
