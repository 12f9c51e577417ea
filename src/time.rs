//! Time abstraction traits and the periodic frame timer.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
///
/// The sequencer only schedules frames, so the trait asks for nothing beyond
/// a millisecond conversion in each direction.
pub trait TimeDuration: Copy + PartialEq {
    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

/// A retriggering interval timer for animation frames.
///
/// [`ready`](PeriodicTimer::ready) reports `true` at most once per interval;
/// firing re-arms the deadline from the firing instant. A new animation phase
/// must call [`reset`](PeriodicTimer::reset) before its first frame,
/// otherwise a deadline left over from the previous phase would let the first
/// frame render immediately instead of one interval in.
#[derive(Debug, Clone, Copy)]
pub struct PeriodicTimer<I: TimeInstant> {
    interval: I::Duration,
    last_fired: I,
}

impl<I: TimeInstant> PeriodicTimer<I> {
    /// Creates a timer whose first firing is one interval after `now`.
    pub fn new(interval: I::Duration, now: I) -> Self {
        Self {
            interval,
            last_fired: now,
        }
    }

    /// Re-arms the timer so the next firing is one interval after `now`.
    pub fn reset(&mut self, now: I) {
        self.last_fired = now;
    }

    /// Returns `true` if a full interval has elapsed since the last firing,
    /// consuming the firing and re-arming from `now`.
    pub fn ready(&mut self, now: I) -> bool {
        if now.duration_since(self.last_fired).as_millis() >= self.interval.as_millis() {
            self.last_fired = now;
            true
        } else {
            false
        }
    }
}
