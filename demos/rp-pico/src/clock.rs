//! RP2040 hardware timer wrapper for the shrine-lights time traits.
//!
//! Wraps the 1 MHz hardware timer counter in fugit types; the sequencer only
//! schedules in milliseconds, so the trait impls convert at the edges.

use fugit::{MicrosDurationU64, TimerInstantU64};
use shrine_lights::{TimeDuration, TimeInstant, TimeSource};

/// Duration type backed by fugit microsecond duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Duration(MicrosDurationU64);

impl TimeDuration for Duration {
    fn as_millis(&self) -> u64 {
        self.0.to_millis()
    }

    fn from_millis(millis: u64) -> Self {
        Duration(MicrosDurationU64::millis(millis))
    }
}

/// Instant type backed by fugit timer instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Instant(TimerInstantU64<1_000_000>);

impl TimeInstant for Instant {
    type Duration = Duration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        let ticks = self.0.ticks().saturating_sub(earlier.0.ticks());
        Duration(MicrosDurationU64::from_ticks(ticks))
    }
}

/// Time source backed by the RP2040 microsecond timer.
pub struct PedestalClock {
    timer: rp2040_hal::Timer,
}

impl PedestalClock {
    pub fn new(timer: rp2040_hal::Timer) -> Self {
        Self { timer }
    }
}

impl TimeSource<Instant> for PedestalClock {
    fn now(&self) -> Instant {
        Instant(self.timer.get_counter())
    }
}
