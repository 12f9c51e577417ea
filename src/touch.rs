//! Capacitive touch detection by RC charge/discharge timing.
//!
//! A touch pad is wired to the sense pin, and an adjacent reference pin
//! drives the pad through a large (≈1 MΩ) resistor. One measurement times a
//! full charge/discharge cycle of that RC network by busy-counting pin
//! reads; the count changes with the pad's capacitance, which is how a
//! finger is detected. The counts are loop iterations, not calibrated time -
//! do not replace the busy loops with a clock-based wait, the measured
//! quantity is the integration of RC charge time against instruction rate.

use crate::config::TouchConfig;
use crate::hal::{CriticalSection, InterruptControl, PinDirection, PinLevel, SenseIo, SensePin};

/// A blocking "wait until touched" capability.
///
/// The light sequencer only needs this one operation, so it is split from
/// [`TouchSensor`] to let tests drive the sequencer with a simulated sensor.
pub trait TouchWait {
    /// Blocks until a touch has been confirmed. Infallible and
    /// uncancellable; waiting for a touch is the system's whole job when
    /// nothing is lit.
    fn wait_for_touch(&mut self);
}

/// Capacitive touch sensor over two raw digital I/O pins.
pub struct TouchSensor<IO: SenseIo, C: InterruptControl> {
    io: IO,
    interrupts: C,
    config: TouchConfig,
}

impl<IO: SenseIo, C: InterruptControl> TouchSensor<IO, C> {
    /// Creates a sensor over the given pin and interrupt capabilities.
    pub fn new(io: IO, interrupts: C, config: TouchConfig) -> Self {
        Self {
            io,
            interrupts,
            config,
        }
    }

    /// Returns the sensor's configuration.
    pub fn config(&self) -> TouchConfig {
        self.config
    }

    /// Times one full charge/discharge cycle of the sense pad.
    ///
    /// Adds the cycle's busy-loop counts to `accumulator`, capping at
    /// `timeout` (both rise and fall phases share the one running total).
    /// Returns `true` if the cycle completed before the accumulator reached
    /// the cap, `false` if either phase timed out. A timeout is not an
    /// error; it is simply a sample far into the "not touched" regime.
    ///
    /// The whole measurement runs with interrupts disabled - a single
    /// serviced interrupt mid-count adds jitter larger than the signal being
    /// measured. Both pins are reconfigured from scratch on every call and
    /// left in a known state (reference low output, sense released low).
    pub fn measure(&mut self, accumulator: &mut u32, timeout: u32) -> bool {
        // Setup conditions: reference driven low, sense released, levels low.
        self.io.set_direction(SensePin::Reference, PinDirection::Output);
        self.io.set_direction(SensePin::Sense, PinDirection::Input);
        self.io.set_level(SensePin::Reference, PinLevel::Low);
        self.io.set_level(SensePin::Sense, PinLevel::Low);

        let _cs = CriticalSection::enter(&mut self.interrupts);

        // Drive the sense node low to discharge any standing charge, then
        // release it and pull the reference high to start charging.
        self.io.set_direction(SensePin::Sense, PinDirection::Output);
        self.io.set_level(SensePin::Sense, PinLevel::Low);
        self.io.settle();
        self.io.set_direction(SensePin::Sense, PinDirection::Input);
        self.io.set_level(SensePin::Reference, PinLevel::High);

        // Count up while the voltage at the sense pin is rising.
        while self.io.read_level(SensePin::Sense) == PinLevel::Low && *accumulator < timeout {
            *accumulator += 1;
        }

        // The sense node sits right around the Schmitt trigger. Drive it
        // high to charge it the rest of the way, then release it and pull
        // the reference low to start the discharge.
        self.io.set_direction(SensePin::Sense, PinDirection::Output);
        self.io.set_level(SensePin::Sense, PinLevel::High);
        self.io.settle();
        self.io.set_direction(SensePin::Sense, PinDirection::Input);
        self.io.set_level(SensePin::Sense, PinLevel::Low);
        self.io.set_level(SensePin::Reference, PinLevel::Low);

        // Count up while the voltage at the sense pin is falling.
        while self.io.read_level(SensePin::Sense) == PinLevel::High && *accumulator < timeout {
            *accumulator += 1;
        }

        *accumulator < timeout
    }

    /// Blocks until enough consecutive qualifying samples confirm a touch.
    ///
    /// Each sample is a fresh measurement; a sample qualifies when its
    /// accumulator stays below the configured threshold (one-fifth of the
    /// timeout by default - a touched pad settles the cycle quickly under
    /// this circuit's pull resistor). Any disqualifying sample resets the
    /// run to zero, so a touch must be sustained through the whole debounce
    /// window. There is no failure path and no timeout.
    pub fn wait_for_touch(&mut self) {
        let threshold = self.config.detect_threshold();
        let mut sequential_touches = 0;
        while sequential_touches < self.config.required_samples {
            let mut total_counts = 0;
            self.measure(&mut total_counts, self.config.sample_timeout);
            if total_counts < threshold {
                sequential_touches += 1;
            } else {
                sequential_touches = 0;
            }
        }
    }

    /// Consumes the sensor, releasing its hardware capabilities.
    pub fn release(self) -> (IO, C) {
        (self.io, self.interrupts)
    }
}

impl<IO: SenseIo, C: InterruptControl> TouchWait for TouchSensor<IO, C> {
    fn wait_for_touch(&mut self) {
        TouchSensor::wait_for_touch(self);
    }
}
