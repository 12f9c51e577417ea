//! Hardware capability traits for the touch sensor.
//!
//! The touch measurement manipulates raw pin direction and level registers
//! and must run with interrupts disabled. Both capabilities are injected
//! through the traits here so the sensing logic can run against real
//! registers on hardware and against scripted mocks in tests.

/// The two pins involved in a capacitive measurement.
///
/// The pins are expected to be adjacent and joined through a large
/// (≈1 MΩ) resistor so they form an RC network with the touch pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensePin {
    /// The pad pin whose charge/discharge time is measured.
    Sense,
    /// The drive pin that pulls the RC network toward high or low.
    Reference,
}

/// Pin direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinDirection {
    /// High-impedance input, no pull.
    Input,
    /// Actively driven output.
    Output,
}

/// Pin logic level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinLevel {
    Low,
    High,
}

/// Trait for abstracting the raw digital I/O used by the touch sensor.
///
/// Implementations must act on the registers directly (or an equally fast
/// path): the measurement busy-counts between `read_level` calls, so all
/// three pin operations need sub-microsecond latency for the counts to mean
/// anything. The sensor reconfigures both pins on every measurement and
/// assumes nothing about their state between calls.
pub trait SenseIo {
    /// Sets the direction of one of the sense pins.
    fn set_direction(&mut self, pin: SensePin, direction: PinDirection);

    /// Sets the output level of one of the sense pins.
    ///
    /// For pins currently configured as input this sets the level that will
    /// be driven once the pin is switched to output.
    fn set_level(&mut self, pin: SensePin, level: PinLevel);

    /// Reads the instantaneous logic level of one of the sense pins.
    fn read_level(&self, pin: SensePin) -> PinLevel;

    /// Blocks for the fixed settle time (10 µs) used to fully charge or
    /// discharge the sense node past the Schmitt-trigger region.
    fn settle(&mut self);
}

/// Trait for abstracting global interrupt control.
///
/// `disable` and `enable` must form a matched pair; use [`CriticalSection`]
/// rather than calling them directly.
pub trait InterruptControl {
    /// Disables all interrupts.
    fn disable(&mut self);

    /// Enables all interrupts.
    fn enable(&mut self);
}

/// Scoped interrupt-free critical section.
///
/// Disables interrupts on construction and re-enables them when dropped, so
/// the "always re-enable" contract holds on every exit path, early returns
/// and test-harness panics included. The timing loops of a touch measurement
/// run inside one of these; a single serviced interrupt mid-count would
/// invalidate the sample.
pub struct CriticalSection<'a, C: InterruptControl> {
    interrupts: &'a mut C,
}

impl<'a, C: InterruptControl> CriticalSection<'a, C> {
    /// Enters a critical section, disabling interrupts.
    pub fn enter(interrupts: &'a mut C) -> Self {
        interrupts.disable();
        Self { interrupts }
    }
}

impl<C: InterruptControl> Drop for CriticalSection<'_, C> {
    fn drop(&mut self) {
        self.interrupts.enable();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    extern crate std;

    struct FlagInterrupts {
        enabled: bool,
        disables: u32,
        enables: u32,
    }

    impl InterruptControl for FlagInterrupts {
        fn disable(&mut self) {
            self.enabled = false;
            self.disables += 1;
        }

        fn enable(&mut self) {
            self.enabled = true;
            self.enables += 1;
        }
    }

    #[test]
    fn critical_section_disables_then_restores() {
        let mut irq = FlagInterrupts {
            enabled: true,
            disables: 0,
            enables: 0,
        };

        {
            let _cs = CriticalSection::enter(&mut irq);
        }

        assert!(irq.enabled);
        assert_eq!(irq.disables, 1);
        assert_eq!(irq.enables, 1);
    }

    #[test]
    fn critical_section_restores_on_panic() {
        let irq = std::sync::Arc::new(std::sync::Mutex::new(FlagInterrupts {
            enabled: true,
            disables: 0,
            enables: 0,
        }));

        struct SharedIrq(std::sync::Arc<std::sync::Mutex<FlagInterrupts>>);

        impl InterruptControl for SharedIrq {
            fn disable(&mut self) {
                self.0.lock().unwrap().disable();
            }
            fn enable(&mut self) {
                self.0.lock().unwrap().enable();
            }
        }

        let shared = irq.clone();
        let result = std::panic::catch_unwind(move || {
            let mut io = SharedIrq(shared);
            let _cs = CriticalSection::enter(&mut io);
            panic!("measurement aborted");
        });

        assert!(result.is_err());
        let irq = irq.lock().unwrap();
        assert!(irq.enabled, "interrupts left disabled after unwind");
        assert_eq!(irq.disables, irq.enables);
    }
}
