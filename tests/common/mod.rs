//! Shared test infrastructure for shrine-lights integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::{Cell, RefCell};
use std::rc::Rc;

use palette::Srgb;
use shrine_lights::{
    InterruptControl, LedStrip, PinDirection, PinLevel, SenseIo, SensePin, TimeDuration,
    TimeInstant, TimeSource, TouchWait, DEFAULT_LED_COUNT,
};

pub const LED_COUNT: usize = DEFAULT_LED_COUNT;

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(TestInstant(0)),
        }
    }

    pub fn advance(&self, millis: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + millis));
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock LED Strip
// ============================================================================

/// One recorded call into the strip transport
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StripEvent {
    Brightness(u8),
    Show([Srgb<u8>; LED_COUNT]),
    Hold(u32),
}

/// A uniform frame, for concise assertions
pub fn solid(color: Srgb<u8>) -> StripEvent {
    StripEvent::Show([color; LED_COUNT])
}

/// Mock strip that records every transport call into a shared log, so tests
/// can keep reading the log after the sequencer takes ownership of the strip
pub struct MockStrip {
    log: Rc<RefCell<Vec<StripEvent>>>,
}

impl MockStrip {
    pub fn new() -> (Self, Rc<RefCell<Vec<StripEvent>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        (Self { log: log.clone() }, log)
    }
}

/// The frames committed to `log` so far, in order
pub fn frames(log: &RefCell<Vec<StripEvent>>) -> Vec<[Srgb<u8>; LED_COUNT]> {
    log.borrow()
        .iter()
        .filter_map(|event| match event {
            StripEvent::Show(frame) => Some(*frame),
            _ => None,
        })
        .collect()
}

impl LedStrip<LED_COUNT> for MockStrip {
    fn set_brightness(&mut self, brightness: u8) {
        self.log.borrow_mut().push(StripEvent::Brightness(brightness));
    }

    fn show(&mut self, frame: &[Srgb<u8>; LED_COUNT]) {
        self.log.borrow_mut().push(StripEvent::Show(*frame));
    }

    fn hold_ms(&mut self, millis: u32) {
        self.log.borrow_mut().push(StripEvent::Hold(millis));
    }
}

// ============================================================================
// Mock Touch
// ============================================================================

/// Touch sensor stand-in that confirms instantly, counting the waits
pub struct InstantTouch {
    pub waits: Cell<u32>,
}

impl InstantTouch {
    pub fn new() -> Self {
        Self {
            waits: Cell::new(0),
        }
    }
}

impl TouchWait for InstantTouch {
    fn wait_for_touch(&mut self) {
        self.waits.set(self.waits.get() + 1);
    }
}

// ============================================================================
// Simulated Touch Pad
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Charging,
    Discharging,
}

/// Simulated sense pins backed by a script of per-measurement cycle counts.
///
/// Tracks the measurement phase by watching the reference pin (high means
/// charging, low after charging means discharging) and answers sense-pin
/// reads so that one full cycle accumulates exactly the scripted count,
/// split between the rise and fall phases.
pub struct PadSim {
    cycle_counts: Vec<u32>,
    next: usize,
    phase: Phase,
    reads: Cell<u32>,
    pub measurements: Rc<Cell<u32>>,
    irq_enabled: Rc<Cell<bool>>,
    pub read_with_irq_enabled: Cell<bool>,
    pub directions: [PinDirection; 2],
    pub levels: [PinLevel; 2],
}

impl PadSim {
    pub fn new(cycle_counts: Vec<u32>, irq_enabled: Rc<Cell<bool>>) -> Self {
        Self {
            cycle_counts,
            next: 0,
            phase: Phase::Idle,
            reads: Cell::new(0),
            measurements: Rc::new(Cell::new(0)),
            irq_enabled,
            read_with_irq_enabled: Cell::new(false),
            directions: [PinDirection::Input, PinDirection::Input],
            levels: [PinLevel::Low, PinLevel::Low],
        }
    }

    fn pin_index(pin: SensePin) -> usize {
        match pin {
            SensePin::Sense => 0,
            SensePin::Reference => 1,
        }
    }

    fn rise(&self) -> u32 {
        self.cycle_counts[self.next - 1] / 2
    }

    fn fall(&self) -> u32 {
        let total = self.cycle_counts[self.next - 1];
        total - total / 2
    }
}

impl SenseIo for PadSim {
    fn set_direction(&mut self, pin: SensePin, direction: PinDirection) {
        self.directions[Self::pin_index(pin)] = direction;
    }

    fn set_level(&mut self, pin: SensePin, level: PinLevel) {
        self.levels[Self::pin_index(pin)] = level;
        if pin != SensePin::Reference {
            return;
        }
        match level {
            PinLevel::High => {
                assert!(
                    self.next < self.cycle_counts.len(),
                    "touch script exhausted after {} measurements",
                    self.measurements.get()
                );
                self.next += 1;
                self.measurements.set(self.measurements.get() + 1);
                self.phase = Phase::Charging;
                self.reads.set(0);
            }
            PinLevel::Low => {
                if self.phase == Phase::Charging {
                    self.phase = Phase::Discharging;
                    self.reads.set(0);
                }
            }
        }
    }

    fn read_level(&self, pin: SensePin) -> PinLevel {
        assert_eq!(pin, SensePin::Sense, "only the sense pin is ever read");
        if self.irq_enabled.get() {
            self.read_with_irq_enabled.set(true);
        }
        let reads = self.reads.get();
        match self.phase {
            Phase::Idle => PinLevel::Low,
            Phase::Charging => {
                if reads < self.rise() {
                    self.reads.set(reads + 1);
                    PinLevel::Low
                } else {
                    PinLevel::High
                }
            }
            Phase::Discharging => {
                if reads < self.fall() {
                    self.reads.set(reads + 1);
                    PinLevel::High
                } else {
                    PinLevel::Low
                }
            }
        }
    }

    fn settle(&mut self) {}
}

/// Interrupt controller sharing its enabled flag with a [`PadSim`]
pub struct SharedInterrupts(pub Rc<Cell<bool>>);

impl SharedInterrupts {
    pub fn new() -> (Self, Rc<Cell<bool>>) {
        let flag = Rc::new(Cell::new(true));
        (Self(flag.clone()), flag)
    }
}

impl InterruptControl for SharedInterrupts {
    fn disable(&mut self) {
        self.0.set(false);
    }

    fn enable(&mut self) {
        self.0.set(true);
    }
}
