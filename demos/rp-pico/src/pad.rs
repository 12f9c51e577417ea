//! Sense-pin backend over the RP2040 SIO registers.
//!
//! The touch measurement needs sub-microsecond pin control, so this goes
//! through the single-cycle IO block directly instead of the HAL pin types.
//! The two GPIOs must be put into SIO function mode before constructing a
//! [`SioPad`]; the pad then owns their OE/OUT bits outright.

use rp2040_hal::pac;
use shrine_lights::{InterruptControl, PinDirection, PinLevel, SenseIo, SensePin};

/// Cycles for the 10 µs settle delay at the 125 MHz system clock.
const SETTLE_CYCLES: u32 = 1_250;

pub struct SioPad {
    sense_mask: u32,
    reference_mask: u32,
}

impl SioPad {
    /// Takes over two SIO-function GPIOs by pin number.
    ///
    /// # Safety-adjacent note
    /// Steals the SIO block; nothing else may drive these two pins.
    pub fn new(sense_pin: u8, reference_pin: u8) -> Self {
        Self {
            sense_mask: 1 << sense_pin,
            reference_mask: 1 << reference_pin,
        }
    }

    fn mask(&self, pin: SensePin) -> u32 {
        match pin {
            SensePin::Sense => self.sense_mask,
            SensePin::Reference => self.reference_mask,
        }
    }

    fn sio() -> &'static pac::sio::RegisterBlock {
        // Raw register access for speed; the pad owns these bits.
        unsafe { &*pac::SIO::ptr() }
    }
}

impl SenseIo for SioPad {
    fn set_direction(&mut self, pin: SensePin, direction: PinDirection) {
        let mask = self.mask(pin);
        let sio = Self::sio();
        match direction {
            PinDirection::Output => sio.gpio_oe_set().write(|w| unsafe { w.bits(mask) }),
            PinDirection::Input => sio.gpio_oe_clr().write(|w| unsafe { w.bits(mask) }),
        }
    }

    fn set_level(&mut self, pin: SensePin, level: PinLevel) {
        let mask = self.mask(pin);
        let sio = Self::sio();
        match level {
            PinLevel::High => sio.gpio_out_set().write(|w| unsafe { w.bits(mask) }),
            PinLevel::Low => sio.gpio_out_clr().write(|w| unsafe { w.bits(mask) }),
        }
    }

    fn read_level(&self, pin: SensePin) -> PinLevel {
        if Self::sio().gpio_in().read().bits() & self.mask(pin) != 0 {
            PinLevel::High
        } else {
            PinLevel::Low
        }
    }

    fn settle(&mut self) {
        cortex_m::asm::delay(SETTLE_CYCLES);
    }
}

/// Cortex-M PRIMASK interrupt control.
pub struct CortexInterrupts;

impl InterruptControl for CortexInterrupts {
    fn disable(&mut self) {
        cortex_m::interrupt::disable();
    }

    fn enable(&mut self) {
        // Only ever called to close a disable issued above.
        unsafe { cortex_m::interrupt::enable() };
    }
}
