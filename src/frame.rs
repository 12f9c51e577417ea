//! The LED frame buffer and the strip transport trait.

use palette::Srgb;

use crate::colors::COLOR_OFF;

/// Trait for abstracting the addressable LED strip transport.
///
/// Implement this for your strip driver (bit-banged, PIO, SPI, ...). The
/// sequencer calls [`show`](LedStrip::show) after every frame mutation and
/// leans on [`hold_ms`](LedStrip::hold_ms) for the fixed pauses in the
/// sequence.
pub trait LedStrip<const N: usize> {
    /// Sets the global brightness (0-255) applied to subsequent frames.
    fn set_brightness(&mut self, brightness: u8);

    /// Commits a frame to the physical strip.
    fn show(&mut self, frame: &[Srgb<u8>; N]);

    /// Blocks for `millis` milliseconds while continuing to service the
    /// output protocol (refreshing the strip as needed).
    fn hold_ms(&mut self, millis: u32);
}

/// An ordered buffer of one color per physical LED.
///
/// Owned exclusively by the sequencer. Every operation drives all LEDs
/// identically, so the first LED is representative of the whole frame; the
/// sequencer's fade-termination checks rely on that invariant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameBuffer<const N: usize> {
    leds: [Srgb<u8>; N],
}

impl<const N: usize> FrameBuffer<N> {
    /// Creates an all-black frame.
    pub const fn new() -> Self {
        Self {
            leds: [COLOR_OFF; N],
        }
    }

    /// Sets every LED to `color`.
    pub fn fill(&mut self, color: Srgb<u8>) {
        self.leds = [color; N];
    }

    /// Darkens every channel of every LED by `amount`, clamping at zero.
    pub fn fade_to_black_by(&mut self, amount: u8) {
        for led in &mut self.leds {
            led.red = led.red.saturating_sub(amount);
            led.green = led.green.saturating_sub(amount);
            led.blue = led.blue.saturating_sub(amount);
        }
    }

    /// Returns the first LED's color.
    pub fn first(&self) -> Srgb<u8> {
        self.leds[0]
    }

    /// Returns `true` when the first LED (and, by the uniform-drive
    /// invariant, the whole frame) is fully dark.
    pub fn is_black(&self) -> bool {
        self.leds[0] == COLOR_OFF
    }

    /// Returns the frame contents for committing to a strip.
    pub fn leds(&self) -> &[Srgb<u8>; N] {
        &self.leds
    }
}

impl<const N: usize> Default for FrameBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}
