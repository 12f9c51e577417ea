//! WS2812 strip transport over PIO.

use embedded_hal::delay::DelayNs;
use palette::Srgb;
use shrine_lights::LedStrip;
use smart_leds::{brightness, SmartLedsWrite, RGB8};

/// Strip transport over any smart-leds writer (here: ws2812-pio).
///
/// WS2812 pixels latch and hold their color on their own, so the hold
/// primitive is a plain delay; no refresh is needed mid-hold.
pub struct Ws2812Strip<W, D, const N: usize>
where
    W: SmartLedsWrite<Color = RGB8>,
    D: DelayNs,
{
    writer: W,
    delay: D,
    level: u8,
}

impl<W, D, const N: usize> Ws2812Strip<W, D, N>
where
    W: SmartLedsWrite<Color = RGB8>,
    D: DelayNs,
{
    pub fn new(writer: W, delay: D) -> Self {
        Self {
            writer,
            delay,
            level: 255,
        }
    }
}

impl<W, D, const N: usize> LedStrip<N> for Ws2812Strip<W, D, N>
where
    W: SmartLedsWrite<Color = RGB8>,
    D: DelayNs,
{
    fn set_brightness(&mut self, level: u8) {
        self.level = level;
    }

    fn show(&mut self, frame: &[Srgb<u8>; N]) {
        let pixels = frame
            .iter()
            .map(|led| RGB8::new(led.red, led.green, led.blue));
        // The ws2812 driver handles the GRB wire order itself.
        let _ = self.writer.write(brightness(pixels, self.level));
    }

    fn hold_ms(&mut self, millis: u32) {
        self.delay.delay_ms(millis);
    }
}
