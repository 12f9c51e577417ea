//! The shrine light sequencer.
//!
//! A finite state machine advanced one state per [`service`] call from the
//! firmware's main loop. The idle state blocks inside the touch sensor's
//! confirm routine; once a touch is confirmed, the remaining states play the
//! fixed sequence - solid orange, fade to black, fade in to blue, hold blue,
//! back to dark - rendering frames against a periodic timer so the fades
//! stay non-blocking.
//!
//! [`service`]: ShrineSequencer::service

use palette::Srgb;

use crate::colors::{COLOR_OFF, SHRINE_BLUE, SHRINE_ORANGE};
use crate::config::SequenceConfig;
use crate::frame::{FrameBuffer, LedStrip};
use crate::time::{PeriodicTimer, TimeDuration, TimeInstant, TimeSource};
use crate::touch::TouchWait;

/// The current state of the light sequence.
///
/// Exactly one state is active at a time and every state has exactly one
/// successor, so the machine is total and cycles forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LightState {
    /// Dark, blocking on the touch sensor's confirm routine.
    Inactive,
    /// Solid orange has just been committed.
    OrangeSet,
    /// Darkening every LED one step per frame tick.
    FadeOut,
    /// Dark gap between the two fades.
    BetweenFades,
    /// Raising the blue channel one step per frame tick.
    FadeIn,
    /// Solid blue has just been committed.
    BlueSet,
    /// Sequence finished; next service returns to `Inactive`.
    IdleUntilTouchFinished,
}

/// Drives an addressable LED strip through the shrine light sequence.
///
/// Owns the frame buffer, the strip transport, and the touch sensor; borrows
/// the time source the way the strip's frame timer needs it. Everything
/// blocking in the sequence (the touch wait and the three fixed holds) is
/// delegated to the injected capabilities, so the machine itself is plain
/// transition logic and unit-testable on the host.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `S` - LED strip transport type
/// * `W` - Touch sensor type
/// * `T` - Time source implementation type
/// * `N` - Number of LEDs on the strip
pub struct ShrineSequencer<'t, I, S, W, T, const N: usize>
where
    I: TimeInstant,
    S: LedStrip<N>,
    W: TouchWait,
    T: TimeSource<I>,
{
    strip: S,
    touch: W,
    time_source: &'t T,
    config: SequenceConfig,
    state: LightState,
    frame: FrameBuffer<N>,
    fade_timer: PeriodicTimer<I>,
    fade_in_color: Srgb<u8>,
}

impl<'t, I, S, W, T, const N: usize> ShrineSequencer<'t, I, S, W, T, N>
where
    I: TimeInstant,
    S: LedStrip<N>,
    W: TouchWait,
    T: TimeSource<I>,
{
    /// Creates an inactive sequencer and blanks the strip.
    pub fn new(mut strip: S, touch: W, time_source: &'t T, config: SequenceConfig) -> Self {
        let frame = FrameBuffer::new();
        strip.show(frame.leds());

        let fade_timer = PeriodicTimer::new(
            I::Duration::from_millis(config.frame_interval_ms),
            time_source.now(),
        );

        Self {
            strip,
            touch,
            time_source,
            config,
            state: LightState::Inactive,
            frame,
            fade_timer,
            fade_in_color: COLOR_OFF,
        }
    }

    /// Performs one state's worth of work and returns the state now in
    /// effect.
    ///
    /// Call this from an unbounded loop. `Inactive` blocks inside the touch
    /// sensor until a touch is confirmed; `OrangeSet`, `BetweenFades` and
    /// `BlueSet` block for their fixed holds; the fade states render at most
    /// one frame per call and otherwise return immediately.
    pub fn service(&mut self) -> LightState {
        match self.state {
            LightState::Inactive => {
                self.touch.wait_for_touch();
                self.strip.set_brightness(self.config.brightness);
                self.frame.fill(SHRINE_ORANGE);
                self.strip.show(self.frame.leds());
                self.state = LightState::OrangeSet;
            }
            LightState::OrangeSet => {
                // The one deliberate pause mid-sequence: let the solid
                // orange be seen before the fade starts.
                self.strip.hold_ms(self.config.orange_hold_ms);
                self.fade_timer.reset(self.time_source.now());
                self.state = LightState::FadeOut;
            }
            LightState::FadeOut => {
                if self.fade_timer.ready(self.time_source.now()) {
                    self.frame.fade_to_black_by(self.config.fade_step);
                    self.strip.show(self.frame.leds());
                    if self.frame.is_black() {
                        self.state = LightState::BetweenFades;
                    }
                }
            }
            LightState::BetweenFades => {
                self.frame.fill(COLOR_OFF);
                self.strip.show(self.frame.leds());
                self.strip.hold_ms(self.config.between_fades_ms);
                self.fade_timer.reset(self.time_source.now());
                self.fade_in_color = COLOR_OFF;
                self.state = LightState::FadeIn;
            }
            LightState::FadeIn => {
                if self.fade_timer.ready(self.time_source.now()) {
                    self.fade_in_color.blue =
                        self.fade_in_color.blue.saturating_add(self.config.fade_step);
                    self.frame.fill(self.fade_in_color);
                    self.strip.show(self.frame.leds());
                    if self.frame.first().blue >= u8::MAX - self.config.fade_step {
                        // Close enough that another increment would only
                        // stutter at the rail; snap to pure blue.
                        self.frame.fill(SHRINE_BLUE);
                        self.strip.show(self.frame.leds());
                        self.state = LightState::BlueSet;
                    }
                }
            }
            LightState::BlueSet => {
                self.strip.hold_ms(self.config.blue_hold_ms);
                self.frame.fill(COLOR_OFF);
                self.strip.show(self.frame.leds());
                self.state = LightState::IdleUntilTouchFinished;
            }
            LightState::IdleUntilTouchFinished => {
                self.state = LightState::Inactive;
            }
        }
        self.state
    }

    /// Returns the current state.
    pub fn state(&self) -> LightState {
        self.state
    }

    /// Returns the current frame contents.
    pub fn frame(&self) -> &FrameBuffer<N> {
        &self.frame
    }

    /// Returns the sequence configuration.
    pub fn config(&self) -> SequenceConfig {
        self.config
    }
}
