//! Compile-time configuration for touch sensing and the light sequence.
//!
//! There is no runtime configuration surface; both config structs have
//! `const` constructors so custom values live in `const` items next to the
//! defaults. The fallible constructors reject values that would break the
//! algorithms (a zero timeout makes every sample disqualifying, a zero fade
//! step never terminates a fade).

/// Number of LEDs on the pedestal strip. The LED count is a const generic
/// on [`FrameBuffer`](crate::frame::FrameBuffer) and the sequencer; this is
/// the value the pedestal shipped with.
pub const DEFAULT_LED_COUNT: usize = 5;

/// Configuration for the capacitive touch sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchConfig {
    /// Accumulator ceiling for one charge/discharge measurement, in
    /// arbitrary busy-loop units. 100_000 is about 182 ms of wall time at
    /// the 8 MHz reference clock; recalibrate for other clock speeds.
    pub sample_timeout: u32,
    /// A sample qualifies as a touch when its accumulator stays below
    /// `sample_timeout / detect_divisor`. The polarity (small count means
    /// touched) is a property of the pull resistor and pad; verify it
    /// empirically when changing the circuit.
    pub detect_divisor: u32,
    /// Number of consecutive qualifying samples required to confirm a
    /// touch. Higher is slower to respond but immune to brushes and noise.
    pub required_samples: u8,
}

impl TouchConfig {
    /// The values the pedestal shipped with.
    pub const DEFAULT: Self = Self::default();

    const fn default() -> Self {
        Self {
            sample_timeout: 100_000,
            detect_divisor: 5,
            required_samples: 5,
        }
    }

    /// Creates a validated configuration.
    ///
    /// # Errors
    /// * `ZeroTimeout` - `sample_timeout` is 0
    /// * `ZeroDivisor` - `detect_divisor` is 0
    /// * `ZeroSamples` - `required_samples` is 0
    pub const fn new(
        sample_timeout: u32,
        detect_divisor: u32,
        required_samples: u8,
    ) -> Result<Self, ConfigError> {
        if sample_timeout == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        if detect_divisor == 0 {
            return Err(ConfigError::ZeroDivisor);
        }
        if required_samples == 0 {
            return Err(ConfigError::ZeroSamples);
        }
        Ok(Self {
            sample_timeout,
            detect_divisor,
            required_samples,
        })
    }

    /// The accumulator value below which a sample counts as a touch.
    pub const fn detect_threshold(&self) -> u32 {
        self.sample_timeout / self.detect_divisor
    }
}

/// Timing and levels for the light sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SequenceConfig {
    /// Global strip brightness applied when a touch is acknowledged (0-255).
    pub brightness: u8,
    /// Interval between animation frames during the fades, in milliseconds.
    pub frame_interval_ms: u64,
    /// How long the solid orange holds before fading, in milliseconds.
    pub orange_hold_ms: u32,
    /// Dark gap between the fade-out and the fade-in, in milliseconds.
    pub between_fades_ms: u32,
    /// How long the solid blue holds before going dark, in milliseconds.
    pub blue_hold_ms: u32,
    /// Per-frame channel change during the fades (out of 255).
    pub fade_step: u8,
}

impl SequenceConfig {
    /// The values the pedestal shipped with.
    pub const DEFAULT: Self = Self::default();

    const fn default() -> Self {
        Self {
            brightness: 100,
            frame_interval_ms: 20,
            orange_hold_ms: 1000,
            between_fades_ms: 250,
            blue_hold_ms: 5000,
            fade_step: 20,
        }
    }

    /// Creates a validated configuration.
    ///
    /// # Errors
    /// * `ZeroTickInterval` - `frame_interval_ms` is 0
    /// * `ZeroFadeStep` - `fade_step` is 0
    pub const fn new(
        brightness: u8,
        frame_interval_ms: u64,
        orange_hold_ms: u32,
        between_fades_ms: u32,
        blue_hold_ms: u32,
        fade_step: u8,
    ) -> Result<Self, ConfigError> {
        if frame_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        if fade_step == 0 {
            return Err(ConfigError::ZeroFadeStep);
        }
        Ok(Self {
            brightness,
            frame_interval_ms,
            orange_hold_ms,
            between_fades_ms,
            blue_hold_ms,
            fade_step,
        })
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Sample timeout must be nonzero.
    ZeroTimeout,

    /// Detect divisor must be nonzero.
    ZeroDivisor,

    /// At least one qualifying sample is required.
    ZeroSamples,

    /// Frame interval must be nonzero.
    ZeroTickInterval,

    /// Fade step must be nonzero or the fades never terminate.
    ZeroFadeStep,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroTimeout => write!(f, "sample timeout must be nonzero"),
            ConfigError::ZeroDivisor => write!(f, "detect divisor must be nonzero"),
            ConfigError::ZeroSamples => write!(f, "required sample count must be nonzero"),
            ConfigError::ZeroTickInterval => write!(f, "frame interval must be nonzero"),
            ConfigError::ZeroFadeStep => write!(f, "fade step must be nonzero"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
