#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`TouchSensor`**: Times RC charge/discharge cycles on two digital pins and
//!   confirms a touch from consecutive qualifying samples
//! - **`ShrineSequencer`**: Total finite state machine driving the LED strip
//!   through the fixed light sequence, one state per `service()` call
//! - **`LightState`**: The seven states of the sequence
//! - **`FrameBuffer`**: One color per physical LED, owned by the sequencer
//! - **`SenseIo` / `InterruptControl`**: Traits to implement for your pins and
//!   interrupt control
//! - **`LedStrip`**: Trait to implement for your strip transport
//! - **`TimeSource`**: Trait to implement for your timing system
//!
//! Colors are 8-bit `palette::Srgb<u8>`; the fades are exact integer steps on
//! channels, clamped at the rails. All thresholds and timings are compile-time
//! constants ([`TouchConfig`], [`SequenceConfig`]).

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod colors;
pub mod config;
pub mod frame;
pub mod hal;
pub mod sequencer;
pub mod time;
pub mod touch;

pub use colors::{COLOR_OFF, SHRINE_BLUE, SHRINE_ORANGE};
pub use config::{ConfigError, SequenceConfig, TouchConfig, DEFAULT_LED_COUNT};
pub use frame::{FrameBuffer, LedStrip};
pub use hal::{CriticalSection, InterruptControl, PinDirection, PinLevel, SenseIo, SensePin};
pub use sequencer::{LightState, ShrineSequencer};
pub use time::{PeriodicTimer, TimeDuration, TimeInstant, TimeSource};
pub use touch::{TouchSensor, TouchWait};
