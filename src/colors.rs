//! The fixed shrine palette.
//!
//! Colors are 8-bit `palette::Srgb<u8>` because every animation step in this
//! crate is integer arithmetic on channels (add or subtract a fixed amount,
//! clamp at the rail). Byte ordering on the wire (many strips want GRB) is
//! the strip transport's concern, not the palette's.

use palette::Srgb;

/// All LEDs off.
pub const COLOR_OFF: Srgb<u8> = Srgb::new(0, 0, 0);

/// The orange shown while a touch is acknowledged (0xFF5500).
pub const SHRINE_ORANGE: Srgb<u8> = Srgb::new(0xFF, 0x55, 0x00);

/// The blue the sequence fades in to and holds (0x0000FF).
pub const SHRINE_BLUE: Srgb<u8> = Srgb::new(0x00, 0x00, 0xFF);

// Alternate candidates tried as shrine lighting; kept for easy swapping.
pub const CANDIDATE_ORANGE: Srgb<u8> = Srgb::new(0xFF, 0xA5, 0x00);
pub const CANDIDATE_HARVEST_GOLD: Srgb<u8> = Srgb::new(0xCC, 0x88, 0x00);
