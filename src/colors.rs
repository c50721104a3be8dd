//! Color ingestion helpers.
//!
//! Hosts usually hold widget colors as packed integers or 8-bit channel
//! tuples. These helpers convert them into the `palette::Srgba` (0.0-1.0
//! range) currency the gauge uses for configuration and interpolation.

use palette::Srgba;

/// Creates a color from 8-bit RGBA channels.
#[inline]
pub fn from_rgba8(red: u8, green: u8, blue: u8, alpha: u8) -> Srgba {
    Srgba::<u8>::new(red, green, blue, alpha).into_format()
}

/// Creates a color from a packed `0xAARRGGBB` value.
///
/// This is the channel order Android-style views carry their style colors
/// in, so a host can forward parsed attribute values unchanged.
#[inline]
pub fn from_argb(packed: u32) -> Srgba {
    from_rgba8(
        (packed >> 16) as u8,
        (packed >> 8) as u8,
        packed as u8,
        (packed >> 24) as u8,
    )
}
