//! Output-stage level transform for pixel drivers.
//!
//! The renderer never applies master brightness: it is handed to the driver
//! together with the frame so brightness changes and gamma are applied in the
//! same pass over the pixels and never tear mid-frame.

use crate::color::ColorRgbw;

/// Square-law gamma approximation (`v * v / 255`)
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn gamma8(value: u8) -> u8 {
    ((value as u16 * value as u16) / 255) as u8
}

#[inline]
#[allow(clippy::cast_possible_truncation)]
const fn limit8(value: u8, limit: u8) -> u8 {
    ((value as u16 * limit as u16) / 255) as u8
}

/// Gamma-correct a pixel and scale it by the brightness limit
pub const fn output_level(color: ColorRgbw, brightness_limit: u8) -> ColorRgbw {
    if brightness_limit == 0 {
        return ColorRgbw::BLACK;
    }
    let corrected = ColorRgbw::new(
        gamma8(color.r),
        gamma8(color.g),
        gamma8(color.b),
        gamma8(color.w),
    );
    if brightness_limit == 255 {
        return corrected;
    }
    ColorRgbw::new(
        limit8(corrected.r, brightness_limit),
        limit8(corrected.g, brightness_limit),
        limit8(corrected.b, brightness_limit),
        limit8(corrected.w, brightness_limit),
    )
}

/// Apply [`output_level`] to a whole frame, writing into `out`
///
/// Writes `min(frame.len(), out.len())` pixels.
pub fn apply_output_levels(frame: &[ColorRgbw], brightness_limit: u8, out: &mut [ColorRgbw]) {
    for (dst, src) in out.iter_mut().zip(frame) {
        *dst = output_level(*src, brightness_limit);
    }
}
