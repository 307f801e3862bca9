//! 8-bit HSV to RGB conversion
//!
//! The hue circle is split into six sectors of 43 units each. Unlike
//! `smart_leds::hsv::hsv2rgb` there is no rainbow balancing.

use crate::color::{Hsv, Rgb};

const SECTOR_WIDTH: u8 = 43;

/// Convert an HSV color to RGB
#[allow(clippy::cast_possible_truncation)]
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let Hsv { hue, sat, val } = hsv;
    if sat == 0 {
        return Rgb {
            r: val,
            g: val,
            b: val,
        };
    }

    let sector = hue / SECTOR_WIDTH;
    let remainder = (hue - sector * SECTOR_WIDTH) * 6;

    let val16 = u16::from(val);
    let sat16 = u16::from(sat);
    let p = ((val16 * (255 - sat16)) >> 8) as u8;
    let q = ((val16 * (255 - ((sat16 * u16::from(remainder)) >> 8))) >> 8) as u8;
    let t = ((val16 * (255 - ((sat16 * (255 - u16::from(remainder))) >> 8))) >> 8) as u8;

    let (r, g, b) = match sector {
        0 => (val, t, p),
        1 => (q, val, p),
        2 => (p, val, t),
        3 => (p, q, val),
        4 => (t, p, val),
        _ => (val, p, q),
    };
    Rgb { r, g, b }
}
