//! 8-bit fixed-point helpers shared by the render algorithms and filters.

use core::f32::consts::TAU;

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// `scale8(x, 255) == x` and `scale8(x, 0) == 0`.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Linear interpolation between `a` and `b` by `frac` (0 = all a, 255 ~ all b)
#[inline]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub const fn lerp8(a: u8, b: u8, frac: u8) -> u8 {
    let delta = b as i32 - a as i32;
    let result = a as i32 + ((delta * frac as i32) >> 8);
    if result < 0 {
        0
    } else if result > 255 {
        255
    } else {
        result as u8
    }
}

/// Re-map `x` from `[in_lo, in_hi]` to `[out_lo, out_hi]`
///
/// Integer division truncates toward zero and the result is clamped to the
/// output range, so the output may also be a descending range.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn map_range(x: u32, in_lo: u32, in_hi: u32, out_lo: u32, out_hi: u32) -> u32 {
    if in_lo == in_hi {
        return out_lo;
    }
    let x = x as i64;
    let (in_lo, in_hi) = (in_lo as i64, in_hi as i64);
    let (out_lo, out_hi) = (out_lo as i64, out_hi as i64);

    let mapped = (x - in_lo) * (out_hi - out_lo) / (in_hi - in_lo) + out_lo;

    let (min, max) = if out_lo <= out_hi {
        (out_lo, out_hi)
    } else {
        (out_hi, out_lo)
    };
    let clamped = if mapped < min {
        min
    } else if mapped > max {
        max
    } else {
        mapped
    };
    clamped as u32
}

/// Sine of an 8-bit angle, normalized to `0..=255`
///
/// A full turn is `0..=255`; `sin8(0) == 128`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn sin8(theta: u8) -> u8 {
    let angle = f32::from(theta) / 255.0 * TAU;
    let value = (libm::sinf(angle) + 1.0) * 127.5 + 0.5;
    // float -> int casts saturate
    value as u8
}

/// Sine beat oscillating between `low` and `high` at `bpm` beats per minute
#[allow(clippy::cast_possible_truncation)]
pub fn beatsin8(bpm: u8, low: u8, high: u8, time_ms: u64) -> u8 {
    if bpm == 0 || high <= low {
        return low;
    }
    let beat = time_ms.wrapping_mul(u64::from(bpm)).wrapping_mul(256) / 60_000;
    let sine = sin8(beat as u8);
    low + scale8(sine, high - low)
}

/// Triangle wave: ramps up over the first half turn, down over the second
pub const fn triangle8(phase: u8) -> u8 {
    if phase < 128 {
        phase * 2
    } else {
        255 - (phase - 128) * 2
    }
}

/// Square wave with 50% duty cycle
pub const fn square8(phase: u8) -> u8 {
    if phase < 128 { 255 } else { 0 }
}

/// Sawtooth wave
pub const fn sawtooth8(phase: u8) -> u8 {
    phase
}
