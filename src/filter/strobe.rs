//! Strobe overlay
//!
//! Each strobe period has a short flash (first 10%), a linear fade out (next
//! 10%) and darkness for the rest of the period.

use embassy_time::Instant;

use super::Filter;
use crate::color::ColorRgbw;
use crate::math8::map_range;

const SLOWEST_PERIOD_MS: u32 = 500;
const FASTEST_PERIOD_MS: u32 = 20;

/// Strobe period in milliseconds for a non-zero rate, 500ms down to 20ms
#[allow(clippy::cast_possible_truncation)]
pub const fn strobe_period_ms(rate: u8) -> u32 {
    let period = map_range(rate as u32, 1, 255, SLOWEST_PERIOD_MS, FASTEST_PERIOD_MS);
    if period == 0 { FASTEST_PERIOD_MS } else { period }
}

/// Dim factor of the strobe envelope at `clock_ms`
///
/// Rate 0 means no strobe and always yields 255.
#[allow(clippy::cast_possible_truncation)]
pub const fn strobe_level(rate: u8, clock_ms: u64) -> u8 {
    if rate == 0 {
        return 255;
    }
    let period = strobe_period_ms(rate);
    let t = (clock_ms % period as u64) as u32;
    let flash_end = period / 10;
    let fade_end = period / 5;

    if t < flash_end {
        255
    } else if t < fade_end {
        map_range(t, flash_end, fade_end, 255, 0) as u8
    } else {
        0
    }
}

/// Scales the whole frame by the strobe envelope
#[derive(Debug, Clone, Copy)]
pub struct StrobeFilter {
    rate: u8,
    now: Instant,
}

impl Default for StrobeFilter {
    fn default() -> Self {
        Self::new(0)
    }
}

impl StrobeFilter {
    pub const fn new(rate: u8) -> Self {
        Self {
            rate,
            now: Instant::from_millis(0),
        }
    }

    pub fn set_rate(&mut self, rate: u8) {
        self.rate = rate;
    }

    /// Check if the overlay modifies frames at all
    pub const fn is_active(&self) -> bool {
        self.rate != 0
    }

    /// Current dim factor
    pub fn level(&self) -> u8 {
        strobe_level(self.rate, self.now.as_millis())
    }
}

impl Filter for StrobeFilter {
    fn apply(&self, frame: &mut [ColorRgbw]) {
        if !self.is_active() {
            return;
        }
        let level = self.level();
        for pixel in frame.iter_mut() {
            *pixel = pixel.scale(level);
        }
    }

    fn tick(&mut self, now: Instant) {
        self.now = now;
    }
}
