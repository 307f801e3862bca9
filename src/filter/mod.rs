//! Post-render effect pipeline
//!
//! Filters run after the mode renderer, in place, in a fixed order: mirror
//! first, then the strobe overlay.

use embassy_time::Instant;

use crate::color::ColorRgbw;
use crate::state::{AnimationState, MirrorMode};

mod mirror;
mod strobe;

pub use mirror::MirrorFilter;
pub use strobe::{StrobeFilter, strobe_level, strobe_period_ms};

pub trait Filter {
    /// Apply the filter to a frame
    fn apply(&self, frame: &mut [ColorRgbw]);

    fn tick(&mut self, _now: Instant) {}
}

/// Filter processor - applies post-processing to frames
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterProcessor {
    pub mirror: MirrorFilter,
    pub strobe: StrobeFilter,
}

impl FilterProcessor {
    pub const fn new() -> Self {
        Self {
            mirror: MirrorFilter::new(MirrorMode::None),
            strobe: StrobeFilter::new(0),
        }
    }

    /// Take the filter settings from the state of the current frame
    pub fn configure(&mut self, state: &AnimationState) {
        self.mirror = MirrorFilter::new(state.mirror);
        self.strobe.set_rate(state.strobe_rate);
    }

    /// Tick the filters
    pub fn tick(&mut self, now: Instant) {
        self.mirror.tick(now);
        self.strobe.tick(now);
    }

    /// Apply all filters in pipeline order
    pub fn apply(&self, frame: &mut [ColorRgbw]) {
        self.mirror.apply(frame);
        self.strobe.apply(frame);
    }
}
