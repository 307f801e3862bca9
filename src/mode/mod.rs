//! Render algorithms keyed by [`AnimationMode`]
//!
//! Every algorithm is a unit struct implementing [`Mode`]. They hold no state
//! of their own: everything they need comes from the [`RenderContext`] and
//! from the previous frame still in the buffer (used by the trail effects).

mod chase;
mod dash;
mod dual_solid;
mod pulse;
mod rainbow;
mod solid;
mod sparkle;
mod waveform;

use embassy_time::Instant;
use fastrand::Rng;

pub use chase::ChaseMode;
pub use dash::DashMode;
pub use dual_solid::DualSolidMode;
pub use pulse::PulseMode;
pub use rainbow::RainbowMode;
pub use solid::SolidMode;
pub use sparkle::SparkleMode;
pub use waveform::{WaveformKind, WaveformMode};

use crate::color::ColorRgbw;
use crate::math8::map_range;
use crate::phase::Phase;
use crate::state::{AnimationMode, AnimationState, Direction};

/// Inputs shared by all algorithms for one frame
pub struct RenderContext<'a> {
    pub state: &'a AnimationState,
    pub phase: Phase,
    /// Frame clock (wall-clock milliseconds)
    pub clock: Instant,
    pub rng: &'a mut Rng,
}

pub trait Mode {
    /// Render a single frame into `leds`
    fn render(&self, ctx: &mut RenderContext<'_>, leds: &mut [ColorRgbw]);
}

impl AnimationMode {
    /// Render the algorithm selected by this mode
    pub fn render(self, ctx: &mut RenderContext<'_>, leds: &mut [ColorRgbw]) {
        if leds.is_empty() {
            return;
        }
        match self {
            Self::Solid | Self::Custom1 | Self::Custom2 => SolidMode.render(ctx, leds),
            Self::DualSolid => DualSolidMode.render(ctx, leds),
            Self::Chase => ChaseMode.render(ctx, leds),
            Self::Dash => DashMode.render(ctx, leds),
            Self::Waveform => WaveformMode.render(ctx, leds),
            Self::Pulse => PulseMode.render(ctx, leds),
            Self::Rainbow => RainbowMode.render(ctx, leds),
            Self::Sparkle => SparkleMode.render(ctx, leds),
        }
    }
}

/// Segment length used by chase and dash, `1..=max(1, count / 4)`
#[allow(clippy::cast_possible_truncation)]
pub fn segment_size(ctrl: u8, count: usize) -> usize {
    let max_segment = (count / 4).max(1) as u32;
    (map_range(u32::from(ctrl), 0, 255, 1, max_segment) as usize).max(1)
}

/// Position within a cycle of `len` steps, adjusted for `direction`
///
/// `PingPong` snaps to the start for the whole of every odd lap.
#[allow(clippy::cast_possible_truncation)]
pub fn directed_position(direction: Direction, phase: Phase, len: usize, rng: &mut Rng) -> usize {
    if len == 0 {
        return 0;
    }
    let len32 = len as u32;
    let position = phase.position(len32) as usize;
    match direction {
        Direction::Forward => position,
        Direction::Backward => len - 1 - position,
        Direction::PingPong => {
            if phase.lap(len32) % 2 == 1 {
                0
            } else {
                position
            }
        }
        Direction::Random => rng.usize(..len),
    }
}
