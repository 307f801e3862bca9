use super::{Mode, RenderContext};
use crate::color::ColorRgbw;
use crate::math8::{beatsin8, map_range};

const MIN_BPM: u32 = 10;
const MAX_BPM: u32 = 60;

/// Breathing color A, 10 to 60 breaths per minute depending on speed
///
/// Driven by the frame clock rather than the phase, so the breath rate does
/// not depend on the frame rate.
#[derive(Debug, Clone, Copy, Default)]
pub struct PulseMode;

impl Mode for PulseMode {
    #[allow(clippy::cast_possible_truncation)]
    fn render(&self, ctx: &mut RenderContext<'_>, leds: &mut [ColorRgbw]) {
        let bpm = map_range(u32::from(ctx.state.animation_speed), 0, 255, MIN_BPM, MAX_BPM) as u8;
        let breath = beatsin8(bpm, 0, 255, ctx.clock.as_millis());
        leds.fill(ctx.state.color_a.scale(breath));
    }
}
