//! Comet chase with a fading trail

use super::{Mode, RenderContext, directed_position, segment_size};
use crate::color::ColorRgbw;

/// Fade applied to the previous frame before drawing the head
const TRAIL_FADE: u8 = 20;

/// A segment of color A running along the strip
///
/// The previous frame is faded instead of cleared, leaving a trail behind the
/// segment. The segment does not wrap past the end of the strip.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChaseMode;

impl Mode for ChaseMode {
    fn render(&self, ctx: &mut RenderContext<'_>, leds: &mut [ColorRgbw]) {
        let count = leds.len();
        let segment = segment_size(ctx.state.animation_ctrl, count);
        let position = directed_position(ctx.state.direction, ctx.phase, count, ctx.rng);

        for led in leds.iter_mut() {
            *led = led.fade(TRAIL_FADE);
        }

        let end = (position + segment).min(count);
        leds[position..end].fill(ctx.state.color_a);
    }
}
