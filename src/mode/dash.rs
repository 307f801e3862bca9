use super::{Mode, RenderContext, directed_position, segment_size};
use crate::color::ColorRgbw;

/// Alternating bands of color A and color B scrolling along the strip
#[derive(Debug, Clone, Copy, Default)]
pub struct DashMode;

impl Mode for DashMode {
    fn render(&self, ctx: &mut RenderContext<'_>, leds: &mut [ColorRgbw]) {
        let segment = segment_size(ctx.state.animation_ctrl, leds.len());
        let period = segment * 2;
        let offset = directed_position(ctx.state.direction, ctx.phase, period, ctx.rng);

        for (i, led) in leds.iter_mut().enumerate() {
            *led = if (i + offset) % period < segment {
                ctx.state.color_a
            } else {
                ctx.state.color_b
            };
        }
    }
}
