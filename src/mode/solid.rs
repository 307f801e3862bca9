use super::{Mode, RenderContext};
use crate::color::ColorRgbw;

/// Every pixel set to color A
#[derive(Debug, Clone, Copy, Default)]
pub struct SolidMode;

impl Mode for SolidMode {
    fn render(&self, ctx: &mut RenderContext<'_>, leds: &mut [ColorRgbw]) {
        leds.fill(ctx.state.color_a);
    }
}
