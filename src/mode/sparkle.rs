use super::{Mode, RenderContext};
use crate::color::ColorRgbw;
use crate::math8::map_range;

const SPARKLE_FADE: u8 = 10;

/// Random pixels lit in color A or B over a slowly fading background
#[derive(Debug, Clone, Copy, Default)]
pub struct SparkleMode;

impl Mode for SparkleMode {
    fn render(&self, ctx: &mut RenderContext<'_>, leds: &mut [ColorRgbw]) {
        for led in leds.iter_mut() {
            *led = led.fade(SPARKLE_FADE);
        }

        let sparkles = map_range(u32::from(ctx.state.animation_speed), 0, 255, 1, 10);
        for _ in 0..sparkles {
            let index = ctx.rng.usize(..leds.len());
            leds[index] = if ctx.rng.bool() {
                ctx.state.color_a
            } else {
                ctx.state.color_b
            };
        }
    }
}
