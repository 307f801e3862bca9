//! Scrolling rainbow

use super::{Mode, RenderContext};
use crate::color::{ColorRgbw, Hsv};
use crate::state::Direction;

/// Full hue circle spread across the strip, rotating with the phase
///
/// Colors A and B are ignored; the white channel stays dark.
#[derive(Debug, Clone, Copy, Default)]
pub struct RainbowMode;

impl Mode for RainbowMode {
    #[allow(clippy::cast_possible_truncation)]
    fn render(&self, ctx: &mut RenderContext<'_>, leds: &mut [ColorRgbw]) {
        let offset = ctx.phase.phase8();
        let count = leds.len();
        let odd_lap = (ctx.phase.raw() >> 16) % 2 == 1;

        for (i, led) in leds.iter_mut().enumerate() {
            let spread = (i * 255 / count) as u8;
            let hue = offset.wrapping_add(spread);
            let hue = match ctx.state.direction {
                Direction::Forward => hue,
                Direction::Backward => 255 - hue,
                Direction::PingPong if odd_lap => offset,
                Direction::PingPong => hue,
                Direction::Random => ctx.rng.u8(..),
            };

            *led = ColorRgbw::from_hsv(
                Hsv {
                    hue,
                    sat: 255,
                    val: 255,
                },
                0,
            );
        }
    }
}
