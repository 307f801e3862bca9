//! Two-color split or gradient

use super::{Mode, RenderContext};
use crate::color::ColorRgbw;
use crate::math8::map_range;

/// First half color A, second half color B
///
/// A non-zero blend mode replaces the hard split with a linear A→B gradient
/// across the whole strip.
#[derive(Debug, Clone, Copy, Default)]
pub struct DualSolidMode;

impl Mode for DualSolidMode {
    #[allow(clippy::cast_possible_truncation)]
    fn render(&self, ctx: &mut RenderContext<'_>, leds: &mut [ColorRgbw]) {
        let state = ctx.state;

        if state.blend_mode == 0 {
            let split = leds.len() / 2;
            let (first, second) = leds.split_at_mut(split);
            first.fill(state.color_a);
            second.fill(state.color_b);
            return;
        }

        let last = (leds.len() - 1).max(1) as u32;
        for (i, led) in leds.iter_mut().enumerate() {
            let blend = map_range(i as u32, 0, last, 0, 255) as u8;
            *led = state.color_a.lerp(state.color_b, blend);
        }
    }
}
