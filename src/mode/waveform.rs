//! Whole-strip brightness oscillation

use super::{Mode, RenderContext};
use crate::color::ColorRgbw;
use crate::math8::{sawtooth8, sin8, square8, triangle8};

/// Oscillator shape, selected by the animation control value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveformKind {
    Sine,
    Triangle,
    Square,
    Sawtooth,
}

impl WaveformKind {
    /// `0..64` sine, `64..128` triangle, `128..192` square, rest sawtooth
    pub const fn from_ctrl(ctrl: u8) -> Self {
        match ctrl {
            0..64 => Self::Sine,
            64..128 => Self::Triangle,
            128..192 => Self::Square,
            _ => Self::Sawtooth,
        }
    }

    /// Sample the wave at an 8-bit phase
    pub fn sample(self, phase: u8) -> u8 {
        match self {
            Self::Sine => sin8(phase),
            Self::Triangle => triangle8(phase),
            Self::Square => square8(phase),
            Self::Sawtooth => sawtooth8(phase),
        }
    }
}

/// Color A scaled by a periodic wave driven by the animation phase
#[derive(Debug, Clone, Copy, Default)]
pub struct WaveformMode;

impl Mode for WaveformMode {
    fn render(&self, ctx: &mut RenderContext<'_>, leds: &mut [ColorRgbw]) {
        let wave = WaveformKind::from_ctrl(ctx.state.animation_ctrl).sample(ctx.phase.phase8());
        leds.fill(ctx.state.color_a.scale(wave));
    }
}
