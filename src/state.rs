//! Animation parameter snapshot handed from producers to the renderer.

use crate::color::ColorRgbw;

const MODE_NAME_SOLID: &str = "solid";
const MODE_NAME_DUAL_SOLID: &str = "dual_solid";
const MODE_NAME_CHASE: &str = "chase";
const MODE_NAME_DASH: &str = "dash";
const MODE_NAME_WAVEFORM: &str = "waveform";
const MODE_NAME_PULSE: &str = "pulse";
const MODE_NAME_RAINBOW: &str = "rainbow";
const MODE_NAME_SPARKLE: &str = "sparkle";
const MODE_NAME_CUSTOM_1: &str = "custom_1";
const MODE_NAME_CUSTOM_2: &str = "custom_2";

const MODE_ID_SOLID: u8 = 0;
const MODE_ID_DUAL_SOLID: u8 = 1;
const MODE_ID_CHASE: u8 = 2;
const MODE_ID_DASH: u8 = 3;
const MODE_ID_WAVEFORM: u8 = 4;
const MODE_ID_PULSE: u8 = 5;
const MODE_ID_RAINBOW: u8 = 6;
const MODE_ID_SPARKLE: u8 = 7;
const MODE_ID_CUSTOM_1: u8 = 8;
const MODE_ID_CUSTOM_2: u8 = 9;

/// Animation algorithm selector
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AnimationMode {
    #[default]
    Solid = MODE_ID_SOLID,
    DualSolid = MODE_ID_DUAL_SOLID,
    Chase = MODE_ID_CHASE,
    Dash = MODE_ID_DASH,
    Waveform = MODE_ID_WAVEFORM,
    Pulse = MODE_ID_PULSE,
    Rainbow = MODE_ID_RAINBOW,
    Sparkle = MODE_ID_SPARKLE,
    /// Reserved, renders as [`AnimationMode::Solid`]
    Custom1 = MODE_ID_CUSTOM_1,
    /// Reserved, renders as [`AnimationMode::Solid`]
    Custom2 = MODE_ID_CUSTOM_2,
}

impl AnimationMode {
    pub const ALL: [Self; 10] = [
        Self::Solid,
        Self::DualSolid,
        Self::Chase,
        Self::Dash,
        Self::Waveform,
        Self::Pulse,
        Self::Rainbow,
        Self::Sparkle,
        Self::Custom1,
        Self::Custom2,
    ];

    /// Decode a raw mode id
    ///
    /// Out-of-range values come from upstream decoding bugs and are clamped to
    /// the last valid mode instead of being rejected.
    pub const fn from_raw(value: u8) -> Self {
        match value {
            MODE_ID_SOLID => Self::Solid,
            MODE_ID_DUAL_SOLID => Self::DualSolid,
            MODE_ID_CHASE => Self::Chase,
            MODE_ID_DASH => Self::Dash,
            MODE_ID_WAVEFORM => Self::Waveform,
            MODE_ID_PULSE => Self::Pulse,
            MODE_ID_RAINBOW => Self::Rainbow,
            MODE_ID_SPARKLE => Self::Sparkle,
            MODE_ID_CUSTOM_1 => Self::Custom1,
            _ => Self::Custom2,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Solid => MODE_NAME_SOLID,
            Self::DualSolid => MODE_NAME_DUAL_SOLID,
            Self::Chase => MODE_NAME_CHASE,
            Self::Dash => MODE_NAME_DASH,
            Self::Waveform => MODE_NAME_WAVEFORM,
            Self::Pulse => MODE_NAME_PULSE,
            Self::Rainbow => MODE_NAME_RAINBOW,
            Self::Sparkle => MODE_NAME_SPARKLE,
            Self::Custom1 => MODE_NAME_CUSTOM_1,
            Self::Custom2 => MODE_NAME_CUSTOM_2,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.as_str() == s)
    }
}

/// Post-render mirroring
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MirrorMode {
    #[default]
    None = 0,
    /// First half reflected onto the second half
    Full = 1,
    /// Strip split into 4 segments, odd segments reversed
    Split2 = 2,
    /// Strip split into 6 segments, odd segments reversed
    Split3 = 3,
    /// Strip split into 8 segments, odd segments reversed
    Split4 = 4,
}

impl MirrorMode {
    pub const ALL: [Self; 5] = [
        Self::None,
        Self::Full,
        Self::Split2,
        Self::Split3,
        Self::Split4,
    ];

    /// Decode a raw mirror id, clamping to [`MirrorMode::Split4`]
    pub const fn from_raw(value: u8) -> Self {
        match value {
            0 => Self::None,
            1 => Self::Full,
            2 => Self::Split2,
            3 => Self::Split3,
            _ => Self::Split4,
        }
    }

    /// Number of mirrored pairs for the split modes
    pub const fn split_pairs(self) -> Option<usize> {
        match self {
            Self::Split2 => Some(2),
            Self::Split3 => Some(3),
            Self::Split4 => Some(4),
            Self::None | Self::Full => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Full => "full",
            Self::Split2 => "split2",
            Self::Split3 => "split3",
            Self::Split4 => "split4",
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mirror| mirror.as_str() == s)
    }
}

/// Direction of travel for position-based animations
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    #[default]
    Forward = 0,
    Backward = 1,
    /// Snaps back to the start on every odd lap
    PingPong = 2,
    /// Position redrawn at random every frame
    Random = 3,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Forward, Self::Backward, Self::PingPong, Self::Random];

    /// Decode a raw direction id, clamping to [`Direction::Random`]
    pub const fn from_raw(value: u8) -> Self {
        match value {
            0 => Self::Forward,
            1 => Self::Backward,
            2 => Self::PingPong,
            _ => Self::Random,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
            Self::PingPong => "ping_pong",
            Self::Random => "random",
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|direction| direction.as_str() == s)
    }
}

/// Complete parameter set for one rendered frame
///
/// Producers build a fresh value on every control event and hand it over by
/// copy. All fields are full-range bytes, producers clamp before publishing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationState {
    /// Global dim factor, applied by the output driver
    pub master_brightness: u8,
    pub mode: AnimationMode,
    pub animation_speed: u8,
    /// Mode-specific control (segment size, waveform kind)
    pub animation_ctrl: u8,
    /// 0 disables the strobe overlay
    pub strobe_rate: u8,
    /// 0 selects a hard split in dual solid mode, anything else a gradient
    pub blend_mode: u8,
    pub mirror: MirrorMode,
    pub direction: Direction,
    pub color_a: ColorRgbw,
    pub color_b: ColorRgbw,
}

impl AnimationState {
    /// Black solid frame at zero brightness
    pub const fn new() -> Self {
        Self {
            master_brightness: 0,
            mode: AnimationMode::Solid,
            animation_speed: 0,
            animation_ctrl: 0,
            strobe_rate: 0,
            blend_mode: 0,
            mirror: MirrorMode::None,
            direction: Direction::Forward,
            color_a: ColorRgbw::BLACK,
            color_b: ColorRgbw::BLACK,
        }
    }

    #[must_use]
    pub const fn with_brightness(mut self, brightness: u8) -> Self {
        self.master_brightness = brightness;
        self
    }

    #[must_use]
    pub const fn with_mode(mut self, mode: AnimationMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub const fn with_colors(mut self, color_a: ColorRgbw, color_b: ColorRgbw) -> Self {
        self.color_a = color_a;
        self.color_b = color_b;
        self
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new()
    }
}
