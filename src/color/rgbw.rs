use crate::color::{Hsv, Rgb, hsv_to_rgb};
use crate::math8::{lerp8, scale8};

/// Pixel color with an independent white channel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ColorRgbw {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub w: u8,
}

impl ColorRgbw {
    pub const BLACK: Self = Self::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, w: u8) -> Self {
        Self { r, g, b, w }
    }

    /// Create a color from HSV, passing `white` through unconverted
    pub fn from_hsv(hsv: Hsv, white: u8) -> Self {
        let Rgb { r, g, b } = hsv_to_rgb(hsv);
        Self { r, g, b, w: white }
    }

    /// Scale every channel by `factor` (0-255 = 0.0-1.0)
    #[must_use]
    pub const fn scale(self, factor: u8) -> Self {
        Self {
            r: scale8(self.r, factor),
            g: scale8(self.g, factor),
            b: scale8(self.b, factor),
            w: scale8(self.w, factor),
        }
    }

    /// Fade every channel toward black by `amount`/255
    #[must_use]
    pub const fn fade(self, amount: u8) -> Self {
        self.scale(255 - amount)
    }

    /// Interpolate toward `other` by `frac`
    #[must_use]
    pub const fn lerp(self, other: Self, frac: u8) -> Self {
        Self {
            r: lerp8(self.r, other.r, frac),
            g: lerp8(self.g, other.g, frac),
            b: lerp8(self.b, other.b, frac),
            w: lerp8(self.w, other.w, frac),
        }
    }

    /// Drop the white channel
    pub const fn to_rgb(self) -> Rgb {
        Rgb {
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }
}

impl From<ColorRgbw> for Rgb {
    fn from(color: ColorRgbw) -> Self {
        color.to_rgb()
    }
}

impl From<Rgb> for ColorRgbw {
    fn from(color: Rgb) -> Self {
        Self::new(color.r, color.g, color.b, 0)
    }
}
