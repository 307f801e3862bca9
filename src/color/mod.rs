mod hsv;
mod rgbw;

use smart_leds::RGB8;
use smart_leds::hsv::Hsv as HSV;

pub use hsv::hsv_to_rgb;
pub use rgbw::ColorRgbw;

pub type Rgb = RGB8;
pub type Hsv = HSV;
