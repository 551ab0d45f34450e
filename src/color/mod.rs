mod hex;
mod order;
mod wheel;

use smart_leds::RGB8;

pub use hex::{HexColorError, hex_to_color};
pub use order::ChannelOrder;
pub use wheel::wheel;

pub type Rgb = RGB8;

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
pub const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};
