//! Hex color literals
//!
//! Parses `#rrggbb` / `rrggbb` strings into canonical RGB colors. The parser
//! is a `const fn`, so palettes built with [`hex_color!`](crate::hex_color)
//! are validated during compilation.

use core::fmt;

use crate::color::Rgb;

/// Error returned for a malformed hex color literal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexColorError {
    /// Not exactly six hex digits after the optional `#`
    InvalidFormat,
}

impl fmt::Display for HexColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat => f.write_str("expected six hex digits"),
        }
    }
}

impl core::error::Error for HexColorError {}

/// Convert a hex color code to a canonical RGB color
///
/// Accepts an optional single leading `#`. The result is always in R, G, B
/// order; device-specific reordering is done by
/// [`ChannelOrder::encode`](crate::color::ChannelOrder::encode) at the sink.
pub const fn hex_to_color(hex: &str) -> Result<Rgb, HexColorError> {
    let digits = match hex.as_bytes() {
        [b'#', rest @ ..] => rest,
        bytes => bytes,
    };
    if digits.len() != 6 {
        return Err(HexColorError::InvalidFormat);
    }

    let mut channels = [0u8; 3];
    let mut i = 0;
    while i < channels.len() {
        let (Some(high), Some(low)) = (hex_digit(digits[2 * i]), hex_digit(digits[2 * i + 1]))
        else {
            return Err(HexColorError::InvalidFormat);
        };
        channels[i] = (high << 4) | low;
        i += 1;
    }

    Ok(Rgb {
        r: channels[0],
        g: channels[1],
        b: channels[2],
    })
}

const fn hex_digit(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Build an [`Rgb`] constant from a hex literal
///
/// Fails const evaluation when the literal is malformed.
#[macro_export]
macro_rules! hex_color {
    ($hex:literal) => {
        match $crate::color::hex_to_color($hex) {
            Ok(color) => color,
            Err(_) => panic!(concat!("invalid hex color literal: ", $hex)),
        }
    };
}
