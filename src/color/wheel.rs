use crate::color::{BLACK, Rgb};

/// Length of one linear segment of the wheel
const SEGMENT: u8 = 85;

/// Map a position on the hue wheel to a color
///
/// Positions 0-255 sweep through three segments of 85 steps; in each one two
/// channels ramp in opposite directions while the third stays at zero.
/// Anything outside 0-255 is black.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn wheel(position: i32) -> Rgb {
    let pos = match position {
        0..=255 => position as u8,
        _ => return BLACK,
    };

    if pos < SEGMENT {
        Rgb {
            r: pos * 3,
            g: 255 - pos * 3,
            b: 0,
        }
    } else if pos < 2 * SEGMENT {
        let pos = pos - SEGMENT;
        Rgb {
            r: 255 - pos * 3,
            g: 0,
            b: pos * 3,
        }
    } else {
        let pos = pos - 2 * SEGMENT;
        Rgb {
            r: 0,
            g: pos * 3,
            b: 255 - pos * 3,
        }
    }
}
