use crate::color::Rgb;

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Scale every channel of a color by the same factor
#[inline]
pub const fn scale_rgb(color: Rgb, scale: u8) -> Rgb {
    Rgb {
        r: scale8(color.r, scale),
        g: scale8(color.g, scale),
        b: scale8(color.b, scale),
    }
}

/// Convert a brightness fraction (0.0-1.0) to an 8-bit scale factor
///
/// Out-of-range fractions are clamped; NaN maps to zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn scale_from_fraction(fraction: f32) -> u8 {
    if fraction.is_nan() {
        return 0;
    }
    libm::roundf(fraction.clamp(0.0, 1.0) * 255.0) as u8
}
