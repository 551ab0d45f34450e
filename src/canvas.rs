//! Canvas generators
//!
//! A canvas is a full-length color pattern for one string. The palette and
//! scattered-rainbow canvases are drawn once at startup from the injected
//! random source and never change afterwards; the rainbow cycle is the only
//! pattern recomputed every frame.

use rand::Rng;

use crate::color::{BLACK, Rgb, wheel};
use crate::config::PIXEL_COUNT;
use crate::hex_color;
use crate::mode::Mode;

/// Full-string color pattern
pub type Canvas = [Rgb; PIXEL_COUNT];

/// The idle/off pattern
pub const BLACK_CANVAS: Canvas = [BLACK; PIXEL_COUNT];

// Shades picked from the XKCD color survey names.
pub const RED: Rgb = hex_color!("#ff0000");
pub const BLUE: Rgb = hex_color!("#0343df");
pub const PURPLE: Rgb = hex_color!("#35063e");
pub const PINK: Rgb = hex_color!("#ff028d");

pub const ICE: Rgb = hex_color!("#d6fffa");
pub const AZURE: Rgb = hex_color!("#0d75f8");
pub const MIDNIGHT: Rgb = hex_color!("#020035");

/// Palette of the switch-1 pattern
pub const RED_BLUE_PURPLE_PINK: [Rgb; 4] = [RED, BLUE, PURPLE, PINK];

/// Palette of the switch-2 pattern
pub const FROZEN: [Rgb; 3] = [ICE, AZURE, MIDNIGHT];

/// Fill every pixel with an independently drawn palette entry
///
/// An empty palette leaves the pixels black.
pub fn fill_from_palette<R: Rng + ?Sized>(leds: &mut [Rgb], palette: &[Rgb], rng: &mut R) {
    if palette.is_empty() {
        leds.fill(BLACK);
        return;
    }
    for led in leds {
        *led = palette[rng.gen_range(0..palette.len())];
    }
}

/// Fill every pixel with a uniformly random hue from the wheel
pub fn fill_random_rainbow<R: Rng + ?Sized>(leds: &mut [Rgb], rng: &mut R) {
    for led in leds {
        *led = wheel(rng.gen_range(0..256));
    }
}

/// Fill the animated rainbow for the given tick
///
/// Pixel `i` gets `wheel((i + compression * tick) % 255)`, so the pattern
/// sweeps along the string as the tick advances.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn fill_rainbow_cycle(leds: &mut [Rgb], tick: u8, compression: u32) {
    let offset = compression.wrapping_mul(u32::from(tick));
    for (i, led) in leds.iter_mut().enumerate() {
        let position = (i as u32).wrapping_add(offset) % 255;
        *led = wheel(position as i32);
    }
}

/// Precomputed static canvases
#[derive(Debug, Clone)]
pub struct CanvasSet {
    rainbow: Canvas,
    red_blue_purple_pink: Canvas,
    frozen: Canvas,
}

impl CanvasSet {
    /// Draw all randomized canvases from the given random source
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut red_blue_purple_pink = BLACK_CANVAS;
        fill_from_palette(&mut red_blue_purple_pink, &RED_BLUE_PURPLE_PINK, rng);

        let mut frozen = BLACK_CANVAS;
        fill_from_palette(&mut frozen, &FROZEN, rng);

        let mut rainbow = BLACK_CANVAS;
        fill_random_rainbow(&mut rainbow, rng);

        Self {
            rainbow,
            red_blue_purple_pink,
            frozen,
        }
    }

    /// Cached canvas for a mode
    ///
    /// Returns `None` for the animated rainbow, which has no cached canvas.
    pub fn get(&self, mode: Mode) -> Option<&Canvas> {
        match mode {
            Mode::RainbowCycle => None,
            Mode::RainbowScatter => Some(&self.rainbow),
            Mode::RedBluePurplePink => Some(&self.red_blue_purple_pink),
            Mode::Frozen => Some(&self.frozen),
            Mode::Off => Some(&BLACK_CANVAS),
        }
    }
}
