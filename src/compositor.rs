//! Frame compositing
//!
//! Turns a [`FrameDecision`] into pixel buffers: pick the base canvas, force
//! it black on idle blackout, copy it to every string and stamp the sparkles
//! on top. The cached canvases are never written to.

use crate::canvas::{BLACK_CANVAS, Canvas, CanvasSet, fill_rainbow_cycle};
use crate::color::{BLACK, Rgb, WHITE};
use crate::config::STRING_COUNT;
use crate::mode::{Brightness, Mode};
use crate::sparkle::SparkleLayer;
use crate::state::FrameDecision;

/// Pixel data for one frame, in canonical channel order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub strings: [Canvas; STRING_COUNT],
    pub indicator: Rgb,
    pub brightness: Brightness,
    pub mode: Mode,
}

impl Frame {
    pub const fn new() -> Self {
        Self {
            strings: [BLACK_CANVAS; STRING_COUNT],
            indicator: BLACK,
            brightness: Brightness::Low,
            mode: Mode::Off,
        }
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

/// Inputs the compositor reads besides the decision
pub struct Layers<'a> {
    pub canvases: &'a CanvasSet,
    pub sparkles: &'a SparkleLayer,
    pub tick: u8,
    pub rainbow_compression: u32,
}

/// Builds frames; owns the scratch buffer of the animated rainbow
#[derive(Debug, Clone)]
pub struct Compositor {
    animated: Canvas,
}

impl Default for Compositor {
    fn default() -> Self {
        Self::new()
    }
}

impl Compositor {
    pub const fn new() -> Self {
        Self {
            animated: BLACK_CANVAS,
        }
    }

    /// Compose the whole frame
    pub fn compose(&mut self, frame: &mut Frame, decision: &FrameDecision, layers: &Layers<'_>) {
        frame.indicator = decision.indicator;
        frame.brightness = decision.brightness;
        frame.mode = decision.mode;

        let base = self.base_canvas(decision, layers);
        for (index, string) in frame.strings.iter_mut().enumerate() {
            string.copy_from_slice(base);
            if decision.sparkle {
                for pixel in layers.sparkles.for_string(index) {
                    string[pixel] = WHITE;
                }
            }
        }
    }

    fn base_canvas<'a>(&'a mut self, decision: &FrameDecision, layers: &Layers<'a>) -> &'a Canvas {
        if decision.blackout {
            return &BLACK_CANVAS;
        }
        if let Some(canvas) = layers.canvases.get(decision.mode) {
            return canvas;
        }
        fill_rainbow_cycle(&mut self.animated, layers.tick, layers.rainbow_compression);
        &self.animated
    }
}
