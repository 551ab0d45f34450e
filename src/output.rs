//! Hardware output adapter
//!
//! Bridges [`OutputDriver`] to any `smart-leds` writer. Channel reordering
//! and brightness scaling both happen here, on the way out.

#[cfg(feature = "esp32-log")]
use esp_println::println;
use smart_leds::SmartLedsWrite;

use crate::OutputDriver;
use crate::color::{ChannelOrder, Rgb};
use crate::math8::scale_rgb;

/// [`OutputDriver`] over a `smart-leds` writer
pub struct SmartLedsOutput<W> {
    writer: W,
    order: ChannelOrder,
    brightness: u8,
}

impl<W> SmartLedsOutput<W> {
    /// Wrap a writer; brightness starts at full scale
    pub const fn new(writer: W, order: ChannelOrder) -> Self {
        Self {
            writer,
            order,
            brightness: 255,
        }
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> OutputDriver for SmartLedsOutput<W>
where
    W: SmartLedsWrite,
    W::Color: From<Rgb>,
{
    fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    fn write(&mut self, colors: &[Rgb]) {
        let order = self.order;
        let brightness = self.brightness;
        let pixels = colors
            .iter()
            .map(move |&color| scale_rgb(order.encode(color), brightness));
        if self.writer.write(pixels).is_err() {
            #[cfg(feature = "esp32-log")]
            println!(
                "[SmartLedsOutput.write] failed to push {} pixels",
                colors.len()
            );
        }
    }
}
