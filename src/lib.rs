#![no_std]

pub mod canvas;
pub mod color;
pub mod compositor;
pub mod config;
pub mod math8;
pub mod mode;
pub mod output;
pub mod render_loop;
pub mod sparkle;
pub mod state;
pub mod switches;

pub use canvas::{Canvas, CanvasSet};
pub use color::{ChannelOrder, HexColorError, Rgb, hex_to_color, wheel};
pub use compositor::{Compositor, Frame};
pub use config::LoopConfig;
pub use mode::{Brightness, Mode};
pub use output::SmartLedsOutput;
pub use render_loop::RenderLoop;
pub use sparkle::SparkleLayer;
pub use state::{FrameDecision, IdleTracker, RenderState};
pub use switches::{PinSwitches, SwitchVector};

pub use embassy_time::Duration;

/// Abstract LED output device
///
/// Implement this trait for each physical device (the indicator and every
/// string). Colors arrive in canonical R, G, B order.
pub trait OutputDriver {
    /// Set the brightness scale (0-255 = 0.0-1.0) used by later writes
    fn set_brightness(&mut self, brightness: u8);

    /// Replace the device buffer and push it to the hardware
    fn write(&mut self, colors: &[Rgb]);
}

/// Source of switch states, polled once per frame
pub trait SwitchSource {
    fn sample(&mut self) -> SwitchVector;
}
