//! Fixed-period render loop
//!
//! Sequences one frame as: sample switches, update state, composite,
//! present, sleep, then advance the sparkle layer and the tick. The sleep is
//! a fixed period that does not account for the time spent rendering.
//!
//! # Usage
//!
//! ```ignore
//! let rng = SmallRng::seed_from_u64(hardware_seed());
//! let render = RenderLoop::new(switches, indicator, strings, rng, LoopConfig::DEFAULT);
//! render.run().await
//! ```

use embassy_time::Timer;
use embedded_hal::delay::DelayNs;
#[cfg(feature = "esp32-log")]
use esp_println::println;
use rand::Rng;

use crate::canvas::CanvasSet;
use crate::compositor::{Compositor, Frame, Layers};
use crate::config::{LoopConfig, STRING_COUNT};
use crate::math8::scale_from_fraction;
use crate::sparkle::SparkleLayer;
use crate::state::{FrameDecision, RenderState};
use crate::{OutputDriver, SwitchSource};

/// Render loop driver
///
/// Owns the inputs, the output sinks, the random source and all render
/// state. Nothing is shared outside of it.
pub struct RenderLoop<I, L, S, R> {
    // External dependencies and configuration
    input: I,
    indicator: L,
    strings: [S; STRING_COUNT],
    rng: R,
    config: LoopConfig,

    // Generated once at startup
    canvases: CanvasSet,

    // Internal state
    sparkles: SparkleLayer,
    state: RenderState,
    compositor: Compositor,
    frame: Frame,
}

impl<I, L, S, R> RenderLoop<I, L, S, R>
where
    I: SwitchSource,
    L: OutputDriver,
    S: OutputDriver,
    R: Rng,
{
    /// Create the loop, drawing the canvases and sparkles from `rng`
    pub fn new(input: I, indicator: L, strings: [S; STRING_COUNT], mut rng: R, config: LoopConfig) -> Self {
        let canvases = CanvasSet::generate(&mut rng);
        let sparkles = SparkleLayer::new(&mut rng);
        Self {
            input,
            indicator,
            strings,
            rng,
            config,
            canvases,
            sparkles,
            state: RenderState::new(),
            compositor: Compositor::new(),
            frame: Frame::new(),
        }
    }

    /// Sample, decide, composite and present one frame
    pub fn render_frame(&mut self) -> &Frame {
        let switches = self.input.sample();
        let previous = self.state;
        let decision = self.state.update(switches, self.config.idle_timeout_ticks);
        log_transition(&previous, &decision);

        let layers = Layers {
            canvases: &self.canvases,
            sparkles: &self.sparkles,
            tick: self.state.tick(),
            rainbow_compression: self.config.rainbow_compression,
        };
        self.compositor.compose(&mut self.frame, &decision, &layers);
        self.present();

        &self.frame
    }

    /// Post-sleep housekeeping: drift the sparkles and advance the tick
    pub fn advance(&mut self) {
        self.sparkles.advance(&mut self.rng);
        self.state.advance_tick();
    }

    /// One whole frame without the sleep
    pub fn step(&mut self) -> &Frame {
        self.render_frame();
        self.advance();
        &self.frame
    }

    /// Run forever, sleeping on the embassy timer between frames
    pub async fn run(mut self) -> ! {
        loop {
            self.render_frame();
            Timer::after(self.config.frame_period).await;
            self.advance();
        }
    }

    /// Run forever, busy-waiting on a blocking delay between frames
    #[allow(clippy::cast_possible_truncation)]
    pub fn run_blocking<D: DelayNs>(mut self, mut delay: D) -> ! {
        let period_ms = self.config.frame_period.as_millis() as u32;
        loop {
            self.render_frame();
            delay.delay_ms(period_ms);
            self.advance();
        }
    }

    /// Push the composed frame to every sink
    ///
    /// The indicator keeps its own brightness; only the strings follow
    /// switch 4.
    fn present(&mut self) {
        let level = scale_from_fraction(self.frame.brightness.fraction(&self.config));

        self.indicator.write(&[self.frame.indicator]);
        for (sink, pixels) in self.strings.iter_mut().zip(self.frame.strings.iter()) {
            sink.set_brightness(level);
            sink.write(pixels);
        }
    }

    /// Last composed frame
    pub const fn frame(&self) -> &Frame {
        &self.frame
    }

    pub const fn state(&self) -> &RenderState {
        &self.state
    }

    pub const fn sparkles(&self) -> &SparkleLayer {
        &self.sparkles
    }

    pub const fn canvases(&self) -> &CanvasSet {
        &self.canvases
    }

    pub const fn config(&self) -> &LoopConfig {
        &self.config
    }

    pub const fn input(&self) -> &I {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub const fn indicator(&self) -> &L {
        &self.indicator
    }

    pub const fn strings(&self) -> &[S; STRING_COUNT] {
        &self.strings
    }
}

#[cfg(feature = "esp32-log")]
fn log_transition(previous: &RenderState, decision: &FrameDecision) {
    if previous.mode() != decision.mode {
        println!(
            "[RenderLoop.render_frame] mode {} -> {}",
            previous.mode().as_str(),
            decision.mode.as_str()
        );
    }
    if !previous.is_blackout() && decision.blackout {
        println!(
            "[RenderLoop.render_frame] idle for {} frames, blacking out",
            previous.idle_ticks()
        );
    } else if previous.is_blackout() && !decision.blackout {
        println!("[RenderLoop.render_frame] switches changed, leaving blackout");
    }
}

#[cfg(not(feature = "esp32-log"))]
fn log_transition(_previous: &RenderState, _decision: &FrameDecision) {}
