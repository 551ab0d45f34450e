//! Desktop preview for the sparkle composer
//!
//! Runs the real render loop against on-screen sinks. The four switches are
//! checkboxes; frames advance on the wall clock at the configured period.

use std::time::{Duration as StdDuration, Instant as StdInstant, SystemTime, UNIX_EPOCH};

use eframe::egui::{self};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use sparkle_composer::math8::scale_rgb;
use sparkle_composer::{LoopConfig, OutputDriver, RenderLoop, Rgb, SwitchVector};

/// Size of each LED rectangle in pixels
const LED_SIZE: f32 = 8.0;

/// Gap between LEDs
const LED_GAP: f32 = 2.0;

/// Idle timeout used by the "fast idle" toggle (5 seconds at 100 ms)
const FAST_IDLE_TICKS: u32 = 50;

const SWITCH_LABELS: [&str; 4] = ["1: pattern A", "2: pattern B", "3: sparkle", "4: bright"];

/// Sink that keeps the pixels as the hardware would show them
struct ScreenOutput {
    brightness: u8,
    pixels: Vec<Rgb>,
}

impl ScreenOutput {
    const fn new() -> Self {
        Self {
            brightness: 255,
            pixels: Vec::new(),
        }
    }
}

impl OutputDriver for ScreenOutput {
    fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    fn write(&mut self, colors: &[Rgb]) {
        self.pixels.clear();
        self.pixels
            .extend(colors.iter().map(|&color| scale_rgb(color, self.brightness)));
    }
}

type PreviewLoop = RenderLoop<SwitchVector, ScreenOutput, ScreenOutput, SmallRng>;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 360.0])
            .with_title("Sparkle Composer Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "sparkle-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    /// The render loop instance
    render: PreviewLoop,
    /// Switch states shown in the UI
    switches: SwitchVector,
    /// Wall-clock time of the last rendered frame
    last_frame: StdInstant,
    /// Whether frames advance
    playing: bool,
    /// Shorten the idle timeout so blackout can be observed
    fast_idle: bool,
    /// Show the strings without their brightness scaling
    ignore_brightness: bool,
    /// LED pixel size for display
    led_size: f32,
}

impl PreviewApp {
    fn new() -> Self {
        let switches = SwitchVector::OFF;
        Self {
            render: build_loop(switches, false),
            switches,
            last_frame: StdInstant::now(),
            playing: true,
            fast_idle: false,
            ignore_brightness: true,
            led_size: LED_SIZE,
        }
    }

    /// Rebuild the loop with a fresh seed, keeping the switches
    fn rebuild(&mut self) {
        self.render = build_loop(self.switches, self.fast_idle);
        self.last_frame = StdInstant::now();
    }

    /// Render as many frames as the wall clock allows
    fn update_frames(&mut self) {
        let period_ms = self.render.config().frame_period.as_millis();
        let period = StdDuration::from_millis(period_ms);
        if !self.playing {
            self.last_frame = StdInstant::now();
            return;
        }
        while self.last_frame.elapsed() >= period {
            *self.render.input_mut() = self.switches;
            self.render.step();
            self.last_frame += period;
        }
    }

    fn string_pixels(&self, index: usize) -> Vec<Rgb> {
        if self.ignore_brightness {
            self.render.frame().strings[index].to_vec()
        } else {
            self.render.strings()[index].pixels.clone()
        }
    }
}

fn build_loop(switches: SwitchVector, fast_idle: bool) -> PreviewLoop {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs() ^ u64::from(elapsed.subsec_nanos()))
        .unwrap_or_default();
    let config = if fast_idle {
        LoopConfig::DEFAULT.with_idle_timeout_ticks(FAST_IDLE_TICKS)
    } else {
        LoopConfig::DEFAULT
    };
    RenderLoop::new(
        switches,
        ScreenOutput::new(),
        [ScreenOutput::new(), ScreenOutput::new(), ScreenOutput::new()],
        SmallRng::seed_from_u64(seed),
        config,
    )
}

fn color32(pixel: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b)
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_frames();
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                // <SwitchPanel>
                ui.vertical(|ui| {
                    let mut states = self.switches.states();
                    for (state, label) in states.iter_mut().zip(SWITCH_LABELS) {
                        ui.checkbox(state, label);
                    }
                    self.switches = SwitchVector::new(states);
                });
                // </SwitchPanel>
                ui.add_space(16.0);
                // <PlaybackControls>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        if ui
                            .button(if self.playing { "⏸ Pause" } else { "▶ Play" })
                            .clicked()
                        {
                            self.playing = !self.playing;
                        }
                        if ui.button("🎲 Reseed").clicked() {
                            self.rebuild();
                        }
                    });

                    ui.add_space(4.0);

                    if ui
                        .checkbox(&mut self.fast_idle, "Fast idle timeout (5 s)")
                        .changed()
                    {
                        self.rebuild();
                    }
                    ui.checkbox(&mut self.ignore_brightness, "Ignore brightness");

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("Size: ");
                        ui.add(egui::Slider::new(&mut self.led_size, 4.0..=16.0));
                    });
                });
                // </PlaybackControls>
                ui.add_space(16.0);
                // <StatusReadout>
                ui.vertical(|ui| {
                    let state = self.render.state();
                    ui.label(format!("Mode: {}", state.mode().as_str()));
                    ui.label(format!("Brightness: {:?}", state.brightness()));
                    ui.label(format!(
                        "Idle: {} / {} frames{}",
                        state.idle_ticks(),
                        self.render.config().idle_timeout_ticks,
                        if state.is_blackout() { " (blackout)" } else { "" }
                    ));
                    ui.label(format!("Tick: {}", state.tick()));
                });
                // </StatusReadout>
            });

            ui.add_space(16.0);

            // === LED Display ===
            let led_pitch = self.led_size + LED_GAP;

            ui.horizontal(|ui| {
                ui.label("Indicator:");
                let (response, painter) = ui.allocate_painter(
                    egui::vec2(self.led_size * 2.0, self.led_size * 2.0),
                    egui::Sense::hover(),
                );
                let indicator = self
                    .render
                    .indicator()
                    .pixels
                    .first()
                    .copied()
                    .unwrap_or_default();
                painter.circle_filled(response.rect.center(), self.led_size, color32(indicator));
            });

            ui.add_space(8.0);

            for index in 0..self.render.strings().len() {
                let pixels = self.string_pixels(index);
                #[allow(clippy::cast_precision_loss)]
                let width = pixels.len() as f32 * led_pitch;
                let (response, painter) = ui.allocate_painter(
                    egui::vec2(width, led_pitch),
                    egui::Sense::hover(),
                );
                let origin = response.rect.min;

                #[allow(clippy::cast_precision_loss)]
                for (i, pixel) in pixels.iter().enumerate() {
                    let x = origin.x + i as f32 * led_pitch;
                    let rect = egui::Rect::from_min_size(
                        egui::pos2(x, origin.y),
                        egui::vec2(self.led_size, self.led_size),
                    );
                    painter.rect_filled(rect, 2.0, color32(*pixel));
                }
                ui.add_space(4.0);
            }
        });
    }
}
