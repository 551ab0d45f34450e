//! Compile-time configuration of the installation.
//!
//! The hardware layout is fixed: one status indicator and three strings of
//! equal length, driven by a bank of four switches.

use embassy_time::Duration;

/// Number of pixels on every string
pub const PIXEL_COUNT: usize = 100;

/// Number of pixel strings
pub const STRING_COUNT: usize = 3;

/// Number of sparkles drawn on each string
pub const SPARKLE_COUNT: usize = 10;

/// Total length of the sparkle layer (one sub-range per string)
pub const SPARKLE_LAYER_LEN: usize = STRING_COUNT * SPARKLE_COUNT;

/// Number of physical switches
pub const SWITCH_COUNT: usize = 4;

/// Fixed sleep between frames
pub const FRAME_PERIOD: Duration = Duration::from_millis(100);

/// Period without switch changes after which the strings go dark
pub const IDLE_TIMEOUT: Duration = Duration::from_secs(30 * 60);

/// Idle timeout expressed in frames
pub const IDLE_TIMEOUT_TICKS: u32 = ticks_in(IDLE_TIMEOUT, FRAME_PERIOD);

/// Brightness fraction selected when switch 4 is on
pub const HIGH_BRIGHTNESS: f32 = 1.0;

/// Brightness fraction selected when switch 4 is off
pub const LOW_BRIGHTNESS: f32 = 0.03;

/// Hue step per tick of the animated rainbow
pub const RAINBOW_COMPRESSION: u32 = 3;

/// Runtime view of the constants above
///
/// The render loop only reads its timing and levels from here, so tests and
/// the preview can shorten the idle timeout without touching the constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopConfig {
    /// Sleep between frames
    pub frame_period: Duration,
    /// Number of unchanged frames tolerated before blackout
    pub idle_timeout_ticks: u32,
    /// Brightness fraction (0.0-1.0) for the high level
    pub high_brightness: f32,
    /// Brightness fraction (0.0-1.0) for the low level
    pub low_brightness: f32,
    /// Hue step per tick of the animated rainbow
    pub rainbow_compression: u32,
}

impl LoopConfig {
    pub const DEFAULT: Self = Self {
        frame_period: FRAME_PERIOD,
        idle_timeout_ticks: IDLE_TIMEOUT_TICKS,
        high_brightness: HIGH_BRIGHTNESS,
        low_brightness: LOW_BRIGHTNESS,
        rainbow_compression: RAINBOW_COMPRESSION,
    };

    /// Same configuration with a different idle timeout
    #[must_use]
    pub const fn with_idle_timeout_ticks(mut self, ticks: u32) -> Self {
        self.idle_timeout_ticks = ticks;
        self
    }
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[allow(clippy::cast_possible_truncation)]
const fn ticks_in(timeout: Duration, period: Duration) -> u32 {
    (timeout.as_millis() / period.as_millis()) as u32
}
