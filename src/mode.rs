//! Rendering modes and brightness levels
//!
//! Both are pure functions of the sampled switches. Mode precedence is the
//! order of the arms in [`Mode::select`].

use crate::color::Rgb;
use crate::config::LoopConfig;
use crate::switches::SwitchVector;

const MODE_NAME_OFF: &str = "off";
const MODE_NAME_RED_BLUE_PURPLE_PINK: &str = "red_blue_purple_pink";
const MODE_NAME_FROZEN: &str = "frozen";
const MODE_NAME_RAINBOW_SCATTER: &str = "rainbow_scatter";
const MODE_NAME_RAINBOW_CYCLE: &str = "rainbow_cycle";

const MODE_ID_OFF: u8 = 0;
const MODE_ID_RED_BLUE_PURPLE_PINK: u8 = 1;
const MODE_ID_FROZEN: u8 = 2;
const MODE_ID_RAINBOW_SCATTER: u8 = 3;
const MODE_ID_RAINBOW_CYCLE: u8 = 4;

/// Active rendering pattern
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Mode {
    /// Black canvas
    #[default]
    Off = MODE_ID_OFF,
    /// Random red/blue/purple/pink canvas
    RedBluePurplePink = MODE_ID_RED_BLUE_PURPLE_PINK,
    /// Random ice/azure/midnight canvas
    Frozen = MODE_ID_FROZEN,
    /// Static canvas of random hues
    RainbowScatter = MODE_ID_RAINBOW_SCATTER,
    /// Rainbow sweeping along the strings every tick
    RainbowCycle = MODE_ID_RAINBOW_CYCLE,
}

impl Mode {
    /// Pick the mode from switches 1-3, first matching arm wins
    pub const fn select(switches: SwitchVector) -> Self {
        match (switches.one(), switches.two(), switches.three()) {
            (true, true, true) => Self::RainbowCycle,
            (true, true, false) => Self::RainbowScatter,
            (true, false, _) => Self::RedBluePurplePink,
            (false, true, _) => Self::Frozen,
            (false, false, _) => Self::Off,
        }
    }

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MODE_ID_OFF => Self::Off,
            MODE_ID_RED_BLUE_PURPLE_PINK => Self::RedBluePurplePink,
            MODE_ID_FROZEN => Self::Frozen,
            MODE_ID_RAINBOW_SCATTER => Self::RainbowScatter,
            MODE_ID_RAINBOW_CYCLE => Self::RainbowCycle,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => MODE_NAME_OFF,
            Self::RedBluePurplePink => MODE_NAME_RED_BLUE_PURPLE_PINK,
            Self::Frozen => MODE_NAME_FROZEN,
            Self::RainbowScatter => MODE_NAME_RAINBOW_SCATTER,
            Self::RainbowCycle => MODE_NAME_RAINBOW_CYCLE,
        }
    }

    /// Whether the pattern changes from tick to tick
    pub const fn is_animated(self) -> bool {
        matches!(self, Self::RainbowCycle)
    }
}

/// One of the two fixed string brightness levels
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Brightness {
    #[default]
    Low,
    High,
}

impl Brightness {
    /// Switch 4 on selects the high level
    pub const fn select(switches: SwitchVector) -> Self {
        if switches.four() { Self::High } else { Self::Low }
    }

    /// Brightness fraction (0.0-1.0) for this level
    pub const fn fraction(self, config: &LoopConfig) -> f32 {
        match self {
            Self::Low => config.low_brightness,
            Self::High => config.high_brightness,
        }
    }
}

/// Color of the status indicator
///
/// Red follows switch 1 and green follows switch 2. Blue lights only when
/// both are off, so the indicator never goes fully dark while powered.
pub const fn indicator_color(switches: SwitchVector) -> Rgb {
    Rgb {
        r: channel(switches.one()),
        g: channel(switches.two()),
        b: channel(!switches.one() && !switches.two()),
    }
}

const fn channel(lit: bool) -> u8 {
    if lit { 255 } else { 0 }
}

/// Whether the sparkle overlay is drawn this frame
///
/// Requires switch 3 and exactly one of switches 1 and 2, and is suppressed
/// once the idle timeout has expired.
pub const fn sparkle_enabled(switches: SwitchVector, idle_expired: bool) -> bool {
    switches.three() && (switches.one() != switches.two()) && !idle_expired
}
