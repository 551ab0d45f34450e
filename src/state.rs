//! Per-frame render state
//!
//! Everything the loop derives from the switches lives here: the idle
//! counter, the frame decision and the tick used by the animated rainbow.

use crate::color::Rgb;
use crate::mode::{Brightness, Mode, indicator_color, sparkle_enabled};
use crate::switches::SwitchVector;

/// Counts frames since the switch vector last changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IdleTracker {
    previous: SwitchVector,
    idle_ticks: u32,
}

impl IdleTracker {
    /// Start from the pulled-down state with a zero counter
    pub const fn new() -> Self {
        Self {
            previous: SwitchVector::OFF,
            idle_ticks: 0,
        }
    }

    /// Record this frame's switches
    ///
    /// Resets the counter when they differ from the previous frame and
    /// increments it otherwise. Returns the updated counter.
    pub fn observe(&mut self, switches: SwitchVector) -> u32 {
        if switches == self.previous {
            self.idle_ticks = self.idle_ticks.saturating_add(1);
        } else {
            self.idle_ticks = 0;
        }
        self.previous = switches;
        self.idle_ticks
    }

    pub const fn idle_ticks(&self) -> u32 {
        self.idle_ticks
    }

    /// The counter has gone past the timeout
    pub const fn is_expired(&self, timeout_ticks: u32) -> bool {
        self.idle_ticks > timeout_ticks
    }
}

/// Everything decided from one switch sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameDecision {
    pub mode: Mode,
    pub brightness: Brightness,
    pub indicator: Rgb,
    /// Idle timeout expired: strings forced black
    pub blackout: bool,
    /// Sparkle overlay drawn on the strings
    pub sparkle: bool,
}

impl FrameDecision {
    pub const fn new(switches: SwitchVector, idle_expired: bool) -> Self {
        Self {
            mode: Mode::select(switches),
            brightness: Brightness::select(switches),
            indicator: indicator_color(switches),
            blackout: idle_expired,
            sparkle: sparkle_enabled(switches, idle_expired),
        }
    }
}

/// State carried by the render loop from frame to frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderState {
    brightness: Brightness,
    mode: Mode,
    blackout: bool,
    idle: IdleTracker,
    tick: u8,
}

impl RenderState {
    pub const fn new() -> Self {
        Self {
            brightness: Brightness::Low,
            mode: Mode::Off,
            blackout: false,
            idle: IdleTracker::new(),
            tick: 0,
        }
    }

    /// Feed this frame's switches and decide what to draw
    pub fn update(&mut self, switches: SwitchVector, idle_timeout_ticks: u32) -> FrameDecision {
        self.idle.observe(switches);
        let decision = FrameDecision::new(switches, self.idle.is_expired(idle_timeout_ticks));
        self.brightness = decision.brightness;
        self.mode = decision.mode;
        self.blackout = decision.blackout;
        decision
    }

    /// Move to the next tick of the 0-255 cycle
    pub fn advance_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub const fn brightness(&self) -> Brightness {
        self.brightness
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    pub const fn is_blackout(&self) -> bool {
        self.blackout
    }

    pub const fn idle_ticks(&self) -> u32 {
        self.idle.idle_ticks()
    }

    pub const fn tick(&self) -> u8 {
        self.tick
    }
}
