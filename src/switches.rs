//! Switch bank input
//!
//! The four switches are polled once per frame. Switches 1-3 pick the
//! pattern, switch 3 also enables sparkles, switch 4 picks the brightness.

use embedded_hal::digital::InputPin;

use crate::SwitchSource;
use crate::config::SWITCH_COUNT;

/// Snapshot of all switch states for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SwitchVector([bool; SWITCH_COUNT]);

impl SwitchVector {
    /// All switches off (the pulled-down idle state)
    pub const OFF: Self = Self([false; SWITCH_COUNT]);

    pub const fn new(states: [bool; SWITCH_COUNT]) -> Self {
        Self(states)
    }

    /// Build from a bit mask, bit 0 being switch 1
    pub const fn from_bits(bits: u8) -> Self {
        Self([
            bits & 0b0001 != 0,
            bits & 0b0010 != 0,
            bits & 0b0100 != 0,
            bits & 0b1000 != 0,
        ])
    }

    pub const fn states(self) -> [bool; SWITCH_COUNT] {
        self.0
    }

    /// Switch 1
    pub const fn one(self) -> bool {
        self.0[0]
    }

    /// Switch 2
    pub const fn two(self) -> bool {
        self.0[1]
    }

    /// Switch 3
    pub const fn three(self) -> bool {
        self.0[2]
    }

    /// Switch 4
    pub const fn four(self) -> bool {
        self.0[3]
    }

    /// Copy with one switch (0-based) flipped
    #[must_use]
    pub const fn toggled(mut self, index: usize) -> Self {
        if index < SWITCH_COUNT {
            self.0[index] = !self.0[index];
        }
        self
    }
}

/// A fixed switch vector is its own (constant) input source
impl SwitchSource for SwitchVector {
    fn sample(&mut self) -> SwitchVector {
        *self
    }
}

/// Switch bank wired to four GPIO inputs with pull-downs
pub struct PinSwitches<P> {
    pins: [P; SWITCH_COUNT],
}

impl<P: InputPin> PinSwitches<P> {
    /// Pins in switch order (switch 1 first)
    pub const fn new(pins: [P; SWITCH_COUNT]) -> Self {
        Self { pins }
    }

    pub fn into_inner(self) -> [P; SWITCH_COUNT] {
        self.pins
    }
}

impl<P: InputPin> SwitchSource for PinSwitches<P> {
    /// A pin that fails to read counts as low, matching its pull-down.
    fn sample(&mut self) -> SwitchVector {
        let mut states = [false; SWITCH_COUNT];
        for (state, pin) in states.iter_mut().zip(self.pins.iter_mut()) {
            *state = pin.is_high().unwrap_or(false);
        }
        SwitchVector::new(states)
    }
}
