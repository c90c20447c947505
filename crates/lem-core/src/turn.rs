//! Simulation turn counter.
//!
//! Turn 0 is the first simulation step.  Ant start-up delays are expressed in
//! turns: an ant with delay `d` may leave the start room on turn `d` or later.

use std::fmt;

/// An absolute simulation turn.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Turn(pub u32);

impl Turn {
    pub const ZERO: Turn = Turn(0);

    /// The turn after `self`.
    #[inline]
    pub fn next(self) -> Turn {
        Turn(self.0 + 1)
    }

    /// `true` once a delay of `delay` turns has elapsed at this turn.
    #[inline]
    pub fn has_elapsed(self, delay: u32) -> bool {
        delay <= self.0
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
