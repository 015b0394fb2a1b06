//! HSV colour band thresholds

use serde::{Deserialize, Serialize};
use std::fmt;

/// Inclusive `[low, high]` range over one 8-bit channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelRange {
    pub low: u8,
    pub high: u8,
}

impl ChannelRange {
    pub const FULL: ChannelRange = ChannelRange { low: 0, high: 255 };

    pub const fn new(low: u8, high: u8) -> Self {
        Self { low, high }
    }

    /// Plain inclusive test. An inverted range (`low > high`) is empty.
    pub fn contains(&self, value: u8) -> bool {
        self.low <= value && value <= self.high
    }

    /// Inclusive test where an inverted range spans the 255 -> 0 wrap.
    pub fn contains_wrapping(&self, value: u8) -> bool {
        if self.low <= self.high {
            self.contains(value)
        } else {
            value >= self.low || value <= self.high
        }
    }

    pub fn is_inverted(&self) -> bool {
        self.low > self.high
    }
}

impl Default for ChannelRange {
    fn default() -> Self {
        Self::FULL
    }
}

/// Hue/saturation/value thresholds used to segment a frame.
///
/// Every channel lives in the 0-255 domain (hue is rescaled from degrees).
/// A hue range whose `low` exceeds its `high` wraps around the red end of the
/// hue circle, so `240..=10` selects reds. Saturation and value never wrap: an
/// inverted range on either of them selects nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ColorBand {
    pub hue: ChannelRange,
    pub saturation: ChannelRange,
    pub value: ChannelRange,
}

impl ColorBand {
    /// Create from lower and upper `[h, s, v]` limits
    pub fn new(lower: [u8; 3], upper: [u8; 3]) -> Self {
        Self {
            hue: ChannelRange::new(lower[0], upper[0]),
            saturation: ChannelRange::new(lower[1], upper[1]),
            value: ChannelRange::new(lower[2], upper[2]),
        }
    }

    pub fn lower(&self) -> [u8; 3] {
        [self.hue.low, self.saturation.low, self.value.low]
    }

    pub fn upper(&self) -> [u8; 3] {
        [self.hue.high, self.saturation.high, self.value.high]
    }

    /// Check whether an HSV triple falls inside the band
    #[inline]
    pub fn contains(&self, hsv: [u8; 3]) -> bool {
        self.hue.contains_wrapping(hsv[0])
            && self.saturation.contains(hsv[1])
            && self.value.contains(hsv[2])
    }

    /// True when the band can never match a pixel
    pub fn is_empty(&self) -> bool {
        self.saturation.is_inverted() || self.value.is_inverted()
    }
}

impl fmt::Display for ColorBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lo = self.lower();
        let hi = self.upper();
        write!(
            f,
            "[{}, {}, {}] to [{}, {}, {}]",
            lo[0], lo[1], lo[2], hi[0], hi[1], hi[2]
        )
    }
}
