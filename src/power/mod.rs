//! Bipolar power bar: maps a signed power reading onto regen/consume fills.
//!
//! The bar is split at a zero marker whose position depends on the
//! asymmetric bounds. Negative readings (regeneration) fill leftwards from the
//! marker, positive readings (consumption) fill rightwards. Fills saturate at
//! their zone width; the label always shows the raw reading.
//!
//! # Examples
//!
//! ```
//! use ebike_dash::power::{PowerRange, PowerReading, SignStyle, compute_fill};
//!
//! let range = PowerRange::new(-2000, 6000, 200)
//!     .unwrap()
//!     .with_sign_style(SignStyle::Plus);
//! assert_eq!(range.zero_offset(), 50);
//!
//! let fill = compute_fill(&range, PowerReading::new(9000));
//! assert_eq!(fill.right_fill_width, 150);
//! assert_eq!(fill.display_text.to_string(), "+9.000 kW");
//! ```

pub mod label;

use thiserror::Error;

pub use label::{POWER_UNIT, PowerLabel, SignStyle};

/// Rejected power bar configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("invalid power range configuration: {field} {reason}")]
    InvalidConfiguration {
        /// Offending parameter name.
        field: &'static str,
        /// Constraint that was violated.
        reason: &'static str,
    },
}

/// Validated bar bounds and geometry.
///
/// Invariant: `min_watts <= 0 < max_watts` and `bar_width > 0`. The zero
/// marker position is derived once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerRange {
    min_watts: i32,
    max_watts: i32,
    bar_width: i32,
    zero_offset: i32,
    sign_style: SignStyle,
}

impl PowerRange {
    /// Builds a range, rejecting bounds that cannot drive the bar.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidConfiguration`] if `min_watts > 0`,
    /// `max_watts <= 0` or `bar_width <= 0`.
    pub fn new(min_watts: i32, max_watts: i32, bar_width: i32) -> Result<Self, RangeError> {
        if min_watts > 0 {
            return Err(RangeError::InvalidConfiguration {
                field: "min_watts",
                reason: "must be <= 0",
            });
        }
        if max_watts <= 0 {
            return Err(RangeError::InvalidConfiguration {
                field: "max_watts",
                reason: "must be > 0",
            });
        }
        if bar_width <= 0 {
            return Err(RangeError::InvalidConfiguration {
                field: "bar_width",
                reason: "must be > 0",
            });
        }

        let span = i64::from(max_watts) - i64::from(min_watts);
        let zero_offset = i64::from(bar_width) * -i64::from(min_watts) / span;

        Ok(Self {
            min_watts,
            max_watts,
            bar_width,
            // zero_offset <= bar_width because -min <= span
            zero_offset: zero_offset as i32,
            sign_style: SignStyle::default(),
        })
    }

    /// Returns a copy using the given label sign convention.
    pub fn with_sign_style(mut self, sign_style: SignStyle) -> Self {
        self.sign_style = sign_style;
        self
    }

    pub fn min_watts(&self) -> i32 {
        self.min_watts
    }

    pub fn max_watts(&self) -> i32 {
        self.max_watts
    }

    pub fn bar_width(&self) -> i32 {
        self.bar_width
    }

    pub fn sign_style(&self) -> SignStyle {
        self.sign_style
    }

    /// Position of the zero marker from the left edge of the bar.
    pub fn zero_offset(&self) -> i32 {
        self.zero_offset
    }

    /// Width of the regeneration zone (left of the marker).
    pub fn regen_zone(&self) -> i32 {
        self.zero_offset
    }

    /// Width of the consumption zone (right of the marker).
    pub fn consume_zone(&self) -> i32 {
        self.bar_width - self.zero_offset
    }
}

/// A single instantaneous power sample in watts.
///
/// Positive is consumption, negative is regeneration. Not bounded by any range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PowerReading {
    pub value_watts: i32,
}

impl PowerReading {
    pub fn new(value_watts: i32) -> Self {
        Self { value_watts }
    }
}

impl From<i32> for PowerReading {
    fn from(value_watts: i32) -> Self {
        Self::new(value_watts)
    }
}

/// Output of [`compute_fill`] for one reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillResult {
    /// Regen segment width, in `[0, zero_offset]`.
    pub left_fill_width: i32,
    /// Consumption segment width, in `[0, bar_width - zero_offset]`.
    pub right_fill_width: i32,
    /// Unclamped label for the reading.
    pub display_text: PowerLabel,
}

impl FillResult {
    /// X position where the regen segment starts so it ends at the zero marker.
    pub fn left_fill_origin(&self, range: &PowerRange) -> i32 {
        range.zero_offset - self.left_fill_width
    }
}

/// Scales `magnitude` into `available` units against `bound`, saturating.
fn scaled_fill(magnitude: i64, available: i32, bound: i64) -> i32 {
    if bound == 0 {
        return 0;
    }
    let width = (magnitude * i64::from(available) / bound).clamp(0, i64::from(available));
    width as i32
}

/// Maps a reading onto the two bar segments.
///
/// Exactly zero watts leaves both segments empty. The label reflects the raw
/// reading even when the fill saturates.
pub fn compute_fill(range: &PowerRange, reading: PowerReading) -> FillResult {
    let value = i64::from(reading.value_watts);

    let (left_fill_width, right_fill_width) = if value > 0 {
        let right = scaled_fill(value, range.consume_zone(), i64::from(range.max_watts));
        (0, right)
    } else {
        // regen zone is empty when min_watts == 0
        let left = scaled_fill(-value, range.regen_zone(), -i64::from(range.min_watts));
        (left, 0)
    };

    FillResult {
        left_fill_width,
        right_fill_width,
        display_text: PowerLabel::new(reading.value_watts, range.sign_style),
    }
}
