//! Display text for the power bar.

use std::fmt;

use serde::Deserialize;

/// Unit suffix appended to every power label.
pub const POWER_UNIT: &str = "kW";

/// Sign character convention for non-negative readings.
///
/// Negative readings always render with `'-'`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignStyle {
    /// Non-negative readings are prefixed with a space (`" 6.000 kW"`).
    #[default]
    Blank,
    /// Non-negative readings are prefixed with `'+'` (`"+6.000 kW"`).
    Plus,
}

impl SignStyle {
    /// Sign character for a reading.
    pub fn sign_char(self, value_watts: i32) -> char {
        match (value_watts < 0, self) {
            (true, _) => '-',
            (false, SignStyle::Blank) => ' ',
            (false, SignStyle::Plus) => '+',
        }
    }
}

/// Formatted power value, e.g. `"-0.250 kW"`.
///
/// Holds the raw reading and formats lazily, so building one never allocates.
/// The magnitude is never clamped to the bar range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerLabel {
    value_watts: i32,
    sign_style: SignStyle,
}

impl PowerLabel {
    pub fn new(value_watts: i32, sign_style: SignStyle) -> Self {
        Self {
            value_watts,
            sign_style,
        }
    }

    /// Raw reading the label was built from.
    pub fn value_watts(&self) -> i32 {
        self.value_watts
    }

    pub fn sign(&self) -> char {
        self.sign_style.sign_char(self.value_watts)
    }

    /// Whole kilowatts of `|value|`.
    pub fn whole_kw(&self) -> u32 {
        self.value_watts.unsigned_abs() / 1000
    }

    /// Remaining watts of `|value|` after whole kilowatts (0..=999).
    pub fn frac_watts(&self) -> u32 {
        self.value_watts.unsigned_abs() % 1000
    }

    /// Numeric part without sign or unit, e.g. `"6.000"`.
    pub fn magnitude_text(&self) -> String {
        format!("{}.{:03}", self.whole_kw(), self.frac_watts())
    }
}

impl fmt::Display for PowerLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}.{:03} {POWER_UNIT}",
            self.sign(),
            self.whole_kw(),
            self.frac_watts()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_style_uses_space_for_positive() {
        let label = PowerLabel::new(6000, SignStyle::Blank);
        assert_eq!(label.to_string(), " 6.000 kW");
    }

    #[test]
    fn plus_style_marks_positive_and_zero() {
        assert_eq!(PowerLabel::new(6000, SignStyle::Plus).to_string(), "+6.000 kW");
        assert_eq!(PowerLabel::new(0, SignStyle::Plus).to_string(), "+0.000 kW");
    }

    #[test]
    fn sub_kilowatt_negative_keeps_sign() {
        // -250 W must not lose its sign through integer division
        let label = PowerLabel::new(-250, SignStyle::Blank);
        assert_eq!(label.to_string(), "-0.250 kW");
    }

    #[test]
    fn fraction_is_zero_padded() {
        assert_eq!(PowerLabel::new(1005, SignStyle::Plus).to_string(), "+1.005 kW");
        assert_eq!(PowerLabel::new(-1050, SignStyle::Plus).to_string(), "-1.050 kW");
    }

    #[test]
    fn extreme_negative_formats_without_overflow() {
        let label = PowerLabel::new(i32::MIN, SignStyle::Blank);
        assert_eq!(label.to_string(), "-2147483.648 kW");
    }

    #[test]
    fn magnitude_text_drops_sign_and_unit() {
        assert_eq!(PowerLabel::new(-3000, SignStyle::Plus).magnitude_text(), "3.000");
    }
}
