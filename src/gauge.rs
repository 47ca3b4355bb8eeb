//! Speed gauge readout.

/// Default speed above which the readout switches to the alert colour.
pub const DEFAULT_ALERT_ABOVE: i32 = 60;

/// One speed value ready for the gauge: needle value, centre text, alert flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeedReadout {
    pub value: i32,
    pub text: String,
    /// Set when `value` is strictly above the alert threshold.
    pub alert: bool,
}

impl SpeedReadout {
    pub fn new(value: i32, alert_above: i32) -> Self {
        Self {
            value,
            text: value.to_string(),
            alert: value > alert_above,
        }
    }
}

impl Default for SpeedReadout {
    fn default() -> Self {
        Self::new(0, DEFAULT_ALERT_ABOVE)
    }
}
