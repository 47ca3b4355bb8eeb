//! Day and night colour themes.

use std::fmt;

use serde::Deserialize;

/// Active colour theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Night,
    Day,
}

/// RGB colours (`0xRRGGBB`) for every themed element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: u32,
    pub text_main: u32,
    pub text_dim: u32,
    pub line: u32,
    pub border: u32,
    pub needle: u32,
    pub text_alert: u32,
    /// Regeneration segment of the power bar.
    pub energy_regen: u32,
    /// Consumption segment of the power bar.
    pub energy_consume: u32,
}

// shared by both themes
const TEXT_ALERT: u32 = 0xF4_43_36;
const ENERGY_REGEN: u32 = 0x67_C2_3A;
const ENERGY_CONSUME: u32 = 0xF5_6C_6C;

const NIGHT: Palette = Palette {
    bg: 0x11_14_18,
    text_main: 0xE6_E6_E6,
    text_dim: 0x9A_A0_A6,
    line: 0x3A_3F_45,
    border: 0xC8_C8_C8,
    needle: 0xB0_B0_B0,
    text_alert: TEXT_ALERT,
    energy_regen: ENERGY_REGEN,
    energy_consume: ENERGY_CONSUME,
};

const DAY: Palette = Palette {
    bg: 0xFF_FF_FF,
    text_main: 0x00_00_00,
    text_dim: 0x66_66_66,
    line: 0x88_88_88,
    border: 0x00_00_00,
    needle: 0x9E_9E_9E,
    text_alert: TEXT_ALERT,
    energy_regen: ENERGY_REGEN,
    energy_consume: ENERGY_CONSUME,
};

impl Theme {
    pub fn from_night_mode(night: bool) -> Self {
        if night { Theme::Night } else { Theme::Day }
    }

    pub fn is_night(self) -> bool {
        self == Theme::Night
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Night => Theme::Day,
            Theme::Day => Theme::Night,
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Night => &NIGHT,
            Theme::Day => &DAY,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Theme::Night => "night",
            Theme::Day => "day",
        })
    }
}
