use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// One of the four color energies.
///
/// Declaration order is the canonical priority order: wherever two colors
/// rank equally, the one declared first wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum ColorType {
    FieryRed,
    SunshineYellow,
    EarthGreen,
    CoolBlue,
}

impl ColorType {
    /// All colors, in canonical priority order.
    pub const ALL: [ColorType; 4] = [
        ColorType::FieryRed,
        ColorType::SunshineYellow,
        ColorType::EarthGreen,
        ColorType::CoolBlue,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ColorType::FieryRed => "fiery-red",
            ColorType::SunshineYellow => "sunshine-yellow",
            ColorType::EarthGreen => "earth-green",
            ColorType::CoolBlue => "cool-blue",
        }
    }

    /// Position in the canonical priority order (0 is highest priority).
    pub fn priority(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ColorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorType::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CoreError::UnknownColor(s.to_string()))
    }
}
