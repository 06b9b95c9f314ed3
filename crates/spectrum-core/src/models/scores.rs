use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::color::ColorType;

/// A value per color energy. Every color is always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ColorMap<T> {
    #[serde(rename = "fiery-red")]
    pub fiery_red: T,
    #[serde(rename = "sunshine-yellow")]
    pub sunshine_yellow: T,
    #[serde(rename = "earth-green")]
    pub earth_green: T,
    #[serde(rename = "cool-blue")]
    pub cool_blue: T,
}

/// Raw point totals or normalized percentages, depending on context.
pub type ScoreVector = ColorMap<u32>;

impl<T> ColorMap<T> {
    pub fn from_fn(mut f: impl FnMut(ColorType) -> T) -> Self {
        Self {
            fiery_red: f(ColorType::FieryRed),
            sunshine_yellow: f(ColorType::SunshineYellow),
            earth_green: f(ColorType::EarthGreen),
            cool_blue: f(ColorType::CoolBlue),
        }
    }

    pub fn get(&self, color: ColorType) -> &T {
        match color {
            ColorType::FieryRed => &self.fiery_red,
            ColorType::SunshineYellow => &self.sunshine_yellow,
            ColorType::EarthGreen => &self.earth_green,
            ColorType::CoolBlue => &self.cool_blue,
        }
    }

    pub fn get_mut(&mut self, color: ColorType) -> &mut T {
        match color {
            ColorType::FieryRed => &mut self.fiery_red,
            ColorType::SunshineYellow => &mut self.sunshine_yellow,
            ColorType::EarthGreen => &mut self.earth_green,
            ColorType::CoolBlue => &mut self.cool_blue,
        }
    }

    /// Iterate in canonical color order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorType, &T)> {
        ColorType::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    pub fn map<U>(&self, mut f: impl FnMut(ColorType, &T) -> U) -> ColorMap<U> {
        ColorMap::from_fn(|c| f(c, self.get(c)))
    }
}

impl<T: Copy> ColorMap<T> {
    pub fn value(&self, color: ColorType) -> T {
        *self.get(color)
    }
}

impl ColorMap<u32> {
    /// Sum of all four values. Widened so that no combination of `u32`
    /// entries can overflow.
    pub fn total(&self) -> u64 {
        self.iter().map(|(_, v)| u64::from(*v)).sum()
    }
}
