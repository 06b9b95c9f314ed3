//! Conscious and less-conscious persona values and preference flow.
//!
//! Values sit on the 0–6 point scale used by the charts. The less-conscious
//! persona is a damped inverse of the conscious one rather than a mirror.

use spectrum_core::models::color::ColorType;
use spectrum_core::models::dynamics::{PersonaDynamics, PersonaLevel, PreferenceFlow};
use spectrum_core::models::scores::{ColorMap, ScoreVector};

use crate::aggregate::percent_of;
use crate::dominance::rank;

pub const SCALE_MAX: f64 = 6.0;
pub const LESS_CONSCIOUS_DAMPING: f64 = 0.7;

/// Derive persona dynamics from a percentage vector.
///
/// The input is re-normalized first since it may carry rounding drift.
pub fn persona_dynamics(scores: &ScoreVector) -> PersonaDynamics {
    let normalized = renormalize(scores);

    let conscious_values = normalized.map(|_, &pct| round2(f64::from(pct) / 100.0 * SCALE_MAX));
    let less_conscious_values =
        conscious_values.map(|_, &v| round2((SCALE_MAX - v) * LESS_CONSCIOUS_DAMPING));

    let ranked = rank(&normalized);
    let top_color = ranked[0];
    let bottom_color = ranked[3];

    let spread = (conscious_values.value(top_color) - conscious_values.value(bottom_color)).abs();
    let value = (spread / SCALE_MAX * 100.0).round() as u32;

    PersonaDynamics {
        conscious: level(conscious_values),
        less_conscious: level(less_conscious_values),
        preference_flow: PreferenceFlow {
            value,
            top_color,
            bottom_color,
            color_flow: ColorMap::from_fn(|c| directional_flow(c, value, top_color, bottom_color)),
        },
    }
}

/// Scale a vector so its entries sum to 100 (before rounding). An all-zero
/// vector stays all zero.
pub fn renormalize(scores: &ScoreVector) -> ScoreVector {
    let total = scores.total();
    if total == 0 {
        return ScoreVector::default();
    }
    scores.map(|_, &v| percent_of(v, total))
}

/// Signed flow score for one color, in `[-100, 100]`.
///
/// Blue and yellow trend upward, green downward, red slightly upward unless
/// it is an extreme. The top color is always positive and the bottom color
/// always negative.
pub fn directional_flow(
    color: ColorType,
    flow: u32,
    top_color: ColorType,
    bottom_color: ColorType,
) -> i32 {
    let flow = f64::from(flow);
    let is_top = color == top_color;
    let is_bottom = color == bottom_color;

    let score = match color {
        ColorType::CoolBlue if is_bottom => -flow,
        ColorType::CoolBlue => flow,
        ColorType::SunshineYellow if is_bottom => -0.8 * flow,
        ColorType::SunshineYellow => 0.7 * flow,
        ColorType::EarthGreen if is_top => 0.8 * flow,
        ColorType::EarthGreen => -0.8 * flow,
        ColorType::FieryRed if is_top => flow,
        ColorType::FieryRed if is_bottom => -flow,
        ColorType::FieryRed => 0.3 * flow,
    };

    let score = if is_top {
        score.abs()
    } else if is_bottom {
        -score.abs()
    } else {
        score
    };

    (score.round() as i32).clamp(-100, 100)
}

/// Share of the 6-point scale, as a whole percentage.
pub fn scale_percentage(value: f64) -> u32 {
    (value / SCALE_MAX * 100.0).round() as u32
}

fn level(values: ColorMap<f64>) -> PersonaLevel {
    PersonaLevel {
        percentages: values.map(|_, &v| scale_percentage(v)),
        values,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
