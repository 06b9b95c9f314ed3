use serde::Serialize;

use spectrum_core::models::color::ColorType;
use spectrum_core::models::dynamics::{PreferenceFlow, ResultDynamics};
use spectrum_core::models::result::QuizResult;
use spectrum_engine::result_dynamics;
use spectrum_profiles::{color_profile, personality_profile, ColorProfile, PersonalityProfile};

/// One table row per color.
#[derive(Debug, Clone, Serialize)]
pub struct ColorRow {
    pub color: ColorType,
    pub name: String,
    pub hex: String,
    pub score: u32,
    pub unconscious_score: Option<u32>,
    pub conscious_value: f64,
    pub less_conscious_value: f64,
    pub flow: i32,
}

/// Everything a report template can reference.
#[derive(Debug, Clone, Serialize)]
pub struct ReportContext {
    pub result: QuizResult,
    pub personality: PersonalityProfile,
    pub dominant: ColorProfile,
    pub secondary: ColorProfile,
    pub colors: Vec<ColorRow>,
    pub preference_flow: PreferenceFlow,
    pub unconscious_scores: bool,
    pub dynamics: ResultDynamics,
}

impl ReportContext {
    pub fn build(result: &QuizResult) -> Self {
        let dynamics = result_dynamics(result);
        let conscious = &dynamics.conscious;

        let colors = ColorType::ALL
            .into_iter()
            .map(|color| {
                let profile = color_profile(color);
                ColorRow {
                    color,
                    name: profile.name.clone(),
                    hex: profile.hex.clone(),
                    score: result.scores.value(color),
                    unconscious_score: result.unconscious_scores.map(|s| s.value(color)),
                    conscious_value: conscious.conscious.values.value(color),
                    less_conscious_value: conscious.less_conscious.values.value(color),
                    flow: conscious.preference_flow.color_flow.value(color),
                }
            })
            .collect();
        let preference_flow = conscious.preference_flow.clone();

        Self {
            result: result.clone(),
            personality: personality_profile(result.personality_type).clone(),
            dominant: color_profile(result.dominant_color).clone(),
            secondary: color_profile(result.secondary_color).clone(),
            colors,
            preference_flow,
            unconscious_scores: result.unconscious_scores.is_some(),
            dynamics,
        }
    }
}
