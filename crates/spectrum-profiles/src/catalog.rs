use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use spectrum_core::models::color::ColorType;
use spectrum_core::models::personality::PersonalityType;

/// Display metadata for one color energy.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ColorProfile {
    pub color: ColorType,
    pub name: String,
    pub short_name: String,
    pub hex: String,
    pub description: String,
    pub keywords: Vec<String>,
    /// How the energy shows when it is used well.
    pub good_day: Vec<String>,
    /// How the energy shows when it is overused or under pressure.
    pub bad_day: Vec<String>,
}

/// Display metadata for one archetype and the color pair it maps to.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PersonalityProfile {
    pub personality_type: PersonalityType,
    pub name: String,
    pub description: String,
    pub primary_color: ColorType,
    /// `None` for single-color archetypes.
    pub secondary_color: Option<ColorType>,
    pub strengths: Vec<String>,
    pub blind_spots: Vec<String>,
}

static COLORS: LazyLock<Vec<ColorProfile>> = LazyLock::new(|| {
    vec![
        color(
            ColorType::FieryRed,
            "Fiery Red",
            "Red",
            "#E53935",
            "Extraverted thinking energy: positive, competitive and driven by results.",
            &["decisive", "purposeful", "competitive", "strong-willed"],
            &["bold", "determined", "demanding"],
            &["aggressive", "controlling", "overbearing"],
        ),
        color(
            ColorType::SunshineYellow,
            "Sunshine Yellow",
            "Yellow",
            "#FDD835",
            "Extraverted feeling energy: radiant, friendly and focused on people and ideas.",
            &["sociable", "enthusiastic", "persuasive", "dynamic"],
            &["expressive", "optimistic", "inspiring"],
            &["frantic", "indiscreet", "hasty"],
        ),
        color(
            ColorType::EarthGreen,
            "Earth Green",
            "Green",
            "#43A047",
            "Introverted feeling energy: calm, caring and guided by values and harmony.",
            &["caring", "patient", "relaxed", "encouraging"],
            &["supportive", "steady", "trusting"],
            &["stubborn", "docile", "reliant"],
        ),
        color(
            ColorType::CoolBlue,
            "Cool Blue",
            "Blue",
            "#1E88E5",
            "Introverted thinking energy: precise, deliberate and driven by understanding.",
            &["cautious", "precise", "analytical", "questioning"],
            &["formal", "objective", "deliberate"],
            &["reserved", "indecisive", "suspicious"],
        ),
    ]
});

static PERSONALITIES: LazyLock<Vec<PersonalityProfile>> = LazyLock::new(|| {
    vec![
        personality(
            PersonalityType::Director,
            "Directs outcomes with pace and focus; sets the course and expects others to keep up.",
            ColorType::FieryRed,
            None,
            &["decisive", "goal-oriented", "takes charge"],
            &["impatient with detail", "can override quieter voices"],
        ),
        personality(
            PersonalityType::Inspirer,
            "Energises the room; sells a vision and brings people along through enthusiasm.",
            ColorType::SunshineYellow,
            None,
            &["persuasive", "optimistic", "connects people"],
            &["loses interest in follow-through", "over-promises"],
        ),
        personality(
            PersonalityType::Supporter,
            "Holds the team together; values loyalty, listening and steady progress.",
            ColorType::EarthGreen,
            None,
            &["empathetic", "reliable", "patient"],
            &["avoids conflict", "slow to accept change"],
        ),
        personality(
            PersonalityType::Observer,
            "Studies before acting; brings rigour, accuracy and well-founded judgement.",
            ColorType::CoolBlue,
            None,
            &["thorough", "objective", "systematic"],
            &["over-analyses", "hesitant to commit"],
        ),
        personality(
            PersonalityType::Reformer,
            "Drives change through standards; combines results focus with careful analysis.",
            ColorType::FieryRed,
            Some(ColorType::CoolBlue),
            &["principled", "driven", "quality-focused"],
            &["critical", "inflexible under pressure"],
        ),
        personality(
            PersonalityType::Motivator,
            "Pushes for results with energy and charm; rallies people to ambitious goals.",
            ColorType::FieryRed,
            Some(ColorType::SunshineYellow),
            &["energetic", "competitive", "inspiring"],
            &["restless", "overlooks detail"],
        ),
        personality(
            PersonalityType::Helper,
            "Builds relationships and morale; warm, encouraging and attentive to others.",
            ColorType::SunshineYellow,
            Some(ColorType::EarthGreen),
            &["warm", "encouraging", "collaborative"],
            &["struggles to say no", "avoids hard feedback"],
        ),
        personality(
            PersonalityType::Coordinator,
            "Organises people and process; dependable, methodical and considerate.",
            ColorType::CoolBlue,
            Some(ColorType::EarthGreen),
            &["organised", "dependable", "considerate"],
            &["resists sudden change", "can seem reserved"],
        ),
    ]
});

/// All color profiles, in canonical color order.
pub fn all_colors() -> &'static [ColorProfile] {
    &COLORS
}

/// All archetype profiles.
pub fn all_personalities() -> &'static [PersonalityProfile] {
    &PERSONALITIES
}

pub fn color_profile(color: ColorType) -> &'static ColorProfile {
    // COLORS is declared in canonical order, one entry per color.
    &COLORS[color.priority()]
}

pub fn personality_profile(personality_type: PersonalityType) -> &'static PersonalityProfile {
    // PERSONALITIES is declared in `PersonalityType::ALL` order.
    &PERSONALITIES[personality_type as usize]
}

#[allow(clippy::too_many_arguments)]
fn color(
    color: ColorType,
    name: &str,
    short_name: &str,
    hex: &str,
    description: &str,
    keywords: &[&str],
    good_day: &[&str],
    bad_day: &[&str],
) -> ColorProfile {
    ColorProfile {
        color,
        name: name.to_string(),
        short_name: short_name.to_string(),
        hex: hex.to_string(),
        description: description.to_string(),
        keywords: strings(keywords),
        good_day: strings(good_day),
        bad_day: strings(bad_day),
    }
}

fn personality(
    personality_type: PersonalityType,
    description: &str,
    primary_color: ColorType,
    secondary_color: Option<ColorType>,
    strengths: &[&str],
    blind_spots: &[&str],
) -> PersonalityProfile {
    PersonalityProfile {
        personality_type,
        name: personality_type.as_str().to_string(),
        description: description.to_string(),
        primary_color,
        secondary_color,
        strengths: strings(strengths),
        blind_spots: strings(blind_spots),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
