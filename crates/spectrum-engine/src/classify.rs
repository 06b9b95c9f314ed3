use spectrum_core::models::color::ColorType;
use spectrum_core::models::personality::PersonalityType;

/// Map a dominant/secondary pair to its archetype.
///
/// The four named pairs match in either order. Red+Green and Yellow+Blue
/// are not named and fall through to the dominant color alone.
pub fn classify(dominant: ColorType, secondary: ColorType) -> PersonalityType {
    use ColorType::*;

    match (dominant, secondary) {
        (FieryRed, CoolBlue) | (CoolBlue, FieryRed) => PersonalityType::Reformer,
        (FieryRed, SunshineYellow) | (SunshineYellow, FieryRed) => PersonalityType::Motivator,
        (SunshineYellow, EarthGreen) | (EarthGreen, SunshineYellow) => PersonalityType::Helper,
        (CoolBlue, EarthGreen) | (EarthGreen, CoolBlue) => PersonalityType::Coordinator,
        (FieryRed, _) => PersonalityType::Director,
        (SunshineYellow, _) => PersonalityType::Inspirer,
        (EarthGreen, _) => PersonalityType::Supporter,
        (CoolBlue, _) => PersonalityType::Observer,
    }
}
