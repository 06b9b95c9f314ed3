use spectrum_core::models::color::ColorType;
use spectrum_core::models::scores::ScoreVector;

/// All four colors ordered by score, highest first.
///
/// Equal scores keep canonical order (red, yellow, green, blue), so the
/// ranking is fully deterministic.
pub fn rank(scores: &ScoreVector) -> [ColorType; 4] {
    let mut ranked = ColorType::ALL;
    // Stable sort over the canonical order preserves it among equal scores.
    ranked.sort_by(|a, b| scores.value(*b).cmp(&scores.value(*a)));
    ranked
}

/// The dominant and secondary colors.
pub fn resolve(scores: &ScoreVector) -> (ColorType, ColorType) {
    let ranked = rank(scores);
    (ranked[0], ranked[1])
}
