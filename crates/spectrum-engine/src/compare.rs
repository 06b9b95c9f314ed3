//! Result comparison and team aggregates.

use std::collections::BTreeMap;

use spectrum_core::models::color::ColorType;
use spectrum_core::models::comparison::{ProfileComparison, TeamSummary};
use spectrum_core::models::result::QuizResult;
use spectrum_core::models::scores::{ColorMap, ScoreVector};

use crate::classify::classify;
use crate::dominance::resolve;

/// Compare profile `b` against profile `a`.
pub fn compare(a: &ScoreVector, b: &ScoreVector) -> ProfileComparison {
    let deltas = ColorMap::from_fn(|c| i64::from(b.value(c)) - i64::from(a.value(c)));
    let distance: u64 = deltas.iter().map(|(_, d)| d.unsigned_abs()).sum();

    // First color in canonical order wins among equal shifts.
    let mut largest_shift = ColorType::FieryRed;
    for (color, delta) in deltas.iter() {
        if delta.unsigned_abs() > deltas.value(largest_shift).unsigned_abs() {
            largest_shift = color;
        }
    }

    let (a_dominant, a_secondary) = resolve(a);
    let (b_dominant, b_secondary) = resolve(b);

    ProfileComparison {
        deltas,
        distance,
        largest_shift,
        same_dominant: a_dominant == b_dominant,
        same_personality: classify(a_dominant, a_secondary) == classify(b_dominant, b_secondary),
    }
}

/// Summarize a group of results.
pub fn summarize_team(results: &[QuizResult]) -> TeamSummary {
    let member_count = results.len() as u32;

    let mut sums = ColorMap::<u64>::default();
    let mut dominant_colors = ColorMap::<u32>::default();
    let mut personality_types = BTreeMap::new();

    for result in results {
        for (color, &score) in result.scores.iter() {
            *sums.get_mut(color) += u64::from(score);
        }
        *dominant_colors.get_mut(result.dominant_color) += 1;
        *personality_types.entry(result.personality_type).or_insert(0) += 1;
    }

    let average_scores = if member_count == 0 {
        ScoreVector::default()
    } else {
        let n = u64::from(member_count);
        sums.map(|_, &sum| ((sum * 2 + n) / (n * 2)) as u32)
    };

    TeamSummary {
        member_count,
        average_scores,
        dominant_colors,
        personality_types,
    }
}
