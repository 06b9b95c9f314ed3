use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// How strongly a color option was preferred within one question.
///
/// `L` and `M` are the ends of a 0–6 scale; the digits sit between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum RatingLabel {
    #[serde(rename = "L")]
    Least,
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "M")]
    Most,
}

impl RatingLabel {
    pub const ALL: [RatingLabel; 7] = [
        RatingLabel::Least,
        RatingLabel::One,
        RatingLabel::Two,
        RatingLabel::Three,
        RatingLabel::Four,
        RatingLabel::Five,
        RatingLabel::Most,
    ];

    pub fn weight(self) -> u32 {
        match self {
            RatingLabel::Least => 0,
            RatingLabel::One => 1,
            RatingLabel::Two => 2,
            RatingLabel::Three => 3,
            RatingLabel::Four => 4,
            RatingLabel::Five => 5,
            RatingLabel::Most => 6,
        }
    }

    /// True for the digit labels `1`–`5`.
    pub fn is_intermediate(self) -> bool {
        !matches!(self, RatingLabel::Least | RatingLabel::Most)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RatingLabel::Least => "L",
            RatingLabel::One => "1",
            RatingLabel::Two => "2",
            RatingLabel::Three => "3",
            RatingLabel::Four => "4",
            RatingLabel::Five => "5",
            RatingLabel::Most => "M",
        }
    }
}

impl fmt::Display for RatingLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RatingLabel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RatingLabel::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| CoreError::UnknownRating(s.to_string()))
    }
}
