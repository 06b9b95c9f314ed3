use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The eight personality archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PersonalityType {
    Director,
    Inspirer,
    Supporter,
    Observer,
    Reformer,
    Motivator,
    Helper,
    Coordinator,
}

impl PersonalityType {
    pub const ALL: [PersonalityType; 8] = [
        PersonalityType::Director,
        PersonalityType::Inspirer,
        PersonalityType::Supporter,
        PersonalityType::Observer,
        PersonalityType::Reformer,
        PersonalityType::Motivator,
        PersonalityType::Helper,
        PersonalityType::Coordinator,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PersonalityType::Director => "Director",
            PersonalityType::Inspirer => "Inspirer",
            PersonalityType::Supporter => "Supporter",
            PersonalityType::Observer => "Observer",
            PersonalityType::Reformer => "Reformer",
            PersonalityType::Motivator => "Motivator",
            PersonalityType::Helper => "Helper",
            PersonalityType::Coordinator => "Coordinator",
        }
    }
}

impl fmt::Display for PersonalityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PersonalityType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PersonalityType::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::UnknownPersonality(s.to_string()))
    }
}
