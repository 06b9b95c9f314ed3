//! spectrum-profiles
//!
//! Static assessment content. Pure data, no AWS dependency.
//! Describes the four color energies, the eight personality archetypes and
//! the question bank the quiz is built from.

pub mod catalog;
pub mod error;
pub mod questions;

pub use catalog::{
    all_colors, all_personalities, color_profile, personality_profile, ColorProfile,
    PersonalityProfile,
};
pub use questions::{Question, QuestionBank, QuestionOption};
