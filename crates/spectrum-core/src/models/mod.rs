pub mod answer;
pub mod color;
pub mod comparison;
pub mod dynamics;
pub mod personality;
pub mod rating;
pub mod result;
pub mod scores;
pub mod submission;
