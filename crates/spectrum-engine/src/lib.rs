//! spectrum-engine
//!
//! Scoring and classification. Turns rated quiz answers into color-energy
//! percentages, resolves dominant and secondary colors, classifies the
//! personality archetype and derives persona dynamics for presentation.
//!
//! Everything here is synchronous and stateless: each function maps its
//! inputs to outputs with no I/O.

pub mod aggregate;
pub mod assemble;
pub mod classify;
pub mod compare;
pub mod dominance;
pub mod dynamics;
pub mod error;
pub mod input;

pub use aggregate::{aggregate_ratings, aggregate_selections, Aggregation};
pub use assemble::{result_dynamics, ResultAssembler};
pub use classify::classify;
pub use compare::{compare, summarize_team};
pub use dominance::{rank, resolve};
pub use dynamics::persona_dynamics;
pub use error::ValidationError;
pub use input::AnswerSet;
