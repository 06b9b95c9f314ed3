pub mod analysis;
pub mod catalog;
pub mod health;
pub mod results;
