pub mod audit;
pub mod owner;
