//! spectrum-storage
//!
//! Result persistence. A thin wrapper around the AWS S3 SDK, plus an
//! in-memory store with the same interface.

pub mod client;
pub mod error;
pub mod json;
pub mod memory;
pub mod objects;
pub mod results;

pub use memory::MemoryResultStore;
pub use results::{ResultStore, S3ResultStore};
