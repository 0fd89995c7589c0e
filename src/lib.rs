pub mod config;
pub mod document;
pub mod embedding;
pub mod error;
pub mod seed;
pub mod store;

#[cfg(test)]
mod testing;

pub use error::{Result, SeedError};
