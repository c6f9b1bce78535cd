pub mod chart;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod measurement;
pub mod output;
pub mod pipeline;
pub mod stats;

pub use error::{Result, SortbenchError};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_PARTIAL_FAILURE: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
