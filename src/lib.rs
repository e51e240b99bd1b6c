//! Check whether a 7-bit ASCII sequence holds only distinct characters.

pub mod config;
mod error;
pub mod io_utils;
pub mod report;
pub mod stats;
mod unique;

pub use config::{Config, OutputFormat};
pub use error::UniqueCharsError;
pub use report::{check, demo_samples, Report, Verdict};
pub use stats::Stats;
pub use unique::{first_duplicate, is_unique, is_unique_str, Duplicate, ASCII_SIZE};
