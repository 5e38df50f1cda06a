pub mod cli;
pub mod config;
pub mod splitter;

pub use config::Config;
pub use splitter::{split, split_bytes, split_with};

/// The outcome of splitting one input string.
#[derive(Debug, Clone, Default)]
pub struct SplitResult {
    pub input: String,
    pub tokens: Vec<String>,
}
