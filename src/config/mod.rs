//! JSON configuration for the command-line tools.

pub mod region;

pub use region::{load_config, ModeConfig, OutputConfig, RuntimeConfig};
