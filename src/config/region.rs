use crate::detector::{ScoreParams, SearchParams};
use crate::types::{MinSize, Rect};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration of the `region_demo` tool.
#[derive(Clone, Debug, Deserialize)]
pub struct RuntimeConfig {
    pub input: PathBuf,
    #[serde(default = "default_max_size")]
    pub max_working_size: u32,
    pub mode: ModeConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// What to do with the loaded image.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModeConfig {
    /// Automatic region search.
    Weighted {
        #[serde(default = "default_amount")]
        amount: usize,
        /// Pixels if >= 1, fraction of the original width otherwise.
        #[serde(default)]
        min_width: MinSize,
        /// Pixels if >= 1, fraction of the original height otherwise.
        #[serde(default)]
        min_height: MinSize,
        #[serde(default)]
        search: SearchParams,
    },
    /// Rank caller-supplied rectangles, given in original-image pixels.
    Bounded {
        regions: Vec<Rect>,
        #[serde(default)]
        score: ScoreParams,
    },
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct OutputConfig {
    /// Write the JSON report here instead of stdout.
    pub json_out: Option<PathBuf>,
    /// Directory receiving the working image and edge maps.
    pub debug_dir: Option<PathBuf>,
}

fn default_amount() -> usize {
    5
}

fn default_max_size() -> u32 {
    crate::image::DEFAULT_MAX_SIZE
}

pub fn parse_config(contents: &str) -> Result<RuntimeConfig, String> {
    serde_json::from_str(contents).map_err(|e| format!("Failed to parse config: {e}"))
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
