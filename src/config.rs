//! Tunable parameters for extraction and artifact output.
//!
//! Configuration can be loaded from JSON or built in code:
//!
//! ```no_run
//! use palette_extract::PaletteConfig;
//! use std::path::Path;
//!
//! let config = PaletteConfig::from_json_file(Path::new("palette.json"))?;
//! let defaults = PaletteConfig::default();
//! # Ok::<(), palette_extract::PaletteError>(())
//! ```
//!
//! Missing fields fall back to their defaults, so a file containing only
//! `{"extraction": {"n_colors": 8}}` is valid.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{PaletteError, Result};

/// Default number of palette entries
pub const DEFAULT_COLORS: usize = 5;

/// Complete configuration for one extraction run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Clustering parameters
    pub extraction: ExtractionConfig,

    /// Directory receiving the four artifacts
    pub output_dir: PathBuf,
}

/// K-means parameters.
///
/// Two runs with equal configs over the same pixels produce the same palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Number of clusters `k`
    pub n_colors: usize,

    /// Upper bound on k-means iterations
    pub max_iterations: usize,

    /// Score delta below which clustering stops early
    pub convergence: f32,

    /// Seed for centroid initialisation
    pub seed: u64,

    /// Resize so the longest side equals this many pixels before clustering
    pub downscale: Option<u32>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            n_colors: DEFAULT_COLORS,
            max_iterations: 20,
            convergence: 1e-4,
            seed: 0,
            downscale: None,
        }
    }
}

impl ExtractionConfig {
    /// Defaults with a different cluster count
    pub fn with_colors(n_colors: usize) -> Self {
        Self {
            n_colors,
            ..Self::default()
        }
    }
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            extraction: ExtractionConfig::default(),
            output_dir: PathBuf::from("output"),
        }
    }
}

impl PaletteConfig {
    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| PaletteError::config(format!("cannot read {}", path.display()), e))?;
        serde_json::from_str(&content)
            .map_err(|e| PaletteError::config(format!("cannot parse {}", path.display()), e))
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| PaletteError::config("cannot serialize configuration", e))?;
        std::fs::write(path, json)
            .map_err(|e| PaletteError::config(format!("cannot write {}", path.display()), e))
    }
}
