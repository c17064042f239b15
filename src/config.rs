use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::foundation::core::Canvas;
use crate::foundation::error::{RandomartError, RandomartResult};
use crate::grammar::default::{DEFAULT_MAX_DEPTH, DEFAULT_START_RULE};
use crate::grammar::generate::DEFAULT_MAX_ATTEMPTS;

/// Parameters of one generate + render run.
///
/// Every field has a default, so a JSON file only needs the fields it overrides:
///
/// ```json
/// { "seed": 42, "width": 256, "height": 256 }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RNG seed. A fresh seed is drawn (and logged) when absent.
    pub seed: Option<u64>,
    /// Depth budget for grammar expansion.
    pub max_depth: u32,
    /// Rule the expansion starts from.
    pub start_rule: usize,
    /// Branch draws per rule expansion.
    pub max_attempts: usize,
    /// Where the PNG is written.
    pub output: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            seed: None,
            max_depth: DEFAULT_MAX_DEPTH,
            start_rule: DEFAULT_START_RULE,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            output: PathBuf::from("output.png"),
        }
    }
}

impl RenderConfig {
    /// Parse a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> RandomartResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| RandomartError::config(format!("parse config JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> RandomartResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            RandomartError::config(format!("open config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Reject configs that cannot produce an image.
    pub fn validate(&self) -> RandomartResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RandomartError::config(format!(
                "image size must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        if self.max_depth == 0 {
            return Err(RandomartError::config("max_depth must be >= 1"));
        }
        if self.max_attempts == 0 {
            return Err(RandomartError::config("max_attempts must be >= 1"));
        }
        Ok(())
    }

    /// Output canvas.
    pub fn canvas(&self) -> RandomartResult<Canvas> {
        Canvas::new(self.width, self.height)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/config.rs"]
mod tests;
