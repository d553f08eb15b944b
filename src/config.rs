//! Tunable parameters, loadable from a TOML file.
//!
//! Every section uses `#[serde(default)]`, so a file only needs the keys it
//! overrides:
//!
//! ```toml
//! [extract]
//! max_input_bytes = 1048576
//!
//! [copy]
//! tone = "bold"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::copywriter::{Industry, Tone};
use crate::error::{BrandError, Result};

/// Raw inputs larger than this are rejected before decoding (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: u64 = 5 * 1024 * 1024;
/// Side of the square the image is stretched to before sampling.
pub const SAMPLE_SIDE: u32 = 120;
/// Pixels with alpha below this are treated as transparent and skipped.
pub const ALPHA_THRESHOLD: u8 = 10;
/// How far the gradient endpoint is mixed toward white.
pub const TINT_AMOUNT: f32 = 0.25;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub extract: ExtractConfig,
    pub copy: CopyConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    pub max_input_bytes: u64,
    pub sample_side: u32,
    pub alpha_threshold: u8,
    pub tint_amount: f32,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            sample_side: SAMPLE_SIDE,
            alpha_threshold: ALPHA_THRESHOLD,
            tint_amount: TINT_AMOUNT,
        }
    }
}

/// Defaults for the copy helpers when the CLI doesn't specify them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CopyConfig {
    pub industry: Industry,
    pub tone: Tone,
}

impl Config {
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self> {
        let config: Config = toml::from_str(text).map_err(|e| BrandError::Config {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })?;
        config.validate(origin)?;
        Ok(config)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| BrandError::io(path, e))?;
        Self::from_toml_str(&text, path)
    }

    fn validate(&self, origin: &Path) -> Result<()> {
        let invalid = |message: &str| BrandError::Config {
            path: origin.to_path_buf(),
            message: message.to_string(),
        };
        if self.extract.sample_side == 0 {
            return Err(invalid("extract.sample_side must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.extract.tint_amount) {
            return Err(invalid("extract.tint_amount must be within [0, 1]"));
        }
        Ok(())
    }
}
