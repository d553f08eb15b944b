//! Error types for brandkit.

use std::path::PathBuf;

use thiserror::Error;

const MIB: u64 = 1024 * 1024;

/// Result alias used across the library.
pub type Result<T> = std::result::Result<T, BrandError>;

#[derive(Error, Debug)]
pub enum BrandError {
    /// Raw input exceeds the configured byte ceiling. Raised before decoding.
    #[error("input too large: {size} bytes (max {max})")]
    InputTooLarge { size: u64, max: u64 },

    /// The bytes could not be interpreted as an image.
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid hex color {value:?}: {reason}")]
    InvalidHex { value: String, reason: String },

    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

impl BrandError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Short message suitable for showing to an end user.
    pub fn user_message(&self) -> String {
        match self {
            BrandError::InputTooLarge { max, .. } if *max < MIB => {
                format!("File too large (max {max} bytes)")
            }
            BrandError::InputTooLarge { max, .. } => {
                format!("File too large (max {}MB)", max / MIB)
            }
            BrandError::Decode(_) => {
                "Could not read the image. Please check the file format and try again.".to_string()
            }
            BrandError::Io { path, .. } => format!("Could not open {}", path.display()),
            BrandError::InvalidHex { value, .. } => format!("{value} is not a valid color"),
            BrandError::Config { .. } => "The configuration file could not be loaded.".to_string(),
        }
    }
}
