//! Offline brand helpers for QR code generation.
//!
//! - [`pipeline::extract`]: dominant brand color and gradient from a logo image
//! - [`safety`]: heuristic checks for URLs about to be encoded
//! - [`copywriter`]: canned call-to-action copy by industry and tone

pub mod cli;
pub mod color;
pub mod config;
pub mod copywriter;
pub mod error;
pub mod pipeline;
pub mod preview;
pub mod safety;

pub use color::Color;
pub use config::{Config, ExtractConfig};
pub use error::{BrandError, Result};
pub use pipeline::extract::{extract_dominant_color, BrandColor};
pub use safety::{check_url, classify_url, RiskSignal, SafetyReport};
