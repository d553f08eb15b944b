use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::copywriter::{Industry, Tone};

/// Offline brand helpers for QR codes: logo colors, URL checks, and copy.
#[derive(Parser, Debug)]
#[command(name = "brandkit", version, about)]
pub struct Args {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Load settings from a TOML file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Extract the dominant brand color and gradient from a logo
    Brand {
        /// Path to the input image
        image: PathBuf,

        /// Reject inputs larger than this many bytes
        #[arg(long)]
        max_bytes: Option<u64>,

        /// Print a colored terminal preview of the result
        #[arg(long)]
        preview: bool,
    },

    /// Check a QR payload for risky URL patterns
    CheckUrl {
        /// Text or URL to check
        text: String,
    },

    /// Suggest call-to-action copy
    Suggest {
        #[arg(short, long, value_enum)]
        industry: Option<Industry>,

        #[arg(short, long, value_enum)]
        tone: Option<Tone>,

        /// Which template to use (wraps around)
        #[arg(long, default_value_t = 0)]
        variant: usize,
    },

    /// Tidy up user-written copy and restyle it
    Improve {
        text: String,

        #[arg(short, long, value_enum)]
        tone: Option<Tone>,
    },
}
