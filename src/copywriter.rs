//! Offline marketing copy: canned lines per industry, restyled by tone.

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

// ASCII word boundaries: accented letters next to "scan" do not count as word characters.
static SCAN_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?-u:\b)scan(?-u:\b)").expect("valid regex"));
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));
static TRAILING_PERIOD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.\s*$").expect("valid regex"));

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Industry {
    Restaurant,
    Ecommerce,
    Education,
    #[default]
    Events,
}

impl Industry {
    pub fn templates(self) -> &'static [&'static str] {
        match self {
            Industry::Restaurant => &[
                "Explore seasonal dishes crafted daily — scan for menu + reservations.",
                "Fresh • Local • Hand-made — scan to order now.",
            ],
            Industry::Ecommerce => &[
                "Shop the drop — exclusive launch inside.",
                "Scan for fast checkout, limited stock.",
            ],
            Industry::Education => &[
                "Enroll in our next cohort — scan for syllabus + dates.",
                "Learn faster with micro-lessons — scan to preview.",
            ],
            Industry::Events => &[
                "Your pass to VIP perks — scan to add to calendar.",
                "Find stage times, maps, and offers — scan inside.",
            ],
        }
    }
}

impl FromStr for Industry {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "restaurant" => Ok(Industry::Restaurant),
            "ecommerce" => Ok(Industry::Ecommerce),
            "education" => Ok(Industry::Education),
            "events" => Ok(Industry::Events),
            other => Err(format!("unknown industry: {other}")),
        }
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Friendly,
    Bold,
    Luxury,
}

impl Tone {
    pub fn apply(self, text: &str) -> String {
        match self {
            Tone::Friendly => text.to_string(),
            Tone::Bold => SCAN_WORD.replace_all(text, "SCAN").replace('—', " — "),
            Tone::Luxury => format!("◦ {} ◦", SCAN_WORD.replace_all(text, "discover")),
        }
    }
}

impl FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "friendly" => Ok(Tone::Friendly),
            "bold" => Ok(Tone::Bold),
            "luxury" => Ok(Tone::Luxury),
            other => Err(format!("unknown tone: {other}")),
        }
    }
}

/// Pick template `variant` (wrapping) for `industry` and restyle it.
pub fn suggest_content(industry: Industry, tone: Tone, variant: usize) -> String {
    let templates = industry.templates();
    tone.apply(templates[variant % templates.len()])
}

/// Normalize user-written copy into a single sentence, then restyle it.
pub fn improve_copy(text: &str, tone: Tone) -> String {
    if text.is_empty() {
        return String::new();
    }
    let collapsed = WHITESPACE_RUN.replace_all(text.trim(), " ");
    let stripped = TRAILING_PERIOD.replace(&collapsed, "");

    let mut chars = stripped.chars();
    let mut out = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => String::new(),
    };
    out.push('.');
    tone.apply(&out)
}
