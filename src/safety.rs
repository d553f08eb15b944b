//! Heuristic safety checks for URLs about to be encoded into a QR code.
//!
//! Non-URL text is never flagged. URLs collect zero or more [`RiskSignal`]s
//! in a fixed evaluation order, and any signal marks the URL as not ok.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(https?://|www\.)[^\s/$.?#].[^\s]*$").expect("valid regex"));

static DOTTED_QUAD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:[0-9]{1,3}\.){3}[0-9]{1,3}").expect("valid regex"));

const RISKY_SUFFIXES: [&str; 3] = [".zip", ".mov", ".xyz"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RiskSignal {
    #[serde(rename = "Uncommon or risky TLD")]
    RiskyTld,
    #[serde(rename = "Suspicious @ in URL")]
    AtSign,
    #[serde(rename = "Raw IP address")]
    RawIpAddress,
    #[serde(rename = "Not HTTPS")]
    NotHttps,
}

impl RiskSignal {
    pub fn label(self) -> &'static str {
        match self {
            RiskSignal::RiskyTld => "Uncommon or risky TLD",
            RiskSignal::AtSign => "Suspicious @ in URL",
            RiskSignal::RawIpAddress => "Raw IP address",
            RiskSignal::NotHttps => "Not HTTPS",
        }
    }
}

impl std::fmt::Display for RiskSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyReport {
    pub is_url: bool,
    pub ok: bool,
    pub reasons: Vec<RiskSignal>,
}

impl SafetyReport {
    fn clean(is_url: bool) -> Self {
        Self {
            is_url,
            ok: true,
            reasons: Vec::new(),
        }
    }

    pub fn has(&self, signal: RiskSignal) -> bool {
        self.reasons.contains(&signal)
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.reasons.iter().map(|r| r.label()).collect()
    }
}

/// Classify `candidate`. `None` behaves like an empty string.
pub fn classify_url(candidate: Option<&str>) -> SafetyReport {
    let url = candidate
        .unwrap_or_default()
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if url.is_empty() || !URL_PATTERN.is_match(url) {
        return SafetyReport::clean(false);
    }

    let mut report = SafetyReport::clean(true);
    let s = url.to_lowercase();

    // TLD and '@' fail the report on the spot; the others only through the
    // non-empty reasons rule at the end.
    if RISKY_SUFFIXES.iter().any(|suffix| s.ends_with(suffix)) {
        report.ok = false;
        report.reasons.push(RiskSignal::RiskyTld);
    }
    if s.contains('@') {
        report.ok = false;
        report.reasons.push(RiskSignal::AtSign);
    }
    if DOTTED_QUAD.is_match(&s) {
        report.reasons.push(RiskSignal::RawIpAddress);
    }
    if !s.starts_with("https://") {
        report.reasons.push(RiskSignal::NotHttps);
    }

    if !report.reasons.is_empty() {
        report.ok = false;
    }
    report
}

pub fn check_url(candidate: &str) -> SafetyReport {
    classify_url(Some(candidate))
}
