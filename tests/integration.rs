use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

use brandkit::config::ExtractConfig;
use brandkit::pipeline::extract::{extract_dominant_color, extract_from_path};
use brandkit::{check_url, BrandError, RiskSignal};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn create_logo(path: &Path) {
    // Orange disc on a transparent background; the disc covers most of the
    // opaque area so it should win the bucket vote.
    let img = image::RgbaImage::from_fn(80, 80, |x, y| {
        let dx = x as i32 - 40;
        let dy = y as i32 - 40;
        if dx * dx + dy * dy < 30 * 30 {
            if (x / 10 + y / 10) % 7 == 0 {
                image::Rgba([250, 250, 250, 255])
            } else {
                image::Rgba([232, 120, 24, 255])
            }
        } else {
            image::Rgba([0, 0, 0, 0])
        }
    });
    img.save(path).unwrap();
}

fn create_transparent(path: &Path) {
    let img = image::RgbaImage::from_pixel(40, 40, image::Rgba([12, 34, 56, 0]));
    img.save(path).unwrap();
}

fn fixtures() -> (tempfile::TempDir, PathBuf, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let logo = dir.path().join("logo.png");
    let clear = dir.path().join("clear.png");
    create_logo(&logo);
    create_transparent(&clear);
    (dir, logo, clear)
}

fn is_hex(s: &str) -> bool {
    s.len() == 7
        && s.starts_with('#')
        && s[1..].chars().all(|c| matches!(c, '0'..='9' | 'a'..='f'))
}

fn brandkit() -> Command {
    Command::cargo_bin("brandkit").unwrap()
}

// ---------------------------------------------------------------------------
// Library
// ---------------------------------------------------------------------------

#[test]
fn logo_yields_orange_brand_color() {
    let (_dir, logo, _) = fixtures();
    let brand = extract_from_path(&logo, &ExtractConfig::default()).unwrap();

    assert!(is_hex(&brand.color.to_hex()));
    assert!(brand.color.r > 180, "expected strong red channel: {}", brand.color);
    assert!(brand.color.b < 60, "expected weak blue channel: {}", brand.color);
    assert!(brand.gradient.starts_with("linear-gradient(135deg, "));
    assert!(brand.gradient.ends_with(" 100%)"));
}

#[test]
fn bytes_and_path_agree() {
    let (_dir, logo, _) = fixtures();
    let bytes = std::fs::read(&logo).unwrap();
    let from_bytes = extract_dominant_color(&bytes, 5_242_880).unwrap();
    let from_path = extract_from_path(&logo, &ExtractConfig::default()).unwrap();
    assert_eq!(from_bytes, from_path);
}

#[test]
fn transparent_image_uses_neutral_gray() {
    let (_dir, _, clear) = fixtures();
    let brand = extract_from_path(&clear, &ExtractConfig::default()).unwrap();
    assert_eq!(brand.color.to_hex(), "#888888");
}

#[test]
fn json_shape_of_brand_color() {
    let (_dir, _, clear) = fixtures();
    let brand = extract_from_path(&clear, &ExtractConfig::default()).unwrap();
    let json = serde_json::to_value(&brand).unwrap();
    assert_eq!(json["color"], "#888888");
    assert_eq!(json["tint"], "#a6a6a6");
    assert_eq!(
        json["gradient"],
        "linear-gradient(135deg, #888888 0%, #a6a6a6 100%)"
    );
}

#[test]
fn oversized_file_is_rejected() {
    let (_dir, logo, _) = fixtures();
    let config = ExtractConfig {
        max_input_bytes: 16,
        ..ExtractConfig::default()
    };
    let err = extract_from_path(&logo, &config).unwrap_err();
    assert!(matches!(err, BrandError::InputTooLarge { max: 16, .. }));
}

#[test]
fn url_table() {
    let cases: [(&str, bool, bool, &[RiskSignal]); 7] = [
        ("", false, true, &[]),
        ("hello world", false, true, &[]),
        ("https://example.com", true, true, &[]),
        ("http://example.com", true, false, &[RiskSignal::NotHttps]),
        ("https://a@b.com", true, false, &[RiskSignal::AtSign]),
        ("https://192.168.0.1", true, false, &[RiskSignal::RawIpAddress]),
        ("https://site.zip", true, false, &[RiskSignal::RiskyTld]),
    ];
    for (input, is_url, ok, reasons) in cases {
        let report = check_url(input);
        assert_eq!(report.is_url, is_url, "is_url for {input:?}");
        assert_eq!(report.ok, ok, "ok for {input:?}");
        assert_eq!(report.reasons, reasons, "reasons for {input:?}");
    }
}

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

#[test]
fn cli_brand_prints_gradient() {
    let (_dir, _, clear) = fixtures();
    brandkit()
        .arg("brand")
        .arg(&clear)
        .assert()
        .success()
        .stdout(predicate::str::contains("color = #888888"))
        .stdout(predicate::str::contains(
            "gradient = linear-gradient(135deg, #888888 0%, #a6a6a6 100%)",
        ));
}

#[test]
fn cli_brand_respects_max_bytes() {
    let (_dir, logo, _) = fixtures();
    brandkit()
        .args(["brand", "--max-bytes", "8"])
        .arg(&logo)
        .assert()
        .failure()
        .stderr(predicate::str::contains("File too large"));
}

#[test]
fn cli_brand_reads_config_file() {
    let (dir, logo, _) = fixtures();
    let config = dir.path().join("brandkit.toml");
    std::fs::write(&config, "[extract]\nmax_input_bytes = 8\n").unwrap();
    brandkit()
        .arg("--config")
        .arg(&config)
        .arg("brand")
        .arg(&logo)
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

#[test]
fn cli_brand_rejects_non_image() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "this is not an image").unwrap();
    brandkit()
        .arg("brand")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not read the image"));
}

#[test]
fn cli_check_url_json() {
    let output = brandkit()
        .args(["check-url", "http://192.168.0.1", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "isUrl": true,
            "ok": false,
            "reasons": ["Raw IP address", "Not HTTPS"]
        })
    );
}

#[test]
fn cli_check_url_plain_text() {
    brandkit()
        .args(["check-url", "hello world"])
        .assert()
        .success()
        .stdout("not a URL\n");
}

#[test]
fn cli_suggest_uses_config_tone() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("brandkit.toml");
    std::fs::write(&config, "[copy]\nindustry = \"ecommerce\"\ntone = \"bold\"\n").unwrap();
    brandkit()
        .arg("--config")
        .arg(&config)
        .args(["suggest", "--variant", "1"])
        .assert()
        .success()
        .stdout("SCAN for fast checkout, limited stock.\n");
}

#[test]
fn cli_improve_copy() {
    brandkit()
        .args(["improve", "  scan   for deals. ", "--tone", "luxury"])
        .assert()
        .success()
        .stdout("◦ discover for deals. ◦\n");
}
