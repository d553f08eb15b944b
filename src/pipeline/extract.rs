use std::collections::HashMap;
use std::path::Path;

use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgba, RgbaImage};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::color::Color;
use crate::config::ExtractConfig;
use crate::error::{BrandError, Result};

/// A coarse color cell: each channel keeps only its high 4 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bucket {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Bucket {
    /// Used when no pixel survives the alpha filter. Reconstructs to `#888888`.
    pub const NEUTRAL: Bucket = Bucket { r: 8, g: 8, b: 8 };

    pub fn of(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r >> 4,
            g: g >> 4,
            b: b >> 4,
        }
    }

    /// Representative color at the center of the cell.
    pub fn center(self) -> Color {
        let expand = |q: u8| ((q as i32) << 4) + 8;
        Color::from_clamped(expand(self.r), expand(self.g), expand(self.b))
    }
}

/// Dominant brand color and the gradient derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrandColor {
    pub color: Color,
    pub tint: Color,
    pub gradient: String,
}

impl BrandColor {
    pub fn from_primary(color: Color, tint_amount: f32) -> Self {
        let tint = color.tint(tint_amount);
        let gradient = format!("linear-gradient(135deg, {color} 0%, {tint} 100%)");
        Self {
            color,
            tint,
            gradient,
        }
    }
}

/// Decode `bytes` as an image and find its dominant color.
///
/// Input longer than `max_input_bytes` is rejected before decoding.
pub fn extract_dominant_color(bytes: &[u8], max_input_bytes: u64) -> Result<BrandColor> {
    let config = ExtractConfig {
        max_input_bytes,
        ..ExtractConfig::default()
    };
    extract_with_config(bytes, &config)
}

pub fn extract_with_config(bytes: &[u8], config: &ExtractConfig) -> Result<BrandColor> {
    check_size(bytes.len() as u64, config.max_input_bytes)?;
    let img = image::load_from_memory(bytes)?;
    Ok(extract_from_image(&img, config))
}

/// Same as [`extract_with_config`], reading from disk. The size ceiling is
/// checked against file metadata so oversized files are never read.
pub fn extract_from_path(path: &Path, config: &ExtractConfig) -> Result<BrandColor> {
    let size = std::fs::metadata(path)
        .map_err(|e| BrandError::io(path, e))?
        .len();
    check_size(size, config.max_input_bytes)?;
    let bytes = std::fs::read(path).map_err(|e| BrandError::io(path, e))?;
    extract_with_config(&bytes, config)
}

/// Run the bucket vote on an already decoded image.
pub fn extract_from_image(img: &DynamicImage, config: &ExtractConfig) -> BrandColor {
    let sample = downscale(img, config.sample_side);
    let bucket = dominant_bucket(&sample, config.alpha_threshold).unwrap_or_else(|| {
        warn!("no opaque pixels in sample, using neutral gray");
        Bucket::NEUTRAL
    });
    let brand = BrandColor::from_primary(bucket.center(), config.tint_amount);
    info!(color = %brand.color, tint = %brand.tint, "extracted brand color");
    brand
}

/// Count pixels per bucket and return the most populated one.
///
/// Ties go to the bucket that appeared first in row-major scan order.
/// Returns `None` when every pixel is below `alpha_threshold`.
pub fn dominant_bucket(pixels: &RgbaImage, alpha_threshold: u8) -> Option<Bucket> {
    let mut slots: HashMap<Bucket, usize> = HashMap::new();
    let mut counts: Vec<(Bucket, u32)> = Vec::new();

    for pixel in pixels.pixels() {
        let [r, g, b, a] = pixel.0;
        if a < alpha_threshold {
            continue;
        }
        let bucket = Bucket::of(r, g, b);
        let slot = *slots.entry(bucket).or_insert_with(|| {
            counts.push((bucket, 0));
            counts.len() - 1
        });
        counts[slot].1 += 1;
    }

    let mut best: Option<(Bucket, u32)> = None;
    for &(bucket, count) in &counts {
        if best.map_or(true, |(_, top)| count > top) {
            best = Some((bucket, count));
        }
    }

    debug!(
        buckets = counts.len(),
        winner = ?best,
        "bucketed {} pixels",
        pixels.width() * pixels.height()
    );
    best.map(|(bucket, _)| bucket)
}

fn check_size(size: u64, max: u64) -> Result<()> {
    if size > max {
        return Err(BrandError::InputTooLarge { size, max });
    }
    Ok(())
}

/// Stretch to a `side` x `side` square, ignoring aspect ratio.
///
/// Resampling runs on premultiplied alpha so transparent pixels contribute
/// no color to their neighbours.
fn downscale(img: &DynamicImage, side: u32) -> RgbaImage {
    if img.width() == side && img.height() == side {
        return img.to_rgba8();
    }

    let mut premultiplied = img.to_rgba32f();
    for pixel in premultiplied.pixels_mut() {
        let a = pixel[3];
        pixel[0] *= a;
        pixel[1] *= a;
        pixel[2] *= a;
    }
    let resized = imageops::resize(&premultiplied, side, side, FilterType::Triangle);

    RgbaImage::from_fn(side, side, |x, y| {
        let [r, g, b, a] = resized.get_pixel(x, y).0;
        let alpha = to_byte(a);
        if alpha == 0 {
            return Rgba([0, 0, 0, 0]);
        }
        Rgba([to_byte(r / a), to_byte(g / a), to_byte(b / a), alpha])
    })
}

fn to_byte(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
