use crossterm::style::{Color as TermColor, Stylize};

use crate::color::Color;
use crate::pipeline::extract::BrandColor;

const SWATCH_WIDTH: usize = 16;

fn to_term(c: Color) -> TermColor {
    TermColor::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

/// One colored block with the hex centered in a readable foreground.
fn swatch_line(label: &str, c: Color) -> String {
    let text = format!("{:^width$}", c.to_hex(), width = SWATCH_WIDTH);
    let block = text.with(to_term(c.contrast_text())).on(to_term(c)).bold();
    format!("  {label:<8}{block}")
}

/// Colored terminal preview of a brand color and its gradient endpoint.
pub fn render_swatch(brand: &BrandColor) -> String {
    format!(
        "{}\n{}\n",
        swatch_line("primary", brand.color),
        swatch_line("tint", brand.tint)
    )
}
