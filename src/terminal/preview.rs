//! Portrait preview: render a raster as truecolor half-blocks.
//!
//! Two pixel rows share one terminal row via `▀`, with the upper pixel
//! on the foreground and the lower on the background.

use crate::avatar::{Raster, Rgb};
use crossterm::style::{Color, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::Command;

const fn to_term(color: Rgb) -> Color {
    Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

/// Render the raster into an ANSI string, ready to print.
pub fn render_raster(raster: &Raster) -> String {
    let mut out = String::new();
    let mut y = 0;
    while y < raster.height() {
        for x in 0..raster.width() {
            let top = raster.get(x, y).unwrap_or(Rgb::BLACK);
            let bottom = raster.get(x, y + 1).unwrap_or(Rgb::BLACK);
            let _ = SetForegroundColor(to_term(top)).write_ansi(&mut out);
            let _ = SetBackgroundColor(to_term(bottom)).write_ansi(&mut out);
            out.push('▀');
        }
        let _ = ResetColor.write_ansi(&mut out);
        out.push('\n');
        y += 2;
    }
    out
}
