//! Terminal colorization for `inspect` output
//!
//! Applies ANSI escape codes to the graphics cells of a classified grid using
//! crossterm. Text cells are printed uncolored, so the output shows exactly
//! which characters the recognizer will draw.

use crossterm::style::{Color, Stylize};

use artline::core::glyphs::{is_dot, is_joint, is_shade, is_triangle, normalize};
use artline::{Grid, Position};

/// Terminal color for a graphics glyph, after dialect normalization
///
/// - Joints and rounded corners: Magenta
/// - Arrowheads: Yellow
/// - Circles: Green
/// - Shades: Blue
/// - Every other line glyph: Cyan
fn glyph_color(ch: char) -> Color {
    if is_dot(ch) {
        Color::Green
    } else if is_joint(ch) {
        Color::Magenta
    } else if is_triangle(ch) {
        Color::Yellow
    } else if is_shade(ch) {
        Color::Blue
    } else {
        Color::Cyan
    }
}

/// Reconstruct the padded grid with graphics cells colored
pub fn colorize_grid(grid: &Grid) -> String {
    let mut result = String::with_capacity(grid.width() * grid.height() * 4);

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let pos = Position::new(x as i32, y as i32);
            match grid.graphics().get(pos) {
                Some(ch) => {
                    let color = glyph_color(normalize(ch, grid.dialect()));
                    result.push_str(&format!("{}", ch.to_string().with(color)));
                }
                None => result.push(grid.original(pos)),
            }
        }
        result.push('\n');
    }

    result
}
