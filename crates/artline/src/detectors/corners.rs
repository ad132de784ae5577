//! Rounded corner detection
//!
//! Only `.`, `'` and `+` can be corners. A corner needs a horizontal arm on
//! one side and a vertical-like glyph one cell away on the diagonal below or
//! above the opposite side:
//!
//! ```text
//!  .-    -.     |    |
//! |        |  -'      '-
//! ```
//!
//! In the Unicode dialect the templates never apply: only the arc glyphs
//! `╭ ╮ ╰ ╯` are corners, each drawn as a tight arc inside its own cell.

use tracing::{debug, span, Level};

use crate::core::glyphs::is_dot;
use crate::core::{Corner, Detector, Drawable, Glyphs, Grid, Position, RoundedCorner, Sweep};

/// Quadrant of the rounded corner at `pos`, if any
///
/// Templates are tried NW, NE, SE, SW and the first match wins.
pub fn corner_at<G: Glyphs + ?Sized>(g: &G, pos: Position) -> Option<Corner> {
    let ch = g.glyph(pos);
    if !matches!(ch, '.' | '\'' | '+') {
        return None;
    }

    let opens_up = matches!(ch, '\'' | '+');
    let opens_down = matches!(ch, '.' | '+');

    let is_arm = |c: char| matches!(c, '-' | '+' | '_');
    let dash_right = is_arm(g.glyph(pos.east())) || g.glyph(pos.north_east()) == '_';
    let dash_left = is_arm(g.glyph(pos.west())) || g.glyph(pos.north_west()) == '_';

    let vertical_at = |p: Position| {
        let c = g.glyph(p);
        matches!(c, '|' | '+' | ')' | '(') || is_dot(c)
    };

    if opens_down && dash_right && vertical_at(pos.south_west()) {
        Some(Corner::NorthWest)
    } else if opens_down && dash_left && vertical_at(pos.south_east()) {
        Some(Corner::NorthEast)
    } else if opens_up && dash_left && vertical_at(pos.north_east()) {
        Some(Corner::SouthEast)
    } else if opens_up && dash_right && vertical_at(pos.north_west()) {
        Some(Corner::SouthWest)
    } else {
        None
    }
}

/// Rounded corner at `pos` as the grid's dialect reads it
pub fn rounded_corner_at(grid: &Grid, position: Position) -> Option<RoundedCorner> {
    if grid.dialect().is_ascii() {
        corner_at(grid, position).map(|corner| RoundedCorner {
            position,
            corner,
            tight: false,
        })
    } else {
        grid.arc_corner(position).map(|corner| RoundedCorner {
            position,
            corner,
            tight: true,
        })
    }
}

/// Emits a [`RoundedCorner`] for every corner cell, row-major
#[derive(Debug, Clone, Copy, Default)]
pub struct CornerDetector;

impl CornerDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Detector for CornerDetector {
    fn name(&self) -> &'static str {
        "rounded_corners"
    }

    fn detect(&self, grid: &Grid) -> Vec<Drawable> {
        let corner_span = span!(Level::DEBUG, "detect_rounded_corners");
        let _enter = corner_span.enter();

        let corners: Vec<Drawable> = Sweep::RowMajor
            .positions(grid.width(), grid.height())
            .filter_map(|position| rounded_corner_at(grid, position).map(Drawable::from))
            .collect();

        debug!(count = corners.len(), "Detected rounded corners");
        corners
    }
}
