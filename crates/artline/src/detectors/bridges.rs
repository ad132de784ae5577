//! Bridge detection
//!
//! A parenthesis with a dash on both sides is a vertical line hopping over a
//! horizontal one:
//!
//! ```text
//!   |
//! --)--
//!   |
//! ```

use tracing::{debug, span, Level};

use crate::core::{
    Bridge, BridgeSide, Chop, Detector, Drawable, Glyphs, Grid, LineSegment, Position, Sweep,
};

/// Side of the bridge at `pos`, if one is there
pub fn bridge_at<G: Glyphs + ?Sized>(g: &G, pos: Position) -> Option<BridgeSide> {
    if g.glyph(pos.west()) != '-' || g.glyph(pos.east()) != '-' {
        return None;
    }
    match g.glyph(pos) {
        '(' => Some(BridgeSide::West),
        ')' => Some(BridgeSide::East),
        _ => None,
    }
}

/// Emits bridges row-major, each after the half-steps above and below it
#[derive(Debug, Clone, Copy, Default)]
pub struct BridgeDetector;

impl BridgeDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Detector for BridgeDetector {
    fn name(&self) -> &'static str {
        "bridges"
    }

    fn detect(&self, grid: &Grid) -> Vec<Drawable> {
        let bridge_span = span!(Level::DEBUG, "detect_bridges");
        let _enter = bridge_span.enter();

        let mut drawables = Vec::new();
        for position in Sweep::RowMajor.positions(grid.width(), grid.height()) {
            let Some(side) = bridge_at(grid, position) else {
                continue;
            };
            drawables.push(LineSegment::half_step(position.north(), Chop::South).into());
            drawables.push(LineSegment::half_step(position.south(), Chop::North).into());
            drawables.push(Bridge { position, side }.into());
        }

        debug!(count = drawables.len() / 3, "Detected bridges");
        drawables
    }
}
