//! Arrowhead detection
//!
//! `^` and `v` point along an adjoining diagonal when one is present. When
//! the cell an arrowhead points at is a wall, the arrowhead is nudged to
//! touch it and a short tail segment is emitted to close the gap.

use tracing::{debug, span, Level};

use crate::core::glyphs::{is_dot, is_joint, is_triangle};
use crate::core::{
    Chop, Detector, Drawable, Glyphs, Grid, LineDirection, LineSegment, Orientation, Position,
    Sweep, Triangle,
};

/// Orientation of the arrowhead at `pos`, if the glyph there is one
pub fn orientation_at<G: Glyphs + ?Sized>(g: &G, pos: Position) -> Option<Orientation> {
    let orientation = match g.glyph(pos) {
        //  ^    ^
        // /      \
        '^' if g.glyph(pos.south_west()) == '/' => Orientation::NorthEast,
        '^' if g.glyph(pos.south_east()) == '\\' => Orientation::NorthWest,
        '^' => Orientation::North,
        // |
        // v
        'v' if g.glyph(pos.north()) == '|' => Orientation::South,
        //  /    \
        // v      v
        'v' if g.glyph(pos.north_east()) == '/' => Orientation::SouthWest,
        'v' if g.glyph(pos.north_west()) == '\\' => Orientation::SouthEast,
        'v' => Orientation::South,
        '<' => Orientation::West,
        '>' => Orientation::East,
        _ => return None,
    };
    Some(orientation)
}

/// A wall an arrowhead should be pushed against
fn is_wall(ch: char) -> bool {
    ch == '-' || (is_joint(ch) && !is_dot(ch))
}

/// Tail segment joining the arrowhead to the wall it points at, if any
///
/// Sideways arrowheads never get a tail; they are nudged only toward an
/// adjacent circle.
fn tail(g: &impl Glyphs, pos: Position, orientation: Orientation) -> (bool, Option<LineSegment>) {
    let diagonal = |start: Position, stop: Position, direction| {
        Some(LineSegment::new(start, stop, direction))
    };
    match orientation {
        Orientation::North if is_wall(g.glyph(pos.north())) => {
            (true, Some(LineSegment::half_step(pos, Chop::North)))
        }
        Orientation::South if is_wall(g.glyph(pos.south())) => {
            (true, Some(LineSegment::half_step(pos, Chop::South)))
        }
        Orientation::NorthWest if is_wall(g.glyph(pos.north_west())) => {
            (true, diagonal(pos.north_west(), pos, LineDirection::SouthEast))
        }
        Orientation::NorthEast if is_wall(g.glyph(pos.north_east())) => {
            (true, diagonal(pos, pos.north_east(), LineDirection::NorthEast))
        }
        Orientation::SouthEast if is_wall(g.glyph(pos.south_east())) => {
            (true, diagonal(pos, pos.south_east(), LineDirection::SouthEast))
        }
        Orientation::SouthWest if is_wall(g.glyph(pos.south_west())) => {
            (true, diagonal(pos.south_west(), pos, LineDirection::NorthEast))
        }
        Orientation::West => (is_dot(g.glyph(pos.west())), None),
        Orientation::East => (is_dot(g.glyph(pos.east())), None),
        _ => (false, None),
    }
}

/// Emits arrowheads column-major, each preceded by its tail
#[derive(Debug, Clone, Copy, Default)]
pub struct TriangleDetector;

impl TriangleDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Detector for TriangleDetector {
    fn name(&self) -> &'static str {
        "triangles"
    }

    fn detect(&self, grid: &Grid) -> Vec<Drawable> {
        let triangle_span = span!(Level::DEBUG, "detect_triangles");
        let _enter = triangle_span.enter();

        let mut drawables = Vec::new();
        let mut count = 0;
        for position in Sweep::ColumnMajor.positions(grid.width(), grid.height()) {
            if !is_triangle(grid.glyph(position)) {
                continue;
            }
            let Some(orientation) = orientation_at(grid, position) else {
                continue;
            };
            let (needs_nudging, tail) = tail(grid, position, orientation);
            if let Some(tail) = tail {
                drawables.push(tail.into());
            }
            drawables.push(
                Triangle {
                    position,
                    orientation,
                    needs_nudging,
                }
                .into(),
            );
            count += 1;
        }

        debug!(count, tails = drawables.len() - count, "Detected triangles");
        drawables
    }
}
