//! Geometry resolution
//!
//! Turns grid-positioned primitives into pixel shapes. Every alignment
//! correction recorded by the detectors is applied here, so a renderer only
//! has to serialize coordinates.

use crate::core::glyphs::is_shade;
use crate::core::{
    Bridge, BridgeSide, Chop, Circle, Corner, Drawable, LineDirection, LineSegment, Orientation,
    Pixel, RoundedCorner, TextRun, Triangle, TIGHT_CORNER_RADIUS,
};

/// Radius of a circle mark
pub const CIRCLE_RADIUS: i32 = 6;

/// Radius of a rounded corner arc
pub const CORNER_RADIUS: i32 = 16;

/// Radius of a bridge arc
pub const BRIDGE_RADIUS: i32 = 9;

/// Half-width of an arrowhead's base
const TRIANGLE_HALF_BASE: f64 = 0.35 * 16.0;

/// Backoff from a hollow circle's center along an axis
const BACKOFF_ORTHO: i32 = 6;
/// Horizontal backoff from a hollow circle's center along a diagonal
const BACKOFF_DIAG_X: i32 = 3;
/// Vertical backoff from a hollow circle's center along a diagonal
const BACKOFF_DIAG_Y: i32 = 5;

/// Fill of a shade block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadeFill {
    /// The current stroke colour
    Solid,
    /// A fixed grey with equal red, green and blue channels
    Gray(u8),
}

/// A primitive resolved to pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// A straight stroke
    Path { start: Pixel, stop: Pixel },
    /// A circular arc stroke
    Arc {
        start: Pixel,
        stop: Pixel,
        radius: i32,
        sweep: bool,
    },
    /// A filled arrowhead, drawn pointing east and then rotated about `pivot`
    Polygon {
        points: [(f64, f64); 3],
        rotation: f64,
        pivot: Pixel,
    },
    Circle {
        center: Pixel,
        radius: i32,
        filled: bool,
    },
    /// A single character anchored at its baseline center
    Glyph { at: Pixel, ch: char },
    /// A filled 8x16 cell; `origin` is the top left corner
    Shade { origin: Pixel, fill: ShadeFill },
}

/// Resolve one primitive
pub fn resolve(drawable: &Drawable) -> Shape {
    match drawable {
        Drawable::Line(line) => resolve_line(line),
        Drawable::Triangle(triangle) => resolve_triangle(triangle),
        Drawable::Circle(circle) => resolve_circle(circle),
        Drawable::RoundedCorner(corner) => resolve_corner(corner),
        Drawable::Bridge(bridge) => resolve_bridge(bridge),
        Drawable::Text(text) => resolve_text(text),
    }
}

/// Endpoints of a line after every correction
pub fn resolve_line(line: &LineSegment) -> Shape {
    let mut start = line.start.to_pixel();
    let mut stop = line.stop.to_pixel();
    let direction = line.direction;

    if line.lonely {
        let (dx, dy) = match direction {
            LineDirection::NorthEast => (-4, 8),
            LineDirection::SouthEast => (-4, -8),
            LineDirection::South => (0, -8),
            LineDirection::East => (0, 0),
        };
        start = start.offset(dx, dy);
        stop = stop.offset(dx, dy);

        match line.chop {
            Some(Chop::North) => stop.y -= 8,
            Some(Chop::South) => start.y += 8,
            None => {}
        }
    }

    let nudge = line.nudge;
    if nudge.down {
        stop.y += 8;
        if direction.is_horizontal() {
            start.y += 8;
        }
    }
    if nudge.left {
        start.x -= 8;
    }
    if nudge.right {
        stop.x += 8;
    }
    if nudge.tiny_left {
        start.x -= 4;
        match direction {
            LineDirection::NorthEast => start.y += 8,
            LineDirection::SouthEast => start.y -= 8,
            _ => {}
        }
    }
    if nudge.tiny_right {
        stop.x += 4;
        match direction {
            LineDirection::NorthEast => stop.y -= 8,
            LineDirection::SouthEast => stop.y += 8,
            _ => {}
        }
    }

    let (start_shift, stop_shift) = line.cap_shifts();
    if direction == LineDirection::South {
        start.y += start_shift;
        stop.y += stop_shift;
    } else {
        start.x += start_shift;
        stop.x += stop_shift;
    }

    // Meet a hollow circle at its rim.
    let (dx, dy) = match direction {
        LineDirection::East => (BACKOFF_ORTHO, 0),
        LineDirection::South => (0, BACKOFF_ORTHO),
        LineDirection::NorthEast => (BACKOFF_DIAG_X, -BACKOFF_DIAG_Y),
        LineDirection::SouthEast => (BACKOFF_DIAG_X, BACKOFF_DIAG_Y),
    };
    if line.start_glyph == Some('o') {
        start = start.offset(dx, dy);
    }
    if line.stop_glyph == Some('o') {
        stop = stop.offset(-dx, -dy);
    }

    Shape::Path { start, stop }
}

/// Arrowhead polygon and its rotation
pub fn resolve_triangle(triangle: &Triangle) -> Shape {
    let pivot = triangle.position.to_pixel();
    let (x, y) = (f64::from(pivot.x), f64::from(pivot.y));

    let rotation = match triangle.orientation {
        Orientation::East => 0.0,
        Orientation::SouthEast => 60.0,
        Orientation::South => 90.0,
        Orientation::SouthWest => 120.0,
        Orientation::West => 180.0,
        Orientation::NorthWest => 240.0,
        Orientation::North => 270.0,
        Orientation::NorthEast => 300.0,
    };

    // The shift happens before rotation, so it is always along x.
    let shift = match triangle.orientation {
        o if o.is_diagonal() => 4.0 + if triangle.needs_nudging { 6.0 } else { 0.0 },
        Orientation::North | Orientation::South if triangle.needs_nudging => 8.0,
        Orientation::East | Orientation::West if triangle.needs_nudging => -8.0,
        _ => 0.0,
    };

    let points = [
        (x + 8.0 + shift, y),
        (x - 4.0 + shift, y - TRIANGLE_HALF_BASE),
        (x - 4.0 + shift, y + TRIANGLE_HALF_BASE),
    ];

    Shape::Polygon {
        points,
        rotation,
        pivot,
    }
}

pub fn resolve_circle(circle: &Circle) -> Shape {
    Shape::Circle {
        center: circle.position.to_pixel(),
        radius: CIRCLE_RADIUS,
        filled: circle.bold,
    }
}

/// Quarter-circle arc between the centers of the corner's two arms
///
/// A tight corner stays inside its cell, joining the capped ends of the box
/// segments that leave it.
pub fn resolve_corner(corner: &RoundedCorner) -> Shape {
    let p = corner.position.to_pixel();
    if corner.tight {
        let r = TIGHT_CORNER_RADIUS;
        let (start, stop, sweep) = match corner.corner {
            Corner::NorthWest => (p.offset(r, 0), p.offset(0, r), false),
            Corner::NorthEast => (p.offset(-r, 0), p.offset(0, r), true),
            Corner::SouthEast => (p.offset(0, -r), p.offset(-r, 0), true),
            Corner::SouthWest => (p.offset(0, -r), p.offset(r, 0), false),
        };
        return Shape::Arc {
            start,
            stop,
            radius: r,
            sweep,
        };
    }
    let (start, stop, sweep) = match corner.corner {
        Corner::NorthWest => (p.offset(8, 0), p.offset(-8, 16), false),
        Corner::NorthEast => (p.offset(-8, 0), p.offset(8, 16), true),
        Corner::SouthEast => (p.offset(8, -16), p.offset(-8, 0), true),
        Corner::SouthWest => (p.offset(-8, -16), p.offset(8, 0), false),
    };
    Shape::Arc {
        start,
        stop,
        radius: CORNER_RADIUS,
        sweep,
    }
}

pub fn resolve_bridge(bridge: &Bridge) -> Shape {
    let p = bridge.position.to_pixel();
    Shape::Arc {
        start: p.offset(0, -8),
        stop: p.offset(0, 8),
        radius: BRIDGE_RADIUS,
        sweep: bridge.side != BridgeSide::West,
    }
}

pub fn resolve_text(text: &TextRun) -> Shape {
    let p = text.position.to_pixel();
    if is_shade(text.ch) {
        let fill = match text.ch {
            '▓' => ShadeFill::Gray(64),
            '▒' => ShadeFill::Gray(128),
            '░' => ShadeFill::Gray(191),
            _ => ShadeFill::Solid,
        };
        return Shape::Shade {
            origin: p.offset(-4, -8),
            fill,
        };
    }
    Shape::Glyph {
        at: p.offset(0, 4),
        ch: text.ch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Cap, Nudge, Position};

    fn path(shape: Shape) -> ((i32, i32), (i32, i32)) {
        match shape {
            Shape::Path { start, stop } => ((start.x, start.y), (stop.x, stop.y)),
            other => panic!("Expected path, got {:?}", other),
        }
    }

    #[test]
    fn test_plain_segment() {
        let line = LineSegment::new(Position::new(1, 2), Position::new(4, 2), LineDirection::East);
        assert_eq!(path(resolve_line(&line)), ((8, 32), (32, 32)));
    }

    #[test]
    fn test_half_steps() {
        let p = Position::new(2, 1);
        assert_eq!(
            path(resolve_line(&LineSegment::half_step(p, Chop::North))),
            ((16, 8), (16, 16))
        );
        assert_eq!(
            path(resolve_line(&LineSegment::half_step(p, Chop::South))),
            ((16, 16), (16, 24))
        );
    }

    #[test]
    fn test_lonely_diagonal_is_centered() {
        let line = LineSegment {
            lonely: true,
            ..LineSegment::new(Position::new(0, 1), Position::new(1, 0), LineDirection::NorthEast)
        };
        assert_eq!(path(resolve_line(&line)), ((-4, 24), (4, 8)));
    }

    #[test]
    fn test_baseline_drop_and_stretch() {
        let line = LineSegment {
            nudge: Nudge {
                down: true,
                left: true,
                right: true,
                ..Nudge::default()
            },
            ..LineSegment::new(Position::new(1, 0), Position::new(3, 0), LineDirection::East)
        };
        assert_eq!(path(resolve_line(&line)), ((0, 8), (32, 8)));
    }

    #[test]
    fn test_tiny_nudges_follow_the_diagonal() {
        let line = LineSegment {
            nudge: Nudge {
                tiny_left: true,
                tiny_right: true,
                ..Nudge::default()
            },
            ..LineSegment::new(Position::new(0, 0), Position::new(2, 2), LineDirection::SouthEast)
        };
        assert_eq!(path(resolve_line(&line)), ((-4, -8), (20, 40)));
    }

    #[test]
    fn test_hollow_circle_backoff() {
        let line = LineSegment {
            start_glyph: Some('o'),
            stop_glyph: Some('o'),
            ..LineSegment::new(Position::new(0, 0), Position::new(4, 0), LineDirection::East)
        };
        assert_eq!(path(resolve_line(&line)), ((6, 0), (26, 0)));

        let line = LineSegment {
            start_glyph: Some('o'),
            stop_glyph: Some('*'),
            ..LineSegment::new(Position::new(0, 2), Position::new(2, 0), LineDirection::NorthEast)
        };
        assert_eq!(path(resolve_line(&line)), ((3, 27), (16, 0)));
    }

    #[test]
    fn test_triangle_rotation_and_nudge() {
        let triangle = Triangle {
            position: Position::new(1, 1),
            orientation: Orientation::North,
            needs_nudging: true,
        };
        match resolve_triangle(&triangle) {
            Shape::Polygon {
                points,
                rotation,
                pivot,
            } => {
                assert_eq!(rotation, 270.0);
                assert_eq!(pivot, Pixel::new(8, 16));
                assert_eq!(points[0], (24.0, 16.0));
                assert!((points[1].1 - 10.4).abs() < 1e-9);
            }
            other => panic!("Expected polygon, got {:?}", other),
        }
    }

    #[test]
    fn test_diagonal_triangle_shift() {
        let triangle = Triangle {
            position: Position::new(0, 0),
            orientation: Orientation::SouthWest,
            needs_nudging: false,
        };
        match resolve_triangle(&triangle) {
            Shape::Polygon { points, rotation, .. } => {
                assert_eq!(rotation, 120.0);
                assert_eq!(points[0], (12.0, 0.0));
            }
            other => panic!("Expected polygon, got {:?}", other),
        }
    }

    #[test]
    fn test_corner_arcs() {
        let corner = RoundedCorner {
            position: Position::new(1, 1),
            corner: Corner::SouthEast,
            tight: false,
        };
        assert_eq!(
            resolve_corner(&corner),
            Shape::Arc {
                start: Pixel::new(16, 0),
                stop: Pixel::new(0, 16),
                radius: 16,
                sweep: true,
            }
        );
    }

    #[test]
    fn test_tight_corner_arcs() {
        let arc = |corner| {
            resolve_corner(&RoundedCorner {
                position: Position::new(1, 1),
                corner,
                tight: true,
            })
        };
        assert_eq!(
            arc(Corner::NorthWest),
            Shape::Arc {
                start: Pixel::new(12, 16),
                stop: Pixel::new(8, 20),
                radius: 4,
                sweep: false,
            }
        );
        assert_eq!(
            arc(Corner::SouthEast),
            Shape::Arc {
                start: Pixel::new(8, 12),
                stop: Pixel::new(4, 16),
                radius: 4,
                sweep: true,
            }
        );
    }

    #[test]
    fn test_box_segment_caps() {
        let line = LineSegment {
            start_cap: Cap::Arc,
            stop_cap: Cap::Edge,
            ..LineSegment::new(Position::new(0, 0), Position::new(0, 2), LineDirection::South)
        };
        assert_eq!(
            resolve_line(&line),
            Shape::Path {
                start: Pixel::new(0, 4),
                stop: Pixel::new(0, 40),
            }
        );
    }

    #[test]
    fn test_bridge_sweep() {
        let bridge = Bridge {
            position: Position::new(0, 1),
            side: BridgeSide::West,
        };
        assert_eq!(
            resolve_bridge(&bridge),
            Shape::Arc {
                start: Pixel::new(0, 8),
                stop: Pixel::new(0, 24),
                radius: 9,
                sweep: false,
            }
        );
    }

    #[test]
    fn test_text_and_shades() {
        let at = Position::new(2, 1);
        assert_eq!(
            resolve_text(&TextRun { position: at, ch: 'x' }),
            Shape::Glyph {
                at: Pixel::new(16, 20),
                ch: 'x'
            }
        );
        assert_eq!(
            resolve_text(&TextRun { position: at, ch: '▒' }),
            Shape::Shade {
                origin: Pixel::new(12, 8),
                fill: ShadeFill::Gray(128)
            }
        );
        assert_eq!(
            resolve_text(&TextRun { position: at, ch: '▉' }),
            Shape::Shade {
                origin: Pixel::new(12, 8),
                fill: ShadeFill::Solid
            }
        );
    }
}
