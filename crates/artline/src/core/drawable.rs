//! Drawing primitives produced by the detectors
//!
//! Every primitive carries grid positions only. Pixel geometry is derived
//! later by the geometry resolver, so these types stay cheap to compare in
//! tests.

use super::{
    BridgeSide, Chop, Corner, LineDirection, Orientation, Position, CELL_HEIGHT, CELL_WIDTH,
};

/// Radius of the arcs drawn for `╭ ╮ ╰ ╯`
pub const TIGHT_CORNER_RADIUS: i32 = CELL_WIDTH / 2;

/// Alignment corrections recorded by the line tracer's look-around pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Nudge {
    /// Extend the start one full cell west
    pub left: bool,
    /// Extend the stop one full cell east
    pub right: bool,
    /// Extend the start half a cell
    pub tiny_left: bool,
    /// Extend the stop half a cell
    pub tiny_right: bool,
    /// Drop the segment to the cell's baseline
    pub down: bool,
}

/// Where a box-drawing segment ends inside its end cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Cap {
    #[default]
    Center,
    /// At the cell edge: the end glyph has an arm leaving the run
    Edge,
    /// Short of the center, where a tight arc takes over
    Arc,
}

/// A straight segment between two cell centers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineSegment {
    pub start: Position,
    pub stop: Position,
    pub direction: LineDirection,
    /// A single mark drawn centered on its cell
    pub lonely: bool,
    pub chop: Option<Chop>,
    pub nudge: Nudge,
    /// Glyph seen at `start` when the segment was traced
    pub start_glyph: Option<char>,
    /// Glyph seen at `stop` when the segment was traced
    pub stop_glyph: Option<char>,
    pub start_cap: Cap,
    pub stop_cap: Cap,
}

impl LineSegment {
    pub fn new(start: Position, stop: Position, direction: LineDirection) -> Self {
        Self {
            start,
            stop,
            direction,
            lonely: false,
            chop: None,
            nudge: Nudge::default(),
            start_glyph: None,
            stop_glyph: None,
            start_cap: Cap::Center,
            stop_cap: Cap::Center,
        }
    }

    /// A lonely south segment covering the upper or lower half of `pos`
    pub fn half_step(pos: Position, chop: Chop) -> Self {
        Self {
            lonely: true,
            chop: Some(chop),
            ..Self::new(pos, pos.south(), LineDirection::South)
        }
    }

    /// Pixel shifts of the start and stop along the segment from their cell centers
    pub fn cap_shifts(&self) -> (i32, i32) {
        let half = match self.direction {
            LineDirection::South => CELL_HEIGHT / 2,
            _ => CELL_WIDTH / 2,
        };
        let shift = |cap: Cap, outward: i32| match cap {
            Cap::Center => 0,
            Cap::Edge => outward * half,
            Cap::Arc => -outward * TIGHT_CORNER_RADIUS,
        };
        (shift(self.start_cap, -1), shift(self.stop_cap, 1))
    }

    pub fn goes_somewhere(&self) -> bool {
        let (start, stop) = self.cap_shifts();
        self.start != self.stop || stop > start
    }
}

/// An arrowhead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle {
    pub position: Position,
    pub orientation: Orientation,
    /// Shift the arrowhead one cell so its tip touches the adjacent wall
    pub needs_nudging: bool,
}

/// A circle mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Circle {
    pub position: Position,
    /// Filled rather than hollow
    pub bold: bool,
}

/// A quarter-circle corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoundedCorner {
    pub position: Position,
    pub corner: Corner,
    /// Drawn inside its own cell with [`TIGHT_CORNER_RADIUS`], for `╭ ╮ ╰ ╯`
    pub tight: bool,
}

/// A vertical line hopping over a horizontal one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bridge {
    pub position: Position,
    pub side: BridgeSide,
}

/// A literal character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextRun {
    pub position: Position,
    pub ch: char,
}

/// Any recognized primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Drawable {
    Line(LineSegment),
    Triangle(Triangle),
    Circle(Circle),
    RoundedCorner(RoundedCorner),
    Bridge(Bridge),
    Text(TextRun),
}

impl Drawable {
    /// Short name of the primitive kind
    pub fn kind(&self) -> &'static str {
        match self {
            Drawable::Line(_) => "line",
            Drawable::Triangle(_) => "triangle",
            Drawable::Circle(_) => "circle",
            Drawable::RoundedCorner(_) => "rounded_corner",
            Drawable::Bridge(_) => "bridge",
            Drawable::Text(_) => "text",
        }
    }
}

impl From<LineSegment> for Drawable {
    fn from(value: LineSegment) -> Self {
        Drawable::Line(value)
    }
}

impl From<Triangle> for Drawable {
    fn from(value: Triangle) -> Self {
        Drawable::Triangle(value)
    }
}

impl From<Circle> for Drawable {
    fn from(value: Circle) -> Self {
        Drawable::Circle(value)
    }
}

impl From<RoundedCorner> for Drawable {
    fn from(value: RoundedCorner) -> Self {
        Drawable::RoundedCorner(value)
    }
}

impl From<Bridge> for Drawable {
    fn from(value: Bridge) -> Self {
        Drawable::Bridge(value)
    }
}

impl From<TextRun> for Drawable {
    fn from(value: TextRun) -> Self {
        Drawable::Text(value)
    }
}

/// The ordered primitive list for one grid
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Diagram {
    pub width: usize,
    pub height: usize,
    pub drawables: Vec<Drawable>,
}

impl Diagram {
    pub fn lines(&self) -> impl Iterator<Item = &LineSegment> {
        self.drawables.iter().filter_map(|d| match d {
            Drawable::Line(line) => Some(line),
            _ => None,
        })
    }

    pub fn triangles(&self) -> impl Iterator<Item = &Triangle> {
        self.drawables.iter().filter_map(|d| match d {
            Drawable::Triangle(triangle) => Some(triangle),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = &Circle> {
        self.drawables.iter().filter_map(|d| match d {
            Drawable::Circle(circle) => Some(circle),
            _ => None,
        })
    }

    pub fn rounded_corners(&self) -> impl Iterator<Item = &RoundedCorner> {
        self.drawables.iter().filter_map(|d| match d {
            Drawable::RoundedCorner(corner) => Some(corner),
            _ => None,
        })
    }

    pub fn bridges(&self) -> impl Iterator<Item = &Bridge> {
        self.drawables.iter().filter_map(|d| match d {
            Drawable::Bridge(bridge) => Some(bridge),
            _ => None,
        })
    }

    pub fn text(&self) -> impl Iterator<Item = &TextRun> {
        self.drawables.iter().filter_map(|d| match d {
            Drawable::Text(text) => Some(text),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.drawables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drawables.is_empty()
    }
}
