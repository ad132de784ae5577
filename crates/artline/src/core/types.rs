//! Core type definitions for diagram recognition
//!
//! This module contains the fundamental value types used throughout artline:
//! grid positions, pixel points, the closed orientation sets carried by each
//! primitive, the input dialect, and render configuration.

use std::fmt;

/// Width of one grid cell in output units
pub const CELL_WIDTH: i32 = 8;

/// Height of one grid cell in output units
pub const CELL_HEIGHT: i32 = 16;

/// A cell coordinate: `x` is the column, `y` the row
///
/// Ordering compares column first, then row. That is the scan order in which
/// a segment's start precedes its stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn north(self) -> Self {
        Self::new(self.x, self.y - 1)
    }

    pub const fn south(self) -> Self {
        Self::new(self.x, self.y + 1)
    }

    pub const fn east(self) -> Self {
        Self::new(self.x + 1, self.y)
    }

    pub const fn west(self) -> Self {
        Self::new(self.x - 1, self.y)
    }

    pub const fn north_east(self) -> Self {
        Self::new(self.x + 1, self.y - 1)
    }

    pub const fn north_west(self) -> Self {
        Self::new(self.x - 1, self.y - 1)
    }

    pub const fn south_east(self) -> Self {
        Self::new(self.x + 1, self.y + 1)
    }

    pub const fn south_west(self) -> Self {
        Self::new(self.x - 1, self.y + 1)
    }

    /// Pixel at the center of this cell
    pub const fn to_pixel(self) -> Pixel {
        Pixel::new(self.x * CELL_WIDTH, self.y * CELL_HEIGHT)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A point in output units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    pub x: i32,
    pub y: i32,
}

impl Pixel {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// The eight compass orientations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    North,
    NorthEast,
    NorthWest,
    South,
    SouthEast,
    SouthWest,
    East,
    West,
}

impl Orientation {
    /// Returns true for the four diagonal orientations
    pub fn is_diagonal(&self) -> bool {
        matches!(
            self,
            Orientation::NorthEast
                | Orientation::NorthWest
                | Orientation::SouthEast
                | Orientation::SouthWest
        )
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Orientation::North => "N",
            Orientation::NorthEast => "NE",
            Orientation::NorthWest => "NW",
            Orientation::South => "S",
            Orientation::SouthEast => "SE",
            Orientation::SouthWest => "SW",
            Orientation::East => "E",
            Orientation::West => "W",
        };
        write!(f, "{}", name)
    }
}

/// Major direction of a traced line segment, from start toward stop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineDirection {
    East,
    South,
    NorthEast,
    SouthEast,
}

impl LineDirection {
    pub fn is_horizontal(&self) -> bool {
        matches!(self, LineDirection::East)
    }

    pub fn is_diagonal(&self) -> bool {
        matches!(self, LineDirection::NorthEast | LineDirection::SouthEast)
    }
}

impl From<LineDirection> for Orientation {
    fn from(value: LineDirection) -> Self {
        match value {
            LineDirection::East => Orientation::East,
            LineDirection::South => Orientation::South,
            LineDirection::NorthEast => Orientation::NorthEast,
            LineDirection::SouthEast => Orientation::SouthEast,
        }
    }
}

/// Which half of a half-step segment is visually trimmed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chop {
    North,
    South,
}

/// Quadrant occupied by a rounded corner's arc
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    NorthWest,
    NorthEast,
    SouthEast,
    SouthWest,
}

impl From<Corner> for Orientation {
    fn from(value: Corner) -> Self {
        match value {
            Corner::NorthWest => Orientation::NorthWest,
            Corner::NorthEast => Orientation::NorthEast,
            Corner::SouthEast => Orientation::SouthEast,
            Corner::SouthWest => Orientation::SouthWest,
        }
    }
}

/// Side a bridge arc bulges toward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BridgeSide {
    East,
    West,
}

/// Input dialect
///
/// Controls which glyphs count as diagram syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Dialect {
    /// Markdeep-style ASCII: `- _ | / \ + . ' o * ^ v < > ( )`
    #[default]
    Ascii,
    /// Unicode box drawing: `─ │ ┌ ┐ └ ┘ ╭ ╮ ╰ ╯ ┼ ▶ ▼ ● ○`
    /// ASCII glyphs are plain text in this dialect
    Unicode,
}

impl Dialect {
    /// Returns true if this dialect reads ASCII diagram glyphs
    pub fn is_ascii(&self) -> bool {
        matches!(self, Dialect::Ascii)
    }

    /// All supported dialects
    pub fn variants() -> &'static [Dialect] {
        &[Dialect::Ascii, Dialect::Unicode]
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::Ascii => write!(f, "ascii"),
            Dialect::Unicode => write!(f, "unicode"),
        }
    }
}

/// Configuration for a render pass
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RenderConfig {
    pub dialect: Dialect,
    /// Stroke and fill colour under a light color scheme
    pub light_color: String,
    /// Stroke and fill colour under `prefers-color-scheme: dark`
    pub dark_color: String,
    /// Emit the baseline stylesheet inside the SVG document
    pub embed_style: bool,
}

impl RenderConfig {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            ..Self::default()
        }
    }

    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn with_colors(mut self, light: impl Into<String>, dark: impl Into<String>) -> Self {
        self.light_color = light.into();
        self.dark_color = dark.into();
        self
    }

    pub fn with_embed_style(mut self, embed_style: bool) -> Self {
        self.embed_style = embed_style;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            dialect: Dialect::default(),
            light_color: "#000".to_string(),
            dark_color: "#FFF".to_string(),
            embed_style: true,
        }
    }
}
