//! Character grid with its text/graphics partition
//!
//! The grid is built once from the input text and never mutated afterwards.
//! Non-space characters live in exactly one of two maps: graphics cells,
//! which the detectors read, and text cells, which pass through as literal
//! text. Lookups outside either map yield a space.

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, span, trace, warn, Level};
use unicode_width::UnicodeWidthStr;

use super::{glyphs, Classifier, Corner, DiagramError, Dialect, Position};

/// Read access to a glyph per position
///
/// Detectors and neighbourhood predicates are written against this trait so
/// they can run over the raw cells during classification and over the
/// graphics partition afterwards.
pub trait Glyphs {
    /// Glyph at `pos`, or a space when nothing is stored there
    fn glyph(&self, pos: Position) -> char;
}

/// Sparse map from position to character
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellMap {
    cells: HashMap<Position, char>,
}

impl CellMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, pos: Position, ch: char) {
        self.cells.insert(pos, ch);
    }

    pub fn remove(&mut self, pos: Position) -> Option<char> {
        self.cells.remove(&pos)
    }

    pub fn get(&self, pos: Position) -> Option<char> {
        self.cells.get(&pos).copied()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains_key(&pos)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Stored positions in no particular order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.keys().copied()
    }
}

impl Glyphs for CellMap {
    fn glyph(&self, pos: Position) -> char {
        self.get(pos).unwrap_or(' ')
    }
}

/// Immutable character grid, partitioned into graphics and text
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    dialect: Dialect,
    graphics: CellMap,
    text: CellMap,
}

impl Grid {
    /// Build and classify a grid from newline-delimited text
    ///
    /// Rows may have unequal length; the grid is as wide as the longest row.
    /// Fails on empty input or on any tab character.
    pub fn parse(input: &str, dialect: Dialect) -> Result<Self, DiagramError> {
        let parse_span = span!(Level::DEBUG, "parse_grid", input_len = input.len(), %dialect);
        let _enter = parse_span.enter();

        let rows: Vec<&str> = input.lines().collect();
        if rows.is_empty() {
            warn!("Rejecting empty input");
            return Err(DiagramError::EmptyInput);
        }

        let mut cells = CellMap::new();
        let mut width = 0;
        for (y, row) in rows.iter().enumerate() {
            let mut row_len = 0;
            for (x, ch) in row.chars().enumerate() {
                if ch == '\t' {
                    warn!(row = y + 1, column = x + 1, "Rejecting tab character");
                    return Err(DiagramError::forbidden_character(ch, y + 1, x + 1));
                }
                if ch != ' ' {
                    cells.insert(Position::new(x as i32, y as i32), ch);
                }
                row_len = x + 1;
            }
            if row.width() != row_len {
                warn!(
                    row = y + 1,
                    columns = row_len,
                    display_width = row.width(),
                    "Row contains glyphs that do not occupy exactly one cell"
                );
            }
            width = width.max(row_len);
        }
        let height = rows.len();
        debug!(width, height, cells = cells.len(), "Read grid");

        let text = Classifier::new(&cells, dialect).partition(width, height);
        for pos in text.positions() {
            cells.remove(pos);
        }
        trace!(
            graphics = cells.len(),
            text = text.len(),
            "Partitioned grid"
        );

        Ok(Self {
            width,
            height,
            dialect,
            graphics: cells,
            text,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Cells classified as diagram syntax, holding their original characters
    pub fn graphics(&self) -> &CellMap {
        &self.graphics
    }

    /// Cells classified as literal text
    pub fn text_cells(&self) -> &CellMap {
        &self.text
    }

    pub fn is_text(&self, pos: Position) -> bool {
        self.text.contains(pos)
    }

    /// Original character at `pos`, whichever partition holds it
    pub fn original(&self, pos: Position) -> char {
        self.text
            .get(pos)
            .or_else(|| self.graphics.get(pos))
            .unwrap_or(' ')
    }

    /// Arms of the box-drawing glyph at `pos`; always `None` in the ASCII dialect
    pub fn arms(&self, pos: Position) -> Option<glyphs::Arms> {
        if self.dialect.is_ascii() {
            return None;
        }
        self.graphics.get(pos).and_then(glyphs::box_arms)
    }

    /// Quadrant of the arc corner glyph at `pos`; always `None` in the ASCII dialect
    pub fn arc_corner(&self, pos: Position) -> Option<Corner> {
        if self.dialect.is_ascii() {
            return None;
        }
        self.graphics.get(pos).and_then(glyphs::arc_corner)
    }
}

impl Glyphs for Grid {
    /// Graphics glyph as the detectors read it; text cells read as space
    fn glyph(&self, pos: Position) -> char {
        glyphs::normalize(self.graphics.glyph(pos), self.dialect)
    }
}

impl fmt::Display for Grid {
    /// Reconstruct the padded input: every row `width` wide, each followed by `\n`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            let row: String = (0..self.width)
                .map(|x| self.original(Position::new(x as i32, y as i32)))
                .collect();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
