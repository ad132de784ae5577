//! Text versus graphics classification
//!
//! Reserved glyphs are ambiguous: `-` may be a line or a hyphen, `o` a circle
//! or a letter. The classifier resolves each cell with a fixed rule order, in
//! row-major order, so a cell may consult earlier decisions to its west.

use tracing::{debug, span, trace, Level};

use super::glyphs::{is_dot, is_reserved, is_wide};
use super::neighborhood::has_line_above_or_below;
use super::{CellMap, Dialect, Glyphs, Position, Sweep};

/// Outcome of classifying one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellClass {
    Text,
    Graphics,
}

/// Classifies cells of an unpartitioned grid
pub struct Classifier<'a> {
    cells: &'a CellMap,
    text: CellMap,
    dialect: Dialect,
}

impl<'a> Classifier<'a> {
    pub fn new(cells: &'a CellMap, dialect: Dialect) -> Self {
        Self {
            cells,
            text: CellMap::new(),
            dialect,
        }
    }

    /// Classify every cell in row-major order and return the text cells
    pub fn partition(mut self, width: usize, height: usize) -> CellMap {
        let classify_span = span!(Level::DEBUG, "classify", width, height);
        let _enter = classify_span.enter();

        for pos in Sweep::RowMajor.positions(width, height) {
            let Some(ch) = self.cells.get(pos) else {
                continue;
            };
            if self.classify(pos) == CellClass::Text {
                self.text.insert(pos, ch);
            }
        }
        debug!(text = self.text.len(), "Classified cells");
        self.text
    }

    /// Classify one cell against the decisions made so far
    pub fn classify(&self, pos: Position) -> CellClass {
        let class = self.decide(pos);
        trace!(x = pos.x, y = pos.y, ?class, "Classified cell");
        class
    }

    fn decide(&self, pos: Position) -> CellClass {
        let ch = self.cells.glyph(pos);
        if ch == ' ' {
            return CellClass::Graphics;
        }
        if self.text.contains(pos) || !self.reserved(pos) {
            return CellClass::Text;
        }
        if !self.dialect.is_ascii() {
            return CellClass::Graphics;
        }

        if has_line_above_or_below(self.cells, pos) {
            return CellClass::Graphics;
        }

        // Extend runs like "foo----bar".
        let west = pos.west();
        let east = pos.east();
        if self.is_text(west) || !self.reserved(east) {
            return CellClass::Text;
        }

        let west_ch = self.cells.glyph(west);
        let east_ch = self.cells.glyph(east);
        let crowded = |a: char, b: char| is_wide(a) && is_wide(b);
        if crowded(west_ch, ch) || crowded(ch, east_ch) {
            return CellClass::Text;
        }

        if !(west_ch == ' ' && east_ch == ' ') {
            return CellClass::Graphics;
        }

        if is_dot(ch) {
            return CellClass::Graphics;
        }

        if self.is_text(west.west()) || !self.reserved(east.east()) {
            return CellClass::Text;
        }
        CellClass::Graphics
    }

    fn reserved(&self, pos: Position) -> bool {
        is_reserved(self.cells.glyph(pos), self.dialect)
    }

    /// Already classified as text, or text by virtue of not being reserved
    fn is_text(&self, pos: Position) -> bool {
        self.text.contains(pos) || !self.reserved(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Grid;

    fn text_of(input: &str) -> String {
        let grid = Grid::parse(input, Dialect::Ascii).unwrap();
        let mut out = String::new();
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let pos = Position::new(x as i32, y as i32);
                out.push(if grid.is_text(pos) { 'T' } else if grid.graphics().contains(pos) { 'G' } else { ' ' });
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_letters_are_text() {
        assert_eq!(text_of("abc"), "TTT\n");
    }

    #[test]
    fn test_arrow_is_graphics() {
        assert_eq!(text_of("+-->"), "GGGG\n");
    }

    #[test]
    fn test_hyphen_run_between_words() {
        assert_eq!(text_of("foo----bar"), "TTTTTTTTTT\n");
    }

    #[test]
    fn test_isolated_circle_is_graphics() {
        assert_eq!(text_of(" o "), " G \n");
    }

    #[test]
    fn test_lone_reserved_glyph_at_grid_edge_is_graphics() {
        // Off-grid cells read as reserved blanks, never as text
        assert_eq!(text_of("-"), "G\n");
        assert_eq!(text_of("|"), "G\n");
        assert_eq!(text_of(" - "), " G \n");
        assert_eq!(text_of("+"), "G\n");
    }

    #[test]
    fn test_word_two_cells_away() {
        assert_eq!(text_of("a v"), "T T\n");
        assert_eq!(text_of("  v  "), "  G  \n");
    }

    #[test]
    fn test_crowded_wide_glyphs() {
        assert_eq!(text_of("-oo-"), "GTTT\n");
    }

    #[test]
    fn test_line_above_wins() {
        assert_eq!(text_of(" |\nav"), " G\nTG\n");
    }

    #[test]
    fn test_unicode_dialect_treats_ascii_as_text() {
        let grid = Grid::parse("─-│", Dialect::Unicode).unwrap();
        assert!(!grid.is_text(Position::new(0, 0)));
        assert!(grid.is_text(Position::new(1, 0)));
        assert!(!grid.is_text(Position::new(2, 0)));
    }
}
