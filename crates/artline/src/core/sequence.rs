//! Traversal orders over a width x height rectangle
//!
//! Each detector picks the sweep that matches its primitive's natural
//! direction. Sequences are plain iterators: finite, lazy, and restartable by
//! calling [`Sweep::positions`] again.

use super::Position;

/// A traversal order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sweep {
    /// Row by row, columns varying fastest
    RowMajor,
    /// Column by column, rows varying fastest
    ColumnMajor,
    /// Anti-diagonals of constant `x + y`, ascending; `x` ascends within each
    DiagonalUp,
    /// Diagonals of constant `x - y`, ascending; `x` ascends within each
    DiagonalDown,
}

impl Sweep {
    /// Positions of a `width` x `height` rectangle in this order
    pub fn positions(self, width: usize, height: usize) -> Positions {
        let width = width as i32;
        let height = height as i32;
        let major = match self {
            Sweep::DiagonalDown => 1 - height,
            _ => 0,
        };
        Positions {
            sweep: self,
            width,
            height,
            major,
            minor: None,
        }
    }

    /// The cell that follows `pos` on the same sweep line
    pub fn step(self, pos: Position) -> Position {
        match self {
            Sweep::RowMajor => pos.east(),
            Sweep::ColumnMajor => pos.south(),
            Sweep::DiagonalUp => pos.north_east(),
            Sweep::DiagonalDown => pos.south_east(),
        }
    }

    /// Inclusive minor range of sweep line `major`, or None past the end
    fn minor_range(self, major: i32, width: i32, height: i32) -> Option<(i32, i32)> {
        if width <= 0 || height <= 0 {
            return None;
        }
        match self {
            Sweep::RowMajor => (major < height).then_some((0, width - 1)),
            Sweep::ColumnMajor => (major < width).then_some((0, height - 1)),
            Sweep::DiagonalUp => (major < width + height - 1)
                .then(|| ((major - height + 1).max(0), major.min(width - 1))),
            Sweep::DiagonalDown => {
                (major < width).then(|| (major.max(0), (width - 1).min(major + height - 1)))
            }
        }
    }

    fn at(self, major: i32, minor: i32) -> Position {
        match self {
            Sweep::RowMajor => Position::new(minor, major),
            Sweep::ColumnMajor => Position::new(major, minor),
            Sweep::DiagonalUp => Position::new(minor, major - minor),
            Sweep::DiagonalDown => Position::new(minor, minor - major),
        }
    }
}

/// Iterator returned by [`Sweep::positions`]
#[derive(Debug, Clone)]
pub struct Positions {
    sweep: Sweep,
    width: i32,
    height: i32,
    major: i32,
    minor: Option<i32>,
}

impl Iterator for Positions {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        loop {
            let (low, high) = self
                .sweep
                .minor_range(self.major, self.width, self.height)?;
            let minor = self.minor.unwrap_or(low);
            if minor <= high {
                self.minor = Some(minor + 1);
                return Some(self.sweep.at(self.major, minor));
            }
            self.major += 1;
            self.minor = None;
        }
    }
}
