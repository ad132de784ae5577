//! Circle detection: `o` is hollow, `*` is filled

use tracing::{debug, span, Level};

use crate::core::{Circle, Detector, Drawable, Glyphs, Grid, Sweep};

#[derive(Debug, Clone, Copy, Default)]
pub struct CircleDetector;

impl CircleDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Detector for CircleDetector {
    fn name(&self) -> &'static str {
        "circles"
    }

    fn detect(&self, grid: &Grid) -> Vec<Drawable> {
        let circle_span = span!(Level::DEBUG, "detect_circles");
        let _enter = circle_span.enter();

        let circles: Vec<Drawable> = Sweep::ColumnMajor
            .positions(grid.width(), grid.height())
            .filter_map(|position| match grid.glyph(position) {
                'o' => Some(Circle { position, bold: false }.into()),
                '*' => Some(Circle { position, bold: true }.into()),
                _ => None,
            })
            .collect();

        debug!(count = circles.len(), "Detected circles");
        circles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Dialect, Position};

    #[test]
    fn test_hollow_and_filled() {
        let grid = Grid::parse(" * \n   \n o ", Dialect::Ascii).unwrap();
        let drawables = CircleDetector::new().detect(&grid);
        assert_eq!(
            drawables,
            vec![
                Circle { position: Position::new(1, 0), bold: true }.into(),
                Circle { position: Position::new(1, 2), bold: false }.into(),
            ]
        );
    }

    #[test]
    fn test_letters_are_not_circles() {
        let grid = Grid::parse("foo", Dialect::Ascii).unwrap();
        assert!(CircleDetector::new().detect(&grid).is_empty());
    }

    #[test]
    fn test_unicode_circles() {
        let grid = Grid::parse("●─○", Dialect::Unicode).unwrap();
        let drawables = CircleDetector::new().detect(&grid);
        assert_eq!(drawables.len(), 2);
        assert!(matches!(drawables[0], Drawable::Circle(Circle { bold: true, .. })));
    }
}
