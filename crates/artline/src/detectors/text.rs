//! Residual text
//!
//! Text cells pass through as literal characters, sorted by column then row.
//! The light diagonal glyphs `╱ ╲ ╳` are the exception: they are drawn as
//! lonely diagonal segments in the text slot.

use tracing::{debug, span, Level};

use crate::core::{Detector, Drawable, Grid, LineDirection, LineSegment, Position, Sweep, TextRun};

fn lonely_diagonal(pos: Position, direction: LineDirection) -> Drawable {
    let stop = match direction {
        LineDirection::NorthEast => pos.north_east(),
        _ => pos.south_east(),
    };
    LineSegment {
        lonely: true,
        ..LineSegment::new(pos, stop, direction)
    }
    .into()
}

/// Drawables for one text cell
fn text_drawables(position: Position, ch: char) -> Vec<Drawable> {
    match ch {
        '╱' => vec![lonely_diagonal(position, LineDirection::NorthEast)],
        '╲' => vec![lonely_diagonal(position, LineDirection::SouthEast)],
        '╳' => vec![
            lonely_diagonal(position, LineDirection::NorthEast),
            lonely_diagonal(position, LineDirection::SouthEast),
        ],
        _ => vec![TextRun { position, ch }.into()],
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TextDetector;

impl TextDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Detector for TextDetector {
    fn name(&self) -> &'static str {
        "text"
    }

    fn detect(&self, grid: &Grid) -> Vec<Drawable> {
        let text_span = span!(Level::DEBUG, "detect_text");
        let _enter = text_span.enter();

        let cells = grid.text_cells();
        let drawables: Vec<Drawable> = Sweep::ColumnMajor
            .positions(grid.width(), grid.height())
            .filter_map(|pos| cells.get(pos).map(|ch| (pos, ch)))
            .flat_map(|(pos, ch)| text_drawables(pos, ch))
            .collect();

        debug!(cells = cells.len(), count = drawables.len(), "Collected text");
        drawables
    }
}
