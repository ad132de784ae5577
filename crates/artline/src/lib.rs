//! Artline - Turn ASCII and box-drawing diagrams into SVG
//!
//! A library that recognizes the lines, arrowheads, circles, rounded corners
//! and bridges drawn in a grid of characters, separates them from the
//! surrounding text, and renders the result as an SVG document.
//!
//! # Quick Start
//!
//! ```rust
//! use artline::render;
//!
//! let input = "+-->o\n|\n'--> done";
//! let svg = render(input).unwrap();
//! assert!(svg.starts_with("<svg"));
//! assert!(svg.contains(">d</text>"));
//! ```
//!
//! # Advanced Usage
//!
//! For more control, use the individual stages:
//!
//! ```rust
//! use artline::prelude::*;
//!
//! let input = " .---.\n|  A  |\n '---'";
//!
//! // Classify characters into graphics and text
//! let grid = Grid::parse(input, Dialect::Ascii).unwrap();
//! assert!(grid.is_text(Position::new(3, 1)));
//!
//! // Recognize primitives
//! let diagram = Recognizer::default().recognize_grid(&grid);
//! assert_eq!(diagram.rounded_corners().count(), 4);
//!
//! // Render to SVG
//! let svg = SvgRenderer::new(RenderConfig::default()).render(&diagram).unwrap();
//! assert!(svg.contains("<path"));
//! ```

pub mod core;
pub mod detectors;
pub mod render;

pub use core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        Bridge, BridgeSide, Chop, Circle, Corner, Detector, Diagram, DiagramError, Dialect,
        Drawable, Grid, LineDirection, LineSegment, Orientation, Position, RenderConfig, Renderer,
        RoundedCorner, TextRun, Triangle,
    };
    pub use crate::detectors::{
        BridgeDetector, CircleDetector, CornerDetector, LineDetector, Recognizer, TextDetector,
        TriangleDetector,
    };
    pub use crate::render::{Shape, SvgRenderer};
}

/// Render an ASCII diagram to an SVG document
///
/// Uses the ASCII dialect and the default colour scheme.
///
/// # Arguments
/// * `input` - Newline-delimited diagram text
///
/// # Returns
/// * `Ok(String)` - The complete SVG document
/// * `Err` - If the input is empty or contains a tab
///
/// # Example
/// ```rust
/// use artline::render;
///
/// let svg = render("--->").unwrap();
/// assert!(svg.contains("<polygon"));
/// ```
pub fn render(input: &str) -> anyhow::Result<String> {
    render_with_config(input, &RenderConfig::default())
}

/// Render a diagram with explicit dialect, colours and stylesheet settings
///
/// # Example
/// ```rust
/// use artline::{render_with_config, Dialect, RenderConfig};
///
/// let config = RenderConfig::new(Dialect::Unicode).with_embed_style(false);
/// let svg = render_with_config("╭──╮\n╰──╯", &config).unwrap();
/// assert!(!svg.contains("<style"));
/// assert_eq!(svg.matches(" A 4,4 ").count(), 4);
/// ```
pub fn render_with_config(input: &str, config: &RenderConfig) -> anyhow::Result<String> {
    use crate::core::Renderer as _;
    use crate::render::SvgRenderer;

    let diagram = recognize_with_dialect(input, config.dialect)?;
    SvgRenderer::new(config.clone()).render(&diagram)
}

/// Recognize the primitives of an ASCII diagram without rendering
///
/// # Example
/// ```rust
/// use artline::recognize;
///
/// let diagram = recognize("o--*").unwrap();
/// assert_eq!(diagram.circles().count(), 2);
/// assert_eq!(diagram.lines().count(), 1);
/// ```
pub fn recognize(input: &str) -> anyhow::Result<Diagram> {
    recognize_with_dialect(input, Dialect::Ascii)
}

/// Recognize the primitives of a diagram in the given dialect
pub fn recognize_with_dialect(input: &str, dialect: Dialect) -> anyhow::Result<Diagram> {
    detectors::Recognizer::default().recognize(input, dialect)
}

/// Build and classify the grid of an ASCII diagram
///
/// # Example
/// ```rust
/// use artline::{parse, Position};
///
/// let grid = parse("a-b").unwrap();
/// assert_eq!(grid.width(), 3);
/// assert!(grid.is_text(Position::new(1, 0)));
/// ```
pub fn parse(input: &str) -> anyhow::Result<Grid> {
    parse_with_dialect(input, Dialect::Ascii)
}

/// Build and classify a grid in the given dialect
pub fn parse_with_dialect(input: &str, dialect: Dialect) -> anyhow::Result<Grid> {
    Ok(Grid::parse(input, dialect)?)
}
