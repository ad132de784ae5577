//! Tests for public API functions in lib.rs

use artline::prelude::*;
use artline::{parse, parse_with_dialect, recognize, recognize_with_dialect, render, render_with_config};

#[test]
fn test_render_arrow() {
    let result = render("o-->");
    assert!(result.is_ok());
    let output = result.unwrap();
    assert!(output.starts_with("<svg"));
    assert!(output.contains("<circle"));
    assert!(output.contains("<polygon"));
    assert!(output.ends_with("</svg>\n"));
}

#[test]
fn test_render_document_size() {
    // Width (3 + 1) * 8, height 2 * 16 + 9
    let output = render("+-+\n+-+").unwrap();
    assert!(output.contains("height='41' width='32'"));
}

#[test]
fn test_render_with_config_unicode() {
    let config = RenderConfig::new(Dialect::Unicode);
    let output = render_with_config("●─▶", &config).unwrap();
    assert!(output.contains("fill='currentColor'></circle>"));
    assert!(output.contains("<polygon"));
    assert!(!output.contains("<text"));
}

#[test]
fn test_render_with_config_without_style() {
    let config = RenderConfig::default().with_embed_style(false);
    let output = render_with_config("+--+", &config).unwrap();
    assert!(!output.contains("<style"));
    assert!(!output.contains("prefers-color-scheme"));
}

#[test]
fn test_recognize_counts() {
    let diagram = recognize("o-->").unwrap();
    assert_eq!(diagram.width, 4);
    assert_eq!(diagram.height, 1);
    assert_eq!(diagram.circles().count(), 1);
    assert_eq!(diagram.triangles().count(), 1);
    assert_eq!(diagram.text().count(), 0);
}

#[test]
fn test_recognize_with_dialect_ascii_is_text_in_unicode() {
    let diagram = recognize_with_dialect("+--+", Dialect::Unicode).unwrap();
    assert_eq!(diagram.lines().count(), 0);
    assert_eq!(diagram.text().count(), 4);
}

#[test]
fn test_parse_dimensions() {
    let grid = parse("ab\nabcd\n").unwrap();
    assert_eq!(grid.width(), 4);
    assert_eq!(grid.height(), 2);
    assert_eq!(grid.dialect(), Dialect::Ascii);
}

#[test]
fn test_parse_with_dialect_unicode() {
    let grid = parse_with_dialect("╭─╮", Dialect::Unicode).unwrap();
    assert_eq!(grid.graphics().len(), 3);
    assert!(grid.text_cells().is_empty());
}

#[test]
fn test_stages_match_render() {
    let input = "+--+\n|  |\n+--+";
    let grid = Grid::parse(input, Dialect::Ascii).unwrap();
    let diagram = Recognizer::default().recognize_grid(&grid);
    let staged = SvgRenderer::default().render(&diagram).unwrap();
    assert_eq!(staged, render(input).unwrap());
}

#[test]
fn test_default_detector_order() {
    let recognizer = Recognizer::default();
    assert_eq!(
        recognizer.detector_names(),
        vec![
            "lines",
            "triangles",
            "rounded_corners",
            "circles",
            "bridges",
            "text"
        ]
    );
}

struct CountingDetector;

impl Detector for CountingDetector {
    fn name(&self) -> &'static str {
        "counting"
    }

    fn detect(&self, grid: &Grid) -> Vec<Drawable> {
        vec![TextRun {
            position: Position::new(0, 0),
            ch: char::from_digit(grid.graphics().len() as u32 % 10, 10).unwrap_or('?'),
        }
        .into()]
    }
}

#[test]
fn test_custom_detector() {
    let mut recognizer = Recognizer::new();
    recognizer.register_detector(Box::new(CountingDetector));

    let diagram = recognizer.recognize("+--+", Dialect::Ascii).unwrap();
    assert_eq!(diagram.len(), 1);
    assert_eq!(diagram.text().next().map(|t| t.ch), Some('4'));
}

#[test]
fn test_single_detector() {
    let mut recognizer = Recognizer::new();
    recognizer.register_detector(Box::new(CircleDetector::new()));

    let diagram = recognizer.recognize(" o  * ", Dialect::Ascii).unwrap();
    let bold: Vec<bool> = diagram.circles().map(|c| c.bold).collect();
    assert_eq!(bold, vec![false, true]);
    assert_eq!(diagram.len(), 2);
}

#[test]
fn test_drawable_kinds() {
    let diagram = recognize(" .---.\n|     |\n '---' x").unwrap();
    let kinds: Vec<&str> = diagram.drawables.iter().map(|d| d.kind()).collect();
    assert!(kinds.contains(&"line"));
    assert!(kinds.contains(&"rounded_corner"));
    assert_eq!(kinds.last(), Some(&"text"));
}
