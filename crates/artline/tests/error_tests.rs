//! Tests for input-format errors and the core error type

use artline::core::DiagramError;
use artline::{parse, recognize, render, render_with_config, Dialect, Grid, RenderConfig};

#[test]
fn test_empty_input() {
    let err = Grid::parse("", Dialect::Ascii).unwrap_err();
    assert!(matches!(err, DiagramError::EmptyInput));
    assert!(err.to_string().contains("empty"));
}

#[test]
fn test_empty_input_through_render() {
    let err = render("").unwrap_err();
    let diagram_err = err.downcast_ref::<DiagramError>().unwrap();
    assert!(diagram_err.is_input_error());
}

#[test]
fn test_tab_position_is_reported() {
    let err = Grid::parse("+--+\n|\t |", Dialect::Ascii).unwrap_err();
    match err {
        DiagramError::ForbiddenCharacter { ch, row, column } => {
            assert_eq!(ch, '\t');
            assert_eq!(row, 2);
            assert_eq!(column, 2);
        }
        other => panic!("Expected forbidden character, got {:?}", other),
    }
}

#[test]
fn test_tab_message() {
    let err = recognize("a\tb").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Forbidden character"));
    assert!(message.contains("row 1"));
    assert!(message.contains("column 2"));
}

#[test]
fn test_tab_rejected_in_unicode_dialect() {
    assert!(Grid::parse("─\t─", Dialect::Unicode).is_err());
}

#[test]
fn test_no_partial_output_on_error() {
    assert!(parse("ok\nstill ok\n\t").is_err());
    assert!(render("+--+\n\t").is_err());
}

#[test]
fn test_render_error() {
    let error = DiagramError::render_error("Render failed".to_string());
    let error_msg = format!("{}", error);
    assert!(error_msg.contains("Render error"));
    assert!(error_msg.contains("Render failed"));
    assert!(!error.is_input_error());
}

#[test]
fn test_invalid_colour_is_a_render_error() {
    let config = RenderConfig::default().with_colors("", "#FFF");
    let err = render_with_config("--", &config).unwrap_err();
    let diagram_err = err.downcast_ref::<DiagramError>().unwrap();
    assert!(matches!(diagram_err, DiagramError::RenderError { .. }));
}

#[test]
fn test_colour_is_unchecked_without_stylesheet() {
    let config = RenderConfig::default()
        .with_colors("", "#FFF")
        .with_embed_style(false);
    assert!(render_with_config("--", &config).is_ok());
}

#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let error: DiagramError = io.into();
    assert!(error.to_string().contains("IO error"));
    assert!(!error.is_input_error());
}

#[test]
fn test_format_error_conversion() {
    let error: DiagramError = std::fmt::Error.into();
    assert!(error.to_string().contains("Format error"));
}
