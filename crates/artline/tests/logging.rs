//! Tests for logging functionality
//!
//! These tests verify that logging initialization works correctly and that
//! the pipeline emits the expected events.

use std::io::{self, Write};
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use artline::core::logging::{init_logging, LogFormat};
use artline::{recognize, render, Dialect, Grid};
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

/// Writer that keeps everything written to it
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture<T>(level: Level, f: impl FnOnce() -> T) -> (T, String) {
    let writer = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(writer.clone())
        .with_max_level(level)
        .with_ansi(false)
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, writer.contents())
}

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str("compact").unwrap(), LogFormat::Compact);
    assert_eq!(LogFormat::from_str("pretty").unwrap(), LogFormat::Pretty);
    assert_eq!(LogFormat::from_str("json").unwrap(), LogFormat::Json);
    assert_eq!(LogFormat::from_str("JSON").unwrap(), LogFormat::Json);
    assert!(LogFormat::from_str("invalid").is_err());
}

#[test]
fn test_log_format_variants() {
    let variants = LogFormat::variants();
    assert!(variants.contains(&"compact"));
    assert!(variants.contains(&"pretty"));
    assert!(variants.contains(&"json"));
}

#[test]
fn test_init_logging_invalid_format() {
    let result = init_logging(Some("info"), Some("invalid_format"));
    assert!(result.is_err());
}

#[test]
fn test_init_logging_does_not_panic() {
    // Only the first global init can succeed
    let _ = init_logging(Some("warn"), Some("compact"));
    let _ = init_logging(Some("debug"), Some("json"));
    let _ = init_logging(None, None);
}

#[test]
fn test_recognition_events() {
    let (result, logs) = capture(Level::INFO, || recognize("o-->"));
    assert!(result.is_ok());
    assert!(logs.contains("Starting recognition"));
    assert!(logs.contains("dialect=ascii"));
    assert!(logs.contains("Recognition completed"));
    assert!(!logs.contains("Traced segment"));
}

#[test]
fn test_debug_events() {
    let (result, logs) = capture(Level::DEBUG, || render("+--+\n|  |\n+--+"));
    assert!(result.is_ok());
    assert!(logs.contains("Classified cells"));
    assert!(logs.contains("Rendered SVG document"));
}

#[test]
fn test_trace_events() {
    let (_, logs) = capture(Level::TRACE, || recognize("---"));
    assert!(logs.contains("Traced segment"));
}

#[test]
fn test_tab_warning() {
    let (result, logs) = capture(Level::WARN, || Grid::parse("a\tb", Dialect::Ascii));
    assert!(result.is_err());
    assert!(logs.contains("Rejecting tab character"));
    assert!(logs.contains("WARN"));
}

#[test]
fn test_empty_input_warning() {
    let (result, logs) = capture(Level::WARN, || Grid::parse("", Dialect::Ascii));
    assert!(result.is_err());
    assert!(logs.contains("Rejecting empty input"));
}

#[test]
fn test_test_writer_at_trace() {
    let subscriber = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(Level::TRACE)
        .finish();
    tracing::subscriber::with_default(subscriber, || {
        let svg = render(" .-.\n|   |\n '-'").unwrap();
        assert!(svg.contains("<path"));
    });
}
