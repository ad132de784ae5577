//! Core error types for diagram recognition
//!
//! Input-format problems are the only user-facing failures. Everything after
//! grid construction is total, so the remaining variants cover output plumbing.

use thiserror::Error;

/// Core error types for diagram recognition and rendering
#[derive(Error, Debug)]
pub enum DiagramError {
    #[error("Input appears to be empty")]
    EmptyInput,

    #[error("Forbidden character {ch:?} at row {row}, column {column}")]
    ForbiddenCharacter { ch: char, row: usize, column: usize },

    #[error("Render error: {message}")]
    RenderError { message: String },

    #[error("Format error: {source}")]
    FormatError {
        #[from]
        source: std::fmt::Error,
    },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl DiagramError {
    /// Create a new forbidden character error (1-based row and column)
    pub fn forbidden_character(ch: char, row: usize, column: usize) -> Self {
        Self::ForbiddenCharacter { ch, row, column }
    }

    /// Create a new render error
    pub fn render_error(message: String) -> Self {
        Self::RenderError { message }
    }

    /// Returns true for errors caused by the shape of the input text
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::EmptyInput | Self::ForbiddenCharacter { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let error = DiagramError::EmptyInput;
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("empty"));
        assert!(error.is_input_error());
    }

    #[test]
    fn test_forbidden_character() {
        let error = DiagramError::forbidden_character('\t', 3, 7);
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("'\\t'"));
        assert!(error_msg.contains("row 3"));
        assert!(error_msg.contains("column 7"));
        assert!(error.is_input_error());
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
    fn test_format_error_conversion() {
        let error: DiagramError = std::fmt::Error.into();
        assert!(format!("{}", error).contains("Format error"));
    }

    #[test]
    fn test_io_error_conversion() {
        use std::io;
        let io_err = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error: DiagramError = io_err.into();
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("IO error"));
        assert!(error_msg.contains("File not found"));
    }
}
