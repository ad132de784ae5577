//! Recognition pipeline
//!
//! The recognizer runs every detector over one classified grid and
//! concatenates their output in a fixed order:
//! lines → triangles → rounded corners → circles → bridges → text

use anyhow::Result;
use tracing::{debug, info, span, trace, Level};

use super::{
    BridgeDetector, CircleDetector, CornerDetector, LineDetector, TextDetector, TriangleDetector,
};
use crate::core::{Detector, Diagram, Dialect, Grid};

/// Runs the detectors that turn a grid into a [`Diagram`]
///
/// Detectors only read the grid, so their order affects nothing but the
/// order of the output.
pub struct Recognizer {
    detectors: Vec<Box<dyn Detector>>,
}

impl Recognizer {
    /// A recognizer with no detectors
    pub fn new() -> Self {
        Self {
            detectors: Vec::new(),
        }
    }

    /// A recognizer with every built-in detector in output order
    pub fn with_default_detectors() -> Self {
        let mut recognizer = Self::new();
        recognizer.register_detector(Box::new(LineDetector::new()));
        recognizer.register_detector(Box::new(TriangleDetector::new()));
        recognizer.register_detector(Box::new(CornerDetector::new()));
        recognizer.register_detector(Box::new(CircleDetector::new()));
        recognizer.register_detector(Box::new(BridgeDetector::new()));
        recognizer.register_detector(Box::new(TextDetector::new()));
        recognizer
    }

    /// Append a detector; its output follows every detector registered before it
    pub fn register_detector(&mut self, detector: Box<dyn Detector>) {
        self.detectors.push(detector);
    }

    /// Registered detector names, in run order
    pub fn detector_names(&self) -> Vec<&'static str> {
        self.detectors.iter().map(|d| d.name()).collect()
    }

    /// Run every detector over an already classified grid
    pub fn recognize_grid(&self, grid: &Grid) -> Diagram {
        let mut drawables = Vec::new();
        for detector in &self.detectors {
            let found = detector.detect(grid);
            trace!(detector = detector.name(), count = found.len(), "Detector finished");
            drawables.extend(found);
        }
        Diagram {
            width: grid.width(),
            height: grid.height(),
            drawables,
        }
    }

    /// Parse, classify and recognize `input`
    pub fn recognize(&self, input: &str, dialect: Dialect) -> Result<Diagram> {
        let recognize_span = span!(Level::INFO, "recognize", input_len = input.len());
        let _enter = recognize_span.enter();

        info!(%dialect, "Starting recognition");

        let grid = Grid::parse(input, dialect)?;
        debug!(
            width = grid.width(),
            height = grid.height(),
            text_cells = grid.text_cells().len(),
            "Grid classified"
        );

        let diagram = self.recognize_grid(&grid);
        info!(drawables = diagram.len(), "Recognition completed");
        Ok(diagram)
    }
}

impl Default for Recognizer {
    fn default() -> Self {
        Self::with_default_detectors()
    }
}
