//! Renderer trait for serializing recognized diagrams

use anyhow::Result;

use super::Diagram;

/// Serializes a recognized diagram into an output format
pub trait Renderer {
    type Output;

    fn render(&self, diagram: &Diagram) -> Result<Self::Output>;
}
