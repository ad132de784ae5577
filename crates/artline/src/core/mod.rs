//! Core abstractions for diagram recognition
//!
//! This module defines the grid, the glyph tables, the traversal orders, the
//! classifier, and the primitive types that every detector and renderer
//! shares.

mod classifier;
mod detector;
mod drawable;
mod error;
pub mod glyphs;
mod grid;
pub mod logging;
pub mod neighborhood;
mod renderer;
mod sequence;
mod types;

pub use classifier::*;
pub use detector::*;
pub use drawable::*;
pub use error::*;
pub use grid::*;
pub use logging::*;
pub use renderer::*;
pub use sequence::*;
pub use types::*;
