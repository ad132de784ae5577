//! Output side: pixel geometry and SVG serialization

pub mod geometry;
pub mod svg;

pub use geometry::{resolve, ShadeFill, Shape};
pub use svg::SvgRenderer;
