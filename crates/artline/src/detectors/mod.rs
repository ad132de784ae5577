//! Primitive detectors
//!
//! Each detector is a pure function of the classified grid. The line tracer
//! does most of the work; the shape detectors are local per-cell predicates.

pub mod bridges;
pub mod circles;
pub mod corners;
pub mod lines;
pub mod pipeline;
pub mod text;
pub mod triangles;

pub use bridges::BridgeDetector;
pub use circles::CircleDetector;
pub use corners::CornerDetector;
pub use lines::{LineDetector, SegmentKind};
pub use pipeline::Recognizer;
pub use text::TextDetector;
pub use triangles::TriangleDetector;
