//! Detector trait for primitive recognition
//!
//! A detector is a pure function of the classified grid. Detectors never see
//! each other's output, so they can run in any order.

use super::{Drawable, Grid};

/// Recognizes one family of primitives in a classified grid
pub trait Detector {
    /// Stable name used in logs
    fn name(&self) -> &'static str;

    /// All primitives of this family, in the detector's sweep order
    fn detect(&self, grid: &Grid) -> Vec<Drawable>;
}
