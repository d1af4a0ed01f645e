//! Error types for polygon boolean operations.

use thiserror::Error;

/// Errors that can occur when combining polygons.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OverlayError {
    /// An input ring has fewer than the 3 points needed to enclose area.
    #[error("ring {ring} of {operand} has {points} points, need at least 3")]
    InvalidRing {
        /// Which operand the ring belongs to ("A" or "B").
        operand: &'static str,
        /// Index of the offending ring within its polygon.
        ring: usize,
        /// Number of points the ring actually has.
        points: usize,
    },
}
