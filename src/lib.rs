//! overlay2d - Boolean operations on 2D polygons.
//!
//! Computes union, intersection, difference, and symmetric difference (XOR)
//! between polygons that may consist of multiple rings, including holes.
//! The engine tolerates touching vertices, shared edges, and collinear
//! overlap between the two operands; individual input rings are expected to
//! be simple (non-self-intersecting).
//!
//! # Example
//!
//! ```
//! use overlay2d::{intersection, Point2, Polygon, Ring};
//!
//! let a: Polygon<f64> = Polygon::from_ring(Ring::filled(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(0.0, 1.0),
//! ]));
//! let b = Polygon::from_ring(Ring::filled(vec![
//!     Point2::new(0.5, 0.5),
//!     Point2::new(1.5, 0.5),
//!     Point2::new(1.5, 1.5),
//!     Point2::new(0.5, 1.5),
//! ]));
//!
//! let result = intersection(&a, &b).unwrap();
//! assert_eq!(result.rings().len(), 1);
//! assert!((result.area() - 0.25).abs() < 1e-10);
//! ```

pub mod boolean;
pub mod error;
pub mod polygon;
pub mod predicates;
pub mod primitives;

pub use boolean::{
    boolean_op, boolean_op_with_diagnostics, difference, difference_with_epsilon, intersection,
    intersection_with_epsilon, invert, union, union_with_epsilon, xor, xor_with_epsilon,
    BooleanOp, BoundaryLocation, CrossingDiagnostics,
};
pub use error::OverlayError;
pub use polygon::{Polygon, Ring};
pub use predicates::{
    default_epsilon, orient2d, point_on_segment, segments_intersect, Orientation,
    SegmentIntersection,
};
pub use primitives::{Point2, Segment2, Vec2};
