//! Ring and polygon model.
//!
//! A [`Polygon`] is an ordered collection of closed [`Ring`]s. Each ring
//! carries an advisory `hole` flag; its geometric winding (from signed area)
//! is independent ground truth. The filled region of a polygon is defined by
//! even-odd parity over all of its rings, which makes boundary
//! classification insensitive to winding conventions.

mod core;
mod ring;

pub use self::core::Polygon;
pub use ring::Ring;
