//! 2D cross-section geometry (triangle soups).
//!
//! Purpose
//! - Describe a cross-section as a union of closed triangles and answer the two
//!   questions the slicer needs: "where is it?" (bounding box) and "is this
//!   point inside?" (membership).
//!
//! Conventions
//! - Points are `nalgebra::Vector2<f64>`; `y` grows upward.
//! - Membership is inclusive: points on an edge or vertex count as inside.
//! - Overlapping triangles are fine; membership is a boolean OR.
//!
//! Code cross-refs: `Region`, `Triangle`, `Shape`, `BoundingBox`, `circle_fan`.

mod circle;
mod shape;
mod triangle;
mod types;

pub use circle::{circle_fan, fan_area};
pub use shape::Shape;
pub use triangle::Triangle;
pub use types::{BoundingBox, Point, Region};
