//! Ray value used by the intersection test.
//!
//! A ray is built once per Monte Carlo trial from a sampled origin and a
//! sampled unit direction, tested against one receiver, and discarded.

use crate::{Point, Vector};

/// A ray defined by an origin point and a direction vector.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Origin point of the ray
    pub origin: Point,
    /// Direction vector (must be normalized for distance calculations)
    pub direction: Vector,
}

impl Ray {
    /// Creates a new ray from origin point and a unit direction vector.
    pub fn new(origin: Point, direction: Vector) -> Self {
        Self { origin, direction }
    }

    /// Returns the point along the ray at parameter t.
    ///
    /// point = origin + t * direction
    pub fn point_at(&self, t: f64) -> Point {
        self.origin + self.direction * t
    }
}
