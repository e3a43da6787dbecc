//! Planar quadrilateral surface used as emitter or receiver.
//!
//! A `Surface` is validated once at construction and immutable afterwards,
//! so every instance handed to the samplers and the estimator already
//! satisfies the geometric invariants (4 vertices, coplanar, convex,
//! non-degenerate edges, unit normal orthogonal to the plane).
//!
//! Point sampling and the edge-projection containment test are exact only
//! for parallelograms (rectangles included). General convex quadrilaterals
//! are accepted by the constructor but sampled non-uniformly; callers that
//! need uniform sampling must pass parallelograms.

use anyhow::{Result, bail, ensure};

use crate::{Point, Vector};

/// Tolerance for coplanarity and edge degeneracy checks [length units].
const PLANAR_TOL: f64 = 1e-9;
/// Tolerance on magnitude and orientation of a user-supplied normal.
const UNIT_TOL: f64 = 1e-6;

/// A planar convex quadrilateral with a unit orientation normal.
///
/// The normal orientation convention (inward vs. outward) is the caller's;
/// it must be consistent for every surface used in one estimation, because
/// the intersection test only accepts rays approaching the front face.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    pts: Vec<Point>,
    /// Unit normal vector
    pub vn: Vector,
    /// Name of the surface
    pub name: String,
}

impl Surface {
    /// Creates a new surface from 4 ordered vertices.
    ///
    /// If `normal` is `None`, the normal is computed from the first three
    /// vertices using the right-hand rule. If it is `Some`, it must be unit
    /// length and orthogonal to the surface plane; either orientation is
    /// accepted.
    ///
    /// Fails if the vertices do not form a simple, planar, convex
    /// quadrilateral with non-degenerate edges.
    pub fn new(name: &str, pts: Vec<Point>, normal: Option<Vector>) -> Result<Self> {
        ensure!(
            pts.len() == 4,
            "surface '{name}': expected 4 vertices, got {}",
            pts.len()
        );

        let edges: Vec<Vector> = (0..4)
            .map(|k| Vector::from_points(pts[k], pts[(k + 1) % 4]))
            .collect();
        for (k, e) in edges.iter().enumerate() {
            ensure!(
                e.length() > PLANAR_TOL,
                "surface '{name}': edge {k} has (near) zero length"
            );
        }

        // Plane normal from the first corner (right-hand rule).
        let Some(vn) = Vector::normal(pts[0], pts[1], pts[3]) else {
            bail!("surface '{name}': vertices 1, 2 and 4 are collinear");
        };

        // The remaining vertex must lie in the same plane.
        let off_plane = Vector::from_points(pts[0], pts[2]).dot(vn).abs();
        ensure!(
            off_plane < PLANAR_TOL,
            "surface '{name}': vertices are not coplanar (vertex 3 is {off_plane:.3e} off the plane)"
        );

        // Every corner must turn the same way around the plane normal.
        // Rejects concave, self-intersecting and zero-area quadrilaterals.
        for k in 0..4 {
            let turn = edges[k].cross(edges[(k + 1) % 4]).dot(vn);
            ensure!(
                turn > PLANAR_TOL,
                "surface '{name}': quadrilateral is concave, self-intersecting or degenerate at vertex {}",
                (k + 1) % 4
            );
        }

        let vn = match normal {
            Some(n) => {
                ensure!(
                    (n.length() - 1.0).abs() < UNIT_TOL,
                    "surface '{name}': normal {n} is not unit length"
                );
                ensure!(
                    n.dot(vn).abs() > 1.0 - UNIT_TOL,
                    "surface '{name}': normal {n} is not orthogonal to the surface plane"
                );
                n
            }
            None => vn,
        };

        Ok(Self {
            pts,
            vn,
            name: name.to_string(),
        })
    }

    /// Returns the ordered vertices.
    pub fn vertices(&self) -> &[Point] {
        &self.pts
    }

    /// Surface area, exact for parallelograms: |(v2-v1) x (v4-v1)|.
    pub fn area(&self) -> f64 {
        let v12 = Vector::from_points(self.pts[0], self.pts[1]);
        let v14 = Vector::from_points(self.pts[0], self.pts[3]);
        v12.cross(v14).length()
    }
}
