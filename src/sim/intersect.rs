//! Ray/surface intersection test for view factor trials.
//!
//! Deterministic given its inputs; all randomness is upstream in the
//! samplers. A "no hit" outcome (parallel ray, back-face approach,
//! intersection behind the origin or outside the quadrilateral) is a normal
//! per-trial result, not an error.

use crate::{Ray, Surface, Vector};

/// Rays closer to parallel with the receiver plane than this are treated
/// as grazing and rejected.
const PARALLEL_EPS: f64 = 1e-10;

/// Returns true if the ray strikes the front face of the surface.
///
/// The front face is the side the surface normal points away from the
/// incoming ray, so emitter and receiver normals must follow one consistent
/// orientation convention (e.g. all inward for an enclosure).
///
/// The containment test projects the intersection point onto the receiver's
/// edge vectors, which is exact for parallelograms (same assumption as
/// point sampling).
pub fn ray_hits_surface(ray: &Ray, surface: &Surface) -> bool {
    let vn = surface.vn;
    let denom = ray.direction.dot(vn);

    // Parallel to the receiver plane.
    if denom.abs() < PARALLEL_EPS {
        return false;
    }
    // Not approaching the front face.
    if denom >= 0.0 {
        return false;
    }

    let pts = surface.vertices();
    let t = Vector::from_points(ray.origin, pts[0]).dot(vn) / denom;
    if t < 0.0 {
        return false; // Intersection behind the ray origin
    }

    let intersection = ray.point_at(t);

    // Edge-projection containment test.
    let vp = Vector::from_points(pts[0], intersection);
    let v12 = Vector::from_points(pts[0], pts[1]);
    let v14 = Vector::from_points(pts[0], pts[3]);
    let a = vp.dot(v12) / v12.dot(v12);
    let b = vp.dot(v14) / v14.dot(v14);

    (0.0..=1.0).contains(&a) && (0.0..=1.0).contains(&b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Point;

    fn receiver_at_z1() -> Surface {
        // Unit square at z=1 with normal pointing down (towards the origin).
        Surface::new(
            "receiver",
            vec![
                Point::new(0., 0., 1.),
                Point::new(1., 0., 1.),
                Point::new(1., 1., 1.),
                Point::new(0., 1., 1.),
            ],
            Some(Vector::new(0., 0., -1.)),
        )
        .unwrap()
    }

    #[test]
    fn test_direct_hit() {
        let receiver = receiver_at_z1();
        let ray = Ray::new(Point::new(0.5, 0.5, 0.), Vector::new(0., 0., 1.));
        assert!(ray_hits_surface(&ray, &receiver));
    }

    #[test]
    fn test_miss_outside_bounds() {
        let receiver = receiver_at_z1();
        let ray = Ray::new(Point::new(2.5, 0.5, 0.), Vector::new(0., 0., 1.));
        assert!(!ray_hits_surface(&ray, &receiver));
    }

    #[test]
    fn test_hit_on_edge_counts() {
        let receiver = receiver_at_z1();
        let ray = Ray::new(Point::new(1.0, 1.0, 0.), Vector::new(0., 0., 1.));
        assert!(ray_hits_surface(&ray, &receiver));
    }

    #[test]
    fn test_back_face_rejected() {
        let receiver = receiver_at_z1();
        // Ray from above moving down hits the back of the receiver.
        let ray = Ray::new(Point::new(0.5, 0.5, 2.), Vector::new(0., 0., -1.));
        assert!(!ray_hits_surface(&ray, &receiver));
    }

    #[test]
    fn test_parallel_ray_rejected() {
        let receiver = receiver_at_z1();
        let ray = Ray::new(Point::new(0.5, 0.5, 0.), Vector::new(1., 0., 0.));
        assert!(!ray_hits_surface(&ray, &receiver));
    }

    #[test]
    fn test_intersection_behind_origin_rejected() {
        let receiver = receiver_at_z1();
        // Moving away from the plane: the mathematical intersection has t < 0.
        let ray = Ray::new(Point::new(0.5, 0.5, 2.), Vector::new(0., 0., 1.));
        assert!(!ray_hits_surface(&ray, &receiver));
    }

    #[test]
    fn test_oblique_hit() {
        let receiver = receiver_at_z1();
        let dir = Vector::new(0.3, 0.3, 1.0).normalize().unwrap();
        // Lands at (0.8, 0.8, 1.0), inside the receiver.
        let ray = Ray::new(Point::new(0.5, 0.5, 0.), dir);
        assert!(ray_hits_surface(&ray, &receiver));
        // Lands at (1.1, 1.1, 1.0), outside.
        let ray = Ray::new(Point::new(0.8, 0.8, 0.), dir);
        assert!(!ray_hits_surface(&ray, &receiver));
    }
}
