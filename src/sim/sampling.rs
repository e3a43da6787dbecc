//! Emitter sampling: random points on a surface and cosine-weighted
//! emission directions about its normal.
//!
//! Both samplers are pure functions of the surface geometry and the random
//! draws they consume, so trials can run on any thread as long as each
//! execution context owns its generator. Each sampler consumes exactly two
//! uniform draws, which fixes the (seed, trial index) -> draws mapping for
//! reproducible runs.

use std::f64::consts::PI;

use crate::{Point, Surface, Vector};

/// Samples a random point on a surface.
///
/// Uses the bilinear map `p = v1 + xi1*(v2-v1) + xi2*(v4-v1)`, which is
/// area-uniform exactly when the surface is a parallelogram (rectangles
/// included). For other convex quadrilaterals the point still lies on the
/// surface plane but the distribution is skewed.
pub fn sample_point_on_surface(surface: &Surface, rng: &mut impl rand::Rng) -> Point {
    let pts = surface.vertices();
    let xi1: f64 = rng.r#gen();
    let xi2: f64 = rng.r#gen();
    let v12 = Vector::from_points(pts[0], pts[1]);
    let v14 = Vector::from_points(pts[0], pts[3]);
    pts[0] + v12 * xi1 + v14 * xi2
}

/// Samples a cosine-weighted (Lambertian) hemisphere direction about a
/// unit normal.
///
/// Zenith angle theta = asin(sqrt(xi3)) and azimuth phi = 2*pi*xi4 give a
/// local direction with pdf cos(theta)/pi, which is then rotated into world
/// coordinates through an orthonormal {tangent, bitangent, normal} basis.
///
/// The helper axis for the basis is the world axis matching the normal's
/// smallest-magnitude component. A unit normal's smallest component is at
/// most 1/sqrt(3), so the helper can never be parallel to the normal and
/// the cross product below cannot degenerate.
pub fn sample_emission_direction(normal: Vector, rng: &mut impl rand::Rng) -> Vector {
    let xi3: f64 = rng.r#gen();
    let xi4: f64 = rng.r#gen();
    let theta = xi3.sqrt().asin();
    let phi = 2.0 * PI * xi4;
    let local = Vector::new(
        phi.cos() * theta.sin(),
        phi.sin() * theta.sin(),
        theta.cos(),
    );

    let ax = normal.dx.abs();
    let ay = normal.dy.abs();
    let az = normal.dz.abs();
    let helper = if ax <= ay && ax <= az {
        Vector::new(1.0, 0.0, 0.0)
    } else if ay <= az {
        Vector::new(0.0, 1.0, 0.0)
    } else {
        Vector::new(0.0, 0.0, 1.0)
    };

    let tangent = helper
        .cross(normal)
        .normalize()
        .unwrap_or(Vector::new(1.0, 0.0, 0.0));
    let bitangent = normal.cross(tangent);

    tangent * local.dx + bitangent * local.dy + normal * local.dz
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_point_sampling_stays_on_surface() {
        let surface = Surface::new(
            "rect",
            vec![
                Point::new(0., 0., 0.),
                Point::new(2., 0., 0.),
                Point::new(2., 3., 0.),
                Point::new(0., 3., 0.),
            ],
            None,
        )
        .unwrap();

        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1000 {
            let pt = sample_point_on_surface(&surface, &mut rng);
            assert!(pt.x >= -1e-10 && pt.x <= 2.0 + 1e-10, "x={} out of range", pt.x);
            assert!(pt.y >= -1e-10 && pt.y <= 3.0 + 1e-10, "y={} out of range", pt.y);
            assert!(pt.z.abs() < 1e-10, "z={} should be ~0", pt.z);
        }
    }

    #[test]
    fn test_directions_are_unit_and_in_hemisphere() {
        let normals = [
            Vector::new(0., 0., 1.),
            Vector::new(0., 0., -1.),
            Vector::new(1., 0., 0.),
            Vector::new(0., -1., 0.),
            Vector::new(1., 2., 3.).normalize().unwrap(),
        ];
        let mut rng = StdRng::seed_from_u64(2);
        for normal in normals {
            for _ in 0..1000 {
                let dir = sample_emission_direction(normal, &mut rng);
                assert!((dir.length() - 1.0).abs() < 1e-9, "non-unit direction {dir}");
                assert!(
                    dir.dot(normal) > 0.0,
                    "direction {dir} below hemisphere of {normal}"
                );
            }
        }
    }

    #[test]
    fn test_cosine_weighting() {
        // For a cosine-weighted hemisphere the mean of cos(theta) is 2/3.
        let normal = Vector::new(0., 1., 0.);
        let mut rng = StdRng::seed_from_u64(3);
        let n = 20_000;
        let mut sum_cos = 0.0;
        for _ in 0..n {
            let dir = sample_emission_direction(normal, &mut rng);
            sum_cos += dir.dot(normal);
        }
        let mean_cos = sum_cos / n as f64;
        assert!(
            (mean_cos - 2.0 / 3.0).abs() < 0.02,
            "mean cos(theta) = {mean_cos:.4}, expected ~0.6667"
        );
    }

    #[test]
    fn test_sampling_is_seed_deterministic() {
        let normal = Vector::new(0.6, 0.0, 0.8);
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let da = sample_emission_direction(normal, &mut rng_a);
            let db = sample_emission_direction(normal, &mut rng_b);
            assert_eq!(da, db);
        }
    }
}
