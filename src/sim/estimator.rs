//! Monte Carlo view factor estimation between two surfaces.
//!
//! Each trial samples one point and one cosine-weighted direction on the
//! emitter and tests the resulting ray against the receiver. The view
//! factor estimate is `hits / num_rays`, converging to the true value as
//! O(1/sqrt(num_rays)).

use anyhow::{Result, ensure};

use crate::sim::intersect::ray_hits_surface;
use crate::sim::sampling::{sample_emission_direction, sample_point_on_surface};
use crate::{Ray, Surface};

/// Upper bound on rays per pair, keeping a single call's run time bounded.
pub const MAX_RAYS: usize = 100_000_000;

/// Result of one view factor estimation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewFactorEstimate {
    /// Estimated view factor in [0, 1]; an exact multiple of 1/num_rays.
    pub value: f64,
    /// Number of rays that struck the receiver's front face.
    pub hits: u64,
    /// Number of rays cast.
    pub num_rays: usize,
}

impl ViewFactorEstimate {
    /// Standard error of the binomial proportion: sqrt(p * (1 - p) / N).
    pub fn standard_error(&self) -> f64 {
        let p = self.value;
        (p * (1.0 - p) / self.num_rays as f64).sqrt()
    }
}

/// Estimates the view factor from `emitter` to `receiver` with `num_rays`
/// independent trials.
///
/// Both surfaces must use the same normal orientation convention. Surface
/// invariants are enforced by `Surface::new`, so the only argument checked
/// here is the trial count; the check runs before any trial. Consumes
/// exactly `4 * num_rays` uniform draws from `rng` in a fixed order, so a
/// seeded generator makes the run bit-reproducible.
pub fn estimate_view_factor(
    emitter: &Surface,
    receiver: &Surface,
    num_rays: usize,
    rng: &mut impl rand::Rng,
) -> Result<ViewFactorEstimate> {
    ensure!(num_rays > 0, "number of rays must be positive");
    ensure!(
        num_rays <= MAX_RAYS,
        "number of rays {num_rays} exceeds the maximum of {MAX_RAYS}"
    );

    let mut hits: u64 = 0;
    for _ in 0..num_rays {
        let origin = sample_point_on_surface(emitter, rng);
        let direction = sample_emission_direction(emitter.vn, rng);
        let ray = Ray::new(origin, direction);
        if ray_hits_surface(&ray, receiver) {
            hits += 1;
        }
    }

    Ok(ViewFactorEstimate {
        value: hits as f64 / num_rays as f64,
        hits,
        num_rays,
    })
}
