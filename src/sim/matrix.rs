//! All-pairs view factor matrix assembly.
//!
//! A thin driver around the estimator: one call per ordered (emitter,
//! receiver) pair, parallelized with rayon. Pairs are statistically
//! independent, so the only shared state is the disjoint output cells.
//! Each pair owns a generator seeded from the base seed and the pair
//! index, which makes a seeded run reproducible regardless of how rayon
//! schedules the pairs across threads.

use anyhow::Result;
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use rayon::prelude::*;

use crate::sim::config::MonteCarloConfig;
use crate::sim::estimator::estimate_view_factor;
use crate::Surface;

/// Row-major matrix of view factors: `get(i, j)` is F from surface i to j.
///
/// The diagonal is 0 for planar convex surfaces (a flat face cannot see
/// itself). Rows are raw Monte Carlo estimates; no reciprocity enforcement
/// or row normalization is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewFactorMatrix {
    values: Vec<f64>,
    n: usize,
}

impl ViewFactorMatrix {
    /// Number of surfaces (the matrix is size x size).
    pub fn size(&self) -> usize {
        self.n
    }

    /// View factor from surface i to surface j.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.n + j]
    }

    /// All view factors from surface i.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.n..(i + 1) * self.n]
    }

    /// Sum of row i; approaches 1 for a surface inside a closed enclosure.
    pub fn row_sum(&self, i: usize) -> f64 {
        self.row(i).iter().sum()
    }
}

/// Computes the view factor matrix for a set of surfaces.
///
/// All surfaces must share one normal orientation convention (e.g. all
/// inward for an enclosure). Invokes the estimator once per ordered pair,
/// including the diagonal, which deterministically yields 0.
pub fn assemble_view_factor_matrix(
    surfaces: &[Surface],
    config: &MonteCarloConfig,
) -> Result<ViewFactorMatrix> {
    let n = surfaces.len();
    let base_seed = config.seed.unwrap_or_else(|| rand::thread_rng().r#gen());

    let values = (0..n * n)
        .into_par_iter()
        .map(|idx| {
            let (i, j) = (idx / n, idx % n);
            let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(idx as u64));
            let est = estimate_view_factor(&surfaces[i], &surfaces[j], config.num_rays, &mut rng)?;
            Ok(est.value)
        })
        .collect::<Result<Vec<f64>>>()?;

    Ok(ViewFactorMatrix { values, n })
}
