use std::time::Instant;

use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use viewfactors::{
    MonteCarloConfig, Point, Surface, Vector, assemble_view_factor_matrix, estimate_view_factor,
};

/// Builds the six faces of a shoebox room with inward-facing normals.
fn shoebox(width: f64, depth: f64, height: f64) -> Result<Vec<Surface>> {
    let pt = |x: f64, y: f64, z: f64| Point::new(x, y, z);
    let (w, d, h) = (width, depth, height);

    let faces = [
        (
            "bottom",
            vec![pt(0., 0., 0.), pt(w, 0., 0.), pt(w, 0., h), pt(0., 0., h)],
            Vector::new(0., 1., 0.),
        ),
        (
            "top",
            vec![pt(0., d, 0.), pt(w, d, 0.), pt(w, d, h), pt(0., d, h)],
            Vector::new(0., -1., 0.),
        ),
        (
            "left",
            vec![pt(0., 0., 0.), pt(0., 0., h), pt(0., d, h), pt(0., d, 0.)],
            Vector::new(1., 0., 0.),
        ),
        (
            "right",
            vec![pt(w, 0., 0.), pt(w, 0., h), pt(w, d, h), pt(w, d, 0.)],
            Vector::new(-1., 0., 0.),
        ),
        (
            "back",
            vec![pt(0., 0., h), pt(w, 0., h), pt(w, d, h), pt(0., d, h)],
            Vector::new(0., 0., -1.),
        ),
        (
            "front",
            vec![pt(0., 0., 0.), pt(w, 0., 0.), pt(w, d, 0.), pt(0., d, 0.)],
            Vector::new(0., 0., 1.),
        ),
    ];

    faces
        .into_iter()
        .map(|(name, pts, vn)| Surface::new(name, pts, Some(vn)))
        .collect()
}

fn main() -> Result<()> {
    let surfaces = shoebox(0.596, 1.997, 0.996)?;
    let num_rays = 100_000;

    // Single pair: bottom -> top.
    let t0 = Instant::now();
    let mut rng = StdRng::seed_from_u64(0);
    let est = estimate_view_factor(&surfaces[0], &surfaces[1], num_rays, &mut rng)?;
    println!(
        "F({} -> {}) = {:.4} +/- {:.4}  ({:.2?})",
        surfaces[0].name,
        surfaces[1].name,
        est.value,
        est.standard_error(),
        t0.elapsed()
    );

    // Full matrix over all ordered face pairs.
    let config = MonteCarloConfig {
        num_rays,
        seed: Some(0),
    };
    let t0 = Instant::now();
    let matrix = assemble_view_factor_matrix(&surfaces, &config)?;
    println!("\nView factor matrix ({:.2?}):", t0.elapsed());
    print!("{:>8}", "");
    for s in &surfaces {
        print!("{:>8}", s.name);
    }
    println!();
    for (i, s) in surfaces.iter().enumerate() {
        print!("{:>8}", s.name);
        for j in 0..matrix.size() {
            print!("{:>8.4}", matrix.get(i, j));
        }
        println!("  (sum {:.4})", matrix.row_sum(i));
    }

    Ok(())
}
