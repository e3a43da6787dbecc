pub mod point;
pub mod ray;
pub mod surface;
pub mod vector;

/// Geometric precision
const EPS: f64 = 1e-13;
