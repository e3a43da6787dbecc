pub mod geom;
pub mod sim;

// Prelude
pub use geom::point::Point;
pub use geom::ray::Ray;
pub use geom::surface::Surface;
pub use geom::vector::Vector;
pub use sim::config::MonteCarloConfig;
pub use sim::estimator::{ViewFactorEstimate, estimate_view_factor};
pub use sim::intersect::ray_hits_surface;
pub use sim::matrix::{ViewFactorMatrix, assemble_view_factor_matrix};
pub use sim::sampling::{sample_emission_direction, sample_point_on_surface};
