pub mod config;
pub mod estimator;
pub mod intersect;
pub mod matrix;
pub mod sampling;
