// Re-export glam for convenience
pub use glam::*;

// Lumen math types
mod interval;
mod ray;
pub mod random;
mod vector;

pub use interval::Interval;
pub use ray::Ray;
pub use vector::{near_zero, reflect, refract, unit_vector};
