//! Lumen renderer - recursive Monte Carlo ray tracing.
//!
//! Traces camera rays through a scene of spheres, scattering them off
//! diffuse, metal, and glass surfaces until they escape to the sky, are
//! absorbed, or run out of bounces.

mod bucket;
mod camera;
mod hittable;
mod material;
mod renderer;
mod scene;
mod sphere;

pub use bucket::{
    generate_buckets, render_bucket, render_parallel, Bucket, BucketResult, DEFAULT_BUCKET_SIZE,
};
pub use camera::{Camera, CameraConfig, CameraError};
pub use hittable::{HitRecord, Hittable};
pub use material::{Color, Material, ScatterResult};
pub use renderer::{
    color_to_rgb8, linear_to_gamma, ray_color, render, render_pixel, sky_gradient, ImageBuffer,
    RenderConfig, T_MIN,
};
pub use scene::Scene;
pub use sphere::Sphere;

/// Re-export Vec3 and common math types from lumen_math
pub use lumen_math::{Interval, Ray, Vec3};
