//! Camera for ray generation.

use crate::Ray;
use lumen_math::random::{gen_f32, random_in_unit_disk};
use lumen_math::Vec3;
use log::debug;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when camera parameters cannot describe a valid view.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CameraError {
    #[error("image width must be at least one pixel")]
    ZeroWidth,

    #[error("aspect ratio must be positive and finite, got {0}")]
    InvalidAspectRatio(f32),

    #[error("vertical field of view must be in (0, 180) degrees, got {0}")]
    InvalidFieldOfView(f32),

    #[error("focus distance must be positive, got {0}")]
    InvalidFocusDistance(f32),

    #[error("defocus angle must be non-negative, got {0}")]
    InvalidDefocusAngle(f32),

    #[error("camera position, target and up vector must be finite, distinct points")]
    DegenerateView,

    #[error("up vector is zero or parallel to the view direction")]
    DegenerateUp,
}

/// User-facing camera parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    // Image settings
    pub aspect_ratio: f32,
    pub image_width: u32,

    // Camera positioning
    pub look_from: Vec3,
    pub look_at: Vec3,
    pub vup: Vec3,

    // Lens settings
    pub vfov: f32,          // Vertical field of view in degrees
    pub defocus_angle: f32, // Variation angle of rays through each pixel
    pub focus_dist: f32,    // Distance from camera to plane of perfect focus
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            aspect_ratio: 16.0 / 9.0,
            image_width: 400,
            look_from: Vec3::new(0.0, 0.0, 0.0),
            look_at: Vec3::new(0.0, 0.0, -1.0),
            vup: Vec3::new(0.0, 1.0, 0.0),
            vfov: 90.0,
            defocus_angle: 0.0,
            focus_dist: 10.0,
        }
    }
}

impl CameraConfig {
    /// Set image width and aspect ratio.
    pub fn with_resolution(mut self, image_width: u32, aspect_ratio: f32) -> Self {
        self.image_width = image_width;
        self.aspect_ratio = aspect_ratio;
        self
    }

    /// Set camera position.
    pub fn with_position(mut self, look_from: Vec3, look_at: Vec3, vup: Vec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.vup = vup;
        self
    }

    /// Set lens settings.
    pub fn with_lens(mut self, vfov: f32, defocus_angle: f32, focus_dist: f32) -> Self {
        self.vfov = vfov;
        self.defocus_angle = defocus_angle;
        self.focus_dist = focus_dist;
        self
    }

    fn validate(&self) -> Result<(), CameraError> {
        if self.image_width == 0 {
            return Err(CameraError::ZeroWidth);
        }
        if !(self.aspect_ratio.is_finite() && self.aspect_ratio > 0.0) {
            return Err(CameraError::InvalidAspectRatio(self.aspect_ratio));
        }
        if !(self.vfov > 0.0 && self.vfov < 180.0) {
            return Err(CameraError::InvalidFieldOfView(self.vfov));
        }
        if !(self.focus_dist.is_finite() && self.focus_dist > 0.0) {
            return Err(CameraError::InvalidFocusDistance(self.focus_dist));
        }
        if !(self.defocus_angle >= 0.0 && self.defocus_angle < 180.0) {
            return Err(CameraError::InvalidDefocusAngle(self.defocus_angle));
        }
        if !(self.look_from.is_finite() && self.look_at.is_finite() && self.vup.is_finite())
            || (self.look_from - self.look_at).length_squared() == 0.0
        {
            return Err(CameraError::DegenerateView);
        }
        let w = self.look_from - self.look_at;
        if self.vup.cross(w).length_squared() <= 1e-12 * w.length_squared() {
            return Err(CameraError::DegenerateUp);
        }
        Ok(())
    }
}

/// Camera for generating rays into the scene.
///
/// All geometry is derived once in [`Camera::new`] and never changes, so a
/// camera can be shared freely between render threads.
#[derive(Debug, Clone)]
pub struct Camera {
    image_width: u32,
    image_height: u32,
    defocus_angle: f32,

    center: Vec3,
    pixel00_loc: Vec3,
    pixel_delta_u: Vec3,
    pixel_delta_v: Vec3,
    u: Vec3,
    v: Vec3,
    w: Vec3,
    lens_radius: f32,
    defocus_disk_u: Vec3,
    defocus_disk_v: Vec3,
}

impl Camera {
    /// Derive the camera basis and viewport from its parameters.
    pub fn new(config: &CameraConfig) -> Result<Self, CameraError> {
        config.validate()?;

        let image_width = config.image_width;
        let image_height = ((image_width as f32 / config.aspect_ratio) as u32).max(1);
        let center = config.look_from;

        // Calculate viewport dimensions
        let theta = config.vfov.to_radians();
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h * config.focus_dist;
        let viewport_width = viewport_height * (image_width as f32 / image_height as f32);

        // Calculate camera basis vectors
        let w = (config.look_from - config.look_at).normalize();
        let u = config.vup.cross(w).normalize();
        let v = w.cross(u);

        // Calculate viewport vectors
        let viewport_u = viewport_width * u;
        let viewport_v = -viewport_height * v;

        // Calculate pixel delta vectors
        let pixel_delta_u = viewport_u / image_width as f32;
        let pixel_delta_v = viewport_v / image_height as f32;

        // Calculate upper left pixel location
        let viewport_upper_left =
            center - config.focus_dist * w - viewport_u / 2.0 - viewport_v / 2.0;
        let pixel00_loc = viewport_upper_left + 0.5 * (pixel_delta_u + pixel_delta_v);

        // Calculate defocus disk basis vectors
        let lens_radius = config.focus_dist * (config.defocus_angle / 2.0).to_radians().tan();

        debug!(
            "Camera {}x{}: viewport {:.3}x{:.3}, lens radius {:.4}",
            image_width, image_height, viewport_width, viewport_height, lens_radius
        );

        Ok(Self {
            image_width,
            image_height,
            defocus_angle: config.defocus_angle,
            center,
            pixel00_loc,
            pixel_delta_u,
            pixel_delta_v,
            u,
            v,
            w,
            lens_radius,
            defocus_disk_u: u * lens_radius,
            defocus_disk_v: v * lens_radius,
        })
    }

    pub fn image_width(&self) -> u32 {
        self.image_width
    }

    pub fn image_height(&self) -> u32 {
        self.image_height
    }

    /// Eye point (the lens centre).
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Orthonormal camera frame `(u, v, w)`: right, up, and backwards.
    pub fn basis(&self) -> (Vec3, Vec3, Vec3) {
        (self.u, self.v, self.w)
    }

    pub fn lens_radius(&self) -> f32 {
        self.lens_radius
    }

    /// Generate a ray for pixel (i, j) jittered within the pixel footprint.
    pub fn get_ray(&self, i: u32, j: u32, rng: &mut dyn RngCore) -> Ray {
        let offset = sample_square(rng);
        self.ray_through(i as f32 + offset.x, j as f32 + offset.y, rng)
    }

    /// Generate a ray through fractional pixel coordinates.
    ///
    /// Integer coordinates land on pixel centres. The generator is only drawn
    /// from when the lens has a non-zero aperture.
    pub fn ray_through(&self, x: f32, y: f32, rng: &mut dyn RngCore) -> Ray {
        let pixel_sample = self.pixel00_loc + x * self.pixel_delta_u + y * self.pixel_delta_v;

        let ray_origin = if self.defocus_angle <= 0.0 {
            self.center
        } else {
            self.defocus_disk_sample(rng)
        };

        Ray::new(ray_origin, pixel_sample - ray_origin)
    }

    /// Sample a point on the defocus disk.
    fn defocus_disk_sample(&self, rng: &mut dyn RngCore) -> Vec3 {
        let p = random_in_unit_disk(rng);
        self.center + p.x * self.defocus_disk_u + p.y * self.defocus_disk_v
    }
}

/// Sample a random point in the unit square [-0.5, 0.5] x [-0.5, 0.5].
fn sample_square(rng: &mut dyn RngCore) -> Vec3 {
    Vec3::new(gen_f32(rng) - 0.5, gen_f32(rng) - 0.5, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const EPS: f32 = 1e-4;

    fn square_camera(defocus_angle: f32) -> Camera {
        let config = CameraConfig::default()
            .with_resolution(101, 1.0)
            .with_position(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y)
            .with_lens(90.0, defocus_angle, 1.0);
        Camera::new(&config).unwrap()
    }

    #[test]
    fn test_default_resolution() {
        let camera = Camera::new(&CameraConfig::default()).unwrap();
        assert_eq!(camera.image_width(), 400);
        assert_eq!(camera.image_height(), 225);
    }

    #[test]
    fn test_height_never_zero() {
        let config = CameraConfig::default().with_resolution(4, 100.0);
        assert_eq!(Camera::new(&config).unwrap().image_height(), 1);
    }

    #[test]
    fn test_basis_is_orthonormal() {
        let config = CameraConfig::default()
            .with_position(Vec3::new(13.0, 2.0, 3.0), Vec3::ZERO, Vec3::Y)
            .with_lens(20.0, 0.6, 10.0);
        let camera = Camera::new(&config).unwrap();
        let (u, v, w) = camera.basis();

        for axis in [u, v, w] {
            assert!((axis.length() - 1.0).abs() < EPS);
        }
        assert!(u.dot(v).abs() < EPS);
        assert!(v.dot(w).abs() < EPS);
        assert!(w.dot(u).abs() < EPS);
        assert!((w - Vec3::new(13.0, 2.0, 3.0).normalize()).length() < EPS);
        assert!(v.y > 0.0);
    }

    #[test]
    fn test_center_ray_looks_at_target() {
        let camera = square_camera(0.0);
        let mut rng = StdRng::seed_from_u64(42);

        let ray = camera.ray_through(50.0, 50.0, &mut rng);
        assert_eq!(ray.origin(), Vec3::ZERO);
        assert!((ray.direction().normalize() - Vec3::NEG_Z).length() < EPS);
    }

    #[test]
    fn test_corner_orientation() {
        let camera = square_camera(0.0);
        let mut rng = StdRng::seed_from_u64(42);

        // Pixel (0, 0) is the upper left corner of the image
        let ray = camera.ray_through(0.0, 0.0, &mut rng);
        assert!(ray.direction().x < 0.0);
        assert!(ray.direction().y > 0.0);

        let ray = camera.ray_through(100.0, 100.0, &mut rng);
        assert!(ray.direction().x > 0.0);
        assert!(ray.direction().y < 0.0);
    }

    #[test]
    fn test_viewport_spans_field_of_view() {
        // 90 degree fov at focus distance 1: the viewport spans [-1, 1]
        let camera = square_camera(0.0);
        let mut rng = StdRng::seed_from_u64(0);

        let top = camera.ray_through(50.0, -0.5, &mut rng);
        assert!((top.direction() - Vec3::new(0.0, 1.0, -1.0)).length() < EPS);
    }

    #[test]
    fn test_jitter_stays_in_pixel() {
        let camera = square_camera(0.0);
        let mut rng = StdRng::seed_from_u64(3);
        let center = camera.ray_through(10.0, 20.0, &mut rng).direction();
        let half_pixel = 1.0 / 101.0;

        for _ in 0..200 {
            let d = camera.get_ray(10, 20, &mut rng).direction();
            assert!((d.x - center.x).abs() <= half_pixel + EPS);
            assert!((d.y - center.y).abs() <= half_pixel + EPS);
            assert_eq!(d.z, center.z);
        }
    }

    #[test]
    fn test_pinhole_origin() {
        let camera = square_camera(0.0);
        let mut rng = StdRng::seed_from_u64(9);

        assert_eq!(camera.lens_radius(), 0.0);
        for _ in 0..10 {
            assert_eq!(camera.get_ray(3, 7, &mut rng).origin(), camera.center());
        }
    }

    #[test]
    fn test_defocus_origins_on_lens() {
        let camera = square_camera(10.0);
        let mut rng = StdRng::seed_from_u64(9);
        let (_, _, w) = camera.basis();
        let radius = camera.lens_radius();

        assert!((radius - 5f32.to_radians().tan()).abs() < EPS);
        for _ in 0..200 {
            let offset = camera.get_ray(50, 50, &mut rng).origin() - camera.center();
            assert!(offset.length() < radius + EPS);
            assert!(offset.dot(w).abs() < EPS);
        }
    }

    #[test]
    fn test_defocus_rays_converge_on_focus_plane() {
        let camera = square_camera(10.0);
        let mut rng = StdRng::seed_from_u64(12);

        for _ in 0..50 {
            let ray = camera.ray_through(50.0, 50.0, &mut rng);
            // Every lens sample passes through the same in-focus point
            assert!((ray.point_at_parameter(1.0) - Vec3::new(0.0, 0.0, -1.0)).length() < EPS);
        }
    }

    #[test]
    fn test_seeded_rays_repeat() {
        let camera = square_camera(2.0);
        let mut a = StdRng::seed_from_u64(5);
        let mut b = StdRng::seed_from_u64(5);

        for _ in 0..20 {
            assert_eq!(camera.get_ray(4, 4, &mut a), camera.get_ray(4, 4, &mut b));
        }
    }

    #[test]
    fn test_invalid_configs() {
        let base = CameraConfig::default();

        let cases = [
            (base.clone().with_resolution(0, 1.0), CameraError::ZeroWidth),
            (
                base.clone().with_resolution(100, 0.0),
                CameraError::InvalidAspectRatio(0.0),
            ),
            (
                base.clone().with_lens(180.0, 0.0, 1.0),
                CameraError::InvalidFieldOfView(180.0),
            ),
            (
                base.clone().with_lens(90.0, 0.0, 0.0),
                CameraError::InvalidFocusDistance(0.0),
            ),
            (
                base.clone().with_lens(90.0, -1.0, 1.0),
                CameraError::InvalidDefocusAngle(-1.0),
            ),
            (
                base.clone().with_position(Vec3::ONE, Vec3::ONE, Vec3::Y),
                CameraError::DegenerateView,
            ),
            (
                base.clone().with_position(Vec3::splat(f32::NAN), Vec3::ZERO, Vec3::Y),
                CameraError::DegenerateView,
            ),
            (
                base.clone().with_position(Vec3::ZERO, Vec3::new(0.0, 0.0, f32::INFINITY), Vec3::Y),
                CameraError::DegenerateView,
            ),
            (
                base.clone().with_position(Vec3::ZERO, Vec3::NEG_Z, Vec3::new(0.0, f32::NAN, 0.0)),
                CameraError::DegenerateView,
            ),
            (
                base.clone().with_position(Vec3::ZERO, Vec3::NEG_Y, Vec3::Y),
                CameraError::DegenerateUp,
            ),
        ];

        for (config, expected) in cases {
            assert_eq!(Camera::new(&config).unwrap_err(), expected);
        }
    }

    #[test]
    fn test_config_from_json() {
        let config: CameraConfig =
            serde_json::from_str(r#"{ "image_width": 64, "vfov": 20.0, "look_from": [13.0, 2.0, 3.0] }"#)
                .unwrap();

        assert_eq!(config.image_width, 64);
        assert_eq!(config.vfov, 20.0);
        assert_eq!(config.look_from, Vec3::new(13.0, 2.0, 3.0));
        assert_eq!(config.focus_dist, CameraConfig::default().focus_dist);
    }
}
