//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Recursive ray tracing with a bounce limit
//! - Sky gradient background
//! - Anti-aliasing via multi-sampling
//! - Gamma correction on output

use crate::{Camera, Color, Hittable, Ray};
use lumen_math::{unit_vector, Interval};
use log::info;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Smallest accepted hit distance for secondary rays; keeps a bounced ray
/// from re-hitting the surface it just left.
pub const T_MIN: f32 = 0.001;

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth
    pub max_depth: u32,
    /// Seed for the random streams
    pub seed: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            samples_per_pixel: 100,
            max_depth: 50,
            seed: 0,
        }
    }
}

/// Compute the color seen by a ray.
///
/// Follows a single path: every scatter multiplies the attenuation into the
/// color returned by the next bounce. The path ends in black when the
/// material absorbs it or `depth` runs out, and in the sky otherwise.
pub fn ray_color(ray: &Ray, world: &dyn Hittable, depth: u32, rng: &mut dyn RngCore) -> Color {
    // Bounce limit reached: no more light is gathered
    if depth == 0 {
        return Color::ZERO;
    }

    let Some(rec) = world.hit(ray, Interval::new(T_MIN, f32::INFINITY)) else {
        return sky_gradient(ray);
    };

    match rec.material.scatter(ray, &rec, rng) {
        Some(result) => result.attenuation * ray_color(&result.scattered, world, depth - 1, rng),
        None => Color::ZERO,
    }
}

/// Compute sky gradient background.
///
/// White looking straight down, sky blue looking straight up.
pub fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = unit_vector(ray.direction());
    let a = 0.5 * (unit_direction.y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    white * (1.0 - a) + blue * a
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Convert a linear color to 8-bit RGB.
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    let intensity = Interval::new(0.0, 1.0);
    let to_byte = |c: f32| (255.99 * intensity.clamp(linear_to_gamma(c))) as u8;
    [to_byte(color.x), to_byte(color.y), to_byte(color.z)]
}

/// Render a single pixel with multi-sampling.
///
/// Returns the mean of `samples_per_pixel` jittered path samples.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    i: u32,
    j: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let samples = config.samples_per_pixel.max(1);
    let mut pixel_color = Color::ZERO;

    for _ in 0..samples {
        let ray = camera.get_ray(i, j, rng);
        pixel_color += ray_color(&ray, world, config.max_depth, rng);
    }

    let pixel_color = pixel_color / samples as f32;
    debug_assert!(
        pixel_color.is_finite(),
        "non-finite color {pixel_color} at pixel ({i}, {j})"
    );
    pixel_color
}

/// Linear color image, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Gamma-corrected 8-bit RGB bytes, three per pixel.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| color_to_rgb8(*c)).collect()
    }
}

/// Render the entire scene to an image buffer.
///
/// Single-threaded, drawing every sample from one generator seeded with
/// `config.seed`.
pub fn render(camera: &Camera, world: &dyn Hittable, config: &RenderConfig) -> ImageBuffer {
    let mut image = ImageBuffer::new(camera.image_width(), camera.image_height());
    let mut rng = StdRng::seed_from_u64(config.seed);

    info!(
        "Rendering {}x{} @ {} spp, max depth {}",
        image.width, image.height, config.samples_per_pixel, config.max_depth
    );
    let start = Instant::now();

    for y in 0..image.height {
        for x in 0..image.width {
            let color = render_pixel(camera, world, x, y, config, &mut rng);
            image.set(x, y, color);
        }
    }

    info!("Rendered in {:.2?}", start.elapsed());
    image
}
