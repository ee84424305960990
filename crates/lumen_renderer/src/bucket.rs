//! Bucket-based tile rendering.
//!
//! Divides the image into tiles (buckets) that are rendered independently
//! and in parallel using rayon. Each bucket owns a generator seeded from the
//! render seed and the bucket's position, so the result does not depend on
//! scheduling or thread count.

use crate::renderer::{render_pixel, ImageBuffer};
use crate::{Camera, Color, Hittable, RenderConfig};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use std::time::Instant;

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// X coordinate of bucket's top-left corner
    pub x: u32,
    /// Y coordinate of bucket's top-left corner
    pub y: u32,
    /// Width of the bucket in pixels
    pub width: u32,
    /// Height of the bucket in pixels
    pub height: u32,
    /// Index of this bucket in the render order
    pub index: usize,
}

impl Bucket {
    /// Create a new bucket.
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self { x, y, width, height, index }
    }

    /// Get the total number of pixels in this bucket.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }

    /// Seed for this bucket's generator.
    fn seed(&self, render_seed: u64) -> u64 {
        let position = (u64::from(self.y) << 32) | u64::from(self.x);
        render_seed ^ position.wrapping_mul(0x9E37_79B9_7F4A_7C15)
    }
}

/// Default bucket size in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// Generate buckets for an image, sorted in spiral order from center.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let bucket_size = bucket_size.max(1);
    let mut buckets = Vec::new();
    let mut index = 0;

    // Generate grid of buckets
    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let bw = bucket_size.min(width - x);
            let bh = bucket_size.min(height - y);
            buckets.push(Bucket::new(x, y, bw, bh, index));
            index += 1;
            x += bucket_size;
        }
        y += bucket_size;
    }

    sort_spiral(&mut buckets, width, height);

    // Update indices after sorting
    for (i, bucket) in buckets.iter_mut().enumerate() {
        bucket.index = i;
    }

    buckets
}

/// Sort buckets by distance from image center (spiral order).
fn sort_spiral(buckets: &mut [Bucket], width: u32, height: u32) {
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;

    let dist = |b: &Bucket| {
        let cx = b.x as f32 + b.width as f32 / 2.0;
        let cy = b.y as f32 + b.height as f32 / 2.0;
        (cx - center_x).powi(2) + (cy - center_y).powi(2)
    };

    // Stable sort: equidistant buckets keep grid order
    buckets.sort_by(|a, b| dist(a).total_cmp(&dist(b)));
}

/// Render a single bucket to a vector of colors.
///
/// Returns pixels in row-major order within the bucket.
pub fn render_bucket(
    bucket: &Bucket,
    camera: &Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
) -> Vec<Color> {
    let mut rng = StdRng::seed_from_u64(bucket.seed(config.seed));
    let mut pixels = Vec::with_capacity(bucket.pixel_count() as usize);

    for local_y in 0..bucket.height {
        for local_x in 0..bucket.width {
            let global_x = bucket.x + local_x;
            let global_y = bucket.y + local_y;
            pixels.push(render_pixel(camera, world, global_x, global_y, config, &mut rng));
        }
    }

    pixels
}

/// Result of rendering a bucket.
#[derive(Debug, Clone)]
pub struct BucketResult {
    /// The bucket that was rendered
    pub bucket: Bucket,
    /// Pixel colors in row-major order
    pub pixels: Vec<Color>,
}

impl BucketResult {
    /// Create a new bucket result.
    pub fn new(bucket: Bucket, pixels: Vec<Color>) -> Self {
        Self { bucket, pixels }
    }

    /// Copy the bucket's pixels into their place in `image`.
    pub fn write_into(&self, image: &mut ImageBuffer) {
        let mut colors = self.pixels.iter();
        for local_y in 0..self.bucket.height {
            for local_x in 0..self.bucket.width {
                if let Some(color) = colors.next() {
                    image.set(self.bucket.x + local_x, self.bucket.y + local_y, *color);
                }
            }
        }
    }
}

/// Render the scene on the rayon thread pool, one task per bucket.
pub fn render_parallel(
    camera: &Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
    bucket_size: u32,
) -> ImageBuffer {
    let mut image = ImageBuffer::new(camera.image_width(), camera.image_height());
    let buckets = generate_buckets(image.width, image.height, bucket_size);

    info!(
        "Rendering {}x{} @ {} spp, max depth {}, {} buckets on {} threads",
        image.width,
        image.height,
        config.samples_per_pixel,
        config.max_depth,
        buckets.len(),
        rayon::current_num_threads()
    );
    let start = Instant::now();

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| {
            let pixels = render_bucket(bucket, camera, world, config);
            debug!("Bucket {} at ({}, {}) done", bucket.index, bucket.x, bucket.y);
            BucketResult::new(*bucket, pixels)
        })
        .collect();

    for result in &results {
        result.write_into(&mut image);
    }

    info!("Rendered in {:.2?}", start.elapsed());
    image
}
