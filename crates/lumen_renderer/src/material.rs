//! Surface materials and their scattering behavior.

use crate::{hittable::HitRecord, Ray};
use lumen_math::random::{gen_f32, random_in_unit_sphere};
use lumen_math::{near_zero, reflect, refract, unit_vector, Vec3};
use rand::RngCore;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Outcome of a successful scatter event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterResult {
    /// Per-channel factor applied to the light carried back along `scattered`
    pub attenuation: Color,
    /// The bounced ray, leaving from the hit point
    pub scattered: Ray,
}

/// The closed set of surface materials.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    /// Matte diffuse surface.
    Lambertian { albedo: Color },
    /// Mirror-like surface; `fuzz` in [0, 1] widens the reflection lobe.
    Metal { albedo: Color, fuzz: f32 },
    /// Clear refractive surface such as glass or water.
    Dielectric { refraction_index: f32 },
}

impl Material {
    /// Create a new Lambertian material with the given albedo color.
    pub fn lambertian(albedo: Color) -> Self {
        Material::Lambertian { albedo }
    }

    /// Create a new Metal material.
    ///
    /// - `albedo`: The color of the metal
    /// - `fuzz`: Roughness, 0.0 = perfect mirror, 1.0 = very rough
    pub fn metal(albedo: Color, fuzz: f32) -> Self {
        Material::Metal {
            albedo,
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }

    /// Create a new Dielectric material.
    ///
    /// - `refraction_index`: 1.0 = air, 1.33 = water, 1.5 = glass, 2.4 = diamond
    pub fn dielectric(refraction_index: f32) -> Self {
        debug_assert!(refraction_index > 0.0, "refraction index must be positive");
        Material::Dielectric { refraction_index }
    }

    /// Scatter an incoming ray at a hit point.
    ///
    /// Returns `None` when the ray is absorbed.
    pub fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        match *self {
            Material::Lambertian { albedo } => Some(scatter_lambertian(albedo, rec, rng)),
            Material::Metal { albedo, fuzz } => Some(scatter_metal(albedo, fuzz, ray_in, rec, rng)),
            Material::Dielectric { refraction_index } => {
                Some(scatter_dielectric(refraction_index, ray_in, rec, rng))
            }
        }
    }

    /// Schlick's approximation for reflectance
    pub fn reflectance(cosine: f32, eta_ratio: f32) -> f32 {
        let r0 = ((1.0 - eta_ratio) / (1.0 + eta_ratio)).powi(2);
        r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
    }
}

fn scatter_lambertian(albedo: Color, rec: &HitRecord, rng: &mut dyn RngCore) -> ScatterResult {
    let mut scatter_direction = rec.normal + random_in_unit_sphere(rng);

    // Catch degenerate scatter direction
    if near_zero(scatter_direction) {
        scatter_direction = rec.normal;
    }

    ScatterResult {
        attenuation: albedo,
        scattered: Ray::new(rec.p, scatter_direction),
    }
}

fn scatter_metal(
    albedo: Color,
    fuzz: f32,
    ray_in: &Ray,
    rec: &HitRecord,
    rng: &mut dyn RngCore,
) -> ScatterResult {
    let reflected = reflect(unit_vector(ray_in.direction()), rec.normal);
    let mut direction = reflected + fuzz * random_in_unit_sphere(rng);

    // Only reachable through rounding when fuzz = 1
    if near_zero(direction) {
        direction = reflected;
    }

    ScatterResult {
        attenuation: albedo,
        scattered: Ray::new(rec.p, direction),
    }
}

fn scatter_dielectric(
    refraction_index: f32,
    ray_in: &Ray,
    rec: &HitRecord,
    rng: &mut dyn RngCore,
) -> ScatterResult {
    let eta_ratio = if rec.front_face {
        1.0 / refraction_index
    } else {
        refraction_index
    };

    let unit_direction = unit_vector(ray_in.direction());
    let cos_theta = (-unit_direction).dot(rec.normal).min(1.0);
    let sin_theta = (1.0 - cos_theta * cos_theta).max(0.0).sqrt();

    // Total internal reflection leaves no choice; otherwise pick reflection
    // with the Schlick probability
    let cannot_refract = eta_ratio * sin_theta > 1.0;
    let direction =
        if cannot_refract || gen_f32(rng) < Material::reflectance(cos_theta, eta_ratio) {
            reflect(unit_direction, rec.normal)
        } else {
            refract(unit_direction, rec.normal, eta_ratio)
        };

    ScatterResult {
        attenuation: Color::ONE,
        scattered: Ray::new(rec.p, direction),
    }
}
