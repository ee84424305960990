//! Sphere primitive for ray tracing.

use crate::{
    hittable::{HitRecord, Hittable},
    Material, Ray,
};
use lumen_math::{Interval, Vec3};
use std::sync::Arc;

/// A sphere primitive.
///
/// The material is shared: many spheres may point at the same `Arc`.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Arc<Material>,
}

impl Sphere {
    /// Create a new sphere. Negative radii are clamped to zero.
    pub fn new(center: Vec3, radius: f32, material: impl Into<Arc<Material>>) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material: material.into(),
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn material(&self) -> &Material {
        &self.material
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        // A point has no surface to hit, and the normal divides by the radius
        if self.radius <= 0.0 {
            return None;
        }

        let oc = self.center - ray.origin();
        let a = ray.direction().length_squared();
        let h = ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        // Tangent rays count as misses; this also rejects zero-length
        // directions before anything is divided.
        let discriminant = h * h - a * c;
        if discriminant <= 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Near root first, so the closest surface along the ray wins
        let mut root = (h - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let outward_normal = (ray.point_at_parameter(root) - self.center) / self.radius;
        Some(HitRecord::new(ray, root, outward_normal, &self.material))
    }
}
