//! Hittable trait and HitRecord for ray-object intersection.

use crate::{Material, Ray};
use lumen_math::{Interval, Vec3};

/// Record of a ray-object intersection.
///
/// Built once per accepted hit and handed to the material by reference.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    /// Point of intersection
    pub p: Vec3,
    /// Unit surface normal, always pointing against the incoming ray
    pub normal: Vec3,
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Whether the ray hit the front face (outside) of the surface
    pub front_face: bool,
    /// Material at the intersection point
    pub material: &'a Material,
}

impl<'a> HitRecord<'a> {
    /// Build a record from the geometric (outward) normal at `ray(t)`.
    ///
    /// The stored normal is flipped when the ray arrives from inside.
    pub fn new(ray: &Ray, t: f32, outward_normal: Vec3, material: &'a Material) -> Self {
        let front_face = ray.direction().dot(outward_normal) < 0.0;
        let normal = if front_face {
            outward_normal
        } else {
            -outward_normal
        };

        Self {
            p: ray.point_at_parameter(t),
            normal,
            t,
            front_face,
            material,
        }
    }
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Nearest intersection with parameter strictly inside `ray_t`, if any.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>>;
}
