//! Scene: an ordered list of primitives searched linearly.

use crate::hittable::{HitRecord, Hittable};
use crate::Ray;
use lumen_math::Interval;

/// An ordered collection of hittable objects.
///
/// Insertion order is kept stable. It only decides exact-`t` ties, where the
/// earlier object wins.
#[derive(Default)]
pub struct Scene {
    objects: Vec<Box<dyn Hittable>>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Add an object to the scene.
    pub fn add(&mut self, object: impl Hittable + 'static) {
        self.objects.push(Box::new(object));
    }

    /// Clear all objects from the scene.
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Closest intersection along `ray` within `ray_t`.
    ///
    /// Every accepted hit shrinks the upper bound for the objects after it.
    pub fn nearest_hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let mut closest = None;
        let mut closest_so_far = ray_t.max;

        for object in &self.objects {
            if let Some(rec) = object.hit(ray, ray_t.with_max(closest_so_far)) {
                closest_so_far = rec.t;
                closest = Some(rec);
            }
        }

        closest
    }
}

impl<H: Hittable + 'static> FromIterator<H> for Scene {
    fn from_iter<I: IntoIterator<Item = H>>(iter: I) -> Self {
        let mut scene = Scene::new();
        for object in iter {
            scene.add(object);
        }
        scene
    }
}

impl Hittable for Scene {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        self.nearest_hit(ray, ray_t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Material, Sphere};
    use lumen_math::Vec3;

    fn interval() -> Interval {
        Interval::new(0.001, f32::INFINITY)
    }

    fn red() -> Material {
        Material::lambertian(Color::new(1.0, 0.0, 0.0))
    }

    fn blue() -> Material {
        Material::lambertian(Color::new(0.0, 0.0, 1.0))
    }

    #[test]
    fn test_empty_scene_misses() {
        let scene = Scene::new();
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        assert!(scene.is_empty());
        assert!(scene.nearest_hit(&ray, interval()).is_none());
    }

    #[test]
    fn test_nearest_hit_independent_of_order() {
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let near = || Sphere::new(Vec3::new(0.0, 0.0, -2.0), 0.5, red());
        let far = || Sphere::new(Vec3::new(0.0, 0.0, -5.0), 0.5, blue());

        let forward: Scene = [near(), far()].into_iter().collect();
        let backward: Scene = [far(), near()].into_iter().collect();

        for scene in [forward, backward] {
            let rec = scene.nearest_hit(&ray, interval()).unwrap();
            assert_eq!(rec.t, 1.5);
            assert_eq!(*rec.material, red());
        }
    }

    #[test]
    fn test_nearest_hit_respects_bounds() {
        let mut scene = Scene::new();
        scene.add(Sphere::new(Vec3::new(0.0, 0.0, -2.0), 0.5, red()));
        scene.add(Sphere::new(Vec3::new(0.0, 0.0, -5.0), 0.5, blue()));
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        // Upper bound before the first surface: nothing
        assert!(scene.nearest_hit(&ray, Interval::new(0.001, 1.0)).is_none());

        // Lower bound past the near sphere: the far sphere is next
        let rec = scene.nearest_hit(&ray, Interval::new(3.0, f32::INFINITY)).unwrap();
        assert_eq!(rec.t, 4.5);
        assert_eq!(*rec.material, blue());
    }

    #[test]
    fn test_exact_tie_keeps_first() {
        let mut scene = Scene::new();
        scene.add(Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, red()));
        scene.add(Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, blue()));
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let rec = scene.nearest_hit(&ray, interval()).unwrap();
        assert_eq!(*rec.material, red());
    }

    #[test]
    fn test_miss_falls_through() {
        let mut scene = Scene::new();
        scene.add(Sphere::new(Vec3::new(5.0, 5.0, 5.0), 0.5, red()));
        scene.add(Sphere::new(Vec3::new(-5.0, 0.0, 0.0), 0.5, blue()));
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        assert_eq!(scene.len(), 2);
        assert!(scene.hit(&ray, interval()).is_none());

        scene.clear();
        assert!(scene.is_empty());
    }
}
