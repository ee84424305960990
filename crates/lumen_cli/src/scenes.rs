//! Built-in scenes and the cameras that frame them.

use lumen_math::random::{gen_f32, gen_f32_range, random_vec3, random_vec3_range};
use lumen_renderer::{CameraConfig, Color, Material, Scene, Sphere, Vec3};
use rand::RngCore;
use std::sync::Arc;

/// Ground, a diffuse centre sphere, fuzzy metal on the right, glass on the left.
pub fn simple() -> (Scene, CameraConfig) {
    let mut world = Scene::new();

    world.add(Sphere::new(
        Vec3::new(0.0, -100.5, -1.0),
        100.0,
        Material::lambertian(Color::new(0.8, 0.8, 0.0)),
    ));
    world.add(Sphere::new(
        Vec3::new(0.0, 0.0, -1.0),
        0.5,
        Material::lambertian(Color::new(0.8, 0.3, 0.3)),
    ));
    world.add(Sphere::new(
        Vec3::new(1.0, 0.0, -1.0),
        0.5,
        Material::metal(Color::new(0.8, 0.6, 0.2), 0.3),
    ));
    world.add(Sphere::new(Vec3::new(-1.0, 0.0, -1.0), 0.5, Material::dielectric(1.5)));

    let camera = CameraConfig::default()
        .with_resolution(400, 2.0)
        .with_position(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y)
        .with_lens(90.0, 0.0, 1.0);

    (world, camera)
}

/// Spheres of the cover scene, generated from `rng`.
pub fn cover_spheres(rng: &mut dyn RngCore) -> Vec<Sphere> {
    let mut spheres = Vec::new();

    // Ground
    spheres.push(Sphere::new(
        Vec3::new(0.0, -1000.0, 0.0),
        1000.0,
        Material::lambertian(Color::new(0.5, 0.5, 0.5)),
    ));

    let glass = Arc::new(Material::dielectric(1.5));

    // Small random spheres
    for a in -11..11 {
        for b in -11..11 {
            let choose_mat = gen_f32(rng);
            let center = Vec3::new(
                a as f32 + 0.9 * gen_f32(rng),
                0.2,
                b as f32 + 0.9 * gen_f32(rng),
            );

            // Keep clear of the large metal sphere
            if (center - Vec3::new(4.0, 0.2, 0.0)).length() <= 0.9 {
                continue;
            }

            let material = if choose_mat < 0.8 {
                // Diffuse
                Arc::new(Material::lambertian(random_vec3(rng) * random_vec3(rng)))
            } else if choose_mat < 0.95 {
                // Metal
                let albedo = random_vec3_range(rng, 0.5, 1.0);
                let fuzz = gen_f32_range(rng, 0.0, 0.5);
                Arc::new(Material::metal(albedo, fuzz))
            } else {
                glass.clone()
            };
            spheres.push(Sphere::new(center, 0.2, material));
        }
    }

    // Three large feature spheres
    spheres.push(Sphere::new(Vec3::new(0.0, 1.0, 0.0), 1.0, glass));
    spheres.push(Sphere::new(
        Vec3::new(-4.0, 1.0, 0.0),
        1.0,
        Material::lambertian(Color::new(0.4, 0.2, 0.1)),
    ));
    spheres.push(Sphere::new(
        Vec3::new(4.0, 1.0, 0.0),
        1.0,
        Material::metal(Color::new(0.7, 0.6, 0.5), 0.0),
    ));

    spheres
}

/// The random-spheres cover scene with its depth-of-field camera.
pub fn cover(rng: &mut dyn RngCore) -> (Scene, CameraConfig) {
    let world: Scene = cover_spheres(rng).into_iter().collect();

    let camera = CameraConfig::default()
        .with_resolution(1200, 16.0 / 9.0)
        .with_position(Vec3::new(13.0, 2.0, 3.0), Vec3::ZERO, Vec3::Y)
        .with_lens(20.0, 0.6, 10.0);

    (world, camera)
}
