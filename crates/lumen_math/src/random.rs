//! Sampling helpers.
//!
//! Every function draws from an explicit generator so that each render
//! worker can own an independent, seedable stream.

use crate::Vec3;
use rand::{Rng, RngCore};

/// Uniform f32 in [0, 1).
#[inline]
pub fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen()
}

/// Uniform f32 in [min, max).
#[inline]
pub fn gen_f32_range(rng: &mut dyn RngCore, min: f32, max: f32) -> f32 {
    min + (max - min) * gen_f32(rng)
}

/// Vector with each component uniform in [0, 1).
pub fn random_vec3(rng: &mut dyn RngCore) -> Vec3 {
    Vec3::new(gen_f32(rng), gen_f32(rng), gen_f32(rng))
}

/// Vector with each component uniform in [min, max).
pub fn random_vec3_range(rng: &mut dyn RngCore, min: f32, max: f32) -> Vec3 {
    Vec3::new(
        gen_f32_range(rng, min, max),
        gen_f32_range(rng, min, max),
        gen_f32_range(rng, min, max),
    )
}

/// Uniform point strictly inside the unit ball, by rejection from [-1, 1)³.
pub fn random_in_unit_sphere(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = random_vec3_range(rng, -1.0, 1.0);
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Uniform point inside the unit disk in the z = 0 plane.
pub fn random_in_unit_disk(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = Vec3::new(
            gen_f32_range(rng, -1.0, 1.0),
            gen_f32_range(rng, -1.0, 1.0),
            0.0,
        );
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}
