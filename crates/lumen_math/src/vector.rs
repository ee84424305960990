//! Geometric helpers on `Vec3` used by the light-transport code.

use crate::Vec3;

/// Normalize a vector to unit length.
///
/// A zero-length input is an invariant violation: it would silently produce
/// NaN components, so debug builds assert instead.
#[inline]
pub fn unit_vector(v: Vec3) -> Vec3 {
    let len = v.length();
    debug_assert!(len > 0.0, "unit_vector called on a zero-length vector");
    v / len
}

/// True if every component is close to zero.
#[inline]
pub fn near_zero(v: Vec3) -> bool {
    const S: f32 = 1e-8;
    v.x.abs() < S && v.y.abs() < S && v.z.abs() < S
}

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract a unit vector through a surface with relative index `eta_ratio`.
///
/// `uv` and `n` must be unit vectors with `n` opposing `uv`. The caller is
/// responsible for detecting total internal reflection first.
#[inline]
pub fn refract(uv: Vec3, n: Vec3, eta_ratio: f32) -> Vec3 {
    let cos_theta = (-uv).dot(n).min(1.0);
    let r_out_perp = eta_ratio * (uv + cos_theta * n);
    // abs() keeps rounding from pushing the radicand below zero
    let r_out_parallel = -(1.0 - r_out_perp.length_squared()).abs().sqrt() * n;
    r_out_perp + r_out_parallel
}
