use crate::{
    math::Vec3,
    ray::{Ray, BUMP_EPSILON},
};

pub const IOR_AIR: f32 = 1.0;
pub const IOR_GLASS: f32 = 1.5;

/// Mirror reflection of the unit incident direction `i` about unit `n`.
pub fn reflect(i: Vec3, n: Vec3) -> Vec3 {
    i - n * (2.0 * n.dot(i))
}

/// Spawns the mirror-reflection ray for the ray's current hit, biased along
/// `n` to avoid self-intersection.
pub fn reflection_ray(ray: &Ray, n: Vec3) -> Ray {
    Ray::new(ray.hit_point() + n * BUMP_EPSILON, reflect(ray.d, n))
}

pub struct Refraction {
    pub ray: Ray,
    /// The incidence angle met or exceeded the critical angle, so the ray
    /// stayed on the incident side of the surface.
    pub total_internal: bool,
}

/// Transmitted ray through the ray's current hit per Snell's law, crossing
/// from a medium of index `ior_a` into `ior_b`.
///
/// The transmitted direction is the linear combination of the incident
/// direction and `n`. At or beyond the critical angle the ray reflects
/// instead, biased to the `+n` side; otherwise it crosses, biased to `-n`.
pub fn refraction_ray(ray: &Ray, n: Vec3, ior_a: f32, ior_b: f32) -> Refraction {
    let incident = -ray.d;
    let eta = ior_b / ior_a;
    let cos_i = incident.dot(n).clamp(-1.0, 1.0);
    let theta_i = cos_i.acos();

    // asin is NaN when entering a denser medium, and a NaN critical angle
    // compares false, so the transmitting branch is taken as it should be.
    if theta_i >= (ior_b / ior_a).asin() {
        return Refraction {
            ray: Ray::new(ray.hit_point() + n * BUMP_EPSILON, reflect(ray.d, n)),
            total_internal: true,
        };
    }

    let sin_t = (ior_a / ior_b) * theta_i.sin();
    let cos_t = sin_t.asin().cos();
    let d = incident * -(1.0 / eta) - n * (cos_t - (1.0 / eta) * cos_i);

    Refraction {
        ray: Ray::new(ray.hit_point() - n * BUMP_EPSILON, d),
        total_internal: false,
    }
}
