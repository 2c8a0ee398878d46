use rand::Rng;
use rand_pcg::Pcg32;

use crate::{
    math::{coordinate_system, Point3, Vec3},
    shapes::Mesh,
};

// Based on Physically Based Rendering 3rd ed.
// https://www.pbr-book.org/3ed-2018/Monte_Carlo_Integration/2D_Sampling_with_Multidimensional_Transformations

/// Creates the prng for a render stream. A fixed `seed` makes every draw
/// reproducible; Pcg streams are uncorrelated so concurrent passes and rows
/// can share a seed with distinct `stream` values.
pub fn create_rng(seed: Option<u64>, stream: u64) -> Pcg32 {
    let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
    Pcg32::new(seed, stream)
}

/// Uniform unit direction in the hemisphere around `n`.
pub fn uniform_sample_hemisphere(rng: &mut Pcg32, n: Vec3) -> Vec3 {
    let u1: f32 = rng.gen();
    let u2: f32 = rng.gen();
    let r = (1.0 - u1 * u1).sqrt();
    let phi = 2.0 * std::f32::consts::PI * u2;
    let d = Vec3::new(phi.cos() * r, phi.sin() * r, u1);
    if d.dot(n) >= 0.0 {
        d
    } else {
        -d
    }
}

/// Cosine-weighted unit direction in the hemisphere around `n`.
pub fn cosine_sample_hemisphere(rng: &mut Pcg32, n: Vec3) -> Vec3 {
    let (x, y) = coordinate_system(n);

    let u1: f32 = rng.gen();
    let u2: f32 = rng.gen();
    let r = u1.sqrt();
    let theta = 2.0 * std::f32::consts::PI * u2;
    let local = Vec3::new(r * theta.cos(), r * theta.sin(), (1.0 - u1).max(0.0).sqrt());

    (x * local.x + y * local.y + n * local.z).normalize()
}

/// Uniform point on a uniformly chosen triangle of `mesh`, rejection sampled
/// in barycentric space: redraw while the coordinates leave the triangle.
pub fn sample_triangle_point(rng: &mut Pcg32, mesh: &Mesh) -> Point3 {
    let triangle = &mesh.triangles[rng.gen_range(0..mesh.triangles.len())];
    let mut r1 = 1.0f32;
    let mut r2 = 1.0f32;
    while r1 + r2 > 1.0 {
        r1 = rng.gen();
        r2 = rng.gen();
    }
    triangle.p0 + triangle.u * r1 + triangle.v * r2
}
