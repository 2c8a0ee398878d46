use super::{lambert, Integrator};
use crate::{
    math::{Spectrum, Vec3},
    optics::{reflection_ray, refraction_ray, IOR_AIR, IOR_GLASS},
    photon_map::PhotonMap,
    photons::estimate_radiance,
    ray::{InsideSet, Ray, BUMP_EPSILON},
    sampling::sample_triangle_point,
    scene::Scene,
    shapes::{Primitive, PrimitiveId},
};

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Deserialize, Serialize)]
pub struct Params {
    pub max_depth: i32,
    /// Photons gathered per radiance estimate.
    pub gather_count: usize,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            max_depth: 5,
            gather_count: 200,
        }
    }
}

/// The global-illumination strategy: recursive transport with diffuse
/// radiance estimated from a prebuilt photon map.
pub struct Path {
    max_depth: i32,
    gather_count: usize,
    photons: PhotonMap,
}

impl Path {
    /// Creates a new `Path` over a photon map built for the same scene.
    pub fn new(params: Params, photons: PhotonMap) -> Self {
        Self {
            max_depth: params.max_depth,
            gather_count: params.gather_count,
            photons,
        }
    }
}

impl Integrator for Path {
    fn li(&self, ray: Ray, scene: &Scene, _rng: &mut Pcg32) -> Spectrum {
        path_trace(
            ray,
            scene,
            &self.photons,
            self.gather_count,
            self.max_depth,
            InsideSet::new(),
        )
    }
}

/// Recursive photon-mapped transport.
///
/// A negative bounce budget terminates before any intersection test; a miss
/// returns the background; emitters return their emissive color unshaded.
/// Everything else sums a photon-estimated diffuse term, a mirror-reflected
/// term and a transmitted term.
pub fn path_trace(
    mut ray: Ray,
    scene: &Scene,
    photons: &PhotonMap,
    gather_count: usize,
    bounces: i32,
    inside: InsideSet,
) -> Spectrum {
    if bounces < 0 {
        return Spectrum::zeros();
    }
    if !scene.intersect(&mut ray) {
        return scene.background;
    }
    let Some(mut hit) = ray.hit else {
        return scene.background;
    };
    let material = hit.material;

    if material.is_emissive() {
        return material.emissive;
    }

    let radiance = estimate_radiance(photons, ray.hit_point(), hit.n, gather_count);
    let mut color = material.diffuse * radiance;

    if material.is_reflective() {
        color += path_trace(
            reflection_ray(&ray, hit.n),
            scene,
            photons,
            gather_count,
            bounces - 1,
            inside.clone(),
        );
    }

    if material.ktran > 0.0 {
        let is_inside = !inside.is_empty();
        let entering = !inside.contains(hit.prim);
        if !entering {
            hit.n = -hit.n;
        }

        let mut crossed = inside.clone();
        if entering {
            crossed.insert(hit.prim);
        } else {
            crossed.remove(hit.prim);
        }
        let ior_a = if is_inside { IOR_GLASS } else { IOR_AIR };
        let ior_b = if crossed.is_empty() { IOR_AIR } else { IOR_GLASS };

        let refraction = refraction_ray(&ray, hit.n, ior_a, ior_b);
        // Total internal reflection keeps the ray on the incident side, so
        // the nesting state stays as it was.
        let next = if refraction.total_internal {
            inside
        } else {
            crossed
        };
        color += path_trace(
            refraction.ray,
            scene,
            photons,
            gather_count,
            bounces - 1,
            next,
        );
    }

    color
}

/// Direct illumination at the ray's hit from one randomly sampled area
/// light: Lambert diffuse times visibility times distance attenuation.
pub fn direct_light(ray: &Ray, scene: &Scene, rng: &mut Pcg32) -> Spectrum {
    let Some(hit) = ray.hit else {
        return Spectrum::zeros();
    };
    if scene.area_lights.is_empty() {
        return Spectrum::zeros();
    }

    let light = &scene.area_lights[rng.gen_range(0..scene.area_lights.len())];
    let light_color = light.material.emissive;

    let to_light = sample_triangle_point(rng, light) - ray.hit_point();
    let dist = to_light.length();
    let l = to_light / dist;

    let attenuation = area_light_attenuation(dist);
    let shadow_factor = area_shadow(ray, hit.n, scene, l, dist, light.id());

    lambert(&hit.material, hit.n, l, light_color) * shadow_factor * attenuation
}

/// Distance attenuation for area lights, capped at 1. The linear third term
/// is intentional and differs from the point-light falloff.
pub fn area_light_attenuation(dist: f32) -> f32 {
    let c1 = 0.25;
    let c2 = 0.1;
    let c3 = 0.01;
    (1.0 / (c1 + c2 * dist + c3 * dist)).min(1.0)
}

/// Shadow factor toward a sampled point on the area light `light`. The light
/// mesh itself never blocks; transparent occluders filter by their diffuse
/// color and transmissive coefficient, near-opaque ones block outright.
pub fn area_shadow(
    ray: &Ray,
    n: Vec3,
    scene: &Scene,
    l: Vec3,
    light_dist: f32,
    light: PrimitiveId,
) -> Spectrum {
    let mut factor = Spectrum::ones();
    for primitive in &scene.primitives {
        let mut shadow_ray = Ray::new(ray.hit_point() + n * BUMP_EPSILON, l);
        if primitive.intersect(&mut shadow_ray) {
            let Some(hit) = shadow_ray.hit else {
                continue;
            };
            if hit.prim == light {
                continue;
            }
            if shadow_ray.t_max >= light_dist {
                continue;
            }
            if hit.material.ktran < 1e-3 {
                return Spectrum::zeros();
            }
            factor = factor * hit.material.diffuse.normalized() * hit.material.ktran;
        }
    }
    factor
}
