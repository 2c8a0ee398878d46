use super::{lambert, Integrator};
use crate::{
    lights::LightSample,
    materials::Material,
    math::{Spectrum, Vec3},
    optics::{reflection_ray, refraction_ray, IOR_AIR, IOR_GLASS},
    ray::{InsideSet, Ray, BUMP_EPSILON},
    scene::Scene,
    shapes::Primitive,
};

use log::error;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Visually distinctive stand-in for a light the shading model cannot
/// handle; one bad light degrades one ray instead of aborting the render.
const UNSUPPORTED_LIGHT_COLOR: Spectrum = Spectrum::new(1.0, 0.0, 1.0);

#[derive(Copy, Clone, Deserialize, Serialize)]
pub struct Params {
    pub max_depth: i32,
}

impl Default for Params {
    fn default() -> Self {
        Self { max_depth: 5 }
    }
}

/// The legacy direct-lighting strategy: Phong shading from point and
/// directional lights with shadows and recursive reflection/refraction, no
/// global illumination.
pub struct Whitted {
    max_depth: i32,
}

impl Whitted {
    pub fn new(params: Params) -> Self {
        Self {
            max_depth: params.max_depth,
        }
    }
}

impl Integrator for Whitted {
    fn li(&self, ray: Ray, scene: &Scene, _rng: &mut Pcg32) -> Spectrum {
        trace(ray, scene, self.max_depth, InsideSet::new())
    }
}

/// Recursive direct-lighting transport. Terminates once the bounce budget
/// runs out, the final color is capped into the displayable range.
pub fn trace(mut ray: Ray, scene: &Scene, bounces: i32, inside: InsideSet) -> Spectrum {
    if bounces <= 0 {
        return Spectrum::zeros();
    }
    if !scene.intersect(&mut ray) {
        return scene.background;
    }
    let Some(mut hit) = ray.hit else {
        return scene.background;
    };
    let material = hit.material;

    // Nesting state for refraction: the hit is an exit when the object is
    // already tracked, and exits shade with the flipped normal.
    let is_inside = !inside.is_empty();
    let entering = !inside.contains(hit.prim);
    if !entering {
        hit.n = -hit.n;
    }

    let mut color = ambient(&material);

    for light in &scene.lights {
        let Some(LightSample {
            l,
            dist,
            color: light_color,
        }) = light.sample(ray.hit_point())
        else {
            error!("unsupported light type");
            return UNSUPPORTED_LIGHT_COLOR;
        };

        let attenuation = light.attenuation(dist);
        let shadow_factor = shadow(&ray, hit.n, scene, l, dist);
        color += lambert(&material, hit.n, l, light_color) * shadow_factor * attenuation;
        color += specular(&material, &ray, hit.n, l, light_color) * shadow_factor * attenuation;
    }

    if material.is_reflective() {
        color += trace(reflection_ray(&ray, hit.n), scene, bounces - 1, inside.clone());
    }

    if material.is_transparent() {
        let mut crossed = inside.clone();
        if entering {
            crossed.insert(hit.prim);
        } else {
            crossed.remove(hit.prim);
        }
        let ior_a = if is_inside { IOR_GLASS } else { IOR_AIR };
        let ior_b = if crossed.is_empty() { IOR_AIR } else { IOR_GLASS };

        let refraction = refraction_ray(&ray, hit.n, ior_a, ior_b);
        // Total internal reflection stays on the incident side, so the old
        // nesting state remains valid.
        let next = if refraction.total_internal {
            inside
        } else {
            crossed
        };
        color += trace(refraction.ray, scene, bounces - 1, next);
    }

    color += material.emissive;
    color.clamped()
}

/// Shadow factor from the hit point toward a light `dist` away. Emissive
/// occluders never block; transparent occluders filter the light by their
/// diffuse color and transmissive coefficient.
pub fn shadow(ray: &Ray, n: Vec3, scene: &Scene, l: Vec3, light_dist: f32) -> Spectrum {
    let mut factor = Spectrum::ones();
    for primitive in &scene.primitives {
        let mut shadow_ray = Ray::new(ray.hit_point() + n * BUMP_EPSILON, l);
        if primitive.intersect(&mut shadow_ray) {
            let Some(hit) = shadow_ray.hit else {
                continue;
            };
            if hit.material.is_emissive() {
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

fn ambient(material: &Material) -> Spectrum {
    material.diffuse * material.ambient * (1.0 - material.ktran)
}

/// Phong-style specular highlight from the light direction `l`.
fn specular(material: &Material, ray: &Ray, n: Vec3, l: Vec3, light_color: Spectrum) -> Spectrum {
    let q = material.shininess * 30.0;
    let v = -ray.d;
    let r = (n * (2.0 * n.dot(l)) - l).normalize();
    material.specular * r.dot(v).max(0.0).powf(q) * light_color
}
