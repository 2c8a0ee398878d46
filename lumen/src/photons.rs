use log::{info, warn};
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::{
    math::{Point3, Spectrum, Vec3},
    optics::{reflection_ray, refraction_ray, IOR_AIR, IOR_GLASS},
    photon_map::{Photon, PhotonMap, PhotonMapBuilder},
    ray::Ray,
    sampling::{cosine_sample_hemisphere, sample_triangle_point, uniform_sample_hemisphere},
    scene::Scene,
};

#[derive(Copy, Clone, Deserialize, Serialize)]
pub struct PhotonSettings {
    /// Photons emitted in total across all area lights.
    pub count: usize,
    /// Bounce budget for each photon's random walk.
    pub walk_depth: i32,
}

impl Default for PhotonSettings {
    fn default() -> Self {
        Self {
            count: 1_000_000,
            walk_depth: 10,
        }
    }
}

/// Emission pass, run once before rendering: shoots photons from the scene's
/// area lights and returns the built map. Flux is normalized per photon as
/// emissive color times (light surface area / photon count).
pub fn emit_photons(scene: &Scene, settings: &PhotonSettings, rng: &mut Pcg32) -> PhotonMap {
    info!("emitting {} photons", settings.count);

    let mut map = PhotonMapBuilder::new();
    if scene.area_lights.is_empty() {
        warn!("no area lights in scene, the photon map will be empty");
        return map.build();
    }

    for _ in 0..settings.count {
        let light = &scene.area_lights[rng.gen_range(0..scene.area_lights.len())];
        let flux = light.material.emissive * (light.surface_area() / settings.count as f32);
        let origin = sample_triangle_point(rng, light);
        let direction = uniform_sample_hemisphere(rng, -light.normal);

        photon_trace(
            Ray::new(origin, direction),
            scene,
            flux,
            &mut map,
            settings.walk_depth,
            rng,
        );
    }

    let deposited = map.len();
    let map = map.build();
    info!("photon map built over {} deposits", deposited);
    map
}

/// One segment of a photon's random walk: intersect, then pick transmission,
/// diffuse bounce, specular bounce, or absorption.
///
/// Transmission is deliberately checked before the diffuse/specular
/// partition.
pub fn photon_trace(
    mut ray: Ray,
    scene: &Scene,
    flux: Spectrum,
    map: &mut PhotonMapBuilder,
    bounces: i32,
    rng: &mut Pcg32,
) {
    if bounces <= 0 {
        return;
    }
    if !scene.intersect(&mut ray) {
        return;
    }
    let Some(hit) = ray.hit else {
        return;
    };
    let material = hit.material;

    let diffuse_prob = material.diffuse_prob();
    let specular_prob = material.specular_prob();
    let trans_prob = material.ktran;

    let r: f32 = rng.gen();
    if r < trans_prob {
        let refraction = refraction_ray(&ray, hit.n, IOR_AIR, IOR_GLASS);
        photon_trace(refraction.ray, scene, flux, map, bounces - 1, rng);
        return;
    }

    if r < diffuse_prob {
        map.store(Photon {
            p: ray.hit_point(),
            incident: ray.d,
            flux,
        });
        let direction = cosine_sample_hemisphere(rng, hit.n);
        let flux = flux * material.diffuse.normalized();
        photon_trace(
            Ray::new(ray.hit_point(), direction),
            scene,
            flux,
            map,
            bounces - 1,
            rng,
        );
    } else if r < diffuse_prob + specular_prob {
        photon_trace(reflection_ray(&ray, hit.n), scene, flux, map, bounces - 1, rng);
    }
    // Anything else is absorbed and the walk ends.
}

/// Density estimation over the `k` nearest photons around `p`: flux weighted
/// by incident alignment with `n`, normalized by the query radius.
///
/// An empty or zero-radius query yields zero radiance, so rendering before
/// any photon was deposited fails closed to black.
pub fn estimate_radiance(map: &PhotonMap, p: Point3, n: Vec3, k: usize) -> Spectrum {
    let hits = map.knn(p, k);
    let Some(farthest) = hits.last() else {
        return Spectrum::zeros();
    };
    let radius = farthest.dist;
    if radius <= 0.0 {
        return Spectrum::zeros();
    }

    let mut radiance = Spectrum::zeros();
    for hit in &hits {
        radiance += hit.photon.flux * hit.photon.incident.dot(n).max(0.0);
    }
    radiance * (1.0 / radius)
}
