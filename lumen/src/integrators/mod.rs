pub mod path;
pub mod whitted;

pub use path::Path;
pub use whitted::Whitted;

use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, EnumVariantNames};

use crate::{
    materials::Material,
    math::{Spectrum, Vec3},
    photons::{self, PhotonSettings},
    ray::Ray,
    scene::Scene,
};

pub type WhittedParams = whitted::Params;
pub type PathParams = path::Params;

/// The selectable transport strategies. Both read the same ray/material/
/// scene primitives; only one drives a render.
#[derive(Copy, Clone, Deserialize, Serialize, Display, EnumVariantNames, EnumString)]
pub enum IntegratorType {
    Whitted(whitted::Params),
    Path(path::Params),
}

impl IntegratorType {
    /// Instantiates the integrator, running the photon emission pass first
    /// for strategies that query a photon map.
    pub fn instantiate(
        self,
        scene: &Scene,
        photons: &PhotonSettings,
        rng: &mut Pcg32,
    ) -> Box<dyn Integrator> {
        match self {
            IntegratorType::Whitted(params) => Box::new(Whitted::new(params)),
            IntegratorType::Path(params) => {
                let map = photons::emit_photons(scene, photons, rng);
                Box::new(Path::new(params, map))
            }
        }
    }
}

impl Default for IntegratorType {
    fn default() -> Self {
        IntegratorType::Path(path::Params::default())
    }
}

// Public interface for scene integrators.
pub trait Integrator: Send + Sync {
    /// Evaluates the incoming radiance along `ray`.
    fn li(&self, ray: Ray, scene: &Scene, rng: &mut Pcg32) -> Spectrum;
}

/// Lambertian diffuse term shared by both strategies.
pub fn lambert(material: &Material, n: Vec3, l: Vec3, light_color: Spectrum) -> Spectrum {
    material.diffuse * l.dot(n).abs() * light_color * (1.0 - material.ktran)
}
