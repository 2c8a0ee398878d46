use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{integrators::IntegratorType, photons::PhotonSettings};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Top-level render configuration, loadable from YAML.
#[derive(Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RenderSettings {
    pub width: u32,
    pub height: u32,
    /// Camera samples per pixel.
    pub samples: u32,
    /// Fixed prng seed for reproducible renders; random when absent.
    pub seed: Option<u64>,
    pub integrator: IntegratorType,
    pub photons: PhotonSettings,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            samples: 4,
            seed: None,
            integrator: IntegratorType::default(),
            photons: PhotonSettings::default(),
        }
    }
}

impl RenderSettings {
    /// Loads settings from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Ok(serde_yaml::from_reader(file)?)
    }
}
