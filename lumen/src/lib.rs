pub mod camera;
pub mod integrators;
pub mod lights;
mod macros;
pub mod materials;
pub mod math;
pub mod optics;
pub mod photon_map;
pub mod photons;
pub mod presets;
pub mod ray;
pub mod sampling;
pub mod scene;
pub mod settings;
pub mod shapes;
