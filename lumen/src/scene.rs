use std::sync::Arc;

use crate::{
    lights::Light,
    materials::Material,
    math::{Point3, Spectrum},
    ray::Ray,
    shapes::{Mesh, Primitive, Sphere, Triangle},
};

/// Read-only scene context passed into every transport call.
pub struct Scene {
    pub primitives: Vec<Arc<dyn Primitive>>,
    /// Point/directional lights, consumed by the legacy shading strategy.
    pub lights: Vec<Light>,
    /// Emissive meshes, consumed by photon emission and direct sampling.
    pub area_lights: Vec<Arc<Mesh>>,
    pub background: Spectrum,
}

impl Scene {
    /// Tests `ray` against every primitive, retaining the closest hit on the
    /// ray itself. Returns whether anything was struck; on a miss the ray's
    /// `t_max` stays infinite.
    pub fn intersect(&self, ray: &mut Ray) -> bool {
        for primitive in &self.primitives {
            primitive.intersect(ray);
        }
        ray.is_hit()
    }
}

/// Assembles a [`Scene`], handing out primitive ids and collecting emissive
/// meshes into the area light list.
#[derive(Default)]
pub struct SceneBuilder {
    primitives: Vec<Arc<dyn Primitive>>,
    lights: Vec<Light>,
    area_lights: Vec<Arc<Mesh>>,
    background: Spectrum,
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, background: Spectrum) -> Self {
        self.background = background;
        self
    }

    pub fn sphere(mut self, center: Point3, radius: f32, material: Material) -> Self {
        let id = self.primitives.len();
        self.primitives
            .push(Arc::new(Sphere::new(id, center, radius, material)));
        self
    }

    pub fn mesh(mut self, triangles: Vec<Triangle>, material: Material) -> Self {
        let id = self.primitives.len();
        let mesh = Arc::new(Mesh::new(id, triangles, material));
        if material.is_emissive() {
            self.area_lights.push(Arc::clone(&mesh));
        }
        self.primitives.push(mesh);
        self
    }

    pub fn light(mut self, light: Light) -> Self {
        self.lights.push(light);
        self
    }

    pub fn build(self) -> Scene {
        Scene {
            primitives: self.primitives,
            lights: self.lights,
            area_lights: self.area_lights,
            background: self.background,
        }
    }
}
