use crate::math::{Point3, Spectrum, Vec3};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Light_Sources/Light_Interface.html#Light

/// Sample from a light source for visibility testing and shading.
pub struct LightSample {
    /// Unit direction from the shaded point toward the light.
    pub l: Vec3,
    /// Distance to the light, infinite for directional lights.
    pub dist: f32,
    pub color: Spectrum,
}

/// Point and directional sources used by the legacy shading strategy. Area
/// lights are emissive meshes and live on the scene separately.
pub enum Light {
    Point { p: Point3, color: Spectrum },
    Directional { d: Vec3, color: Spectrum },
    /// Recognized but not shaded; hitting one during shading yields the
    /// sentinel color instead of aborting the render.
    Spot { p: Point3, d: Vec3, color: Spectrum },
}

impl Light {
    /// Returns a [`LightSample`] from `from` toward this light, or `None`
    /// when the light type is unsupported by the shading model.
    pub fn sample(&self, from: Point3) -> Option<LightSample> {
        match *self {
            Light::Point { p, color } => {
                let to_light = p - from;
                let dist = to_light.length();
                Some(LightSample {
                    l: to_light / dist,
                    dist,
                    color,
                })
            }
            Light::Directional { d, color } => Some(LightSample {
                l: (-d).normalize(),
                dist: f32::INFINITY,
                color,
            }),
            Light::Spot { .. } => None,
        }
    }

    /// Distance attenuation, capped at 1 so nearby lights don't blow out.
    pub fn attenuation(&self, dist: f32) -> f32 {
        match self {
            Light::Directional { .. } => 1.0,
            _ => {
                let c1 = 0.25;
                let c2 = 0.1;
                let c3 = 0.01;
                (1.0 / (c1 + c2 * dist + c3 * dist * dist)).min(1.0)
            }
        }
    }
}
