mod mesh;
mod sphere;

pub use mesh::{Mesh, Triangle};
pub use sphere::Sphere;

use crate::ray::Ray;

/// Scene-unique primitive identity, assigned by the scene builder.
pub type PrimitiveId = usize;

/// An intersectable surface.
pub trait Primitive: Send + Sync {
    fn id(&self) -> PrimitiveId;

    /// Tests `ray` against this primitive. On a hit closer than the ray's
    /// current `t_max`, shrinks `t_max` and writes the hit record; returns
    /// whether such a hit was found. Safe to call repeatedly across the full
    /// primitive list for one ray.
    fn intersect(&self, ray: &mut Ray) -> bool;
}
