use super::{Primitive, PrimitiveId};
use crate::{
    materials::Material,
    math::Point3,
    ray::{HitRecord, Ray},
};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Shapes/Spheres.html

/// A sphere object.
pub struct Sphere {
    id: PrimitiveId,
    center: Point3,
    radius: f32,
    material: Material,
}

impl Sphere {
    /// Creates a new `Sphere`.
    pub fn new(id: PrimitiveId, center: Point3, radius: f32, material: Material) -> Self {
        Self {
            id,
            center,
            radius,
            material,
        }
    }
}

impl Primitive for Sphere {
    fn id(&self) -> PrimitiveId {
        self.id
    }

    fn intersect(&self, ray: &mut Ray) -> bool {
        let oc = ray.o - self.center;

        // Quadratic coefficients, a == 1 since the direction is unit length
        let b = 2.0 * ray.d.dot(oc);
        let c = oc.dot(oc) - self.radius * self.radius;

        let disc = b * b - 4.0 * c;
        if disc < 0.0 {
            return false;
        }
        let rd = disc.sqrt();

        let mut t0 = 0.5 * (-b - rd);
        let mut t1 = 0.5 * (-b + rd);
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }

        // Nearest hit in front of the origin
        let t = if t0 > 0.0 {
            t0
        } else if t1 > 0.0 {
            t1
        } else {
            return false;
        };

        if t >= ray.t_max {
            return false;
        }

        ray.t_max = t;
        ray.hit = Some(HitRecord {
            material: self.material,
            n: (ray.point(t) - self.center) / self.radius,
            prim: self.id,
        });
        true
    }
}
