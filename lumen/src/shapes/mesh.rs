use super::{Primitive, PrimitiveId};
use crate::{
    materials::Material,
    math::{Point3, Vec3},
    ray::{HitRecord, Ray},
};

// Based on Physically Based Rendering 3rd ed.
// https://www.pbr-book.org/3ed-2018/Shapes/Triangle_Meshes

const DET_EPSILON: f32 = 1e-8;

/// A triangle parameterized by an origin vertex and its two edge vectors, so
/// a surface point is `p0 + u*r1 + v*r2` with `r1 + r2 <= 1`.
#[derive(Copy, Clone, Debug)]
pub struct Triangle {
    pub p0: Point3,
    pub u: Vec3,
    pub v: Vec3,
}

impl Triangle {
    pub fn new(p0: Point3, u: Vec3, v: Vec3) -> Self {
        Self { p0, u, v }
    }

    pub fn area(&self) -> f32 {
        0.5 * self.u.cross(self.v).length()
    }

    pub fn normal(&self) -> Vec3 {
        self.u.cross(self.v).normalize()
    }

    /// Möller-Trumbore intersection, both sides. Returns the hit distance.
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        let pvec = ray.d.cross(self.v);
        let det = self.u.dot(pvec);
        if det.abs() < DET_EPSILON {
            return None;
        }
        let inv_det = 1.0 / det;

        let tvec = ray.o - self.p0;
        let b1 = tvec.dot(pvec) * inv_det;
        if !(0.0..=1.0).contains(&b1) {
            return None;
        }

        let qvec = tvec.cross(self.u);
        let b2 = ray.d.dot(qvec) * inv_det;
        if b2 < 0.0 || b1 + b2 > 1.0 {
            return None;
        }

        let t = self.v.dot(qvec) * inv_det;
        if t <= DET_EPSILON {
            return None;
        }
        Some(t)
    }
}

/// A triangle soup with one material. Emissive meshes double as area lights.
pub struct Mesh {
    id: PrimitiveId,
    pub triangles: Vec<Triangle>,
    pub material: Material,
    /// Face normal of the first triangle; emission leaves through the
    /// opposite hemisphere.
    pub normal: Vec3,
}

impl Mesh {
    /// Creates a new `Mesh`. `triangles` must not be empty.
    pub fn new(id: PrimitiveId, triangles: Vec<Triangle>, material: Material) -> Self {
        assert!(!triangles.is_empty(), "a mesh needs at least one triangle");
        let normal = triangles[0].normal();
        Self {
            id,
            triangles,
            material,
            normal,
        }
    }

    pub fn surface_area(&self) -> f32 {
        self.triangles.iter().map(Triangle::area).sum()
    }
}

impl Primitive for Mesh {
    fn id(&self) -> PrimitiveId {
        self.id
    }

    fn intersect(&self, ray: &mut Ray) -> bool {
        let mut found = false;
        for triangle in &self.triangles {
            if let Some(t) = triangle.intersect(ray) {
                if t < ray.t_max {
                    ray.t_max = t;
                    ray.hit = Some(HitRecord {
                        material: self.material,
                        n: triangle.normal(),
                        prim: self.id,
                    });
                    found = true;
                }
            }
        }
        found
    }
}
