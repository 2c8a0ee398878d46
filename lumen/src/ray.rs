use std::sync::atomic::{AtomicU64, Ordering};

use crate::{
    materials::Material,
    math::{Point3, Vec3},
    shapes::PrimitiveId,
};

/// Offset applied along the surface normal when spawning child rays so they
/// don't immediately re-intersect the surface they left.
pub const BUMP_EPSILON: f32 = 1e-4;

static RAY_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Hit state a [`crate::shapes::Primitive`] writes onto a [`Ray`] when it
/// finds a closer intersection.
#[derive(Copy, Clone, Debug)]
pub struct HitRecord {
    /// Material snapshot taken at hit time.
    pub material: Material,
    /// Surface normal at the hit point.
    pub n: Vec3,
    /// Identity of the hit primitive.
    pub prim: PrimitiveId,
}

/// A ray and the closest-hit state accumulated over an intersection sweep.
///
/// `t_max` starts out infinite and only shrinks while primitives are tested
/// against the ray; after the sweep an infinite `t_max` means nothing was
/// struck and `hit` is `None`.
#[derive(Clone, Debug)]
pub struct Ray {
    /// Monotonically increasing across all rays constructed by the process.
    pub id: u64,
    pub o: Point3,
    /// Always unit length.
    pub d: Vec3,
    /// Cached reciprocal direction for slab tests in primitives.
    pub inv_d: Vec3,
    /// Per-axis direction sign flags, paired with `inv_d`.
    pub sign: [bool; 3],
    pub t_max: f32,
    pub hit: Option<HitRecord>,
}

impl Ray {
    /// Creates a new `Ray`, normalizing `d`.
    pub fn new(o: Point3, d: Vec3) -> Self {
        let d = d.normalize();
        let inv_d = d.recip();
        Self {
            id: RAY_COUNTER.fetch_add(1, Ordering::Relaxed),
            o,
            d,
            inv_d,
            sign: [inv_d.x < 0.0, inv_d.y < 0.0, inv_d.z < 0.0],
            t_max: f32::INFINITY,
            hit: None,
        }
    }

    /// Finds the [`Point3`] on this `Ray` at distance `t`.
    pub fn point(&self, t: f32) -> Point3 {
        self.o + self.d * t
    }

    /// The closest hit point found so far.
    pub fn hit_point(&self) -> Point3 {
        self.point(self.t_max)
    }

    pub fn is_hit(&self) -> bool {
        self.t_max < f32::INFINITY
    }
}

/// Transparent primitives the current ray is traveling through, used to pick
/// refractive indices for nested volumes.
///
/// Cloned at every recursive branch so sibling branches observe independent
/// snapshots of the nesting state.
#[derive(Clone, Debug, Default)]
pub struct InsideSet(Vec<PrimitiveId>);

impl InsideSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, id: PrimitiveId) -> bool {
        self.0.contains(&id)
    }

    pub fn insert(&mut self, id: PrimitiveId) {
        if !self.contains(id) {
            self.0.push(id);
        }
    }

    pub fn remove(&mut self, id: PrimitiveId) {
        self.0.retain(|&i| i != id);
    }
}
