use crate::{
    math::{Point3, Vec3},
    ray::Ray,
};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Camera_Models.html

/// Look-at parameters for a pinhole camera. `fov_y` is vertical and in
/// degrees.
#[derive(Copy, Clone)]
pub struct CameraParameters {
    pub position: Point3,
    pub target: Point3,
    pub up: Vec3,
    pub fov_y: f32,
}

impl Default for CameraParameters {
    fn default() -> Self {
        Self {
            position: Point3::new(0.0, 0.0, 1.0),
            target: Point3::new(0.0, 0.0, 0.0),
            up: Vec3::new(0.0, 1.0, 0.0),
            fov_y: 60.0,
        }
    }
}

/// A simple pinhole camera.
#[derive(Copy, Clone)]
pub struct Camera {
    position: Point3,
    u: Vec3,
    v: Vec3,
    w: Vec3,
    half_width: f32,
    half_height: f32,
    resolution: (u32, u32),
}

impl Camera {
    /// Creates a new `Camera` projecting onto `resolution` pixels.
    pub fn new(params: CameraParameters, resolution: (u32, u32)) -> Self {
        let w = (params.position - params.target).normalize();
        let u = params.up.cross(w).normalize();
        let v = w.cross(u);

        let half_height = (params.fov_y.to_radians() / 2.0).tan();
        let aspect = resolution.0 as f32 / resolution.1 as f32;

        Self {
            position: params.position,
            u,
            v,
            w,
            half_width: aspect * half_height,
            half_height,
            resolution,
        }
    }

    /// Primary ray through the film position `(x, y)`, given in pixels with
    /// the subpixel offset already applied.
    pub fn ray(&self, x: f32, y: f32) -> Ray {
        let sx = 2.0 * (x / self.resolution.0 as f32) - 1.0;
        let sy = 1.0 - 2.0 * (y / self.resolution.1 as f32);
        let d = self.u * (sx * self.half_width) + self.v * (sy * self.half_height) - self.w;
        Ray::new(self.position, d)
    }
}
