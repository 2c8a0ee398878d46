use crate::{
    camera::CameraParameters,
    lights::Light,
    materials::Material,
    math::{Point3, Spectrum, Vec3},
    scene::{Scene, SceneBuilder},
    shapes::Triangle,
};

/// Two triangles spanning the parallelogram at `p0` with edges `u` and `v`.
/// The face normal is `u × v` for both.
pub fn quad(p0: Point3, u: Vec3, v: Vec3) -> Vec<Triangle> {
    vec![
        Triangle::new(p0, u, v),
        Triangle::new(p0 + u + v, -u, -v),
    ]
}

/// Cornell-style box: colored side walls, an emissive ceiling panel, one
/// mirror sphere and one glass sphere. A point light doubles the ceiling
/// panel so the legacy strategy has something to shade with.
pub fn cornell_box() -> (Scene, CameraParameters) {
    let white = Material::matte(
        Spectrum::new(0.75, 0.75, 0.75),
        Spectrum::new(0.1, 0.1, 0.1),
    );
    let red = Material::matte(
        Spectrum::new(0.75, 0.15, 0.15),
        Spectrum::new(0.1, 0.1, 0.1),
    );
    let green = Material::matte(
        Spectrum::new(0.15, 0.75, 0.15),
        Spectrum::new(0.1, 0.1, 0.1),
    );
    let panel = Material::emitter(Spectrum::new(8.0, 8.0, 8.0));
    let mirror = Material::mirror(Spectrum::new(0.9, 0.9, 0.9));
    let glass = Material::glass(0.85, Spectrum::new(0.05, 0.05, 0.05));

    let scene = SceneBuilder::new()
        // Floor, normal up
        .mesh(
            quad(
                Point3::new(-1.0, 0.0, -1.0),
                Vec3::new(0.0, 0.0, 2.0),
                Vec3::new(2.0, 0.0, 0.0),
            ),
            white,
        )
        // Ceiling, normal down
        .mesh(
            quad(
                Point3::new(-1.0, 2.0, -1.0),
                Vec3::new(2.0, 0.0, 0.0),
                Vec3::new(0.0, 0.0, 2.0),
            ),
            white,
        )
        // Back wall, normal toward the camera
        .mesh(
            quad(
                Point3::new(-1.0, 0.0, -1.0),
                Vec3::new(2.0, 0.0, 0.0),
                Vec3::new(0.0, 2.0, 0.0),
            ),
            white,
        )
        // Left wall, normal +x
        .mesh(
            quad(
                Point3::new(-1.0, 0.0, -1.0),
                Vec3::new(0.0, 2.0, 0.0),
                Vec3::new(0.0, 0.0, 2.0),
            ),
            red,
        )
        // Right wall, normal -x
        .mesh(
            quad(
                Point3::new(1.0, 0.0, -1.0),
                Vec3::new(0.0, 0.0, 2.0),
                Vec3::new(0.0, 2.0, 0.0),
            ),
            green,
        )
        // Light panel just below the ceiling; stored normal is up so photon
        // emission leaves through the downward hemisphere
        .mesh(
            quad(
                Point3::new(-0.3, 1.98, -0.3),
                Vec3::new(0.0, 0.0, 0.6),
                Vec3::new(0.6, 0.0, 0.0),
            ),
            panel,
        )
        .sphere(Point3::new(-0.45, 0.4, -0.35), 0.4, mirror)
        .sphere(Point3::new(0.5, 0.35, 0.3), 0.35, glass)
        .light(Light::Point {
            p: Point3::new(0.0, 1.8, 0.5),
            color: Spectrum::new(1.0, 1.0, 1.0),
        })
        .build();

    let camera = CameraParameters {
        position: Point3::new(0.0, 1.0, 3.4),
        target: Point3::new(0.0, 1.0, 0.0),
        up: Vec3::new(0.0, 1.0, 0.0),
        fov_y: 40.0,
    };

    (scene, camera)
}
