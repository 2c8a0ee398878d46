#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use glam::Vec3;

    use lumen::{
        integrators::{
            path::{area_light_attenuation, area_shadow, direct_light},
            whitted::shadow,
        },
        materials::Material,
        math::Spectrum,
        presets::quad,
        ray::Ray,
        sampling::create_rng,
        scene::{Scene, SceneBuilder},
        shapes::Primitive,
    };

    const LIGHT_HEIGHT: f32 = 2.0;

    /// Floor at y = 0 under an upward-facing light panel, with an optional
    /// occluder panel at y = 1.
    fn scene_with_occluder(occluder: Option<Material>) -> Scene {
        let mut builder = SceneBuilder::new()
            .mesh(
                quad(
                    Vec3::new(-5.0, 0.0, -5.0),
                    Vec3::new(0.0, 0.0, 10.0),
                    Vec3::new(10.0, 0.0, 0.0),
                ),
                Material::matte(Spectrum::new(0.7, 0.7, 0.7), Spectrum::zeros()),
            )
            .mesh(
                quad(
                    Vec3::new(-0.5, LIGHT_HEIGHT, -0.5),
                    Vec3::new(0.0, 0.0, 1.0),
                    Vec3::new(1.0, 0.0, 0.0),
                ),
                Material::emitter(Spectrum::new(4.0, 4.0, 4.0)),
            );
        if let Some(material) = occluder {
            builder = builder.mesh(
                quad(
                    Vec3::new(-2.0, 1.0, -2.0),
                    Vec3::new(0.0, 0.0, 4.0),
                    Vec3::new(4.0, 0.0, 0.0),
                ),
                material,
            );
        }
        builder.build()
    }

    /// A ray cast straight down onto the floor at the origin.
    fn floor_hit(scene: &Scene) -> Ray {
        let mut ray = Ray::new(Vec3::new(0.0, 0.5, 0.0), -Vec3::Y);
        assert!(scene.intersect(&mut ray));
        ray
    }

    fn light_id(scene: &Scene) -> usize {
        scene.area_lights[0].id()
    }

    #[test]
    fn unoccluded_area_light_is_fully_visible() {
        let scene = scene_with_occluder(None);
        let ray = floor_hit(&scene);
        let factor = area_shadow(&ray, Vec3::Y, &scene, Vec3::Y, LIGHT_HEIGHT, light_id(&scene));
        assert_eq!(factor, Spectrum::ones());
    }

    #[test]
    fn opaque_occluder_blocks_completely() {
        let scene = scene_with_occluder(Some(Material::matte(
            Spectrum::new(0.7, 0.7, 0.7),
            Spectrum::zeros(),
        )));
        let ray = floor_hit(&scene);
        let factor = area_shadow(&ray, Vec3::Y, &scene, Vec3::Y, LIGHT_HEIGHT, light_id(&scene));
        assert_eq!(factor, Spectrum::zeros());
    }

    #[test]
    fn transparent_occluder_filters_the_light() {
        let diffuse = Spectrum::new(0.5, 0.25, 0.25);
        let ktran = 0.5;
        let occluder = Material {
            diffuse,
            ktran,
            ..Material::default()
        };
        let scene = scene_with_occluder(Some(occluder));
        let ray = floor_hit(&scene);

        let factor = area_shadow(&ray, Vec3::Y, &scene, Vec3::Y, LIGHT_HEIGHT, light_id(&scene));
        let expected = diffuse.normalized() * ktran;
        assert_relative_eq!(factor.r, expected.r, max_relative = 1e-5);
        assert_relative_eq!(factor.g, expected.g, max_relative = 1e-5);
        assert_relative_eq!(factor.b, expected.b, max_relative = 1e-5);
    }

    #[test]
    fn emissive_occluders_do_not_block_the_legacy_shadow() {
        // The light panel itself sits between the floor and the probe
        // distance; the emissive special case keeps it from occluding
        let scene = scene_with_occluder(None);
        let ray = floor_hit(&scene);
        let factor = shadow(&ray, Vec3::Y, &scene, Vec3::Y, LIGHT_HEIGHT + 5.0);
        assert_eq!(factor, Spectrum::ones());
    }

    #[test]
    fn area_attenuation_is_capped_and_linear_in_distance() {
        assert_eq!(area_light_attenuation(0.0), 1.0);
        let d = 10.0;
        assert_relative_eq!(
            area_light_attenuation(d),
            1.0 / (0.25 + 0.1 * d + 0.01 * d),
            max_relative = 1e-6
        );
        assert!(area_light_attenuation(100.0) < area_light_attenuation(10.0));
    }

    #[test]
    fn direct_light_reaches_an_unoccluded_surface() {
        let scene = scene_with_occluder(None);
        let ray = floor_hit(&scene);
        let mut rng = create_rng(Some(11), 0);

        let color = direct_light(&ray, &scene, &mut rng);
        assert!(color.r > 0.0 && color.g > 0.0 && color.b > 0.0);

        // Bounded by emissive color times diffuse albedo
        assert!(color.r <= 4.0 * 0.7);
    }

    #[test]
    fn direct_light_is_black_behind_an_opaque_occluder() {
        let scene = scene_with_occluder(Some(Material::matte(
            Spectrum::new(0.7, 0.7, 0.7),
            Spectrum::zeros(),
        )));
        let ray = floor_hit(&scene);
        let mut rng = create_rng(Some(12), 0);
        assert_eq!(direct_light(&ray, &scene, &mut rng), Spectrum::zeros());
    }
}
