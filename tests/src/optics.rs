#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use glam::Vec3;

    use lumen::{
        materials::Material,
        optics::{reflect, reflection_ray, refraction_ray, IOR_AIR, IOR_GLASS},
        ray::{HitRecord, Ray, BUMP_EPSILON},
    };

    /// A ray traveling along `d` whose hit point is the origin, with surface
    /// normal `n` written on it.
    fn hit_ray(d: Vec3, n: Vec3) -> Ray {
        let d = d.normalize();
        let mut ray = Ray::new(-d, d);
        ray.t_max = 1.0;
        ray.hit = Some(HitRecord {
            material: Material::default(),
            n,
            prim: 0,
        });
        ray
    }

    #[test]
    fn reflection_preserves_angle() {
        let n = Vec3::Y;
        let i = Vec3::new(1.0, -1.0, 0.5).normalize();
        let r = reflect(i, n);

        assert_relative_eq!(r.length(), 1.0, max_relative = 1e-6);
        assert_relative_eq!(r.dot(n), -i.dot(n), max_relative = 1e-6);
        // Tangential components are unchanged
        assert_relative_eq!(r.x, i.x, max_relative = 1e-6);
        assert_relative_eq!(r.z, i.z, max_relative = 1e-6);
    }

    #[test]
    fn reflection_ray_is_biased_off_the_surface() {
        let n = Vec3::Y;
        let ray = hit_ray(Vec3::new(1.0, -1.0, 0.0), n);
        let reflected = reflection_ray(&ray, n);

        assert_abs_diff_eq!(
            (reflected.o - ray.hit_point()).dot(n),
            BUMP_EPSILON,
            epsilon = 1e-7
        );
        assert_relative_eq!(reflected.d.dot(n), -ray.d.dot(n), max_relative = 1e-5);
    }

    #[test]
    fn refraction_at_normal_incidence_goes_straight_through() {
        let n = Vec3::Y;
        let ray = hit_ray(-Vec3::Y, n);
        let refraction = refraction_ray(&ray, n, IOR_AIR, IOR_GLASS);

        assert!(!refraction.total_internal);
        assert_relative_eq!(refraction.ray.d.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(refraction.ray.d.y, -1.0, max_relative = 1e-6);
        // Crossing rays start on the far side of the surface
        assert!((refraction.ray.o - ray.hit_point()).dot(n) < 0.0);
    }

    #[test]
    fn refraction_obeys_snells_law() {
        let n = Vec3::Y;
        let theta_i = 30.0f32.to_radians();
        let d = Vec3::new(theta_i.sin(), -theta_i.cos(), 0.0);
        let ray = hit_ray(d, n);

        let refraction = refraction_ray(&ray, n, IOR_AIR, IOR_GLASS);
        assert!(!refraction.total_internal);

        let cos_t = refraction.ray.d.dot(-n);
        let sin_t = (1.0 - cos_t * cos_t).max(0.0).sqrt();
        assert_relative_eq!(
            sin_t,
            (IOR_AIR / IOR_GLASS) * theta_i.sin(),
            max_relative = 1e-4
        );
    }

    #[test]
    fn total_internal_reflection_at_the_critical_angle() {
        let n = Vec3::Y;
        let critical = (IOR_AIR / IOR_GLASS).asin();

        // Just above the critical angle, leaving glass for air
        let theta_i = critical + 0.01;
        let ray = hit_ray(Vec3::new(theta_i.sin(), -theta_i.cos(), 0.0), n);
        let refraction = refraction_ray(&ray, n, IOR_GLASS, IOR_AIR);

        assert!(refraction.total_internal);
        // The reflected ray starts on the incident side of the surface
        assert!((refraction.ray.o - ray.hit_point()).dot(n) > 0.0);
        assert_relative_eq!(
            refraction.ray.d.dot(n),
            -ray.d.dot(n),
            max_relative = 1e-5
        );

        // Just below it the ray crosses
        let theta_i = critical - 0.01;
        let ray = hit_ray(Vec3::new(theta_i.sin(), -theta_i.cos(), 0.0), n);
        let refraction = refraction_ray(&ray, n, IOR_GLASS, IOR_AIR);
        assert!(!refraction.total_internal);
        assert!((refraction.ray.o - ray.hit_point()).dot(n) < 0.0);
    }

    #[test]
    fn entering_a_denser_medium_never_reflects_totally() {
        let n = Vec3::Y;
        // Grazing incidence from air into glass
        let theta_i = 89.0f32.to_radians();
        let ray = hit_ray(Vec3::new(theta_i.sin(), -theta_i.cos(), 0.0), n);
        let refraction = refraction_ray(&ray, n, IOR_AIR, IOR_GLASS);
        assert!(!refraction.total_internal);
    }
}
