#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use glam::Vec3;

    use lumen::ray::{InsideSet, Ray};

    #[test]
    fn new() {
        let o = Vec3::new(1.0, 2.0, 3.0);
        let r = Ray::new(o, Vec3::new(0.0, 3.0, 4.0));

        assert_eq!(r.o, o);
        // Direction is normalized on construction
        assert_relative_eq!(r.d.length(), 1.0, max_relative = 1e-6);
        assert_relative_eq!(r.d.y, 0.6, max_relative = 1e-6);
        assert_relative_eq!(r.d.z, 0.8, max_relative = 1e-6);

        assert_eq!(r.t_max, f32::INFINITY);
        assert!(!r.is_hit());
        assert!(r.hit.is_none());
    }

    #[test]
    fn inverse_direction_cache() {
        let r = Ray::new(Vec3::ZERO, Vec3::new(1.0, -1.0, 1.0));
        assert_relative_eq!(r.inv_d.x, 1.0 / r.d.x, max_relative = 1e-6);
        assert_relative_eq!(r.inv_d.y, 1.0 / r.d.y, max_relative = 1e-6);
        assert_relative_eq!(r.inv_d.z, 1.0 / r.d.z, max_relative = 1e-6);
        assert_eq!(r.sign, [false, true, false]);
    }

    #[test]
    fn ids_increase_monotonically() {
        let a = Ray::new(Vec3::ZERO, Vec3::X);
        let b = Ray::new(Vec3::ZERO, Vec3::X);
        let c = Ray::new(Vec3::ZERO, Vec3::X);
        assert!(a.id < b.id);
        assert!(b.id < c.id);
    }

    #[test]
    fn point() {
        let o = Vec3::new(1.0, 2.0, 3.0);
        let d = Vec3::new(0.0, 1.0, 0.0);
        let mut r = Ray::new(o, d);
        assert_eq!(r.point(2.0), o + d * 2.0);

        r.t_max = 3.0;
        assert_eq!(r.hit_point(), o + d * 3.0);
    }

    #[test]
    fn inside_set() {
        let mut set = InsideSet::new();
        assert!(set.is_empty());

        set.insert(1);
        set.insert(2);
        set.insert(1);
        assert_eq!(set.len(), 2);
        assert!(set.contains(1));
        assert!(set.contains(2));
        assert!(!set.contains(3));

        set.remove(1);
        assert!(!set.contains(1));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn inside_set_branches_are_independent() {
        let mut parent = InsideSet::new();
        parent.insert(1);

        let mut branch = parent.clone();
        branch.insert(2);
        branch.remove(1);

        assert!(parent.contains(1));
        assert!(!parent.contains(2));
        assert!(branch.contains(2));
    }
}
