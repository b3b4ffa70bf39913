use glam::Vec3;

/// Half-line used for pointer picking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit length.
    pub direction: Vec3,
}

impl Ray {
    /// Build a ray; the direction is normalized (zero stays zero).
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Distance to the front face of a sphere, if the ray hits it.
    ///
    /// Only the entering intersection counts: a ray that starts inside the
    /// sphere, or a sphere behind the origin, is a miss. Degenerate spheres
    /// (radius <= 0) are never hit.
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        if radius.is_nan() || radius <= 0.0 || self.direction == Vec3::ZERO {
            return None;
        }
        let oc = self.origin - center;
        let b = oc.dot(self.direction);
        let c = oc.length_squared() - radius * radius;
        if c <= 0.0 {
            return None;
        }
        let disc = b * b - c;
        if disc < 0.0 {
            return None;
        }
        let t = -b - disc.sqrt();
        (t > 0.0).then_some(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hits_sphere_in_front() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), -Vec3::Z);
        let t = ray.intersect_sphere(Vec3::ZERO, 2.0).unwrap();
        assert!((t - 8.0).abs() < 1e-5);
        assert!((ray.at(t) - Vec3::new(0.0, 0.0, 2.0)).length() < 1e-5);
    }

    #[test]
    fn misses_offset_sphere() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), -Vec3::Z);
        assert!(ray.intersect_sphere(Vec3::new(5.0, 0.0, 0.0), 2.0).is_none());
    }

    #[test]
    fn sphere_behind_origin_is_a_miss() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::Z);
        assert!(ray.intersect_sphere(Vec3::ZERO, 2.0).is_none());
    }

    #[test]
    fn origin_inside_sphere_is_a_miss() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        assert!(ray.intersect_sphere(Vec3::ZERO, 5.0).is_none());
    }

    #[test]
    fn zero_radius_is_never_hit() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), -Vec3::Z);
        assert!(ray.intersect_sphere(Vec3::ZERO, 0.0).is_none());
    }

    #[test]
    fn direction_is_normalized() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 3.0, 4.0));
        assert!((ray.direction.length() - 1.0).abs() < 1e-6);
    }
}
