use glam::Vec3;

/// Hits closer than this along the ray are treated as self-intersections.
const T_MIN: f32 = 1e-6;

/// Half-line starting at `origin` and extending along `direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point in world space.
    pub origin: Vec3,
    /// Unit-length direction.
    pub direction: Vec3,
}

impl Ray {
    /// Build a ray, normalizing `direction`.
    ///
    /// A zero direction falls back to `-Z`, the default camera view axis.
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.try_normalize().unwrap_or(Vec3::NEG_Z),
        }
    }

    /// Point at parameter `t` along the ray.
    #[inline]
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Distance along the ray to a plane through `point` with `normal`.
    ///
    /// Returns `None` for parallel planes and planes behind the origin.
    #[must_use]
    pub fn intersect_plane(&self, point: Vec3, normal: Vec3) -> Option<f32> {
        let denom = normal.dot(self.direction);
        if denom.abs() < f32::EPSILON {
            return None;
        }
        let t = (point - self.origin).dot(normal) / denom;
        (t >= T_MIN).then_some(t)
    }

    /// Nearest positive hit against a sphere.
    ///
    /// When the origin is inside the sphere the exit point is returned.
    #[must_use]
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let b = oc.dot(self.direction);
        let c = oc.length_squared() - radius * radius;
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrt_d = discriminant.sqrt();
        let near = -b - sqrt_d;
        if near >= T_MIN {
            return Some(near);
        }
        let far = -b + sqrt_d;
        (far >= T_MIN).then_some(far)
    }

    /// Slab test against an axis-aligned box.
    #[must_use]
    pub fn intersect_box(&self, min: Vec3, max: Vec3) -> Option<f32> {
        const EPSILON: f32 = 1e-8;

        // Clamp near-zero components so the inverse stays finite.
        let inv = |d: f32| {
            if d.abs() < EPSILON {
                1.0 / EPSILON.copysign(d)
            } else {
                1.0 / d
            }
        };
        let inv_dir = Vec3::new(
            inv(self.direction.x),
            inv(self.direction.y),
            inv(self.direction.z),
        );

        let t_min = (min - self.origin) * inv_dir;
        let t_max = (max - self.origin) * inv_dir;
        let t1 = t_min.min(t_max);
        let t2 = t_min.max(t_max);

        let t_near = t1.max_element();
        let t_far = t2.min_element();

        if t_near > t_far || t_far < T_MIN {
            return None;
        }
        if t_near >= T_MIN {
            Some(t_near)
        } else {
            Some(t_far)
        }
    }

    /// Möller–Trumbore ray/triangle test, double sided.
    #[must_use]
    pub fn intersect_triangle(&self, a: Vec3, b: Vec3, c: Vec3) -> Option<f32> {
        let edge1 = b - a;
        let edge2 = c - a;
        let h = self.direction.cross(edge2);
        let det = edge1.dot(h);
        if det.abs() < 1e-9 {
            return None;
        }
        let inv_det = 1.0 / det;
        let s = self.origin - a;
        let u = inv_det * s.dot(h);
        if !(0.0..=1.0).contains(&u) {
            return None;
        }
        let q = s.cross(edge1);
        let v = inv_det * self.direction.dot(q);
        if v < 0.0 || u + v > 1.0 {
            return None;
        }
        let t = inv_det * edge2.dot(q);
        (t >= T_MIN).then_some(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_direction() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -5.0));
        assert!((ray.direction.length() - 1.0).abs() < 1e-6);
        assert_eq!(ray.at(2.0), Vec3::new(0.0, 0.0, -2.0));
    }

    #[test]
    fn test_zero_direction_falls_back_to_view_axis() {
        let ray = Ray::new(Vec3::ONE, Vec3::ZERO);
        assert_eq!(ray.direction, Vec3::NEG_Z);
    }

    #[test]
    fn test_plane_hit_and_parallel_miss() {
        let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::NEG_Y);
        let t = ray.intersect_plane(Vec3::ZERO, Vec3::Y);
        assert!((t.unwrap_or_default() - 5.0).abs() < 1e-5);

        let parallel = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::X);
        assert!(parallel.intersect_plane(Vec3::ZERO, Vec3::Y).is_none());
    }

    #[test]
    fn test_plane_behind_origin_is_ignored() {
        let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::Y);
        assert!(ray.intersect_plane(Vec3::ZERO, Vec3::Y).is_none());
    }

    #[test]
    fn test_sphere_front_hit() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z);
        let t = ray.intersect_sphere(Vec3::ZERO, 1.0);
        assert!((t.unwrap_or_default() - 9.0).abs() < 1e-4);
    }

    #[test]
    fn test_sphere_from_inside_returns_exit() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let t = ray.intersect_sphere(Vec3::ZERO, 2.0);
        assert!((t.unwrap_or_default() - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_box_hit_and_miss() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let hit = ray.intersect_box(
            Vec3::new(5.0, -1.0, -1.0),
            Vec3::new(10.0, 1.0, 1.0),
        );
        assert!((hit.unwrap_or_default() - 5.0).abs() < 0.01);

        let miss = ray.intersect_box(
            Vec3::new(5.0, 2.0, 2.0),
            Vec3::new(10.0, 3.0, 3.0),
        );
        assert!(miss.is_none());
    }

    #[test]
    fn test_triangle_hit_inside_and_miss_outside() {
        let a = Vec3::new(-1.0, -1.0, 0.0);
        let b = Vec3::new(1.0, -1.0, 0.0);
        let c = Vec3::new(0.0, 1.0, 0.0);

        let ray = Ray::new(Vec3::new(0.0, 0.0, 3.0), Vec3::NEG_Z);
        let t = ray.intersect_triangle(a, b, c);
        assert!((t.unwrap_or_default() - 3.0).abs() < 1e-5);

        let outside = Ray::new(Vec3::new(3.0, 3.0, 3.0), Vec3::NEG_Z);
        assert!(outside.intersect_triangle(a, b, c).is_none());
    }
}
