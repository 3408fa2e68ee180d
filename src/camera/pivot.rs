use glam::{Vec2, Vec3};

use super::core::Camera;
use crate::math::Ray;
use crate::scene::SceneIntersect;

/// Picks the rotation center for a drag gesture.
///
/// Called at most once per gesture; the caller caches the result.
pub trait PivotResolver {
    /// Rotation center for the current view, or `None` when there is no
    /// usable point (the caller then orbits around the pivot target).
    fn resolve_pivot(
        &mut self,
        camera: &Camera,
        scene: &dyn SceneIntersect,
        pivot_target: Vec3,
    ) -> Option<Vec3>;
}

/// Resolves the pivot under the screen center.
///
/// The pivot is the nearest scene hit of the center ray. On a miss it is
/// the point along that ray at the current eye-to-target depth, so the
/// rotation center sits as deep as whatever the user was looking at.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScreenCenterPivot;

impl PivotResolver for ScreenCenterPivot {
    fn resolve_pivot(
        &mut self,
        camera: &Camera,
        scene: &dyn SceneIntersect,
        pivot_target: Vec3,
    ) -> Option<Vec3> {
        let ray = camera.ray_from_ndc(Vec2::ZERO);
        let depth = camera.distance_to(pivot_target);
        let pivot = pick_or_project(&ray, scene, depth);
        if pivot.is_none() {
            log::debug!(
                "no pivot: center ray missed and target depth is {depth}"
            );
        }
        pivot
    }
}

/// Nearest hit along `ray`, else the point at `fallback_depth`.
///
/// Returns `None` when nothing is hit and the depth is zero or not finite,
/// since that point would sit on the ray origin.
#[must_use]
pub fn pick_or_project(
    ray: &Ray,
    scene: &dyn SceneIntersect,
    fallback_depth: f32,
) -> Option<Vec3> {
    if let Some(hit) = scene.intersect_ray(ray) {
        return Some(hit.point);
    }
    (fallback_depth.is_finite() && fallback_depth > 0.0)
        .then(|| ray.at(fallback_depth))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Scene, Shape};

    fn camera_on_z(distance: f32) -> Camera {
        let mut camera = Camera::perspective(60.0, 1.0, 0.01, 1000.0);
        camera.position = Vec3::new(0.0, 0.0, distance);
        camera.look_at(Vec3::ZERO);
        camera
    }

    #[test]
    fn hit_under_screen_center_wins() {
        let scene = Scene::new().with(
            "slab",
            Shape::Sphere {
                center: Vec3::new(0.0, 0.0, 2.0),
                radius: 1.0,
            },
        );
        let pivot = ScreenCenterPivot
            .resolve_pivot(&camera_on_z(10.0), &scene, Vec3::ZERO)
            .unwrap();
        assert!((pivot - Vec3::new(0.0, 0.0, 3.0)).length() < 1e-4);
    }

    #[test]
    fn miss_falls_back_to_target_depth_on_center_ray() {
        let camera = camera_on_z(10.0);
        // Target off the view axis: depth is kept, direction is not.
        let target = Vec3::new(6.0, 0.0, 2.0);
        let pivot = ScreenCenterPivot
            .resolve_pivot(&camera, &(), target)
            .unwrap();
        let depth = camera.distance_to(target);
        assert!((camera.distance_to(pivot) - depth).abs() < 1e-4);
        assert!(pivot.x.abs() < 1e-4 && pivot.y.abs() < 1e-4);
    }

    #[test]
    fn miss_with_target_on_eye_has_no_pivot() {
        let camera = camera_on_z(10.0);
        let pivot =
            ScreenCenterPivot.resolve_pivot(&camera, &(), camera.position);
        assert!(pivot.is_none());
    }
}
