use glam::{Quat, Vec2, Vec3};

use super::core::Camera;
use super::pose::CameraPose;
use crate::math::{Aabb, Spherical};

/// Eye position of the two-point-perspective reset view.
pub const RESET_POSITION: Vec3 = Vec3::new(8.0, 0.0, 8.0);
/// Look-at point of the reset view.
pub const RESET_TARGET: Vec3 = Vec3::ZERO;

/// FOV used to frame a model when the camera has none (orthographic).
const FALLBACK_FIT_FOVY: f32 = 45.0;

/// Mutable handle over a camera and its pivot target.
///
/// Every navigation primitive lives here; the
/// [`NavigationEngine`](crate::navigation::NavigationEngine) decides which
/// one an input event maps to.
pub struct CameraRig<'a> {
    camera: &'a mut Camera,
    target: &'a mut Vec3,
}

impl<'a> CameraRig<'a> {
    /// Borrow a camera and target together.
    pub fn new(camera: &'a mut Camera, target: &'a mut Vec3) -> Self {
        Self { camera, target }
    }

    /// The camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        self.camera
    }

    /// The camera, mutably.
    pub fn camera_mut(&mut self) -> &mut Camera {
        self.camera
    }

    /// Give back the two borrowed cells.
    pub fn into_parts(self) -> (&'a mut Camera, &'a mut Vec3) {
        (self.camera, self.target)
    }

    /// The pivot target.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        *self.target
    }

    /// Eye-to-target distance.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.camera.distance_to(*self.target)
    }

    /// Orbit the camera around a fixed `pivot`.
    ///
    /// The pivot→camera offset is rotated about the camera's up basis by
    /// `-delta.x · speed`, then about its right basis by `-delta.y ·
    /// speed`. Pitch is not clamped. The pivot target does not move.
    pub fn orbit_around(&mut self, pivot: Vec3, delta: Vec2, speed: f32) {
        let camera = &mut *self.camera;
        let forward = camera.world_direction();

        // forward ∥ up leaves the cross product empty; the camera's own
        // screen axes are the same basis without the degeneracy.
        let right = forward
            .cross(camera.up)
            .try_normalize()
            .unwrap_or_else(|| camera.right());
        let up = right
            .cross(forward)
            .try_normalize()
            .unwrap_or_else(|| camera.screen_up());

        let mut offset = camera.position - pivot;
        offset = Quat::from_axis_angle(up, -delta.x * speed) * offset;
        offset = Quat::from_axis_angle(right, -delta.y * speed) * offset;

        camera.position = pivot + offset;
        camera.look_at(pivot);
    }

    /// Orbit around the pivot target in world-`Y` spherical coordinates,
    /// keeping the polar angle inside `[margin, π − margin]`.
    pub fn orbit_spherical(&mut self, delta: Vec2, speed: f32, margin: f32) {
        let target = *self.target;
        let mut spherical = Spherical::from_vec3(self.camera.position - target);
        spherical.theta -= delta.x * speed;
        spherical.phi += delta.y * speed;
        let spherical = spherical.clamp_phi(margin);

        self.camera.position = target + spherical.to_vec3();
        self.camera.look_at(target);
    }

    /// Translate camera and target together in the screen plane.
    ///
    /// The step scales with the eye-to-target distance so the model moves
    /// at a similar screen speed at any zoom level. Returns the applied
    /// offset.
    pub fn pan(&mut self, delta: Vec2, speed: f32) -> Vec3 {
        let scale = self.distance() * speed;
        let offset = self.camera.right() * (-delta.x * scale)
            + self.camera.screen_up() * (delta.y * scale);

        self.camera.position += offset;
        *self.target += offset;
        offset
    }

    /// Scale the camera's offset from `center` by `factor`, and pull the
    /// target towards `center` by `|1 − factor| · target_follow` of the
    /// way.
    ///
    /// The camera keeps its orientation, so it moves strictly along the
    /// line through `center`.
    pub fn zoom_toward(
        &mut self,
        center: Vec3,
        factor: f32,
        target_follow: f32,
    ) {
        let offset = (self.camera.position - center) * factor;
        self.camera.position = center + offset;

        let follow = (1.0 - factor).abs() * target_follow;
        *self.target += (center - *self.target) * follow;
    }

    /// Move the pivot target to `point` without moving the camera.
    pub fn focus_on(&mut self, point: Vec3) {
        *self.target = point;
    }

    /// Frame `bounds` along the current viewing direction.
    ///
    /// The eye backs off until the longest box edge fits the vertical FOV
    /// with `padding` (1.2 leaves a 20% margin), and the target moves to
    /// the box center.
    pub fn fit_to_box(&mut self, bounds: Aabb, padding: f32) {
        let center = bounds.center();
        let fovy = self.camera.fovy().unwrap_or(FALLBACK_FIT_FOVY);
        let distance = bounds.max_dimension()
            / (2.0 * (fovy.to_radians() * 0.5).tan())
            * padding;

        let direction = (self.camera.position - center)
            .try_normalize()
            .unwrap_or(Vec3::Z);
        self.camera.position = center + direction * distance;
        *self.target = center;
        self.camera.look_at(center);
    }

    /// Place camera and target exactly as `pose` says (lens untouched).
    ///
    /// `up` is assigned before the look-at so the view basis uses it.
    pub fn place(&mut self, pose: &CameraPose) {
        self.camera.position = pose.position;
        *self.target = pose.target;
        self.camera.up = pose.up;
        self.camera.look_at(pose.target);
    }

    /// Two-point-perspective default view: level eye at `(8, 0, 8)` looking
    /// at the origin with `+Y` up.
    pub fn reset(&mut self) {
        self.place(&CameraPose::look_at(RESET_POSITION, RESET_TARGET, Vec3::Y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera_at(position: Vec3, target: Vec3) -> Camera {
        let mut camera = Camera::perspective(60.0, 1.0, 0.01, 1000.0);
        camera.position = position;
        camera.look_at(target);
        camera
    }

    #[test]
    fn orbit_keeps_radius_over_many_steps() {
        let pivot = Vec3::new(1.0, 0.5, -2.0);
        let mut camera = camera_at(Vec3::new(4.0, 3.0, 6.0), pivot);
        let mut target = Vec3::ZERO;
        let radius = camera.distance_to(pivot);

        let mut rig = CameraRig::new(&mut camera, &mut target);
        for i in 0..200 {
            let d = Vec2::new((i % 7) as f32 - 3.0, (i % 5) as f32 * 4.0);
            rig.orbit_around(pivot, d, 0.005);
        }
        assert!((rig.camera().distance_to(pivot) - radius).abs() < 1e-3);
        assert_eq!(rig.target(), Vec3::ZERO);
    }

    #[test]
    fn orbit_faces_pivot_afterwards() {
        let pivot = Vec3::ZERO;
        let mut camera = camera_at(Vec3::new(0.0, 0.0, 10.0), pivot);
        let mut target = pivot;
        let mut rig = CameraRig::new(&mut camera, &mut target);
        rig.orbit_around(pivot, Vec2::new(40.0, 0.0), 0.01);

        let camera = rig.camera();
        let to_pivot = (pivot - camera.position).normalize();
        assert!(camera.world_direction().dot(to_pivot) > 0.9999);
        // Dragging right swings the eye towards -X around +Y.
        assert!(camera.position.x < 0.0);
        assert!(camera.position.y.abs() < 1e-4);
    }

    #[test]
    fn vertical_orbit_goes_past_the_pole() {
        let pivot = Vec3::ZERO;
        let mut camera = camera_at(Vec3::new(0.0, 0.0, 10.0), pivot);
        let mut target = pivot;
        let mut rig = CameraRig::new(&mut camera, &mut target);
        // Ten 10° steps carry the eye over the top of the pivot.
        let speed = 10f32.to_radians() / 10.0;
        for _ in 0..10 {
            rig.orbit_around(pivot, Vec2::new(0.0, -10.0), speed);
        }
        let camera = rig.camera();
        assert!(camera.position.is_finite());
        assert!((camera.distance_to(pivot) - 10.0).abs() < 1e-3);
    }

    #[test]
    fn spherical_orbit_clamps_pitch() {
        let mut camera = camera_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        let mut target = Vec3::ZERO;
        let mut rig = CameraRig::new(&mut camera, &mut target);
        rig.orbit_spherical(Vec2::new(0.0, -10_000.0), 0.005, 0.1);

        let s = Spherical::from_vec3(rig.camera().position);
        assert!((s.phi - 0.1).abs() < 1e-3);
        assert!((s.radius - 10.0).abs() < 1e-3);
    }

    #[test]
    fn pan_moves_camera_and_target_identically() {
        let mut camera = camera_at(Vec3::new(3.0, 4.0, 5.0), Vec3::ZERO);
        let mut target = Vec3::ZERO;
        let mut rig = CameraRig::new(&mut camera, &mut target);
        let before = rig.distance();
        let direction = rig.camera().world_direction();

        let offset = rig.pan(Vec2::new(12.0, -7.0), 0.002);
        assert_eq!(rig.target(), offset);
        assert!((rig.distance() - before).abs() < 1e-4);
        assert!((rig.camera().world_direction() - direction).length() < 1e-6);
        assert!(offset.dot(direction).abs() < 1e-4);
    }

    #[test]
    fn zoom_scales_distance_to_center() {
        let mut camera = camera_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        let mut target = Vec3::ZERO;
        let center = Vec3::new(1.0, 0.0, 0.0);
        let mut rig = CameraRig::new(&mut camera, &mut target);
        let before = rig.camera().distance_to(center);

        rig.zoom_toward(center, 0.9, 0.3);
        assert!((rig.camera().distance_to(center) - before * 0.9).abs() < 1e-4);
        // target moved 3% of the way to the center
        assert!((rig.target() - Vec3::new(0.03, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn fit_frames_box_from_current_side() {
        let mut camera = camera_at(Vec3::new(0.0, 0.0, 50.0), Vec3::ZERO);
        let mut target = Vec3::ZERO;
        let mut rig = CameraRig::new(&mut camera, &mut target);
        let bounds =
            Aabb::new(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(3.0, 1.0, 1.0));
        rig.fit_to_box(bounds, 1.2);

        let expected = 4.0 / (2.0 * 30f32.to_radians().tan()) * 1.2;
        assert_eq!(rig.target(), Vec3::new(1.0, 0.0, 0.0));
        assert!((rig.distance() - expected).abs() < 1e-3);
        assert!(rig.camera().position.z > 0.0);
    }

    #[test]
    fn reset_is_level_two_point_view() {
        let mut camera = Camera::default();
        let mut target = Vec3::splat(5.0);
        let mut rig = CameraRig::new(&mut camera, &mut target);
        rig.reset();
        assert_eq!(rig.camera().position, RESET_POSITION);
        assert_eq!(rig.target(), Vec3::ZERO);
        assert!(rig.camera().world_direction().y.abs() < 1e-6);
    }
}
