use glam::{Vec2, Vec3};

use super::controller::CameraRig;
use super::core::Camera;
use crate::error::CameraError;

/// The view a user is looking at: a camera cell, a pivot-target cell and
/// the drawable size.
///
/// The camera and the target are independent cells. Either may be absent
/// while the renderer is still starting up, in which case every operation
/// that needs them reports [`CameraError::UninitializedTarget`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Viewport {
    camera: Option<Camera>,
    target: Option<Vec3>,
    width: u32,
    height: u32,
}

impl Viewport {
    /// Viewport with nothing attached yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ready viewport around `camera`, with the pivot target at `target`.
    ///
    /// The camera's aspect ratio is synced to the given size.
    #[must_use]
    pub fn with_camera(
        camera: Camera,
        target: Vec3,
        width: u32,
        height: u32,
    ) -> Self {
        let mut viewport = Self {
            camera: Some(camera),
            target: Some(target),
            width: 0,
            height: 0,
        };
        viewport.resize(width, height);
        viewport
    }

    /// Attach (or replace) the camera.
    pub fn attach_camera(&mut self, mut camera: Camera) {
        if let Some(aspect) = self.aspect() {
            camera.set_aspect(aspect);
        }
        self.camera = Some(camera);
    }

    /// Detach the camera, returning it.
    pub fn detach_camera(&mut self) -> Option<Camera> {
        self.camera.take()
    }

    /// Live camera, if attached.
    #[must_use]
    pub fn camera(&self) -> Option<&Camera> {
        self.camera.as_ref()
    }

    /// Mutable live camera, if attached.
    pub fn camera_mut(&mut self) -> Option<&mut Camera> {
        self.camera.as_mut()
    }

    /// Pivot target, if attached.
    #[must_use]
    pub fn target(&self) -> Option<Vec3> {
        self.target
    }

    /// Set (or attach) the pivot target.
    pub fn set_target(&mut self, target: Vec3) {
        self.target = Some(target);
    }

    /// Detach the pivot target.
    pub fn clear_target(&mut self) {
        self.target = None;
    }

    /// Drawable size in physical pixels.
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Width / height, or `None` while either is zero.
    #[must_use]
    pub fn aspect(&self) -> Option<f32> {
        (self.width > 0 && self.height > 0)
            .then(|| self.width as f32 / self.height as f32)
    }

    /// Record a new drawable size and refresh the camera's aspect ratio.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        if let (Some(aspect), Some(camera)) = (self.aspect(), &mut self.camera)
        {
            camera.set_aspect(aspect);
        }
    }

    /// Whether both camera and target are attached.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.camera.is_some() && self.target.is_some()
    }

    /// Convert a cursor position in pixels (origin top-left) to normalized
    /// device coordinates.
    #[must_use]
    pub fn cursor_to_ndc(&self, x: f32, y: f32) -> Option<Vec2> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        Some(Vec2::new(
            (x / self.width as f32) * 2.0 - 1.0,
            -(y / self.height as f32) * 2.0 + 1.0,
        ))
    }

    /// Borrow the camera and the target together for mutation.
    pub fn rig(&mut self) -> Result<CameraRig<'_>, CameraError> {
        match (self.camera.as_mut(), self.target.as_mut()) {
            (Some(camera), Some(target)) => Ok(CameraRig::new(camera, target)),
            _ => Err(CameraError::UninitializedTarget),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_maps_corners_and_center() {
        let viewport =
            Viewport::with_camera(Camera::default(), Vec3::ZERO, 800, 600);
        assert_eq!(
            viewport.cursor_to_ndc(0.0, 0.0),
            Some(Vec2::new(-1.0, 1.0))
        );
        assert_eq!(
            viewport.cursor_to_ndc(800.0, 600.0),
            Some(Vec2::new(1.0, -1.0))
        );
        assert_eq!(viewport.cursor_to_ndc(400.0, 300.0), Some(Vec2::ZERO));
    }

    #[test]
    fn zero_size_has_no_ndc() {
        let viewport = Viewport::new();
        assert!(viewport.cursor_to_ndc(1.0, 1.0).is_none());
        assert!(viewport.aspect().is_none());
    }

    #[test]
    fn rig_requires_both_cells() {
        let mut viewport = Viewport::new();
        assert!(matches!(
            viewport.rig(),
            Err(CameraError::UninitializedTarget)
        ));
        viewport.attach_camera(Camera::default());
        assert!(viewport.rig().is_err());
        viewport.set_target(Vec3::ZERO);
        assert!(viewport.rig().is_ok());
        assert!(viewport.is_ready());
    }

    #[test]
    fn resize_updates_camera_aspect() {
        let mut viewport =
            Viewport::with_camera(Camera::default(), Vec3::ZERO, 100, 100);
        viewport.resize(200, 100);
        let aspect = viewport.camera().map(Camera::aspect);
        assert_eq!(aspect, Some(2.0));
    }
}
