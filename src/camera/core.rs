use glam::{Mat3, Mat4, Quat, Vec2, Vec3};

use crate::math::Ray;

/// Projection model of a [`Camera`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Pinhole perspective.
    Perspective {
        /// Vertical field of view in degrees.
        fovy: f32,
        /// Film gauge in millimetres, used to relate focal length to FOV.
        film_gauge: f32,
    },
    /// Parallel projection.
    Orthographic {
        /// Visible world-space height.
        height: f32,
    },
}

/// Live camera: placement, orientation and projection.
///
/// The projection matrix is cached and recomputed by every setter that
/// changes a projection parameter, so it is always consistent with the
/// displayed state.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye position in world space.
    pub position: Vec3,
    /// Up hint used by [`look_at`](Self::look_at) to build the view basis.
    pub up: Vec3,
    orientation: Quat,
    projection: Projection,
    aspect: f32,
    znear: f32,
    zfar: f32,
    projection_matrix: Mat4,
}

/// Film gauge assumed when a focal length arrives without one.
pub const DEFAULT_FILM_GAUGE_MM: f32 = 35.0;

impl Camera {
    /// Perspective camera at the origin looking down `-Z`.
    #[must_use]
    pub fn perspective(fovy: f32, aspect: f32, znear: f32, zfar: f32) -> Self {
        Self::with_projection(
            Projection::Perspective {
                fovy,
                film_gauge: DEFAULT_FILM_GAUGE_MM,
            },
            aspect,
            znear,
            zfar,
        )
    }

    /// Orthographic camera at the origin looking down `-Z`.
    #[must_use]
    pub fn orthographic(
        height: f32,
        aspect: f32,
        znear: f32,
        zfar: f32,
    ) -> Self {
        Self::with_projection(
            Projection::Orthographic { height },
            aspect,
            znear,
            zfar,
        )
    }

    fn with_projection(
        projection: Projection,
        aspect: f32,
        znear: f32,
        zfar: f32,
    ) -> Self {
        let mut camera = Self {
            position: Vec3::ZERO,
            up: Vec3::Y,
            orientation: Quat::IDENTITY,
            projection,
            aspect,
            znear,
            zfar,
            projection_matrix: Mat4::IDENTITY,
        };
        camera.update_projection_matrix();
        camera
    }

    /// Current projection model.
    #[must_use]
    pub fn projection(&self) -> Projection {
        self.projection
    }

    /// Whether focal-length semantics apply to this camera.
    #[must_use]
    pub fn is_perspective(&self) -> bool {
        matches!(self.projection, Projection::Perspective { .. })
    }

    /// Vertical field of view in degrees, for perspective cameras.
    #[must_use]
    pub fn fovy(&self) -> Option<f32> {
        match self.projection {
            Projection::Perspective { fovy, .. } => Some(fovy),
            Projection::Orthographic { .. } => None,
        }
    }

    /// Set the vertical FOV and recompute the projection.
    ///
    /// Returns `false` (and changes nothing) on an orthographic camera.
    pub fn set_fovy(&mut self, degrees: f32) -> bool {
        let Projection::Perspective { fovy, .. } = &mut self.projection else {
            return false;
        };
        *fovy = degrees;
        self.update_projection_matrix();
        true
    }

    /// Film height in millimetres: the gauge applies to the wider side.
    fn film_height(&self, film_gauge: f32) -> f32 {
        film_gauge / self.aspect.max(1.0)
    }

    /// Focal length in millimetres implied by the current FOV and gauge.
    #[must_use]
    pub fn focal_length(&self) -> Option<f32> {
        match self.projection {
            Projection::Perspective { fovy, film_gauge } => Some(
                0.5 * self.film_height(film_gauge)
                    / (0.5 * fovy.to_radians()).tan(),
            ),
            Projection::Orthographic { .. } => None,
        }
    }

    /// Set the focal length against a film gauge, deriving the FOV.
    ///
    /// Returns `false` (and changes nothing) on an orthographic camera.
    pub fn set_focal_length(&mut self, focal_mm: f32, gauge_mm: f32) -> bool {
        if !self.is_perspective() {
            return false;
        }
        let slope = 0.5 * self.film_height(gauge_mm) / focal_mm;
        self.projection = Projection::Perspective {
            fovy: (2.0 * slope.atan()).to_degrees(),
            film_gauge: gauge_mm,
        };
        self.update_projection_matrix();
        true
    }

    /// Viewport aspect ratio (width / height).
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Set the aspect ratio and recompute the projection.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
        self.update_projection_matrix();
    }

    /// Near and far clip distances.
    #[must_use]
    pub fn clip_planes(&self) -> (f32, f32) {
        (self.znear, self.zfar)
    }

    /// Set both clip distances and recompute the projection.
    pub fn set_clip_planes(&mut self, znear: f32, zfar: f32) {
        self.znear = znear;
        self.zfar = zfar;
        self.update_projection_matrix();
    }

    /// Rebuild the cached projection matrix from the current parameters.
    pub fn update_projection_matrix(&mut self) {
        // perspective_rh uses the [0,1] depth range (wgpu/Vulkan convention)
        self.projection_matrix = match self.projection {
            Projection::Perspective { fovy, .. } => Mat4::perspective_rh(
                fovy.to_radians(),
                self.aspect,
                self.znear,
                self.zfar,
            ),
            Projection::Orthographic { height } => {
                let half_h = height * 0.5;
                let half_w = half_h * self.aspect;
                Mat4::orthographic_rh(
                    -half_w, half_w, -half_h, half_h, self.znear, self.zfar,
                )
            }
        };
    }

    /// Cached projection matrix.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection_matrix
    }

    /// Camera-to-world transform.
    #[must_use]
    pub fn world_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation, self.position)
    }

    /// World-to-camera transform.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.world_matrix().inverse()
    }

    /// Combined view-projection matrix.
    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix()
    }

    /// Camera orientation as a world-space rotation.
    #[must_use]
    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    /// Viewing direction (the camera's local `-Z`).
    #[must_use]
    pub fn world_direction(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    /// Screen-right axis: column 0 of the world transform.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.orientation * Vec3::X
    }

    /// Screen-up axis: column 1 of the world transform.
    #[must_use]
    pub fn screen_up(&self) -> Vec3 {
        self.orientation * Vec3::Y
    }

    /// Rotate the camera so it faces `target`, using the current
    /// [`up`](Self::up) hint.
    ///
    /// Degenerate inputs are nudged rather than rejected: a target at the
    /// eye looks down `-Z`, and an up hint parallel to the view axis is
    /// tilted slightly so the basis stays well defined. A zero up hint
    /// gives an arbitrary roll but still faces the target.
    pub fn look_at(&mut self, target: Vec3) {
        let mut z = self.position - target;
        if z.length_squared() == 0.0 {
            z = Vec3::Z;
        }
        z = z.normalize();

        let mut x = self.up.cross(z);
        if x.length_squared() == 0.0 && self.up.length_squared() > 0.0 {
            if self.up.z.abs() == 1.0 {
                z.x += 1e-4;
            } else {
                z.z += 1e-4;
            }
            z = z.normalize();
            x = self.up.cross(z);
        }
        let x = x
            .try_normalize()
            .unwrap_or_else(|| z.any_orthonormal_vector());
        let y = z.cross(x);

        self.orientation =
            Quat::from_mat3(&Mat3::from_cols(x, y, z)).normalize();
    }

    /// Ray through a point given in normalized device coordinates
    /// (`x` right, `y` up, both in `[-1, 1]`).
    #[must_use]
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        match self.projection {
            Projection::Perspective { fovy, .. } => {
                let tan_half = (fovy.to_radians() * 0.5).tan();
                let local = Vec3::new(
                    ndc.x * tan_half * self.aspect,
                    ndc.y * tan_half,
                    -1.0,
                );
                Ray::new(self.position, self.orientation * local)
            }
            Projection::Orthographic { height } => {
                let half_h = height * 0.5;
                let half_w = half_h * self.aspect;
                let origin = self.position
                    + self.right() * (ndc.x * half_w)
                    + self.screen_up() * (ndc.y * half_h);
                Ray::new(origin, self.world_direction())
            }
        }
    }

    /// Distance from the eye to `point`.
    #[must_use]
    pub fn distance_to(&self, point: Vec3) -> f32 {
        self.position.distance(point)
    }
}

impl Default for Camera {
    /// 75° perspective at `(10, 10, 10)` looking at the origin.
    fn default() -> Self {
        let mut camera = Self::perspective(75.0, 800.0 / 600.0, 0.01, 2000.0);
        camera.position = Vec3::splat(10.0);
        camera.look_at(Vec3::ZERO);
        camera
    }
}
