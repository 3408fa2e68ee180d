use glam::Vec2;

use super::state::{GestureState, Modifiers, PivotState};
use crate::camera::{
    pick_or_project, PivotResolver, ScreenCenterPivot, Viewport,
};
use crate::error::CameraError;
use crate::input::{InputEvent, MouseButton};
use crate::options::NavigationOptions;
use crate::scene::SceneIntersect;

/// What a drag delta turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragAction {
    Orbit,
    Pan,
}

/// Pointer-driven orbit/pan/zoom state machine for one viewport.
///
/// Primary drag orbits around a pivot resolved lazily on the first delta
/// of the gesture; shift+primary, middle and secondary drag pan; scroll
/// zooms towards the point under the cursor; double-click refocuses the
/// pivot target. The pivot stays cached across pointer releases and is
/// only dropped by operations that move the view (pan, zoom, focus, fit,
/// reset).
///
/// Every call takes the viewport and scene it operates on, so the engine
/// never holds a borrow between events. Errors are per event; the engine
/// keeps accepting input after one.
#[derive(Debug, Clone)]
pub struct NavigationEngine<R = ScreenCenterPivot> {
    resolver: R,
    settings: NavigationOptions,
    gesture: GestureState,
    pivot: PivotState,
    modifiers: Modifiers,
    wired: bool,
}

impl NavigationEngine {
    /// Engine with the screen-center pivot resolver.
    #[must_use]
    pub fn new(settings: NavigationOptions) -> Self {
        Self::with_resolver(settings, ScreenCenterPivot)
    }
}

impl Default for NavigationEngine {
    fn default() -> Self {
        Self::new(NavigationOptions::default())
    }
}

impl<R: PivotResolver> NavigationEngine<R> {
    /// Engine with a custom pivot resolver.
    pub fn with_resolver(settings: NavigationOptions, resolver: R) -> Self {
        Self {
            resolver,
            settings,
            gesture: GestureState::Idle,
            pivot: PivotState::Unresolved,
            modifiers: Modifiers::default(),
            wired: false,
        }
    }

    /// Start accepting input for `viewport`.
    ///
    /// Wiring an already wired engine does nothing.
    ///
    /// # Errors
    ///
    /// [`CameraError::UninitializedTarget`] while the viewport has no
    /// camera or pivot target.
    pub fn wire(&mut self, viewport: &Viewport) -> Result<(), CameraError> {
        if !viewport.is_ready() {
            return Err(CameraError::UninitializedTarget);
        }
        if self.wired {
            log::debug!("navigation already wired");
            return Ok(());
        }
        self.wired = true;
        self.gesture = GestureState::Idle;
        self.pivot = PivotState::Unresolved;
        log::debug!("navigation wired");
        Ok(())
    }

    /// Stop accepting input. Any drag in progress is dropped.
    pub fn unwire(&mut self) {
        self.wired = false;
        self.gesture = GestureState::Idle;
    }

    /// Whether input is being accepted.
    #[must_use]
    pub fn is_wired(&self) -> bool {
        self.wired
    }

    /// Current gesture.
    #[must_use]
    pub fn gesture(&self) -> GestureState {
        self.gesture
    }

    /// Cached rotation center.
    #[must_use]
    pub fn pivot(&self) -> PivotState {
        self.pivot
    }

    /// Modifier state as last reported.
    #[must_use]
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Sensitivities in use.
    #[must_use]
    pub fn settings(&self) -> &NavigationOptions {
        &self.settings
    }

    /// Sensitivities, mutably.
    pub fn settings_mut(&mut self) -> &mut NavigationOptions {
        &mut self.settings
    }

    /// The pivot resolver.
    #[must_use]
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Drop the cached pivot so the next orbit resolves a fresh one.
    ///
    /// Call this after moving the camera from outside the engine.
    pub fn invalidate_pivot(&mut self) {
        if self.pivot != PivotState::Unresolved {
            log::debug!("pivot invalidated");
        }
        self.pivot = PivotState::Unresolved;
    }

    /// Feed one input event.
    ///
    /// Returns whether the camera or pivot target changed. Unwired engines
    /// ignore everything and return `Ok(false)`.
    ///
    /// # Errors
    ///
    /// [`CameraError::UninitializedTarget`] when the event needs the
    /// camera, the pivot target or a non-zero viewport size and one is
    /// missing. Gesture bookkeeping is still updated.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        viewport: &mut Viewport,
        scene: &dyn SceneIntersect,
    ) -> Result<bool, CameraError> {
        if !self.wired {
            return Ok(false);
        }
        match event {
            InputEvent::PointerDown { button, x, y } => {
                self.gesture = GestureState::Dragging {
                    button,
                    last: Vec2::new(x, y),
                };
                Ok(false)
            }
            InputEvent::PointerMove { x, y } => {
                self.pointer_moved(Vec2::new(x, y), viewport, scene)
            }
            InputEvent::PointerUp { .. } => {
                self.gesture = GestureState::Idle;
                Ok(false)
            }
            InputEvent::Scroll { delta, x, y } => {
                self.zoom(delta, x, y, viewport, scene)
            }
            InputEvent::DoubleClick { x, y } => {
                self.focus(x, y, viewport, scene)
            }
            InputEvent::ModifiersChanged { shift, ctrl } => {
                self.modifiers = Modifiers { shift, ctrl };
                Ok(false)
            }
        }
    }

    fn pointer_moved(
        &mut self,
        position: Vec2,
        viewport: &mut Viewport,
        scene: &dyn SceneIntersect,
    ) -> Result<bool, CameraError> {
        let GestureState::Dragging { button, last } = &mut self.gesture
        else {
            return Ok(false);
        };
        let button = *button;
        let delta = position - *last;
        *last = position;
        if delta == Vec2::ZERO {
            return Ok(false);
        }

        match self.drag_action(button) {
            DragAction::Orbit => self.orbit(delta, viewport, scene)?,
            DragAction::Pan => self.pan(delta, viewport)?,
        }
        Ok(true)
    }

    /// Modifiers are read here, at move time, not latched at press.
    fn drag_action(&self, button: MouseButton) -> DragAction {
        match button {
            MouseButton::Left if !self.modifiers.shift => DragAction::Orbit,
            MouseButton::Left | MouseButton::Middle | MouseButton::Right => {
                DragAction::Pan
            }
        }
    }

    fn orbit(
        &mut self,
        delta: Vec2,
        viewport: &mut Viewport,
        scene: &dyn SceneIntersect,
    ) -> Result<(), CameraError> {
        let mut rig = viewport.rig()?;
        if self.pivot == PivotState::Unresolved {
            self.pivot = match self.resolver.resolve_pivot(
                rig.camera(),
                scene,
                rig.target(),
            ) {
                Some(point) => {
                    log::debug!("orbit pivot resolved at {point}");
                    PivotState::Resolved(point)
                }
                None => {
                    log::debug!("no orbit pivot; using spherical orbit");
                    PivotState::Fallback
                }
            };
        }

        let speed = self.settings.rotate_speed;
        match self.pivot {
            PivotState::Resolved(pivot) => {
                rig.orbit_around(pivot, delta, speed);
            }
            PivotState::Unresolved | PivotState::Fallback => {
                rig.orbit_spherical(delta, speed, self.settings.pitch_margin);
            }
        }
        Ok(())
    }

    fn pan(
        &mut self,
        delta: Vec2,
        viewport: &mut Viewport,
    ) -> Result<(), CameraError> {
        let offset = viewport.rig()?.pan(delta, self.settings.pan_speed);
        log::debug!("panned by {offset}");
        self.invalidate_pivot();
        Ok(())
    }

    /// Zoom towards the point under the cursor. A zero delta is ignored.
    fn zoom(
        &mut self,
        delta: f32,
        x: f32,
        y: f32,
        viewport: &mut Viewport,
        scene: &dyn SceneIntersect,
    ) -> Result<bool, CameraError> {
        if delta == 0.0 {
            return Ok(false);
        }
        let ndc = viewport
            .cursor_to_ndc(x, y)
            .ok_or(CameraError::UninitializedTarget)?;
        let mut rig = viewport.rig()?;
        let ray = rig.camera().ray_from_ndc(ndc);
        let Some(center) = pick_or_project(&ray, scene, rig.distance()) else {
            log::debug!("zoom skipped: no hit and camera sits on its target");
            return Ok(false);
        };

        let speed = self.settings.zoom_speed;
        let factor = if delta > 0.0 { 1.0 - speed } else { 1.0 + speed };
        rig.zoom_toward(center, factor, self.settings.target_follow);
        log::debug!("zoom x{factor} towards {center}");
        self.invalidate_pivot();
        Ok(true)
    }

    /// Move the pivot target to the scene point under the cursor.
    fn focus(
        &mut self,
        x: f32,
        y: f32,
        viewport: &mut Viewport,
        scene: &dyn SceneIntersect,
    ) -> Result<bool, CameraError> {
        let ndc = viewport
            .cursor_to_ndc(x, y)
            .ok_or(CameraError::UninitializedTarget)?;
        let mut rig = viewport.rig()?;
        let ray = rig.camera().ray_from_ndc(ndc);
        let Some(hit) = scene.intersect_ray(&ray) else {
            return Ok(false);
        };
        rig.focus_on(hit.point);
        log::debug!("focused on {}", hit.point);
        self.invalidate_pivot();
        Ok(true)
    }

    /// Frame the scene's bounding box along the current view direction.
    ///
    /// Returns `Ok(false)` when the scene has no bounds.
    ///
    /// # Errors
    ///
    /// [`CameraError::UninitializedTarget`] when the viewport is not
    /// ready.
    pub fn fit_to_view(
        &mut self,
        viewport: &mut Viewport,
        scene: &dyn SceneIntersect,
    ) -> Result<bool, CameraError> {
        let mut rig = viewport.rig()?;
        let Some(bounds) = scene.bounding_box() else {
            log::debug!("fit skipped: no model bounds");
            return Ok(false);
        };
        rig.fit_to_box(bounds, self.settings.fit_padding);
        log::debug!(
            "fit to {:?} at distance {:.3}",
            bounds.size(),
            rig.distance()
        );
        self.invalidate_pivot();
        Ok(true)
    }

    /// Put the camera back at the two-point-perspective default view.
    ///
    /// # Errors
    ///
    /// [`CameraError::UninitializedTarget`] when the viewport is not
    /// ready.
    pub fn reset(
        &mut self,
        viewport: &mut Viewport,
    ) -> Result<(), CameraError> {
        viewport.rig()?.reset();
        self.invalidate_pivot();
        Ok(())
    }
}
