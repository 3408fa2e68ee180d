//! Keyboard-driven calibration console.
//!
//! Maps key presses onto scene switching, camera reset and the axis-remap
//! test. Everything it reports also goes to the log at info level.

use super::session::{CalibrationSession, Comparison, TransformInfo};
use super::transform::TransformCandidate;
use crate::camera::{apply_description, apply_to_viewport, Viewport};
use crate::config::{CameraConfig, ConversionStrategy};
use crate::error::CameraError;
use crate::input::{scene_slot, CalibrationAction, KeyPress};
use crate::options::KeybindingOptions;

/// What a key press did.
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleOutcome {
    /// Focus was in a form control; the key was left alone.
    Ignored,
    /// No camera config is loaded yet.
    NoConfig,
    /// A scene's camera was applied.
    SceneApplied {
        /// Zero-based scene position.
        index: usize,
    },
    /// The selected scene carries no camera.
    SceneWithoutCamera {
        /// Zero-based scene position.
        index: usize,
    },
    /// The requested scene does not exist.
    SceneUnavailable,
    /// A transform candidate was applied.
    TransformApplied {
        /// Position of the candidate in the cycle.
        index: usize,
        /// The candidate.
        candidate: TransformCandidate,
    },
    /// A transform key was pressed before the test was started.
    NoTransformTest,
    /// The camera went back to its default view.
    Reset,
    /// Current transform report.
    Info(Box<TransformInfo>),
    /// Source against live values.
    Compared(Comparison),
    /// Key reference lines.
    Help(Vec<String>),
    /// The loaded description was applied again.
    Reapplied,
}

impl ConsoleOutcome {
    /// Whether the camera or pivot target moved, so cached navigation
    /// state (the orbit pivot) should be dropped.
    #[must_use]
    pub fn moved_camera(&self) -> bool {
        matches!(
            self,
            Self::SceneApplied { .. }
                | Self::TransformApplied { .. }
                | Self::Reset
                | Self::Reapplied
        )
    }
}

/// Calibration console state: the loaded config, the running transform
/// test and the key map.
#[derive(Debug, Clone, Default)]
pub struct CalibrationConsole {
    config: Option<CameraConfig>,
    session: Option<CalibrationSession>,
    bindings: KeybindingOptions,
    strategy: ConversionStrategy,
}

impl CalibrationConsole {
    /// Console with the given bindings and conversion strategy.
    #[must_use]
    pub fn new(
        bindings: KeybindingOptions,
        strategy: ConversionStrategy,
    ) -> Self {
        Self {
            config: None,
            session: None,
            bindings,
            strategy,
        }
    }

    /// Loaded config, if any.
    #[must_use]
    pub fn config(&self) -> Option<&CameraConfig> {
        self.config.as_ref()
    }

    /// Running transform test, if any.
    #[must_use]
    pub fn session(&self) -> Option<&CalibrationSession> {
        self.session.as_ref()
    }

    /// Apply `config`'s camera and keep the config for later key presses.
    ///
    /// Nothing is kept if the apply fails.
    ///
    /// # Errors
    ///
    /// [`CameraError::UninitializedTarget`] when the viewport is not
    /// ready.
    pub fn load(
        &mut self,
        config: CameraConfig,
        viewport: &mut Viewport,
    ) -> Result<(), CameraError> {
        let pose = self.strategy.convert(config.description());
        let _ = apply_to_viewport(&pose, viewport)?;
        if !config.scenes().is_empty() {
            log::info!(
                "{} scenes loaded; press S or 1-9 to switch",
                config.scenes().len()
            );
        }
        log::info!("press H for calibration help");
        self.config = Some(config);
        self.session = None;
        Ok(())
    }

    /// Handle one key press.
    ///
    /// # Errors
    ///
    /// [`CameraError::UninitializedTarget`] when the key needs the camera
    /// and the viewport is not ready, or [`CameraError::Config`] when a
    /// scene's camera is invalid.
    pub fn handle_key(
        &mut self,
        key: &KeyPress,
        viewport: &mut Viewport,
    ) -> Result<ConsoleOutcome, CameraError> {
        if key.in_form_control {
            return Ok(ConsoleOutcome::Ignored);
        }
        if self.config.is_none() {
            log::warn!("no camera config loaded; load a config first");
            return Ok(ConsoleOutcome::NoConfig);
        }

        if let Some(action) = self.bindings.lookup(&key.code) {
            return self.run(action, key.shift, viewport);
        }
        if let Some(index) = scene_slot(&key.code) {
            return self.switch_scene(Some(index), viewport);
        }
        self.reapply(viewport)
    }

    fn run(
        &mut self,
        action: CalibrationAction,
        shift: bool,
        viewport: &mut Viewport,
    ) -> Result<ConsoleOutcome, CameraError> {
        match action {
            CalibrationAction::StartTransformTest => {
                let Some(config) = &self.config else {
                    return Ok(ConsoleOutcome::NoConfig);
                };
                let session = CalibrationSession::start(*config.description());
                let outcome = transform_applied(&session, viewport)?;
                self.session = Some(session);
                Ok(outcome)
            }
            CalibrationAction::ResetCamera => {
                viewport.rig()?.reset();
                log::info!("camera reset to the two-point-perspective default");
                Ok(ConsoleOutcome::Reset)
            }
            CalibrationAction::NextScene => self.switch_scene(None, viewport),
            CalibrationAction::CycleTransform => {
                let Some(session) = &mut self.session else {
                    log::info!("press 0 to start the transform test first");
                    return Ok(ConsoleOutcome::NoTransformTest);
                };
                let from = session.cycler().index();
                let cycler = session.cycler_mut();
                let _ = if shift { cycler.retreat() } else { cycler.advance() };
                log::debug!("transform {from} -> {}", session.cycler().index());
                transform_applied(session, viewport)
            }
            CalibrationAction::ShowTransformInfo => match &self.session {
                Some(session) => {
                    let info = session.info(viewport)?;
                    Ok(ConsoleOutcome::Info(Box::new(info)))
                }
                None => {
                    log::info!("no transform test running");
                    Ok(ConsoleOutcome::NoTransformTest)
                }
            },
            CalibrationAction::CompareValues => match &self.session {
                Some(session) => {
                    Ok(ConsoleOutcome::Compared(session.compare(viewport)?))
                }
                None => {
                    log::info!("no transform test running");
                    Ok(ConsoleOutcome::NoTransformTest)
                }
            },
            CalibrationAction::ShowHelp => {
                let lines = self.help_lines();
                for line in &lines {
                    log::info!("{line}");
                }
                Ok(ConsoleOutcome::Help(lines))
            }
        }
    }

    /// Select scene `index`, or the next one when `None`, and apply its
    /// camera.
    fn switch_scene(
        &mut self,
        index: Option<usize>,
        viewport: &mut Viewport,
    ) -> Result<ConsoleOutcome, CameraError> {
        let Some(config) = &mut self.config else {
            return Ok(ConsoleOutcome::NoConfig);
        };
        let scenes = config.scenes_mut();
        let selected = match index {
            Some(index) => scenes.select(index),
            None => scenes.advance(),
        };
        let Some(scene) = selected else {
            return Ok(ConsoleOutcome::SceneUnavailable);
        };
        let label = scene.label();
        let camera_info = scene.camera_info.clone();
        let index = scenes.current_index().unwrap_or_default();

        log::info!("switching to scene {}: {label}", index + 1);
        let Some(camera_info) = camera_info else {
            log::info!("scene {label} has no camera");
            return Ok(ConsoleOutcome::SceneWithoutCamera { index });
        };
        let _ = apply_description(&camera_info, self.strategy, viewport)?;
        Ok(ConsoleOutcome::SceneApplied { index })
    }

    fn reapply(
        &self,
        viewport: &mut Viewport,
    ) -> Result<ConsoleOutcome, CameraError> {
        let Some(config) = &self.config else {
            return Ok(ConsoleOutcome::NoConfig);
        };
        let pose = self.strategy.convert(config.description());
        log::info!(
            "re-applying loaded camera config ({})",
            self.strategy.label()
        );
        let _ = apply_to_viewport(&pose, viewport)?;
        Ok(ConsoleOutcome::Reapplied)
    }

    fn help_lines(&self) -> Vec<String> {
        let key = |action| self.bindings.key_for(action).unwrap_or("(unbound)");
        let mut lines = vec![
            String::from("calibration keys:"),
            format!(
                "  {}: start the transform test",
                key(CalibrationAction::StartTransformTest)
            ),
            format!(
                "  {} / Shift+{}: next / previous transform",
                key(CalibrationAction::CycleTransform),
                key(CalibrationAction::CycleTransform)
            ),
            format!(
                "  {}: current transform info",
                key(CalibrationAction::ShowTransformInfo)
            ),
            format!(
                "  {}: compare source and live values",
                key(CalibrationAction::CompareValues)
            ),
            format!("  {}: reset camera", key(CalibrationAction::ResetCamera)),
            format!("  {}: next scene", key(CalibrationAction::NextScene)),
            String::from("  Digit1-Digit9: jump to scene"),
            format!("  {}: this help", key(CalibrationAction::ShowHelp)),
            format!(
                "transform test: {}",
                if self.session.is_some() { "running" } else { "not started" }
            ),
        ];
        if let Some(config) = &self.config {
            let scenes = config.scenes();
            lines.push(format!("scenes: {}", scenes.len()));
            lines.extend(
                scenes
                    .entries()
                    .iter()
                    .enumerate()
                    .map(|(i, scene)| {
                        format!("  {}. {}", i + 1, scene.label())
                    }),
            );
        }
        lines
    }
}

fn transform_applied(
    session: &CalibrationSession,
    viewport: &mut Viewport,
) -> Result<ConsoleOutcome, CameraError> {
    let _ = session.apply(viewport)?;
    Ok(ConsoleOutcome::TransformApplied {
        index: session.cycler().index(),
        candidate: session.cycler().current(),
    })
}
