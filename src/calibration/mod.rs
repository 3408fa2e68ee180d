//! Tools for matching an authoring tool's camera by eye: axis-remap
//! candidates, unit-scale trials and the keyboard console that drives them
//! together with scene switching.

/// Keyboard console over scenes and the transform test.
pub mod console;
mod probe;
mod session;
mod transform;

pub use console::{CalibrationConsole, ConsoleOutcome};
pub use probe::{probe_unit_scales, ScaleTrial, UNIT_SCALES};
pub use session::{CalibrationSession, Comparison, TransformInfo};
pub use transform::{TransformCandidate, TransformCycler};
