//! Core signal synthesis and FFT spectrum analysis for the spectral demonstrator.
//!
//! A scenario describes a sampled time axis and a synthetic waveform; the
//! processing stages turn it into a zero-centred spectrum and the panel limits
//! used to draw time, magnitude and phase plots.

pub mod math;
pub mod plot;
pub mod prelude;
pub mod processing;
pub mod signal;
pub mod telemetry;

pub use prelude::{ProcessingStage, StageError, StageInput, StageOutput, StageResult};
pub use processing::analysis::{analyze, analyze_samples, Analysis};
pub use signal::{Scenario, SignalKind, TimeAxis};
