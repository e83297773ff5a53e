use crate::processing::spectrum::{SpectralPeak, Spectrum};
use serde::{Deserialize, Serialize};

/// Sizing shared by every processing stage: FFT length and sample spacing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StageConfig {
    pub samples: usize,
    pub spacing: f64,
}

/// Input payload for a processing stage.
#[derive(Debug, Clone)]
pub struct StageInput {
    pub samples: Vec<f64>,
}

/// Output produced by each stage.
#[derive(Debug, Clone)]
pub struct StageOutput {
    pub spectrum: Spectrum,
    pub metadata: StageMetadata,
}

/// Metadata used for chaining stages and reporting.
#[derive(Debug, Clone, Default)]
pub struct StageMetadata {
    pub peak: Option<SpectralPeak>,
    pub notes: Vec<String>,
}

/// Common error type for stage execution.
#[derive(thiserror::Error, Debug)]
pub enum StageError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("internal failure: {0}")]
    Internal(String),
}

pub type StageResult<T> = Result<T, StageError>;

/// Trait describing signal-processing stages with an explicit lifecycle.
pub trait ProcessingStage {
    fn initialize(&mut self, config: &StageConfig) -> StageResult<()>;
    fn execute(&mut self, input: StageInput) -> StageResult<StageOutput>;
    fn cleanup(&mut self);
}
