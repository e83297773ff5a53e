pub mod analysis;
pub mod spectrum;

pub use analysis::{analyze, analyze_samples, Analysis};
pub use spectrum::{SpectralPeak, Spectrum, SpectrumStage};
