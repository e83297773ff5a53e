use crate::plot::layout::{FigureLayout, Series};
use crate::prelude::{ProcessingStage, StageConfig, StageError, StageInput, StageResult};
use crate::processing::spectrum::{SpectralPeak, Spectrum, SpectrumStage};
use crate::signal::Scenario;

/// Everything needed to draw or report one scenario.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub scenario: Scenario,
    pub time: Vec<f64>,
    pub signal: Vec<f64>,
    pub spectrum: Spectrum,
    pub peak: Option<SpectralPeak>,
    pub figure: FigureLayout,
    pub notes: Vec<String>,
}

impl Analysis {
    pub fn time_series(&self) -> Series {
        Series::new(self.time.clone(), self.signal.clone())
    }

    pub fn magnitude_series(&self) -> Series {
        Series::new(
            self.spectrum.frequencies.clone(),
            self.spectrum.magnitudes.clone(),
        )
    }

    pub fn phase_series(&self) -> Series {
        Series::new(
            self.spectrum.frequencies.clone(),
            self.spectrum.phases_deg.clone(),
        )
    }
}

/// Samples the scenario's waveform and analyses it.
pub fn analyze(scenario: &Scenario) -> StageResult<Analysis> {
    let samples = scenario.signal.sample(&scenario.time);
    analyze_samples(scenario, samples)
}

/// Analyses samples taken on the scenario's time axis, e.g. after noise has
/// been added.
pub fn analyze_samples(scenario: &Scenario, samples: Vec<f64>) -> StageResult<Analysis> {
    scenario.validate()?;
    if samples.len() != scenario.time.samples {
        return Err(StageError::InvalidInput(format!(
            "{}: expected {} samples, got {}",
            scenario.name,
            scenario.time.samples,
            samples.len()
        )));
    }

    let config = StageConfig {
        samples: scenario.time.samples,
        spacing: scenario.time.spacing(),
    };
    let mut stage = SpectrumStage::new();
    stage.initialize(&config)?;
    let output = stage.execute(StageInput {
        samples: samples.clone(),
    });
    stage.cleanup();
    let output = output?;

    let figure = FigureLayout::new(scenario, &samples, &output.spectrum);
    Ok(Analysis {
        scenario: scenario.clone(),
        time: scenario.time.values(),
        signal: samples,
        spectrum: output.spectrum,
        peak: output.metadata.peak,
        figure,
        notes: output.metadata.notes,
    })
}
