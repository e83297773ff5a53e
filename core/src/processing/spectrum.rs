use crate::math::fft::{fft_frequencies, fft_shift, magnitudes, phases_degrees, FftHelper};
use crate::math::stats::StatsHelper;
use crate::prelude::{
    ProcessingStage, StageConfig, StageError, StageInput, StageMetadata, StageOutput, StageResult,
};
use crate::telemetry::log::LogManager;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Zero-centred spectrum. All vectors share one index.
#[derive(Debug, Clone, Default)]
pub struct Spectrum {
    pub frequencies: Vec<f64>,
    pub bins: Vec<Complex64>,
    pub magnitudes: Vec<f64>,
    pub phases_deg: Vec<f64>,
}

impl Spectrum {
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Index of the zero-frequency bin.
    pub fn zero_index(&self) -> usize {
        self.len() / 2
    }

    /// Strongest bin at non-negative frequency. The magnitude spectrum of a
    /// real signal is symmetric, so this is the dominant component.
    pub fn peak(&self) -> Option<SpectralPeak> {
        let offset = self.zero_index();
        let index = offset + StatsHelper::argmax(self.magnitudes.get(offset..)?)?;
        Some(SpectralPeak {
            frequency: self.frequencies[index],
            magnitude: self.magnitudes[index],
            index,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectralPeak {
    pub frequency: f64,
    pub magnitude: f64,
    pub index: usize,
}

/// Forward FFT, zero-frequency shift, magnitude and phase in degrees.
pub struct SpectrumStage {
    config: Option<StageConfig>,
    fft: Option<FftHelper>,
    logger: LogManager,
}

impl SpectrumStage {
    pub fn new() -> Self {
        Self {
            config: None,
            fft: None,
            logger: LogManager::new("spectrum"),
        }
    }
}

impl Default for SpectrumStage {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessingStage for SpectrumStage {
    fn initialize(&mut self, config: &StageConfig) -> StageResult<()> {
        if config.samples == 0 {
            return Err(StageError::InvalidInput("FFT length must be non-zero".into()));
        }
        if !(config.spacing.is_finite() && config.spacing > 0.0) {
            return Err(StageError::InvalidInput(format!(
                "sample spacing must be positive, got {}",
                config.spacing
            )));
        }
        self.config = Some(*config);
        self.fft = Some(FftHelper::new(config.samples));
        Ok(())
    }

    fn execute(&mut self, input: StageInput) -> StageResult<StageOutput> {
        let config = self
            .config
            .as_ref()
            .ok_or_else(|| StageError::Internal("stage not initialized".into()))?;
        let fft = self
            .fft
            .as_ref()
            .ok_or_else(|| StageError::Internal("FFT not configured".into()))?;

        if input.samples.is_empty() {
            return Err(StageError::InvalidInput("no samples provided".into()));
        }
        if input.samples.len() != fft.len() {
            return Err(StageError::InvalidInput(format!(
                "expected {} samples, got {}",
                fft.len(),
                input.samples.len()
            )));
        }

        let bins = fft_shift(&fft.forward(&input.samples));
        let frequencies = fft_shift(&fft_frequencies(config.samples, config.spacing));
        let spectrum = Spectrum {
            magnitudes: magnitudes(&bins),
            phases_deg: phases_degrees(&bins),
            frequencies,
            bins,
        };

        let peak = spectrum.peak();
        let mut notes = Vec::new();
        if let Some(peak) = peak {
            let note = format!(
                "peak {:.4} Hz magnitude {:.4}",
                peak.frequency, peak.magnitude
            );
            self.logger.record(&note);
            notes.push(note);
        }

        Ok(StageOutput {
            spectrum,
            metadata: StageMetadata { peak, notes },
        })
    }

    fn cleanup(&mut self) {
        self.config = None;
        self.fft = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::{SignalKind, TimeAxis};

    fn config(samples: usize, spacing: f64) -> StageConfig {
        StageConfig { samples, spacing }
    }

    #[test]
    fn spectrum_stage_requires_initialization() {
        let mut stage = SpectrumStage::new();
        let err = stage
            .execute(StageInput {
                samples: vec![1.0, 2.0],
            })
            .unwrap_err();
        assert!(matches!(err, StageError::Internal(_)));
    }

    #[test]
    fn spectrum_stage_rejects_bad_configuration() {
        let mut stage = SpectrumStage::new();
        assert!(stage.initialize(&config(0, 1.0)).is_err());
        assert!(stage.initialize(&config(8, 0.0)).is_err());
        assert!(stage.initialize(&config(8, f64::NAN)).is_err());
    }

    #[test]
    fn spectrum_stage_rejects_mismatched_length() {
        let mut stage = SpectrumStage::new();
        stage.initialize(&config(8, 0.125)).unwrap();
        assert!(stage.execute(StageInput { samples: vec![] }).is_err());
        assert!(stage
            .execute(StageInput {
                samples: vec![0.0; 7]
            })
            .is_err());
        stage.cleanup();
    }

    #[test]
    fn impulse_has_flat_magnitude_and_centred_axis() {
        let mut stage = SpectrumStage::new();
        stage.initialize(&config(8, 0.125)).unwrap();
        let mut samples = vec![0.0; 8];
        samples[0] = 1.0;

        let output = stage.execute(StageInput { samples }).unwrap();
        let spectrum = &output.spectrum;
        assert_eq!(spectrum.len(), 8);
        assert_eq!(spectrum.frequencies[spectrum.zero_index()], 0.0);
        assert_eq!(spectrum.frequencies[0], -4.0);
        assert!(spectrum.magnitudes.iter().all(|m| (m - 1.0).abs() < 1e-12));
        assert!(spectrum.phases_deg.iter().all(|p| p.abs() < 1e-9));
        stage.cleanup();
    }

    #[test]
    fn sine_peak_sits_at_signal_frequency() {
        let axis = TimeAxis::new(0.0, 1.0, 64);
        let samples = SignalKind::Sine { frequency: 4.0 }.sample(&axis);
        let mut stage = SpectrumStage::new();
        stage.initialize(&config(64, axis.spacing())).unwrap();

        let output = stage.execute(StageInput { samples }).unwrap();
        let peak = output.metadata.peak.unwrap();
        assert_eq!(peak.frequency, 4.0);
        assert!(output.metadata.notes[0].starts_with("peak 4.0000 Hz"));

        let spectrum = &output.spectrum;
        let mirror = 2 * spectrum.zero_index() - peak.index;
        assert!((spectrum.magnitudes[mirror] - peak.magnitude).abs() < 1e-9);
        stage.cleanup();
    }

    #[test]
    fn sine_phase_is_aligned_with_frequency_axis() {
        let axis = TimeAxis::new(0.0, 0.5, 4000);
        let samples = SignalKind::Sine { frequency: 30.0 }.sample(&axis);
        let mut stage = SpectrumStage::new();
        stage.initialize(&config(4000, axis.spacing())).unwrap();

        let output = stage.execute(StageInput { samples }).unwrap();
        let spectrum = &output.spectrum;
        let peak = output.metadata.peak.unwrap();
        let mirror = 2 * spectrum.zero_index() - peak.index;
        assert!((spectrum.frequencies[peak.index] - 30.0).abs() < 1e-9);
        assert!((spectrum.frequencies[mirror] + 30.0).abs() < 1e-9);

        // sin(wt) carries -90 degrees at +f and +90 degrees at -f.
        assert!((spectrum.phases_deg[peak.index] + 90.0).abs() < 2.0);
        assert!((spectrum.phases_deg[mirror] - 90.0).abs() < 2.0);
        stage.cleanup();
    }
}
