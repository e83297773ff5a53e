use crate::prelude::{StageError, StageResult};
use crate::signal::waveform::{SignalKind, TimeAxis, MAX_BESSEL_ORDER};
use crate::telemetry::log::LogManager;
use serde::{Deserialize, Serialize};

/// One signal to analyse: its time axis, waveform and spectrum display width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub time: TimeAxis,
    pub signal: SignalKind,
    /// Spectrum panels span `[-3f, 3f]` around zero frequency.
    pub display_frequency: f64,
}

impl Scenario {
    /// 30 Hz sine over half a second.
    pub fn sine_demo() -> Self {
        Self {
            name: "sine".into(),
            time: TimeAxis::new(0.0, 0.5, 20_000),
            signal: SignalKind::Sine { frequency: 30.0 },
            display_frequency: 30.0,
        }
    }

    /// Third-order Bessel function of the first kind over fifty seconds.
    pub fn bessel_demo() -> Self {
        Self {
            name: "bessel".into(),
            time: TimeAxis::new(0.0, 50.0, 20_000),
            signal: SignalKind::Bessel { order: 3 },
            display_frequency: 1.0,
        }
    }

    pub fn builtin() -> Vec<Self> {
        vec![Self::sine_demo(), Self::bessel_demo()]
    }

    pub fn with_samples(mut self, samples: usize) -> Self {
        self.time.samples = samples;
        self
    }

    pub fn sampling_rate(&self) -> f64 {
        let span = self.time.span();
        if span > 0.0 {
            self.time.samples as f64 / span
        } else {
            0.0
        }
    }

    pub fn nyquist(&self) -> f64 {
        self.sampling_rate() / 2.0
    }

    /// Frequency step between neighbouring spectrum bins.
    pub fn resolution(&self) -> f64 {
        let span = self.time.span();
        if span > 0.0 {
            1.0 / span
        } else {
            0.0
        }
    }

    pub fn validate(&self) -> StageResult<()> {
        let axis = &self.time;
        if !axis.start.is_finite() || !axis.end.is_finite() {
            return Err(StageError::InvalidInput(format!(
                "{}: time bounds must be finite",
                self.name
            )));
        }
        if axis.end <= axis.start {
            return Err(StageError::InvalidInput(format!(
                "{}: time range [{}, {}] is empty",
                self.name, axis.start, axis.end
            )));
        }
        if axis.samples < 2 {
            return Err(StageError::InvalidInput(format!(
                "{}: need at least 2 samples, got {}",
                self.name, axis.samples
            )));
        }
        if !self.display_frequency.is_finite() || self.display_frequency <= 0.0 {
            return Err(StageError::InvalidInput(format!(
                "{}: display frequency must be positive",
                self.name
            )));
        }
        if let SignalKind::Bessel { order } = self.signal {
            if order.unsigned_abs() > MAX_BESSEL_ORDER {
                return Err(StageError::InvalidInput(format!(
                    "{}: Bessel order {} is outside [-{}, {}]",
                    self.name, order, MAX_BESSEL_ORDER, MAX_BESSEL_ORDER
                )));
            }
        }
        if let Some(frequency) = self.signal.max_frequency() {
            if !frequency.is_finite() {
                return Err(StageError::InvalidInput(format!(
                    "{}: signal frequency must be finite",
                    self.name
                )));
            }
            let nyquist = self.nyquist();
            if frequency.abs() >= nyquist {
                LogManager::new("scenario").warn(&format!(
                    "{}: {} Hz is at or above the Nyquist frequency {:.3} Hz and will alias",
                    self.name, frequency, nyquist
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_demos_are_valid() {
        let demos = Scenario::builtin();
        assert_eq!(demos.len(), 2);
        assert_eq!(demos[0].name, "sine");
        assert_eq!(demos[1].signal, SignalKind::Bessel { order: 3 });
        for demo in &demos {
            demo.validate().unwrap();
        }
    }

    #[test]
    fn sampling_figures_for_sine_demo() {
        let sine = Scenario::sine_demo();
        assert_eq!(sine.sampling_rate(), 40_000.0);
        assert_eq!(sine.nyquist(), 20_000.0);
        assert_eq!(sine.resolution(), 2.0);
    }

    #[test]
    fn rejects_malformed_scenarios() {
        let too_few = Scenario::sine_demo().with_samples(1);
        assert!(matches!(too_few.validate(), Err(StageError::InvalidInput(_))));

        let mut reversed = Scenario::sine_demo();
        reversed.time = TimeAxis::new(1.0, 0.0, 16);
        assert!(reversed.validate().is_err());

        let mut no_width = Scenario::bessel_demo();
        no_width.display_frequency = 0.0;
        assert!(no_width.validate().is_err());

        let mut infinite = Scenario::sine_demo();
        infinite.signal = SignalKind::Sine {
            frequency: f64::INFINITY,
        };
        assert!(infinite.validate().is_err());
    }

    #[test]
    fn rejects_out_of_range_bessel_orders() {
        let mut extreme = Scenario::bessel_demo();
        extreme.signal = SignalKind::Bessel { order: i32::MIN };
        assert!(matches!(extreme.validate(), Err(StageError::InvalidInput(_))));

        extreme.signal = SignalKind::Bessel { order: 1001 };
        assert!(extreme.validate().is_err());

        extreme.signal = SignalKind::Bessel { order: -1000 };
        assert!(extreme.validate().is_ok());
    }

    #[test]
    fn undersampled_signal_is_still_valid() {
        let mut aliased = Scenario::sine_demo().with_samples(16);
        aliased.signal = SignalKind::Sine { frequency: 100.0 };
        assert!(aliased.validate().is_ok());
    }
}
