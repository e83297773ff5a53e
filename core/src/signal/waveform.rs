use crate::math::special::bessel_jn;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Evenly spaced sample instants covering `[start, end]` inclusively.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeAxis {
    pub start: f64,
    pub end: f64,
    pub samples: usize,
}

impl TimeAxis {
    pub fn new(start: f64, end: f64, samples: usize) -> Self {
        Self {
            start,
            end,
            samples,
        }
    }

    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    /// Distance between neighbouring instants on the axis.
    pub fn step(&self) -> f64 {
        if self.samples < 2 {
            0.0
        } else {
            self.span() / (self.samples - 1) as f64
        }
    }

    /// Sample spacing handed to the frequency axis: total span over sample
    /// count.
    pub fn spacing(&self) -> f64 {
        if self.samples == 0 {
            0.0
        } else {
            self.span() / self.samples as f64
        }
    }

    pub fn values(&self) -> Vec<f64> {
        match self.samples {
            0 => Vec::new(),
            1 => vec![self.start],
            n => {
                let step = self.step();
                let mut values: Vec<f64> =
                    (0..n).map(|i| self.start + i as f64 * step).collect();
                values[n - 1] = self.end;
                values
            }
        }
    }
}

/// Largest Bessel order accepted by scenario validation.
pub const MAX_BESSEL_ORDER: u32 = 1000;

/// Synthetic waveforms available to a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SignalKind {
    Sine { frequency: f64 },
    Bessel { order: i32 },
    Square { frequency: f64 },
}

impl SignalKind {
    pub fn evaluate(&self, t: f64) -> f64 {
        match *self {
            SignalKind::Sine { frequency } => (2.0 * PI * frequency * t).sin(),
            SignalKind::Bessel { order } => bessel_jn(order, t),
            SignalKind::Square { frequency } => {
                if (2.0 * PI * frequency * t).sin() < 0.0 {
                    -1.0
                } else {
                    1.0
                }
            }
        }
    }

    pub fn sample(&self, axis: &TimeAxis) -> Vec<f64> {
        axis.values().into_iter().map(|t| self.evaluate(t)).collect()
    }

    /// Fundamental frequency for periodic kinds.
    pub fn max_frequency(&self) -> Option<f64> {
        match *self {
            SignalKind::Sine { frequency } | SignalKind::Square { frequency } => Some(frequency),
            SignalKind::Bessel { .. } => None,
        }
    }

    pub fn label(&self) -> String {
        match *self {
            SignalKind::Sine { frequency } => format!("sine {frequency} Hz"),
            SignalKind::Bessel { order } => format!("Bessel J{order}"),
            SignalKind::Square { frequency } => format!("square {frequency} Hz"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_is_inclusive_linspace() {
        let axis = TimeAxis::new(0.0, 1.0, 5);
        assert_eq!(axis.values(), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(axis.step(), 0.25);
        assert_eq!(axis.spacing(), 0.2);
    }

    #[test]
    fn degenerate_axes() {
        assert!(TimeAxis::new(0.0, 1.0, 0).values().is_empty());
        assert_eq!(TimeAxis::new(2.0, 3.0, 1).values(), vec![2.0]);
    }

    #[test]
    fn sine_samples_quarter_period() {
        let axis = TimeAxis::new(0.0, 0.25, 2);
        let samples = SignalKind::Sine { frequency: 1.0 }.sample(&axis);
        assert!(samples[0].abs() < 1e-12);
        assert!((samples[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn square_wave_takes_unit_levels() {
        let square = SignalKind::Square { frequency: 1.0 };
        assert_eq!(square.evaluate(0.0), 1.0);
        assert_eq!(square.evaluate(0.25), 1.0);
        assert_eq!(square.evaluate(0.75), -1.0);
        assert_eq!(square.max_frequency(), Some(1.0));
    }

    #[test]
    fn bessel_kind_delegates_to_special_functions() {
        let bessel = SignalKind::Bessel { order: 3 };
        assert!((bessel.evaluate(1.0) - 0.019_563_353_982_668_4).abs() < 1e-7);
        assert_eq!(bessel.max_frequency(), None);
    }

    #[test]
    fn signal_kind_uses_tagged_representation() {
        let json = serde_json::to_string(&SignalKind::Bessel { order: 3 }).unwrap();
        assert_eq!(json, r#"{"kind":"bessel","order":3}"#);
        let parsed: SignalKind =
            serde_json::from_str(r#"{"kind":"sine","frequency":30.0}"#).unwrap();
        assert_eq!(parsed, SignalKind::Sine { frequency: 30.0 });
    }
}
