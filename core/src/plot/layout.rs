use crate::math::stats::StatsHelper;
use crate::processing::spectrum::Spectrum;
use crate::signal::Scenario;
use serde::{Deserialize, Serialize};

/// Axis limits for one panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelLimits {
    pub x: (f64, f64),
    pub y: (f64, f64),
}

impl PanelLimits {
    pub fn contains_x(&self, x: f64) -> bool {
        x >= self.x.0 && x <= self.x.1
    }

    fn widened(mut self) -> Self {
        if !(self.y.0 < self.y.1) {
            self.y = (self.y.0 - 1.0, self.y.1 + 1.0);
        }
        self
    }
}

/// Limits for the time, magnitude and phase panels of one figure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FigureLayout {
    pub time: PanelLimits,
    pub magnitude: PanelLimits,
    pub phase: PanelLimits,
}

impl FigureLayout {
    pub fn new(scenario: &Scenario, signal: &[f64], spectrum: &Spectrum) -> Self {
        let band = 3.0 * scenario.display_frequency;
        let (signal_min, signal_max) = extrema(signal);
        let (mag_min, mag_max) = extrema(&spectrum.magnitudes);
        let (phase_min, phase_max) = extrema(&spectrum.phases_deg);

        Self {
            time: PanelLimits {
                x: (scenario.time.start, scenario.time.end),
                y: (signal_min - signal_max / 5.0, signal_max + signal_max / 5.0),
            }
            .widened(),
            magnitude: PanelLimits {
                x: (-band, band),
                y: (mag_min - mag_max / 5.0, mag_max + mag_max / 5.0),
            }
            .widened(),
            phase: PanelLimits {
                x: (-band, band),
                y: (phase_min + phase_min / 5.0, phase_max + phase_max / 5.0),
            }
            .widened(),
        }
    }
}

fn extrema(values: &[f64]) -> (f64, f64) {
    (
        StatsHelper::min(values).unwrap_or(0.0),
        StatsHelper::max(values).unwrap_or(0.0),
    )
}

/// Paired x/y samples drawn as one line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Series {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Self {
        Self { x, y }
    }

    pub fn len(&self) -> usize {
        self.x.len().min(self.y.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Points whose x falls inside the panel's x range.
    pub fn visible(&self, limits: &PanelLimits) -> Series {
        let (x, y) = self
            .x
            .iter()
            .zip(self.y.iter())
            .filter(|(x, _)| limits.contains_x(**x))
            .map(|(&x, &y)| (x, y))
            .unzip();
        Series { x, y }
    }
}
