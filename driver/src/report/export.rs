use anyhow::{bail, Context};
use serde::Serialize;
use spectrumcore::plot::{FigureLayout, Series};
use spectrumcore::processing::SpectralPeak;
use spectrumcore::{Analysis, Scenario};
use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Serializable summary of one analysed scenario. Spectrum series are
/// clipped to the figure's frequency band.
#[derive(Debug, Clone, Serialize)]
pub struct SpectrumReport {
    pub name: String,
    pub signal: String,
    pub scenario: Scenario,
    pub sampling_rate: f64,
    pub nyquist: f64,
    pub resolution: f64,
    pub peak: Option<SpectralPeak>,
    pub figure: FigureLayout,
    pub magnitude: Series,
    pub phase: Series,
    pub notes: Vec<String>,
}

impl SpectrumReport {
    pub fn from_analysis(analysis: &Analysis) -> Self {
        let scenario = &analysis.scenario;
        Self {
            name: scenario.name.clone(),
            signal: scenario.signal.label(),
            scenario: scenario.clone(),
            sampling_rate: scenario.sampling_rate(),
            nyquist: scenario.nyquist(),
            resolution: scenario.resolution(),
            peak: analysis.peak,
            figure: analysis.figure,
            magnitude: analysis
                .magnitude_series()
                .visible(&analysis.figure.magnitude),
            phase: analysis.phase_series().visible(&analysis.figure.phase),
            notes: analysis.notes.clone(),
        }
    }

    pub fn summary_line(&self) -> String {
        match self.peak {
            Some(peak) => format!(
                "{} ({}): peak at {:.4} Hz (|X| = {:.3}), nyquist {:.3} Hz",
                self.name, self.signal, peak.frequency, peak.magnitude, self.nyquist
            ),
            None => format!(
                "{} ({}): no spectral peak, nyquist {:.3} Hz",
                self.name, self.signal, self.nyquist
            ),
        }
    }

    fn file_name(&self) -> String {
        let stem: String = self
            .name
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        let stem = if stem.is_empty() { "scenario".into() } else { stem };
        format!("{stem}.json")
    }
}

/// Writes one JSON file per report into `dir` and appends their summary
/// lines to `dir/runs.log`. Fails before writing anything when two
/// scenario names map to the same file.
pub fn export_reports(dir: &Path, reports: &[SpectrumReport]) -> anyhow::Result<Vec<PathBuf>> {
    let mut seen = HashSet::new();
    for report in reports {
        let file_name = report.file_name();
        if !seen.insert(file_name.clone()) {
            bail!(
                "scenario {:?} would overwrite report {} in {}",
                report.name,
                file_name,
                dir.display()
            );
        }
    }

    fs::create_dir_all(dir)
        .with_context(|| format!("creating export directory {}", dir.display()))?;

    let mut written = Vec::with_capacity(reports.len());
    for report in reports {
        let path = dir.join(report.file_name());
        let json = serde_json::to_string_pretty(report)
            .with_context(|| format!("serializing report {}", report.name))?;
        fs::write(&path, json).with_context(|| format!("writing report {}", path.display()))?;
        written.push(path);
    }

    let log_path = dir.join("runs.log");
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("opening run log {}", log_path.display()))?;
    for report in reports {
        writeln!(file, "{}", report.summary_line())
            .with_context(|| format!("appending to run log {}", log_path.display()))?;
    }

    Ok(written)
}
