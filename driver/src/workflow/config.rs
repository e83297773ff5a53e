use anyhow::{ensure, Context};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use spectrumcore::Scenario;
use std::fs;
use std::path::Path;

/// Which built-in demos to run when no workflow file is given.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DemoSelection {
    Sine,
    Bessel,
    All,
}

impl DemoSelection {
    pub fn scenarios(self) -> Vec<Scenario> {
        match self {
            DemoSelection::Sine => vec![Scenario::sine_demo()],
            DemoSelection::Bessel => vec![Scenario::bessel_demo()],
            DemoSelection::All => Scenario::builtin(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorkflowConfig {
    /// Peak amplitude of uniform noise added to every signal.
    #[serde(default)]
    pub noise: f64,
    #[serde(default)]
    pub seed: u64,
    pub scenarios: Vec<Scenario>,
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workflow config {}", path_ref.display()))?;
        let config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workflow config {}", path_ref.display()))?;
        config
            .validate()
            .with_context(|| format!("validating workflow config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(
        demo: DemoSelection,
        samples: Option<usize>,
        noise: f64,
        seed: u64,
    ) -> anyhow::Result<Self> {
        let scenarios = demo
            .scenarios()
            .into_iter()
            .map(|scenario| match samples {
                Some(samples) => scenario.with_samples(samples),
                None => scenario,
            })
            .collect();
        let config = Self {
            noise,
            seed,
            scenarios,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.noise.is_finite() && self.noise >= 0.0,
            "noise amplitude must be a non-negative number, got {}",
            self.noise
        );
        ensure!(!self.scenarios.is_empty(), "workflow lists no scenarios");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spectrumcore::SignalKind;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn config_from_args_selects_demos() {
        let cfg = WorkflowConfig::from_args(DemoSelection::All, None, 0.0, 0).unwrap();
        assert_eq!(cfg.scenarios.len(), 2);

        let cfg = WorkflowConfig::from_args(DemoSelection::Bessel, Some(1024), 0.1, 9).unwrap();
        assert_eq!(cfg.scenarios.len(), 1);
        assert_eq!(cfg.scenarios[0].time.samples, 1024);
        assert_eq!(cfg.seed, 9);
    }

    #[test]
    fn config_rejects_negative_noise() {
        assert!(WorkflowConfig::from_args(DemoSelection::Sine, None, -0.5, 0).is_err());
    }

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(
            b"noise: 0.05\nseed: 7\nscenarios:\n  - name: square\n    time: { start: 0.0, end: 1.0, samples: 512 }\n    signal: { kind: square, frequency: 5.0 }\n    display_frequency: 5.0\n",
        )
        .unwrap();
        let path = temp.into_temp_path();
        let cfg = WorkflowConfig::load(&path).unwrap();
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.scenarios[0].signal, SignalKind::Square { frequency: 5.0 });
        assert_eq!(cfg.scenarios[0].time.samples, 512);
    }

    #[test]
    fn config_load_rejects_empty_workflow() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"scenarios: []\n").unwrap();
        let path = temp.into_temp_path();
        assert!(WorkflowConfig::load(&path).is_err());
    }
}
