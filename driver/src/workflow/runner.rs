use crate::generator::noise::NoiseConfig;
use crate::workflow::config::WorkflowConfig;
use anyhow::Context;
use log::debug;
use spectrumcore::{analyze_samples, Analysis, Scenario};

#[derive(Clone)]
pub struct Runner {
    config: WorkflowConfig,
}

impl Runner {
    pub fn new(config: WorkflowConfig) -> Self {
        Self { config }
    }

    pub fn noise(&self) -> NoiseConfig {
        NoiseConfig::new(self.config.noise, self.config.seed)
    }

    /// Samples, perturbs and analyses one scenario.
    pub fn execute(&self, index: usize, scenario: &Scenario) -> anyhow::Result<Analysis> {
        let mut samples = scenario.signal.sample(&scenario.time);
        let noise = self.noise().for_scenario(index);
        if !noise.is_silent() {
            debug!(
                "{}: adding noise amplitude {} seed {}",
                scenario.name, noise.amplitude, noise.seed
            );
        }
        noise.apply(&mut samples);

        analyze_samples(scenario, samples)
            .with_context(|| format!("analysing scenario {}", scenario.name))
    }

    pub fn execute_all(&self) -> anyhow::Result<Vec<Analysis>> {
        self.config
            .scenarios
            .iter()
            .enumerate()
            .map(|(index, scenario)| self.execute(index, scenario))
            .collect()
    }
}
