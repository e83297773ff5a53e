use rand::{rngs::StdRng, Rng, SeedableRng};

/// Seeded uniform noise in `[-amplitude, amplitude)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseConfig {
    pub amplitude: f64,
    pub seed: u64,
}

impl NoiseConfig {
    pub fn new(amplitude: f64, seed: u64) -> Self {
        Self { amplitude, seed }
    }

    pub fn is_silent(&self) -> bool {
        self.amplitude <= 0.0
    }

    /// Noise for the scenario at `index`; each index draws its own stream.
    pub fn for_scenario(&self, index: usize) -> Self {
        Self {
            amplitude: self.amplitude,
            seed: self.seed.wrapping_add(index as u64),
        }
    }

    pub fn apply(&self, samples: &mut [f64]) {
        if self.is_silent() {
            return;
        }
        let mut rng = StdRng::seed_from_u64(self.seed);
        for sample in samples.iter_mut() {
            *sample += rng.gen_range(-self.amplitude..self.amplitude);
        }
    }
}
