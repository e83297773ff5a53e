use num_complex::Complex64;
use rustfft::{num_traits::Zero, Fft, FftPlanner};
use std::sync::Arc;

/// Helper that wraps the `rustfft` planner for reuse.
pub struct FftHelper {
    fft: Arc<dyn Fft<f64>>,
    size: usize,
}

impl FftHelper {
    pub fn new(size: usize) -> Self {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(size);
        Self { fft, size }
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Forward transform of a real signal. Input is zero-padded or truncated
    /// to the planned size.
    pub fn forward(&self, input: &[f64]) -> Vec<Complex64> {
        let mut buffer: Vec<Complex64> = input
            .iter()
            .take(self.size)
            .map(|&value| Complex64::new(value, 0.0))
            .collect();
        buffer.resize(self.size, Complex64::zero());

        self.fft.process(&mut buffer);
        buffer
    }
}

/// Sample frequencies of an `n`-point transform in standard FFT order:
/// non-negative frequencies first, then the negative ones.
pub fn fft_frequencies(n: usize, spacing: f64) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    let scale = 1.0 / (n as f64 * spacing);
    let positive = n.div_ceil(2);
    (0..n)
        .map(|k| {
            if k < positive {
                k as f64 * scale
            } else {
                (k as f64 - n as f64) * scale
            }
        })
        .collect()
}

/// Moves the zero-frequency term to index `n / 2`.
pub fn fft_shift<T: Clone>(values: &[T]) -> Vec<T> {
    let mut shifted = values.to_vec();
    let half = shifted.len() / 2;
    shifted.rotate_right(half);
    shifted
}

pub fn magnitudes(bins: &[Complex64]) -> Vec<f64> {
    bins.iter().map(|c| c.norm()).collect()
}

pub fn phases_degrees(bins: &[Complex64]) -> Vec<f64> {
    bins.iter().map(|c| c.arg().to_degrees()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fft_helper_returns_same_length() {
        let helper = FftHelper::new(4);
        let output = helper.forward(&[1.0, 0.0, -1.0, 0.0]);
        assert_eq!(output.len(), 4);
        assert!((output[1].re - 2.0).abs() < 1e-12);
        assert!(output[0].norm() < 1e-12);
    }

    #[test]
    fn fft_helper_pads_short_input() {
        let helper = FftHelper::new(8);
        let output = helper.forward(&[1.0]);
        assert_eq!(output.len(), 8);
        assert!(output.iter().all(|c| (c.norm() - 1.0).abs() < 1e-12));
    }

    #[test]
    fn frequencies_follow_fft_order_for_even_length() {
        assert_eq!(fft_frequencies(4, 0.25), vec![0.0, 1.0, -2.0, -1.0]);
    }

    #[test]
    fn frequencies_follow_fft_order_for_odd_length() {
        let freqs = fft_frequencies(5, 1.0);
        let expected = [0.0, 0.2, 0.4, -0.4, -0.2];
        for (got, want) in freqs.iter().zip(expected.iter()) {
            assert!((got - want).abs() < 1e-12);
        }
    }

    #[test]
    fn shift_centres_zero_frequency() {
        assert_eq!(fft_shift(&[0, 1, 2, 3]), vec![2, 3, 0, 1]);
        assert_eq!(fft_shift(&[0, 1, 2, 3, 4]), vec![3, 4, 0, 1, 2]);
        let shifted = fft_shift(&fft_frequencies(6, 1.0));
        assert_eq!(shifted[3], 0.0);
        assert!(shifted.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn phase_is_reported_in_degrees() {
        let bins = [Complex64::new(0.0, 1.0), Complex64::new(-1.0, 0.0)];
        let phases = phases_degrees(&bins);
        assert!((phases[0] - 90.0).abs() < 1e-12);
        assert!((phases[1] - 180.0).abs() < 1e-12);
        assert_eq!(magnitudes(&bins), vec![1.0, 1.0]);
    }
}
