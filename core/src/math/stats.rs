pub struct StatsHelper;

impl StatsHelper {
    pub fn min(samples: &[f64]) -> Option<f64> {
        samples.iter().copied().reduce(f64::min)
    }

    pub fn max(samples: &[f64]) -> Option<f64> {
        samples.iter().copied().reduce(f64::max)
    }

    /// Index of the first largest value. NaNs never win.
    pub fn argmax(samples: &[f64]) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (idx, &value) in samples.iter().enumerate() {
            match best {
                Some((_, current)) if value <= current || value.is_nan() => {}
                _ if value.is_nan() => {}
                _ => best = Some((idx, value)),
            }
        }
        best.map(|(idx, _)| idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extrema_of_empty_input_are_none() {
        assert_eq!(StatsHelper::min(&[]), None);
        assert_eq!(StatsHelper::max(&[]), None);
        assert_eq!(StatsHelper::argmax(&[]), None);
    }

    #[test]
    fn argmax_prefers_first_peak_and_skips_nan() {
        assert_eq!(StatsHelper::argmax(&[1.0, 3.0, 3.0, 2.0]), Some(1));
        assert_eq!(StatsHelper::argmax(&[f64::NAN, -1.0, -2.0]), Some(1));
        assert_eq!(StatsHelper::min(&[2.0, -5.0, 1.0]), Some(-5.0));
        assert_eq!(StatsHelper::max(&[2.0, -5.0, 1.0]), Some(2.0));
    }
}
