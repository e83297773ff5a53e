pub mod fft;
pub mod special;
pub mod stats;

pub use fft::{fft_frequencies, fft_shift, FftHelper};
pub use special::{bessel_j0, bessel_j1, bessel_jn};
pub use stats::StatsHelper;
