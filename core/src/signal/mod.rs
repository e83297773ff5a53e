pub mod scenario;
pub mod waveform;

pub use scenario::Scenario;
pub use waveform::{SignalKind, TimeAxis, MAX_BESSEL_ORDER};
