use log::{info, warn};

/// Thin wrapper over the `log` facade that tags every record with the
/// emitting component as its target, e.g. `RUST_LOG=spectrum=info`.
pub struct LogManager {
    target: &'static str,
}

impl LogManager {
    pub fn new(target: &'static str) -> Self {
        Self { target }
    }

    pub fn record(&self, message: &str) {
        info!(target: self.target, "{}", message);
    }

    pub fn warn(&self, message: &str) {
        warn!(target: self.target, "{}", message);
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new("spectrumcore")
    }
}
