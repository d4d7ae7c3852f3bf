use serde::{Deserialize, Serialize};

use crate::error::{MlpError, Result};
use crate::loss::LossType;

/// Configuration for a `train_streaming` run.
///
/// # Fields
/// - `epochs`                — full passes over the sample source
/// - `learning_rate`         — step size of every per-sample update; must be positive
/// - `batch_size`            — samples read per I/O chunk; does not average gradients
/// - `loss_report_frequency` — report every N epochs (and after the last); 0 disables
/// - `loss`                  — metric used in reports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    pub epochs: usize,
    pub learning_rate: f32,
    pub batch_size: usize,
    pub loss_report_frequency: usize,
    pub loss: LossType,
}

impl TrainingConfig {
    /// Creates a config that reports roughly ten times over the run.
    pub fn new(epochs: usize, learning_rate: f32, batch_size: usize) -> Self {
        TrainingConfig {
            epochs,
            learning_rate,
            batch_size,
            loss_report_frequency: (epochs / 10).max(1),
            loss: LossType::Mse,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(MlpError::InvalidConfig("batch_size must be at least 1".into()));
        }
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(MlpError::InvalidConfig(format!(
                "learning_rate must be a positive number, got {}",
                self.learning_rate
            )));
        }
        Ok(())
    }

    /// Whether loss and accuracy are reported after the 0-based `epoch`.
    pub fn should_report(&self, epoch: usize) -> bool {
        self.loss_report_frequency > 0
            && (epoch % self.loss_report_frequency == 0 || epoch + 1 == self.epochs)
    }
}

impl Default for TrainingConfig {
    fn default() -> Self {
        TrainingConfig::new(1000, 0.1, 32)
    }
}
