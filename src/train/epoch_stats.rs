use serde::{Deserialize, Serialize};

/// Progress figures emitted by `train_streaming` after a reporting epoch.
///
/// Both metrics are measured against the samples cached during the first
/// epoch, so successive reports are comparable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    pub loss: f32,
    /// Fraction in [0, 1].
    pub accuracy: f32,
}
