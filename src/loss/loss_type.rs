use serde::{Deserialize, Serialize};

use crate::loss::{BceLoss, MseLoss};

/// Selects the metric used when scoring a network.
///
/// - `Mse`                — mean squared error; the default
/// - `BinaryCrossEntropy` — mean binary cross-entropy
///
/// Only reporting is affected; the weight update rule is fixed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossType {
    #[default]
    Mse,
    BinaryCrossEntropy,
}

impl LossType {
    /// Per-sample loss.
    pub fn loss(self, output: f32, target: f32) -> f32 {
        match self {
            LossType::Mse => MseLoss::loss(output, target),
            LossType::BinaryCrossEntropy => BceLoss::loss(output, target),
        }
    }
}
