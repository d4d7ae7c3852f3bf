pub mod bce;
pub mod evaluator;
pub mod loss_type;
pub mod mse;

pub use bce::BceLoss;
pub use evaluator::{compute_accuracy, compute_loss, compute_loss_with, evaluate, Evaluation};
pub use loss_type::LossType;
pub use mse::MseLoss;
