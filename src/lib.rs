pub mod activation;
pub mod data;
pub mod error;
pub mod init;
pub mod loss;
pub mod network;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use data::{CsvSource, Sample, SampleSource};
pub use error::{MlpError, Result};
pub use init::WeightInitializer;
pub use loss::{compute_accuracy, compute_loss, LossType};
pub use network::{render, Mlp};
pub use optim::Sgd;
pub use train::{train, train_streaming, EpochStats, Reporter, TrainingConfig};
