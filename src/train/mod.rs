pub mod epoch_stats;
pub mod reporter;
pub mod streaming;
pub mod train_config;
pub mod trainer;

pub use epoch_stats::EpochStats;
pub use reporter::{LogReporter, NullReporter, Reporter};
pub use streaming::train_streaming;
pub use train_config::TrainingConfig;
pub use trainer::train;
