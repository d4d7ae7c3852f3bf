use std::sync::mpsc;

use tracing::info;

use crate::train::epoch_stats::EpochStats;

/// Receives progress reports from `train_streaming`.
pub trait Reporter {
    fn report(&mut self, stats: &EpochStats);
}

/// Discards every report.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&mut self, _stats: &EpochStats) {}
}

/// Emits each report as a `tracing` event at INFO level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&mut self, stats: &EpochStats) {
        info!(
            epoch = stats.epoch,
            total_epochs = stats.total_epochs,
            loss = stats.loss,
            accuracy = stats.accuracy,
            "Epoch {}/{} - Loss: {:.6} - Accuracy: {:.2}%",
            stats.epoch,
            stats.total_epochs,
            stats.loss,
            stats.accuracy * 100.0
        );
    }
}

/// Collects reports in memory.
impl Reporter for Vec<EpochStats> {
    fn report(&mut self, stats: &EpochStats) {
        self.push(*stats);
    }
}

/// Forwards reports over a channel. A dropped receiver does not stop training.
impl Reporter for mpsc::Sender<EpochStats> {
    fn report(&mut self, stats: &EpochStats) {
        let _ = self.send(*stats);
    }
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, stats: &EpochStats) {
        (**self).report(stats);
    }
}
