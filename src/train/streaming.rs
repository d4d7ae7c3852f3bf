use tracing::{debug, info};

use crate::data::{Sample, SampleSource};
use crate::error::{MlpError, Result};
use crate::loss::evaluate;
use crate::network::Mlp;
use crate::train::epoch_stats::EpochStats;
use crate::train::reporter::Reporter;
use crate::train::train_config::TrainingConfig;
use crate::train::trainer::train;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `network` over `source` for `config.epochs` epochs without holding
/// the whole dataset in memory, and returns the number of samples seen in the
/// first epoch.
///
/// Each epoch restarts the source and feeds it to `train` in chunks of
/// `config.batch_size`, one epoch per chunk. Updates stay strictly per-sample,
/// so the result is identical to training on the full sequence at once.
///
/// When reporting is enabled, the first epoch's samples are also cached and
/// every report scores the network against that cache.
///
/// # Errors
/// An invalid config, a failing source, or a malformed sample stops training
/// at that point; weight updates already applied are kept.
pub fn train_streaming<S, R>(
    network: &mut Mlp,
    source: &S,
    config: &TrainingConfig,
    reporter: &mut R,
) -> Result<usize>
where
    S: SampleSource + ?Sized,
    R: Reporter + ?Sized,
{
    config.validate()?;

    let reporting = config.loss_report_frequency > 0;
    let mut cache: Vec<Sample> = Vec::new();
    let mut total_samples = 0;

    for epoch in 0..config.epochs {
        let cache_this_epoch = epoch == 0 && reporting;
        let epoch_samples = run_one_epoch(
            network,
            source,
            config,
            if cache_this_epoch { Some(&mut cache) } else { None },
        )?;

        if epoch == 0 {
            total_samples = epoch_samples;
            info!(samples = total_samples, "first epoch complete");
        }

        if config.should_report(epoch) {
            let eval = evaluate(network, &cache, config.loss)?;
            reporter.report(&EpochStats {
                epoch: epoch + 1,
                total_epochs: config.epochs,
                loss: eval.loss,
                accuracy: eval.accuracy,
            });
        }
    }

    Ok(total_samples)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// One pass over `source`, trained chunk by chunk. Returns the sample count.
fn run_one_epoch<S>(
    network: &mut Mlp,
    source: &S,
    config: &TrainingConfig,
    mut cache: Option<&mut Vec<Sample>>,
) -> Result<usize>
where
    S: SampleSource + ?Sized,
{
    let mut chunk: Vec<Sample> = Vec::with_capacity(config.batch_size);
    let mut count = 0;

    for sample in source.samples()? {
        let sample = sample?;
        if let Some(cache) = cache.as_deref_mut() {
            cache.push(sample.clone());
        }
        chunk.push(sample);
        count += 1;

        if chunk.len() >= config.batch_size {
            flush(network, &mut chunk, count, config.learning_rate)?;
        }
    }

    // Remaining partial chunk.
    if !chunk.is_empty() {
        flush(network, &mut chunk, count, config.learning_rate)?;
    }
    Ok(count)
}

/// Trains and empties `chunk`. `seen` counts samples read so far this epoch,
/// so shape errors can name the sample's position in the whole source.
fn flush(network: &mut Mlp, chunk: &mut Vec<Sample>, seen: usize, learning_rate: f32) -> Result<()> {
    debug!(size = chunk.len(), "training chunk");
    let offset = seen - chunk.len();
    train(network, chunk, 1, learning_rate).map_err(|e| match e {
        MlpError::InputShapeMismatch { sample, expected, actual } => MlpError::InputShapeMismatch {
            sample: sample.map(|i| offset + i),
            expected,
            actual,
        },
        other => other,
    })?;
    chunk.clear();
    Ok(())
}
