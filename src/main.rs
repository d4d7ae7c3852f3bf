use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use tracing::{info, Level};

use branch_mlp::data::MAX_INPUT_SIZE;
use branch_mlp::train::LogReporter;
use branch_mlp::{train_streaming, CsvSource, LossType, Mlp, TrainingConfig, WeightInitializer};

/// Trains a one-hidden-layer perceptron on branch-trace CSV data.
///
/// Each record is `<target>,<history>`: a 0/1 outcome and a 64-bit integer
/// whose lowest INPUT_SIZE bits are the input. The file is streamed in
/// chunks, so it never has to fit in memory.
#[derive(Parser)]
#[command(name = "branch-mlp", version, about)]
struct Cli {
    /// CSV training data
    #[arg(value_name = "CSV_FILE")]
    csv_file: PathBuf,
    /// Number of lowest history bits used as input
    #[arg(value_parser = clap::value_parser!(u32).range(1..=MAX_INPUT_SIZE as i64))]
    input_size: u32,
    /// Number of hidden neurons
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    hidden_size: u32,
    #[arg(default_value_t = 1000)]
    epochs: usize,
    #[arg(default_value_t = 0.1)]
    learning_rate: f32,
    /// Samples read per training chunk
    #[arg(default_value_t = 32)]
    batch_size: usize,
    /// Report loss and accuracy every N epochs [default: epochs / 10, at least 1; 0 disables]
    #[arg(long, value_name = "N")]
    report_every: Option<usize>,
    /// Metric used in progress reports
    #[arg(long, value_enum, default_value_t = LossArg::Mse)]
    loss: LossArg,
    /// Seed for weight initialization
    #[arg(long)]
    seed: Option<u64>,
    /// Start from previously saved weights instead of random ones
    #[arg(long, value_name = "PATH")]
    weights: Option<PathBuf>,
    /// Where to save the trained weights [default: mlp_<INPUT_SIZE>_<HIDDEN_SIZE>.json]
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,
    /// Print the trained network
    #[arg(long)]
    show: bool,
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum LossArg {
    Mse,
    Bce,
}

impl From<LossArg> for LossType {
    fn from(arg: LossArg) -> LossType {
        match arg {
            LossArg::Mse => LossType::Mse,
            LossArg::Bce => LossType::BinaryCrossEntropy,
        }
    }
}

fn install_logger(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = tracing_subscriber::fmt().compact().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).context("failed to install logger")
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    install_logger(args.verbose)?;

    let input_size = args.input_size as usize;
    let hidden_size = args.hidden_size as usize;

    let mut config = TrainingConfig::new(args.epochs, args.learning_rate, args.batch_size);
    config.loss = args.loss.into();
    if let Some(n) = args.report_every {
        config.loss_report_frequency = n;
    }
    config.validate()?;

    let source = CsvSource::new(&args.csv_file, input_size)?;

    let mut network = match &args.weights {
        Some(path) => {
            let network = Mlp::load_json(path)
                .with_context(|| format!("failed to load weights from {}", path.display()))?;
            if network.input_size() != input_size || network.hidden_size() != hidden_size {
                bail!(
                    "{} holds a {}x{} network, expected {}x{}",
                    path.display(),
                    network.input_size(),
                    network.hidden_size(),
                    input_size,
                    hidden_size
                );
            }
            network
        }
        None => {
            let mut init = match args.seed {
                Some(seed) => WeightInitializer::from_seed(seed),
                None => WeightInitializer::from_entropy(),
            };
            Mlp::new(input_size, hidden_size, &mut init)?
        }
    };

    info!(
        input_size,
        hidden_size,
        batch_size = config.batch_size,
        epochs = config.epochs,
        learning_rate = config.learning_rate,
        "training from {}",
        source.path().display()
    );

    let total = train_streaming(&mut network, &source, &config, &mut LogReporter)
        .with_context(|| format!("training on {} failed", source.path().display()))?;
    info!(samples_per_epoch = total, "training complete");

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(format!("mlp_{input_size}_{hidden_size}.json")));
    network
        .save_json(&output)
        .with_context(|| format!("failed to save weights to {}", output.display()))?;
    info!("weights saved to {}", output.display());

    if args.show {
        println!("{network}");
    }
    Ok(())
}
