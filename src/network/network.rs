use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{MlpError, Result, WeightLayer};
use crate::init::WeightInitializer;

/// Hidden layer width used when the caller does not pick one.
pub const DEFAULT_HIDDEN_SIZE: usize = 2;

/// A single-hidden-layer perceptron with one sigmoid output neuron.
///
/// Weight layout:
/// - `hidden_weights` — `hidden_size` rows of `input_size + 1` values; the last
///                      value of each row is that neuron's bias
/// - `output_weights` — `hidden_size + 1` values; the last value is the output bias
///
/// The shape invariants are checked on every construction path (including
/// deserialization), so an `Mlp` value is always internally consistent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MlpWeights")]
pub struct Mlp {
    input_size: usize,
    hidden_size: usize,
    pub(crate) hidden_weights: Vec<Vec<f32>>,
    pub(crate) output_weights: Vec<f32>,
}

/// Unvalidated on-disk form of an `Mlp`.
#[derive(Deserialize)]
struct MlpWeights {
    input_size: usize,
    hidden_size: usize,
    hidden_weights: Vec<Vec<f32>>,
    output_weights: Vec<f32>,
}

impl TryFrom<MlpWeights> for Mlp {
    type Error = MlpError;

    fn try_from(w: MlpWeights) -> Result<Mlp> {
        Mlp::from_weights(w.input_size, w.hidden_size, w.hidden_weights, w.output_weights)
    }
}

impl Mlp {
    /// Builds a network with freshly randomized weights.
    pub fn new(input_size: usize, hidden_size: usize, init: &mut WeightInitializer) -> Result<Mlp> {
        Mlp::with_weights(input_size, hidden_size, Vec::new(), Vec::new(), init)
    }

    /// Builds a randomized network with `DEFAULT_HIDDEN_SIZE` hidden neurons.
    pub fn with_input_size(input_size: usize, init: &mut WeightInitializer) -> Result<Mlp> {
        Mlp::new(input_size, DEFAULT_HIDDEN_SIZE, init)
    }

    /// Builds a network from explicit weights; both layers must be supplied.
    pub fn from_weights(
        input_size: usize,
        hidden_size: usize,
        hidden_weights: Vec<Vec<f32>>,
        output_weights: Vec<f32>,
    ) -> Result<Mlp> {
        check_dimensions(input_size, hidden_size)?;
        check_hidden(input_size, hidden_size, &hidden_weights)?;
        check_output(hidden_size, &output_weights)?;
        Ok(Mlp { input_size, hidden_size, hidden_weights, output_weights })
    }

    /// Builds a network where an empty layer means "randomize this layer".
    ///
    /// Supplied layers are validated before any random weights are drawn.
    pub fn with_weights(
        input_size: usize,
        hidden_size: usize,
        hidden_weights: Vec<Vec<f32>>,
        output_weights: Vec<f32>,
        init: &mut WeightInitializer,
    ) -> Result<Mlp> {
        check_dimensions(input_size, hidden_size)?;
        if !hidden_weights.is_empty() {
            check_hidden(input_size, hidden_size, &hidden_weights)?;
        }
        if !output_weights.is_empty() {
            check_output(hidden_size, &output_weights)?;
        }

        let hidden_weights = if hidden_weights.is_empty() {
            (0..hidden_size).map(|_| init.generate(input_size + 1)).collect()
        } else {
            hidden_weights
        };
        let output_weights = if output_weights.is_empty() {
            init.generate(hidden_size + 1)
        } else {
            output_weights
        };

        debug!(input_size, hidden_size, "constructed network");
        Ok(Mlp { input_size, hidden_size, hidden_weights, output_weights })
    }

    pub fn input_size(&self) -> usize {
        self.input_size
    }

    pub fn hidden_size(&self) -> usize {
        self.hidden_size
    }

    /// Input→hidden rows, bias last.
    pub fn hidden_weights(&self) -> &[Vec<f32>] {
        &self.hidden_weights
    }

    /// Hidden→output weights, bias last.
    pub fn output_weights(&self) -> &[f32] {
        &self.output_weights
    }

    /// Serializes the network weights to a pretty-printed JSON file.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a network from a JSON file previously written by `save_json`.
    /// Shape validation runs again on load.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Mlp> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

fn check_dimensions(input_size: usize, hidden_size: usize) -> Result<()> {
    if input_size == 0 {
        return Err(MlpError::ZeroDimension("input_size"));
    }
    if hidden_size == 0 {
        return Err(MlpError::ZeroDimension("hidden_size"));
    }
    Ok(())
}

fn check_hidden(input_size: usize, hidden_size: usize, rows: &[Vec<f32>]) -> Result<()> {
    if rows.len() != hidden_size {
        return Err(MlpError::ShapeMismatch {
            layer: WeightLayer::HiddenRows,
            expected: hidden_size,
            actual: rows.len(),
        });
    }
    if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != input_size + 1) {
        return Err(MlpError::ShapeMismatch {
            layer: WeightLayer::HiddenRow(i),
            expected: input_size + 1,
            actual: row.len(),
        });
    }
    Ok(())
}

fn check_output(hidden_size: usize, weights: &[f32]) -> Result<()> {
    if weights.len() != hidden_size + 1 {
        return Err(MlpError::ShapeMismatch {
            layer: WeightLayer::Output,
            expected: hidden_size + 1,
            actual: weights.len(),
        });
    }
    Ok(())
}
