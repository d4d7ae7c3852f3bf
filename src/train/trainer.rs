use tracing::trace;

use crate::activation::sigmoid_derivative;
use crate::data::Sample;
use crate::error::{MlpError, Result};
use crate::network::{ForwardPass, Mlp};
use crate::optim::{Deltas, Sgd};

/// Trains `network` in place with online backpropagation.
///
/// Every epoch visits `samples` in the given order and updates the weights
/// after each sample. All inputs are shape-checked before the first update,
/// so a bad sample leaves the network untouched.
///
/// # Errors
/// - `EmptyTrainingSet` if `samples` is empty
/// - `InputShapeMismatch` naming the first sample whose input length differs
///   from `input_size`
pub fn train(network: &mut Mlp, samples: &[Sample], epochs: usize, learning_rate: f32) -> Result<()> {
    if samples.is_empty() {
        return Err(MlpError::EmptyTrainingSet);
    }
    for (i, sample) in samples.iter().enumerate() {
        network.check_input(&sample.input, Some(i))?;
    }

    let optimizer = Sgd::new(learning_rate);
    for epoch in 0..epochs {
        for sample in samples {
            train_sample(network, sample, &optimizer);
        }
        trace!(epoch, samples = samples.len(), "trained epoch");
    }
    Ok(())
}

/// Forward, backward and update for one pre-validated sample.
fn train_sample(network: &mut Mlp, sample: &Sample, optimizer: &Sgd) {
    let pass = network.propagate(&sample.input);
    let deltas = backprop(network, &pass, sample.target);
    optimizer.step(network, &sample.input, &pass, &deltas);
}

/// Computes all error terms before any weight changes.
fn backprop(network: &Mlp, pass: &ForwardPass, target: f32) -> Deltas {
    let output = (target - pass.output) * sigmoid_derivative(pass.output);
    let hidden = pass
        .hidden
        .iter()
        .zip(network.output_weights())
        .map(|(&a, &w)| output * w * sigmoid_derivative(a))
        .collect();
    Deltas { output, hidden }
}
