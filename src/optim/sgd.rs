use crate::network::{ForwardPass, Mlp};

/// Error terms of one backward pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Deltas {
    /// (target - output) · σ'(output)
    pub output: f32,
    /// One per hidden neuron, computed from the pre-update output weights.
    pub hidden: Vec<f32>,
}

/// Plain stochastic gradient descent; no momentum, no decay.
#[derive(Debug, Clone, Copy)]
pub struct Sgd {
    pub learning_rate: f32,
}

impl Sgd {
    pub fn new(learning_rate: f32) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one delta-rule update for a single sample.
    ///
    /// `deltas` must already be computed from the weights this step is about
    /// to overwrite.
    pub fn step(&self, network: &mut Mlp, input: &[f32], pass: &ForwardPass, deltas: &Deltas) {
        let lr = self.learning_rate;
        let h = network.hidden_size();
        let n = network.input_size();

        for (w, a) in network.output_weights[..h].iter_mut().zip(&pass.hidden) {
            *w += lr * deltas.output * a;
        }
        network.output_weights[h] += lr * deltas.output;

        for (row, &delta) in network.hidden_weights.iter_mut().zip(&deltas.hidden) {
            for (w, x) in row[..n].iter_mut().zip(input) {
                *w += lr * delta * x;
            }
            row[n] += lr * delta;
        }
    }
}
