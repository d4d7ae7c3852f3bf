use crate::activation::sigmoid;
use crate::error::{MlpError, Result};
use crate::network::network::Mlp;

/// Activations from one forward pass, kept for the backward pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardPass {
    /// Sigmoid output of each hidden neuron, in row order.
    pub hidden: Vec<f32>,
    /// Sigmoid output of the output neuron, in (0, 1).
    pub output: f32,
}

impl Mlp {
    /// Runs the network on `input` and returns the output activation.
    pub fn forward(&self, input: &[f32]) -> Result<f32> {
        Ok(self.forward_pass(input)?.output)
    }

    /// Like `forward`, but also returns the hidden activations.
    pub fn forward_pass(&self, input: &[f32]) -> Result<ForwardPass> {
        self.check_input(input, None)?;
        Ok(self.propagate(input))
    }

    /// Thresholds the output at 0.5.
    pub fn predict(&self, input: &[f32]) -> Result<bool> {
        Ok(self.forward(input)? >= 0.5)
    }

    pub(crate) fn check_input(&self, input: &[f32], sample: Option<usize>) -> Result<()> {
        if input.len() != self.input_size() {
            return Err(MlpError::InputShapeMismatch {
                sample,
                expected: self.input_size(),
                actual: input.len(),
            });
        }
        Ok(())
    }

    /// Forward pass without the length check; callers validate first.
    pub(crate) fn propagate(&self, input: &[f32]) -> ForwardPass {
        let n = self.input_size();
        let hidden: Vec<f32> = self
            .hidden_weights
            .iter()
            .map(|row| {
                let sum: f32 = input.iter().zip(&row[..n]).map(|(x, w)| x * w).sum::<f32>() + row[n];
                sigmoid(sum)
            })
            .collect();

        let h = self.hidden_size();
        let output_sum: f32 = hidden
            .iter()
            .zip(&self.output_weights[..h])
            .map(|(a, w)| a * w)
            .sum::<f32>()
            + self.output_weights[h];

        ForwardPass { hidden, output: sigmoid(output_sum) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::init::WeightInitializer;

    fn reference_net() -> Mlp {
        Mlp::from_weights(
            2,
            2,
            vec![vec![0.8, -0.2, 0.4], vec![-0.6, 0.9, -0.1]],
            vec![0.5, -0.3, 0.1],
        )
        .unwrap()
    }

    #[test]
    fn matches_hand_computed_value() {
        let net = reference_net();
        let expected = sigmoid(0.5 * sigmoid(0.4) + -0.3 * sigmoid(-0.1) + 0.1);
        let out = net.forward(&[0.0, 0.0]).unwrap();
        assert!((out - expected).abs() < 1e-6);
        // sigmoid(0.5 * 0.598688 - 0.3 * 0.475021 + 0.1) = sigmoid(0.256838)
        assert!((out - 0.563858).abs() < 1e-5, "got {out}");
    }

    #[test]
    fn exposes_hidden_activations() {
        let net = reference_net();
        let pass = net.forward_pass(&[1.0, 0.0]).unwrap();
        assert_eq!(pass.hidden.len(), 2);
        assert!((pass.hidden[0] - sigmoid(0.8 + 0.4)).abs() < 1e-6);
        assert!((pass.hidden[1] - sigmoid(-0.6 - 0.1)).abs() < 1e-6);
        assert_eq!(pass.output, net.forward(&[1.0, 0.0]).unwrap());
    }

    #[test]
    fn forward_is_deterministic_and_bounded() {
        let mut init = WeightInitializer::from_seed(11);
        let net = Mlp::new(8, 4, &mut init).unwrap();
        for bits in 0u32..256 {
            let input: Vec<f32> = (0..8).map(|i| ((bits >> i) & 1) as f32).collect();
            let a = net.forward(&input).unwrap();
            let b = net.forward(&input).unwrap();
            assert_eq!(a.to_bits(), b.to_bits());
            assert!(a > 0.0 && a < 1.0);
        }
    }

    #[test]
    fn wrong_input_length_is_rejected() {
        let net = reference_net();
        let err = net.forward(&[1.0]).unwrap_err();
        assert!(matches!(
            err,
            MlpError::InputShapeMismatch { sample: None, expected: 2, actual: 1 }
        ));
    }

    #[test]
    fn predict_thresholds_output() {
        let net = Mlp::from_weights(1, 1, vec![vec![0.0, 0.0]], vec![0.0, 5.0]).unwrap();
        assert!(net.predict(&[1.0]).unwrap());
        let net = Mlp::from_weights(1, 1, vec![vec![0.0, 0.0]], vec![0.0, -5.0]).unwrap();
        assert!(!net.predict(&[1.0]).unwrap());
    }
}
