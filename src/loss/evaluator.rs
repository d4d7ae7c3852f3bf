use serde::{Deserialize, Serialize};

use crate::data::Sample;
use crate::error::Result;
use crate::loss::LossType;
use crate::network::Mlp;

/// Loss and accuracy of a network over one sample set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub loss: f32,
    /// Fraction in [0, 1].
    pub accuracy: f32,
}

/// Mean squared error over `samples`.
pub fn compute_loss(network: &Mlp, samples: &[Sample]) -> Result<f32> {
    compute_loss_with(network, samples, LossType::Mse)
}

/// Mean of `loss` over `samples`. Returns 0.0 for an empty set.
pub fn compute_loss_with(network: &Mlp, samples: &[Sample], loss: LossType) -> Result<f32> {
    Ok(evaluate(network, samples, loss)?.loss)
}

/// Fraction of samples whose thresholded output equals the rounded target.
/// Returns 0.0 for an empty set.
pub fn compute_accuracy(network: &Mlp, samples: &[Sample]) -> Result<f32> {
    Ok(evaluate(network, samples, LossType::Mse)?.accuracy)
}

/// Computes loss and accuracy together with one forward pass per sample.
pub fn evaluate(network: &Mlp, samples: &[Sample], loss: LossType) -> Result<Evaluation> {
    if samples.is_empty() {
        return Ok(Evaluation { loss: 0.0, accuracy: 0.0 });
    }

    let mut total_loss = 0.0f32;
    let mut correct = 0usize;
    for (i, sample) in samples.iter().enumerate() {
        network.check_input(&sample.input, Some(i))?;
        let output = network.propagate(&sample.input).output;

        total_loss += loss.loss(output, sample.target);
        let predicted = if output >= 0.5 { 1.0 } else { 0.0 };
        if predicted == sample.target.round() {
            correct += 1;
        }
    }

    let n = samples.len() as f32;
    Ok(Evaluation {
        loss: total_loss / n,
        accuracy: correct as f32 / n,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MlpError;

    /// The hidden neuron fires on the first input bit; the output follows it
    /// for `sign = 1.0` and inverts it for `sign = -1.0`.
    fn first_bit_net(sign: f32) -> Mlp {
        Mlp::from_weights(2, 1, vec![vec![20.0, 0.0, -10.0]], vec![sign * 10.0, -sign * 5.0]).unwrap()
    }

    fn first_bit_samples() -> Vec<Sample> {
        vec![
            Sample::new(vec![0.0, 0.0], 0.0),
            Sample::new(vec![0.0, 1.0], 0.0),
            Sample::new(vec![1.0, 0.0], 1.0),
            Sample::new(vec![1.0, 1.0], 1.0),
        ]
    }

    #[test]
    fn perfect_network_scores_one() {
        let net = first_bit_net(1.0);
        assert_eq!(compute_accuracy(&net, &first_bit_samples()).unwrap(), 1.0);
        assert!(compute_loss(&net, &first_bit_samples()).unwrap() < 0.01);
    }

    #[test]
    fn inverted_network_scores_zero() {
        let net = first_bit_net(-1.0);
        assert_eq!(compute_accuracy(&net, &first_bit_samples()).unwrap(), 0.0);
        assert!(compute_loss(&net, &first_bit_samples()).unwrap() > 0.9);
    }

    #[test]
    fn partial_accuracy_is_a_fraction() {
        let net = first_bit_net(1.0);
        let mut samples = first_bit_samples();
        samples[0].target = 1.0;
        assert_eq!(compute_accuracy(&net, &samples).unwrap(), 0.75);
    }

    #[test]
    fn evaluate_agrees_with_individual_metrics() {
        let net = first_bit_net(1.0);
        let samples = first_bit_samples();
        let eval = evaluate(&net, &samples, LossType::BinaryCrossEntropy).unwrap();
        assert_eq!(eval.accuracy, compute_accuracy(&net, &samples).unwrap());
        assert_eq!(
            eval.loss,
            compute_loss_with(&net, &samples, LossType::BinaryCrossEntropy).unwrap()
        );
    }

    #[test]
    fn empty_set_scores_zero() {
        let net = first_bit_net(1.0);
        assert_eq!(
            evaluate(&net, &[], LossType::Mse).unwrap(),
            Evaluation { loss: 0.0, accuracy: 0.0 }
        );
    }

    #[test]
    fn bad_sample_is_reported_by_index() {
        let net = first_bit_net(1.0);
        let mut samples = first_bit_samples();
        samples[2].input.push(1.0);
        let err = compute_loss(&net, &samples).unwrap_err();
        assert!(matches!(
            err,
            MlpError::InputShapeMismatch { sample: Some(2), expected: 2, actual: 3 }
        ));
    }
}
