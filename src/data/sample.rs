use serde::{Deserialize, Serialize};

/// One labelled training example: a bit-vector input and a binary target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub input: Vec<f32>,
    pub target: f32,
}

impl Sample {
    pub fn new(input: Vec<f32>, target: f32) -> Sample {
        Sample { input, target }
    }

    /// Expands the lowest `width` bits of `bits` (bit 0 first) into 0.0/1.0 inputs.
    /// Positions past bit 63 are 0.0.
    pub fn from_bits(bits: u64, width: usize, target: f32) -> Sample {
        let input = (0..width)
            .map(|i| {
                let shift = u32::try_from(i).unwrap_or(u32::MAX);
                (bits.checked_shr(shift).unwrap_or(0) & 1) as f32
            })
            .collect();
        Sample { input, target }
    }
}

/// The four-row XOR truth table.
pub fn xor() -> Vec<Sample> {
    vec![
        Sample::new(vec![0.0, 0.0], 0.0),
        Sample::new(vec![0.0, 1.0], 1.0),
        Sample::new(vec![1.0, 0.0], 1.0),
        Sample::new(vec![1.0, 1.0], 0.0),
    ]
}
