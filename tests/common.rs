#![allow(dead_code)]

use branch_mlp::{Mlp, Sample, WeightInitializer};

/// Reproducible random network.
pub fn seeded(input_size: usize, hidden_size: usize, seed: u64) -> Mlp {
    Mlp::new(input_size, hidden_size, &mut WeightInitializer::from_seed(seed)).unwrap()
}

/// Synthetic branch trace: the branch is taken when bits 0 and 2 of the
/// history agree.
pub fn branch_trace(n: u64) -> Vec<(u64, f32)> {
    (0..n)
        .map(|i| {
            let history = i.wrapping_mul(0x9E37_79B9_7F4A_7C15) >> 7;
            let taken = (history & 1) == ((history >> 2) & 1);
            (history, taken as u8 as f32)
        })
        .collect()
}

pub fn to_samples(trace: &[(u64, f32)], input_size: usize) -> Vec<Sample> {
    trace
        .iter()
        .map(|&(history, target)| Sample::from_bits(history, input_size, target))
        .collect()
}

pub fn to_csv(trace: &[(u64, f32)]) -> String {
    trace
        .iter()
        .map(|&(history, target)| format!("{},{}\n", target as u8, history))
        .collect()
}
