pub mod sgd;

pub use sgd::{Deltas, Sgd};
