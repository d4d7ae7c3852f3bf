pub mod initializer;

pub use initializer::WeightInitializer;
