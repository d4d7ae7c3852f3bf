use std::fmt;

/// Identifies which weight layer failed shape validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightLayer {
    /// Row count of the input→hidden layer.
    HiddenRows,
    /// Length of one input→hidden row (neuron index).
    HiddenRow(usize),
    /// Length of the hidden→output vector.
    Output,
}

impl fmt::Display for WeightLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightLayer::HiddenRows => write!(f, "hidden_weights row count"),
            WeightLayer::HiddenRow(i) => write!(f, "hidden_weights[{i}] length"),
            WeightLayer::Output => write!(f, "output_weights length"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MlpError {
    #[error("shape mismatch in {layer}: expected {expected}, got {actual}")]
    ShapeMismatch {
        layer: WeightLayer,
        expected: usize,
        actual: usize,
    },

    #[error("input shape mismatch{}: expected {} inputs, got {}", at_sample(.sample), .expected, .actual)]
    InputShapeMismatch {
        sample: Option<usize>,
        expected: usize,
        actual: usize,
    },

    #[error("training set is empty")]
    EmptyTrainingSet,

    #[error("{0} must be at least 1")]
    ZeroDimension(&'static str),

    #[error("invalid training configuration: {0}")]
    InvalidConfig(String),

    #[error("line {line}: {message}")]
    DataFormat { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MlpError>;

fn at_sample(sample: &Option<usize>) -> String {
    sample.map(|i| format!(" at sample {i}")).unwrap_or_default()
}
