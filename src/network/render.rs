use std::fmt::{self, Write};

use crate::network::network::Mlp;

/// Renders a network as plain structured text using only its public accessors.
///
/// ```text
/// Mlp(input_size=2, hidden_size=2)
///   hidden[0]: [0.8, -0.2] bias=0.4
///   hidden[1]: [-0.6, 0.9] bias=-0.1
///   output:    [0.5, -0.3] bias=0.1
/// ```
pub fn render(network: &Mlp) -> String {
    let mut out = String::new();
    let n = network.input_size();
    let h = network.hidden_size();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "Mlp(input_size={n}, hidden_size={h})");
    for (i, row) in network.hidden_weights().iter().enumerate() {
        let _ = writeln!(out, "  hidden[{i}]: {:?} bias={}", &row[..n], row[n]);
    }
    let weights = network.output_weights();
    let _ = write!(out, "  output:    {:?} bias={}", &weights[..h], weights[h]);
    out
}

impl fmt::Display for Mlp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}
