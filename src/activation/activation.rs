/// Logistic sigmoid: 1 / (1 + e^-x). Output lies in (0, 1).
pub fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

/// Derivative of the sigmoid expressed in terms of its own output `s = sigmoid(x)`.
pub fn sigmoid_derivative(s: f32) -> f32 {
    s * (1.0 - s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_is_centered_and_bounded() {
        assert_eq!(sigmoid(0.0), 0.5);
        assert!(sigmoid(10.0) < 1.0);
        assert!(sigmoid(-10.0) > 0.0);
        assert!((sigmoid(2.0) + sigmoid(-2.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn derivative_peaks_at_half() {
        assert_eq!(sigmoid_derivative(0.5), 0.25);
        assert!(sigmoid_derivative(0.9) < 0.25);
        assert_eq!(sigmoid_derivative(1.0), 0.0);
    }
}
