pub struct MseLoss;

impl MseLoss {
    /// Squared error of one prediction: (target - output)²
    pub fn loss(output: f32, target: f32) -> f32 {
        (target - output).powi(2)
    }
}
