pub struct BceLoss;

const EPS: f32 = 1e-7;

impl BceLoss {
    /// Binary cross-entropy of one prediction: -(y·ln(p+ε) + (1-y)·ln(1-p+ε))
    pub fn loss(output: f32, target: f32) -> f32 {
        -(target * (output + EPS).ln() + (1.0 - target) * (1.0 - output + EPS).ln())
    }
}
