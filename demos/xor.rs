use branch_mlp::data::xor;
use branch_mlp::{compute_accuracy, compute_loss, train, Mlp, WeightInitializer};

fn main() -> branch_mlp::Result<()> {
    let mut init = WeightInitializer::from_seed(42);
    let mut network = Mlp::new(2, 4, &mut init)?;
    let samples = xor();

    let learning_rate = 0.5;
    let epochs = 10000;

    for epoch in (0..epochs).step_by(1000) {
        let loss = compute_loss(&network, &samples)?;
        println!("Epoch {epoch}: loss = {loss:.6}");
        train(&mut network, &samples, 1000, learning_rate)?;
    }

    for sample in &samples {
        println!(
            "Input: {:?} -> Output: {:.4} (expected {})",
            sample.input,
            network.forward(&sample.input)?,
            sample.target
        );
    }
    println!("Accuracy: {:.0}%", compute_accuracy(&network, &samples)? * 100.0);
    println!("{network}");
    Ok(())
}
