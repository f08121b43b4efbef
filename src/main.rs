use feedforward_nn::{Forward, NeuralNet, Result};

/// Prints the layer layout of a model saved with `NeuralNet::save_json`.
/// With no path, points at the XOR demo instead.
fn main() -> Result<()> {
    env_logger::init();

    let Some(path) = std::env::args().nth(1) else {
        println!("usage: feedforward-nn <model.json>");
        println!("no model at hand? `cargo run --example xor` runs the hand-tuned XOR network");
        return Ok(());
    };

    let net = NeuralNet::load_json(&path)?;
    println!("{path}: {} layers", net.layers().len());
    for (i, layer) in net.layers().iter().enumerate() {
        let activation = layer
            .activation()
            .map_or_else(|| "-".to_string(), |a| format!("{a:?}"));
        println!(
            "  {i}: in {:>4}  out {:>4}  bias {:<5}  weights {:>6}  {activation}",
            layer.input_width(),
            layer.output_width(),
            layer.appends_bias(),
            layer.weights().len(),
        );
    }
    Ok(())
}
