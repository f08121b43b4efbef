use feedforward_nn::{NeuralNet, Result};

fn main() -> Result<()> {
    env_logger::init();

    // 2 inputs, one hidden layer of 2 neurons, 1 output
    let mut network = NeuralNet::new(2, &[2], 1)?.with_tracing(true);

    // Hand-tuned weights, laid out as weight(k -> n) at n + k * neuron_count.
    network.set_layer_weights(1, vec![54.0, 14.0, 17.0, 14.0, -8.0, -20.0])?;
    network.set_layer_weights(2, vec![92.0, -92.0, -48.0])?;

    let inputs = vec![
        vec![0.0, 0.0],
        vec![1.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 1.0],
    ];

    for input in &inputs {
        let output = network.infer(input)?;
        println!("Input: {:?} -> Output: {:.6}", input, output[0]);
    }

    Ok(())
}
