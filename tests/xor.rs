use feedforward_nn::{NeuralNet, Topology};

fn xor_net() -> NeuralNet {
    let mut net = NeuralNet::new(2, &[2], 1).unwrap();
    net.set_layer_weights(1, vec![54.0, 14.0, 17.0, 14.0, -8.0, -20.0]).unwrap();
    net.set_layer_weights(2, vec![92.0, -92.0, -48.0]).unwrap();
    net
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

#[test]
fn hand_tuned_weights_approximate_xor() {
    let net = xor_net();
    let cases = [
        ([0.0, 0.0], 0.0),
        ([1.0, 0.0], 1.0),
        ([0.0, 1.0], 1.0),
        ([1.0, 1.0], 0.0),
    ];
    for (input, expected) in cases {
        let output = net.infer(&input).unwrap();
        assert_eq!(output.len(), 1);
        assert!(
            (output[0] - expected).abs() < 1e-4,
            "xor({input:?}) = {}, expected about {expected}",
            output[0]
        );
    }
}

#[test]
fn hidden_activations_match_hand_computation() {
    let net = xor_net();
    let cases = [
        ([0.0, 0.0], -8.0, -20.0),
        ([1.0, 0.0], 46.0, -6.0),
        ([0.0, 1.0], 9.0, -6.0),
        ([1.0, 1.0], 63.0, 8.0),
    ];
    for (input, z0, z1) in cases {
        let chain = net.infer_with_intermediates(&input).unwrap();
        let hidden = &chain[2];
        assert!((hidden[0] - sigmoid(z0)).abs() < 1e-12);
        assert!((hidden[1] - sigmoid(z1)).abs() < 1e-12);
        assert_eq!(hidden[2], 1.0);

        let z_out = 92.0 * hidden[0] - 92.0 * hidden[1] - 48.0;
        assert!((chain[3][0] - sigmoid(z_out)).abs() < 1e-12);
    }

    // the first hidden neuron is the 0.000335 term for a [0, 0] input
    let chain = net.infer_with_intermediates(&[0.0, 0.0]).unwrap();
    assert!((chain[2][0] - 0.000335).abs() < 1e-6);
}

#[test]
fn low_outputs_are_far_below_high_outputs() {
    let net = xor_net();
    let low = net.infer(&[0.0, 0.0]).unwrap()[0];
    let high = net.infer(&[1.0, 0.0]).unwrap()[0];
    assert!(low > 0.0 && low < 1e-20);
    assert!(high > 0.999999);
    assert_eq!(net.infer(&[0.0, 0.0]).unwrap()[0], net.infer(&[0.0, 0.0]).unwrap()[0]);
}

#[test]
fn topology_built_network_matches_direct_construction() {
    let mut net = NeuralNet::from_topology(Topology::new(2, vec![2], 1)).unwrap();
    net.set_layer_weights(1, vec![54.0, 14.0, 17.0, 14.0, -8.0, -20.0]).unwrap();
    net.set_layer_weights(2, vec![92.0, -92.0, -48.0]).unwrap();
    assert_eq!(net, xor_net());
}
