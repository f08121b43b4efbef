//! Addressing for the destination-interleaved weight layout.
//!
//! A layer with `neurons` outputs stores the weight from input unit `k` to
//! output neuron `n` at flat index `n + k * neurons`. The weights feeding a
//! single neuron are therefore strided across the table, starting at `n`.

/// Flat index of the weight connecting input unit `input` to neuron `neuron`.
pub fn weight_index(input: usize, neuron: usize, neurons: usize) -> usize {
    neuron + input * neurons
}

/// Iterates the weights feeding `neuron`, in input-unit order.
pub fn neuron_weights(weights: &[f64], neuron: usize, neurons: usize) -> impl Iterator<Item = &f64> {
    weights.iter().skip(neuron).step_by(neurons)
}

/// Weighted sum of `input` for `neuron`. `input.len()` must equal
/// `weights.len() / neurons`; callers check that before calling.
pub fn neuron_sum(weights: &[f64], input: &[f64], neuron: usize, neurons: usize) -> f64 {
    neuron_weights(weights, neuron, neurons)
        .zip(input.iter())
        .map(|(w, x)| w * x)
        .sum()
}
