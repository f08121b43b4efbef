use rand::rngs::StdRng;

use crate::{
    activation::activation::ActivationFunction,
    error::{NetError, Result},
    layers::layer::Forward,
    math::{init::Initializer, strided},
};

/// A fully-connected layer: every neuron sees every unit of the previous
/// layer's output, bias unit included.
///
/// `weights` uses the destination-interleaved layout: the weight from input
/// unit `k` to neuron `n` lives at `n + k * neuron_count`
/// (see [`strided::weight_index`]).
#[derive(Debug, Clone, PartialEq)]
pub struct FullyConnectedLayer {
    neuron_count: usize,
    input_width: usize,
    weights: Vec<f64>,
    provides_bias: bool,
    activation: ActivationFunction,
}

impl FullyConnectedLayer {
    /// Builds a Sigmoid layer sized against `previous`'s output width.
    /// Weights default to `0.0` when `weights` is `None`.
    pub fn new(
        neuron_count: usize,
        previous: &impl Forward,
        weights: Option<Vec<f64>>,
        provides_bias: bool,
    ) -> Result<FullyConnectedLayer> {
        if neuron_count == 0 {
            return Err(NetError::ZeroNeurons { what: "fully-connected layer" });
        }
        if neuron_count.checked_add(usize::from(provides_bias)).is_none() {
            return Err(NetError::TooLarge { what: "fully-connected layer" });
        }
        let input_width = previous.output_width();
        let expected = input_width
            .checked_mul(neuron_count)
            .ok_or(NetError::TooLarge { what: "weight table" })?;
        let weights = match weights {
            Some(w) if w.len() != expected => {
                return Err(NetError::WeightLength { expected, got: w.len() });
            }
            Some(w) => w,
            None => {
                let mut w = Vec::new();
                w.try_reserve_exact(expected)
                    .map_err(|_| NetError::TooLarge { what: "weight table" })?;
                w.resize(expected, 0.0);
                w
            }
        };

        Ok(FullyConnectedLayer {
            neuron_count,
            input_width,
            weights,
            provides_bias,
            activation: ActivationFunction::Sigmoid,
        })
    }

    pub fn with_activation(mut self, activation: ActivationFunction) -> FullyConnectedLayer {
        self.activation = activation;
        self
    }

    pub fn activation(&self) -> ActivationFunction {
        self.activation
    }

    pub fn set_activation(&mut self, activation: ActivationFunction) {
        self.activation = activation;
    }

    /// Width of the input vector this layer accepts.
    pub fn input_width(&self) -> usize {
        self.input_width
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Mutable view of the weight table. The slice cannot change length.
    pub fn weights_mut(&mut self) -> &mut [f64] {
        &mut self.weights
    }

    /// Replaces the whole weight table, rejecting a table of the wrong length.
    pub fn set_weights(&mut self, weights: Vec<f64>) -> Result<()> {
        let expected = self.weights.len();
        if weights.len() != expected {
            return Err(NetError::WeightLength { expected, got: weights.len() });
        }
        self.weights = weights;
        Ok(())
    }

    /// The weight connecting input unit `input` to neuron `neuron`.
    pub fn weight(&self, input: usize, neuron: usize) -> Option<f64> {
        if neuron >= self.neuron_count {
            return None;
        }
        self.weights
            .get(strided::weight_index(input, neuron, self.neuron_count))
            .copied()
    }

    pub fn initialize(&mut self, initializer: &Initializer, rng: &mut StdRng) {
        initializer.fill(&mut self.weights, self.input_width, rng);
    }

    pub(crate) fn forward(&self, input: &[f64], trace: bool) -> Result<Vec<f64>> {
        if input.len() != self.input_width {
            return Err(NetError::ShapeMismatch {
                expected: self.input_width,
                got: input.len(),
            });
        }
        if trace {
            log::trace!("input: {input:?}");
        }

        let mut output = Vec::with_capacity(self.output_width());
        for n in 0..self.neuron_count {
            let sum = strided::neuron_sum(&self.weights, input, n, self.neuron_count);
            let act = self.activation.activate(sum);
            if trace {
                let weights: Vec<f64> =
                    strided::neuron_weights(&self.weights, n, self.neuron_count).copied().collect();
                log::trace!("neuron {n}: weights {weights:?}, sum {sum}, activation {act}");
            }
            output.push(act);
        }
        if self.provides_bias {
            output.push(1.0);
        }
        Ok(output)
    }
}

impl Forward for FullyConnectedLayer {
    fn neuron_count(&self) -> usize {
        self.neuron_count
    }

    fn appends_bias(&self) -> bool {
        self.provides_bias
    }

    fn output(&self, input: &[f64]) -> Result<Vec<f64>> {
        self.forward(input, false)
    }
}
