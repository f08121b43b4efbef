use rand::{rngs::StdRng, SeedableRng};

use crate::{
    error::{NetError, Result},
    layers::{dense::FullyConnectedLayer, input::InputLayer, layer::{Forward, Layer}},
    math::init::Initializer,
    network::spec::Topology,
};

/// A feed-forward network: one input layer followed by fully-connected layers.
///
/// Inference borrows the network immutably, so any number of threads may run
/// it at once; changing weights needs `&mut self` and cannot overlap a call.
#[derive(Debug, Clone, PartialEq)]
pub struct NeuralNet {
    topology: Topology,
    layers: Vec<Layer>,
    tracing: bool,
}

impl NeuralNet {
    /// Builds an all-Sigmoid network with every weight set to `0.0`.
    ///
    /// The input layer and each hidden layer append a bias unit; the output
    /// layer does not. `hidden` may be empty.
    pub fn new(input: usize, hidden: &[usize], output: usize) -> Result<NeuralNet> {
        NeuralNet::from_topology(Topology::new(input, hidden.to_vec(), output))
    }

    pub fn from_topology(topology: Topology) -> Result<NeuralNet> {
        topology.validate()?;

        let mut layers = Vec::with_capacity(topology.layer_count());
        layers.push(Layer::from(InputLayer::new(topology.input, true)?));

        for &count in &topology.hidden {
            let layer = FullyConnectedLayer::new(count, &layers[layers.len() - 1], None, true)?
                .with_activation(topology.hidden_activation);
            layers.push(layer.into());
        }

        let output = FullyConnectedLayer::new(topology.output, &layers[layers.len() - 1], None, false)?
            .with_activation(topology.output_activation);
        layers.push(output.into());

        log::debug!(
            "built network {} -> {:?} -> {} ({} layers)",
            topology.input,
            topology.hidden,
            topology.output,
            layers.len()
        );

        Ok(NeuralNet { topology, layers, tracing: false })
    }

    /// Enables per-layer and per-neuron `log` tracing during inference.
    pub fn with_tracing(mut self, tracing: bool) -> NeuralNet {
        self.tracing = tracing;
        self
    }

    pub fn set_tracing(&mut self, tracing: bool) {
        self.tracing = tracing;
    }

    pub fn is_tracing(&self) -> bool {
        self.tracing
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }

    pub fn input_width(&self) -> usize {
        self.topology.input
    }

    pub fn output_width(&self) -> usize {
        self.topology.output
    }

    /// The fully-connected layer at `index`, for in-place changes.
    pub fn fully_connected_mut(&mut self, index: usize) -> Result<&mut FullyConnectedLayer> {
        let count = self.layers.len();
        self.layers
            .get_mut(index)
            .ok_or(NetError::LayerIndex { index, count })?
            .as_fully_connected_mut()
            .ok_or(NetError::NotFullyConnected { index })
    }

    /// Replaces the weights of layer `index`; the length must match exactly.
    pub fn set_layer_weights(&mut self, index: usize, weights: Vec<f64>) -> Result<()> {
        self.fully_connected_mut(index)?
            .set_weights(weights)
            .map_err(|e| e.at_layer(index))
    }

    /// Mutable view of layer `index`'s weights, in the strided layout.
    pub fn layer_weights_mut(&mut self, index: usize) -> Result<&mut [f64]> {
        Ok(self.fully_connected_mut(index)?.weights_mut())
    }

    /// Re-fills every fully-connected layer from `initializer`, reproducibly for `seed`.
    pub fn initialize(&mut self, initializer: &Initializer, seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        for layer in self.layers.iter_mut().filter_map(Layer::as_fully_connected_mut) {
            layer.initialize(initializer, &mut rng);
        }
    }

    /// Output of the last layer for `input`.
    pub fn infer(&self, input: &[f64]) -> Result<Vec<f64>> {
        let mut chain = self.infer_with_intermediates(input)?;
        Ok(chain.pop().unwrap_or_default())
    }

    /// `input` followed by every layer's output, in order; `layers().len() + 1` vectors.
    pub fn infer_with_intermediates(&self, input: &[f64]) -> Result<Vec<Vec<f64>>> {
        if self.tracing {
            log::debug!("inferring {input:?}");
        }

        let mut chain = Vec::with_capacity(self.layers.len() + 1);
        chain.push(input.to_vec());
        for (i, layer) in self.layers.iter().enumerate() {
            if self.tracing {
                log::trace!("layer {i}");
            }
            let previous = &chain[chain.len() - 1];
            let output = layer.forward(previous, self.tracing).map_err(|e| e.at_layer(i))?;
            chain.push(output);
        }
        Ok(chain)
    }

    /// Runs `infer` over each input in order, stopping at the first error.
    pub fn infer_batch(&self, inputs: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
        inputs.iter().map(|input| self.infer(input)).collect()
    }
}
