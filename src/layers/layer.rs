use crate::activation::activation::ActivationFunction;
use crate::error::Result;
use crate::layers::{dense::FullyConnectedLayer, input::InputLayer};

/// The forward transform shared by every layer variant.
pub trait Forward {
    /// Logical neurons, not counting an appended bias unit.
    fn neuron_count(&self) -> usize;

    /// Whether `output` appends a constant `1.0` after the neuron values.
    fn appends_bias(&self) -> bool;

    /// Length of the vector `output` returns.
    fn output_width(&self) -> usize {
        self.neuron_count() + usize::from(self.appends_bias())
    }

    fn output(&self, input: &[f64]) -> Result<Vec<f64>>;
}

/// A layer of a `NeuralNet`.
#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
    Input(InputLayer),
    FullyConnected(FullyConnectedLayer),
}

impl Layer {
    /// Width of the vector this layer accepts.
    pub fn input_width(&self) -> usize {
        match self {
            Layer::Input(l) => l.neuron_count(),
            Layer::FullyConnected(l) => l.input_width(),
        }
    }

    /// Only fully-connected layers carry an activation.
    pub fn activation(&self) -> Option<ActivationFunction> {
        match self {
            Layer::Input(_) => None,
            Layer::FullyConnected(l) => Some(l.activation()),
        }
    }

    /// The flattened weight table; empty for the input layer.
    pub fn weights(&self) -> &[f64] {
        match self {
            Layer::Input(_) => &[],
            Layer::FullyConnected(l) => l.weights(),
        }
    }

    pub fn as_fully_connected(&self) -> Option<&FullyConnectedLayer> {
        match self {
            Layer::FullyConnected(l) => Some(l),
            Layer::Input(_) => None,
        }
    }

    pub fn as_fully_connected_mut(&mut self) -> Option<&mut FullyConnectedLayer> {
        match self {
            Layer::FullyConnected(l) => Some(l),
            Layer::Input(_) => None,
        }
    }

    pub(crate) fn forward(&self, input: &[f64], trace: bool) -> Result<Vec<f64>> {
        match self {
            Layer::Input(l) => {
                let output = l.output(input)?;
                if trace {
                    log::trace!("input layer output: {output:?}");
                }
                Ok(output)
            }
            Layer::FullyConnected(l) => l.forward(input, trace),
        }
    }
}

impl Forward for Layer {
    fn neuron_count(&self) -> usize {
        match self {
            Layer::Input(l) => l.neuron_count(),
            Layer::FullyConnected(l) => l.neuron_count(),
        }
    }

    fn appends_bias(&self) -> bool {
        match self {
            Layer::Input(l) => l.appends_bias(),
            Layer::FullyConnected(l) => l.appends_bias(),
        }
    }

    fn output(&self, input: &[f64]) -> Result<Vec<f64>> {
        self.forward(input, false)
    }
}

impl From<InputLayer> for Layer {
    fn from(layer: InputLayer) -> Self {
        Layer::Input(layer)
    }
}

impl From<FullyConnectedLayer> for Layer {
    fn from(layer: FullyConnectedLayer) -> Self {
        Layer::FullyConnected(layer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_layer_has_no_activation_or_weights() {
        let layer = Layer::from(InputLayer::new(3, true).unwrap());
        assert_eq!(layer.activation(), None);
        assert!(layer.weights().is_empty());
        assert!(layer.as_fully_connected().is_none());
        assert_eq!(layer.input_width(), 3);
        assert_eq!(layer.output_width(), 4);
    }

    #[test]
    fn fully_connected_layer_reports_its_activation() {
        let input = Layer::from(InputLayer::new(2, true).unwrap());
        let layer = Layer::from(
            FullyConnectedLayer::new(4, &input, None, false)
                .unwrap()
                .with_activation(ActivationFunction::Tanh),
        );
        assert_eq!(layer.activation(), Some(ActivationFunction::Tanh));
        assert_eq!(layer.input_width(), 3);
        assert_eq!(layer.output_width(), 4);
        assert_eq!(layer.weights().len(), 12);
    }

    #[test]
    fn enum_dispatches_output() {
        let input = Layer::from(InputLayer::new(2, true).unwrap());
        assert_eq!(input.output(&[0.3, 0.4]).unwrap(), vec![0.3, 0.4, 1.0]);

        let dense = Layer::from(FullyConnectedLayer::new(1, &input, None, false).unwrap());
        assert_eq!(dense.output(&[0.3, 0.4, 1.0]).unwrap(), vec![0.5]);
    }
}
