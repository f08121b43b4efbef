use serde::{Serialize, Deserialize};
use crate::activation::activation::ActivationFunction;
use crate::error::{NetError, Result};

/// A serializable description of a network's shape.
///
/// Fields:
/// - `input`             — width of the raw input vector
/// - `hidden`            — neuron counts of the hidden layers, input side first;
///                         may be empty
/// - `output`            — neuron count of the output layer
/// - `hidden_activation` — activation of every hidden layer (Sigmoid if omitted)
/// - `output_activation` — activation of the output layer (Sigmoid if omitted)
///
/// The input layer and every hidden layer append a bias unit; the output
/// layer does not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topology {
    pub input: usize,
    #[serde(default)]
    pub hidden: Vec<usize>,
    pub output: usize,
    #[serde(default)]
    pub hidden_activation: ActivationFunction,
    #[serde(default)]
    pub output_activation: ActivationFunction,
}

impl Topology {
    /// All-Sigmoid topology.
    pub fn new(input: usize, hidden: Vec<usize>, output: usize) -> Topology {
        Topology {
            input,
            hidden,
            output,
            hidden_activation: ActivationFunction::Sigmoid,
            output_activation: ActivationFunction::Sigmoid,
        }
    }

    /// Rejects any layer with zero neurons.
    pub fn validate(&self) -> Result<()> {
        if self.input == 0 {
            return Err(NetError::ZeroNeurons { what: "input layer" });
        }
        if self.hidden.contains(&0) {
            return Err(NetError::ZeroNeurons { what: "hidden layer" });
        }
        if self.output == 0 {
            return Err(NetError::ZeroNeurons { what: "output layer" });
        }
        Ok(())
    }

    /// Total number of layers, input layer included.
    pub fn layer_count(&self) -> usize {
        self.hidden.len() + 2
    }

    /// Serializes the topology to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes and validates a `Topology` from a JSON file.
    pub fn load_json(path: &str) -> Result<Topology> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let topology: Topology = serde_json::from_reader(reader)?;
        topology.validate()?;
        Ok(topology)
    }
}
