use std::collections::HashSet;

use serde::{Serialize, Deserialize};

use crate::{
    activation::activation::ActivationFunction,
    error::{NetError, Result},
    network::{metadata::ModelMetadata, network::NeuralNet, spec::Topology},
};

/// One fully-connected layer's weight table, keyed by its index in the network.
/// `weights` keeps the destination-interleaved layout the layer uses.
///
/// `activation` overrides whatever the topology gave the layer; when absent
/// the layer keeps its current activation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerWeights {
    pub layer: usize,
    pub weights: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activation: Option<ActivationFunction>,
}

/// On-disk form of a network: its topology plus every weight table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedModel {
    pub topology: Topology,
    pub weights: Vec<LayerWeights>,
    #[serde(default)]
    pub metadata: Option<ModelMetadata>,
}

impl NeuralNet {
    /// Weight tables of every fully-connected layer, in layer order.
    pub fn layer_weights(&self) -> Vec<LayerWeights> {
        self.layers()
            .iter()
            .enumerate()
            .filter_map(|(layer, l)| {
                l.as_fully_connected().map(|fc| LayerWeights {
                    layer,
                    weights: fc.weights().to_vec(),
                    activation: Some(fc.activation()),
                })
            })
            .collect()
    }

    /// Applies a set of weight tables. Every table is checked before any is
    /// written, so a failed call leaves the network unchanged.
    pub fn apply_layer_weights(&mut self, tables: &[LayerWeights]) -> Result<()> {
        let count = self.layers().len();
        let mut seen = HashSet::with_capacity(tables.len());
        for table in tables {
            let layer = self
                .layer(table.layer)
                .ok_or(NetError::LayerIndex { index: table.layer, count })?;
            let fc = layer
                .as_fully_connected()
                .ok_or(NetError::NotFullyConnected { index: table.layer })?;
            if !seen.insert(table.layer) {
                return Err(NetError::DuplicateLayer { index: table.layer });
            }
            if fc.weights().len() != table.weights.len() {
                return Err(NetError::WeightLength {
                    expected: fc.weights().len(),
                    got: table.weights.len(),
                }
                .at_layer(table.layer));
            }
        }

        for table in tables {
            let fc = self.fully_connected_mut(table.layer)?;
            fc.set_weights(table.weights.clone()).map_err(|e| e.at_layer(table.layer))?;
            if let Some(activation) = table.activation {
                fc.set_activation(activation);
            }
        }
        Ok(())
    }

    pub fn to_saved(&self, metadata: Option<ModelMetadata>) -> SavedModel {
        SavedModel {
            topology: self.topology().clone(),
            weights: self.layer_weights(),
            metadata,
        }
    }

    /// Rebuilds a network from its topology, then applies the saved weights.
    pub fn from_saved(saved: &SavedModel) -> Result<NeuralNet> {
        let mut net = NeuralNet::from_topology(saved.topology.clone())?;
        net.apply_layer_weights(&saved.weights)?;
        Ok(net)
    }

    /// Serializes the topology, activations and weights to a pretty-printed
    /// JSON file, without metadata.
    pub fn save_json(&self, path: &str) -> Result<()> {
        self.to_saved(None).save_json(path)
    }

    pub fn save_json_with_metadata(&self, path: &str, metadata: ModelMetadata) -> Result<()> {
        self.to_saved(Some(metadata)).save_json(path)
    }

    /// Loads a network previously written by `save_json`. Any metadata in the
    /// file is dropped; use `load_json_with_metadata` to keep it.
    pub fn load_json(path: &str) -> Result<NeuralNet> {
        NeuralNet::load_json_with_metadata(path).map(|(net, _)| net)
    }

    pub fn load_json_with_metadata(path: &str) -> Result<(NeuralNet, Option<ModelMetadata>)> {
        let saved = SavedModel::load_json(path)?;
        let net = NeuralNet::from_saved(&saved)?;
        Ok((net, saved.metadata))
    }
}

impl SavedModel {
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        log::debug!("saved model to {path}");
        Ok(())
    }

    pub fn load_json(path: &str) -> Result<SavedModel> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let saved = serde_json::from_reader(reader)?;
        log::debug!("loaded model from {path}");
        Ok(saved)
    }
}
