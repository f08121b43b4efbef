pub mod metadata;
pub mod network;
pub mod persist;
pub mod spec;

pub use metadata::ModelMetadata;
pub use network::NeuralNet;
pub use persist::{LayerWeights, SavedModel};
pub use spec::Topology;
