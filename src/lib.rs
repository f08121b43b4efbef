pub mod error;
pub mod math;
pub mod activation;
pub mod layers;
pub mod network;

// Convenience re-exports
pub use error::{NetError, Result};
pub use activation::activation::ActivationFunction;
pub use layers::{Forward, FullyConnectedLayer, InputLayer, Layer};
pub use math::init::Initializer;
pub use network::{LayerWeights, ModelMetadata, NeuralNet, SavedModel, Topology};
