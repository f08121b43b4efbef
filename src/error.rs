/// Result type used across the crate.
pub type Result<T> = std::result::Result<T, NetError>;

/// Everything that can go wrong while building, mutating, running or
/// persisting a network.
#[derive(Debug, thiserror::Error)]
pub enum NetError {
    #[error("expected an input of width {expected}, got {got}")]
    ShapeMismatch { expected: usize, got: usize },

    #[error("expected {expected} weights, got {got}")]
    WeightLength { expected: usize, got: usize },

    #[error("{what} must have at least one neuron")]
    ZeroNeurons { what: &'static str },

    #[error("{what} is too large to address in memory")]
    TooLarge { what: &'static str },

    #[error("layer index {index} is out of range for a network of {count} layers")]
    LayerIndex { index: usize, count: usize },

    #[error("layer {index} is not a fully-connected layer and has no weights")]
    NotFullyConnected { index: usize },

    #[error("weights for layer {index} were given more than once")]
    DuplicateLayer { index: usize },

    /// A layer-level error raised while the network was driving layer `index`.
    #[error("layer {index}: {source}")]
    AtLayer {
        index: usize,
        #[source]
        source: Box<NetError>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NetError {
    pub(crate) fn at_layer(self, index: usize) -> NetError {
        NetError::AtLayer { index, source: Box::new(self) }
    }

    /// Strips any `AtLayer` wrapping and returns the underlying error.
    pub fn root(&self) -> &NetError {
        match self {
            NetError::AtLayer { source, .. } => source.root(),
            other => other,
        }
    }
}
