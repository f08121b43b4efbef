use serde::{Deserialize, Serialize};

/// Optional annotations stored alongside a saved network.
/// All fields are Option<> so models saved without them deserialize cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ModelMetadata {
    pub description: Option<String>,
    /// Names of the input units, in input order.
    pub input_labels: Option<Vec<String>>,
    /// Names of the output neurons, in output order.
    pub output_labels: Option<Vec<String>>,
}
