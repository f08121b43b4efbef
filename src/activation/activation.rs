use serde::{Serialize, Deserialize};

/// Element-wise nonlinearity applied by a fully-connected layer.
///
/// Every variant can express its derivative in terms of its own output, which
/// is what `derivative_from_output` relies on.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum ActivationFunction {
    #[default]
    Sigmoid,
    Tanh,
    ReLU,
    Identity,
    LeakyReLU { alpha: f64 },
    Elu { alpha: f64 },
}

impl ActivationFunction {
    pub fn activate(&self, x: f64) -> f64 {
        match self {
            // exp(-x) overflows to +inf for very negative x, which still yields 0.0
            ActivationFunction::Sigmoid => 1.0 / (1.0 + (-x).exp()),
            ActivationFunction::Tanh => x.tanh(),
            ActivationFunction::ReLU => if x > 0.0 { x } else { 0.0 },
            ActivationFunction::Identity => x,
            ActivationFunction::LeakyReLU { alpha } => if x > 0.0 { x } else { alpha * x },
            ActivationFunction::Elu { alpha } => {
                if x > 0.0 { x } else { alpha * x.exp_m1() }
            }
        }
    }

    /// Derivative of the activation, given `y = self.activate(x)` rather than `x`.
    ///
    /// No range check is made on `y`. Passing a value the activation could not
    /// have produced returns a well-defined but meaningless number.
    pub fn derivative_from_output(&self, y: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => y * (1.0 - y),
            ActivationFunction::Tanh => 1.0 - y * y,
            ActivationFunction::ReLU => if y > 0.0 { 1.0 } else { 0.0 },
            ActivationFunction::Identity => 1.0,
            ActivationFunction::LeakyReLU { alpha } => if y > 0.0 { 1.0 } else { *alpha },
            ActivationFunction::Elu { alpha } => if y > 0.0 { 1.0 } else { y + alpha },
        }
    }
}
