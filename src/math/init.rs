use rand::prelude::*;
use rand::rngs::StdRng;
use serde::{Serialize, Deserialize};
use std::f64::consts::PI;

/// How a fully-connected layer's weight table is (re)filled.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Initializer {
    /// Every weight set to `0.0`.
    #[default]
    Zeros,
    /// Uniform samples on `[low, high)`.
    Uniform { low: f64, high: f64 },
    /// Xavier (Glorot): N(0, sqrt(1 / fan_in)), fan_in being the layer's input width.
    /// Suited to Sigmoid/Tanh/Identity layers.
    Xavier,
}

impl Initializer {
    /// Fills `weights` in place. `fan_in` is the width of the input the layer receives.
    pub fn fill(&self, weights: &mut [f64], fan_in: usize, rng: &mut StdRng) {
        match *self {
            Initializer::Zeros => weights.fill(0.0),
            Initializer::Uniform { low, high } => {
                for w in weights.iter_mut() {
                    *w = low + (high - low) * rng.gen::<f64>();
                }
            }
            Initializer::Xavier => {
                let std_dev = (1.0 / fan_in.max(1) as f64).sqrt();
                for w in weights.iter_mut() {
                    *w = sample_standard_normal(rng) * std_dev;
                }
            }
        }
    }
}

/// Samples a single value from N(0, 1) using the Box-Muller transform.
fn sample_standard_normal(rng: &mut StdRng) -> f64 {
    // uniform on (0, 1] to avoid log(0)
    let u1: f64 = 1.0 - rng.gen::<f64>();
    let u2: f64 = 1.0 - rng.gen::<f64>();
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}
