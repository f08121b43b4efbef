use crate::error::{NetError, Result};
use crate::layers::layer::Forward;

/// Passes the raw input through, optionally appending the bias unit.
///
/// Has no activation function and no weights.
#[derive(Debug, Clone, PartialEq)]
pub struct InputLayer {
    neuron_count: usize,
    provides_bias: bool,
}

impl InputLayer {
    pub fn new(neuron_count: usize, provides_bias: bool) -> Result<InputLayer> {
        if neuron_count == 0 {
            return Err(NetError::ZeroNeurons { what: "input layer" });
        }
        // output_width must stay representable
        if neuron_count.checked_add(usize::from(provides_bias)).is_none() {
            return Err(NetError::TooLarge { what: "input layer" });
        }
        Ok(InputLayer { neuron_count, provides_bias })
    }
}

impl Forward for InputLayer {
    fn neuron_count(&self) -> usize {
        self.neuron_count
    }

    fn appends_bias(&self) -> bool {
        self.provides_bias
    }

    fn output(&self, input: &[f64]) -> Result<Vec<f64>> {
        if input.len() != self.neuron_count {
            return Err(NetError::ShapeMismatch {
                expected: self.neuron_count,
                got: input.len(),
            });
        }
        let mut output = Vec::with_capacity(self.output_width());
        output.extend_from_slice(input);
        if self.provides_bias {
            output.push(1.0);
        }
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_bias_unit() {
        let layer = InputLayer::new(2, true).unwrap();
        assert_eq!(layer.output(&[0.25, -3.0]).unwrap(), vec![0.25, -3.0, 1.0]);
    }

    #[test]
    fn passes_through_without_bias() {
        let layer = InputLayer::new(3, false).unwrap();
        assert_eq!(layer.output(&[1.0, 2.0, 3.0]).unwrap(), vec![1.0, 2.0, 3.0]);
        assert_eq!(layer.output_width(), 3);
    }

    #[test]
    fn bias_is_exactly_one_for_any_input() {
        let layer = InputLayer::new(1, true).unwrap();
        for x in [-1e9, 0.0, 0.5, f64::MAX] {
            assert_eq!(*layer.output(&[x]).unwrap().last().unwrap(), 1.0);
        }
    }

    #[test]
    fn rejects_short_and_long_input() {
        let layer = InputLayer::new(2, true).unwrap();
        for input in [vec![1.0], vec![1.0, 2.0, 3.0]] {
            let err = layer.output(&input).unwrap_err();
            assert!(matches!(err, NetError::ShapeMismatch { expected: 2, got } if got == input.len()));
        }
    }

    #[test]
    fn rejects_width_that_overflows_with_bias() {
        assert!(matches!(
            InputLayer::new(usize::MAX, true),
            Err(NetError::TooLarge { .. })
        ));
        assert_eq!(InputLayer::new(usize::MAX, false).unwrap().output_width(), usize::MAX);
    }

    #[test]
    fn rejects_zero_neurons() {
        assert!(matches!(
            InputLayer::new(0, true),
            Err(NetError::ZeroNeurons { .. })
        ));
    }
}
