//! Learnable-parameter count for a stack of dense layers.

use crate::topology::Topology;

/// Weights plus biases for each adjacent layer pair.
///
/// Every neuron in layer `i` feeds every neuron in layer `i + 1`
/// (`prev * curr` weights) and each neuron past the input layer carries one
/// bias (`curr`). A single layer has no parameters. Returns `None` if the
/// count does not fit in `usize`.
///
/// # Examples
///
/// ```
/// use layerviz_layout::count_parameters;
///
/// assert_eq!(count_parameters(&[4, 8, 8, 8, 4]), Some(216));
/// assert_eq!(count_parameters(&[5]), Some(0));
/// assert_eq!(count_parameters(&[usize::MAX, 2]), None);
/// ```
#[must_use]
pub fn count_parameters(widths: &[usize]) -> Option<usize> {
    widths.windows(2).try_fold(0usize, |total, pair| {
        pair[0]
            .checked_mul(pair[1])
            .and_then(|weights| weights.checked_add(pair[1]))
            .and_then(|layer| total.checked_add(layer))
    })
}

/// Per-layer split of the parameter count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerParameters {
    /// Index of the receiving layer
    pub layer: usize,
    /// Incoming weights
    pub weights: usize,
    /// Biases of the receiving layer
    pub biases: usize,
}

impl LayerParameters {
    /// Weights plus biases.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.weights + self.biases
    }
}

impl Topology {
    /// Total learnable parameters of this topology.
    ///
    /// One weight per connection plus one bias per neuron outside the input
    /// layer. Bounded by the topology size limits, so it cannot overflow.
    #[must_use]
    pub fn parameter_count(&self) -> usize {
        let input = self.width(0).unwrap_or(0);
        self.connection_count() + (self.neuron_count() - input)
    }

    /// Parameter breakdown for every layer after the input layer.
    #[must_use]
    pub fn layer_parameters(&self) -> Vec<LayerParameters> {
        self.widths()
            .windows(2)
            .enumerate()
            .map(|(i, pair)| LayerParameters {
                layer: i + 1,
                weights: pair[0] * pair[1],
                biases: pair[1],
            })
            .collect()
    }
}
