//! Network topology: the ordered per-layer neuron counts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Most neurons a topology may hold across all layers.
pub const MAX_NEURONS: usize = 1 << 16;

/// Most dense connections a topology may hold across all layer pairs.
pub const MAX_CONNECTIONS: usize = 1 << 22;

/// Ordered neuron counts, one entry per layer.
///
/// A topology always has at least one layer. Zero-width layers are legal and
/// simply contribute no neurons. Totals are bounded by [`MAX_NEURONS`] and
/// [`MAX_CONNECTIONS`], so every count derived from a topology fits in
/// `usize`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct Topology {
    widths: Vec<usize>,
}

impl Topology {
    /// Create a topology from per-layer widths.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::Empty`] if `widths` has no layers,
    /// [`TopologyError::TooManyNeurons`] if the layers hold more than
    /// [`MAX_NEURONS`] neurons and [`TopologyError::TooManyConnections`] if
    /// adjacent layers need more than [`MAX_CONNECTIONS`] connections.
    pub fn new(widths: Vec<usize>) -> Result<Self, TopologyError> {
        if widths.is_empty() {
            return Err(TopologyError::Empty);
        }

        let neurons = widths
            .iter()
            .try_fold(0usize, |total, &w| total.checked_add(w));
        if !neurons.is_some_and(|n| n <= MAX_NEURONS) {
            return Err(TopologyError::TooManyNeurons { limit: MAX_NEURONS });
        }

        let connections = widths.windows(2).try_fold(0usize, |total, pair| {
            pair[0]
                .checked_mul(pair[1])
                .and_then(|c| total.checked_add(c))
        });
        if !connections.is_some_and(|c| c <= MAX_CONNECTIONS) {
            return Err(TopologyError::TooManyConnections {
                limit: MAX_CONNECTIONS,
            });
        }

        Ok(Self { widths })
    }

    /// Per-layer widths.
    #[must_use]
    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    /// Width of layer `index`, if it exists.
    #[must_use]
    pub fn width(&self, index: usize) -> Option<usize> {
        self.widths.get(index).copied()
    }

    /// Number of layers.
    #[must_use]
    pub fn layer_count(&self) -> usize {
        self.widths.len()
    }

    /// Width of the widest layer.
    #[must_use]
    pub fn max_width(&self) -> usize {
        self.widths.iter().copied().max().unwrap_or(0)
    }

    /// Total neurons across all layers.
    #[must_use]
    pub fn neuron_count(&self) -> usize {
        self.widths.iter().sum()
    }

    /// Total dense connections between adjacent layers.
    #[must_use]
    pub fn connection_count(&self) -> usize {
        self.widths.windows(2).map(|w| w[0] * w[1]).sum()
    }
}

impl TryFrom<Vec<usize>> for Topology {
    type Error = TopologyError;

    fn try_from(widths: Vec<usize>) -> Result<Self, Self::Error> {
        Self::new(widths)
    }
}

impl From<Topology> for Vec<usize> {
    fn from(topology: Topology) -> Self {
        topology.widths
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, w) in self.widths.iter().enumerate() {
            if i > 0 {
                f.write_str("-")?;
            }
            write!(f, "{w}")?;
        }
        Ok(())
    }
}

/// Errors raised while building a topology or its layout.
#[derive(Debug, Clone, PartialEq)]
pub enum TopologyError {
    /// No layers were given
    Empty,
    /// Layer spacing was zero, negative or not finite
    InvalidSpacing(f32),
    /// More neurons than [`MAX_NEURONS`]
    TooManyNeurons {
        /// The neuron limit
        limit: usize,
    },
    /// More connections than [`MAX_CONNECTIONS`]
    TooManyConnections {
        /// The connection limit
        limit: usize,
    },
}

impl fmt::Display for TopologyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "topology needs at least one layer"),
            Self::InvalidSpacing(s) => {
                write!(f, "layer spacing must be a positive number (got {s})")
            }
            Self::TooManyNeurons { limit } => {
                write!(f, "topology has more than {limit} neurons")
            }
            Self::TooManyConnections { limit } => {
                write!(f, "topology has more than {limit} connections")
            }
        }
    }
}

impl std::error::Error for TopologyError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topology_rejects_empty() {
        assert_eq!(Topology::new(vec![]), Err(TopologyError::Empty));
    }

    #[test]
    fn test_topology_rejects_too_many_neurons() {
        let err = Topology::new(vec![usize::MAX]).unwrap_err();
        assert_eq!(err, TopologyError::TooManyNeurons { limit: MAX_NEURONS });
        assert!(Topology::new(vec![usize::MAX, usize::MAX]).is_err());
        assert!(Topology::new(vec![MAX_NEURONS, 1]).is_err());
        assert!(Topology::new(vec![MAX_NEURONS]).is_ok());
    }

    #[test]
    fn test_topology_rejects_too_many_connections() {
        let side = 1 << 11;
        assert!(Topology::new(vec![side, side]).is_ok());
        assert_eq!(
            Topology::new(vec![side, side + 1]).unwrap_err(),
            TopologyError::TooManyConnections {
                limit: MAX_CONNECTIONS
            }
        );
        assert_eq!(
            Topology::new(vec![side, side, side]).unwrap_err(),
            TopologyError::TooManyConnections {
                limit: MAX_CONNECTIONS
            }
        );
    }

    #[test]
    fn test_deserialize_applies_limits() {
        assert!(serde_json::from_str::<Topology>("[65537]").is_err());
        assert!(serde_json::from_str::<Topology>("[]").is_err());
        let t: Topology = serde_json::from_str("[2, 3]").unwrap();
        assert_eq!(t.widths(), &[2, 3]);
    }

    #[test]
    fn test_topology_accessors() {
        let t = Topology::new(vec![4, 8, 8, 8, 4]).unwrap();
        assert_eq!(t.layer_count(), 5);
        assert_eq!(t.max_width(), 8);
        assert_eq!(t.neuron_count(), 32);
        assert_eq!(t.connection_count(), 32 + 64 + 64 + 32);
        assert_eq!(t.width(1), Some(8));
        assert_eq!(t.width(5), None);
    }

    #[test]
    fn test_topology_zero_width_layer() {
        let t = Topology::new(vec![3, 0, 2]).unwrap();
        assert_eq!(t.neuron_count(), 5);
        assert_eq!(t.connection_count(), 0);
    }

    #[test]
    fn test_topology_display() {
        let t = Topology::new(vec![4, 8, 4]).unwrap();
        assert_eq!(t.to_string(), "4-8-4");
        assert_eq!(Topology::new(vec![5]).unwrap().to_string(), "5");
    }

    #[test]
    fn test_topology_error_display() {
        assert_eq!(
            TopologyError::Empty.to_string(),
            "topology needs at least one layer"
        );
        assert!(TopologyError::InvalidSpacing(-1.0)
            .to_string()
            .contains("got -1"));
        assert_eq!(
            TopologyError::TooManyNeurons { limit: 4 }.to_string(),
            "topology has more than 4 neurons"
        );
    }
}
