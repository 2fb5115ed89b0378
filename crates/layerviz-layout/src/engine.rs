//! Layout engine: absolute neuron positions for a topology.

use layerviz_core::Point;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::topology::{Topology, TopologyError};

/// Computed neuron positions, indexed by layer then by neuron.
///
/// Layer `i` sits at `x = i * spacing`. Within a layer neurons are one unit
/// apart vertically and the layer is centered on the widest one, which spans
/// `y` in `[0, max_width)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    layers: Vec<Vec<Point>>,
    spacing: f32,
    max_width: usize,
}

/// One dense connection between adjacent layers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    /// Index of the source layer; the target is `layer + 1`.
    pub layer: usize,
    /// Neuron index within the source layer
    pub source: usize,
    /// Neuron index within the target layer
    pub target: usize,
    /// Source position
    pub from: Point,
    /// Target position
    pub to: Point,
}

impl Layout {
    /// All layers in order.
    #[must_use]
    pub fn layers(&self) -> &[Vec<Point>] {
        &self.layers
    }

    /// Positions of layer `index`, if it exists.
    #[must_use]
    pub fn layer(&self, index: usize) -> Option<&[Point]> {
        self.layers.get(index).map(Vec::as_slice)
    }

    /// Number of layers.
    #[must_use]
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Total number of positioned neurons.
    #[must_use]
    pub fn neuron_count(&self) -> usize {
        self.layers.iter().map(Vec::len).sum()
    }

    /// Horizontal distance between adjacent layers.
    #[must_use]
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Width of the widest layer.
    #[must_use]
    pub fn max_width(&self) -> usize {
        self.max_width
    }

    /// Every position, layer by layer.
    pub fn positions(&self) -> impl Iterator<Item = Point> + '_ {
        self.layers.iter().flatten().copied()
    }

    /// Every dense connection, ordered by layer, then source, then target.
    pub fn connections(&self) -> impl Iterator<Item = Connection> + '_ {
        self.layers
            .windows(2)
            .enumerate()
            .flat_map(|(layer, pair)| {
                let (sources, targets) = (&pair[0], &pair[1]);
                sources.iter().enumerate().flat_map(move |(source, &from)| {
                    targets
                        .iter()
                        .enumerate()
                        .map(move |(target, &to)| Connection {
                            layer,
                            source,
                            target,
                            from,
                            to,
                        })
                })
            })
    }
}

/// Compute absolute neuron positions for `topology`.
///
/// Deterministic: the same topology and spacing always produce the same
/// layout.
///
/// # Errors
///
/// Returns [`TopologyError::InvalidSpacing`] if `spacing` is not a finite
/// positive number.
///
/// # Examples
///
/// ```
/// use layerviz_layout::{compute_layout, Topology};
///
/// let topology = Topology::new(vec![2, 4]).unwrap();
/// let layout = compute_layout(&topology, 3.0).unwrap();
///
/// // The narrow layer is centered against the wide one.
/// let first = layout.layer(0).unwrap();
/// assert_eq!(first[0].y, 1.0);
/// assert_eq!(layout.layer(1).unwrap()[0].x, 3.0);
/// ```
pub fn compute_layout(topology: &Topology, spacing: f32) -> Result<Layout, TopologyError> {
    if !spacing.is_finite() || spacing <= 0.0 {
        return Err(TopologyError::InvalidSpacing(spacing));
    }

    let max_width = topology.max_width();
    let layers: Vec<Vec<Point>> = topology
        .widths()
        .iter()
        .enumerate()
        .map(|(i, &n)| {
            let x = i as f32 * spacing;
            let y_offset = (max_width - n) as f32 / 2.0;
            (0..n).map(|j| Point::new(x, j as f32 + y_offset)).collect()
        })
        .collect();

    debug!(
        layers = layers.len(),
        max_width,
        spacing,
        neurons = topology.neuron_count(),
        "computed layout"
    );

    Ok(Layout {
        layers,
        spacing,
        max_width,
    })
}
