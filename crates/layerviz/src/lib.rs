//! Schematic diagrams of dense neural network topologies.
//!
//! Given neurons per layer, layerviz positions every neuron, draws every
//! connection between adjacent layers and every neuron onto a [`Canvas`],
//! optionally labels them with illustrative weights and biases, and exports
//! the result as SVG. The learnable-parameter count of the equivalent dense
//! network is reported alongside.
//!
//! # Example
//!
//! ```
//! use layerviz::{Diagram, FixedSampler, RenderStyle, Topology};
//!
//! let topology = Topology::new(vec![2, 3]).unwrap();
//! let diagram = Diagram::render(
//!     &topology,
//!     &RenderStyle::default(),
//!     &mut FixedSampler::midpoint(),
//! )
//! .unwrap();
//!
//! assert_eq!(diagram.stats().connections, 6);
//! assert_eq!(diagram.stats().neurons, 5);
//! assert_eq!(diagram.parameters(), 9);
//! ```
//!
//! The weights and biases shown are random placeholders, not parameters of
//! any trained model.

pub mod config;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod render;
pub mod sampler;
pub mod style;

pub use config::DiagramConfig;
pub use error::{ConfigError, Error, ExportError, Result};
pub use pipeline::{run, Diagram, RunReport};
pub use render::{render, Label, RenderStats};
pub use sampler::{FixedSampler, RngSampler, Sampler};
pub use style::RenderStyle;

pub use layerviz_core::{
    to_svg, Canvas, Color, DrawCommand, Point, RecordingCanvas, SvgOptions, TextStyle,
};
pub use layerviz_layout::{compute_layout, count_parameters, Layout, Topology, TopologyError};
