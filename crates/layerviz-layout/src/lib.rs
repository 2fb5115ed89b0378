//! Layout engine for layerviz.
//!
//! Turns a [`Topology`] (neurons per layer) into absolute neuron positions and
//! counts the learnable parameters of the equivalent dense network.

mod engine;
mod params;
mod topology;

pub use engine::{compute_layout, Connection, Layout};
pub use params::{count_parameters, LayerParameters};
pub use topology::{Topology, TopologyError, MAX_CONNECTIONS, MAX_NEURONS};
