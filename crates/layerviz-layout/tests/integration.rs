//! Integration tests for layerviz-layout.
//!
//! Property tests check the layout invariants for arbitrary topologies.

use layerviz_layout::{compute_layout, count_parameters, Topology};
use proptest::prelude::*;

#[test]
fn test_reference_network_parameters() {
    let t = Topology::new(vec![4, 8, 8, 8, 4]).unwrap();
    assert_eq!(t.parameter_count(), 216);
    assert_eq!(count_parameters(t.widths()), Some(216));
}

#[test]
fn test_single_layer_layout_and_count() {
    let t = Topology::new(vec![5]).unwrap();
    let layout = compute_layout(&t, 3.0).unwrap();

    assert_eq!(t.parameter_count(), 0);
    assert_eq!(layout.neuron_count(), 5);
    for (j, p) in layout.positions().enumerate() {
        assert_eq!(p.x, 0.0);
        assert_eq!(p.y, j as f32);
    }
}

#[test]
fn test_connection_count_matches_topology() {
    let t = Topology::new(vec![2, 3]).unwrap();
    let layout = compute_layout(&t, 3.0).unwrap();
    assert_eq!(layout.connections().count(), 6);
    assert_eq!(t.connection_count(), 6);
}

proptest! {
    #[test]
    fn prop_layout_has_one_position_per_neuron(
        widths in prop::collection::vec(0usize..32, 1..10),
        spacing in 0.1f32..10.0
    ) {
        let t = Topology::new(widths.clone()).unwrap();
        let layout = compute_layout(&t, spacing).unwrap();
        prop_assert_eq!(layout.neuron_count(), widths.iter().sum::<usize>());
        prop_assert_eq!(layout.layer_count(), widths.len());
        for (i, layer) in layout.layers().iter().enumerate() {
            prop_assert_eq!(layer.len(), widths[i]);
        }
    }

    #[test]
    fn prop_layers_share_x(
        widths in prop::collection::vec(0usize..32, 1..10),
        spacing in 0.1f32..10.0
    ) {
        let t = Topology::new(widths).unwrap();
        let layout = compute_layout(&t, spacing).unwrap();
        for (i, layer) in layout.layers().iter().enumerate() {
            let x = i as f32 * spacing;
            prop_assert!(layer.iter().all(|p| p.x == x));
        }
    }

    #[test]
    fn prop_layers_centered_on_widest(
        widths in prop::collection::vec(0usize..32, 1..10),
        spacing in 0.1f32..10.0
    ) {
        let t = Topology::new(widths.clone()).unwrap();
        let layout = compute_layout(&t, spacing).unwrap();
        let max = t.max_width();
        for (i, layer) in layout.layers().iter().enumerate() {
            let offset = (max - widths[i]) as f32 / 2.0;
            for (j, p) in layer.iter().enumerate() {
                prop_assert_eq!(p.y, j as f32 + offset);
            }
            if let (Some(first), Some(last)) = (layer.first(), layer.last()) {
                let mid = (first.y + last.y) / 2.0;
                prop_assert!((mid - (max as f32 - 1.0) / 2.0).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn prop_connections_are_dense(widths in prop::collection::vec(0usize..16, 1..6)) {
        let t = Topology::new(widths).unwrap();
        let layout = compute_layout(&t, 3.0).unwrap();
        prop_assert_eq!(layout.connections().count(), t.connection_count());
        prop_assert!(layout.connections().all(|c| c.to.x - c.from.x == 3.0));
    }
}
