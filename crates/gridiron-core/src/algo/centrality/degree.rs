//! Degree centrality: the simplest centrality measure.
//!
//! # Intuition
//!
//! Degree centrality counts connections. In the football network it is the
//! number of games a team played; in a social network, popularity.
//!
//! # Normalization
//!
//! Raw degree depends on graph size. Normalized degree:
//!
//! ```text
//! C_D(v) = deg(v) / (n - 1)
//! ```
//!
//! where n is the number of nodes. For directed graphs, deg is the total
//! (in + out) degree, so values may exceed 1.
//!
//! # Limitations
//!
//! - Ignores network structure beyond immediate neighbors
//! - For structural importance, use eigenvector or betweenness centrality

use crate::{NetworkGraph, NodeId};
use std::collections::HashMap;

/// Compute degree centrality for all nodes.
///
/// Scores are total degree divided by (n - 1); all zeros when n <= 1.
///
/// # Example
///
/// ```
/// use gridiron_core::algo::centrality::degree_centrality;
/// use gridiron_core::{Link, NetworkGraph, Node, NodeId};
///
/// let mut g = NetworkGraph::new(false);
/// g.add_node(Node::new("A"));
/// g.add_node(Node::new("B"));
/// g.add_node(Node::new("C"));
/// g.add_edge(&"A".into(), &"B".into(), Link::new()).unwrap();
/// g.add_edge(&"B".into(), &"C".into(), Link::new()).unwrap();
///
/// let scores = degree_centrality(&g);
/// assert_eq!(scores[&NodeId::from("B")], 1.0);
/// assert_eq!(scores[&NodeId::from("A")], 0.5);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn degree_centrality(network: &NetworkGraph) -> HashMap<NodeId, f64> {
    let graph = network.as_petgraph();
    let n = graph.node_count();

    graph
        .node_indices()
        .map(|idx| {
            let score = if n > 1 {
                network.total_degree(idx) as f64 / (n - 1) as f64
            } else {
                0.0
            };
            (graph[idx].id.clone(), score)
        })
        .collect()
}
