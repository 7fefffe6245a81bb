//! Eigenvector centrality: importance via important neighbors.
//!
//! # Intuition
//!
//! A node is important if it is connected to other important nodes. The
//! recursive definition resolves to the dominant eigenvector of the
//! adjacency matrix.
//!
//! # Definition
//!
//! ```text
//! x_v = (1/lambda) * sum_{u -> v} x_u
//! ```
//!
//! Equivalently Ax = lambda x, with lambda the largest eigenvalue.
//!
//! # Algorithm: Power Iteration
//!
//! 1. Initialize x uniformly
//! 2. Repeat: x' = x + A^T x, then normalize x' to unit length
//! 3. Stop when the L1 change drops below n * tolerance
//!
//! The identity shift keeps periodic structures (bipartite graphs) from
//! oscillating forever. Convergence still is not guaranteed for every
//! graph within a finite budget, and the measure is undefined on a graph
//! with no edges at all; both cases are reported as errors the caller is
//! expected to surface as a warning rather than a failure of the whole
//! analysis pass.
//!
//! # References
//!
//! - Bonacich (1972). "Factoring and weighting approaches to status scores"
//! - Bonacich (1987). "Power and centrality: A family of measures"

use crate::{Error, NetworkGraph, NodeId, Result};
use std::collections::HashMap;

/// Configuration for eigenvector centrality.
#[derive(Debug, Clone, Copy)]
pub struct EigenvectorConfig {
    /// Maximum iterations before giving up.
    pub max_iterations: usize,
    /// Convergence tolerance on the per-node L1 change.
    pub tolerance: f64,
}

impl Default for EigenvectorConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            tolerance: 1e-6,
        }
    }
}

/// Compute eigenvector centrality via power iteration.
///
/// Scores are L2-normalized. Errors with [`Error::NotApplicable`] when the
/// graph has nodes but no edges, and [`Error::NotConverged`] when the
/// iteration budget runs out. An empty graph yields an empty mapping.
///
/// # Complexity
///
/// - Time: O(E * iterations)
/// - Space: O(V)
#[allow(clippy::cast_precision_loss)]
pub fn eigenvector_centrality(
    network: &NetworkGraph,
    config: EigenvectorConfig,
) -> Result<HashMap<NodeId, f64>> {
    let graph = network.as_petgraph();
    let n = graph.node_count();
    if n == 0 {
        return Ok(HashMap::new());
    }
    if graph.edge_count() == 0 {
        return Err(Error::NotApplicable(
            "eigenvector centrality is undefined on a graph with no edges".to_string(),
        ));
    }

    let undirected = !network.is_directed();
    let mut scores = vec![1.0 / (n as f64).sqrt(); n];
    let mut new_scores = vec![0.0_f64; n];

    for _iter in 0..config.max_iterations {
        // x' = x + A^T x: each node absorbs its predecessors' scores.
        new_scores.copy_from_slice(&scores);

        for idx in graph.node_indices() {
            let predecessors: Vec<_> = if undirected {
                graph.neighbors_undirected(idx).collect()
            } else {
                graph
                    .neighbors_directed(idx, petgraph::Direction::Incoming)
                    .collect()
            };

            for pred in predecessors {
                new_scores[idx.index()] += scores[pred.index()];
            }
        }

        // Normalize to unit length
        let norm: f64 = new_scores.iter().map(|x| x * x).sum::<f64>().sqrt();
        if norm > 0.0 {
            for s in &mut new_scores {
                *s /= norm;
            }
        }

        let diff: f64 = scores
            .iter()
            .zip(new_scores.iter())
            .map(|(old, new)| (old - new).abs())
            .sum();

        std::mem::swap(&mut scores, &mut new_scores);

        if diff < n as f64 * config.tolerance {
            return Ok(graph
                .node_indices()
                .map(|idx| (graph[idx].id.clone(), scores[idx.index()]))
                .collect());
        }
    }

    Err(Error::NotConverged {
        iterations: config.max_iterations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Link, Node};

    fn undirected(nodes: &[&str], edges: &[(&str, &str)]) -> NetworkGraph {
        let mut g = NetworkGraph::new(false);
        for id in nodes {
            g.add_node(Node::new(*id));
        }
        for (s, t) in edges {
            g.add_edge(&(*s).into(), &(*t).into(), Link::new()).unwrap();
        }
        g
    }

    #[test]
    fn test_eigenvector_triangle_symmetric() {
        let g = undirected(&["A", "B", "C"], &[("A", "B"), ("B", "C"), ("C", "A")]);
        let scores = eigenvector_centrality(&g, EigenvectorConfig::default()).unwrap();

        let a = scores[&NodeId::from("A")];
        let b = scores[&NodeId::from("B")];
        let c = scores[&NodeId::from("C")];
        assert!((a - b).abs() < 1e-6, "A={a}, B={b} should be equal");
        assert!((b - c).abs() < 1e-6, "B={b}, C={c} should be equal");
    }

    #[test]
    fn test_eigenvector_star_hub_dominates() {
        let g = undirected(
            &["Hub", "A", "B", "C"],
            &[("Hub", "A"), ("Hub", "B"), ("Hub", "C")],
        );
        let scores = eigenvector_centrality(&g, EigenvectorConfig::default()).unwrap();

        let hub = scores[&NodeId::from("Hub")];
        let a = scores[&NodeId::from("A")];
        assert!(hub > a, "Hub={hub} should outrank leaf A={a}");
    }

    #[test]
    fn test_eigenvector_unit_length() {
        let g = undirected(&["A", "B"], &[("A", "B")]);
        let scores = eigenvector_centrality(&g, EigenvectorConfig::default()).unwrap();

        let norm: f64 = scores.values().map(|x| x * x).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-6, "scores should be unit length: {norm}");
    }

    #[test]
    fn test_eigenvector_no_edges_not_applicable() {
        let g = undirected(&["A", "B", "C", "D", "E"], &[]);
        let err = eigenvector_centrality(&g, EigenvectorConfig::default()).unwrap_err();
        assert!(matches!(err, Error::NotApplicable(_)));
    }

    #[test]
    fn test_eigenvector_empty_graph_is_empty_ok() {
        let g = NetworkGraph::new(false);
        let scores = eigenvector_centrality(&g, EigenvectorConfig::default()).unwrap();
        assert!(scores.is_empty());
    }

    #[test]
    fn test_eigenvector_budget_exhaustion() {
        let g = undirected(&["A", "B"], &[("A", "B")]);
        let config = EigenvectorConfig {
            max_iterations: 0,
            tolerance: 1e-6,
        };
        let err = eigenvector_centrality(&g, config).unwrap_err();
        assert!(matches!(err, Error::NotConverged { iterations: 0 }));
    }

    #[test]
    fn test_eigenvector_bipartite_converges() {
        // A 4-cycle is bipartite; the identity shift must still settle it.
        let g = undirected(
            &["A", "B", "C", "D"],
            &[("A", "B"), ("B", "C"), ("C", "D"), ("D", "A")],
        );
        let scores = eigenvector_centrality(&g, EigenvectorConfig::default()).unwrap();
        let a = scores[&NodeId::from("A")];
        let b = scores[&NodeId::from("B")];
        assert!((a - b).abs() < 1e-4, "cycle should be uniform: A={a}, B={b}");
    }
}
