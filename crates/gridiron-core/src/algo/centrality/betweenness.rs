//! Betweenness centrality: measuring brokerage and bridging.
//!
//! # Intuition
//!
//! Betweenness measures how often a node lies on shortest paths between
//! other nodes. High betweenness = broker, bridge, gatekeeper. In the
//! football network: teams whose schedule bridges otherwise separate
//! conferences.
//!
//! # Definition
//!
//! ```text
//! C_B(v) = sum_{s != v != t} sigma_st(v) / sigma_st
//! ```
//!
//! where sigma_st is the number of shortest paths from s to t and
//! sigma_st(v) the number of those passing through v.
//!
//! # Brandes' Algorithm (2001)
//!
//! Naive computation is O(V^3). Brandes showed O(VE) is possible:
//!
//! 1. Run BFS from each source s
//! 2. Track sigma_sv (shortest path counts) during the forward pass
//! 3. Accumulate dependencies delta_s(v) during the backward pass
//!
//! ```text
//! delta_s(v) = sum_{w: v in P_s(w)} (sigma_sv / sigma_sw) * (1 + delta_s(w))
//! ```
//!
//! where P_s(w) is the set of predecessors of w on shortest paths from s.
//!
//! # Normalization
//!
//! Scores are normalized by the number of ordered (directed) or unordered
//! (undirected) source/target pairs excluding v:
//!
//! ```text
//! directed:   C_B(v) / [(n-1)(n-2)]
//! undirected: C_B(v) / [(n-1)(n-2)/2]
//! ```
//!
//! # References
//!
//! - Brandes (2001). "A faster algorithm for betweenness centrality"
//! - Freeman (1977). "A set of measures of centrality based on betweenness"

use crate::{Link, NetworkGraph, Node, NodeId};
use petgraph::graph::NodeIndex;
use std::collections::{HashMap, VecDeque};

/// Compute betweenness centrality using Brandes' algorithm.
///
/// Exact (every source is expanded, nothing is sampled) and normalized.
///
/// # Complexity
///
/// - Time: O(VE) for unweighted graphs
/// - Space: O(V + E)
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn betweenness_centrality(network: &NetworkGraph) -> HashMap<NodeId, f64> {
    let graph = network.as_petgraph();
    let n = graph.node_count();
    if n < 2 {
        return graph
            .node_indices()
            .map(|idx| (graph[idx].id.clone(), 0.0))
            .collect();
    }

    let undirected = !network.is_directed();
    let mut betweenness = vec![0.0_f64; n];

    for s in graph.node_indices() {
        let (sigma, predecessors, order) = bfs_shortest_paths(graph, s, undirected);

        // Backward pass: accumulate dependencies
        let mut delta = vec![0.0_f64; n];

        // Process nodes in reverse BFS order (farthest first)
        for &w in order.iter().rev() {
            let w_idx = w.index();
            for &v in &predecessors[w_idx] {
                let v_idx = v.index();
                let coeff = sigma[v_idx] / sigma[w_idx];
                delta[v_idx] += coeff * (1.0 + delta[w_idx]);
            }
            if w != s {
                betweenness[w_idx] += delta[w_idx];
            }
        }
    }

    // Undirected accumulation visits each pair from both ends.
    if undirected {
        for b in &mut betweenness {
            *b /= 2.0;
        }
    }

    if n > 2 {
        let pairs = ((n - 1) * (n - 2)) as f64;
        let norm = if undirected { pairs / 2.0 } else { pairs };
        for b in &mut betweenness {
            *b /= norm;
        }
    }

    graph
        .node_indices()
        .map(|idx| (graph[idx].id.clone(), betweenness[idx.index()]))
        .collect()
}

/// BFS to find shortest paths from source.
///
/// Returns:
/// - sigma: number of shortest paths from s to each node
/// - predecessors: predecessors on shortest paths
/// - order: nodes in BFS order (for the backward pass)
fn bfs_shortest_paths(
    graph: &petgraph::Graph<Node, Link>,
    source: NodeIndex,
    undirected: bool,
) -> (Vec<f64>, Vec<Vec<NodeIndex>>, Vec<NodeIndex>) {
    let n = graph.node_count();
    let mut sigma = vec![0.0_f64; n];
    let mut dist = vec![-1_i32; n];
    let mut predecessors: Vec<Vec<NodeIndex>> = vec![Vec::new(); n];
    let mut order = Vec::with_capacity(n);

    sigma[source.index()] = 1.0;
    dist[source.index()] = 0;

    let mut queue = VecDeque::new();
    queue.push_back(source);

    while let Some(v) = queue.pop_front() {
        order.push(v);
        let v_idx = v.index();
        let v_dist = dist[v_idx];

        let neighbors: Vec<NodeIndex> = if undirected {
            graph.neighbors_undirected(v).collect()
        } else {
            graph
                .neighbors_directed(v, petgraph::Direction::Outgoing)
                .collect()
        };

        for w in neighbors {
            let w_idx = w.index();

            if dist[w_idx] < 0 {
                dist[w_idx] = v_dist + 1;
                queue.push_back(w);
            }

            if dist[w_idx] == v_dist + 1 {
                sigma[w_idx] += sigma[v_idx];
                predecessors[w_idx].push(v);
            }
        }
    }

    (sigma, predecessors, order)
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_betweenness_path_center() {
        // A - B - C: the only s/t pair not touching B routes through B.
        let g = undirected(&["A", "B", "C"], &[("A", "B"), ("B", "C")]);
        let scores = betweenness_centrality(&g);

        assert!((scores[&NodeId::from("B")] - 1.0).abs() < 1e-12);
        assert_eq!(scores[&NodeId::from("A")], 0.0);
        assert_eq!(scores[&NodeId::from("C")], 0.0);
    }

    #[test]
    fn test_betweenness_star_hub() {
        let g = undirected(
            &["Hub", "A", "B", "C"],
            &[("Hub", "A"), ("Hub", "B"), ("Hub", "C")],
        );
        let scores = betweenness_centrality(&g);

        // Every one of the 3 leaf pairs routes through the hub.
        assert!((scores[&NodeId::from("Hub")] - 1.0).abs() < 1e-12);
        assert_eq!(scores[&NodeId::from("A")], 0.0);
    }

    #[test]
    fn test_betweenness_bridge() {
        // Two pairs joined by a bridge: A - B - C - D
        let g = undirected(&["A", "B", "C", "D"], &[("A", "B"), ("B", "C"), ("C", "D")]);
        let scores = betweenness_centrality(&g);

        let a = scores[&NodeId::from("A")];
        let b = scores[&NodeId::from("B")];
        // B carries A-C and A-D: 2 of the 3 pairs excluding B.
        assert!((b - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(a, 0.0);
    }

    #[test]
    fn test_betweenness_directed_line() {
        let mut g = NetworkGraph::new(true);
        for id in ["A", "B", "C"] {
            g.add_node(Node::new(id));
        }
        g.add_edge(&"A".into(), &"B".into(), Link::new()).unwrap();
        g.add_edge(&"B".into(), &"C".into(), Link::new()).unwrap();

        let scores = betweenness_centrality(&g);
        // Ordered pairs excluding B: (A,C) and (C,A); only A->C exists.
        assert!((scores[&NodeId::from("B")] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_betweenness_split_paths() {
        // Diamond: A - B - D and A - C - D; B and C each carry half of A-D.
        let g = undirected(
            &["A", "B", "C", "D"],
            &[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")],
        );
        let scores = betweenness_centrality(&g);

        assert!((scores[&NodeId::from("B")] - 1.0 / 6.0).abs() < 1e-12);
        assert!((scores[&NodeId::from("B")] - scores[&NodeId::from("C")]).abs() < 1e-12);
    }

    #[test]
    fn test_betweenness_tiny_graphs() {
        let g = undirected(&["A", "B"], &[("A", "B")]);
        let scores = betweenness_centrality(&g);
        assert_eq!(scores[&NodeId::from("A")], 0.0);

        assert!(betweenness_centrality(&NetworkGraph::new(false)).is_empty());
    }
}
