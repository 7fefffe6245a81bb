//! Subset selection: deriving the working graph from the full graph.
//!
//! Filters are pure functions from a graph to an owned induced subgraph.
//! They do not compose: `HighDegree` measures degree against whatever
//! graph it is handed, and the dashboard always hands it the full session
//! graph. Chaining filters would change the observable thresholds, so the
//! pipeline never does.

use crate::algo::components::weakly_connected_components;
use crate::{NetworkGraph, NodeId};
use std::collections::HashSet;
use std::fmt;

/// The subset rules a user can pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// The whole graph, copied.
    Full,
    /// The connected (or weakly connected, when directed) component with
    /// the most nodes.
    LargestComponent,
    /// Nodes whose total degree in the input graph meets a threshold.
    HighDegree {
        /// Minimum total degree to keep a node.
        min_degree: usize,
    },
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterMode::Full => write!(f, "full graph"),
            FilterMode::LargestComponent => write!(f, "largest connected component"),
            FilterMode::HighDegree { min_degree } => {
                write!(f, "high-degree subgraph (min degree {})", min_degree)
            }
        }
    }
}

/// Derive the working graph for a filter mode.
///
/// Always returns an independent copy; the input graph is never aliased
/// or mutated. A zero-node input yields a zero-node output for every
/// mode.
#[must_use]
pub fn select(network: &NetworkGraph, mode: FilterMode) -> NetworkGraph {
    match mode {
        FilterMode::Full => network.clone(),
        FilterMode::LargestComponent => {
            let components = weakly_connected_components(network);
            match largest(&components) {
                Some(component) => {
                    let keep: HashSet<NodeId> = component.iter().cloned().collect();
                    network.induced_subgraph(&keep)
                }
                // No components at all: an empty copy.
                None => network.induced_subgraph(&HashSet::new()),
            }
        }
        FilterMode::HighDegree { min_degree } => {
            let keep: HashSet<NodeId> = network
                .node_ids()
                .filter(|id| network.degree_of(id) >= min_degree)
                .cloned()
                .collect();
            network.induced_subgraph(&keep)
        }
    }
}

/// The biggest component; ties go to the earliest-enumerated one.
fn largest(components: &[Vec<NodeId>]) -> Option<&Vec<NodeId>> {
    let mut best: Option<&Vec<NodeId>> = None;
    for component in components {
        if best.is_none_or(|b| component.len() > b.len()) {
            best = Some(component);
        }
    }
    best
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
    fn test_full_is_structural_copy() {
        let g = undirected(&["A", "B", "C"], &[("A", "B")]);
        let copy = select(&g, FilterMode::Full);

        assert_eq!(copy.node_count(), g.node_count());
        assert_eq!(copy.edge_count(), g.edge_count());
        assert_eq!(copy.is_directed(), g.is_directed());
        let ids: Vec<_> = copy.node_ids().cloned().collect();
        let original: Vec<_> = g.node_ids().cloned().collect();
        assert_eq!(ids, original);
    }

    #[test]
    fn test_full_copy_is_independent() {
        let g = undirected(&["A", "B"], &[("A", "B")]);
        let mut copy = select(&g, FilterMode::Full);
        copy.add_node(Node::new("C"));

        assert_eq!(g.node_count(), 2);
        assert_eq!(copy.node_count(), 3);
    }

    #[test]
    fn test_largest_component_picked() {
        // Island {A,B,C} beats island {X,Y}.
        let g = undirected(
            &["A", "B", "C", "X", "Y"],
            &[("A", "B"), ("B", "C"), ("X", "Y")],
        );
        let sub = select(&g, FilterMode::LargestComponent);

        assert_eq!(sub.node_count(), 3);
        assert!(sub.node(&"A".into()).is_some());
        assert!(sub.node(&"X".into()).is_none());
    }

    #[test]
    fn test_largest_component_tie_takes_first() {
        let g = undirected(&["A", "B", "X", "Y"], &[("A", "B"), ("X", "Y")]);
        let sub = select(&g, FilterMode::LargestComponent);

        assert_eq!(sub.node_count(), 2);
        assert!(sub.node(&"A".into()).is_some());
    }

    #[test]
    fn test_largest_component_directed_uses_weak() {
        // A -> B -> C is one weak component despite being 3 SCCs.
        let mut g = NetworkGraph::new(true);
        for id in ["A", "B", "C", "Z"] {
            g.add_node(Node::new(id));
        }
        g.add_edge(&"A".into(), &"B".into(), Link::new()).unwrap();
        g.add_edge(&"B".into(), &"C".into(), Link::new()).unwrap();

        let sub = select(&g, FilterMode::LargestComponent);
        assert_eq!(sub.node_count(), 3);
        assert!(sub.is_directed());
    }

    #[test]
    fn test_largest_component_empty_graph() {
        let g = NetworkGraph::new(false);
        let sub = select(&g, FilterMode::LargestComponent);
        assert_eq!(sub.node_count(), 0);
        assert!(!sub.is_directed());
    }

    #[test]
    fn test_high_degree_threshold() {
        // Hub has degree 3, leaves 1.
        let g = undirected(
            &["Hub", "A", "B", "C"],
            &[("Hub", "A"), ("Hub", "B"), ("Hub", "C")],
        );

        let sub = select(&g, FilterMode::HighDegree { min_degree: 2 });
        assert_eq!(sub.node_count(), 1);
        assert_eq!(sub.edge_count(), 0);
        assert!(sub.node(&"Hub".into()).is_some());
    }

    #[test]
    fn test_high_degree_zero_keeps_everything() {
        let g = undirected(&["A", "B", "Lonely"], &[("A", "B")]);
        let sub = select(&g, FilterMode::HighDegree { min_degree: 0 });
        assert_eq!(sub.node_count(), 3);
    }

    #[test]
    fn test_high_degree_measures_input_graph() {
        // B's degree is 2 in the full graph. Filtering at threshold 2
        // keeps B even though the induced result leaves B with degree 0.
        let g = undirected(&["A", "B", "C"], &[("A", "B"), ("B", "C")]);
        let sub = select(&g, FilterMode::HighDegree { min_degree: 2 });

        assert_eq!(sub.node_count(), 1);
        assert!(sub.node(&"B".into()).is_some());
        assert_eq!(sub.degree_of(&"B".into()), 0);
    }
}
