//! Structural metrics over a working graph.
//!
//! Everything here degrades to a zero-valued or empty result on an empty
//! graph, and a metric that is mathematically undefined reports
//! [`Error::NotComputable`] instead of poisoning the rest of the pass.

use crate::algo::components::{
    strongly_connected_components, weakly_connected_components,
};
use crate::{Error, NetworkGraph, Result};
use petgraph::visit::EdgeRef;
use serde::Serialize;
use std::collections::HashSet;

/// Component counts, shaped by the graph's directedness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ComponentCounts {
    /// Connected-component count of an undirected graph.
    Undirected {
        /// Number of connected components.
        connected: usize,
    },
    /// Weak and strong counts of a directed graph.
    Directed {
        /// Number of weakly connected components.
        weak: usize,
        /// Number of strongly connected components.
        strong: usize,
    },
}

/// The scalar structural metrics shown on the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct StructuralMetrics {
    /// Edge count over the maximum possible for this size and directedness.
    pub density: f64,
    /// Global clustering coefficient (transitivity).
    pub transitivity: f64,
    /// Degree assortativity; `None` when undefined for this graph.
    pub assortativity: Option<f64>,
    /// Component counts.
    pub components: ComponentCounts,
}

/// Compute all structural metrics in one pass.
///
/// An undefined assortativity is caught here and reported as `None`; the
/// other metrics are always defined.
#[must_use]
pub fn structural_metrics(network: &NetworkGraph) -> StructuralMetrics {
    StructuralMetrics {
        density: density(network),
        transitivity: transitivity(network),
        assortativity: assortativity(network).ok(),
        components: component_counts(network),
    }
}

/// Edge density.
///
/// m / (n(n-1)) for directed graphs, 2m / (n(n-1)) for undirected ones;
/// 0 when the graph has fewer than two nodes.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn density(network: &NetworkGraph) -> f64 {
    let n = network.node_count();
    let m = network.edge_count();
    if n < 2 {
        return 0.0;
    }

    let possible = (n * (n - 1)) as f64;
    if network.is_directed() {
        m as f64 / possible
    } else {
        2.0 * m as f64 / possible
    }
}

/// Global clustering coefficient (transitivity).
///
/// 3 * triangles / connected triples, computed on the undirected view;
/// 0 when no triples exist. Self-loops and parallel edges are ignored,
/// matching the simple-graph definition of a triangle.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn transitivity(network: &NetworkGraph) -> f64 {
    let graph = network.as_petgraph();
    let n = graph.node_count();

    // Simple undirected adjacency: dedup parallels, drop loops.
    let mut adjacency: Vec<HashSet<usize>> = vec![HashSet::new(); n];
    for edge in graph.edge_references() {
        let (s, t) = (edge.source().index(), edge.target().index());
        if s != t {
            adjacency[s].insert(t);
            adjacency[t].insert(s);
        }
    }

    let mut closed = 0_usize; // adjacent neighbor pairs, 3 per triangle
    let mut triples = 0_usize;

    for neighbors in &adjacency {
        let degree = neighbors.len();
        if degree < 2 {
            continue;
        }
        triples += degree * (degree - 1) / 2;

        let list: Vec<usize> = neighbors.iter().copied().collect();
        for i in 0..list.len() {
            for j in (i + 1)..list.len() {
                if adjacency[list[i]].contains(&list[j]) {
                    closed += 1;
                }
            }
        }
    }

    if triples == 0 {
        return 0.0;
    }
    closed as f64 / triples as f64
}

/// Degree assortativity coefficient.
///
/// Pearson correlation of total degree across edge endpoints; undirected
/// edges contribute in both orientations. Undefined (and reported as
/// [`Error::NotComputable`]) when the graph has no edges or every
/// endpoint degree is identical.
#[allow(clippy::cast_precision_loss)]
pub fn assortativity(network: &NetworkGraph) -> Result<f64> {
    let graph = network.as_petgraph();
    if graph.edge_count() == 0 {
        return Err(Error::NotComputable(
            "degree assortativity needs at least one edge".to_string(),
        ));
    }

    let degrees: Vec<f64> = graph
        .node_indices()
        .map(|idx| network.total_degree(idx) as f64)
        .collect();

    let mut sum_jk = 0.0;
    let mut sum_j = 0.0;
    let mut sum_k = 0.0;
    let mut sum_j_sq = 0.0;
    let mut sum_k_sq = 0.0;
    let mut count = 0.0;

    let mut accumulate = |j: f64, k: f64| {
        sum_jk += j * k;
        sum_j += j;
        sum_k += k;
        sum_j_sq += j * j;
        sum_k_sq += k * k;
        count += 1.0;
    };

    for edge in graph.edge_references() {
        let j = degrees[edge.source().index()];
        let k = degrees[edge.target().index()];
        accumulate(j, k);
        if !network.is_directed() {
            accumulate(k, j);
        }
    }

    let mean_jk = sum_jk / count;
    let mean_j = sum_j / count;
    let mean_k = sum_k / count;
    let var_j = sum_j_sq / count - mean_j * mean_j;
    let var_k = sum_k_sq / count - mean_k * mean_k;

    let denominator = (var_j * var_k).sqrt();
    if denominator < 1e-12 {
        return Err(Error::NotComputable(
            "degree assortativity is undefined when endpoint degrees do not vary".to_string(),
        ));
    }

    Ok((mean_jk - mean_j * mean_k) / denominator)
}

/// Component counts for the graph's directedness.
#[must_use]
pub fn component_counts(network: &NetworkGraph) -> ComponentCounts {
    if network.is_directed() {
        ComponentCounts::Directed {
            weak: weakly_connected_components(network).len(),
            strong: strongly_connected_components(network).len(),
        }
    } else {
        ComponentCounts::Undirected {
            connected: weakly_connected_components(network).len(),
        }
    }
}

/// Per-node degree sequences for the degree-distribution histogram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DegreeHistogram {
    /// One total-degree value per node, in insertion order.
    Undirected {
        /// Total degree per node.
        degrees: Vec<usize>,
    },
    /// Parallel in/out sequences, one value per node each.
    Directed {
        /// In-degree per node.
        in_degrees: Vec<usize>,
        /// Out-degree per node.
        out_degrees: Vec<usize>,
    },
}

impl DegreeHistogram {
    /// Whether there is nothing to plot.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            DegreeHistogram::Undirected { degrees } => degrees.is_empty(),
            DegreeHistogram::Directed { in_degrees, .. } => in_degrees.is_empty(),
        }
    }
}

/// Collect the degree sequences for the histogram.
///
/// A zero-node graph yields empty sequences.
#[must_use]
pub fn degree_histogram(network: &NetworkGraph) -> DegreeHistogram {
    let graph = network.as_petgraph();

    if network.is_directed() {
        let mut in_degrees = Vec::with_capacity(graph.node_count());
        let mut out_degrees = Vec::with_capacity(graph.node_count());
        for idx in graph.node_indices() {
            in_degrees.push(network.in_degree(idx));
            out_degrees.push(network.out_degree(idx));
        }
        DegreeHistogram::Directed {
            in_degrees,
            out_degrees,
        }
    } else {
        DegreeHistogram::Undirected {
            degrees: graph
                .node_indices()
                .map(|idx| network.total_degree(idx))
                .collect(),
        }
    }
}
