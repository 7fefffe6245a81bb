//! Connected components analysis.
//!
//! Provides both:
//! - **Strongly Connected Components (SCC)**: every node reachable from every other within the component
//! - **Weakly Connected Components (WCC)**: connected when treating edges as undirected
//!
//! For undirected graphs the weak partition *is* the connected-component
//! partition. Components are returned in first-encounter order over the
//! node set, so callers that break size ties get a deterministic winner.

use crate::{NetworkGraph, NodeId};
use petgraph::algo::tarjan_scc;
use petgraph::visit::EdgeRef;
use std::cmp::Ordering;
use std::collections::HashMap;

// Union-Find helper functions (at module level per clippy)
fn uf_find(parent: &mut [usize], i: usize) -> usize {
    if parent[i] != i {
        parent[i] = uf_find(parent, parent[i]); // Path compression
    }
    parent[i]
}

fn uf_union(parent: &mut [usize], rank: &mut [usize], x: usize, y: usize) {
    let px = uf_find(parent, x);
    let py = uf_find(parent, y);
    if px == py {
        return;
    }
    // Union by rank
    match rank[px].cmp(&rank[py]) {
        Ordering::Less => parent[px] = py,
        Ordering::Greater => parent[py] = px,
        Ordering::Equal => {
            parent[py] = px;
            rank[px] += 1;
        }
    }
}

/// Compute weakly connected components.
///
/// Nodes are grouped when a path connects them ignoring edge direction.
/// Uses Union-Find for O(V + E * alpha(V)) computation. Component order
/// follows the first member encountered in node insertion order.
#[must_use]
pub fn weakly_connected_components(network: &NetworkGraph) -> Vec<Vec<NodeId>> {
    let graph = network.as_petgraph();
    let n = graph.node_count();
    if n == 0 {
        return vec![];
    }

    let mut parent: Vec<usize> = (0..n).collect();
    let mut rank: Vec<usize> = vec![0; n];

    // Process all edges (treating as undirected)
    for edge in graph.edge_references() {
        uf_union(
            &mut parent,
            &mut rank,
            edge.source().index(),
            edge.target().index(),
        );
    }

    // Group nodes by component root, preserving first-encounter order
    let mut components: Vec<Vec<NodeId>> = Vec::new();
    let mut slot_of_root: HashMap<usize, usize> = HashMap::new();
    for idx in graph.node_indices() {
        let root = uf_find(&mut parent, idx.index());
        let slot = *slot_of_root.entry(root).or_insert_with(|| {
            components.push(Vec::new());
            components.len() - 1
        });
        components[slot].push(graph[idx].id.clone());
    }

    components
}

/// Compute connected components of an undirected graph.
///
/// Alias for [`weakly_connected_components`]: on an undirected graph the
/// two partitions coincide.
#[must_use]
pub fn connected_components(network: &NetworkGraph) -> Vec<Vec<NodeId>> {
    weakly_connected_components(network)
}

/// Compute strongly connected components.
///
/// In an SCC, every node is reachable from every other following edge
/// directions. For a chain A -> B -> C, each node is its own SCC.
#[must_use]
pub fn strongly_connected_components(network: &NetworkGraph) -> Vec<Vec<NodeId>> {
    let graph = network.as_petgraph();
    let sccs = tarjan_scc(graph);

    sccs.into_iter()
        .map(|component| {
            component
                .into_iter()
                .map(|idx| graph[idx].id.clone())
                .collect()
        })
        .collect()
}
