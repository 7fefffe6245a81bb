use crate::{Error, Node, NodeId, Result};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Edge payload: an optional weight carried from the dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Link {
    /// Edge weight, when the dataset declares one.
    pub weight: Option<f64>,
}

impl Link {
    /// An unweighted link.
    pub fn new() -> Self {
        Self::default()
    }

    /// A weighted link.
    pub fn weighted(weight: f64) -> Self {
        Self {
            weight: Some(weight),
        }
    }
}

/// A network graph with a directedness fixed at construction time.
///
/// Uses petgraph's directed graph internally for efficient traversal and
/// maintains an index for O(1) node lookup by identifier. Undirected graphs
/// store each edge once and answer adjacency queries ignoring direction.
/// Self-loops and parallel edges are representable.
///
/// # Example
///
/// ```rust
/// use gridiron_core::{Link, NetworkGraph, Node};
///
/// let mut graph = NetworkGraph::new(false);
/// graph.add_node(Node::new("0").with_label("Navy"));
/// graph.add_node(Node::new("1").with_label("Duke"));
/// graph.add_edge(&"0".into(), &"1".into(), Link::new()).unwrap();
///
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edge_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct NetworkGraph {
    /// The underlying directed graph.
    graph: DiGraph<Node, Link>,

    /// Whether edge direction is meaningful.
    directed: bool,

    /// Map from node ID to node index.
    node_index: HashMap<NodeId, NodeIndex>,
}

impl NetworkGraph {
    /// Create an empty graph with the given directedness.
    pub fn new(directed: bool) -> Self {
        Self {
            graph: DiGraph::new(),
            directed,
            node_index: HashMap::new(),
        }
    }

    /// Create a graph with estimated capacity.
    pub fn with_capacity(directed: bool, nodes: usize, edges: usize) -> Self {
        Self {
            graph: DiGraph::with_capacity(nodes, edges),
            directed,
            node_index: HashMap::with_capacity(nodes),
        }
    }

    /// Whether edge direction is meaningful for this graph.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges. Each undirected edge is counted once.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Add a node, or update the stored node when the ID already exists.
    pub fn add_node(&mut self, node: Node) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(&node.id) {
            self.graph[idx] = node;
            return idx;
        }
        let id = node.id.clone();
        let idx = self.graph.add_node(node);
        self.node_index.insert(id, idx);
        idx
    }

    /// Get or create a bare node for the given ID.
    pub fn ensure_node(&mut self, id: impl Into<NodeId>) -> NodeIndex {
        let id = id.into();
        if let Some(&idx) = self.node_index.get(&id) {
            return idx;
        }
        let idx = self.graph.add_node(Node::new(id.clone()));
        self.node_index.insert(id, idx);
        idx
    }

    /// Add an edge between two existing nodes.
    ///
    /// Both endpoints must already be present; an edge may not invent nodes.
    pub fn add_edge(&mut self, source: &NodeId, target: &NodeId, link: Link) -> Result<()> {
        let source_idx = self
            .index_of(source)
            .ok_or_else(|| Error::UnknownNode(source.to_string()))?;
        let target_idx = self
            .index_of(target)
            .ok_or_else(|| Error::UnknownNode(target.to_string()))?;
        self.graph.add_edge(source_idx, target_idx, link);
        Ok(())
    }

    /// Get a node by ID.
    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.node_index.get(id).map(|&idx| &self.graph[idx])
    }

    /// Get the node index for an ID.
    pub fn index_of(&self, id: &NodeId) -> Option<NodeIndex> {
        self.node_index.get(id).copied()
    }

    /// Iterate over nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.graph.node_weights()
    }

    /// Iterate over node IDs in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = &NodeId> {
        self.graph.node_weights().map(|n| &n.id)
    }

    /// In-degree of a node, counting parallel edges.
    pub fn in_degree(&self, idx: NodeIndex) -> usize {
        self.graph.edges_directed(idx, Direction::Incoming).count()
    }

    /// Out-degree of a node, counting parallel edges.
    pub fn out_degree(&self, idx: NodeIndex) -> usize {
        self.graph.edges_directed(idx, Direction::Outgoing).count()
    }

    /// Total degree of a node.
    ///
    /// In + out for directed graphs, incident edge count for undirected
    /// graphs. A self-loop contributes 2 either way.
    pub fn total_degree(&self, idx: NodeIndex) -> usize {
        if self.directed {
            self.in_degree(idx) + self.out_degree(idx)
        } else {
            self.graph.neighbors_undirected(idx).count()
        }
    }

    /// Total degree looked up by node ID. 0 for unknown IDs.
    pub fn degree_of(&self, id: &NodeId) -> usize {
        self.index_of(id).map_or(0, |idx| self.total_degree(idx))
    }

    /// Build the induced subgraph on the given node set.
    ///
    /// The result is an independent copy carrying the kept nodes (in their
    /// original insertion order) and exactly the edges with both endpoints
    /// kept. Directedness is inherited.
    pub fn induced_subgraph(&self, keep: &HashSet<NodeId>) -> NetworkGraph {
        let mut sub = NetworkGraph::with_capacity(self.directed, keep.len(), 0);

        for node in self.graph.node_weights() {
            if keep.contains(&node.id) {
                sub.add_node(node.clone());
            }
        }

        for edge in self.graph.edge_references() {
            let source = &self.graph[edge.source()].id;
            let target = &self.graph[edge.target()].id;
            if keep.contains(source) && keep.contains(target) {
                // Both endpoints were added above, so this cannot fail.
                let _ = sub.add_edge(source, target, *edge.weight());
            }
        }

        sub
    }

    /// Get the underlying petgraph for algorithm implementations.
    pub fn as_petgraph(&self) -> &DiGraph<Node, Link> {
        &self.graph
    }
}
