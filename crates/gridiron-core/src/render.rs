//! Render / interchange document for the presentation layer.
//!
//! A **serde-friendly** graph representation handed to the force-directed
//! renderer (or any downstream tooling). Algorithmic code works on
//! [`NetworkGraph`]; this flat nodes-and-links shape exists purely for
//! interchange.

use crate::{NetworkGraph, NodeId};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};

/// A node as the renderer sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderNode {
    /// Node identifier.
    pub id: NodeId,
    /// Display label, already resolved (falls back to the id).
    pub label: String,
}

/// An edge as the renderer sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderEdge {
    /// Source node id.
    pub source: NodeId,
    /// Target node id.
    pub target: NodeId,
    /// Edge weight, when the dataset declares one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

/// A complete graph document ready for force-directed layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderDocument {
    /// Whether the renderer should draw arrow heads.
    pub directed: bool,
    /// Nodes, in the graph's insertion order.
    pub nodes: Vec<RenderNode>,
    /// Edges.
    pub edges: Vec<RenderEdge>,
}

impl RenderDocument {
    /// Build a render document from a working graph.
    #[must_use]
    pub fn from_graph(network: &NetworkGraph) -> Self {
        let graph = network.as_petgraph();

        let nodes = graph
            .node_weights()
            .map(|node| RenderNode {
                id: node.id.clone(),
                label: node.display_label().to_string(),
            })
            .collect();

        let edges = graph
            .edge_references()
            .map(|edge| RenderEdge {
                source: graph[edge.source()].id.clone(),
                target: graph[edge.target()].id.clone(),
                weight: edge.weight().weight,
            })
            .collect();

        Self {
            directed: network.is_directed(),
            nodes,
            edges,
        }
    }

    /// Node count.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Edge count.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether there is nothing to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Serialize to pretty JSON for the renderer.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
