//! Node types for network graphs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a node.
///
/// The reference dataset keys nodes by integers; they are carried in their
/// decimal string form so string-keyed datasets load through the same path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub String);

impl NodeId {
    /// Create a new node ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<i64> for NodeId {
    fn from(n: i64) -> Self {
        Self(n.to_string())
    }
}

/// A node in a network graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier.
    pub id: NodeId,

    /// Human-readable label (the team name in the reference dataset).
    pub label: Option<String>,

    /// Additional attributes carried from the dataset.
    #[serde(default)]
    pub attributes: std::collections::HashMap<String, serde_json::Value>,
}

impl Node {
    /// Create a new node with just an ID.
    pub fn new(id: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            label: None,
            attributes: std::collections::HashMap::new(),
        }
    }

    /// Set the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Add an attribute.
    pub fn with_attribute(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Label for display, falling back to the identifier when absent.
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or_else(|| self.id.as_str())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref label) = self.label {
            write!(f, "{} ({})", label, self.id)
        } else {
            write!(f, "{}", self.id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_label_fallback() {
        let plain = Node::new("42");
        assert_eq!(plain.display_label(), "42");

        let named = Node::new("42").with_label("Florida State");
        assert_eq!(named.display_label(), "Florida State");
        assert_eq!(format!("{}", named), "Florida State (42)");
    }
}
