//! Centrality measures and their shared ranking transform.
//!
//! Four measures are available, picked by [`CentralityKind`]:
//! degree, closeness, betweenness, and eigenvector. All of them score
//! every node of the graph under analysis (isolated nodes included),
//! except where a measure's failure mode applies to the computation as a
//! whole (see [`eigenvector_centrality`]).

use crate::{NetworkGraph, NodeId, Result};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Betweenness centrality (Brandes).
pub mod betweenness;

/// Closeness centrality (Wasserman-Faust corrected).
pub mod closeness;

/// Degree centrality.
pub mod degree;

/// Eigenvector centrality (power iteration).
pub mod eigenvector;

pub use betweenness::betweenness_centrality;
pub use closeness::closeness_centrality;
pub use degree::degree_centrality;
pub use eigenvector::{eigenvector_centrality, EigenvectorConfig};

/// Score mapping covering every node of the analyzed graph.
pub type CentralityScores = HashMap<NodeId, f64>;

/// The centrality measures offered by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CentralityKind {
    /// Connection count, normalized by n - 1.
    Degree,
    /// Proximity to the rest of the network.
    Closeness,
    /// Shortest-path brokerage.
    Betweenness,
    /// Recursive neighbor importance.
    Eigenvector,
}

impl CentralityKind {
    /// All measures, in dashboard tab order.
    pub const ALL: [CentralityKind; 4] = [
        CentralityKind::Degree,
        CentralityKind::Closeness,
        CentralityKind::Betweenness,
        CentralityKind::Eigenvector,
    ];

    /// Display name for table headers.
    pub fn label(self) -> &'static str {
        match self {
            CentralityKind::Degree => "Degree",
            CentralityKind::Closeness => "Closeness",
            CentralityKind::Betweenness => "Betweenness",
            CentralityKind::Eigenvector => "Eigenvector",
        }
    }
}

impl fmt::Display for CentralityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Compute the requested centrality over the graph.
///
/// Degree, closeness, and betweenness always succeed; eigenvector may fail
/// with [`crate::Error::NotApplicable`] or [`crate::Error::NotConverged`],
/// which callers surface as a warning on that one ranking.
pub fn centrality(network: &NetworkGraph, kind: CentralityKind) -> Result<CentralityScores> {
    match kind {
        CentralityKind::Degree => Ok(degree_centrality(network)),
        CentralityKind::Closeness => Ok(closeness_centrality(network)),
        CentralityKind::Betweenness => Ok(betweenness_centrality(network)),
        CentralityKind::Eigenvector => {
            eigenvector_centrality(network, EigenvectorConfig::default())
        }
    }
}

/// One row of a ranking table.
#[derive(Debug, Clone, Serialize)]
pub struct RankingRow {
    /// Display label (the node id when the dataset carries no label).
    pub label: String,
    /// Node identifier.
    pub id: NodeId,
    /// Score rounded to 4 decimal digits for display.
    pub score: f64,
}

/// A top-K ranking of nodes by a centrality score.
#[derive(Debug, Clone, Serialize)]
pub struct RankingTable {
    /// The measure this table ranks by.
    pub kind: CentralityKind,
    /// Rows sorted descending by score.
    pub rows: Vec<RankingRow>,
}

impl RankingTable {
    /// Build a display table from a raw score mapping.
    ///
    /// Rows are sorted descending by the *unrounded* score; ties keep the
    /// graph's node insertion order. `top_k` is clamped to at least 1 and
    /// at most the node count; rounding to 4 decimals happens last, so it
    /// never reorders rows.
    #[must_use]
    pub fn from_scores(
        network: &NetworkGraph,
        kind: CentralityKind,
        scores: &CentralityScores,
        top_k: usize,
    ) -> Self {
        let mut entries: Vec<(&NodeId, &str, f64)> = network
            .nodes()
            .map(|node| {
                let score = scores.get(&node.id).copied().unwrap_or(0.0);
                (&node.id, node.display_label(), score)
            })
            .collect();

        // Stable sort keeps insertion order on ties.
        entries.sort_by(|a, b| b.2.partial_cmp(&a.2).unwrap_or(std::cmp::Ordering::Equal));

        let k = top_k.max(1).min(entries.len());
        let rows = entries
            .into_iter()
            .take(k)
            .map(|(id, label, score)| RankingRow {
                label: label.to_string(),
                id: id.clone(),
                score: round4(score),
            })
            .collect();

        Self { kind, rows }
    }
}

fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Link, Node};

    fn star() -> NetworkGraph {
        let mut g = NetworkGraph::new(false);
        for id in ["Hub", "A", "B", "C"] {
            g.add_node(Node::new(id).with_label(format!("Team {id}")));
        }
        for leaf in ["A", "B", "C"] {
            g.add_edge(&"Hub".into(), &leaf.into(), Link::new()).unwrap();
        }
        g
    }

    #[test]
    fn test_ranking_sorted_descending() {
        let g = star();
        let scores = degree_centrality(&g);
        let table = RankingTable::from_scores(&g, CentralityKind::Degree, &scores, 4);

        assert_eq!(table.rows.len(), 4);
        assert_eq!(table.rows[0].id.as_str(), "Hub");
        for pair in table.rows.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_ranking_tie_break_insertion_order() {
        let g = star();
        let scores = degree_centrality(&g);
        let table = RankingTable::from_scores(&g, CentralityKind::Degree, &scores, 4);

        // A, B, C all tie; they must appear in insertion order.
        let tied: Vec<_> = table.rows[1..].iter().map(|r| r.id.as_str()).collect();
        assert_eq!(tied, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_ranking_truncates_and_clamps() {
        let g = star();
        let scores = degree_centrality(&g);

        let table = RankingTable::from_scores(&g, CentralityKind::Degree, &scores, 2);
        assert_eq!(table.rows.len(), 2);

        let oversized = RankingTable::from_scores(&g, CentralityKind::Degree, &scores, 99);
        assert_eq!(oversized.rows.len(), 4);

        let zero = RankingTable::from_scores(&g, CentralityKind::Degree, &scores, 0);
        assert_eq!(zero.rows.len(), 1);
    }

    #[test]
    fn test_ranking_uses_labels() {
        let g = star();
        let scores = degree_centrality(&g);
        let table = RankingTable::from_scores(&g, CentralityKind::Degree, &scores, 1);

        assert_eq!(table.rows[0].label, "Team Hub");
    }

    #[test]
    fn test_ranking_rounds_display_scores() {
        let mut g = NetworkGraph::new(false);
        for id in ["A", "B", "C"] {
            g.add_node(Node::new(id));
        }
        g.add_edge(&"A".into(), &"B".into(), Link::new()).unwrap();
        g.add_edge(&"B".into(), &"C".into(), Link::new()).unwrap();

        let scores = closeness_centrality(&g);
        let table = RankingTable::from_scores(&g, CentralityKind::Closeness, &scores, 3);

        // 2/3 displays as 0.6667
        let a = table
            .rows
            .iter()
            .find(|r| r.id.as_str() == "A")
            .unwrap()
            .score;
        assert_eq!(a, 0.6667);
    }

    #[test]
    fn test_ranking_empty_graph() {
        let g = NetworkGraph::new(false);
        let scores = CentralityScores::new();
        let table = RankingTable::from_scores(&g, CentralityKind::Degree, &scores, 10);
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_dispatch_eigenvector_failure_passes_through() {
        let mut g = NetworkGraph::new(false);
        for id in ["A", "B"] {
            g.add_node(Node::new(id));
        }

        assert!(centrality(&g, CentralityKind::Degree).is_ok());
        assert!(centrality(&g, CentralityKind::Eigenvector).is_err());
    }
}
