// Allow minor clippy style warnings at crate level
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::uninlined_format_args)]

//! Core engines for the gridiron network explorer.
//!
//! The dashboard pipeline is: load a graph once per session, derive a
//! filtered working graph, then compute structural metrics, degree
//! distributions, and centrality rankings over it:
//!
//! - [`GraphSource`] - cached dataset loading (GML, CSV edge lists)
//! - [`filter::select`] - node-induced subset selection
//! - [`metrics`] - density, transitivity, assortativity, components
//! - [`algo::centrality`] - degree, closeness, betweenness, eigenvector
//! - [`DashboardReport`] - one filter selection's complete analysis
//!
//! # Example
//!
//! ```rust
//! use gridiron_core::{DashboardReport, Link, NetworkGraph, Node};
//!
//! let mut graph = NetworkGraph::new(false);
//! graph.add_node(Node::new("0").with_label("Navy"));
//! graph.add_node(Node::new("1").with_label("Duke"));
//! graph.add_node(Node::new("2").with_label("Rice"));
//! graph.add_edge(&"0".into(), &"1".into(), Link::new()).unwrap();
//! graph.add_edge(&"1".into(), &"2".into(), Link::new()).unwrap();
//!
//! let report = DashboardReport::from_graph(&graph, 10);
//! assert_eq!(report.node_count, 3);
//! assert!((report.metrics.density - 2.0 / 3.0).abs() < 1e-12);
//! ```

pub mod algo;
mod error;
pub mod filter;
pub mod formats;
mod graph;
pub mod metrics;
mod node;
pub mod render;
mod session;
mod source;

pub use error::{Error, Result};
pub use filter::FilterMode;
pub use graph::{Link, NetworkGraph};
pub use metrics::{DegreeHistogram, StructuralMetrics};
pub use node::{Node, NodeId};
pub use render::RenderDocument;
pub use session::{AnalysisSession, CentralityOutcome, CentralityTab, DashboardReport};
pub use source::GraphSource;

// Re-export petgraph for advanced graph operations
pub use petgraph;
