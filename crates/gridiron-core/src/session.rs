//! One analysis session: cached dataset plus the filter-then-analyze pass.
//!
//! A session owns its [`GraphSource`] (so concurrent sessions never share
//! a cache) and produces [`DashboardReport`] values: everything the
//! presentation layer shows for one filter selection. Per-metric failures
//! are isolated here; only a dataset-load failure escapes as an error.

use crate::algo::centrality::{centrality, CentralityKind, RankingTable};
use crate::filter::{select, FilterMode};
use crate::metrics::{degree_histogram, structural_metrics, DegreeHistogram, StructuralMetrics};
use crate::render::RenderDocument;
use crate::source::GraphSource;
use crate::{NetworkGraph, Result};
use serde::Serialize;

/// Outcome of one centrality tab.
#[derive(Debug, Clone, Serialize)]
pub enum CentralityOutcome {
    /// The ranking computed normally.
    Table(RankingTable),
    /// The computation failed for this graph; show the message, keep the
    /// other tabs.
    Warning(String),
}

/// One centrality tab of the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct CentralityTab {
    /// Which measure this tab shows.
    pub kind: CentralityKind,
    /// Ranking table or warning.
    pub outcome: CentralityOutcome,
}

/// Everything the presentation layer shows for one filter selection.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    /// Node count of the working graph.
    pub node_count: usize,
    /// Edge count of the working graph.
    pub edge_count: usize,
    /// Directedness of the working graph.
    pub directed: bool,
    /// Scalar structural metrics.
    pub metrics: StructuralMetrics,
    /// Degree-distribution series.
    pub histogram: DegreeHistogram,
    /// Four centrality tabs, in display order.
    pub tabs: Vec<CentralityTab>,
    /// Graph document for the force-directed renderer.
    pub render: RenderDocument,
}

impl DashboardReport {
    /// Run every engine over an already-filtered working graph.
    ///
    /// Never fails: undefined metrics and non-converging centralities
    /// degrade to warnings, and an empty graph produces an empty report.
    #[must_use]
    pub fn from_graph(working: &NetworkGraph, top_k: usize) -> Self {
        let tabs = CentralityKind::ALL
            .iter()
            .map(|&kind| {
                let outcome = match centrality(working, kind) {
                    Ok(scores) => CentralityOutcome::Table(RankingTable::from_scores(
                        working, kind, &scores, top_k,
                    )),
                    Err(e) => CentralityOutcome::Warning(e.to_string()),
                };
                CentralityTab { kind, outcome }
            })
            .collect();

        Self {
            node_count: working.node_count(),
            edge_count: working.edge_count(),
            directed: working.is_directed(),
            metrics: structural_metrics(working),
            histogram: degree_histogram(working),
            tabs,
            render: RenderDocument::from_graph(working),
        }
    }
}

/// An interactive analysis session over one dataset.
pub struct AnalysisSession {
    source: GraphSource,
}

impl AnalysisSession {
    /// Start a session over a dataset file.
    pub fn open(path: impl Into<std::path::PathBuf>) -> Self {
        Self {
            source: GraphSource::new(path),
        }
    }

    /// Start a session from an existing source.
    pub fn new(source: GraphSource) -> Self {
        Self { source }
    }

    /// The full session graph (loaded and cached on first use).
    pub fn graph(&self) -> Result<&NetworkGraph> {
        self.source.load()
    }

    /// Run the filter-then-analyze pass for one user selection.
    ///
    /// Only a dataset-load failure is an error; everything downstream
    /// degrades per metric.
    pub fn report(&self, mode: FilterMode, top_k: usize) -> Result<DashboardReport> {
        let full = self.source.load()?;
        let working = select(full, mode);
        Ok(DashboardReport::from_graph(&working, top_k))
    }
}
