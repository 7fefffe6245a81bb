//! Error types for gridiron-core.

use thiserror::Error;

/// Error type for graph loading and analysis operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The dataset could not be fetched or parsed. Fatal to the session.
    #[error("dataset unavailable: {reason}")]
    DataUnavailable {
        /// What went wrong while loading.
        reason: String,
    },

    /// GML parse error with the offending line.
    #[error("invalid GML at line {line}: {message}")]
    Gml {
        /// 1-based line number in the input.
        line: usize,
        /// Parse failure detail.
        message: String,
    },

    /// A structural metric is mathematically undefined for this graph.
    #[error("metric not computable: {0}")]
    NotComputable(String),

    /// Power iteration ran out of budget before settling.
    #[error("power iteration did not converge within {iterations} iterations")]
    NotConverged {
        /// The iteration budget that was exhausted.
        iterations: usize,
    },

    /// The graph structure makes the requested centrality undefined.
    #[error("centrality not applicable: {0}")]
    NotApplicable(String),

    /// An edge referenced a node identifier that does not exist.
    #[error("unknown node id: {0}")]
    UnknownNode(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for gridiron operations.
pub type Result<T> = std::result::Result<T, Error>;
