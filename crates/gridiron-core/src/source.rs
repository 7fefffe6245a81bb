//! Dataset loading with a session-scoped cache.
//!
//! A [`GraphSource`] is one session's view of the dataset: the first call to
//! [`GraphSource::load`] reads and parses the file, every later call returns
//! the same in-memory graph. Sessions must not share a cache, so the cache
//! lives in the source value itself rather than in any global.

use crate::formats::{Csv, Gml};
use crate::{Error, NetworkGraph, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// A cached handle to the dataset file.
pub struct GraphSource {
    path: PathBuf,
    cache: OnceLock<NetworkGraph>,
}

impl GraphSource {
    /// Create a source for the given dataset file. Nothing is read yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: OnceLock::new(),
        }
    }

    /// The dataset location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the dataset, parsing at most once per session.
    ///
    /// Any fetch or parse failure surfaces as [`Error::DataUnavailable`];
    /// a load failure is fatal to the session and is never swallowed.
    pub fn load(&self) -> Result<&NetworkGraph> {
        if let Some(graph) = self.cache.get() {
            return Ok(graph);
        }
        let graph = self.read_graph()?;
        Ok(self.cache.get_or_init(|| graph))
    }

    fn read_graph(&self) -> Result<NetworkGraph> {
        let file = File::open(&self.path).map_err(|e| Error::DataUnavailable {
            reason: format!("{}: {}", self.path.display(), e),
        })?;
        let reader = BufReader::new(file);

        let is_csv = self
            .path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

        let parsed = if is_csv {
            Csv::read(reader, false)
        } else {
            Gml::read(reader)
        };

        parsed.map_err(|e| Error::DataUnavailable {
            reason: format!("{}: {}", self.path.display(), e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_fixture(name: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("gridiron-source-tests");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_is_cached() {
        let path = write_fixture(
            "cached.gml",
            "graph [\n  node [ id 0 ]\n  node [ id 1 ]\n  edge [ source 0 target 1 ]\n]\n",
        );
        let source = GraphSource::new(&path);

        let first = source.load().unwrap();
        assert_eq!(first.node_count(), 2);

        // Deleting the file after the first load must not matter.
        std::fs::remove_file(&path).unwrap();
        let second = source.load().unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_missing_file_is_data_unavailable() {
        let source = GraphSource::new("/nonexistent/football.gml");
        let err = source.load().unwrap_err();
        assert!(matches!(err, Error::DataUnavailable { .. }));
    }

    #[test]
    fn test_parse_failure_is_data_unavailable() {
        let path = write_fixture("broken.gml", "graph [ node [ label \"no id\" ] ]");
        let source = GraphSource::new(&path);

        let err = source.load().unwrap_err();
        assert!(matches!(err, Error::DataUnavailable { .. }));
        assert!(err.to_string().contains("missing id"));
    }

    #[test]
    fn test_csv_dispatch() {
        let path = write_fixture("edges.csv", "a,b\nb,c\n");
        let source = GraphSource::new(&path);

        let graph = source.load().unwrap();
        assert_eq!(graph.node_count(), 3);
        assert!(!graph.is_directed());
    }
}
