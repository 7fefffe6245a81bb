//! CSV edge-list support.
//!
//! Expects headerless CSV: `source,target` or `source,target,weight`.
//! Nodes are created on first mention, in order of appearance.

use crate::{Link, NetworkGraph, Result};
use std::io::Read;

/// CSV edge-list handler.
pub struct Csv;

impl Csv {
    /// Read an edge list from CSV.
    ///
    /// - 2 columns: source, target
    /// - 3 columns: source, target, numeric weight
    pub fn read<R: Read>(reader: R, directed: bool) -> Result<NetworkGraph> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut graph = NetworkGraph::new(directed);

        for result in reader.records() {
            let record =
                result.map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

            if record.len() < 2 {
                continue;
            }

            let source = crate::NodeId::from(&record[0]);
            let target = crate::NodeId::from(&record[1]);
            graph.ensure_node(source.clone());
            graph.ensure_node(target.clone());

            let link = if record.len() >= 3 {
                let weight = record[2].parse::<f64>().map_err(|_| {
                    std::io::Error::new(
                        std::io::ErrorKind::InvalidData,
                        format!("non-numeric edge weight: {}", &record[2]),
                    )
                })?;
                Link::weighted(weight)
            } else {
                Link::new()
            };

            graph.add_edge(&source, &target, link)?;
        }

        Ok(graph)
    }

    /// Parse from string.
    pub fn from_str(s: &str, directed: bool) -> Result<NetworkGraph> {
        Self::read(std::io::Cursor::new(s), directed)
    }
}
