//! Plain-text edge lists: one `source target weight` triple per line.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::error::{Result, SsspError};
use crate::graph::{Edge, Graph};

/// Parsed edges plus the implied vertex count (largest id + 1).
#[derive(Debug, Clone, Default)]
pub struct EdgeList {
    pub edges: Vec<Edge>,
    pub vertices: usize,
}

impl EdgeList {
    /// Raise the vertex count so vertices without edges still exist.
    pub fn with_min_vertices(mut self, n: usize) -> Self {
        self.vertices = self.vertices.max(n);
        self
    }

    pub fn into_graph(self) -> Result<Graph> {
        Graph::from_edges(self.vertices, self.edges)
    }
}

/// Parse an edge list. Blank lines and `#` comments are skipped.
///
/// Fails on the first malformed line; negative weights are rejected here so
/// the algorithm never sees them.
pub fn parse_edge_list<R: Read>(reader: R) -> Result<EdgeList> {
    let mut out = EdgeList::default();
    for (idx, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let lineno = idx + 1;
        let body = line.split('#').next().unwrap_or("").trim();
        if body.is_empty() { continue; }
        let fields: Vec<&str> = body.split_whitespace().collect();
        if fields.len() != 3 {
            return Err(SsspError::MalformedEdge {
                line: lineno,
                reason: format!("expected 3 fields, found {}", fields.len()),
            });
        }
        let mut nums = [0i64; 3];
        for (slot, tok) in nums.iter_mut().zip(&fields) {
            *slot = tok.parse().map_err(|_| SsspError::MalformedEdge {
                line: lineno,
                reason: format!("not an integer: {tok:?}"),
            })?;
        }
        let [from, to, weight] = nums;
        if weight < 0 {
            return Err(SsspError::NegativeWeight { line: lineno, from, to, weight });
        }
        let from_id = vertex_id(from, lineno)?;
        let to_id = vertex_id(to, lineno)?;
        out.vertices = out.vertices.max(from_id.max(to_id) as usize + 1);
        out.edges.push(Edge::new(from_id, to_id, weight as u64));
    }
    tracing::debug!(edges = out.edges.len(), vertices = out.vertices, "parsed edge list");
    Ok(out)
}

pub fn load_edge_list(path: impl AsRef<Path>) -> Result<EdgeList> {
    parse_edge_list(File::open(path)?)
}

fn vertex_id(raw: i64, line: usize) -> Result<u32> {
    u32::try_from(raw).map_err(|_| SsspError::MalformedEdge {
        line,
        reason: format!("vertex id {raw} outside 0..=u32::MAX"),
    })
}
