//! Relaxation request generation for light and heavy edges.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::distance::DistanceMap;
use crate::error::SsspError;
use crate::graph::Graph;

/// Light edges have `w <= delta`, heavy edges `w > delta`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeClass {
    Light,
    Heavy,
}

impl EdgeClass {
    #[inline]
    pub fn admits(self, weight: u64, delta: u64) -> bool {
        match self {
            EdgeClass::Light => weight <= delta,
            EdgeClass::Heavy => weight > delta,
        }
    }
}

impl FromStr for EdgeClass {
    type Err = SsspError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(EdgeClass::Light),
            "heavy" => Ok(EdgeClass::Heavy),
            other => Err(SsspError::InvalidArgument(format!("no such kind of edges: {other:?}"))),
        }
    }
}

impl fmt::Display for EdgeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self { EdgeClass::Light => "light", EdgeClass::Heavy => "heavy" })
    }
}

/// Candidate distance for one target vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelaxRequest {
    pub target: u32,
    pub candidate: u64,
}

/// Lazy stream of requests from `frontier` over edges of `class`.
///
/// Frontier vertices without a finite distance emit nothing.
pub fn requests<'a>(
    frontier: &'a [u32],
    class: EdgeClass,
    delta: u64,
    graph: &'a Graph,
    dist: &'a DistanceMap,
) -> impl Iterator<Item = RelaxRequest> + 'a {
    frontier.iter().flat_map(move |&u| {
        let base = dist.get(u);
        graph
            .out_edges(u)
            .filter(move |&(_, w)| class.admits(w, delta))
            .filter_map(move |(v, w)| base.map(|d| RelaxRequest { target: v, candidate: d.saturating_add(w) }))
    })
}

/// One batch of requests reduced to the minimum candidate per target.
///
/// Merging batches is order independent, so per-worker batches over a sharded
/// frontier can be combined in any order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestBatch {
    best: BTreeMap<u32, u64>,
}

impl RequestBatch {
    pub fn new() -> Self { Self::default() }

    pub fn push(&mut self, req: RelaxRequest) {
        self.best
            .entry(req.target)
            .and_modify(|c| *c = (*c).min(req.candidate))
            .or_insert(req.candidate);
    }

    pub fn merge(&mut self, other: RequestBatch) {
        for req in other {
            self.push(req);
        }
    }

    pub fn len(&self) -> usize { self.best.len() }

    pub fn is_empty(&self) -> bool { self.best.is_empty() }

    pub fn get(&self, target: u32) -> Option<u64> { self.best.get(&target).copied() }
}

impl FromIterator<RelaxRequest> for RequestBatch {
    fn from_iter<I: IntoIterator<Item = RelaxRequest>>(iter: I) -> Self {
        let mut batch = RequestBatch::new();
        iter.into_iter().for_each(|r| batch.push(r));
        batch
    }
}

impl IntoIterator for RequestBatch {
    type Item = RelaxRequest;
    type IntoIter = std::iter::Map<std::collections::btree_map::IntoIter<u32, u64>, fn((u32, u64)) -> RelaxRequest>;

    fn into_iter(self) -> Self::IntoIter {
        self.best.into_iter().map(to_request as fn((u32, u64)) -> RelaxRequest)
    }
}

fn to_request((target, candidate): (u32, u64)) -> RelaxRequest {
    RelaxRequest { target, candidate }
}

/// Collect the requests of `frontier` for `class` into a reduced batch.
pub fn find_requests(
    frontier: &[u32],
    class: EdgeClass,
    delta: u64,
    graph: &Graph,
    dist: &DistanceMap,
) -> RequestBatch {
    requests(frontier, class, delta, graph, dist).collect()
}

/// As [`find_requests`], with the edge class given by its tag (`"light"` / `"heavy"`).
pub fn find_requests_by_tag(
    frontier: &[u32],
    tag: &str,
    delta: u64,
    graph: &Graph,
    dist: &DistanceMap,
) -> crate::Result<RequestBatch> {
    let class: EdgeClass = tag.parse()?;
    Ok(find_requests(frontier, class, delta, graph, dist))
}
