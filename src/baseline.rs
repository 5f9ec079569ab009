//! Binary-heap Dijkstra used as an independent oracle, plus result validation.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use serde::Serialize;

use crate::driver::ShortestPaths;
use crate::graph::Graph;

/// Heap instrumentation for the baseline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BaselineHeapStats { pub pushes: u64, pub pops: u64, pub max_size: u64 }

/// Dijkstra from `source`; `None` marks unreachable vertices.
///
/// Panics if `source` is not a vertex of `graph`.
pub fn dijkstra(graph: &Graph, source: u32) -> (Vec<Option<u64>>, BaselineHeapStats) {
    let n = graph.vertex_count();
    let mut dist: Vec<Option<u64>> = vec![None; n];
    let mut stats = BaselineHeapStats::default();
    dist[source as usize] = Some(0);

    // (distance, vertex), smallest distance first
    let mut heap = BinaryHeap::with_capacity(n.min(1024));
    heap.push(Reverse((0u64, source)));
    stats.pushes = 1;
    stats.max_size = 1;

    while let Some(Reverse((d, u))) = heap.pop() {
        stats.pops += 1;
        // stale entry, a shorter path was already found
        if dist[u as usize].is_some_and(|cur| d > cur) { continue; }
        for (v, w) in graph.out_edges(u) {
            let nd = d.saturating_add(w);
            if dist[v as usize].map_or(true, |cur| nd < cur) {
                dist[v as usize] = Some(nd);
                heap.push(Reverse((nd, v)));
                stats.pushes += 1;
                stats.max_size = stats.max_size.max(heap.len() as u64);
            }
        }
    }
    (dist, stats)
}

/// One vertex whose delta-stepping distance disagrees with the oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    pub vertex: u32,
    pub expected: u64,
    pub actual: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub checked: usize,
    pub mismatches: Vec<Mismatch>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool { self.mismatches.is_empty() }
}

/// Compare `result` against Dijkstra on the same graph and source.
///
/// Every differing vertex is reported (expected and actual both use the
/// result's infinity sentinel); nothing here aborts.
pub fn validate(graph: &Graph, result: &ShortestPaths) -> ValidationReport {
    let (expected, _) = dijkstra(graph, result.source);
    let inf = result.infinity;
    let mut report = ValidationReport { checked: expected.len(), mismatches: Vec::new() };
    for (v, (exp, act)) in expected.iter().zip(result.raw()).enumerate() {
        if exp != act {
            let m = Mismatch { vertex: v as u32, expected: exp.unwrap_or(inf), actual: act.unwrap_or(inf) };
            tracing::warn!(vertex = m.vertex, expected = m.expected, actual = m.actual, "distance mismatch against baseline");
            report.mismatches.push(m);
        }
    }
    report
}
