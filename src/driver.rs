//! Phase driver: buckets in increasing order, a light-edge fixed point per
//! bucket, then one heavy-edge pass over everything the bucket ever held.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

use crate::config::DeltaSteppingConfig;
use crate::error::{Result, SsspError};
use crate::graph::Graph;
use crate::relax::RunState;
use crate::requests::{find_requests, EdgeClass};

/// Counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub relaxations: u64,       // accepted relax operations
    pub light_relaxations: u64,
    pub heavy_relaxations: u64,
    pub buckets_visited: u32,   // outer-loop iterations
    pub light_pass_repeats: u32, // inner-loop iterations summed over buckets
    pub max_bucket_index: u64,
    pub settled: u32,           // vertices with a finite distance
}

/// Final distances of one run. Immutable once produced.
///
/// Serializes with the infinity sentinel in place of unreachable distances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    pub source: u32,
    pub infinity: u64,
    distances: Vec<Option<u64>>,
    pub stats: RunStats,
}

impl ShortestPaths {
    /// Distance of `v`, or the infinity sentinel if unreachable.
    ///
    /// Panics if `v` is not a vertex of the graph the run was made on.
    pub fn distance(&self, v: u32) -> u64 {
        self.distances[v as usize].unwrap_or(self.infinity)
    }

    /// Panics if `v` is out of range, like [`ShortestPaths::distance`].
    pub fn is_reachable(&self, v: u32) -> bool { self.distances[v as usize].is_some() }

    /// Sentinel-substituted distance, or `None` if `v` is out of range.
    pub fn get(&self, v: u32) -> Option<u64> {
        self.distances.get(v as usize).map(|d| d.unwrap_or(self.infinity))
    }

    pub fn len(&self) -> usize { self.distances.len() }

    pub fn is_empty(&self) -> bool { self.distances.is_empty() }

    /// Distances with the sentinel substituted, indexed by vertex.
    pub fn to_vec(&self) -> Vec<u64> {
        (0..self.len() as u32).map(|v| self.distance(v)).collect()
    }

    pub fn to_map(&self) -> BTreeMap<u32, u64> {
        (0..self.len() as u32).map(|v| (v, self.distance(v))).collect()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_map())?)
    }

    pub(crate) fn raw(&self) -> &[Option<u64>] { &self.distances }
}

impl Serialize for ShortestPaths {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut st = serializer.serialize_struct("ShortestPaths", 4)?;
        st.serialize_field("source", &self.source)?;
        st.serialize_field("infinity", &self.infinity)?;
        st.serialize_field("distances", &self.to_vec())?;
        st.serialize_field("stats", &self.stats)?;
        st.end()
    }
}

/// Delta-stepping over a shared, read-only graph.
#[derive(Debug, Clone, Copy)]
pub struct DeltaStepping<'g> {
    graph: &'g Graph,
    config: DeltaSteppingConfig,
}

impl<'g> DeltaStepping<'g> {
    pub fn new(graph: &'g Graph, config: DeltaSteppingConfig) -> Result<Self> {
        config.validate()?;
        if config.source as usize >= graph.vertex_count() {
            return Err(SsspError::SourceOutOfRange { source_vertex: config.source, vertices: graph.vertex_count() });
        }
        Ok(Self { graph, config })
    }

    pub fn config(&self) -> &DeltaSteppingConfig { &self.config }

    pub fn run(&self) -> Result<ShortestPaths> {
        self.run_with_cancel(&AtomicBool::new(false))
    }

    /// Run to completion unless `cancel` is observed set before a bucket phase.
    pub fn run_with_cancel(&self, cancel: &AtomicBool) -> Result<ShortestPaths> {
        let delta = self.config.delta;
        let mut state = RunState::new(self.graph.vertex_count(), delta);
        let mut stats = RunStats::default();
        state.relax(self.config.source, 0);

        while let Some(i) = state.buckets().min_nonempty_index() {
            if cancel.load(Ordering::Relaxed) {
                tracing::debug!(bucket = i, "cancelled");
                return Err(SsspError::Cancelled { bucket: i });
            }
            stats.buckets_visited += 1;
            // every vertex placed in bucket i during this phase
            let mut touched: Vec<u32> = Vec::new();
            while !state.buckets().is_bucket_empty(i) {
                stats.light_pass_repeats += 1;
                let frontier = state.buckets_mut().take(i);
                let batch = find_requests(&frontier, EdgeClass::Light, delta, self.graph, state.distances());
                for req in batch {
                    if state.relax(req.target, req.candidate) { stats.light_relaxations += 1; }
                }
                touched.extend(frontier);
                debug_assert!(state.check_bucket_invariant());
            }
            touched.sort_unstable();
            touched.dedup();
            let batch = find_requests(&touched, EdgeClass::Heavy, delta, self.graph, state.distances());
            for req in batch {
                if state.relax(req.target, req.candidate) { stats.heavy_relaxations += 1; }
            }
            debug_assert!(state.check_bucket_invariant());
            tracing::debug!(bucket = i, settled = touched.len(), "bucket phase done");
        }

        stats.relaxations = state.relaxations();
        stats.max_bucket_index = state.buckets().max_index();
        let distances = state.into_distances();
        for (v, d) in distances.iter() {
            if let Some(d) = d {
                if d >= self.config.infinity {
                    return Err(SsspError::InfinityTooSmall { vertex: v, distance: d, infinity: self.config.infinity });
                }
                stats.settled += 1;
            }
        }
        tracing::info!(
            source = self.config.source,
            delta,
            relaxations = stats.relaxations,
            light = stats.light_relaxations,
            heavy = stats.heavy_relaxations,
            buckets = stats.buckets_visited,
            settled = stats.settled,
            "delta-stepping finished"
        );
        Ok(ShortestPaths {
            source: self.config.source,
            infinity: self.config.infinity,
            distances: distances.into_inner(),
            stats,
        })
    }
}

/// Shortest distances from `config.source` over `graph`.
pub fn delta_stepping(graph: &Graph, config: DeltaSteppingConfig) -> Result<ShortestPaths> {
    DeltaStepping::new(graph, config)?.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;

    fn cfg(delta: u64) -> DeltaSteppingConfig { DeltaSteppingConfig::default().with_delta(delta) }

    #[test]
    fn light_chain_within_one_bucket_repeats() {
        // 0 -> 1 -> 2 -> 3 all weight 1, delta 5: bucket 1 needs several light passes.
        let g = Graph::from_edges(4, [(0u32, 1u32, 1u64), (1, 2, 1), (2, 3, 1)]).unwrap();
        let sp = delta_stepping(&g, cfg(5)).unwrap();
        assert_eq!(sp.to_vec(), vec![0, 1, 2, 3]);
        assert_eq!(sp.stats.buckets_visited, 2);
        assert_eq!(sp.stats.light_pass_repeats, 4);
        assert_eq!(sp.stats.heavy_relaxations, 0);
        assert_eq!(sp.stats.settled, 4);
    }

    #[test]
    fn heavy_pass_covers_all_touched_vertices() {
        // 1 is reached in bucket 1, improved in the same bucket, and only its
        // heavy edge reaches 3.
        let g = Graph::from_edges(4, [(0u32, 1u32, 5u64), (0, 2, 1), (2, 1, 1), (1, 3, 20)]).unwrap();
        let sp = delta_stepping(&g, cfg(5)).unwrap();
        assert_eq!(sp.to_vec(), vec![0, 2, 1, 22]);
        assert_eq!(sp.stats.heavy_relaxations, 1);
    }

    #[test]
    fn heavy_pass_includes_earlier_snapshots() {
        // Bucket 1 drains in two passes: [1, 2] then [3]. Vertex 1 is only in
        // the first pass and its heavy edge is the only way to reach 4.
        let g = Graph::from_edges(5, [(0u32, 1u32, 3u64), (0, 2, 1), (2, 3, 1), (1, 4, 20)]).unwrap();
        let sp = delta_stepping(&g, cfg(5)).unwrap();
        assert_eq!(sp.to_vec(), vec![0, 3, 1, 2, 23]);
        assert_eq!(sp.distance(4), 23);
        assert_eq!(sp.stats.heavy_relaxations, 1);
        // bucket 0, bucket 1 (two passes), bucket 5
        assert_eq!(sp.stats.light_pass_repeats, 4);
    }

    #[test]
    fn source_out_of_range() {
        let g = Graph::from_edges(2, [(0u32, 1u32, 1u64)]).unwrap();
        let err = DeltaStepping::new(&g, cfg(5).with_source(2)).unwrap_err();
        assert!(matches!(err, SsspError::SourceOutOfRange { source_vertex: 2, vertices: 2 }));
    }

    #[test]
    fn zero_delta_rejected() {
        let g = Graph::from_edges(1, Vec::<Edge>::new()).unwrap();
        assert!(matches!(delta_stepping(&g, cfg(0)), Err(SsspError::NonPositiveDelta)));
    }

    #[test]
    fn sentinel_must_exceed_real_distances() {
        let g = Graph::from_edges(2, [(0u32, 1u32, 50u64)]).unwrap();
        let err = delta_stepping(&g, cfg(5).with_infinity(50)).unwrap_err();
        assert!(matches!(err, SsspError::InfinityTooSmall { vertex: 1, distance: 50, infinity: 50 }));
    }

    #[test]
    fn cancellation_is_observed_between_phases() {
        let g = Graph::from_edges(2, [(0u32, 1u32, 1u64)]).unwrap();
        let flag = AtomicBool::new(true);
        let err = DeltaStepping::new(&g, cfg(5)).unwrap().run_with_cancel(&flag).unwrap_err();
        assert!(matches!(err, SsspError::Cancelled { bucket: 0 }));
    }

    #[test]
    fn json_output_uses_sentinel() {
        let g = Graph::from_edges(3, [(0u32, 1u32, 2u64)]).unwrap();
        let sp = delta_stepping(&g, cfg(5)).unwrap();
        assert_eq!(sp.to_json().unwrap(), r#"{"0":0,"1":2,"2":999999999}"#);
        assert!(!sp.is_reachable(2));
    }

    #[test]
    fn serde_output_uses_sentinel() {
        let g = Graph::from_edges(4, [(0u32, 1u32, 4u64), (1, 2, 3), (0, 2, 10)]).unwrap();
        let sp = delta_stepping(&g, cfg(5)).unwrap();
        let s = serde_json::to_string(&sp).unwrap();
        assert!(!s.contains("null"), "{s}");
        assert!(s.starts_with(r#"{"source":0,"infinity":999999999,"distances":[0,4,7,999999999],"stats":{"#), "{s}");
    }

    #[test]
    fn out_of_range_lookup() {
        let g = Graph::from_edges(2, [(0u32, 1u32, 1u64)]).unwrap();
        let sp = delta_stepping(&g, cfg(5)).unwrap();
        assert_eq!(sp.get(1), Some(1));
        assert_eq!(sp.get(2), None);
    }

    #[test]
    #[should_panic]
    fn distance_panics_out_of_range() {
        let g = Graph::from_edges(1, Vec::<Edge>::new()).unwrap();
        let sp = delta_stepping(&g, cfg(5)).unwrap();
        sp.distance(1);
    }
}
