//! Stable C ABI over the delta-stepping driver.
//! Graphs are passed as CSR arrays; status codes are 0 on success and
//! `SsspError::code()` otherwise.

use core::slice;

use crate::config::DeltaSteppingConfig;
use crate::driver::{DeltaStepping, RunStats};
use crate::error::{Result, SsspError};
use crate::graph::Graph;

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SsspResultInfo {
    pub relaxations: u64,          // total accepted relax operations
    pub light_relaxations: u64,
    pub heavy_relaxations: u64,
    pub settled: u32,              // vertices with a finite distance
    pub buckets_visited: u32,
    pub light_pass_repeats: u32,
    pub max_bucket_index: u64,
    pub error_code: i32,           // 0 == success
}

impl From<RunStats> for SsspResultInfo {
    fn from(s: RunStats) -> Self {
        Self {
            relaxations: s.relaxations,
            light_relaxations: s.light_relaxations,
            heavy_relaxations: s.heavy_relaxations,
            settled: s.settled,
            buckets_visited: s.buckets_visited,
            light_pass_repeats: s.light_pass_repeats,
            max_bucket_index: s.max_bucket_index,
            error_code: 0,
        }
    }
}

#[no_mangle]
pub extern "C" fn sssp_version() -> u32 { 1 }

/// Delta-stepping from `source` over a CSR graph with `n` vertices.
///
/// Unreachable vertices receive `infinity` in `out_dist`.
///
/// # Safety
/// `offsets` must point to `n + 1` values, `targets` and `weights` to
/// `offsets[n]` values each, and `out_dist` to `n` writable values. `info`
/// may be null.
#[no_mangle]
pub unsafe extern "C" fn sssp_run_delta_stepping(
    n: u32,
    offsets: *const u32, // len n+1
    targets: *const u32, // len m
    weights: *const u64, // len m
    source: u32,
    delta: u64,
    infinity: u64,
    out_dist: *mut u64,  // len n
    info: *mut SsspResultInfo,
) -> i32 {
    if offsets.is_null() || targets.is_null() || weights.is_null() || out_dist.is_null() {
        let code = SsspError::InvalidArgument("null pointer argument".into()).code();
        if !info.is_null() { *info = SsspResultInfo { error_code: code, ..Default::default() }; }
        return code;
    }
    let n_usize = n as usize;
    let off = slice::from_raw_parts(offsets, n_usize + 1);
    let m = off[n_usize] as usize;
    let tgt = slice::from_raw_parts(targets, m);
    let wts = slice::from_raw_parts(weights, m);
    let dist = slice::from_raw_parts_mut(out_dist, n_usize);

    let config = DeltaSteppingConfig { delta, source, infinity };
    match run_csr(off, tgt, wts, config, dist) {
        Ok(stats) => {
            if !info.is_null() { *info = SsspResultInfo::from(stats); }
            0
        }
        Err(e) => {
            tracing::debug!(error = %e, "sssp_run_delta_stepping failed");
            let code = e.code();
            if !info.is_null() { *info = SsspResultInfo { error_code: code, ..Default::default() }; }
            code
        }
    }
}

fn run_csr(off: &[u32], tgt: &[u32], wts: &[u64], config: DeltaSteppingConfig, dist: &mut [u64]) -> Result<RunStats> {
    if off.len() <= 1 {
        return Err(SsspError::SourceOutOfRange { source_vertex: config.source, vertices: 0 });
    }
    let graph = Graph::from_csr(off.to_vec(), tgt.to_vec(), wts.to_vec())?;
    let sp = DeltaStepping::new(&graph, config)?.run()?;
    for (slot, d) in dist.iter_mut().zip(sp.to_vec()) { *slot = d; }
    Ok(sp.stats)
}
