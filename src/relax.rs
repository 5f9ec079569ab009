//! Run state and the relaxation engine.
//!
//! A [`RunState`] is owned by exactly one run. Distances only change through
//! [`RunState::relax`], which keeps every bucketed vertex in bucket
//! `ceil(dist/delta)`.

use std::collections::BTreeSet;

use crate::buckets::{bucket_index_for, Buckets};
use crate::distance::DistanceMap;

#[derive(Debug, Clone)]
pub struct RunState {
    delta: u64,
    dist: DistanceMap,
    buckets: Buckets,
    relaxations: u64,
}

impl RunState {
    /// Fresh state over `n` vertices; all distances infinite, no buckets.
    pub fn new(n: usize, delta: u64) -> Self {
        debug_assert!(delta > 0);
        Self { delta, dist: DistanceMap::new(n), buckets: Buckets::new(), relaxations: 0 }
    }

    #[inline] pub fn delta(&self) -> u64 { self.delta }
    #[inline] pub fn distances(&self) -> &DistanceMap { &self.dist }
    #[inline] pub fn buckets(&self) -> &Buckets { &self.buckets }
    #[inline] pub fn relaxations(&self) -> u64 { self.relaxations }

    pub(crate) fn buckets_mut(&mut self) -> &mut Buckets { &mut self.buckets }

    /// Offer `candidate` as a new tentative distance for `v`.
    ///
    /// Returns `true` when the distance strictly decreased. An old bucket
    /// entry is removed if present and `v` is then always inserted at the new
    /// index, including when the index did not change.
    pub fn relax(&mut self, v: u32, candidate: u64) -> bool {
        let current = self.dist.get(v);
        if current.is_some_and(|d| candidate >= d) {
            return false;
        }
        if let Some(old) = current {
            self.buckets.remove(bucket_index_for(old, self.delta), v);
        }
        let new_index = bucket_index_for(candidate, self.delta);
        self.buckets.insert(new_index, v);
        self.dist.set(v, candidate);
        self.relaxations += 1;
        tracing::trace!(vertex = v, ?current, candidate, bucket = new_index, "relaxed");
        true
    }

    /// True when every bucketed vertex sits in exactly one bucket, the one
    /// matching its tentative distance.
    pub fn check_bucket_invariant(&self) -> bool {
        let mut seen = BTreeSet::new();
        self.buckets.iter().all(|(i, members)| {
            members.iter().all(|&v| {
                seen.insert(v) && self.dist.get(v).is_some_and(|d| bucket_index_for(d, self.delta) == i)
            })
        })
    }

    /// Index of the bucket currently holding `v`, if any.
    pub fn bucket_of(&self, v: u32) -> Option<u64> {
        self.buckets.iter().find(|(_, m)| m.contains(&v)).map(|(i, _)| i)
    }

    pub fn into_distances(self) -> DistanceMap { self.dist }
}
