//! Sparse bucket structure: index -> set of vertices.
//!
//! Bucket `i` holds vertices whose tentative distance lies in
//! `((i-1)*delta, i*delta]`; distance 0 maps to bucket 0. Empty buckets are
//! dropped so the first key is always the minimum nonempty index.

use std::collections::{BTreeMap, BTreeSet};

/// `ceil(d / delta)`.
#[inline]
pub fn bucket_index_for(d: u64, delta: u64) -> u64 {
    d.div_ceil(delta)
}

#[derive(Debug, Clone, Default)]
pub struct Buckets {
    map: BTreeMap<u64, BTreeSet<u32>>,
    max_index: u64,
}

impl Buckets {
    pub fn new() -> Self { Self::default() }

    pub fn insert(&mut self, i: u64, v: u32) {
        self.map.entry(i).or_default().insert(v);
        self.max_index = self.max_index.max(i);
    }

    /// Returns whether `v` was a member. Removing the last member drops the bucket.
    pub fn remove(&mut self, i: u64, v: u32) -> bool {
        let Some(set) = self.map.get_mut(&i) else { return false };
        let removed = set.remove(&v);
        if set.is_empty() {
            self.map.remove(&i);
        }
        removed
    }

    #[inline]
    pub fn min_nonempty_index(&self) -> Option<u64> {
        self.map.keys().next().copied()
    }

    pub fn members(&self, i: u64) -> impl Iterator<Item = u32> + '_ {
        self.map.get(&i).into_iter().flat_map(|s| s.iter().copied())
    }

    /// Remove bucket `i` and hand back its members.
    pub fn take(&mut self, i: u64) -> Vec<u32> {
        self.map.remove(&i).map(|s| s.into_iter().collect()).unwrap_or_default()
    }

    pub fn is_bucket_empty(&self, i: u64) -> bool { !self.map.contains_key(&i) }

    pub fn is_empty(&self) -> bool { self.map.is_empty() }

    /// Highest index ever populated.
    pub fn max_index(&self) -> u64 { self.max_index }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (u64, &BTreeSet<u32>)> + '_ {
        self.map.iter().map(|(i, s)| (*i, s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_is_ceiling() {
        assert_eq!(bucket_index_for(0, 5), 0);
        assert_eq!(bucket_index_for(1, 5), 1);
        assert_eq!(bucket_index_for(5, 5), 1);
        assert_eq!(bucket_index_for(6, 5), 2);
        assert_eq!(bucket_index_for(7, 1), 7);
    }

    #[test]
    fn last_removal_makes_bucket_absent() {
        let mut b = Buckets::new();
        b.insert(3, 1);
        b.insert(3, 2);
        b.insert(1, 7);
        assert_eq!(b.min_nonempty_index(), Some(1));
        assert!(b.remove(1, 7));
        assert!(!b.remove(1, 7));
        assert_eq!(b.min_nonempty_index(), Some(3));
        assert_eq!(b.members(3).collect::<Vec<_>>(), vec![1, 2]);
        b.remove(3, 1);
        b.remove(3, 2);
        assert!(b.is_empty());
        assert_eq!(b.min_nonempty_index(), None);
        assert_eq!(b.max_index(), 3);
    }

    #[test]
    fn take_clears_bucket() {
        let mut b = Buckets::new();
        b.insert(0, 4);
        b.insert(0, 2);
        assert_eq!(b.take(0), vec![2, 4]);
        assert!(b.is_bucket_empty(0));
        assert!(b.take(0).is_empty());
    }
}
