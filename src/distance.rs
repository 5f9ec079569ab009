//! Per-vertex tentative distances. `None` is infinity.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMap {
    dist: Vec<Option<u64>>,
}

impl DistanceMap {
    pub fn new(n: usize) -> Self { Self { dist: vec![None; n] } }

    #[inline]
    pub fn get(&self, v: u32) -> Option<u64> { self.dist[v as usize] }

    // Only the relaxation engine writes distances.
    #[inline]
    pub(crate) fn set(&mut self, v: u32, d: u64) {
        debug_assert!(self.dist[v as usize].map_or(true, |old| d <= old), "distance increased for {v}");
        self.dist[v as usize] = Some(d);
    }

    pub fn len(&self) -> usize { self.dist.len() }

    pub fn is_empty(&self) -> bool { self.dist.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (u32, Option<u64>)> + '_ {
        self.dist.iter().enumerate().map(|(v, d)| (v as u32, *d))
    }

    pub fn into_inner(self) -> Vec<Option<u64>> { self.dist }
}
