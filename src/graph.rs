//! Read-only directed graph in CSR form (offsets / targets / weights).

use crate::error::{Result, SsspError};

/// A directed edge `from -> to` with a nonnegative integer weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub from: u32,
    pub to: u32,
    pub weight: u64,
}

impl Edge {
    pub fn new(from: u32, to: u32, weight: u64) -> Self { Self { from, to, weight } }
}

impl From<(u32, u32, u64)> for Edge {
    fn from((from, to, weight): (u32, u32, u64)) -> Self { Self { from, to, weight } }
}

/// Compressed sparse row adjacency.
///
/// `offsets` has `n + 1` entries; the outgoing edges of `u` are
/// `targets[offsets[u]..offsets[u+1]]` with matching `weights`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Graph {
    offsets: Vec<u32>,
    targets: Vec<u32>,
    weights: Vec<u64>,
}

impl Graph {
    /// Build from an edge list over vertices `0..n`.
    ///
    /// Per-source edge order follows input order.
    pub fn from_edges<I, E>(n: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        let edges: Vec<Edge> = edges.into_iter().map(Into::into).collect();
        let mut degree = vec![0u32; n];
        for e in &edges {
            for v in [e.from, e.to] {
                if v as usize >= n {
                    return Err(SsspError::VertexOutOfRange { vertex: v, vertices: n });
                }
            }
            degree[e.from as usize] += 1;
        }
        let mut offsets = Vec::with_capacity(n + 1);
        offsets.push(0u32);
        for d in &degree { offsets.push(offsets[offsets.len() - 1] + d); }
        // counting-sort placement keeps input order within each source
        let mut cursor: Vec<u32> = offsets[..n].to_vec();
        let mut targets = vec![0u32; edges.len()];
        let mut weights = vec![0u64; edges.len()];
        for e in &edges {
            let slot = cursor[e.from as usize] as usize;
            targets[slot] = e.to;
            weights[slot] = e.weight;
            cursor[e.from as usize] += 1;
        }
        Ok(Self { offsets, targets, weights })
    }

    /// Adopt raw CSR arrays after checking their shape.
    pub fn from_csr(offsets: Vec<u32>, targets: Vec<u32>, weights: Vec<u64>) -> Result<Self> {
        let Some(&m) = offsets.last() else {
            return Err(SsspError::InvalidArgument("CSR offsets must have n + 1 entries".into()));
        };
        if offsets[0] != 0 || offsets.windows(2).any(|w| w[0] > w[1]) {
            return Err(SsspError::InvalidArgument("CSR offsets must start at 0 and be nondecreasing".into()));
        }
        if m as usize != targets.len() || targets.len() != weights.len() {
            return Err(SsspError::InvalidArgument(format!(
                "CSR arrays disagree: offsets end at {m}, {} targets, {} weights",
                targets.len(),
                weights.len()
            )));
        }
        let n = offsets.len() - 1;
        if let Some(&bad) = targets.iter().find(|&&t| t as usize >= n) {
            return Err(SsspError::VertexOutOfRange { vertex: bad, vertices: n });
        }
        Ok(Self { offsets, targets, weights })
    }

    #[inline]
    pub fn vertex_count(&self) -> usize { self.offsets.len().saturating_sub(1) }

    #[inline]
    pub fn edge_count(&self) -> usize { self.targets.len() }

    /// Outgoing `(target, weight)` pairs of `u`.
    #[inline]
    pub fn out_edges(&self, u: u32) -> impl Iterator<Item = (u32, u64)> + '_ {
        let u = u as usize;
        let (start, end) = (self.offsets[u] as usize, self.offsets[u + 1] as usize);
        self.targets[start..end].iter().copied().zip(self.weights[start..end].iter().copied())
    }

    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.vertex_count() as u32)
            .flat_map(move |u| self.out_edges(u).map(move |(v, w)| Edge::new(u, v, w)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csr_layout_preserves_input_order() {
        let g = Graph::from_edges(4, [(2u32, 0u32, 9u64), (0, 1, 4), (2, 3, 1), (0, 2, 10)]).unwrap();
        assert_eq!(g.vertex_count(), 4);
        assert_eq!(g.edge_count(), 4);
        assert_eq!(g.out_edges(0).collect::<Vec<_>>(), vec![(1, 4), (2, 10)]);
        assert_eq!(g.out_edges(1).count(), 0);
        assert_eq!(g.out_edges(2).collect::<Vec<_>>(), vec![(0, 9), (3, 1)]);
        assert_eq!(g.edges().count(), 4);
    }

    #[test]
    fn endpoint_out_of_range() {
        let err = Graph::from_edges(2, [(0u32, 2u32, 1u64)]).unwrap_err();
        assert!(matches!(err, SsspError::VertexOutOfRange { vertex: 2, vertices: 2 }));
    }

    #[test]
    fn from_csr_checks_shape() {
        assert!(Graph::from_csr(vec![0, 1, 1], vec![1], vec![3]).is_ok());
        assert!(Graph::from_csr(vec![], vec![], vec![]).is_err());
        assert!(Graph::from_csr(vec![0, 2, 1], vec![1, 0], vec![1, 1]).is_err());
        assert!(Graph::from_csr(vec![0, 1], vec![1], vec![1, 2]).is_err());
        assert!(matches!(
            Graph::from_csr(vec![0, 1], vec![5], vec![1]),
            Err(SsspError::VertexOutOfRange { vertex: 5, .. })
        ));
    }
}
