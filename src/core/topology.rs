//! Adjacency structure over LED positions.
//!
//! Neighbor lists are precomputed once; the search only reads them. The
//! relation is symmetric and self-loop-free, and `edges` holds each
//! unordered neighbor pair exactly once, so per-evaluation cost is O(E).

/// A fixed set of positions plus each position's neighbor list.
///
/// Position indices double as the canonical output scan order: ascending
/// index is chain order for [`Topology::chain`] and row-major y/x with
/// the channel plane innermost for [`Topology::grid2d`].
#[derive(Debug, Clone)]
pub struct Topology {
    neighbors: Vec<Vec<usize>>,
    edges: Vec<(usize, usize)>,
}

impl Topology {
    /// A 1-D strip: position p neighbors p-1 and p+1, clipped to range.
    pub fn chain(positions: usize) -> Self {
        let edges = (1..positions).map(|p| (p - 1, p)).collect();
        Self::from_edges(positions, edges)
    }

    /// An H x W grid of LED cells with `planes` independent channel
    /// planes per cell. Position (y, x, c) maps to index
    /// `(y * W + x) * planes + c` and neighbors (y±1, x, c) and
    /// (y, x±1, c); edges never cross planes, so each plane is an
    /// independent layout sharing the flat index space.
    pub fn grid2d(height: usize, width: usize, planes: usize) -> Self {
        let positions = height * width * planes;
        let index = |y: usize, x: usize, c: usize| (y * width + x) * planes + c;
        let mut edges = Vec::new();
        for y in 0..height {
            for x in 0..width {
                for c in 0..planes {
                    if y + 1 < height {
                        edges.push((index(y, x, c), index(y + 1, x, c)));
                    }
                    if x + 1 < width {
                        edges.push((index(y, x, c), index(y, x + 1, c)));
                    }
                }
            }
        }
        Self::from_edges(positions, edges)
    }

    fn from_edges(positions: usize, edges: Vec<(usize, usize)>) -> Self {
        let mut neighbors = vec![Vec::new(); positions];
        for &(p, q) in &edges {
            debug_assert!(p != q && p < positions && q < positions);
            neighbors[p].push(q);
            neighbors[q].push(p);
        }
        Self { neighbors, edges }
    }

    pub fn positions(&self) -> usize {
        self.neighbors.len()
    }

    pub fn neighbors(&self, p: usize) -> &[usize] {
        &self.neighbors[p]
    }

    /// All unordered neighbor pairs, each exactly once.
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_neighbors() {
        let t = Topology::chain(4);
        assert_eq!(t.positions(), 4);
        assert_eq!(t.neighbors(0), &[1]);
        let mut n1 = t.neighbors(1).to_vec();
        n1.sort();
        assert_eq!(n1, vec![0, 2]);
        assert_eq!(t.neighbors(3), &[2]);
        assert_eq!(t.edges().len(), 3);
    }

    #[test]
    fn grid_corner_neighbors() {
        let t = Topology::grid2d(2, 2, 1);
        assert_eq!(t.positions(), 4);
        // (0,0,0) -> (0,1,0)=1 and (1,0,0)=2
        let mut n = t.neighbors(0).to_vec();
        n.sort();
        assert_eq!(n, vec![1, 2]);
        assert_eq!(t.edges().len(), 4);
    }

    #[test]
    fn grid_edges_stay_within_plane() {
        let planes = 3;
        let t = Topology::grid2d(3, 4, planes);
        assert_eq!(t.positions(), 3 * 4 * planes);
        for &(p, q) in t.edges() {
            assert_eq!(p % planes, q % planes);
        }
        // Per plane: H*(W-1) + W*(H-1) horizontal+vertical edges.
        assert_eq!(t.edges().len(), planes * (3 * 3 + 4 * 2));
    }

    #[test]
    fn neighbor_relation_is_symmetric_and_loop_free() {
        let t = Topology::grid2d(3, 3, 2);
        for p in 0..t.positions() {
            for &q in t.neighbors(p) {
                assert_ne!(p, q);
                assert!(t.neighbors(q).contains(&p));
            }
        }
    }
}
