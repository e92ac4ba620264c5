//! Sparse adjacency view of a stencil graph.
//!
//! The view stores each row's distinct neighbour columns in CSR form with an
//! implicit value of 1. On the symmetry axes a vp stencil names the same stp
//! twice (west and east); the view lists that column once, so it records
//! connectivity only. Coefficients stay in the [`CoeffTable`](super::CoeffTable).

use faer::sparse::{SparseRowMat, Triplet};

use super::error::MeshError;
use super::graph::StencilGraph;

/// Compressed sparse row adjacency with unit values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    nrows: usize,
    ncols: usize,
    row_ptr: Vec<usize>,
    col_idx: Vec<usize>,
}

impl AdjacencyMatrix {
    /// Build from a graph whose neighbour IDs index a pool of size `ncols`.
    ///
    /// # Errors
    ///
    /// [`MeshError::InvariantViolation`] if a neighbour ID is `>= ncols`.
    pub fn from_graph<const N: usize>(
        graph: &StencilGraph<N>,
        ncols: usize,
    ) -> Result<Self, MeshError> {
        let mut row_ptr = Vec::with_capacity(graph.len() + 1);
        let mut col_idx = Vec::with_capacity(graph.len() * N);
        row_ptr.push(0);

        for (gid, row) in graph.iter() {
            let mut cols = *row;
            cols.sort_unstable();
            let mut prev = None;
            for col in cols {
                if col >= ncols {
                    return Err(MeshError::invariant(format!(
                        "{} row {}: neighbour {} out of range ({} columns)",
                        graph.pool(),
                        gid,
                        col,
                        ncols
                    )));
                }
                if prev != Some(col) {
                    col_idx.push(col);
                    prev = Some(col);
                }
            }
            row_ptr.push(col_idx.len());
        }

        Ok(Self {
            nrows: graph.len(),
            ncols,
            row_ptr,
            col_idx,
        })
    }

    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Number of stored entries.
    #[inline]
    pub fn nnz(&self) -> usize {
        self.col_idx.len()
    }

    /// Sorted distinct columns of row `i`.
    pub fn row(&self, i: usize) -> &[usize] {
        &self.col_idx[self.row_ptr[i]..self.row_ptr[i + 1]]
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.nrows && self.row(row).binary_search(&col).is_ok()
    }

    /// Convert to a faer sparse matrix for diagnostics.
    pub fn to_faer(&self) -> Result<SparseRowMat<usize, f64>, MeshError> {
        let triplets: Vec<Triplet<usize, usize, f64>> = (0..self.nrows)
            .flat_map(|i| self.row(i).iter().map(move |&j| Triplet::new(i, j, 1.0)))
            .collect();

        SparseRowMat::try_new_from_triplets(self.nrows, self.ncols, &triplets)
            .map_err(|e| MeshError::invariant(format!("sparse assembly failed: {:?}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::dof::DofPool;

    fn graph() -> StencilGraph<4> {
        StencilGraph::from_rows(DofPool::Vp, vec![[1, 0, 1, 0], [2, 1, 3, 0], [3, 2, 3, 2]])
    }

    #[test]
    fn test_duplicates_collapse() {
        let m = AdjacencyMatrix::from_graph(&graph(), 4).unwrap();
        assert_eq!(m.nrows(), 3);
        assert_eq!(m.ncols(), 4);
        assert_eq!(m.row(0), &[0, 1]);
        assert_eq!(m.row(1), &[0, 1, 2, 3]);
        assert_eq!(m.row(2), &[2, 3]);
        assert_eq!(m.nnz(), 8);
    }

    #[test]
    fn test_contains() {
        let m = AdjacencyMatrix::from_graph(&graph(), 4).unwrap();
        assert!(m.contains(1, 3));
        assert!(!m.contains(0, 3));
        assert!(!m.contains(5, 0));
    }

    #[test]
    fn test_out_of_range_column() {
        let err = AdjacencyMatrix::from_graph(&graph(), 3).unwrap_err();
        assert!(matches!(err, MeshError::InvariantViolation(_)));
    }

    #[test]
    fn test_to_faer_shape() {
        let m = AdjacencyMatrix::from_graph(&graph(), 4).unwrap();
        let sparse = m.to_faer().unwrap();
        assert_eq!(sparse.nrows(), 3);
        assert_eq!(sparse.ncols(), 4);
    }
}
