//! Column-major (Fortran) layout math
//!
//! Pure index arithmetic for the storage order expected by the consuming
//! grid structure: the first index varies fastest.

use crate::format::GridDims;

/// Flat index of `(i, j, k)` in column-major order
///
/// Saturates rather than wraps for shapes whose count is not representable,
/// so a bounds-checked lookup simply misses.
pub const fn column_major_index(i: usize, j: usize, k: usize, dims: GridDims) -> usize {
    i.saturating_add(dims.nx.saturating_mul(j.saturating_add(dims.ny.saturating_mul(k))))
}

/// Strides of the three axes in column-major order
pub const fn column_major_strides(dims: GridDims) -> [usize; 3] {
    [1, dims.nx, dims.nx.saturating_mul(dims.ny)]
}

/// Check that `(i, j, k)` lies inside the grid
pub const fn in_bounds(i: usize, j: usize, k: usize, dims: GridDims) -> bool {
    i < dims.nx && j < dims.ny && k < dims.nz
}
