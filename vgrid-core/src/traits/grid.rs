//! Read access to structured scalar grids

use crate::format::GridDims;

/// Format-agnostic read access to a structured scalar grid
pub trait ScalarGrid {
    /// Grid extents
    fn dims(&self) -> GridDims;

    /// Spatial origin of the grid
    fn origin(&self) -> [f64; 3];

    /// Step sizes along each axis
    fn spacing(&self) -> [f64; 3];

    /// Value at the given grid position, `None` outside the grid
    fn value(&self, i: usize, j: usize, k: usize) -> Option<f64>;

    /// Total number of values the grid holds
    fn len(&self) -> usize {
        self.dims().product()
    }

    /// Grid holds no values
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
