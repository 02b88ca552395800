//! Scalar field storage and reshaping
//!
//! Values are kept in file order, which is also the column-major flat order
//! of the reshaped grid. The reshape/flatten pair documents that layout
//! contract: with consistent ordering the round trip is the identity.

use alloc::vec::Vec;

use crate::error::{GridError, Result};
use crate::format::GridDims;
use crate::layout::{column_major_index, in_bounds};

/// Ordered sequence of scalar values with an optional 3-D shape
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScalarField {
    values: Vec<f64>,
    shape: Option<GridDims>,
}

impl ScalarField {
    /// Create an empty, shapeless field
    pub const fn new() -> Self {
        Self {
            values: Vec::new(),
            shape: None,
        }
    }

    /// Create a shapeless field from existing values
    pub fn from_values(values: Vec<f64>) -> Self {
        Self {
            values,
            shape: None,
        }
    }

    /// Append a single value in file order
    pub fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    /// Append a batch of values in file order
    pub fn push_values<I: IntoIterator<Item = f64>>(&mut self, values: I) {
        self.values.extend(values);
    }

    /// Number of stored values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Field holds no values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Current shape, if the field has been reshaped
    pub const fn shape(&self) -> Option<GridDims> {
        self.shape
    }

    /// Values in file order
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Consume the field, returning the values in file order
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    /// Shape stored and matching the value count
    pub fn is_consistent(&self) -> bool {
        match self.shape {
            Some(dims) => dims.product() == self.values.len(),
            None => false,
        }
    }

    /// Reshape into a 3-D grid, requiring an exact count match
    pub fn reshape(&mut self, dims: GridDims) -> Result<()> {
        if dims.product() != self.values.len() {
            return Err(GridError::ShapeMismatch);
        }
        self.shape = Some(dims);
        Ok(())
    }

    /// Reshape without checking the count against the shape
    ///
    /// Legacy files occasionally declare more points than they carry; the
    /// shape is recorded regardless and indexed access stays bounds-checked.
    pub fn reshape_lenient(&mut self, dims: GridDims) {
        self.shape = Some(dims);
    }

    /// Value at `(i, j, k)` in the reshaped grid
    pub fn value(&self, i: usize, j: usize, k: usize) -> Result<f64> {
        let dims = self.shape.ok_or(GridError::MissingDimensions)?;
        if !in_bounds(i, j, k, dims) {
            return Err(GridError::IndexOutOfBounds);
        }
        self.values
            .get(column_major_index(i, j, k, dims))
            .copied()
            .ok_or(GridError::IndexOutOfBounds)
    }

    /// Values flattened in column-major order
    ///
    /// For a consistent field this walks the grid with the first index
    /// varying fastest and therefore reproduces the file-order sequence.
    /// A shapeless or inconsistent field is returned as stored.
    pub fn flatten_fortran(&self) -> Vec<f64> {
        let Some(dims) = self.shape.filter(|_| self.is_consistent()) else {
            return self.values.clone();
        };
        let mut out = Vec::with_capacity(dims.product());
        for k in 0..dims.nz {
            for j in 0..dims.ny {
                for i in 0..dims.nx {
                    out.push(self.values[column_major_index(i, j, k, dims)]);
                }
            }
        }
        out
    }
}
