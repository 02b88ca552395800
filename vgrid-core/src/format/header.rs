//! Structured-points header definitions
//!
//! This module contains the grid header collected while scanning a file and
//! the validated geometry handed to grid assembly.

use crate::error::{GridError, Result};
use crate::validation::{validate_dims, validate_spacing};

/// Grid extent along the three axes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridDims {
    /// Extent along x (the fastest-varying axis in storage order)
    pub nx: usize,
    /// Extent along y
    pub ny: usize,
    /// Extent along z
    pub nz: usize,
}

impl GridDims {
    /// Create dimensions from the three extents
    pub const fn new(nx: usize, ny: usize, nz: usize) -> Self {
        Self { nx, ny, nz }
    }

    /// Total number of values the grid holds
    ///
    /// Saturates on overflow; use [`GridDims::checked_product`] when the
    /// extents are untrusted.
    pub const fn product(&self) -> usize {
        self.nx.saturating_mul(self.ny).saturating_mul(self.nz)
    }

    /// Total number of values, or `None` when the product overflows
    pub const fn checked_product(&self) -> Option<usize> {
        match self.nx.checked_mul(self.ny) {
            Some(partial) => partial.checked_mul(self.nz),
            None => None,
        }
    }

    /// All extents are positive and the total count is representable
    pub const fn is_valid(&self) -> bool {
        self.nx > 0 && self.ny > 0 && self.nz > 0 && self.checked_product().is_some()
    }

    /// Shape as an `(nx, ny, nz)` tuple
    pub const fn as_tuple(&self) -> (usize, usize, usize) {
        (self.nx, self.ny, self.nz)
    }
}

impl core::fmt::Display for GridDims {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} x {} x {}", self.nx, self.ny, self.nz)
    }
}

/// Header fields collected while scanning a file
///
/// Every field is optional during the scan: the format places no ordering
/// constraint on header lines and omissions are only an error once grid
/// assembly needs the geometry.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridHeader {
    /// Extents from the DIMENSIONS line
    pub dims: Option<GridDims>,
    /// Spatial origin from the ORIGIN line
    pub origin: Option<[f64; 3]>,
    /// Step sizes from the SPACING line
    pub spacing: Option<[f64; 3]>,
    /// Declared value count from the POINT DATA line (stored, not enforced)
    pub point_count: Option<usize>,
}

impl GridHeader {
    /// Create an empty header
    pub const fn new() -> Self {
        Self {
            dims: None,
            origin: None,
            spacing: None,
            point_count: None,
        }
    }

    /// All geometry fields are present
    pub const fn is_complete(&self) -> bool {
        self.dims.is_some() && self.origin.is_some() && self.spacing.is_some()
    }

    /// Validate presence and ranges of the geometry fields
    ///
    /// Returns the fully-specified geometry, or the first missing/invalid
    /// field as an error. Scanning never calls this; grid assembly does.
    pub fn validate(&self) -> Result<GridGeometry> {
        let dims = self.dims.ok_or(GridError::MissingDimensions)?;
        validate_dims(dims)?;
        let origin = self.origin.ok_or(GridError::MissingOrigin)?;
        let spacing = self.spacing.ok_or(GridError::MissingSpacing)?;
        validate_spacing(spacing)?;

        Ok(GridGeometry {
            dims,
            origin,
            spacing,
        })
    }
}

/// Fully-specified grid geometry produced by [`GridHeader::validate`]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridGeometry {
    /// Grid extents
    pub dims: GridDims,
    /// Spatial origin
    pub origin: [f64; 3],
    /// Step sizes along each axis
    pub spacing: [f64; 3],
}
