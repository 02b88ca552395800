//! Format-specific validation for geometry constraints

use crate::error::{GridError, Result};
use crate::format::constants::{MAGIC_LINE, MAGIC_PREFIX};
use crate::format::GridDims;

/// Validate the format magic line
///
/// The line is trimmed before comparison. A line announcing a different
/// file version is recognized but rejected as unsupported; anything else
/// is an invalid header.
pub fn validate_magic(first_line: &str) -> Result<()> {
    let line = first_line.trim();
    if line == MAGIC_LINE {
        Ok(())
    } else if line.starts_with(MAGIC_PREFIX) {
        Err(GridError::UnsupportedVersion)
    } else {
        Err(GridError::InvalidHeader)
    }
}

/// Validate that all grid extents are positive
pub const fn validate_dims(dims: GridDims) -> Result<()> {
    if dims.is_valid() {
        Ok(())
    } else {
        Err(GridError::InvalidDimensions)
    }
}

/// Validate that all spacing values are positive and finite
pub fn validate_spacing(spacing: [f64; 3]) -> Result<()> {
    let mut i = 0;
    while i < 3 {
        if !(spacing[i].is_finite() && spacing[i] > 0.0) {
            return Err(GridError::InvalidSpacing);
        }
        i += 1;
    }
    Ok(())
}

/// Validate that the scalar count matches the declared shape
///
/// Legacy files are not required to satisfy this; callers decide whether a
/// mismatch is fatal or merely reported.
pub const fn validate_scalar_count(count: usize, dims: GridDims) -> Result<()> {
    if count == dims.product() {
        Ok(())
    } else {
        Err(GridError::ShapeMismatch)
    }
}
