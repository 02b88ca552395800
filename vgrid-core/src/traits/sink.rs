//! Grid assembly sink trait
//!
//! This module defines the abstract interface for the host-side data
//! collection that receives parsed grids. It is a pure interface with no
//! implementations, mirroring the three operations the consumer exposes:
//! registering a spatial cell, creating a grid over it, and attaching a
//! named scalar property.

use crate::error::Result;
use crate::format::{GridDims, GridKind};
use crate::format::constants::DEFAULT_TRANSPARENCY;

/// Row-major 3x4 transform matrix describing a spatial cell
///
/// The three rows are the cell vectors with the translation (origin) in the
/// fourth column.
pub type CellMatrix = [[f64; 4]; 3];

/// Visualization settings attached to a created grid
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridVis {
    /// Rendering is enabled
    pub enabled: bool,
    /// Surface transparency in `[0, 1]`
    pub transparency: f64,
}

impl Default for GridVis {
    fn default() -> Self {
        Self {
            enabled: true,
            transparency: DEFAULT_TRANSPARENCY,
        }
    }
}

/// Sink receiving assembled grids
///
/// Implementations may be in-memory collections, host-application bridges,
/// or test doubles. Identifier strings are borrowed; implementations that
/// retain them must copy.
pub trait GridSink {
    /// Handle to a registered spatial cell
    type CellId: Copy;

    /// Handle to a created grid
    type GridId: Copy;

    /// Register a spatial cell from a 3x4 transform matrix and
    /// periodic-boundary flags
    fn create_cell(&mut self, matrix: CellMatrix, pbc: [bool; 3]) -> Result<Self::CellId>;

    /// Create a named grid over a registered cell
    fn create_grid(
        &mut self,
        identifier: &str,
        cell: Self::CellId,
        shape: GridDims,
        kind: GridKind,
        vis: Option<GridVis>,
    ) -> Result<Self::GridId>;

    /// Attach a named scalar property to a created grid
    ///
    /// Values are expected in column-major flat order.
    fn create_property(&mut self, grid: Self::GridId, name: &str, values: &[f64]) -> Result<()>;
}
