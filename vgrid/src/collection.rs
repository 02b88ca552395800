//! In-memory data collection receiving assembled grids
//!
//! A stand-in for the host application's data collection: it implements
//! [`GridSink`] and stores spatial cells, voxel grids, and named scalar
//! properties for inspection.

use hashbrown::HashMap;
use nalgebra::Matrix3x4;

use vgrid_core::{CellMatrix, GridDims, GridError, GridKind, GridSink, GridVis, ScalarGrid};

/// Handle to a registered spatial cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellId(usize);

/// Handle to a created voxel grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridId(usize);

/// Spatial cell: a 3x4 transform with periodic-boundary flags
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationCell {
    /// Cell vectors in the first three columns, origin in the fourth
    pub matrix: Matrix3x4<f64>,
    /// Periodic boundary condition per axis
    pub pbc: [bool; 3],
}

impl SimulationCell {
    /// Cell origin (the translation column)
    pub fn origin(&self) -> [f64; 3] {
        [self.matrix[(0, 3)], self.matrix[(1, 3)], self.matrix[(2, 3)]]
    }

    /// Edge lengths along the three cell vectors
    pub fn extents(&self) -> [f64; 3] {
        [
            self.matrix.column(0).norm(),
            self.matrix.column(1).norm(),
            self.matrix.column(2).norm(),
        ]
    }
}

/// Voxel grid over a spatial cell with named scalar properties
#[derive(Debug, Clone, PartialEq)]
pub struct VoxelGrid {
    /// Grid identifier within the collection
    pub identifier: String,
    /// Cell this grid spans
    pub cell: CellId,
    /// Grid extents
    pub shape: GridDims,
    /// Interpretation of the stored values
    pub kind: GridKind,
    /// Visualization settings, if any
    pub vis: Option<GridVis>,
    properties: HashMap<String, Vec<f64>>,
}

impl VoxelGrid {
    /// Property values by name, in column-major flat order
    pub fn property(&self, name: &str) -> Option<&[f64]> {
        self.properties.get(name).map(Vec::as_slice)
    }

    /// Names of all attached properties
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    /// Number of values in the first attached property
    pub fn property_len(&self) -> usize {
        self.properties.values().next().map_or(0, Vec::len)
    }
}

/// In-memory collection of cells and grids
#[derive(Debug, Default)]
pub struct DataCollection {
    cells: Vec<SimulationCell>,
    grids: Vec<VoxelGrid>,
}

impl DataCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a registered cell
    pub fn cell(&self, id: CellId) -> Option<&SimulationCell> {
        self.cells.get(id.0)
    }

    /// Look up a created grid
    pub fn grid(&self, id: GridId) -> Option<&VoxelGrid> {
        self.grids.get(id.0)
    }

    /// All grids in creation order
    pub fn grids(&self) -> &[VoxelGrid] {
        &self.grids
    }

    /// Find a grid by identifier
    pub fn find_grid(&self, identifier: &str) -> Option<&VoxelGrid> {
        self.grids.iter().find(|g| g.identifier == identifier)
    }
}

impl GridSink for DataCollection {
    type CellId = CellId;
    type GridId = GridId;

    fn create_cell(
        &mut self,
        matrix: CellMatrix,
        pbc: [bool; 3],
    ) -> vgrid_core::Result<Self::CellId> {
        let matrix = Matrix3x4::new(
            matrix[0][0],
            matrix[0][1],
            matrix[0][2],
            matrix[0][3],
            matrix[1][0],
            matrix[1][1],
            matrix[1][2],
            matrix[1][3],
            matrix[2][0],
            matrix[2][1],
            matrix[2][2],
            matrix[2][3],
        );
        self.cells.push(SimulationCell { matrix, pbc });
        Ok(CellId(self.cells.len() - 1))
    }

    fn create_grid(
        &mut self,
        identifier: &str,
        cell: Self::CellId,
        shape: GridDims,
        kind: GridKind,
        vis: Option<GridVis>,
    ) -> vgrid_core::Result<Self::GridId> {
        if cell.0 >= self.cells.len() {
            return Err(GridError::IndexOutOfBounds);
        }
        if !shape.is_valid() {
            return Err(GridError::InvalidDimensions);
        }
        self.grids.push(VoxelGrid {
            identifier: identifier.to_string(),
            cell,
            shape,
            kind,
            vis,
            properties: HashMap::new(),
        });
        Ok(GridId(self.grids.len() - 1))
    }

    fn create_property(
        &mut self,
        grid: Self::GridId,
        name: &str,
        values: &[f64],
    ) -> vgrid_core::Result<()> {
        let grid = self
            .grids
            .get_mut(grid.0)
            .ok_or(GridError::IndexOutOfBounds)?;
        grid.properties.insert(name.to_string(), values.to_vec());
        Ok(())
    }
}

/// Grid view pairing a voxel grid with its cell geometry
pub struct GridView<'a> {
    grid: &'a VoxelGrid,
    cell: &'a SimulationCell,
    values: &'a [f64],
}

impl DataCollection {
    /// View a grid's first property together with its cell geometry
    pub fn view<'a>(&'a self, id: GridId, property: &str) -> Option<GridView<'a>> {
        let grid = self.grid(id)?;
        let cell = self.cell(grid.cell)?;
        let values = grid.property(property)?;
        Some(GridView { grid, cell, values })
    }
}

impl ScalarGrid for GridView<'_> {
    fn dims(&self) -> GridDims {
        self.grid.shape
    }

    fn origin(&self) -> [f64; 3] {
        self.cell.origin()
    }

    fn spacing(&self) -> [f64; 3] {
        let extents = self.cell.extents();
        let (nx, ny, nz) = self.grid.shape.as_tuple();
        [
            extents[0] / nx as f64,
            extents[1] / ny as f64,
            extents[2] / nz as f64,
        ]
    }

    fn value(&self, i: usize, j: usize, k: usize) -> Option<f64> {
        if !vgrid_core::in_bounds(i, j, k, self.grid.shape) {
            return None;
        }
        self.values
            .get(vgrid_core::column_major_index(i, j, k, self.grid.shape))
            .copied()
    }
}
