//! Abstract interfaces for the VGRID ecosystem
//!
//! This module defines the trait abstractions used around the format.
//! Traits are pure interfaces - no concrete implementations.

pub mod grid;
pub mod sink;

pub use grid::ScalarGrid;
pub use sink::{CellMatrix, GridSink, GridVis};
