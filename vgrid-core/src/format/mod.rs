//! Text format definitions for the legacy structured-points layout
//!
//! This module contains pure data structure definitions for the file format.
//! No I/O operations or concrete implementations - only format specifications.

pub mod constants;
pub mod header;
pub mod kind;

// Re-export format definitions
pub use header::{GridDims, GridGeometry, GridHeader};
pub use kind::GridKind;
