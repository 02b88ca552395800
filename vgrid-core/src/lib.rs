#![no_std]

//! VGRID Core - Legacy VTK Structured-Points Format Definitions
//!
//! This crate provides core format definitions, layout math, and traits for
//! the legacy VTK "DataFile Version 2.0" structured-points text format

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
#[cfg(feature = "alloc")]
pub mod field;
pub mod format;
pub mod layout;
pub mod traits;
pub mod validation;

pub use error::*;
#[cfg(feature = "alloc")]
pub use field::*;
pub use format::*;
pub use layout::*;
pub use traits::*;
pub use validation::*;
