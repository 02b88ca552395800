//! Validation and parsing utilities for the structured-points format
//!
//! This module contains pure functions with no I/O dependencies. Token
//! parsers convert the numeric fields of header and data lines; format
//! checks enforce the geometry constraints.

pub mod format;
pub mod parsing;

pub use format::{validate_dims, validate_magic, validate_scalar_count, validate_spacing};
pub use parsing::{parse_f64, parse_usize};
#[cfg(feature = "alloc")]
pub use parsing::parse_value_line;
