//! Error types for VGRID operations

/// Errors that can occur during VGRID operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// First line does not match the format magic
    InvalidHeader,
    /// Header declares a format version this reader does not support
    UnsupportedVersion,
    /// A numeric token could not be converted
    MalformedNumber,
    /// Dimensions are zero or otherwise unusable
    InvalidDimensions,
    /// Spacing values are non-positive or non-finite
    InvalidSpacing,
    /// No DIMENSIONS line was found
    MissingDimensions,
    /// No ORIGIN line was found
    MissingOrigin,
    /// No SPACING line was found
    MissingSpacing,
    /// Scalar count does not match the declared grid shape
    ShapeMismatch,
    /// Grid index outside the declared shape
    IndexOutOfBounds,
}

/// Broad grouping of errors for callers that triage failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The file is not this format at all
    Format,
    /// The file is this format but its content is inconsistent
    Content,
    /// An access outside declared bounds
    Bounds,
}

impl GridError {
    /// Categorize this error
    pub const fn category(self) -> ErrorCategory {
        match self {
            GridError::InvalidHeader | GridError::UnsupportedVersion => ErrorCategory::Format,
            GridError::MalformedNumber
            | GridError::InvalidDimensions
            | GridError::InvalidSpacing
            | GridError::MissingDimensions
            | GridError::MissingOrigin
            | GridError::MissingSpacing
            | GridError::ShapeMismatch => ErrorCategory::Content,
            GridError::IndexOutOfBounds => ErrorCategory::Bounds,
        }
    }
}

impl core::fmt::Display for GridError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            GridError::InvalidHeader => "Invalid format header",
            GridError::UnsupportedVersion => "Unsupported format version",
            GridError::MalformedNumber => "Malformed numeric token",
            GridError::InvalidDimensions => "Invalid grid dimensions",
            GridError::InvalidSpacing => "Invalid grid spacing",
            GridError::MissingDimensions => "Missing DIMENSIONS line",
            GridError::MissingOrigin => "Missing ORIGIN line",
            GridError::MissingSpacing => "Missing SPACING line",
            GridError::ShapeMismatch => "Scalar count does not match grid shape",
            GridError::IndexOutOfBounds => "Grid index out of bounds",
        };
        write!(f, "{msg}")
    }
}

impl core::error::Error for GridError {}

/// Result type for VGRID operations
pub type Result<T> = core::result::Result<T, GridError>;
