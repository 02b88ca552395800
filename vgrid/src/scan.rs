//! Regex-driven line scanner for the structured-points layout
//!
//! Header lines are matched against fixed patterns in a single pass with no
//! ordering constraint. The `LOOKUP_TABLE default` marker switches the
//! remainder of the file into the data section, whose lines are parsed in
//! parallel while preserving file order.

use std::path::Path;
use std::sync::LazyLock;

use rayon::prelude::*;
use regex::Regex;
use tracing::debug;

use vgrid_core::constants::{
    DATA_MARKER, KEYWORD_DIMENSIONS, KEYWORD_ORIGIN, KEYWORD_POINT_DATA, KEYWORD_SCALARS,
    KEYWORD_SPACING,
};
use vgrid_core::{parse_f64, parse_usize, parse_value_line, GridDims, GridHeader, ScalarField};

use crate::error::{ReadError, ReadResult};
use crate::source::FileSource;

// Numeric token classes; keywords come from the format constants
const INT: &str = r"(\d+)";
const FLOAT: &str = r"([\d\.\-eE]+)";

static DIMENSIONS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{KEYWORD_DIMENSIONS} {INT} {INT} {INT}")).expect("dimensions pattern")
});

static ORIGIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{KEYWORD_ORIGIN} {FLOAT} {FLOAT} {FLOAT}")).expect("origin pattern")
});

static SPACING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{KEYWORD_SPACING} {FLOAT} {FLOAT} {FLOAT}")).expect("spacing pattern")
});

static POINT_DATA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^{KEYWORD_POINT_DATA} {INT}")).expect("point data pattern"));

static SCALARS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"^{KEYWORD_SCALARS} (\w+) (\w+)")).expect("scalars pattern"));

/// Active scalars declaration from a `SCALARS <name> <type>` line
///
/// Recorded for callers; the reader itself does not act on it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScalarsDecl {
    /// Declared array name
    pub name: String,
    /// Declared value type token
    pub data_type: String,
}

/// Result of scanning one file
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedGrid {
    /// Header fields found during the scan
    pub header: GridHeader,
    /// Active scalars declaration, if one was present
    pub scalars: Option<ScalarsDecl>,
    /// Scalar values in file order; reshaped when dimensions were found
    pub field: ScalarField,
}

/// Parse an in-memory file body
///
/// Header patterns are applied to every line before the data marker; after
/// the marker every line is whitespace-separated floats appended in file
/// order. If dimensions were found the field is reshaped without a count
/// check, since legacy files may declare more points than they carry;
/// otherwise it stays flat.
pub fn parse_str(text: &str) -> ReadResult<ParsedGrid> {
    let lines: Vec<&str> = text.lines().collect();

    let mut header = GridHeader::new();
    let mut scalars = None;
    let mut field = ScalarField::new();
    let mut data_start = None;

    for (index, line) in lines.iter().enumerate() {
        let line_no = index + 1;

        if let Some(caps) = DIMENSIONS_RE.captures(line) {
            let nx = parse_usize(&caps[1]).map_err(|e| ReadError::at_line(line_no, e))?;
            let ny = parse_usize(&caps[2]).map_err(|e| ReadError::at_line(line_no, e))?;
            let nz = parse_usize(&caps[3]).map_err(|e| ReadError::at_line(line_no, e))?;
            header.dims = Some(GridDims::new(nx, ny, nz));
        }

        if let Some(caps) = ORIGIN_RE.captures(line) {
            header.origin = Some(parse_triple(&caps, line_no)?);
        }

        if let Some(caps) = SPACING_RE.captures(line) {
            header.spacing = Some(parse_triple(&caps, line_no)?);
        }

        if let Some(caps) = POINT_DATA_RE.captures(line) {
            header.point_count =
                Some(parse_usize(&caps[1]).map_err(|e| ReadError::at_line(line_no, e))?);
        }

        if let Some(caps) = SCALARS_RE.captures(line) {
            scalars = Some(ScalarsDecl {
                name: caps[1].to_string(),
                data_type: caps[2].to_string(),
            });
        }

        // Everything after the marker is scalar data
        if line.trim() == DATA_MARKER {
            data_start = Some(index + 1);
            break;
        }
    }

    if let Some(start) = data_start {
        let parsed: Vec<Vec<f64>> = lines[start..]
            .par_iter()
            .enumerate()
            .map(|(offset, line)| {
                parse_value_line(line).map_err(|e| ReadError::at_line(start + offset + 1, e))
            })
            .collect::<ReadResult<_>>()?;

        for values in parsed {
            field.push_values(values);
        }
    }

    debug!(
        dims = ?header.dims,
        values = field.len(),
        has_marker = data_start.is_some(),
        "scan complete"
    );

    if let Some(dims) = header.dims {
        field.reshape_lenient(dims);
    }

    Ok(ParsedGrid {
        header,
        scalars,
        field,
    })
}

/// Parse a file from disk
///
/// Opens the file once; detection is a separate gate (see [`crate::detect`]).
pub fn parse_file<P: AsRef<Path>>(path: P) -> ReadResult<ParsedGrid> {
    let path = path.as_ref();
    let source = FileSource::open(path)?;
    debug!(path = %path.display(), bytes = source.len(), "parsing grid file");
    parse_str(source.text())
}

fn parse_triple(caps: &regex::Captures<'_>, line_no: usize) -> ReadResult<[f64; 3]> {
    Ok([
        parse_f64(&caps[1]).map_err(|e| ReadError::at_line(line_no, e))?,
        parse_f64(&caps[2]).map_err(|e| ReadError::at_line(line_no, e))?,
        parse_f64(&caps[3]).map_err(|e| ReadError::at_line(line_no, e))?,
    ])
}
