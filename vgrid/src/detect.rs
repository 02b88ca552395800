//! Format detection gate
//!
//! Detection is the sole admission control deciding whether a file is handed
//! to the parser at all. It reads only the first line and treats every I/O
//! failure as a negative match rather than an error.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use vgrid_core::validate_magic;

/// Report whether the file starts with the expected format magic
///
/// Returns `true` only when the first line, after trimming whitespace,
/// exactly equals `# vtk DataFile Version 2.0`. Missing or unreadable files
/// return `false`.
pub fn detect<P: AsRef<Path>>(path: P) -> bool {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(_) => return false,
    };

    let mut first_line = String::new();
    match BufReader::new(file).read_line(&mut first_line) {
        Ok(_) => validate_magic(&first_line).is_ok(),
        Err(_) => false,
    }
}
