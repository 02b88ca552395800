//! Whole-file text access for parse runs
//!
//! The scanner wants the entire file as one `&str`. With the `mmap` feature
//! (default) the file is memory-mapped and validated as UTF-8 once at open;
//! without it the file is read into an owned string. Each parse opens the
//! file exactly once.

use std::fs::File;
use std::path::Path;

#[cfg(feature = "mmap")]
use memmap2::Mmap;

use crate::error::{ReadError, ReadResult};

enum Backing {
    #[cfg(feature = "mmap")]
    Mapped(Mmap),
    Owned(String),
}

/// Read-only text contents of one file
pub struct FileSource {
    backing: Backing,
}

impl FileSource {
    /// Open a file and capture its full contents
    #[cfg(feature = "mmap")]
    pub fn open<P: AsRef<Path>>(path: P) -> ReadResult<Self> {
        let file = File::open(path)?;

        // Zero-length files cannot be mapped on every platform
        if file.metadata()?.len() == 0 {
            return Ok(Self {
                backing: Backing::Owned(String::new()),
            });
        }

        // SAFETY: the mapping is read-only and outlives every slice handed
        // out through `text`, which borrows self
        let map = unsafe { Mmap::map(&file)? };
        if std::str::from_utf8(&map).is_err() {
            return Err(ReadError::NotUtf8);
        }

        Ok(Self {
            backing: Backing::Mapped(map),
        })
    }

    /// Open a file and capture its full contents
    #[cfg(not(feature = "mmap"))]
    pub fn open<P: AsRef<Path>>(path: P) -> ReadResult<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        use std::io::Read;
        file.read_to_string(&mut contents)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::InvalidData => ReadError::NotUtf8,
                _ => ReadError::Io(e),
            })?;
        Ok(Self {
            backing: Backing::Owned(contents),
        })
    }

    /// Full file contents as text
    pub fn text(&self) -> &str {
        match &self.backing {
            #[cfg(feature = "mmap")]
            // SAFETY: UTF-8 validity was checked when the mapping was created
            Backing::Mapped(map) => unsafe { std::str::from_utf8_unchecked(map) },
            Backing::Owned(contents) => contents,
        }
    }

    /// Size of the contents in bytes
    pub fn len(&self) -> usize {
        self.text().len()
    }

    /// File was empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
