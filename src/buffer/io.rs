//! File I/O (§4.2.6).
//!
//! `save` never mutates in-memory state on failure. `load` builds a
//! temporary buffer via [`GapBuffer::from_file`] and only swaps it into
//! `self` once it's fully built, so a failed load leaves `self`
//! untouched (§7 propagation policy).

use std::fs;
use std::path::Path;

use super::GapBuffer;
use crate::constants::buffer as cfg;
use crate::error::{Error, Result};

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

#[cfg(test)]
#[path = "io_tests.rs"]
mod tests;

impl GapBuffer {
    /// Reads `path` into a new buffer. Fails with
    /// [`Error::FileTooLarge`] above the 100 MB limit, with
    /// [`Error::FileNotFound`] if the file doesn't exist, or with
    /// [`Error::FileRead`] on any other I/O failure. A leading UTF-8 BOM
    /// is tolerated and stripped before population (§6, §9 Open
    /// Question 3).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let metadata = fs::metadata(path).map_err(|e| map_open_error(path, e))?;
        if metadata.len() > cfg::MAX_FILE_SIZE_BYTES {
            return Err(Error::FileTooLarge {
                size: metadata.len(),
                max: cfg::MAX_FILE_SIZE_BYTES,
            }
            .record());
        }
        let mut bytes = fs::read(path).map_err(Error::FileRead)?;
        if bytes.starts_with(&UTF8_BOM) {
            bytes.drain(..UTF8_BOM.len());
        }
        let mut buf = Self::from_utf8(&bytes)?;
        buf.filepath = Some(path.to_path_buf());
        buf.modified = false;
        Ok(buf)
    }

    /// Writes the whole document to `path` as UTF-8 (no BOM), then
    /// records `path` and clears `modified`. In-memory state is
    /// unchanged on failure.
    pub fn save(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = self.get_content();
        fs::write(path, content.as_bytes()).map_err(Error::FileWrite)?;
        self.filepath = Some(path.to_path_buf());
        self.modified = false;
        log::debug!("saved buffer to {}", path.display());
        Ok(())
    }

    /// Replaces the entire contents of `self` with the file at `path`,
    /// only after the replacement buffer has been built successfully.
    /// Resets cursor and selection to the start (§9 Open Question 2).
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let replacement = Self::from_file(path)?;
        *self = replacement;
        Ok(())
    }

}

fn map_open_error(path: &Path, err: std::io::Error) -> Error {
    if err.kind() == std::io::ErrorKind::NotFound {
        Error::FileNotFound(path.to_path_buf())
    } else {
        Error::FileAccess(err)
    }
}
