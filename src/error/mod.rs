//! Centralized error handling for qalam-core.
//!
//! A single enumerated result type is returned by every fallible public
//! operation (§7); there is no out-of-band signaling and no
//! exception-style unwinding. The numeric `code()` groups mirror the
//! ranges the surrounding editor's other subsystems reserve for
//! themselves (general 1..99, buffer 100..199, window/UI 200..299, file
//! 400..499), even though this crate only ever returns values from the
//! general/buffer/window-UI/file bands — terminal (300..399) belongs to
//! a component outside this crate's scope.

use std::fmt;
use std::io;
use std::path::PathBuf;

#[cfg(test)]
#[path = "tests.rs"]
mod tests;

/// How serious a propagated failure is. A handful of locally-recovered
/// paths (format alignment setters, see `layout::format`) only ever
/// reach [`Severity::Warning`] via a log line and never escape as an
/// `Err` at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// The error taxonomy fixed by §7.
#[derive(Debug)]
pub enum Error {
    Unknown(String),
    NullPointer,
    InvalidArgument(String),
    OutOfMemory,
    NotInitialized,
    InvalidPosition { offset: usize },
    InvalidRange { start: usize, end: usize, len: usize },
    Encoding(String),
    FileNotFound(PathBuf),
    FileAccess(io::Error),
    FileRead(io::Error),
    FileWrite(io::Error),
    FileTooLarge { size: u64, max: u64 },
    DirectWriteInit(String),
    D2dInit(String),
}

impl Error {
    /// Numeric code matching the enclosing editor's reserved ranges.
    #[must_use]
    pub fn code(&self) -> i32 {
        match self {
            Self::Unknown(_) => 1,
            Self::NullPointer => 2,
            Self::InvalidArgument(_) => 3,
            Self::NotInitialized => 4,
            Self::OutOfMemory => 100,
            Self::InvalidPosition { .. } => 101,
            Self::InvalidRange { .. } => 102,
            Self::Encoding(_) => 103,
            Self::DirectWriteInit(_) => 200,
            Self::D2dInit(_) => 201,
            Self::FileNotFound(_) => 400,
            Self::FileAccess(_) => 401,
            Self::FileRead(_) => 402,
            Self::FileWrite(_) => 403,
            Self::FileTooLarge { .. } => 404,
        }
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            Self::OutOfMemory | Self::FileTooLarge { .. } => Severity::Critical,
            _ => Severity::Error,
        }
    }

    pub fn invalid_range(start: usize, end: usize, len: usize) -> Self {
        Self::InvalidRange { start, end, len }
    }

    pub fn invalid_position(offset: usize) -> Self {
        Self::InvalidPosition { offset }
    }

    /// Records this error in the thread-local last-error cell and
    /// returns it unchanged, so call sites can write
    /// `return Err(Error::invalid_position(p).record());`.
    #[must_use]
    pub fn record(self) -> Self {
        set_last_error(&self);
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(msg) => write!(f, "unknown error: {msg}"),
            Self::NullPointer => write!(f, "null pointer or missing handle"),
            Self::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            Self::OutOfMemory => write!(f, "out of memory"),
            Self::NotInitialized => write!(f, "layout factory not initialized"),
            Self::InvalidPosition { offset } => write!(f, "invalid position: {offset}"),
            Self::InvalidRange { start, end, len } => {
                write!(f, "invalid range [{start}, {end}) for length {len}")
            }
            Self::Encoding(msg) => write!(f, "encoding error: {msg}"),
            Self::FileNotFound(path) => write!(f, "file not found: {}", path.display()),
            Self::FileAccess(e) => write!(f, "file access error: {e}"),
            Self::FileRead(e) => write!(f, "file read error: {e}"),
            Self::FileWrite(e) => write!(f, "file write error: {e}"),
            Self::FileTooLarge { size, max } => {
                write!(f, "file too large: {size} bytes exceeds limit of {max} bytes")
            }
            Self::DirectWriteInit(msg) => write!(f, "layout factory initialization failed: {msg}"),
            Self::D2dInit(msg) => write!(f, "rendering surface initialization failed: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileAccess(e) | Self::FileRead(e) | Self::FileWrite(e) => Some(e),
            _ => None,
        }
    }
}

/// Result alias for qalam-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A snapshot of the most recently recorded error, for FFI embedding
/// layers that cannot propagate a `Result` across a language boundary.
/// Never consulted by in-crate logic; see SPEC_FULL.md §10.3.
#[derive(Debug, Clone)]
pub struct LastError {
    pub code: i32,
    pub message: String,
}

thread_local! {
    static LAST_ERROR: std::cell::RefCell<Option<LastError>> = const { std::cell::RefCell::new(None) };
}

fn set_last_error(err: &Error) {
    LAST_ERROR.with(|cell| {
        *cell.borrow_mut() = Some(LastError {
            code: err.code(),
            message: err.to_string(),
        });
    });
}

/// The most recently recorded error on the current thread, if any.
#[must_use]
pub fn last_error() -> Option<LastError> {
    LAST_ERROR.with(|cell| cell.borrow().clone())
}

/// Clears the thread-local last-error cell.
pub fn clear_last_error() {
    LAST_ERROR.with(|cell| *cell.borrow_mut() = None);
}
