//! qalam-core — the gap-buffered, BiDi-aware text storage and layout
//! core of a source-code editor built around first-class Arabic/Latin
//! bidirectional text handling.
//!
//! This crate owns two cooperating subsystems and the result vocabulary
//! they share:
//!
//! - [`buffer`] — the gap buffer: storage, insert/delete, cursor, line
//!   index, selection, file I/O.
//! - [`layout`] — the text-format/layout/hit-testing contract a
//!   BiDi-aware renderer consumes.
//! - [`error`] — the error taxonomy returned by every fallible
//!   operation in both subsystems.
//! - [`encoding`] — the UTF-8 ↔ UTF-16 code-unit bridge both subsystems
//!   route through.
//!
//! The window shell, terminal wrapper, and other editor chrome that
//! consume this crate live outside it; see `DESIGN.md` for what was
//! carried over from the source editor and what was left behind.

pub mod buffer;
pub mod constants;
pub mod encoding;
pub mod error;
pub mod layout;

pub use buffer::GapBuffer;
pub use error::{Error, Result};
