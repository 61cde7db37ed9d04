//! The BiDi-aware text-layout/hit-testing contract a renderer consumes
//! (§4.3).
//!
//! This module models the same shape as a DirectWrite-style layout API
//! — a process-wide reference-counted factory, immutable formats and
//! layouts, and a metrics/hit-testing surface — without binding to any
//! real platform. Shaping and BiDi resolution are delegated to
//! `unicode-bidi`; there is no glyph rasterizer behind it, matching
//! this crate's scope (the real shaping engine is an external
//! collaborator referenced only by interface, §1).

mod format;
mod hit_test;
mod text_layout;

pub use format::{
    create_arabic_text_format, create_text_format, FontStyle, FontWeight, ParagraphAlignment,
    ReadingDirection, TextAlignment, TextFormat,
};
pub use hit_test::{HitTestMetrics, HitTestResult};
pub use text_layout::{create_rtl_text_layout, create_text_layout, Metrics, TextLayout};

use std::sync::Mutex;

use crate::error::{Error, Result};

struct FactoryState {
    ref_count: usize,
}

static STATE: Mutex<FactoryState> = Mutex::new(FactoryState { ref_count: 0 });

/// The platform error surface a real backend would report (§4.3.6),
/// mapped through a single table onto this crate's taxonomy.
pub(crate) enum PlatformError {
    OutOfMemory,
    InvalidArgument(String),
    NullPointer,
    FontFamily(String),
    #[allow(dead_code)]
    FileFormat,
    Other(String),
}

pub(crate) fn map_platform_error(err: PlatformError) -> Error {
    match err {
        PlatformError::OutOfMemory => Error::OutOfMemory,
        PlatformError::InvalidArgument(msg) => Error::InvalidArgument(msg),
        PlatformError::NullPointer => Error::NullPointer,
        PlatformError::FontFamily(name) => {
            Error::DirectWriteInit(format!("unsupported font family: {name:?}"))
        }
        PlatformError::FileFormat => {
            Error::DirectWriteInit("unsupported font file format".into())
        }
        PlatformError::Other(msg) => Error::Unknown(msg),
    }
}

pub(crate) fn ensure_initialized() -> Result<()> {
    if is_initialized() {
        Ok(())
    } else {
        Err(Error::NotInitialized.record())
    }
}

/// Initializes the process-wide layout factory. The first call
/// establishes resources; subsequent calls increment a reference count
/// (§4.3.1). Safe to call from multiple threads.
pub fn init() -> Result<()> {
    let mut state = STATE.lock().unwrap_or_else(|e| e.into_inner());
    if state.ref_count > 0 {
        state.ref_count += 1;
        return Ok(());
    }
    state.ref_count = 1;
    log::debug!("layout factory initialized");
    Ok(())
}

/// Decrements the factory reference count; releases resources at zero.
pub fn shutdown() {
    let mut state = STATE.lock().unwrap_or_else(|e| e.into_inner());
    if state.ref_count > 0 {
        state.ref_count -= 1;
        if state.ref_count == 0 {
            log::debug!("layout factory shut down");
        }
    }
}

/// Whether the factory currently has at least one live reference.
#[must_use]
pub fn is_initialized() -> bool {
    STATE.lock().unwrap_or_else(|e| e.into_inner()).ref_count > 0
}

/// An RAII handle over [`init`]/[`shutdown`] (§9 re-architecture
/// guidance: "a lazily initialized singleton owned by a token type;
/// each caller holds a handle whose drop decrements").
#[derive(Debug)]
pub struct Factory {
    _private: (),
}

impl Factory {
    pub fn new() -> Result<Self> {
        init()?;
        Ok(Self { _private: () })
    }
}

impl Drop for Factory {
    fn drop(&mut self) {
        shutdown();
    }
}
