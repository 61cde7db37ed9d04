//! Tunable sizing constants for the buffer and layout subsystems.
//!
//! Grouped the way the rest of the crate groups related knobs: one `pub
//! mod` per subsystem rather than a flat namespace, so a caller tuning
//! growth behavior only has to read one block.

pub mod buffer {
    /// Code units allocated for a freshly `empty()` buffer.
    pub const INITIAL_CAPACITY: usize = 4096;

    /// Gap left after `from_utf8` places content at the front of the array.
    pub const INITIAL_GAP: usize = 2048;

    /// Minimum extra capacity reserved beyond `content_length` on growth.
    pub const GAP_GROW_SIZE: usize = 2048;

    /// Hard ceiling on `capacity`, in code units (~100 MB worth of u16s).
    pub const MAX_BUFFER_CODE_UNITS: usize = 50 * 1024 * 1024;

    /// Hard ceiling on a loadable file, in bytes.
    pub const MAX_FILE_SIZE_BYTES: u64 = 100 * 1024 * 1024;
}

pub mod layout {
    /// Default locale tag used by `create_text_format`.
    pub const DEFAULT_LOCALE: &str = "en-US";

    /// Locale tag used by `create_arabic_text_format`.
    pub const ARABIC_LOCALE: &str = "ar";
}
