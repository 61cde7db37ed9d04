//! Buffer statistics snapshot (§4.2.7).

use super::GapBuffer;
use crate::encoding;

/// A point-in-time snapshot of buffer size and state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferStats {
    pub total_bytes: usize,
    pub total_chars: usize,
    pub total_lines: usize,
    pub gap_size: usize,
    pub capacity: usize,
    pub is_modified: bool,
    pub is_readonly: bool,
}

impl GapBuffer {
    #[must_use]
    pub fn get_stats(&self) -> BufferStats {
        let units: Vec<u16> = self.iter_units().collect();
        let total_bytes = encoding::utf8_len_for_utf16(&units).unwrap_or(0);
        BufferStats {
            total_bytes,
            total_chars: units.len(),
            total_lines: self.line_count(),
            gap_size: self.gap_size(),
            capacity: self.capacity(),
            is_modified: self.modified,
            is_readonly: self.readonly,
        }
    }
}
