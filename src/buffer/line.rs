//! Line lookup and RTL/LTR direction classification (§4.2.4).
//!
//! Direction classification is extracted as a pure function over a
//! code-unit range, per the re-architecture guidance in §9 ("Direction
//! classification inline in `get-line-info` → extract as a pure
//! function"); the shape — a small enum plus a `classify` free function
//! — follows the teacher's `movement::classify` idiom
//! (`classify_char` → `CharClass`).

use super::GapBuffer;
use crate::encoding;
use crate::error::Result;

/// Visual direction of a line, inferred from its character composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Contains RTL script characters and no LTR ones.
    Rtl,
    /// Contains LTR (ASCII Latin) characters and no RTL ones.
    Ltr,
    /// Contains both, neither, or is empty.
    Auto,
}

/// Line metadata returned by [`GapBuffer::get_line_info`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineInfo {
    pub line: usize,
    pub start_offset: usize,
    pub length_units: usize,
    pub length_utf8_bytes: usize,
    pub direction: Direction,
}

fn is_arabic_block(unit: u16) -> bool {
    matches!(unit,
        0x0600..=0x06FF | 0x0750..=0x077F | 0x08A0..=0x08FF | 0xFB50..=0xFDFF | 0xFE70..=0xFEFF)
}

fn is_hebrew_block(unit: u16) -> bool {
    (0x0590..=0x05FF).contains(&unit)
}

fn is_ascii_latin(unit: u16) -> bool {
    (0x0041..=0x005A).contains(&unit) || (0x0061..=0x007A).contains(&unit)
}

/// Classifies a code-unit slice per §4.2.4: RTL if it has Arabic/Hebrew
/// characters and no ASCII Latin ones, LTR if the reverse, AUTO
/// otherwise (both, neither, or empty).
#[must_use]
pub fn classify_direction(units: &[u16]) -> Direction {
    let mut has_rtl = false;
    let mut has_ltr = false;
    for &unit in units {
        if is_arabic_block(unit) || is_hebrew_block(unit) {
            has_rtl = true;
        } else if is_ascii_latin(unit) {
            has_ltr = true;
        }
    }
    match (has_rtl, has_ltr) {
        (true, false) => Direction::Rtl,
        (false, true) => Direction::Ltr,
        _ => Direction::Auto,
    }
}

impl GapBuffer {
    /// Line `n`'s offset/length/direction metadata.
    pub fn get_line_info(&self, n: usize) -> Result<LineInfo> {
        let (start, end) = self.line_bounds(n)?;
        let units = self.slice_units(start, end);
        let length_utf8_bytes = encoding::utf8_len_for_utf16(&units)?;
        Ok(LineInfo {
            line: n,
            start_offset: start,
            length_units: units.len(),
            length_utf8_bytes,
            direction: classify_direction(&units),
        })
    }
}
