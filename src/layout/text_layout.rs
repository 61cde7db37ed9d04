//! Immutable shaped layouts and metrics (§4.3.3, §4.3.4).
//!
//! There is no real platform shaping engine in this crate — that engine
//! is the out-of-scope external collaborator the layout contract only
//! interfaces with (§1). BiDi resolution is delegated to `unicode-bidi`
//! (the same crate family `linebender-parley` builds its cursor
//! geometry on top of); per-glyph advances are approximated from
//! `unicode-width` cell widths scaled by font size, since no font file
//! is rasterized. Line breaking against `max_width`/`max_height` is not
//! performed for the same reason: the constraints are recorded on the
//! layout but do not wrap text, matching the degree of fidelity a
//! shaping-engine-less layer can honestly provide.

use unicode_bidi::{BidiInfo, Level};
use unicode_width::UnicodeWidthChar;

use super::ensure_initialized;
use super::format::{ReadingDirection, TextFormat};
use crate::error::{Error, Result};

/// Typical monospace advance-width-to-em-size ratio, used in the
/// absence of real glyph metrics.
const CHAR_WIDTH_RATIO: f32 = 0.6;
const LINE_HEIGHT_RATIO: f32 = 1.2;

/// One shaped character's position within the layout, in visual
/// (left-to-right screen) order.
#[derive(Debug, Clone, Copy)]
pub(super) struct Glyph {
    pub unit_start: usize,
    pub unit_len: usize,
    pub x_start: f32,
    pub x_end: f32,
    pub y_top: f32,
    pub y_bottom: f32,
    pub is_text: bool,
}

/// An immutable layout produced from a text slice, a format, and box
/// constraints (§4.3.3).
#[derive(Debug, Clone)]
pub struct TextLayout {
    pub(super) total_units: usize,
    pub(super) glyphs: Vec<Glyph>,
    pub(super) line_count: usize,
    pub(super) line_height: f32,
    pub(super) width: f32,
    pub(super) height: f32,
    pub(super) trailing_whitespace_width: f32,
    pub(super) max_width: f32,
    pub(super) max_height: f32,
}

/// Dimensions and line statistics for a layout (§4.3.4).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub width: f32,
    pub height: f32,
    pub line_count: usize,
    pub trailing_whitespace_width: f32,
    pub top: f32,
}

fn char_advance(ch: char, font_size: f32) -> f32 {
    let cells = UnicodeWidthChar::width(ch).unwrap_or(1) as f32;
    cells.max(1.0) * font_size * CHAR_WIDTH_RATIO
}

/// Maps each byte offset in `text` to the UTF-16 code-unit offset of
/// the code point that byte belongs to. `map[text.len()]` is the total
/// unit count.
fn build_byte_to_unit(text: &str) -> Vec<usize> {
    let mut map = vec![0usize; text.len() + 1];
    let mut unit_offset = 0usize;
    for (byte_idx, ch) in text.char_indices() {
        for b in 0..ch.len_utf8() {
            map[byte_idx + b] = unit_offset;
        }
        unit_offset += ch.len_utf16();
    }
    map[text.len()] = unit_offset;
    map
}

fn trailing_whitespace_width(text: &str, font_size: f32) -> f32 {
    text.chars()
        .rev()
        .take_while(|c| c.is_whitespace() && *c != '\n')
        .map(|c| char_advance(c, font_size))
        .sum()
}

fn build_layout(
    text: &str,
    format: Option<&TextFormat>,
    max_width: f32,
    max_height: f32,
    force_direction: Option<ReadingDirection>,
) -> Result<TextLayout> {
    ensure_initialized()?;
    let format = format.ok_or(Error::NullPointer)?;
    if !max_width.is_finite() || !max_height.is_finite() || max_width < 0.0 || max_height < 0.0 {
        return Err(Error::InvalidArgument(
            "max_width/max_height must be finite and non-negative".into(),
        ));
    }

    let direction = force_direction.unwrap_or(format.direction);
    let base_level = match direction {
        ReadingDirection::Ltr => Level::ltr(),
        ReadingDirection::Rtl => Level::rtl(),
    };

    let byte_to_unit = build_byte_to_unit(text);
    let total_units = byte_to_unit[text.len()];
    let font_size = format.size;
    let line_height = font_size * LINE_HEIGHT_RATIO;

    if text.is_empty() {
        return Ok(TextLayout {
            total_units: 0,
            glyphs: Vec::new(),
            line_count: 1,
            line_height,
            width: 0.0,
            height: line_height,
            trailing_whitespace_width: 0.0,
            max_width,
            max_height,
        });
    }

    let bidi_info = BidiInfo::new(text, Some(base_level));
    let mut glyphs = Vec::new();
    let mut width = 0.0f32;

    let paragraphs: Vec<_> = bidi_info.paragraphs.iter().collect();
    let line_count = paragraphs.len().max(1);

    for (line_idx, para) in paragraphs.iter().enumerate() {
        let (_levels, runs) = bidi_info.visual_runs(para, para.range.clone());
        let y_top = line_idx as f32 * line_height;
        let y_bottom = y_top + line_height;
        let mut x = 0.0f32;

        for run in runs {
            let level = bidi_info.levels[run.start];
            let run_text = &text[run.clone()];
            let ordered: Vec<(usize, char)> = if level.is_rtl() {
                run_text.char_indices().rev().collect()
            } else {
                run_text.char_indices().collect()
            };
            for (rel_byte, ch) in ordered {
                if ch == '\n' {
                    continue;
                }
                let abs_byte = run.start + rel_byte;
                let unit_start = byte_to_unit[abs_byte];
                let advance = char_advance(ch, font_size);
                glyphs.push(Glyph {
                    unit_start,
                    unit_len: ch.len_utf16(),
                    x_start: x,
                    x_end: x + advance,
                    y_top,
                    y_bottom,
                    is_text: true,
                });
                x += advance;
            }
        }

        width = width.max(x);

        let last_byte = para.range.end.saturating_sub(1);
        if para.range.end > para.range.start && text.as_bytes().get(last_byte) == Some(&b'\n') {
            let unit_start = byte_to_unit[last_byte];
            glyphs.push(Glyph {
                unit_start,
                unit_len: 1,
                x_start: x,
                x_end: x,
                y_top,
                y_bottom,
                is_text: false,
            });
        }
    }

    Ok(TextLayout {
        total_units,
        glyphs,
        line_count,
        line_height,
        width,
        height: line_count as f32 * line_height,
        trailing_whitespace_width: trailing_whitespace_width(text, font_size),
        max_width,
        max_height,
    })
}

/// Produces a layout sized to `max_width`/`max_height`; flow direction
/// follows `format.direction`. Succeeds on empty input (§4.3.3).
pub fn create_text_layout(
    text: &str,
    format: Option<&TextFormat>,
    max_width: f32,
    max_height: f32,
) -> Result<TextLayout> {
    build_layout(text, format, max_width, max_height, None)
}

/// Same as [`create_text_layout`], but forces the layout's own flow
/// direction to RTL regardless of the format's setting — flow direction
/// is layout-scoped, not format-scoped (§4.3.3).
pub fn create_rtl_text_layout(
    text: &str,
    format: Option<&TextFormat>,
    max_width: f32,
    max_height: f32,
) -> Result<TextLayout> {
    build_layout(text, format, max_width, max_height, Some(ReadingDirection::Rtl))
}

impl TextLayout {
    /// Width, height, line count, trailing whitespace, and top position
    /// (§4.3.4). Consistent with the extremes returned by hit-testing.
    #[must_use]
    pub fn measure(&self) -> Metrics {
        Metrics {
            width: self.width,
            height: self.height,
            line_count: self.line_count,
            trailing_whitespace_width: self.trailing_whitespace_width,
            top: 0.0,
        }
    }

    #[must_use]
    pub fn total_units(&self) -> usize {
        self.total_units
    }
}

#[cfg(test)]
#[path = "text_layout_tests.rs"]
mod tests;
