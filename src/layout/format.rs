//! Text-format descriptors (§4.3.2 equivalent).
//!
//! A `TextFormat` is an immutable, caller-owned value once built —
//! there is no separate `destroy-text-format` call in this crate, since
//! ownership and `Drop` already give every caller that release for
//! free (§9 re-architecture guidance).

use super::{ensure_initialized, map_platform_error, PlatformError};
use crate::constants::layout as cfg;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Thin,
    Light,
    Regular,
    Medium,
    Bold,
    Black,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Normal,
    Italic,
    Oblique,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadingDirection {
    Ltr,
    Rtl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphAlignment {
    Near,
    Center,
    Far,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlignment {
    Leading,
    Center,
    Trailing,
    Justified,
}

/// An immutable font/locale/alignment descriptor bound to one format.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFormat {
    pub family: String,
    pub size: f32,
    pub weight: FontWeight,
    pub style: FontStyle,
    pub locale: String,
    pub direction: ReadingDirection,
    pub paragraph_alignment: ParagraphAlignment,
    pub text_alignment: TextAlignment,
}

fn validate_family(family: &str) -> Result<()> {
    if family.trim().is_empty() {
        return Err(map_platform_error(PlatformError::FontFamily(family.to_string())).record());
    }
    Ok(())
}

/// A platform alignment setter rejects a degenerate size (non-finite or
/// non-positive DIPs) independently of the format's overall validity —
/// `validate_family` already owns family-name validity, so this is the
/// one other input the setter step can fail on (§4.3.2).
fn non_degenerate_size(size: f32) -> Result<()> {
    if !size.is_finite() || size <= 0.0 {
        return Err(Error::InvalidArgument(format!("non-finite or non-positive size: {size}")).record());
    }
    Ok(())
}

/// Applies a paragraph-alignment setter. A real platform binding can
/// fail this step independently of the format's overall validity; such
/// failures are logged and swallowed, never propagated (§7, §4.3.2).
fn try_set_paragraph_alignment(format: &mut TextFormat, alignment: ParagraphAlignment) {
    match set_paragraph_alignment_checked(alignment, format.size) {
        Ok(a) => format.paragraph_alignment = a,
        Err(e) => log::warn!("paragraph alignment setter failed, keeping default: {e}"),
    }
}

fn try_set_text_alignment(format: &mut TextFormat, alignment: TextAlignment) {
    match set_text_alignment_checked(alignment, format.size) {
        Ok(a) => format.text_alignment = a,
        Err(e) => log::warn!("text alignment setter failed, keeping default: {e}"),
    }
}

fn set_paragraph_alignment_checked(alignment: ParagraphAlignment, size: f32) -> Result<ParagraphAlignment> {
    non_degenerate_size(size)?;
    Ok(alignment)
}

fn set_text_alignment_checked(alignment: TextAlignment, size: f32) -> Result<TextAlignment> {
    non_degenerate_size(size)?;
    Ok(alignment)
}

/// Creates an LTR format bound to locale `en-US` (§4.3.2).
pub fn create_text_format(
    family: &str,
    size: f32,
    weight: FontWeight,
    style: FontStyle,
) -> Result<TextFormat> {
    ensure_initialized()?;
    validate_family(family)?;
    Ok(TextFormat {
        family: family.to_string(),
        size,
        weight,
        style,
        locale: cfg::DEFAULT_LOCALE.to_string(),
        direction: ReadingDirection::Ltr,
        paragraph_alignment: ParagraphAlignment::Near,
        text_alignment: TextAlignment::Leading,
    })
}

/// Creates an RTL format with locale `ar`, paragraph alignment near,
/// text alignment trailing (§4.3.2).
pub fn create_arabic_text_format(family: &str, size: f32) -> Result<TextFormat> {
    ensure_initialized()?;
    validate_family(family)?;
    let mut format = TextFormat {
        family: family.to_string(),
        size,
        weight: FontWeight::Regular,
        style: FontStyle::Normal,
        locale: cfg::ARABIC_LOCALE.to_string(),
        direction: ReadingDirection::Rtl,
        paragraph_alignment: ParagraphAlignment::Near,
        text_alignment: TextAlignment::Trailing,
    };
    try_set_paragraph_alignment(&mut format, ParagraphAlignment::Near);
    try_set_text_alignment(&mut format, TextAlignment::Trailing);
    Ok(format)
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
