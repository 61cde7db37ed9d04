//! Line-ending detection (classification only — the buffer never
//! rewrites line endings, §6: "Line endings are preserved verbatim").
//!
//! Carried forward from `original_source/buffer.h`'s `LineEnding` enum;
//! its sibling `FileEncoding` enum is not, since the external encoding
//! is fixed to UTF-8 (§6).

use super::GapBuffer;

/// The dominant line-ending style found in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    /// No line breaks, or a single line.
    None,
    Lf,
    CrLf,
    Cr,
    /// More than one style present.
    Mixed,
}

/// Classifies `content`'s line endings without altering it.
#[must_use]
pub fn detect(content: &str) -> LineEnding {
    let mut has_lf = false;
    let mut has_crlf = false;
    let mut has_cr = false;

    let bytes = content.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\r' if bytes.get(i + 1) == Some(&b'\n') => {
                has_crlf = true;
                i += 2;
            }
            b'\r' => {
                has_cr = true;
                i += 1;
            }
            b'\n' => {
                has_lf = true;
                i += 1;
            }
            _ => i += 1,
        }
    }

    match (has_lf, has_crlf, has_cr) {
        (false, false, false) => LineEnding::None,
        (true, false, false) => LineEnding::Lf,
        (false, true, false) => LineEnding::CrLf,
        (false, false, true) => LineEnding::Cr,
        _ => LineEnding::Mixed,
    }
}

impl GapBuffer {
    /// Classifies the document's line-ending style (§10.6 supplement).
    #[must_use]
    pub fn line_ending(&self) -> LineEnding {
        detect(&self.get_content())
    }
}

#[cfg(test)]
#[path = "line_ending_tests.rs"]
mod tests;
