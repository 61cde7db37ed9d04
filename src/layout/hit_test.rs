//! Point ↔ position hit testing (§4.3.5).

use super::text_layout::TextLayout;
use crate::error::{Error, Result};

/// Per-character bounding metrics returned alongside a hit-test result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitTestMetrics {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub is_text: bool,
}

/// Result of [`TextLayout::hit_test_point`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitTestResult {
    pub position: usize,
    pub is_trailing: bool,
    pub is_inside: bool,
    pub metrics: HitTestMetrics,
}

impl TextLayout {
    /// Point → position (§4.3.5). Defined over the entire plane: points
    /// outside the text snap to the nearest edge with `is_inside = false`.
    pub fn hit_test_point(&self, x: f32, y: f32) -> Result<HitTestResult> {
        if !x.is_finite() || !y.is_finite() {
            return Err(Error::InvalidArgument("hit-test point must be finite".into()));
        }

        if self.glyphs.is_empty() {
            return Ok(HitTestResult {
                position: 0,
                is_trailing: false,
                is_inside: false,
                metrics: HitTestMetrics { x: 0.0, y: 0.0, width: 0.0, height: self.line_height, is_text: false },
            });
        }

        // `line_height` can be under 1.0 for small font sizes, which would
        // otherwise make this bound negative and panic inside `f32::clamp`
        // (`assert!(min <= max)`); clamp the bound itself first so the
        // point→position hit test stays total over the entire plane (§4.3.5).
        let y_upper = (self.height.max(self.line_height) - 1.0).max(0.0);
        let clamped_y = y.clamp(0.0, y_upper);
        let line_idx = ((clamped_y / self.line_height) as usize).min(self.line_count.saturating_sub(1));
        let y_top = line_idx as f32 * self.line_height;
        let line_glyphs: Vec<_> = self
            .glyphs
            .iter()
            .filter(|g| g.is_text && g.y_top == y_top)
            .collect();

        if line_glyphs.is_empty() {
            return Ok(HitTestResult {
                position: self.line_start_unit(line_idx),
                is_trailing: false,
                is_inside: false,
                metrics: HitTestMetrics { x: 0.0, y: y_top, width: 0.0, height: self.line_height, is_text: false },
            });
        }

        let first = line_glyphs[0];
        let last = *line_glyphs.last().unwrap();

        if x < first.x_start {
            return Ok(HitTestResult {
                position: first.unit_start,
                is_trailing: false,
                is_inside: false,
                metrics: glyph_metrics(first),
            });
        }
        if x >= last.x_end {
            return Ok(HitTestResult {
                position: last.unit_start,
                is_trailing: true,
                is_inside: false,
                metrics: glyph_metrics(last),
            });
        }

        for glyph in &line_glyphs {
            if x >= glyph.x_start && x < glyph.x_end {
                let midpoint = (glyph.x_start + glyph.x_end) / 2.0;
                return Ok(HitTestResult {
                    position: glyph.unit_start,
                    is_trailing: x >= midpoint,
                    is_inside: true,
                    metrics: glyph_metrics(glyph),
                });
            }
        }

        // Gap between two glyphs (shouldn't occur given contiguous
        // advances, but the plane is total per §4.3.5).
        Ok(HitTestResult {
            position: last.unit_start,
            is_trailing: true,
            is_inside: false,
            metrics: glyph_metrics(last),
        })
    }

    /// Position → point (§4.3.5). `position` must not exceed the
    /// layout's total code-unit length.
    pub fn hit_test_position(&self, position: usize, is_trailing: bool) -> Result<(f32, f32, HitTestMetrics)> {
        if position > self.total_units {
            return Err(Error::InvalidArgument(format!(
                "position {position} exceeds layout length {}",
                self.total_units
            )));
        }

        if let Some(glyph) = self
            .glyphs
            .iter()
            .find(|g| position >= g.unit_start && position < g.unit_start + g.unit_len)
        {
            let x = if is_trailing { glyph.x_end } else { glyph.x_start };
            return Ok((x, glyph.y_top, glyph_metrics(glyph)));
        }

        // End-of-document or an empty line: place at the end of the
        // last line with zero width.
        let y = (self.line_count.saturating_sub(1)) as f32 * self.line_height;
        let x = self
            .glyphs
            .iter()
            .filter(|g| g.y_top == y)
            .map(|g| g.x_end)
            .fold(0.0f32, f32::max);
        Ok((
            x,
            y,
            HitTestMetrics { x, y, width: 0.0, height: self.line_height, is_text: false },
        ))
    }

    fn line_start_unit(&self, line_idx: usize) -> usize {
        let y_top = line_idx as f32 * self.line_height;
        self.glyphs
            .iter()
            .filter(|g| g.y_top == y_top)
            .map(|g| g.unit_start)
            .min()
            .unwrap_or(0)
    }
}

fn glyph_metrics(glyph: &super::text_layout::Glyph) -> HitTestMetrics {
    HitTestMetrics {
        x: glyph.x_start,
        y: glyph.y_top,
        width: glyph.x_end - glyph.x_start,
        height: glyph.y_bottom - glyph.y_top,
        is_text: glyph.is_text,
    }
}

#[cfg(test)]
#[path = "hit_test_tests.rs"]
mod tests;
