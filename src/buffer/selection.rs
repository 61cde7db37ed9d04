//! Selection state (§4.2.5).

use super::cursor::Position;
use super::GapBuffer;
use crate::error::Result;

/// A selection spans `anchor` (where the drag/shift started) to
/// `active` (the live end, usually the cursor). `anchor`/`active` are
/// not required to be ascending; exported selected text is always
/// normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub anchor: Position,
    pub active: Position,
    pub is_active: bool,
    pub is_rectangular: bool,
}

impl Selection {
    #[must_use]
    pub fn inactive() -> Self {
        Self {
            anchor: Position { line: 0, column: 0, offset: 0 },
            active: Position { line: 0, column: 0, offset: 0 },
            is_active: false,
            is_rectangular: false,
        }
    }

    /// Endpoints as an ascending `(start, end)` offset pair.
    #[must_use]
    pub fn normalized_offsets(&self) -> (usize, usize) {
        if self.anchor.offset <= self.active.offset {
            (self.anchor.offset, self.active.offset)
        } else {
            (self.active.offset, self.anchor.offset)
        }
    }
}

impl GapBuffer {
    /// Sets the selection from two `(line, column)` endpoints,
    /// materializing each into an absolute-offset [`Position`].
    pub fn set_selection(
        &mut self,
        anchor: (usize, usize),
        active: (usize, usize),
        is_rectangular: bool,
    ) -> Result<Selection> {
        let anchor_offset = self.offset_of(anchor.0, anchor.1)?;
        let active_offset = self.offset_of(active.0, active.1)?;
        let sel = Selection {
            anchor: Position { line: anchor.0, column: anchor.1, offset: anchor_offset },
            active: Position { line: active.0, column: active.1, offset: active_offset },
            is_active: true,
            is_rectangular,
        };
        self.selection = Some(sel);
        Ok(sel)
    }

    /// The current selection, or an inactive marker if none is set.
    #[must_use]
    pub fn get_selection(&self) -> Selection {
        self.selection.unwrap_or_else(Selection::inactive)
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// The selected text, endpoints normalized ascending. Empty (not an
    /// error) when no selection is active.
    pub fn get_selected_text(&self) -> Result<String> {
        let Some(sel) = self.selection.filter(|s| s.is_active) else {
            return Ok(String::new());
        };
        let (start, end) = sel.normalized_offsets();
        self.get_range(start, end)
    }
}
