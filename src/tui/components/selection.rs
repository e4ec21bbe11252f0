//! Row selection shared by the car, rental and invoice panels.
//!
//! The cursor only stores an index; the lists themselves live in `App` and
//! can shrink or grow on every refresh, so every read clamps to the current
//! length.

use crate::tui::event::TuiEvent;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ListCursor {
    selected: usize,
}

impl ListCursor {
    /// Selected row for a list of `len` items, clamped. `None` when empty.
    pub fn selected(&self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.selected.min(len - 1))
        }
    }

    /// Move on Up/Down. Returns true if the event was consumed.
    pub fn handle_event(&mut self, event: &TuiEvent, len: usize) -> bool {
        match event {
            TuiEvent::CursorUp => {
                self.selected = self.selected(len).unwrap_or(0).saturating_sub(1);
                true
            }
            TuiEvent::CursorDown => {
                if len > 0 {
                    self.selected = (self.selected(len).unwrap_or(0) + 1).min(len - 1);
                }
                true
            }
            _ => false,
        }
    }
}
