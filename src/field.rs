//! An editable masked value with a caret and selection.
//!
//! `MaskedField` is the host side of the engine contract: it maps its caret
//! onto a [`CursorState`], splices produced text into the value and re-feeds
//! whatever followed the edit point so the value stays aligned with the mask.

use std::sync::Arc;

use crate::engine::{AcceptResult, CursorState, accept, accept_batch};
use crate::mask::CompiledMask;
use crate::validate::{ValidationResult, validate};

#[derive(Debug, Clone)]
pub struct MaskedField {
    mask: Arc<CompiledMask>,
    value: Vec<char>,
    caret: usize,
    /// Other end of the selection, if any.
    anchor: Option<usize>,
}

impl MaskedField {
    pub fn new(mask: Arc<CompiledMask>) -> Self {
        Self {
            mask,
            value: Vec::new(),
            caret: 0,
            anchor: None,
        }
    }

    /// Start with an existing value, caret at the end. The value is taken
    /// as-is; use [`validate`](Self::validate) to check it.
    pub fn with_value(mask: Arc<CompiledMask>, value: &str) -> Self {
        let value: Vec<char> = value.chars().collect();
        Self {
            mask,
            caret: value.len(),
            value,
            anchor: None,
        }
    }

    pub fn mask(&self) -> &CompiledMask {
        &self.mask
    }

    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Selected range in character indices; empty when nothing is selected.
    pub fn selection(&self) -> (usize, usize) {
        match self.anchor {
            Some(anchor) => (anchor.min(self.caret), anchor.max(self.caret)),
            None => (self.caret, self.caret),
        }
    }

    /// Select `start..end`, leaving the caret at `end`.
    pub fn select(&mut self, start: usize, end: usize) {
        let len = self.value.len();
        self.anchor = Some(start.min(len));
        self.caret = end.min(len);
    }

    pub fn set_caret(&mut self, caret: usize) {
        self.caret = caret.min(self.value.len());
        self.anchor = None;
    }

    pub fn move_left(&mut self) {
        self.set_caret(self.caret.saturating_sub(1));
    }

    pub fn move_right(&mut self) {
        self.set_caret(self.caret + 1);
    }

    pub fn home(&mut self) {
        self.set_caret(0);
    }

    pub fn end(&mut self) {
        self.set_caret(self.value.len());
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.caret = 0;
        self.anchor = None;
    }

    /// Handle one keystroke. Returns `false` when the mask suppresses it.
    pub fn type_char(&mut self, ch: char) -> bool {
        let (start, end) = self.selection();
        match accept(&self.mask, CursorState::new(start), ch) {
            AcceptResult::Consumed { text, cursor } => {
                self.splice(start, end, &text, cursor);
                true
            }
            AcceptResult::Rejected => false,
        }
    }

    /// Replace the selection with `text`, dropping what the mask won't take.
    /// Returns the number of dropped characters.
    pub fn paste(&mut self, text: &str) -> usize {
        let (start, end) = self.selection();
        let batch = accept_batch(&self.mask, CursorState::new(start), text);
        self.splice(start, end, &batch.text, batch.cursor);
        batch.dropped
    }

    pub fn backspace(&mut self) {
        let (start, end) = self.selection();
        if start != end {
            self.splice(start, end, "", CursorState::new(start));
        } else if start > 0 {
            self.splice(start - 1, start, "", CursorState::new(start - 1));
        }
    }

    pub fn delete(&mut self) {
        let (start, end) = self.selection();
        if start != end {
            self.splice(start, end, "", CursorState::new(start));
        } else if start < self.value.len() {
            self.splice(start, start + 1, "", CursorState::new(start));
        }
    }

    /// Whole-value check, as on leaving the field.
    pub fn validate(&self) -> ValidationResult {
        validate(&self.mask, &self.value())
    }

    /// Replace `start..end` with `text` and re-feed the old tail from `cursor`.
    fn splice(&mut self, start: usize, end: usize, text: &str, cursor: CursorState) {
        let tail: String = self.value[end..].iter().collect();
        let rest = accept_batch(&self.mask, cursor, &tail);
        self.value.truncate(start);
        self.value.extend(text.chars());
        self.value.extend(rest.text.chars());
        self.caret = cursor.position.min(self.value.len());
        self.anchor = None;
    }
}
