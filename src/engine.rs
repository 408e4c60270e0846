//! Keystroke acceptance against a compiled mask.
//!
//! The engine holds no state of its own. The caller owns a [`CursorState`]
//! for the duration of one edit and threads it through [`accept`] and
//! [`accept_batch`].

use crate::mask::{CompiledMask, SlotKind};

#[cfg(test)]
mod tests;

/// Write position within a mask's slots, `0..=mask.len()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CursorState {
    pub position: usize,
}

impl CursorState {
    pub fn new(position: usize) -> Self {
        Self { position }
    }

    pub fn start() -> Self {
        Self { position: 0 }
    }
}

/// Outcome of offering one character to the mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcceptResult {
    /// `text` is to be written at the old cursor; `cursor` is the new position.
    Consumed { text: String, cursor: CursorState },
    /// The character cannot go anywhere before the end of the mask.
    Rejected,
}

impl AcceptResult {
    pub fn is_consumed(&self) -> bool {
        matches!(self, AcceptResult::Consumed { .. })
    }
}

/// Result of feeding a run of characters through [`accept`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BatchResult {
    pub text: String,
    pub cursor: CursorState,
    /// Characters that were rejected and left out of `text`.
    pub dropped: usize,
}

/// Offer `input` at `cursor`.
///
/// Literal slots that don't match `input` are filled in and skipped. A
/// wildcard slot either takes the (case folded) character, followed by any
/// literals up to the next wildcard, or rejects it outright.
pub fn accept(mask: &CompiledMask, cursor: CursorState, input: char) -> AcceptResult {
    let mut text = String::new();
    let mut position = cursor.position;

    while let Some(slot) = mask.slot(position) {
        match slot.kind {
            SlotKind::Symbol(sym) => {
                if !sym.accepts(Some(input)) {
                    return AcceptResult::Rejected;
                }
                text.push(slot.case.apply(input));
                position += 1;
                position = fill_literals(mask, position, &mut text);
                return AcceptResult::Consumed {
                    text,
                    cursor: CursorState::new(position),
                };
            }
            SlotKind::Literal(ch) => {
                text.push(ch);
                position += 1;
                if ch == input {
                    return AcceptResult::Consumed {
                        text,
                        cursor: CursorState::new(position),
                    };
                }
            }
        }
    }
    AcceptResult::Rejected
}

/// Append the run of literal slots starting at `position`; returns the
/// position of the next wildcard (or the end of the mask).
fn fill_literals(mask: &CompiledMask, mut position: usize, text: &mut String) -> usize {
    while let Some(ch) = mask.literal_at(position) {
        text.push(ch);
        position += 1;
    }
    position
}

/// Feed each character of `input` through [`accept`], threading the cursor.
///
/// Rejected characters are dropped without moving the cursor.
pub fn accept_batch(mask: &CompiledMask, cursor: CursorState, input: &str) -> BatchResult {
    input.chars().fold(
        BatchResult {
            cursor,
            ..BatchResult::default()
        },
        |mut batch, ch| {
            match accept(mask, batch.cursor, ch) {
                AcceptResult::Consumed { text, cursor } => {
                    batch.text.push_str(&text);
                    batch.cursor = cursor;
                }
                AcceptResult::Rejected => batch.dropped += 1,
            }
            batch
        },
    )
}
