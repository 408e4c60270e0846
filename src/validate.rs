//! Whole-value validation.
//!
//! Unlike keystroke acceptance, literals are never filled in here: a complete
//! value must already hold every framework character in place.

use std::fmt;

use crate::mask::{CompiledMask, SlotKind};

/// Outcome of checking a complete value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Accepted(String),
    Rejected(Rejection),
}

impl ValidationResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationResult::Accepted(_))
    }
}

/// Why a value does not conform to its mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// More characters than the mask has slots.
    TooLong,
    /// The character at this index (or its absence) fails the slot.
    InvalidCharacterAtPosition(usize),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLong => write!(f, "Input is too long!"),
            Self::InvalidCharacterAtPosition(i) => {
                write!(f, "Invalid input! (position {})", i + 1)
            }
        }
    }
}

/// Check `value` against `mask`.
///
/// An empty value is always accepted so a field may be left blank. Missing
/// trailing characters are tested as "no character", which only the `C`
/// wildcard allows.
pub fn validate(mask: &CompiledMask, value: &str) -> ValidationResult {
    if value.is_empty() {
        return ValidationResult::Accepted(String::new());
    }
    if value.chars().count() > mask.len() {
        return ValidationResult::Rejected(Rejection::TooLong);
    }

    let mut chars = value.chars();
    for (i, slot) in mask.slots().iter().enumerate() {
        let ch = chars.next();
        let ok = match slot.kind {
            SlotKind::Symbol(sym) => sym.accepts(ch),
            SlotKind::Literal(lit) => ch == Some(lit),
        };
        if !ok {
            return ValidationResult::Rejected(Rejection::InvalidCharacterAtPosition(i));
        }
    }
    ValidationResult::Accepted(value.to_string())
}
