//! MS-Access style input masks.
//!
//! A mask is compiled once, then used to accept keystrokes one at a time,
//! to filter pasted text, and to validate complete values.
//!
//! # Example
//!
//! ```rust
//! use maskfield::{AcceptResult, CursorState, ValidationResult, accept, accept_batch, compile, validate};
//!
//! let mask = compile("(000) 000-0000");
//!
//! // Typing a digit at the start fills in the opening parenthesis.
//! let AcceptResult::Consumed { text, cursor } = accept(&mask, CursorState::start(), '5') else {
//!     panic!("digit rejected");
//! };
//! assert_eq!(text, "(5");
//! assert_eq!(cursor.position, 2);
//!
//! // Pasted text drops what doesn't fit and fills in literals.
//! let batch = accept_batch(&mask, CursorState::start(), "555.123.4567");
//! assert_eq!(batch.text, "(555) 123-4567");
//!
//! // Complete values must already contain the literals.
//! assert!(validate(&mask, &batch.text).is_accepted());
//! assert!(!validate(&mask, "5551234567").is_accepted());
//! assert_eq!(validate(&mask, ""), ValidationResult::Accepted(String::new()));
//! ```

mod app;
pub mod engine;
mod field;
pub mod keybind;
pub mod mask;
pub mod terminal;
mod validate;

pub use app::{Prompt, PromptOutcome};
pub use engine::{AcceptResult, BatchResult, CursorState, accept, accept_batch};
pub use field::MaskedField;
pub use mask::{CaseMode, CompiledMask, MaskCache, Slot, SlotKind, Symbol, compile};
pub use validate::{Rejection, ValidationResult, validate};
