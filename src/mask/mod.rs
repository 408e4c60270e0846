//! MS-Access style input masks.
//!
//! A mask is compiled once into a [`CompiledMask`], a sequence of slots where
//! each slot is either a wildcard that constrains one input character or a
//! literal framework character.
//!
//! # Mask syntax
//!
//! | Token         | Meaning                                             |
//! |---------------|-----------------------------------------------------|
//! | `0`           | Digit (0-9), required                               |
//! | `9`           | Digit or space                                      |
//! | `#`           | Digit, space, `+` or `-`                            |
//! | `L`           | Letter, required                                    |
//! | `?`           | Letter or space                                     |
//! | `A`           | Letter or digit, required                           |
//! | `a`           | Letter, digit or space                              |
//! | `&`           | Any character, required                             |
//! | `C`           | Any character, may be left empty                    |
//! | `>`           | Fold following characters to upper case             |
//! | `<`           | Fold following characters to lower case             |
//! | `^`           | Stop case folding                                   |
//! | `!`           | Fill direction flag (recognised, has no effect)     |
//! | `\X`          | `X` is a literal, even if it is a wildcard          |
//! | `"text"`      | `text` is literal                                   |
//! | anything else | Literal framework character                         |
//!
//! A letter is any character whose upper and lower case forms differ.

pub mod cache;
pub mod compiled;
pub mod compiler;
pub mod symbol;

pub use cache::MaskCache;
pub use compiled::{CaseMode, CompiledMask, Slot, SlotKind};
pub use compiler::compile;
pub use symbol::Symbol;
