//! Single-pass compiler from mask text to [`CompiledMask`].

use std::str::Chars;

use super::compiled::{CaseMode, CompiledMask, Slot, SlotKind};
use super::symbol::Symbol;

/// Compile a mask string.
///
/// Never fails: an unterminated `"` span runs to the end of the mask, and a
/// trailing `\` with nothing to escape is itself a literal.
pub fn compile(mask: &str) -> CompiledMask {
    let mut compiler = Compiler {
        chars: mask.chars(),
        case: CaseMode::None,
        slots: Vec::with_capacity(mask.len()),
    };
    compiler.compile_mask();
    CompiledMask::from_slots(compiler.slots)
}

struct Compiler<'a> {
    chars: Chars<'a>,
    case: CaseMode,
    slots: Vec<Slot>,
}

impl Compiler<'_> {
    fn compile_mask(&mut self) {
        while let Some(ch) = self.chars.next() {
            match ch {
                '>' => self.case = CaseMode::Upper,
                '<' => self.case = CaseMode::Lower,
                '^' => self.case = CaseMode::None,
                // Fill direction flag; recognised, not implemented.
                '!' => {}
                '\\' => {
                    let escaped = self.chars.next().unwrap_or('\\');
                    self.push(SlotKind::Literal(escaped));
                }
                '"' => self.compile_quoted(),
                _ => match Symbol::from_char(ch) {
                    Some(sym) => self.push(SlotKind::Symbol(sym)),
                    None => self.push(SlotKind::Literal(ch)),
                },
            }
        }
    }

    /// Literal span after an opening `"`, up to and including the closing `"`.
    fn compile_quoted(&mut self) {
        while let Some(ch) = self.chars.next() {
            if ch == '"' {
                return;
            }
            self.push(SlotKind::Literal(ch));
        }
    }

    fn push(&mut self, kind: SlotKind) {
        self.slots.push(Slot {
            kind,
            case: self.case,
        });
    }
}
