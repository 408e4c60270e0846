//! The compiled form of a mask.

use std::fmt;

use super::symbol::Symbol;

/// Case conversion applied to input accepted at a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CaseMode {
    #[default]
    None,
    Upper,
    Lower,
}

impl CaseMode {
    /// Fold `ch` according to this mode.
    ///
    /// A slot holds exactly one character, so mappings that expand to more
    /// than one character (`ß` to `SS`) leave `ch` unchanged.
    pub fn apply(self, ch: char) -> char {
        match self {
            CaseMode::None => ch,
            CaseMode::Upper => single(ch.to_uppercase()).unwrap_or(ch),
            CaseMode::Lower => single(ch.to_lowercase()).unwrap_or(ch),
        }
    }

    fn marker(self) -> char {
        match self {
            CaseMode::None => '^',
            CaseMode::Upper => '>',
            CaseMode::Lower => '<',
        }
    }
}

fn single(mut it: impl Iterator<Item = char>) -> Option<char> {
    match (it.next(), it.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

/// What occupies a slot: a wildcard test or a fixed character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKind {
    Symbol(Symbol),
    Literal(char),
}

/// One position of a compiled mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    pub kind: SlotKind,
    pub case: CaseMode,
}

impl Slot {
    pub fn is_literal(&self) -> bool {
        matches!(self.kind, SlotKind::Literal(_))
    }
}

/// A mask compiled into positional slots.
///
/// Slot `i` corresponds to character `i` of a conforming value. The three
/// layer views (`symbol_layer`, `literal_layer`, `case_layer`) all have
/// length [`len`](Self::len), and at every index exactly one of the symbol
/// and literal layers is populated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CompiledMask {
    slots: Vec<Slot>,
}

impl CompiledMask {
    pub(crate) fn from_slots(slots: Vec<Slot>) -> Self {
        Self { slots }
    }

    /// Number of slots, i.e. the length of a complete value.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    pub fn symbol_at(&self, index: usize) -> Option<Symbol> {
        match self.slots.get(index)?.kind {
            SlotKind::Symbol(sym) => Some(sym),
            SlotKind::Literal(_) => None,
        }
    }

    pub fn literal_at(&self, index: usize) -> Option<char> {
        match self.slots.get(index)?.kind {
            SlotKind::Literal(ch) => Some(ch),
            SlotKind::Symbol(_) => None,
        }
    }

    /// Case mode at `index`; [`CaseMode::None`] past the end.
    pub fn case_at(&self, index: usize) -> CaseMode {
        self.slots
            .get(index)
            .map(|slot| slot.case)
            .unwrap_or_default()
    }

    pub fn symbol_layer(&self) -> Vec<Option<Symbol>> {
        (0..self.len()).map(|i| self.symbol_at(i)).collect()
    }

    pub fn literal_layer(&self) -> Vec<Option<char>> {
        (0..self.len()).map(|i| self.literal_at(i)).collect()
    }

    pub fn case_layer(&self) -> Vec<CaseMode> {
        self.slots.iter().map(|slot| slot.case).collect()
    }

    /// Render an empty field: wildcards shown as `fill`, literals in place.
    pub fn placeholder(&self, fill: char) -> String {
        self.slots
            .iter()
            .map(|slot| match slot.kind {
                SlotKind::Symbol(_) => fill,
                SlotKind::Literal(ch) => ch,
            })
            .collect()
    }
}

/// Characters that must be escaped to be read back as literals.
fn needs_escape(ch: char) -> bool {
    Symbol::from_char(ch).is_some() || "<>^!\\\"".contains(ch)
}

/// Canonical mask text. Compiling it yields an equal [`CompiledMask`].
impl fmt::Display for CompiledMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut case = CaseMode::None;
        for slot in &self.slots {
            if slot.case != case {
                write!(f, "{}", slot.case.marker())?;
                case = slot.case;
            }
            match slot.kind {
                SlotKind::Symbol(sym) => write!(f, "{}", sym.as_char())?,
                SlotKind::Literal(ch) if needs_escape(ch) => write!(f, "\\{ch}")?,
                SlotKind::Literal(ch) => write!(f, "{ch}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(s: Symbol, case: CaseMode) -> Slot {
        Slot {
            kind: SlotKind::Symbol(s),
            case,
        }
    }

    fn lit(ch: char) -> Slot {
        Slot {
            kind: SlotKind::Literal(ch),
            case: CaseMode::None,
        }
    }

    #[test]
    fn case_fold_single_char() {
        assert_eq!(CaseMode::Upper.apply('a'), 'A');
        assert_eq!(CaseMode::Lower.apply('Q'), 'q');
        assert_eq!(CaseMode::None.apply('q'), 'q');
        assert_eq!(CaseMode::Upper.apply('7'), '7');
    }

    #[test]
    fn case_fold_keeps_expanding_chars() {
        assert_eq!(CaseMode::Upper.apply('ß'), 'ß');
    }

    #[test]
    fn layers_line_up() {
        let mask = CompiledMask::from_slots(vec![
            lit('('),
            sym(Symbol::Digit, CaseMode::None),
            sym(Symbol::Letter, CaseMode::Upper),
        ]);
        assert_eq!(mask.len(), 3);
        assert_eq!(mask.symbol_layer(), vec![None, Some(Symbol::Digit), Some(Symbol::Letter)]);
        assert_eq!(mask.literal_layer(), vec![Some('('), None, None]);
        assert_eq!(
            mask.case_layer(),
            vec![CaseMode::None, CaseMode::None, CaseMode::Upper]
        );
        assert_eq!(mask.case_at(10), CaseMode::None);
        assert_eq!(mask.symbol_at(10), None);
        assert_eq!(mask.literal_at(10), None);
    }

    #[test]
    fn placeholder_shows_literals() {
        let mask = CompiledMask::from_slots(vec![
            lit('('),
            sym(Symbol::Digit, CaseMode::None),
            sym(Symbol::Digit, CaseMode::None),
            lit(')'),
        ]);
        assert_eq!(mask.placeholder('_'), "(__)");
    }

    #[test]
    fn display_escapes_wildcard_literals() {
        let mask = CompiledMask::from_slots(vec![
            lit('A'),
            lit('-'),
            sym(Symbol::Letter, CaseMode::Upper),
            sym(Symbol::Letter, CaseMode::Upper),
            sym(Symbol::Digit, CaseMode::None),
        ]);
        assert_eq!(mask.to_string(), "\\A->LL^0");
    }
}
