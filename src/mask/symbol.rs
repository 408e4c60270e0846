//! Wildcard symbols and their character class tests.

use phf::{Map, phf_map};

/// One of the nine wildcard codes of the mask alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Digit,            // 0
    DigitOrSpace,     // 9
    DigitOrSign,      // #
    Letter,           // L
    LetterOrSpace,    // ?
    AlphaNum,         // A
    AlphaNumOrSpace,  // a
    AnyChar,          // &
    AnyOrEmpty,       // C
}

const SYMBOL_MAP: Map<char, Symbol> = phf_map! {
    '0' => Symbol::Digit,
    '9' => Symbol::DigitOrSpace,
    '#' => Symbol::DigitOrSign,
    'L' => Symbol::Letter,
    '?' => Symbol::LetterOrSpace,
    'A' => Symbol::AlphaNum,
    'a' => Symbol::AlphaNumOrSpace,
    '&' => Symbol::AnyChar,
    'C' => Symbol::AnyOrEmpty,
};

impl Symbol {
    /// Look up the wildcard for a mask character.
    pub fn from_char(ch: char) -> Option<Symbol> {
        SYMBOL_MAP.get(&ch).copied()
    }

    /// The mask character for this wildcard.
    pub fn as_char(self) -> char {
        match self {
            Symbol::Digit => '0',
            Symbol::DigitOrSpace => '9',
            Symbol::DigitOrSign => '#',
            Symbol::Letter => 'L',
            Symbol::LetterOrSpace => '?',
            Symbol::AlphaNum => 'A',
            Symbol::AlphaNumOrSpace => 'a',
            Symbol::AnyChar => '&',
            Symbol::AnyOrEmpty => 'C',
        }
    }

    /// Test a candidate character against this wildcard.
    ///
    /// `None` stands for "no character", which only happens when a complete
    /// value is shorter than the mask. Only `C` accepts it.
    pub fn accepts(self, ch: Option<char>) -> bool {
        let Some(ch) = ch else {
            return self == Symbol::AnyOrEmpty;
        };
        match self {
            Symbol::Digit => is_digit(ch),
            Symbol::DigitOrSpace => ch == ' ' || is_digit(ch),
            Symbol::DigitOrSign => " +-".contains(ch) || is_digit(ch),
            Symbol::Letter => is_letter(ch),
            Symbol::LetterOrSpace => ch == ' ' || is_letter(ch),
            Symbol::AlphaNum => is_letter(ch) || is_digit(ch),
            Symbol::AlphaNumOrSpace => ch == ' ' || is_letter(ch) || is_digit(ch),
            Symbol::AnyChar | Symbol::AnyOrEmpty => true,
        }
    }
}

/// ASCII digits only; other Unicode decimal digits are not accepted.
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// A letter is a character from any alphabet that has distinct upper and
/// lower case forms.
pub fn is_letter(ch: char) -> bool {
    !ch.to_lowercase().eq(ch.to_uppercase())
}
