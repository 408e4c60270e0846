use super::*;
use crate::mask::compile;
use crate::validate::{ValidationResult, validate};

fn consumed(text: &str, position: usize) -> AcceptResult {
    AcceptResult::Consumed {
        text: text.to_string(),
        cursor: CursorState::new(position),
    }
}

/// Type `input` one key at a time from the start, panicking on rejection.
fn type_all(raw: &str, input: &str) -> String {
    let mask = compile(raw);
    let mut cursor = CursorState::start();
    let mut value = String::new();
    for ch in input.chars() {
        match accept(&mask, cursor, ch) {
            AcceptResult::Consumed { text, cursor: next } => {
                value.push_str(&text);
                cursor = next;
            }
            AcceptResult::Rejected => panic!("{ch:?} rejected at {}", cursor.position),
        }
    }
    value
}

#[test]
fn test_digit_into_wildcard() {
    let mask = compile("000");
    assert_eq!(accept(&mask, CursorState::start(), '4'), consumed("4", 1));
}

#[test]
fn test_wildcard_mismatch_rejects_without_scanning() {
    let mask = compile("0L");
    assert_eq!(accept(&mask, CursorState::start(), 'x'), AcceptResult::Rejected);
}

#[test]
fn test_leading_literal_skipped() {
    let mask = compile("(000)");
    assert_eq!(accept(&mask, CursorState::start(), '5'), consumed("(5", 2));
}

#[test]
fn test_matching_literal_echoed() {
    let mask = compile("(000)");
    assert_eq!(accept(&mask, CursorState::start(), '('), consumed("(", 1));
}

#[test]
fn test_literals_after_wildcard_filled() {
    let mask = compile("(000) 000-0000");
    assert_eq!(accept(&mask, CursorState::new(3), '9'), consumed("9) ", 6));
}

#[test]
fn test_typing_literal_over_filled_run() {
    // After "12" the cursor already sits past the hyphen, so typing it again
    // has nowhere to go.
    let mask = compile("00-00");
    assert_eq!(accept(&mask, CursorState::new(3), '-'), AcceptResult::Rejected);
    // At the hyphen itself it is echoed.
    assert_eq!(accept(&mask, CursorState::new(2), '-'), consumed("-", 3));
}

#[test]
fn test_end_of_mask_rejects() {
    let mask = compile("00");
    assert_eq!(accept(&mask, CursorState::new(2), '1'), AcceptResult::Rejected);
    assert_eq!(accept(&mask, CursorState::new(7), '1'), AcceptResult::Rejected);
}

#[test]
fn test_trailing_literals_without_match_reject() {
    let mask = compile("0-");
    // Only a literal remains and it isn't 'x'.
    assert_eq!(accept(&mask, CursorState::new(1), 'x'), AcceptResult::Rejected);
}

#[test]
fn test_empty_mask_rejects_everything() {
    let mask = compile("");
    assert_eq!(accept(&mask, CursorState::start(), 'a'), AcceptResult::Rejected);
}

#[test]
fn test_phone_number_auto_fill() {
    assert_eq!(type_all("(000) 000-0000", "5551234567"), "(555) 123-4567");
}

#[test]
fn test_case_conversion() {
    assert_eq!(type_all(">LL<LL", "abcd"), "ABcd");
    assert_eq!(type_all(">LL<LL", "ABCD"), "ABcd");
    assert_eq!(type_all(">L^L", "ab"), "Ab");
}

#[test]
fn test_escaped_wildcard_is_literal() {
    assert_eq!(type_all("\\A00", "12"), "A12");
}

#[test]
fn test_quoted_literal() {
    assert_eq!(type_all("\"No.\"000", "007"), "No.007");
}

#[test]
fn test_class_boundaries() {
    let zero = compile("0");
    let nine = compile("9");
    assert_eq!(accept(&zero, CursorState::start(), ' '), AcceptResult::Rejected);
    assert_eq!(accept(&nine, CursorState::start(), ' '), consumed(" ", 1));
}

#[test]
fn test_fill_direction_flag_has_no_effect() {
    assert_eq!(type_all("!000", "123"), "123");
    assert_eq!(compile("!000"), compile("000"));
}

#[test]
fn test_batch_threads_cursor() {
    let mask = compile("(000) 000-0000");
    let batch = accept_batch(&mask, CursorState::start(), "555-123-4567");
    assert_eq!(batch.text, "(555) 123-4567");
    assert_eq!(batch.cursor, CursorState::new(14));
    // Both hyphens arrive after auto-fill has already passed their slots.
    assert_eq!(batch.dropped, 2);
}

#[test]
fn test_batch_drops_rejected_chars() {
    let mask = compile("0000");
    let batch = accept_batch(&mask, CursorState::start(), "1a2 b34");
    assert_eq!(batch.text, "1234");
    assert_eq!(batch.cursor, CursorState::new(4));
    assert_eq!(batch.dropped, 3);
}

#[test]
fn test_batch_overflow_dropped() {
    let mask = compile("00");
    let batch = accept_batch(&mask, CursorState::start(), "12345");
    assert_eq!(batch.text, "12");
    assert_eq!(batch.dropped, 3);
}

#[test]
fn test_batch_from_middle() {
    let mask = compile("(000) 000-0000");
    let batch = accept_batch(&mask, CursorState::new(6), "1234567");
    assert_eq!(batch.text, "123-4567");
    assert_eq!(batch.cursor, CursorState::new(14));
}

#[test]
fn test_batch_empty_input() {
    let mask = compile("000");
    let batch = accept_batch(&mask, CursorState::new(1), "");
    assert_eq!(batch, BatchResult {
        text: String::new(),
        cursor: CursorState::new(1),
        dropped: 0,
    });
}

#[test]
fn test_typed_value_validates() {
    for (raw, input) in [
        ("(000) 000-0000", "5551234567"),
        (">LL<LL", "xYzW"),
        ("\\A00", "12"),
        ("\"No.\"000", "007"),
        ("##/aa?&", "+-x1 q"),
        (">L0L 0L0", "k1a2b3"),
    ] {
        let value = type_all(raw, input);
        assert_eq!(
            validate(&compile(raw), &value),
            ValidationResult::Accepted(value.clone()),
            "{raw:?} with {input:?}"
        );
    }
}

#[test]
fn test_multibyte_input() {
    assert_eq!(type_all(">LL", "éü"), "ÉÜ");
}
