//! Event loop for the interactive masked prompt.
//!
//! The `Prompt` ties together a MaskedField, a Terminal and the key bindings.
//! The field is drawn on one line as `label: value`, with unfilled wildcard
//! slots shown as `_` and any validation message after the value.

use anyhow::Result;

use crate::field::MaskedField;
use crate::keybind::{self, FieldAction};
use crate::terminal::Terminal;
use crate::validate::ValidationResult;

const FILL: char = '_';

/// What a finished prompt produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    Submitted(String),
    Cancelled,
}

pub struct Prompt {
    pub field: MaskedField,
    pub label: String,
    message: Option<String>,
}

impl Prompt {
    pub fn new(field: MaskedField, label: &str) -> Self {
        Self {
            field,
            label: label.to_string(),
            message: None,
        }
    }

    /// Run until the value is submitted and valid, or the prompt is cancelled.
    pub fn run(&mut self, terminal: &mut dyn Terminal) -> Result<PromptOutcome> {
        terminal.init()?;
        let outcome = self.event_loop(terminal);
        terminal.cleanup()?;
        outcome
    }

    fn event_loop(&mut self, terminal: &mut dyn Terminal) -> Result<PromptOutcome> {
        loop {
            self.redraw(terminal);
            let event = terminal.read_event()?;
            if let Some(outcome) = self.handle_action(keybind::resolve_event(event), terminal) {
                self.redraw(terminal);
                return Ok(outcome);
            }
        }
    }

    fn handle_action(
        &mut self,
        action: FieldAction,
        terminal: &mut dyn Terminal,
    ) -> Option<PromptOutcome> {
        if action != FieldAction::Ignore {
            self.message = None;
        }

        match action {
            FieldAction::Insert(ch) => {
                if !self.field.type_char(ch) {
                    terminal.beep();
                }
            }
            FieldAction::Paste(text) => {
                if self.field.paste(&text) > 0 {
                    terminal.beep();
                }
            }
            FieldAction::Backspace => self.field.backspace(),
            FieldAction::Delete => self.field.delete(),
            FieldAction::Left => self.field.move_left(),
            FieldAction::Right => self.field.move_right(),
            FieldAction::Home => self.field.home(),
            FieldAction::End => self.field.end(),
            FieldAction::Clear => self.field.clear(),
            FieldAction::Submit => match self.field.validate() {
                ValidationResult::Accepted(value) => {
                    return Some(PromptOutcome::Submitted(value));
                }
                ValidationResult::Rejected(rejection) => {
                    // Stay in the field so the value can be corrected.
                    self.message = Some(rejection.to_string());
                    terminal.beep();
                }
            },
            FieldAction::Cancel => return Some(PromptOutcome::Cancelled),
            FieldAction::Ignore => {}
        }
        None
    }

    /// The text of the field: the value followed by the rest of the mask.
    pub fn display_text(&self) -> String {
        let value = self.field.value();
        let filled = value.chars().count();
        let rest: String = self
            .field
            .mask()
            .placeholder(FILL)
            .chars()
            .skip(filled)
            .collect();
        value + &rest
    }

    fn redraw(&self, terminal: &mut dyn Terminal) {
        let prefix = format!("{}: ", self.label);
        terminal.clear_line();
        terminal.write_str(&prefix);
        terminal.write_str(&self.display_text());
        if let Some(message) = &self.message {
            terminal.write_str("  ");
            terminal.write_str(message);
        }
        let col = prefix.chars().count() + self.field.caret();
        terminal.move_to_column(u16::try_from(col).unwrap_or(u16::MAX));
        terminal.flush();
    }
}
