//! Terminal abstraction layer.
//!
//! Provides a `Terminal` trait for single-line prompt I/O and two
//! implementations:
//! - `CrosstermTerminal` for real terminal interaction
//! - `MockTerminal` for testing

use std::io::Write;

use anyhow::Result;
use crossterm::event::Event;

/// Abstraction over the operations the prompt needs.
pub trait Terminal {
    /// Enter raw mode and prepare the terminal.
    fn init(&mut self) -> Result<()>;

    /// Restore the terminal to its original state.
    fn cleanup(&mut self) -> Result<()>;

    /// Clear the current line and move to its first column.
    fn clear_line(&mut self);

    /// Move the cursor to a 0-based column of the current line.
    fn move_to_column(&mut self, col: u16);

    /// Write a string at the current cursor position.
    fn write_str(&mut self, s: &str);

    /// Sound the terminal bell.
    fn beep(&mut self);

    /// Flush output to the terminal.
    fn flush(&mut self);

    /// Block until an event is received.
    fn read_event(&mut self) -> Result<Event>;
}

/// Real terminal using crossterm.
#[derive(Debug, Default)]
pub struct CrosstermTerminal;

impl CrosstermTerminal {
    pub fn new() -> Self {
        Self
    }
}

impl Terminal for CrosstermTerminal {
    fn init(&mut self) -> Result<()> {
        crossterm::terminal::enable_raw_mode()?;
        crossterm::execute!(std::io::stdout(), crossterm::event::EnableBracketedPaste)?;
        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        crossterm::execute!(
            std::io::stdout(),
            crossterm::event::DisableBracketedPaste,
            crossterm::style::Print("\r\n")
        )?;
        crossterm::terminal::disable_raw_mode()?;
        Ok(())
    }

    fn clear_line(&mut self) {
        crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::Clear(crossterm::terminal::ClearType::CurrentLine),
            crossterm::cursor::MoveToColumn(0)
        )
        .ok();
    }

    fn move_to_column(&mut self, col: u16) {
        crossterm::execute!(std::io::stdout(), crossterm::cursor::MoveToColumn(col)).ok();
    }

    fn write_str(&mut self, s: &str) {
        crossterm::execute!(std::io::stdout(), crossterm::style::Print(s)).ok();
    }

    fn beep(&mut self) {
        crossterm::execute!(std::io::stdout(), crossterm::style::Print('\x07')).ok();
    }

    fn flush(&mut self) {
        std::io::stdout().flush().ok();
    }

    fn read_event(&mut self) -> Result<Event> {
        loop {
            match crossterm::event::read()? {
                event @ (Event::Key(_) | Event::Paste(_)) => return Ok(event),
                _ => {} // Ignore mouse, focus and resize events
            }
        }
    }
}

/// Mock terminal for testing — records all operations.
#[cfg(test)]
#[derive(Default)]
pub struct MockTerminal {
    pub column: u16,
    pub ops: Vec<MockOp>,
    pub event_queue: std::collections::VecDeque<Event>,
}

#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub enum MockOp {
    Init,
    Cleanup,
    ClearLine,
    MoveToColumn(u16),
    WriteStr(String),
    Beep,
    Flush,
}

#[cfg(test)]
impl MockTerminal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_event(&mut self, event: Event) {
        self.event_queue.push_back(event);
    }

    pub fn push_keys(&mut self, s: &str) {
        for ch in s.chars() {
            self.push_event(Event::Key(crossterm::event::KeyEvent::new(
                crossterm::event::KeyCode::Char(ch),
                crossterm::event::KeyModifiers::NONE,
            )));
        }
    }

    /// The last line written after a `ClearLine`.
    pub fn last_line(&self) -> String {
        let start = self
            .ops
            .iter()
            .rposition(|op| *op == MockOp::ClearLine)
            .map_or(0, |i| i + 1);
        self.ops[start..]
            .iter()
            .filter_map(|op| match op {
                MockOp::WriteStr(s) => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn beeps(&self) -> usize {
        self.ops.iter().filter(|op| **op == MockOp::Beep).count()
    }
}

#[cfg(test)]
impl Terminal for MockTerminal {
    fn init(&mut self) -> Result<()> {
        self.ops.push(MockOp::Init);
        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        self.ops.push(MockOp::Cleanup);
        Ok(())
    }

    fn clear_line(&mut self) {
        self.column = 0;
        self.ops.push(MockOp::ClearLine);
    }

    fn move_to_column(&mut self, col: u16) {
        self.column = col;
        self.ops.push(MockOp::MoveToColumn(col));
    }

    fn write_str(&mut self, s: &str) {
        self.ops.push(MockOp::WriteStr(s.to_string()));
    }

    fn beep(&mut self) {
        self.ops.push(MockOp::Beep);
    }

    fn flush(&mut self) {
        self.ops.push(MockOp::Flush);
    }

    fn read_event(&mut self) -> Result<Event> {
        match self.event_queue.pop_front() {
            Some(event) => Ok(event),
            None => anyhow::bail!("No more events in mock queue"),
        }
    }
}
