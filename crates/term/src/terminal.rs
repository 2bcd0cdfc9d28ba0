//! Full-screen crossterm display for the version and intro screens.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, ClearType};
use crossterm::{cursor, execute, queue};
use quill_version::{DisplaySink, ScreenSize, TextStyle};
use tracing::{debug, warn};
use unicode_width::UnicodeWidthChar;

use crate::logging::HeldStderr;

const RETURN_PROMPT: &str = "Press ENTER or type command to continue";

/// Alternate-screen terminal in raw mode. Restores the terminal on drop.
///
/// Stderr logging is held for the lifetime of the screen and written out once
/// the terminal is back in its normal mode.
pub struct TerminalScreen {
	stdout: Stdout,
	logs: HeldStderr,
	size: ScreenSize,
	msg_row: u16,
	msg_col: u16,
	interrupted: bool,
}

impl TerminalScreen {
	/// Switches to the alternate screen and raw mode.
	pub fn enter(logs: HeldStderr) -> io::Result<Self> {
		let (cols, rows) = terminal::size().unwrap_or((80, 24));
		logs.hold();
		if let Err(e) = terminal::enable_raw_mode() {
			logs.release();
			return Err(e);
		}
		// Built before switching screens so a failed switch still restores the
		// terminal on drop.
		let mut screen = Self {
			stdout: io::stdout(),
			logs,
			size: ScreenSize::new(rows, cols),
			msg_row: 0,
			msg_col: 0,
			interrupted: false,
		};
		execute!(
			screen.stdout,
			terminal::EnterAlternateScreen,
			terminal::Clear(ClearType::All),
			cursor::MoveTo(0, 0)
		)?;
		debug!(rows, cols, "entered alternate screen");
		Ok(screen)
	}

	/// Puts the message cursor at the start of the bottom row.
	pub fn message_on_last_row(&mut self) -> io::Result<()> {
		let last = self.size.rows.saturating_sub(1);
		self.set_message_row(last)
	}

	fn newline(&mut self) -> io::Result<()> {
		self.msg_col = 0;
		if self.msg_row + 1 >= self.size.rows {
			queue!(self.stdout, terminal::ScrollUp(1))?;
		} else {
			self.msg_row += 1;
		}
		queue!(self.stdout, cursor::MoveTo(0, self.msg_row))
	}

	fn is_interrupt(key: &KeyEvent) -> bool {
		key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
	}
}

impl DisplaySink for TerminalScreen {
	fn size(&self) -> ScreenSize {
		self.size
	}

	fn put_str(&mut self, text: &str) -> io::Result<()> {
		for c in text.chars() {
			if c == '\n' {
				self.newline()?;
				continue;
			}
			let width = c.width().unwrap_or(0) as u16;
			if self.msg_col + width > self.size.cols {
				self.newline()?;
			}
			queue!(self.stdout, Print(c))?;
			self.msg_col += width;
			if self.msg_col >= self.size.cols {
				self.newline()?;
			}
		}
		Ok(())
	}

	fn put_at(&mut self, row: u16, col: u16, text: &str, style: TextStyle) -> io::Result<()> {
		if row >= self.size.rows || col >= self.size.cols {
			return Ok(());
		}
		queue!(self.stdout, cursor::MoveTo(col, row))?;
		match style {
			TextStyle::Special => queue!(self.stdout, SetForegroundColor(Color::Cyan), Print(text), ResetColor),
			TextStyle::Normal => queue!(self.stdout, Print(text)),
		}
	}

	fn clear(&mut self) -> io::Result<()> {
		self.msg_row = 0;
		self.msg_col = 0;
		queue!(self.stdout, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))
	}

	fn set_message_row(&mut self, row: u16) -> io::Result<()> {
		self.msg_row = row.min(self.size.rows.saturating_sub(1));
		self.msg_col = 0;
		queue!(self.stdout, cursor::MoveTo(0, self.msg_row))
	}

	fn wait_return(&mut self) -> io::Result<()> {
		if self.msg_col > 0 {
			self.newline()?;
		}
		queue!(self.stdout, SetForegroundColor(Color::Green), Print(RETURN_PROMPT), ResetColor)?;
		self.stdout.flush()?;

		loop {
			match event::read()? {
				Event::Key(key) if key.kind == KeyEventKind::Press => {
					if Self::is_interrupt(&key) {
						self.interrupted = true;
					}
					break;
				}
				Event::Resize(cols, rows) => self.size = ScreenSize::new(rows, cols),
				_ => {}
			}
		}
		self.msg_col = 0;
		Ok(())
	}

	fn interrupted(&mut self) -> bool {
		if self.interrupted {
			return true;
		}
		while let Ok(true) = event::poll(Duration::ZERO) {
			match event::read() {
				Ok(Event::Key(key)) if Self::is_interrupt(&key) => {
					self.interrupted = true;
					break;
				}
				Ok(_) => {}
				Err(e) => {
					warn!(error = %e, "failed to read terminal event");
					break;
				}
			}
		}
		self.interrupted
	}

	fn flush(&mut self) -> io::Result<()> {
		self.stdout.flush()
	}
}

impl Drop for TerminalScreen {
	fn drop(&mut self) {
		if let Err(e) = execute!(self.stdout, terminal::LeaveAlternateScreen, cursor::Show) {
			warn!(error = %e, "failed to leave alternate screen");
		}
		if let Err(e) = terminal::disable_raw_mode() {
			warn!(error = %e, "failed to disable raw mode");
		}
		self.logs.release();
	}
}
