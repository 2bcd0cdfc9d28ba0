//! Display surface used by the version report and intro screen.
//!
//! The frontend implements [`DisplaySink`]. Message-style output (the
//! version report) flows through a [`MessageWriter`], which owns the cursor
//! column for the duration of one report and hands it back when done, so no
//! cursor state lives outside the call.

#[cfg(any(test, doc, feature = "testing"))]
mod grid;
mod writer_sink;

use std::io;

use tracing::debug;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

#[cfg(any(test, doc, feature = "testing"))]
pub use grid::{Cell, ScreenGrid};
pub use writer_sink::WriterSink;

/// Screen extents reported by the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
	pub rows: u16,
	pub cols: u16,
}

impl ScreenSize {
	pub const fn new(rows: u16, cols: u16) -> Self {
		Self { rows, cols }
	}
}

/// Highlight applied to a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextStyle {
	#[default]
	Normal,
	/// Key names and other `<...>` items.
	Special,
}

/// Output surface provided by the editor frontend.
pub trait DisplaySink {
	/// Current screen extents.
	fn size(&self) -> ScreenSize;

	/// Appends text at the message cursor. `\n` starts a new message line.
	fn put_str(&mut self, text: &str) -> io::Result<()>;

	/// Draws text at an absolute cell without moving the message cursor.
	fn put_at(&mut self, row: u16, col: u16, text: &str, style: TextStyle) -> io::Result<()>;

	/// Blanks the whole screen and homes the message cursor.
	fn clear(&mut self) -> io::Result<()>;

	/// Moves the message cursor to the first column of `row`.
	fn set_message_row(&mut self, row: u16) -> io::Result<()>;

	/// Blocks until the user acknowledges what is on screen.
	fn wait_return(&mut self) -> io::Result<()>;

	/// Returns true once the user asked to abort the current output.
	fn interrupted(&mut self) -> bool {
		false
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

/// Returns the number of screen cells `text` occupies.
pub fn display_width(text: &str) -> usize {
	UnicodeWidthStr::width(text)
}

/// Message-area writer that tracks the cursor column.
pub struct MessageWriter<'a, S: DisplaySink + ?Sized> {
	sink: &'a mut S,
	col: usize,
	columns: usize,
	interrupted: bool,
}

impl<'a, S: DisplaySink + ?Sized> MessageWriter<'a, S> {
	/// Starts writing at column `col` of the current message line.
	pub fn new(sink: &'a mut S, col: usize) -> Self {
		let columns = usize::from(sink.size().cols);
		Self {
			sink,
			col,
			columns,
			interrupted: false,
		}
	}

	/// Current message column.
	pub fn col(&self) -> usize {
		self.col
	}

	/// Screen width captured when the writer was created.
	pub fn columns(&self) -> usize {
		self.columns
	}

	/// Polls the sink for a user abort. Once set, the flag stays set.
	pub fn is_interrupted(&mut self) -> bool {
		if !self.interrupted && self.sink.interrupted() {
			debug!(col = self.col, "message output interrupted");
			self.interrupted = true;
		}
		self.interrupted
	}

	/// Writes `text` and advances the column.
	pub fn puts(&mut self, text: &str) -> io::Result<()> {
		if text.is_empty() {
			return Ok(());
		}
		self.sink.put_str(text)?;
		self.advance(text);
		Ok(())
	}

	pub fn putchar(&mut self, c: char) -> io::Result<()> {
		let mut buf = [0u8; 4];
		self.puts(c.encode_utf8(&mut buf))
	}

	/// Ends the current line if anything was written on it.
	pub fn start_line(&mut self) -> io::Result<()> {
		if self.col > 0 {
			self.putchar('\n')?;
		}
		Ok(())
	}

	/// Writes `text` on a fresh line.
	pub fn msg(&mut self, text: &str) -> io::Result<()> {
		self.start_line()?;
		self.puts(text)
	}

	/// Writes a chunk of the version report.
	///
	/// A chunk narrower than the screen that would run into the right edge
	/// starts on a new line, unless it begins with a newline itself. Nothing
	/// is written after an interrupt.
	pub fn version_msg(&mut self, text: &str) -> io::Result<()> {
		if self.is_interrupted() {
			return Ok(());
		}
		let len = display_width(text);
		if len < self.columns && self.col + len >= self.columns && !text.starts_with('\n') {
			self.putchar('\n')?;
		}
		self.puts(text)
	}

	/// Flushes the sink and returns the final message column.
	pub fn finish(self) -> io::Result<usize> {
		self.sink.flush()?;
		Ok(self.col)
	}

	fn advance(&mut self, text: &str) {
		for c in text.chars() {
			if c == '\n' {
				self.col = 0;
				continue;
			}
			let width = c.width().unwrap_or(0);
			if self.columns == 0 {
				self.col += width;
				continue;
			}
			// A character that does not fit moves whole to the next line.
			if self.col + width > self.columns {
				self.col = 0;
			}
			self.col += width;
			if self.col >= self.columns {
				self.col = 0;
			}
		}
	}
}

#[cfg(test)]
mod tests;
