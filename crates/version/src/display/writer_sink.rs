use std::io::{self, Write};

use super::{DisplaySink, ScreenSize, TextStyle, display_width};

/// Line-oriented sink over any [`Write`], used for `--version` on stdout.
///
/// Absolute positioning only moves forward: rows and columns that were
/// already passed are drawn at the current position instead.
pub struct WriterSink<W: Write> {
	out: W,
	size: ScreenSize,
	row: u16,
	col: usize,
}

impl<W: Write> WriterSink<W> {
	pub fn new(out: W, size: ScreenSize) -> Self {
		Self { out, size, row: 0, col: 0 }
	}

	pub fn into_inner(self) -> W {
		self.out
	}

	fn track(&mut self, text: &str) {
		match text.rsplit_once('\n') {
			Some((head, tail)) => {
				let newlines = head.matches('\n').count() + 1;
				self.row = self.row.saturating_add(u16::try_from(newlines).unwrap_or(u16::MAX));
				self.col = display_width(tail);
			}
			None => self.col += display_width(text),
		}
	}

	fn move_to(&mut self, row: u16, col: u16) -> io::Result<()> {
		while self.row < row {
			self.out.write_all(b"\n")?;
			self.row += 1;
			self.col = 0;
		}
		let col = usize::from(col);
		if self.col < col {
			write!(self.out, "{:width$}", "", width = col - self.col)?;
			self.col = col;
		}
		Ok(())
	}
}

impl<W: Write> DisplaySink for WriterSink<W> {
	fn size(&self) -> ScreenSize {
		self.size
	}

	fn put_str(&mut self, text: &str) -> io::Result<()> {
		self.out.write_all(text.as_bytes())?;
		self.track(text);
		Ok(())
	}

	fn put_at(&mut self, row: u16, col: u16, text: &str, _style: TextStyle) -> io::Result<()> {
		self.move_to(row, col)?;
		self.put_str(text)
	}

	fn clear(&mut self) -> io::Result<()> {
		Ok(())
	}

	fn set_message_row(&mut self, row: u16) -> io::Result<()> {
		self.move_to(row, 0)
	}

	fn wait_return(&mut self) -> io::Result<()> {
		Ok(())
	}

	fn flush(&mut self) -> io::Result<()> {
		self.out.flush()
	}
}
