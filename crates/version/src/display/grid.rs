use std::io;

use unicode_width::UnicodeWidthChar;

use super::{DisplaySink, ScreenSize, TextStyle};

/// One screen cell. The trailing half of a double-width character holds an
/// empty symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
	pub symbol: String,
	pub style: TextStyle,
}

impl Default for Cell {
	fn default() -> Self {
		Self {
			symbol: " ".to_string(),
			style: TextStyle::Normal,
		}
	}
}

/// In-memory screen for headless rendering.
///
/// Message output scrolls the grid when it runs past the last row. Interrupts
/// can be scripted with [`ScreenGrid::interrupt_after`].
#[derive(Debug, Clone)]
pub struct ScreenGrid {
	size: ScreenSize,
	cells: Vec<Vec<Cell>>,
	msg_row: u16,
	msg_col: u16,
	polls_left: Option<usize>,
	clears: usize,
	waits: usize,
}

impl ScreenGrid {
	pub fn new(size: ScreenSize) -> Self {
		Self {
			size,
			cells: blank_rows(size),
			msg_row: 0,
			msg_col: 0,
			polls_left: None,
			clears: 0,
			waits: 0,
		}
	}

	/// Reports an interrupt once `polls` interrupt checks have passed.
	pub fn interrupt_after(mut self, polls: usize) -> Self {
		self.polls_left = Some(polls);
		self
	}

	/// Text of `row` with trailing blanks removed.
	pub fn row_text(&self, row: u16) -> String {
		let Some(cells) = self.cells.get(usize::from(row)) else {
			return String::new();
		};
		let text: String = cells.iter().map(|c| c.symbol.as_str()).collect();
		text.trim_end().to_string()
	}

	/// Text of every row, trailing blank rows included.
	pub fn lines(&self) -> Vec<String> {
		(0..self.size.rows).map(|row| self.row_text(row)).collect()
	}

	pub fn cell(&self, row: u16, col: u16) -> Option<&Cell> {
		self.cells.get(usize::from(row))?.get(usize::from(col))
	}

	/// Column of the first non-blank cell on `row`.
	pub fn first_col(&self, row: u16) -> Option<u16> {
		let cells = self.cells.get(usize::from(row))?;
		let idx = cells.iter().position(|c| c.symbol != " ")?;
		u16::try_from(idx).ok()
	}

	/// Message cursor as `(row, col)`.
	pub fn message_cursor(&self) -> (u16, u16) {
		(self.msg_row, self.msg_col)
	}

	pub fn clear_count(&self) -> usize {
		self.clears
	}

	pub fn wait_count(&self) -> usize {
		self.waits
	}

	fn scroll(&mut self) {
		self.cells.remove(0);
		self.cells.push(vec![Cell::default(); usize::from(self.size.cols)]);
		self.msg_row = self.size.rows.saturating_sub(1);
	}

	fn message_newline(&mut self) {
		self.msg_col = 0;
		if self.msg_row + 1 >= self.size.rows {
			self.scroll();
		} else {
			self.msg_row += 1;
		}
	}

	/// Writes one character at `(row, col)` and returns its width.
	fn write_char(&mut self, row: u16, col: u16, c: char, style: TextStyle) -> u16 {
		let width = c.width().unwrap_or(0) as u16;
		if width == 0 {
			return 0;
		}
		let Some(cells) = self.cells.get_mut(usize::from(row)) else {
			return width;
		};
		let col = usize::from(col);
		if col + usize::from(width) > cells.len() {
			return width;
		}
		cells[col] = Cell {
			symbol: c.to_string(),
			style,
		};
		for cell in cells.iter_mut().skip(col + 1).take(usize::from(width) - 1) {
			*cell = Cell {
				symbol: String::new(),
				style,
			};
		}
		width
	}
}

fn blank_rows(size: ScreenSize) -> Vec<Vec<Cell>> {
	vec![vec![Cell::default(); usize::from(size.cols)]; usize::from(size.rows)]
}

impl DisplaySink for ScreenGrid {
	fn size(&self) -> ScreenSize {
		self.size
	}

	fn put_str(&mut self, text: &str) -> io::Result<()> {
		if self.size.rows == 0 || self.size.cols == 0 {
			return Ok(());
		}
		for c in text.chars() {
			if c == '\n' {
				self.message_newline();
				continue;
			}
			let width = c.width().unwrap_or(0) as u16;
			if self.msg_col + width > self.size.cols {
				self.message_newline();
			}
			let (row, col) = (self.msg_row, self.msg_col);
			let written = self.write_char(row, col, c, TextStyle::Normal);
			self.msg_col += written;
			if self.msg_col >= self.size.cols {
				self.message_newline();
			}
		}
		Ok(())
	}

	fn put_at(&mut self, row: u16, col: u16, text: &str, style: TextStyle) -> io::Result<()> {
		let mut col = col;
		for c in text.chars() {
			if col >= self.size.cols {
				break;
			}
			col += self.write_char(row, col, c, style);
		}
		Ok(())
	}

	fn clear(&mut self) -> io::Result<()> {
		self.cells = blank_rows(self.size);
		self.msg_row = 0;
		self.msg_col = 0;
		self.clears += 1;
		Ok(())
	}

	fn set_message_row(&mut self, row: u16) -> io::Result<()> {
		self.msg_row = row.min(self.size.rows.saturating_sub(1));
		self.msg_col = 0;
		Ok(())
	}

	fn wait_return(&mut self) -> io::Result<()> {
		self.waits += 1;
		Ok(())
	}

	fn interrupted(&mut self) -> bool {
		match self.polls_left.as_mut() {
			Some(0) => true,
			Some(left) => {
				*left -= 1;
				false
			}
			None => false,
		}
	}
}
