//! Intro banner shown when quill starts without a file.
//!
//! Layout and text selection are pure functions of the screen size and a
//! [`Rotation`]; only [`Rotation::from_time`] looks at the clock.

mod rotation;
mod segments;

use std::io;

use tracing::debug;

pub use rotation::Rotation;
pub use segments::{Segment, segments};

use crate::build_info::BuildInfo;
use crate::config::Config;
use crate::display::{DisplaySink, ScreenSize, display_width};

/// Banner text below the version line. Empty strings are spacer rows.
pub const INTRO_BODY: &[&str] = &[
	"",
	"by the quill contributors",
	"Quill is open source and freely distributable",
	"",
	"First time using a vi-like editor?",
	"Type :Tutor<Enter> to get started!",
	"",
	"Already know your way around Vim?",
	"See :help quill-intro for an introduction to Quill.",
	"",
	"Still have questions?",
	"Reach out to the quill community at quill-editor.org/community.",
	"",
	"Help poor children in Uganda!",
	"type  :help iccf<Enter>       for information ",
	"",
	"type  :q<Enter>               to exit         ",
	"type  :help<Enter>  or  <F1>  for on-line help",
	"type  :help quill<Enter>      for Quill help  ",
];

/// Total banner height, version line included.
pub const INTRO_LINE_COUNT: usize = INTRO_BODY.len() + 1;

/// Screens narrower than this only show the intro on request.
const MIN_AUTO_COLUMNS: u16 = 50;

/// Editor state consulted before showing the intro automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartupState {
	pub buffer_empty: bool,
	pub buffer_named: bool,
	pub window_count: usize,
}

impl StartupState {
	/// A single empty, unnamed scratch buffer.
	pub const fn scratch() -> Self {
		Self {
			buffer_empty: true,
			buffer_named: false,
			window_count: 1,
		}
	}

	/// Returns whether startup should greet the user with the intro.
	pub fn wants_intro(&self, config: &Config) -> bool {
		self.buffer_empty && !self.buffer_named && self.window_count == 1 && config.intro.show_on_startup
	}
}

/// Vertical placement of the banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntroLayout {
	/// Screen row of the first banner line.
	pub first_row: u16,
	/// Whether the banner is drawn at all.
	pub visible: bool,
}

impl IntroLayout {
	/// Places `line_count` lines on `screen`, keeping clear of
	/// `reserved_rows` at the bottom.
	///
	/// Automatic display needs at least two blank rows above the banner and
	/// a screen at least 50 columns wide; `explicit` skips both checks.
	pub fn compute(screen: ScreenSize, line_count: usize, reserved_rows: u16, explicit: bool) -> Self {
		let first_row = blank_lines(screen.rows, line_count, reserved_rows) / 2;
		let visible = explicit || (first_row >= 2 && screen.cols >= MIN_AUTO_COLUMNS);
		Self { first_row, visible }
	}
}

/// Blank rows available around a banner of `line_count` lines.
pub fn blank_lines(rows: u16, line_count: usize, reserved_rows: u16) -> u16 {
	let lines = i64::try_from(line_count).unwrap_or(i64::MAX);
	let blank = i64::from(rows) - (lines - 1) - i64::from(reserved_rows);
	u16::try_from(blank.max(0)).unwrap_or(u16::MAX)
}

/// Column that centers text `width` cells wide on a `cols` wide screen.
pub fn center_col(cols: u16, width: usize) -> u16 {
	let width = u16::try_from(width).unwrap_or(u16::MAX);
	cols.saturating_sub(width) / 2
}

/// Returns the banner lines with the rotation applied.
pub fn intro_lines(info: &BuildInfo, rotation: Rotation) -> Vec<String> {
	std::iter::once(info.version_long())
		.chain(INTRO_BODY.iter().map(|line| rotation.substitute(line).to_string()))
		.collect()
}

/// Draws the banner. Returns the row just below it, or `None` when the
/// screen is too small for an automatic intro.
pub fn render_intro<S: DisplaySink + ?Sized>(
	sink: &mut S,
	info: &BuildInfo,
	rotation: Rotation,
	reserved_rows: u16,
	explicit: bool,
) -> io::Result<Option<u16>> {
	let screen = sink.size();
	let lines = intro_lines(info, rotation);
	let layout = IntroLayout::compute(screen, lines.len(), reserved_rows, explicit);
	debug!(?screen, ?layout, ?rotation, explicit, "intro layout");
	if !layout.visible {
		return Ok(None);
	}

	let mut row = layout.first_row;
	for line in &lines {
		if !line.is_empty() {
			draw_line(sink, row, screen.cols, line)?;
		}
		row = row.saturating_add(1);
	}
	sink.flush()?;
	Ok(Some(row))
}

/// Draws one centered line, highlighting `<...>` items.
fn draw_line<S: DisplaySink + ?Sized>(sink: &mut S, row: u16, cols: u16, line: &str) -> io::Result<()> {
	let mut col = center_col(cols, display_width(line));
	for segment in segments(line) {
		sink.put_at(row, col, segment.text, segment.style)?;
		col = col.saturating_add(u16::try_from(segment.width).unwrap_or(u16::MAX));
	}
	Ok(())
}

/// Shows the intro on startup when the editor holds nothing worth showing.
///
/// Returns whether the banner was drawn.
pub fn maybe_intro<S: DisplaySink + ?Sized>(
	sink: &mut S,
	state: &StartupState,
	config: &Config,
	info: &BuildInfo,
	rotation: Rotation,
) -> io::Result<bool> {
	if !state.wants_intro(config) {
		debug!(?state, "skipping intro");
		return Ok(false);
	}
	Ok(render_intro(sink, info, rotation, config.reserved_rows(), false)?.is_some())
}

/// `:intro`: clear the screen, draw the banner and wait for the user.
///
/// The message cursor ends up just below the banner so the prompt appears
/// under the text.
pub fn intro_command<S: DisplaySink + ?Sized>(
	sink: &mut S,
	config: &Config,
	info: &BuildInfo,
	rotation: Rotation,
) -> io::Result<()> {
	sink.clear()?;
	if let Some(row) = render_intro(sink, info, rotation, config.reserved_rows(), true)? {
		sink.set_message_row(row)?;
	}
	sink.wait_return()
}
