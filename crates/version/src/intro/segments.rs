use crate::display::{TextStyle, display_width};

/// A run of banner text drawn with one highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
	pub text: &'a str,
	/// Display cells occupied by `text`.
	pub width: usize,
	pub style: TextStyle,
}

/// Splits `line` so each `<...>` item is its own [`TextStyle::Special`]
/// segment.
///
/// A segment ends before a `<` or right after a `>`.
pub fn segments(line: &str) -> Vec<Segment<'_>> {
	let mut out = Vec::new();
	let mut start = 0;
	let mut prev = None;

	for (idx, c) in line.char_indices() {
		if idx > start && (c == '<' || prev == Some('>')) {
			out.push(segment(&line[start..idx]));
			start = idx;
		}
		prev = Some(c);
	}
	if start < line.len() {
		out.push(segment(&line[start..]));
	}
	out
}

fn segment(text: &str) -> Segment<'_> {
	let style = if text.starts_with('<') {
		TextStyle::Special
	} else {
		TextStyle::Normal
	};
	Segment {
		text,
		width: display_width(text),
		style,
	}
}
