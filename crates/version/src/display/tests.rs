use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;

fn grid(rows: u16, cols: u16) -> ScreenGrid {
	ScreenGrid::new(ScreenSize::new(rows, cols))
}

#[test]
fn puts_tracks_column_across_newlines() {
	let mut screen = grid(5, 40);
	let mut writer = MessageWriter::new(&mut screen, 0);
	writer.puts("abc").unwrap();
	assert_eq!(writer.col(), 3);
	writer.puts("de\nfg").unwrap();
	assert_eq!(writer.col(), 2);
	assert_eq!(writer.finish().unwrap(), 2);
	assert_eq!(screen.row_text(0), "abcde");
	assert_eq!(screen.row_text(1), "fg");
}

#[test]
fn column_counts_display_cells() {
	let mut screen = grid(2, 40);
	let mut writer = MessageWriter::new(&mut screen, 0);
	writer.puts("日本").unwrap();
	assert_eq!(writer.col(), 4);
}

#[rstest]
#[case::wide_crosses_edge("abcd日", 2)]
#[case::wide_fills_line("abc日", 0)]
#[case::narrow_fills_line("abcde", 0)]
#[case::wide_after_wrap("abcd日本", 4)]
fn column_follows_the_sink_at_the_right_edge(#[case] text: &str, #[case] col: usize) {
	let mut screen = grid(4, 5);
	let mut writer = MessageWriter::new(&mut screen, 0);
	writer.puts(text).unwrap();
	let tracked = writer.finish().unwrap();
	assert_eq!(tracked, col);
	assert_eq!(usize::from(screen.message_cursor().1), tracked);
}

#[test]
fn msg_starts_a_fresh_line_only_when_needed() {
	let mut screen = grid(5, 40);
	let mut writer = MessageWriter::new(&mut screen, 0);
	writer.msg("first").unwrap();
	writer.msg("second").unwrap();
	writer.finish().unwrap();
	assert_eq!(screen.row_text(0), "first");
	assert_eq!(screen.row_text(1), "second");
}

#[test]
fn version_msg_wraps_before_overflowing_chunk() {
	let mut screen = grid(5, 10);
	let mut writer = MessageWriter::new(&mut screen, 0);
	writer.version_msg("abcdef").unwrap();
	writer.version_msg("ghij").unwrap();
	writer.finish().unwrap();
	assert_eq!(screen.row_text(0), "abcdef");
	assert_eq!(screen.row_text(1), "ghij");
}

#[test]
fn version_msg_keeps_leading_newline_chunks_in_place() {
	let mut screen = grid(5, 10);
	let mut writer = MessageWriter::new(&mut screen, 0);
	writer.version_msg("abcdefgh").unwrap();
	writer.version_msg("\nxy").unwrap();
	writer.finish().unwrap();
	assert_eq!(screen.lines()[..2], ["abcdefgh".to_string(), "xy".to_string()]);
}

#[test]
fn version_msg_stops_after_interrupt() {
	let mut screen = grid(5, 40).interrupt_after(1);
	let mut writer = MessageWriter::new(&mut screen, 0);
	writer.version_msg("one").unwrap();
	writer.version_msg(" two").unwrap();
	assert!(writer.is_interrupted());
	writer.finish().unwrap();
	assert_eq!(screen.row_text(0), "one");
}

#[test]
fn grid_scrolls_message_output() {
	let mut screen = grid(2, 10);
	screen.put_str("a\nb\nc").unwrap();
	assert_eq!(screen.lines(), vec!["b".to_string(), "c".to_string()]);
}

#[test]
fn grid_put_at_marks_style_and_wide_cells() {
	let mut screen = grid(1, 10);
	screen.put_at(0, 2, "日x", TextStyle::Special).unwrap();
	assert_eq!(screen.row_text(0), "  日x");
	assert_eq!(screen.first_col(0), Some(2));
	assert_eq!(screen.cell(0, 3).map(|c| c.symbol.as_str()), Some(""));
	assert_eq!(screen.cell(0, 4).map(|c| c.style), Some(TextStyle::Special));
}

#[test]
fn writer_sink_positions_forward() {
	let mut sink = WriterSink::new(Vec::new(), ScreenSize::new(24, 80));
	sink.put_at(1, 3, "hi", TextStyle::Normal).unwrap();
	sink.put_at(1, 7, "<x>", TextStyle::Special).unwrap();
	sink.set_message_row(3).unwrap();
	sink.put_str("end").unwrap();
	let out = String::from_utf8(sink.into_inner()).unwrap();
	assert_eq!(out, "\n   hi  <x>\n\nend");
}
