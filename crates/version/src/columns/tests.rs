use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;

const LABELS: [&str; 5] = ["+acl", "-iconv", "+jemalloc", "+tui", "-xattr"];

#[test]
fn empty_list_has_no_rows() {
	let labels: [&str; 0] = [];
	assert!(format_columns(80, &labels).is_empty());
}

#[rstest]
#[case::just_too_narrow(9)]
#[case::tiny(1)]
#[case::zero(0)]
fn narrow_screen_gets_one_label_per_row(#[case] columns: usize) {
	let rows = format_columns(columns, &LABELS);
	assert_eq!(rows, LABELS.map(String::from).to_vec());
}

#[test]
fn wide_screen_fills_rows_column_major() {
	// width 10 per column, (35 + 1) / 10 = 3 columns, 2 rows.
	let rows = format_columns(35, &LABELS);
	assert_eq!(
		rows,
		vec![
			"+acl      +jemalloc -xattr".to_string(),
			"-iconv    +tui".to_string(),
		]
	);
}

#[test]
fn last_column_may_drop_its_separator() {
	// 29 columns only fit two padded columns, but the third needs no separator.
	let rows = format_columns(29, &LABELS);
	assert_eq!(rows.len(), 2);
	assert_eq!(rows[0], "+acl      +jemalloc -xattr");
}

#[test]
fn exactly_one_padded_column() {
	let rows = format_columns(10, &LABELS);
	assert_eq!(rows, LABELS.map(String::from).to_vec());
}

#[test]
fn everything_on_one_row_when_wide() {
	let rows = format_columns(200, &LABELS);
	assert_eq!(rows, vec!["+acl      -iconv    +jemalloc +tui      -xattr".to_string()]);
}

#[test]
fn cells_start_on_column_boundaries() {
	let rows = format_columns(35, &LABELS);
	for row in &rows {
		for (i, _) in row.match_indices(['+', '-']) {
			assert_eq!(i % 10, 0, "label misaligned in {row:?}");
		}
	}
}

#[rstest]
#[case::short(&["+a", "-b"], 3)]
#[case::mixed(&LABELS, 10)]
#[case::wide_chars(&["+日本"], 6)]
fn column_width_is_widest_label_plus_separator(#[case] labels: &[&str], #[case] expected: usize) {
	assert_eq!(column_width(labels), expected);
}

#[test]
fn owned_labels_are_accepted() {
	let labels = vec!["+a".to_string(), "+b".to_string()];
	assert_eq!(format_columns(80, &labels), vec!["+a +b".to_string()]);
}
