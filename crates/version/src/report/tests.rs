use pretty_assertions::assert_eq;

use super::*;
use crate::display::{ScreenGrid, ScreenSize};

fn info() -> BuildInfo {
	BuildInfo {
		major: "0",
		minor: "4",
		patch: "2",
		prerelease: "",
		commit: "",
		build_type: "Release",
		compilation: "rustc -C opt-level=3",
		compiled_user: "",
		compiled_sys: "",
		extra_patches: &[],
		sys_config_file: "$QUILL/sysinit.toml".to_string(),
		default_dir: "/usr/share/quill".to_string(),
		default_runtime_dir: "/usr/share/quill/runtime".to_string(),
	}
}

fn render(info: &BuildInfo, rows: u16, cols: u16) -> ScreenGrid {
	let mut screen = ScreenGrid::new(ScreenSize::new(rows, cols));
	list_version(&mut screen, 0, info).unwrap();
	screen
}

#[test]
fn full_report_layout() {
	let screen = render(&info(), 20, 80);
	let features = format_columns(80, &feature_labels());
	assert_eq!(features.len(), 1);

	let expected = vec![
		"QUILL v0.4.2".to_string(),
		"Build type: Release".to_string(),
		"Compilation: rustc -C opt-level=3".to_string(),
		String::new(),
		"Optional features included (+) or not (-):".to_string(),
		features[0].clone(),
		"For differences from Vim, see :help vim-differences".to_string(),
		String::new(),
		"   system config file: \"$QUILL/sysinit.toml\"".to_string(),
		"  fall-back for $QUILL: \"/usr/share/quill\"".to_string(),
		" f-b for $QUILLRUNTIME: \"/usr/share/quill/runtime\"".to_string(),
	];
	assert_eq!(screen.lines()[..expected.len()], expected[..]);
	assert_eq!(screen.message_cursor(), (11, 0));
}

#[test]
fn compiled_by_and_extra_patches() {
	let info = BuildInfo {
		compiled_user: "builder",
		compiled_sys: "ci-host",
		extra_patches: &["relative numbers", "persistent undo"],
		..info()
	};
	let screen = render(&info, 20, 80);
	assert_eq!(screen.row_text(3), "Extra patches: relative numbers, persistent undo");
	assert_eq!(screen.row_text(4), "Compiled by builder@ci-host");
	assert_eq!(screen.row_text(6), "Optional features included (+) or not (-):");
}

#[test]
fn host_only_omits_by() {
	let info = BuildInfo {
		compiled_sys: "ci-host",
		..info()
	};
	let screen = render(&info, 20, 80);
	assert_eq!(screen.row_text(3), "Compiled @ci-host");
}

#[test]
fn empty_paths_are_skipped() {
	let info = BuildInfo {
		sys_config_file: String::new(),
		default_dir: String::new(),
		default_runtime_dir: String::new(),
		..info()
	};
	let screen = render(&info, 20, 80);
	assert_eq!(screen.row_text(6), "For differences from Vim, see :help vim-differences");
	assert!(screen.lines()[7..].iter().all(String::is_empty));
}

#[test]
fn narrow_screen_lists_one_feature_per_line() {
	let labels = feature_labels();
	let widest = labels.iter().map(String::len).max().unwrap();
	let screen = render(&info(), 80, u16::try_from(widest).unwrap());
	let lines = screen.lines();
	let first = lines.iter().position(|l| l == &labels[0]).expect("first feature shown");
	assert_eq!(lines[first..first + labels.len()], labels[..]);
	assert!(!lines.iter().any(|l| l.contains("differences")));
}

#[test]
fn interrupt_stops_the_report() {
	let mut screen = ScreenGrid::new(ScreenSize::new(20, 80)).interrupt_after(0);
	let col = list_version(&mut screen, 0, &info()).unwrap();
	assert_eq!(col, 33);
	assert_eq!(screen.row_text(2), "Compilation: rustc -C opt-level=3");
	assert!(screen.lines()[3..].iter().all(String::is_empty));
}

#[test]
fn report_on_a_continued_line_starts_fresh() {
	let mut screen = ScreenGrid::new(ScreenSize::new(20, 80));
	screen.put_str(":version").unwrap();
	list_version(&mut screen, 8, &info()).unwrap();
	assert_eq!(screen.row_text(0), ":version");
	assert_eq!(screen.row_text(1), "QUILL v0.4.2");
}
