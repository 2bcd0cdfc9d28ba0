use rstest::rstest;

use super::*;
use crate::display::{ScreenGrid, ScreenSize};

struct Harness {
	grid: ScreenGrid,
	config: Config,
	info: BuildInfo,
}

impl Harness {
	fn new(rows: u16, cols: u16) -> Self {
		Self {
			grid: ScreenGrid::new(ScreenSize::new(rows, cols)),
			config: Config::default(),
			info: BuildInfo::current(),
		}
	}

	fn run(&mut self, line: &str, msg_col: usize) -> (Result<CommandOutcome, CommandError>, usize) {
		let mut ctx = CommandContext {
			sink: &mut self.grid,
			config: &self.config,
			info: &self.info,
			rotation: Rotation::Charity,
			msg_col,
		};
		let result = execute(line, &mut ctx);
		(result, ctx.msg_col)
	}
}

#[rstest]
#[case("version")]
#[case("ve")]
#[case("ver")]
#[case("vers")]
#[case("intro")]
#[case("int")]
fn names_and_keys_resolve(#[case] name: &str) {
	assert!(find_command(name).is_some());
}

#[test]
fn registry_lists_both_commands_sorted() {
	let names: Vec<_> = all_commands().map(|c| c.name).collect();
	assert_eq!(names, vec!["intro", "version"]);
	assert!(all_commands().all(|c| c.id.starts_with("quill-version::")));
}

#[test]
fn version_prints_report_below_command_line() {
	let mut h = Harness::new(30, 80);
	h.grid.put_str(":version").unwrap();
	let (result, col) = h.run(":version", 8);
	assert_eq!(result.unwrap(), CommandOutcome::Ok);
	assert_eq!(col, 0);
	assert_eq!(h.grid.row_text(0), ":version");
	assert_eq!(h.grid.row_text(1), h.info.version_long());
	assert_eq!(h.grid.row_text(2), h.info.build_type_line());
}

#[test]
fn version_with_argument_is_ignored() {
	let mut h = Harness::new(10, 80);
	let (result, col) = h.run("version 9.99", 3);
	assert_eq!(result.unwrap(), CommandOutcome::Ignored);
	assert_eq!(col, 3);
	assert!(h.grid.lines().iter().all(String::is_empty));
}

#[test]
fn intro_waits_for_acknowledgement() {
	let mut h = Harness::new(24, 80);
	let (result, col) = h.run("intro", 5);
	assert_eq!(result.unwrap(), CommandOutcome::Ok);
	assert_eq!(col, 0);
	assert_eq!(h.grid.clear_count(), 1);
	assert_eq!(h.grid.wait_count(), 1);
	assert_eq!(h.grid.row_text(2).trim_start(), h.info.version_long());
}

#[test]
fn intro_argument_does_not_matter() {
	let mut h = Harness::new(24, 80);
	let (result, _) = h.run("intro now", 0);
	assert_eq!(result.unwrap(), CommandOutcome::Ok);
	assert_eq!(h.grid.wait_count(), 1);
}

#[test]
fn unknown_and_empty_command_lines() {
	let mut h = Harness::new(5, 80);
	let (result, _) = h.run("frobnicate", 0);
	assert!(matches!(result, Err(CommandError::NotFound(name)) if name == "frobnicate"));
	let (result, _) = h.run(":  ", 0);
	assert!(matches!(result, Err(CommandError::MissingCommand)));
}
