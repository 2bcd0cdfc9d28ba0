use clap::Parser;

use super::*;

fn parse(args: &[&str]) -> Cli {
	Cli::try_parse_from(std::iter::once("quill").chain(args.iter().copied())).unwrap()
}

#[test]
fn bare_invocation_starts_empty() {
	let cli = parse(&[]);
	assert!(!cli.version);
	assert!(cli.file.is_none());
	assert!(cli.command.is_none());
}

#[test]
fn version_flags() {
	assert!(parse(&["--version"]).version);
	assert!(parse(&["-v"]).version);
}

#[test]
fn file_argument() {
	let cli = parse(&["notes.txt"]);
	assert_eq!(cli.file, Some(PathBuf::from("notes.txt")));
	assert!(cli.command.is_none());
}

#[test]
fn version_subcommand_with_and_without_argument() {
	let cli = parse(&["version"]);
	assert_eq!(cli.command, Some(Command::Version { arg: None }));
	assert_eq!(cli.command.unwrap().command_line(), "version");

	let cli = parse(&["version", "9.99"]);
	assert_eq!(cli.command.unwrap().command_line(), "version 9.99");
}

#[test]
fn intro_subcommand() {
	let cli = parse(&["intro"]);
	assert_eq!(cli.command, Some(Command::Intro));
	assert_eq!(Command::Intro.command_line(), "intro");
}

#[test]
fn config_and_verbose() {
	let cli = parse(&["--config", "/tmp/quill.toml", "--verbose", "intro"]);
	assert_eq!(cli.config, Some(PathBuf::from("/tmp/quill.toml")));
	assert!(cli.verbose);
}

#[test]
fn clap_schema_is_consistent() {
	use clap::CommandFactory;
	Cli::command().debug_assert();
}
