//! Quill terminal frontend.
//!
//! Hosts the version report and intro screen: `quill --version` prints the
//! report to stdout, `quill version` and `quill intro` run the matching
//! commands full screen, and a bare `quill` performs the startup greeting.

mod cli;
mod logging;
mod terminal;

use std::io;
use std::time::SystemTime;

use anyhow::Context as _;
use clap::Parser;
use cli::Cli;
use logging::HeldStderr;
use quill_version::commands::execute;
use quill_version::intro::maybe_intro;
use quill_version::{
	BuildInfo, CommandContext, Config, DisplaySink, Rotation, ScreenSize, StartupState, WriterSink, list_version,
};
use terminal::TerminalScreen;
use tracing::{debug, info};

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	let logs = logging::init(cli.verbose);

	let info = BuildInfo::current();
	if cli.version {
		return print_version(&info);
	}

	let config = match &cli.config {
		Some(path) => Config::load(path),
		None => Config::load_default(),
	}
	.context("failed to load config")?;

	let rotation = Rotation::from_time(SystemTime::now());
	debug!(?rotation, "intro rotation");

	match &cli.command {
		Some(command) => run_command(&command.command_line(), &config, &info, rotation, logs),
		None => startup(&cli, &config, &info, rotation, logs),
	}
}

/// Prints the version report to stdout, as `quill --version` does.
fn print_version(info: &BuildInfo) -> anyhow::Result<()> {
	let (cols, rows) = crossterm::terminal::size().unwrap_or((80, 24));
	let mut sink = WriterSink::new(io::stdout().lock(), ScreenSize::new(rows, cols));
	list_version(&mut sink, 0, info)?;
	Ok(())
}

/// Runs a command full screen, echoing it on the command line first.
fn run_command(
	line: &str,
	config: &Config,
	info: &BuildInfo,
	rotation: Rotation,
	logs: HeldStderr,
) -> anyhow::Result<()> {
	let mut screen = TerminalScreen::enter(logs)?;
	let echo = format!(":{line}");
	screen.put_str(&echo)?;

	let mut ctx = CommandContext {
		sink: &mut screen,
		config,
		info,
		rotation,
		msg_col: echo.len(),
	};
	let outcome = execute(line, &mut ctx)?;
	info!(command = line, ?outcome, "command done");

	// `:intro` already waited for the user.
	if !line.starts_with("intro") {
		screen.wait_return()?;
	}
	Ok(())
}

/// Greets the user the way an editor session would on startup.
fn startup(cli: &Cli, config: &Config, info: &BuildInfo, rotation: Rotation, logs: HeldStderr) -> anyhow::Result<()> {
	let state = match &cli.file {
		Some(path) => StartupState {
			buffer_empty: std::fs::metadata(path).map(|m| m.len() == 0).unwrap_or(true),
			buffer_named: true,
			window_count: 1,
		},
		None => StartupState::scratch(),
	};

	let mut screen = TerminalScreen::enter(logs)?;
	let shown = maybe_intro(&mut screen, &state, config, info, rotation)?;
	info!(shown, file = ?cli.file, "startup");

	screen.message_on_last_row()?;
	if let Some(path) = &cli.file {
		screen.put_str(&format!("\"{}\"", path.display()))?;
	}
	screen.wait_return()?;
	Ok(())
}
