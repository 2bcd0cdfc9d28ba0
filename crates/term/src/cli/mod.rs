//! CLI schema for the quill binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "quill")]
#[command(about = "A modal text editor")]
#[command(disable_version_flag = true)]
/// Command-line arguments.
pub struct Cli {
	/// Print version information and exit
	#[arg(short = 'v', long = "version")]
	pub version: bool,

	/// File to edit (greets with the intro screen if omitted)
	pub file: Option<PathBuf>,

	/// Configuration file (defaults to $XDG_CONFIG_HOME/quill/config.toml)
	#[arg(long, value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Verbose logging
	#[arg(long)]
	pub verbose: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
	/// Show the version report full screen, as `:version` does
	Version {
		/// Version number to check; the report is skipped when given
		arg: Option<String>,
	},
	/// Show the intro screen, as `:intro` does
	Intro,
}

impl Command {
	/// Command line handed to the command registry.
	pub fn command_line(&self) -> String {
		match self {
			Self::Version { arg: Some(arg) } => format!("version {arg}"),
			Self::Version { arg: None } => "version".to_string(),
			Self::Intro => "intro".to_string(),
		}
	}
}

#[cfg(test)]
mod tests;
