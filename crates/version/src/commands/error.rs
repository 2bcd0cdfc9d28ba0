use thiserror::Error;

/// Errors that can occur during command execution.
#[derive(Debug, Error)]
pub enum CommandError {
	/// The command line held no command name.
	#[error("missing command name")]
	MissingCommand,
	/// Command name was not found in the registry.
	#[error("command not found: {0}")]
	NotFound(String),
	/// Writing to the display failed.
	#[error("display error: {0}")]
	Io(#[from] std::io::Error),
}
