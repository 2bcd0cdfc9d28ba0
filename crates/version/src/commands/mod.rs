//! Command registry for `:version` and `:intro`.
//!
//! Commands register themselves through `inventory` with the [`command!`]
//! macro and are looked up by name or alias. Handlers run synchronously on
//! the display path and receive the frontend's [`DisplaySink`] through a
//! [`CommandContext`].
//!
//! [`command!`]: crate::command

mod error;
mod intro;
mod version;

use std::collections::HashMap;
use std::sync::LazyLock;

pub use error::CommandError;
use tracing::{debug, trace};

use crate::build_info::BuildInfo;
use crate::config::Config;
use crate::display::DisplaySink;
use crate::intro::Rotation;

/// Registry wrapper for command definitions.
pub struct CommandReg(pub &'static CommandDef);
inventory::collect!(CommandReg);

/// Context provided to command handlers.
pub struct CommandContext<'a> {
	/// Frontend display surface.
	pub sink: &'a mut dyn DisplaySink,
	pub config: &'a Config,
	pub info: &'a BuildInfo,
	/// Intro rotation chosen by the caller for this invocation.
	pub rotation: Rotation,
	/// Message column; handlers leave it where their output ended.
	pub msg_col: usize,
}

/// Result of a successful command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
	/// Command ran.
	Ok,
	/// Command accepted the call but had nothing to do.
	Ignored,
}

/// Function signature for command handlers. The second argument is the
/// trailing argument text, trimmed.
pub type CommandHandler = fn(&mut CommandContext<'_>, &str) -> Result<CommandOutcome, CommandError>;

/// A registered command definition.
pub struct CommandDef {
	/// Unique identifier for the command.
	pub id: &'static str,
	/// Primary command name.
	pub name: &'static str,
	/// Abbreviations accepted in place of the name.
	pub keys: &'static [&'static str],
	pub description: &'static str,
	pub handler: CommandHandler,
}

/// Lookup index by name and keys.
static COMMAND_INDEX: LazyLock<HashMap<&'static str, &'static CommandDef>> = LazyLock::new(|| {
	let mut map = HashMap::new();
	for reg in inventory::iter::<CommandReg> {
		map.insert(reg.0.name, reg.0);
		for &key in reg.0.keys {
			map.insert(key, reg.0);
		}
	}
	map
});

/// All commands sorted by name.
pub static COMMANDS: LazyLock<Vec<&'static CommandDef>> = LazyLock::new(|| {
	let mut commands: Vec<_> = inventory::iter::<CommandReg>().map(|r| r.0).collect();
	commands.sort_by_key(|c| c.name);
	commands
});

/// Finds a command by name or key.
pub fn find_command(name: &str) -> Option<&'static CommandDef> {
	COMMAND_INDEX.get(name).copied()
}

/// Returns all registered commands, sorted by name.
pub fn all_commands() -> impl Iterator<Item = &'static CommandDef> {
	COMMANDS.iter().copied()
}

/// Parses and runs a command line such as `:version` or `intro`.
pub fn execute(line: &str, ctx: &mut CommandContext<'_>) -> Result<CommandOutcome, CommandError> {
	let line = line.trim_start().trim_start_matches(':');
	let (name, arg) = match line.split_once(char::is_whitespace) {
		Some((name, arg)) => (name, arg.trim()),
		None => (line.trim_end(), ""),
	};
	if name.is_empty() {
		return Err(CommandError::MissingCommand);
	}

	let def = find_command(name).ok_or_else(|| CommandError::NotFound(name.to_string()))?;
	trace!(command = def.id, arg, "executing command");
	let outcome = (def.handler)(ctx, arg)?;
	debug!(command = def.name, ?outcome, msg_col = ctx.msg_col, "command finished");
	Ok(outcome)
}

/// Registers a command via `inventory`.
#[macro_export]
macro_rules! command {
	($name:ident, {
		$(keys: $keys:expr,)?
		description: $desc:expr
		$(,)?
	}, handler: $handler:expr) => {
		paste::paste! {
			#[allow(non_upper_case_globals)]
			pub static [<CMD_ $name>]: $crate::commands::CommandDef = $crate::commands::CommandDef {
				id: concat!(env!("CARGO_PKG_NAME"), "::", stringify!($name)),
				name: stringify!($name),
				keys: $crate::__cmd_opt_slice!($({$keys})?),
				description: $desc,
				handler: $handler,
			};

			inventory::submit! { $crate::commands::CommandReg(&[<CMD_ $name>]) }
		}
	};
}

#[macro_export]
#[doc(hidden)]
macro_rules! __cmd_opt_slice {
	() => {
		&[]
	};
	({$val:expr}) => {
		$val
	};
}

#[cfg(test)]
mod tests;
