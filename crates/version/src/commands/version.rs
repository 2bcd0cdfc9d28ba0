//! `:version`

use tracing::debug;

use super::{CommandContext, CommandError, CommandOutcome};
use crate::command;
use crate::report::list_version;

command!(
	version,
	{
		keys: &["ve", "ver", "vers"],
		description: "Show version, build and feature information"
	},
	handler: cmd_version
);

fn cmd_version(ctx: &mut CommandContext<'_>, arg: &str) -> Result<CommandOutcome, CommandError> {
	// `:version 9.99` is a version check, not a request for the report.
	if !arg.is_empty() {
		debug!(arg, "ignoring version argument");
		return Ok(CommandOutcome::Ignored);
	}

	ctx.sink.put_str("\n")?;
	ctx.msg_col = list_version(&mut *ctx.sink, 0, ctx.info)?;
	Ok(CommandOutcome::Ok)
}
