//! `:intro`

use super::{CommandContext, CommandError, CommandOutcome};
use crate::command;
use crate::intro::intro_command;

command!(
	intro,
	{
		keys: &["int"],
		description: "Show the intro screen"
	},
	handler: cmd_intro
);

fn cmd_intro(ctx: &mut CommandContext<'_>, _arg: &str) -> Result<CommandOutcome, CommandError> {
	intro_command(&mut *ctx.sink, ctx.config, ctx.info, ctx.rotation)?;
	ctx.msg_col = 0;
	Ok(CommandOutcome::Ok)
}
