//! The `:version` report.

use std::io;

use tracing::debug;

use crate::build_info::{BuildInfo, feature_labels};
use crate::columns::{column_width, format_columns};
use crate::display::{DisplaySink, MessageWriter};

/// Prints the full version report starting at message column `col`.
///
/// Returns the message column after the report. Stops quietly when the
/// sink reports an interrupt.
pub fn list_version<S: DisplaySink + ?Sized>(sink: &mut S, col: usize, info: &BuildInfo) -> io::Result<usize> {
	let mut writer = MessageWriter::new(sink, col);

	writer.msg(&info.version_long())?;
	writer.msg(&info.build_type_line())?;
	writer.msg(&info.compilation_line())?;

	if !info.extra_patches.is_empty() {
		writer.puts("\nExtra patches: ")?;
		writer.puts(&info.extra_patches.join(", "))?;
	}

	if !info.compiled_user.is_empty() || !info.compiled_sys.is_empty() {
		writer.puts("\nCompiled ")?;
		if !info.compiled_user.is_empty() {
			writer.puts("by ")?;
			writer.puts(info.compiled_user)?;
		}
		if !info.compiled_sys.is_empty() {
			writer.puts("@")?;
			writer.puts(info.compiled_sys)?;
		}
	}

	writer.version_msg("\n\nOptional features included (+) or not (-):\n")?;
	list_features(&mut writer, &feature_labels())?;

	path_line(&mut writer, "   system config file: \"", &info.sys_config_file)?;
	path_line(&mut writer, "  fall-back for $QUILL: \"", &info.default_dir)?;
	path_line(&mut writer, " f-b for $QUILLRUNTIME: \"", &info.default_runtime_dir)?;

	writer.finish()
}

/// Prints the feature table one row at a time, checking for an interrupt
/// before each row.
///
/// A screen narrower than one padded column gets one label per line and no
/// trailing help pointer.
pub fn list_features<S: DisplaySink + ?Sized>(writer: &mut MessageWriter<'_, S>, labels: &[String]) -> io::Result<()> {
	if writer.columns() < column_width(labels) {
		debug!(labels = labels.len(), columns = writer.columns(), "feature list, one per line");
		for label in labels {
			writer.version_msg(label)?;
			if writer.col() > 0 {
				writer.putchar('\n')?;
			}
		}
		return Ok(());
	}

	let rows = format_columns(writer.columns(), labels);
	debug!(labels = labels.len(), rows = rows.len(), columns = writer.columns(), "feature table");

	for row in &rows {
		if writer.is_interrupted() {
			return Ok(());
		}
		writer.start_line()?;
		writer.puts(row)?;
	}
	writer.start_line()?;
	writer.version_msg("For differences from Vim, see :help vim-differences\n\n")
}

fn path_line<S: DisplaySink + ?Sized>(writer: &mut MessageWriter<'_, S>, label: &str, value: &str) -> io::Result<()> {
	if value.is_empty() {
		return Ok(());
	}
	writer.version_msg(label)?;
	writer.version_msg(value)?;
	writer.version_msg("\"\n")
}

#[cfg(test)]
mod tests;
