//! Dictionary-style column layout for short labels.

use crate::display::display_width;

/// Lays `labels` out in column-major order for a screen `columns` wide.
///
/// Every column is as wide as the longest label plus one separator space.
/// The rightmost column does not need its separator, which sometimes buys
/// one extra column. When not even one padded column fits, each label gets
/// its own row. Rows carry no trailing whitespace.
pub fn format_columns<S: AsRef<str>>(columns: usize, labels: &[S]) -> Vec<String> {
	if labels.is_empty() {
		return Vec::new();
	}

	let width = column_width(labels);
	if columns < width {
		return labels.iter().map(|l| l.as_ref().to_string()).collect();
	}

	let ncol = (columns + 1) / width;
	let nrow = labels.len().div_ceil(ncol);

	(0..nrow)
		.map(|row| {
			let mut line = String::new();
			let mut used = 0;
			for (col, idx) in (row..labels.len()).step_by(nrow).take(ncol).enumerate() {
				let label = labels[idx].as_ref();
				let start = col * width;
				line.extend(std::iter::repeat_n(' ', start.saturating_sub(used)));
				line.push_str(label);
				used = start.max(used) + display_width(label);
			}
			line.truncate(line.trim_end().len());
			line
		})
		.collect()
}

/// Padded column width for `labels`: the widest label plus a separator.
pub fn column_width<S: AsRef<str>>(labels: &[S]) -> usize {
	labels.iter().map(|l| display_width(l.as_ref())).max().unwrap_or(0) + 1
}

#[cfg(test)]
mod tests;
