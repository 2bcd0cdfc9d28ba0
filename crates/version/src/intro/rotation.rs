use std::time::{SystemTime, UNIX_EPOCH};

/// Which appeal the intro shows in its charity slot.
///
/// The charity text shows two times out of four, sponsoring and
/// registration one time each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
	Charity,
	Sponsor,
	Register,
}

impl Rotation {
	/// Selects a rotation from bits 1 and 2 of `seed`.
	pub fn from_seed(seed: u64) -> Self {
		let bit1_clear = i8::from(seed & 2 == 0);
		let bit2_clear = i8::from(seed & 4 == 0);
		match bit1_clear - bit2_clear {
			0 => Self::Charity,
			n if n < 0 => Self::Sponsor,
			_ => Self::Register,
		}
	}

	/// Seeds the rotation from wall-clock seconds.
	pub fn from_time(now: SystemTime) -> Self {
		let secs = now.duration_since(UNIX_EPOCH).map(|d| d.as_secs()).unwrap_or(0);
		Self::from_seed(secs)
	}

	/// Returns the text to show in place of `line`.
	///
	/// Only the charity appeal and its help line change; every other line
	/// is returned as is.
	pub fn substitute(self, line: &str) -> &str {
		match self {
			Self::Charity => line,
			Self::Sponsor if line.contains("children") => "Sponsor quill development!",
			Self::Sponsor if line.contains("iccf") => "type  :help sponsor<Enter>    for information ",
			Self::Register if line.contains("children") => "Become a registered quill user!",
			Self::Register if line.contains("iccf") => "type  :help register<Enter>   for information ",
			Self::Sponsor | Self::Register => line,
		}
	}
}
