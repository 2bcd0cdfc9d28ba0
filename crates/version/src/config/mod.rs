//! User configuration for the intro screen.
//!
//! Quill reads `$XDG_CONFIG_HOME/quill/config.toml` (or the path given with
//! `--config`). A missing file yields the defaults:
//!
//! ```toml
//! [intro]
//! show_on_startup = true
//!
//! [screen]
//! laststatus = "multiwindow"
//! cmdheight = 1
//! ```

mod error;

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

pub use error::{ConfigError, Result};

/// Parsed configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	pub intro: IntroConfig,
	pub screen: ScreenConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IntroConfig {
	/// Show the intro automatically on an empty startup.
	pub show_on_startup: bool,
}

impl Default for IntroConfig {
	fn default() -> Self {
		Self { show_on_startup: true }
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScreenConfig {
	pub laststatus: StatuslineMode,
	/// Rows used by the command line.
	pub cmdheight: u16,
}

impl Default for ScreenConfig {
	fn default() -> Self {
		Self {
			laststatus: StatuslineMode::default(),
			cmdheight: 1,
		}
	}
}

/// When the last window shows a status line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatuslineMode {
	Never,
	#[default]
	Multiwindow,
	Always,
}

impl Config {
	/// Parses configuration from TOML text.
	pub fn parse(text: &str) -> Result<Self> {
		Ok(toml::from_str(text)?)
	}

	/// Loads configuration from `path`. A missing file yields the defaults.
	pub fn load(path: &Path) -> Result<Self> {
		let text = match std::fs::read_to_string(path) {
			Ok(text) => text,
			Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
				debug!(path = %path.display(), "no config file, using defaults");
				return Ok(Self::default());
			}
			Err(error) => {
				return Err(ConfigError::Io {
					path: path.to_path_buf(),
					error,
				});
			}
		};
		let config = Self::parse(&text).map_err(|e| e.at(path))?;
		debug!(path = %path.display(), ?config, "loaded config");
		Ok(config)
	}

	/// Default location of the user config file.
	pub fn default_path() -> Option<PathBuf> {
		dirs::config_dir().map(|dir| dir.join("quill").join("config.toml"))
	}

	/// Loads the user config from its default location.
	pub fn load_default() -> Result<Self> {
		match Self::default_path() {
			Some(path) => Self::load(&path),
			None => Ok(Self::default()),
		}
	}

	/// Rows below the window area that the intro must leave alone.
	///
	/// Only counted when the status line is always shown.
	pub fn reserved_rows(&self) -> u16 {
		match self.screen.laststatus {
			StatuslineMode::Always => self.screen.cmdheight,
			StatuslineMode::Never | StatuslineMode::Multiwindow => 0,
		}
	}
}
