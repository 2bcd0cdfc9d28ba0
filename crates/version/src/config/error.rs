//! Error types for configuration loading.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// The file exists but could not be read.
	#[error("I/O error reading {path}: {error}")]
	Io {
		path: PathBuf,
		error: std::io::Error,
	},

	/// TOML syntax or schema error.
	#[error("invalid config: {0}")]
	Toml(#[from] toml::de::Error),

	/// TOML error with the offending file attached.
	#[error("invalid config {path}: {error}")]
	Parse {
		path: PathBuf,
		error: toml::de::Error,
	},
}

impl ConfigError {
	/// Attaches `path` to a parse error.
	pub(super) fn at(self, path: &Path) -> Self {
		match self {
			Self::Toml(error) => Self::Parse {
				path: path.to_path_buf(),
				error,
			},
			other => other,
		}
	}
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
