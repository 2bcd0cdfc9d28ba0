//! Compile-time build metadata.
//!
//! Values come from `build.rs` through `cargo:rustc-env` and from cargo's own
//! package variables. Nothing here changes after the binary is linked.

/// Product name used in the long version string.
pub const PRODUCT: &str = "QUILL";

/// An optional capability compiled into this build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
	/// Short capability name (`iconv`, `jemalloc`, ...).
	pub name: &'static str,
	/// Whether the capability is compiled in.
	pub enabled: bool,
}

impl Feature {
	/// Returns the label shown in the feature table, `+name` or `-name`.
	pub fn label(&self) -> String {
		let sign = if self.enabled { '+' } else { '-' };
		format!("{sign}{}", self.name)
	}
}

/// Optional features in display order.
pub const FEATURES: &[Feature] = &[
	Feature {
		name: "acl",
		enabled: cfg!(feature = "acl"),
	},
	Feature {
		name: if cfg!(feature = "iconv-dyn") { "iconv/dyn" } else { "iconv" },
		enabled: cfg!(feature = "iconv"),
	},
	Feature {
		name: "jemalloc",
		enabled: cfg!(feature = "jemalloc"),
	},
];

/// Returns the labels of every entry in [`FEATURES`].
pub fn feature_labels() -> Vec<String> {
	FEATURES.iter().map(Feature::label).collect()
}

/// Descriptions of local patches applied on top of the release.
///
/// Keep entries short, e.g. "relative numbers".
pub const EXTRA_PATCHES: &[&str] = &[];

/// Build metadata printed by the version report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
	pub major: &'static str,
	pub minor: &'static str,
	pub patch: &'static str,
	/// Pre-release tag without the leading dash, empty for releases.
	pub prerelease: &'static str,
	/// Short commit hash of the source tree, empty when unknown.
	pub commit: &'static str,
	/// Cargo profile flavour: `Debug`, `Release` or `RelWithDebInfo`.
	pub build_type: &'static str,
	/// Compiler invocation summary.
	pub compilation: &'static str,
	pub compiled_user: &'static str,
	pub compiled_sys: &'static str,
	pub extra_patches: &'static [&'static str],
	/// System-wide configuration file, empty when the build has none.
	pub sys_config_file: String,
	/// Compiled-in fallback for `$QUILL`.
	pub default_dir: String,
	/// Compiled-in fallback for `$QUILLRUNTIME`.
	pub default_runtime_dir: String,
}

impl BuildInfo {
	/// Returns the metadata of the running binary.
	pub fn current() -> Self {
		let prefix = env!("QUILL_PREFIX");
		let default_dir = format!("{prefix}/share/quill");
		Self {
			major: env!("CARGO_PKG_VERSION_MAJOR"),
			minor: env!("CARGO_PKG_VERSION_MINOR"),
			patch: env!("CARGO_PKG_VERSION_PATCH"),
			prerelease: env!("CARGO_PKG_VERSION_PRE"),
			commit: env!("QUILL_GIT_HASH"),
			build_type: env!("QUILL_BUILD_TYPE"),
			compilation: env!("QUILL_COMPILATION"),
			compiled_user: env!("QUILL_COMPILED_USER"),
			compiled_sys: env!("QUILL_COMPILED_SYS"),
			extra_patches: EXTRA_PATCHES,
			sys_config_file: "$QUILL/sysinit.toml".to_string(),
			default_runtime_dir: format!("{default_dir}/runtime"),
			default_dir,
		}
	}

	/// Returns `major.minor.patch`, with `-pre` and the commit appended for
	/// pre-release builds.
	pub fn version_medium(&self) -> String {
		let mut version = format!("{}.{}.{}", self.major, self.minor, self.patch);
		if !self.prerelease.is_empty() {
			version.push('-');
			version.push_str(self.prerelease);
			if !self.commit.is_empty() {
				version.push_str("+g");
				version.push_str(self.commit);
			}
		}
		version
	}

	/// Returns the first line of the version report, e.g. `QUILL v0.10.0`.
	pub fn version_long(&self) -> String {
		format!("{PRODUCT} v{}", self.version_medium())
	}

	pub fn build_type_line(&self) -> String {
		format!("Build type: {}", self.build_type)
	}

	pub fn compilation_line(&self) -> String {
		format!("Compilation: {}", self.compilation)
	}
}
