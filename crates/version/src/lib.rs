//! Version reporting and the welcome screen for quill.
//!
//! Everything here renders build-time constants: the long version string,
//! the optional feature table, the applied patch list and the intro banner
//! shown on an empty startup. Output goes through a [`DisplaySink`] supplied
//! by the frontend, so the same routines drive the terminal, plain stdout and
//! the in-memory [`ScreenGrid`] used by tests (behind the `testing`
//! feature outside this crate).

/// Build metadata and optional feature flags.
pub mod build_info;
/// Column-major layout of short labels.
pub mod columns;
/// `:version` and `:intro` command definitions.
pub mod commands;
/// User configuration loaded from TOML.
pub mod config;
/// Display surface abstraction and message cursor tracking.
pub mod display;
/// Intro banner layout, rotation and rendering.
pub mod intro;
/// Applied upstream patch identifiers.
pub mod patches;
/// Full version report.
pub mod report;

pub use build_info::{BuildInfo, FEATURES, Feature};
pub use columns::format_columns;
pub use commands::{CommandContext, CommandError, CommandOutcome, find_command};
pub use config::{Config, ConfigError, StatuslineMode};
#[cfg(any(test, doc, feature = "testing"))]
pub use display::ScreenGrid;
pub use display::{DisplaySink, MessageWriter, ScreenSize, TextStyle, WriterSink};
pub use intro::{IntroLayout, Rotation, StartupState};
pub use patches::{INCLUDED_PATCHES, has_patch};
pub use report::list_version;
