//! Tracing setup for the quill binary.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;

/// Installs the global subscriber and returns the stderr log handle.
///
/// `RUST_LOG` overrides the default filter on every path. With
/// `QUILL_LOG_DIR` set, events go to `quill.<pid>.log` in that directory.
/// Otherwise they go to stderr through [`HeldStderr`], which keeps them off
/// the full-screen display until the terminal is restored.
pub fn init(verbose: bool) -> HeldStderr {
	let stderr = HeldStderr::default();

	if let Some(log_dir) = std::env::var("QUILL_LOG_DIR").ok().map(PathBuf::from)
		&& std::fs::create_dir_all(&log_dir).is_ok()
	{
		let log_path = log_dir.join(format!("quill.{}.log", std::process::id()));

		if let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_path) {
			let file_layer = tracing_subscriber::fmt::layer()
				.with_writer(file)
				.with_ansi(false)
				.with_target(true);

			tracing_subscriber::registry()
				.with(env_filter(default_directives(verbose, true)))
				.with(file_layer)
				.init();

			tracing::info!(path = ?log_path, "tracing initialized");
			return stderr;
		}
	}

	let stderr_layer = tracing_subscriber::fmt::layer().with_writer(stderr.clone());
	tracing_subscriber::registry()
		.with(env_filter(default_directives(verbose, false)))
		.with(stderr_layer)
		.init();
	stderr
}

fn env_filter(default: &str) -> EnvFilter {
	EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Filter used when `RUST_LOG` is unset.
fn default_directives(verbose: bool, to_file: bool) -> &'static str {
	match (to_file, verbose) {
		(true, true) => "quill_version=trace,quill_term=trace,debug",
		(true, false) => "quill_version=debug,quill_term=debug,info",
		(false, true) => "quill_version=debug,quill_term=debug,info",
		(false, false) => "warn",
	}
}

#[derive(Debug, Default)]
struct Held {
	holding: bool,
	pending: Vec<u8>,
}

/// Stderr log sink that can be held while the screen belongs to the display.
///
/// Held output is written out in order on [`HeldStderr::release`].
#[derive(Debug, Clone, Default)]
pub struct HeldStderr(Arc<Mutex<Held>>);

impl HeldStderr {
	/// Buffers events instead of writing them to stderr.
	pub fn hold(&self) {
		if let Ok(mut held) = self.0.lock() {
			held.holding = true;
		}
	}

	/// Stops buffering and writes out everything held so far.
	pub fn release(&self) {
		let pending = match self.0.lock() {
			Ok(mut held) => {
				held.holding = false;
				std::mem::take(&mut held.pending)
			}
			Err(_) => return,
		};
		if !pending.is_empty() {
			let mut err = io::stderr().lock();
			let _ = err.write_all(&pending);
			let _ = err.flush();
		}
	}

	/// Writes `buf` to the hold buffer if holding, returning whether it did.
	fn try_hold(&self, buf: &[u8]) -> bool {
		match self.0.lock() {
			Ok(mut held) if held.holding => {
				held.pending.extend_from_slice(buf);
				true
			}
			_ => false,
		}
	}
}

/// Per-event writer handed out by [`HeldStderr`].
pub struct HeldWriter<'a>(&'a HeldStderr);

impl Write for HeldWriter<'_> {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		if self.0.try_hold(buf) {
			return Ok(buf.len());
		}
		io::stderr().write(buf)
	}

	fn flush(&mut self) -> io::Result<()> {
		io::stderr().flush()
	}
}

impl<'a> MakeWriter<'a> for HeldStderr {
	type Writer = HeldWriter<'a>;

	fn make_writer(&'a self) -> Self::Writer {
		HeldWriter(self)
	}
}
