use std::env;
use std::process::Command;

fn main() {
	let profile = env::var("PROFILE").unwrap_or_else(|_| "debug".to_string());
	let debug_info = env::var("DEBUG").map(|v| v != "false" && v != "0").unwrap_or(false);
	let build_type = match (profile.as_str(), debug_info) {
		("release", true) => "RelWithDebInfo",
		("release", false) => "Release",
		_ => "Debug",
	};

	let opt_level = env::var("OPT_LEVEL").unwrap_or_else(|_| "0".to_string());
	let mut compilation = format!("rustc -C opt-level={opt_level}");
	if let Ok(flags) = env::var("CARGO_ENCODED_RUSTFLAGS")
		&& !flags.is_empty()
	{
		// Encoded flags are separated by 0x1f.
		for flag in flags.split('\x1f') {
			compilation.push(' ');
			compilation.push_str(flag);
		}
	}

	let user = env::var("USER").or_else(|_| env::var("USERNAME")).unwrap_or_default();
	let host = env::var("HOSTNAME")
		.ok()
		.or_else(|| command_output("hostname", &[]))
		.unwrap_or_default();
	let prefix = env::var("QUILL_PREFIX").unwrap_or_else(|_| "/usr/local".to_string());
	let git_hash = command_output("git", &["rev-parse", "--short", "HEAD"]).unwrap_or_default();

	println!("cargo:rustc-env=QUILL_BUILD_TYPE={build_type}");
	println!("cargo:rustc-env=QUILL_COMPILATION={compilation}");
	println!("cargo:rustc-env=QUILL_COMPILED_USER={user}");
	println!("cargo:rustc-env=QUILL_COMPILED_SYS={host}");
	println!("cargo:rustc-env=QUILL_PREFIX={prefix}");
	println!("cargo:rustc-env=QUILL_GIT_HASH={git_hash}");

	println!("cargo:rerun-if-env-changed=QUILL_PREFIX");
	println!("cargo:rerun-if-env-changed=CARGO_ENCODED_RUSTFLAGS");
	println!("cargo:rerun-if-changed=../../.git/HEAD");
}

/// Runs a command and returns its trimmed stdout when it succeeds with output.
fn command_output(program: &str, args: &[&str]) -> Option<String> {
	let output = Command::new(program).args(args).output().ok()?;
	if !output.status.success() {
		return None;
	}
	let text = String::from_utf8(output.stdout).ok()?;
	let text = text.trim();
	(!text.is_empty()).then(|| text.to_string())
}
