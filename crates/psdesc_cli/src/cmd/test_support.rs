use std::path::PathBuf;
use std::process::Command;
use std::sync::OnceLock;

use psdesc::codec::{Codec, Descriptor, DescriptorBlock};
use psdesc_testkit::{target_dir, write_scratch};

/// Write raw stream bytes to a scratch file and return its path.
pub(crate) fn scratch_file(name: &str, bytes: &[u8]) -> String {
	write_scratch(name, bytes).to_string_lossy().into_owned()
}

/// Encode `desc` after `prefix` bytes, optionally inside a version-16 block.
pub(crate) fn scratch_descriptor(name: &str, prefix: &[u8], desc: &Descriptor, versioned: bool) -> String {
	let body = if versioned {
		DescriptorBlock::from(desc.clone()).to_bytes()
	} else {
		desc.to_bytes()
	};
	let mut bytes = prefix.to_vec();
	bytes.extend(body.expect("fixture descriptor encodes"));
	scratch_file(name, &bytes)
}

/// Run `psdesc` expecting success and parse stdout as JSON.
pub(crate) fn run_psdesc_json(args: &[&str]) -> serde_json::Value {
	let output = Command::new(psdesc_bin()).args(args).output().expect("psdesc runs");
	assert!(
		output.status.success(),
		"psdesc {args:?} exited with {}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout is json")
}

/// Run `psdesc` expecting exit status 1 and return the error line it printed.
pub(crate) fn run_psdesc_error(args: &[&str]) -> String {
	let output = Command::new(psdesc_bin()).args(args).output().expect("psdesc runs");
	assert_eq!(output.status.code(), Some(1), "psdesc {args:?} should fail");
	let stderr = String::from_utf8_lossy(&output.stderr);
	stderr
		.lines()
		.find(|line| line.starts_with("error: "))
		.map(str::to_owned)
		.unwrap_or_else(|| panic!("no error line in stderr: {stderr}"))
}

fn psdesc_bin() -> &'static PathBuf {
	static BIN: OnceLock<PathBuf> = OnceLock::new();
	BIN.get_or_init(|| {
		if let Some(path) = option_env!("CARGO_BIN_EXE_psdesc") {
			return PathBuf::from(path);
		}

		// Unit tests of a bin target do not get CARGO_BIN_EXE_*, so build it once.
		let status = Command::new("cargo")
			.current_dir(env!("CARGO_MANIFEST_DIR"))
			.args(["build", "--quiet", "--bin", "psdesc"])
			.status()
			.expect("cargo build runs");
		assert!(status.success(), "building psdesc failed");
		target_dir().join("debug").join(format!("psdesc{}", std::env::consts::EXE_SUFFIX))
	})
}
