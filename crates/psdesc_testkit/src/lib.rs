//! Shared test helpers for workspace crates.

use std::path::{Path, PathBuf};

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve the workspace target directory.
pub fn target_dir() -> PathBuf {
	std::env::var_os("CARGO_TARGET_DIR")
		.map(PathBuf::from)
		.unwrap_or_else(|| workspace_root().join("target"))
}

/// Write `bytes` to a scratch file under `<target>/psdesc-scratch` and return its path.
pub fn write_scratch(name: &str, bytes: &[u8]) -> PathBuf {
	let dir = target_dir().join("psdesc-scratch");
	std::fs::create_dir_all(&dir).expect("scratch dir is creatable");
	let path = dir.join(name);
	std::fs::write(&path, bytes).expect("scratch file is writable");
	path
}

/// Hand-assembles big-endian descriptor streams without going through the encoder.
#[derive(Debug, Default, Clone)]
pub struct StreamBuilder {
	bytes: Vec<u8>,
}

impl StreamBuilder {
	/// Start an empty stream.
	pub fn new() -> Self {
		Self::default()
	}

	/// Append raw bytes.
	pub fn raw(mut self, bytes: &[u8]) -> Self {
		self.bytes.extend_from_slice(bytes);
		self
	}

	/// Append a big-endian `u32`.
	pub fn u32(self, value: u32) -> Self {
		self.raw(&value.to_be_bytes())
	}

	/// Append a big-endian `i32`.
	pub fn i32(self, value: i32) -> Self {
		self.raw(&value.to_be_bytes())
	}

	/// Append a big-endian `i64`.
	pub fn i64(self, value: i64) -> Self {
		self.raw(&value.to_be_bytes())
	}

	/// Append a big-endian `f64`.
	pub fn f64(self, value: f64) -> Self {
		self.raw(&value.to_be_bytes())
	}

	/// Append a four-byte value tag.
	pub fn tag(self, tag: &[u8; 4]) -> Self {
		self.raw(tag)
	}

	/// Append a key in compact form: zero length then the four-byte code.
	pub fn compact_key(self, code: &[u8; 4]) -> Self {
		self.u32(0).raw(code)
	}

	/// Append a key in length-prefixed form.
	pub fn long_key(self, key: &[u8]) -> Self {
		self.u32(key.len() as u32).raw(key)
	}

	/// Append an unpadded UTF-16BE string.
	pub fn unicode(self, text: &str) -> Self {
		let units: Vec<u16> = text.encode_utf16().collect();
		let mut out = self.u32(units.len() as u32);
		for unit in units {
			out = out.raw(&unit.to_be_bytes());
		}
		out
	}

	/// Append a UTF-16BE string padded to a multiple of four bytes.
	pub fn unicode_padded(self, text: &str) -> Self {
		let chars = text.encode_utf16().count();
		let out = self.unicode(text);
		if chars % 2 == 1 { out.raw(&[0, 0]) } else { out }
	}

	/// Finish and return the assembled bytes.
	pub fn build(self) -> Vec<u8> {
		self.bytes
	}
}
