use std::path::Path;

use psdesc::codec::{Codec, DecodeOptions, DecodeReport, Decoder, DescriptorBlock, DescriptorError, Result, decode_with};

/// Read a file and drop the first `offset` bytes.
pub(crate) fn read_input(path: &Path, offset: usize) -> Result<Vec<u8>> {
	let mut bytes = std::fs::read(path)?;
	if offset > bytes.len() {
		return Err(DescriptorError::OffsetOutOfRange { offset, len: bytes.len() });
	}
	bytes.drain(..offset);
	Ok(bytes)
}

/// Decode a bare or version-prefixed descriptor.
pub(crate) fn decode_input(bytes: &[u8], versioned: bool, options: DecodeOptions) -> Result<DecodeReport> {
	if !versioned {
		return decode_with(bytes, &options);
	}

	let mut dec = Decoder::with_options(bytes, options);
	let block = DescriptorBlock::read(&mut dec)?;
	dec.finish(block.descriptor)
}

/// Render four-byte code bytes as a printable label.
pub(crate) fn render_code(code: &[u8]) -> String {
	let mut out = String::new();
	for byte in code {
		if byte.is_ascii_graphic() || *byte == b' ' {
			out.push(char::from(*byte));
		} else {
			out.push_str(&format!("\\x{byte:02x}"));
		}
	}
	out
}

/// Print a serializable payload as pretty JSON.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) {
	match serde_json::to_string_pretty(payload) {
		Ok(text) => println!("{text}"),
		Err(err) => eprintln!("error: json encode failed: {err}"),
	}
}
