//! Big-endian primitives shared by every element body.

use std::io::Write;

use crate::codec::{DescriptorError, Result};

/// Padding rule applied after a UTF-16 string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Padding {
	/// No trailing padding.
	None,
	/// Pad prefix plus text up to the next multiple of four bytes.
	Align4,
}

impl Padding {
	fn pad_len(self, written: usize) -> usize {
		match self {
			Self::None => 0,
			Self::Align4 => (4 - written % 4) % 4,
		}
	}
}

/// Simple bounded cursor over an immutable byte slice.
pub struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at position 0.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Return current byte offset.
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Read exactly `n` bytes and advance cursor.
	pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
		if n > self.remaining() {
			return Err(DescriptorError::UnexpectedEof {
				at: self.pos,
				need: n,
				rem: self.remaining(),
			});
		}

		let start = self.pos;
		self.pos += n;
		Ok(&self.bytes[start..self.pos])
	}

	/// Read a four-byte code.
	pub fn read_code4(&mut self) -> Result<[u8; 4]> {
		Ok(self.read_array()?)
	}

	/// Read one byte.
	pub fn read_u8(&mut self) -> Result<u8> {
		let [byte] = self.read_array()?;
		Ok(byte)
	}

	/// Read a big-endian `u32`.
	pub fn read_u32(&mut self) -> Result<u32> {
		Ok(u32::from_be_bytes(self.read_array()?))
	}

	/// Read a big-endian `i32`.
	pub fn read_i32(&mut self) -> Result<i32> {
		Ok(i32::from_be_bytes(self.read_array()?))
	}

	/// Read a big-endian `i64`.
	pub fn read_i64(&mut self) -> Result<i64> {
		Ok(i64::from_be_bytes(self.read_array()?))
	}

	/// Read a big-endian IEEE-754 `f64`.
	pub fn read_f64(&mut self) -> Result<f64> {
		Ok(f64::from_be_bytes(self.read_array()?))
	}

	/// Read a `u32` count and widen it, checking it against `item_size` bytes per item.
	pub fn read_count(&mut self, item_size: usize) -> Result<usize> {
		let at = self.pos;
		let count = self.read_u32()? as usize;
		let need = count.saturating_mul(item_size);
		if need > self.remaining() {
			return Err(DescriptorError::UnexpectedEof {
				at,
				need,
				rem: self.remaining(),
			});
		}
		Ok(count)
	}

	/// Read a `u32` length followed by that many raw bytes.
	pub fn read_length_block(&mut self) -> Result<&'a [u8]> {
		let len = self.read_u32()? as usize;
		self.read_exact(len)
	}

	/// Read a character-counted UTF-16BE string with optional trailing padding.
	pub fn read_unicode(&mut self, padding: Padding) -> Result<String> {
		let at = self.pos;
		let chars = self.read_count(2)?;
		let raw = self.read_exact(chars * 2)?;
		let units: Vec<u16> = raw.chunks_exact(2).map(|pair| u16::from_be_bytes([pair[0], pair[1]])).collect();
		let text = String::from_utf16(&units).map_err(|_| DescriptorError::InvalidUtf16 { at })?;

		let _ = self.read_exact(padding.pad_len(4 + chars * 2))?;
		Ok(text)
	}

	fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
		let raw = self.read_exact(N)?;
		let mut out = [0_u8; N];
		out.copy_from_slice(raw);
		Ok(out)
	}
}

/// Write raw bytes and return the number written.
pub fn write_bytes<W: Write>(out: &mut W, bytes: &[u8]) -> Result<usize> {
	out.write_all(bytes)?;
	Ok(bytes.len())
}

/// Write a big-endian `u32`.
pub fn write_u32<W: Write>(out: &mut W, value: u32) -> Result<usize> {
	write_bytes(out, &value.to_be_bytes())
}

/// Write a big-endian `i32`.
pub fn write_i32<W: Write>(out: &mut W, value: i32) -> Result<usize> {
	write_bytes(out, &value.to_be_bytes())
}

/// Write a big-endian `i64`.
pub fn write_i64<W: Write>(out: &mut W, value: i64) -> Result<usize> {
	write_bytes(out, &value.to_be_bytes())
}

/// Write a big-endian `f64`.
pub fn write_f64<W: Write>(out: &mut W, value: f64) -> Result<usize> {
	write_bytes(out, &value.to_be_bytes())
}

/// Write a length or element count into its `u32` field.
pub fn write_count<W: Write>(out: &mut W, what: &'static str, len: usize) -> Result<usize> {
	let value = u32::try_from(len).map_err(|_| DescriptorError::LengthOverflow { what, len })?;
	write_u32(out, value)
}

/// Write a `u32` length prefix followed by the bytes.
pub fn write_length_block<W: Write>(out: &mut W, bytes: &[u8]) -> Result<usize> {
	let written = write_count(out, "raw data", bytes.len())?;
	Ok(written + write_bytes(out, bytes)?)
}

/// Write a character-counted UTF-16BE string with optional trailing padding.
pub fn write_unicode<W: Write>(out: &mut W, text: &str, padding: Padding) -> Result<usize> {
	let units: Vec<u16> = text.encode_utf16().collect();
	let mut written = write_count(out, "unicode string", units.len())?;

	let mut raw = Vec::with_capacity(units.len() * 2);
	for unit in &units {
		raw.extend_from_slice(&unit.to_be_bytes());
	}
	written += write_bytes(out, &raw)?;

	let pad = padding.pad_len(written);
	written += write_bytes(out, &[0_u8; 3][..pad])?;
	Ok(written)
}
