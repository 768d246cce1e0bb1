use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::io::Write;

use crate::codec::bytes::{write_bytes, write_count, write_u32};
use crate::codec::{Decoder, Diagnostic, KnownId, Result};

/// Class identifier, entry key, type identifier, or enum value.
///
/// Equality and hashing compare the effective bytes, so a [`Key::Bytes`] that
/// spells a well-known code equals the matching [`Key::Known`]. Both encode to
/// the same compact form.
#[derive(Debug, Clone)]
pub enum Key {
	/// Well-known identifier with a compact encoding.
	Known(KnownId),
	/// Arbitrary byte string, including unresolved four-byte codes.
	Bytes(Vec<u8>),
}

impl Key {
	/// Effective key bytes.
	pub fn as_bytes(&self) -> &[u8] {
		match self {
			Self::Known(id) => id.code(),
			Self::Bytes(bytes) => bytes,
		}
	}

	/// Well-known identifier these bytes resolve to, if any.
	pub fn known(&self) -> Option<KnownId> {
		match self {
			Self::Known(id) => Some(*id),
			Self::Bytes(bytes) => KnownId::from_code(bytes),
		}
	}

	/// Return the form this key is written in.
	pub fn canonical(self) -> Self {
		match self.known() {
			Some(id) => Self::Known(id),
			None => self,
		}
	}
}

impl PartialEq for Key {
	fn eq(&self, other: &Self) -> bool {
		self.as_bytes() == other.as_bytes()
	}
}

impl Eq for Key {}

impl Hash for Key {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.as_bytes().hash(state);
	}
}

impl AsRef<[u8]> for Key {
	fn as_ref(&self) -> &[u8] {
		self.as_bytes()
	}
}

impl Borrow<[u8]> for Key {
	fn borrow(&self) -> &[u8] {
		self.as_bytes()
	}
}

impl Default for Key {
	fn default() -> Self {
		Self::Known(KnownId::Null)
	}
}

impl From<KnownId> for Key {
	fn from(id: KnownId) -> Self {
		Self::Known(id)
	}
}

impl From<&[u8]> for Key {
	fn from(bytes: &[u8]) -> Self {
		Self::Bytes(bytes.to_vec())
	}
}

impl<const N: usize> From<&[u8; N]> for Key {
	fn from(bytes: &[u8; N]) -> Self {
		Self::Bytes(bytes.to_vec())
	}
}

impl From<Vec<u8>> for Key {
	fn from(bytes: Vec<u8>) -> Self {
		Self::Bytes(bytes)
	}
}

impl From<&str> for Key {
	fn from(text: &str) -> Self {
		Self::Bytes(text.as_bytes().to_vec())
	}
}

impl fmt::Display for Key {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Known(id) => f.write_str(id.name()),
			Self::Bytes(bytes) => write!(f, "{:?}", String::from_utf8_lossy(bytes)),
		}
	}
}

/// Read a length-prefixed key or a compact well-known code.
///
/// An unresolved compact code is kept as [`Key::Bytes`] and reported as a
/// [`Diagnostic::UnknownKeyCode`].
pub fn read_key(dec: &mut Decoder<'_>) -> Result<Key> {
	let len = dec.cursor().read_u32()? as usize;
	if len != 0 {
		return Ok(Key::Bytes(dec.cursor().read_exact(len)?.to_vec()));
	}

	let at = dec.cursor().pos();
	let code = dec.cursor().read_code4()?;
	match KnownId::from_code(&code) {
		Some(id) => Ok(Key::Known(id)),
		None => {
			dec.warn(Diagnostic::UnknownKeyCode { at, code });
			Ok(Key::Bytes(code.to_vec()))
		}
	}
}

/// Write a key, using the compact form whenever the bytes are well-known.
pub fn write_key<W: Write>(out: &mut W, key: &Key) -> Result<usize> {
	match key.known() {
		Some(id) => Ok(write_u32(out, 0)? + write_bytes(out, id.code())?),
		None => {
			let bytes = key.as_bytes();
			Ok(write_count(out, "key", bytes.len())? + write_bytes(out, bytes)?)
		}
	}
}

#[cfg(test)]
mod tests;
