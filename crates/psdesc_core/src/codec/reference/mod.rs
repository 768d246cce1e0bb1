//! Fixed records of names and keys: enums and reference items.
//!
//! Names in these records are never padded.

use std::io::Write;

use crate::codec::bytes::{Padding, write_u32, write_unicode};
use crate::codec::{Codec, Decoder, Key, Result, read_key, write_key};

/// Enumerated value: a type identifier and the chosen value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Enumerated {
	/// Enumeration type.
	pub type_id: Key,
	/// Chosen value.
	pub value: Key,
}

/// Class reference (`type`, `GlbC`, `Clss`).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClassRef {
	/// Display name.
	pub name: String,
	/// Referenced class.
	pub class_id: Key,
}

/// Property reference.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PropertyRef {
	/// Display name.
	pub name: String,
	/// Owning class.
	pub class_id: Key,
	/// Referenced property key.
	pub key_id: Key,
}

/// Enumerated reference.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EnumeratedRef {
	/// Display name.
	pub name: String,
	/// Owning class.
	pub class_id: Key,
	/// Enumeration type.
	pub type_id: Key,
	/// Chosen value.
	pub value: Key,
}

/// Offset reference.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OffsetRef {
	/// Display name.
	pub name: String,
	/// Owning class.
	pub class_id: Key,
	/// Offset value.
	pub offset: u32,
}

impl Codec for Enumerated {
	fn read(dec: &mut Decoder<'_>) -> Result<Self> {
		let type_id = read_key(dec)?;
		let value = read_key(dec)?;
		Ok(Self { type_id, value })
	}

	fn write<W: Write>(&self, out: &mut W) -> Result<usize> {
		Ok(write_key(out, &self.type_id)? + write_key(out, &self.value)?)
	}
}

impl Codec for ClassRef {
	fn read(dec: &mut Decoder<'_>) -> Result<Self> {
		let name = dec.cursor().read_unicode(Padding::None)?;
		let class_id = read_key(dec)?;
		Ok(Self { name, class_id })
	}

	fn write<W: Write>(&self, out: &mut W) -> Result<usize> {
		Ok(write_unicode(out, &self.name, Padding::None)? + write_key(out, &self.class_id)?)
	}
}

impl Codec for PropertyRef {
	fn read(dec: &mut Decoder<'_>) -> Result<Self> {
		let name = dec.cursor().read_unicode(Padding::None)?;
		let class_id = read_key(dec)?;
		let key_id = read_key(dec)?;
		Ok(Self { name, class_id, key_id })
	}

	fn write<W: Write>(&self, out: &mut W) -> Result<usize> {
		let mut written = write_unicode(out, &self.name, Padding::None)?;
		written += write_key(out, &self.class_id)?;
		written += write_key(out, &self.key_id)?;
		Ok(written)
	}
}

impl Codec for EnumeratedRef {
	fn read(dec: &mut Decoder<'_>) -> Result<Self> {
		let name = dec.cursor().read_unicode(Padding::None)?;
		let class_id = read_key(dec)?;
		let type_id = read_key(dec)?;
		let value = read_key(dec)?;
		Ok(Self {
			name,
			class_id,
			type_id,
			value,
		})
	}

	fn write<W: Write>(&self, out: &mut W) -> Result<usize> {
		let mut written = write_unicode(out, &self.name, Padding::None)?;
		written += write_key(out, &self.class_id)?;
		written += write_key(out, &self.type_id)?;
		written += write_key(out, &self.value)?;
		Ok(written)
	}
}

impl Codec for OffsetRef {
	fn read(dec: &mut Decoder<'_>) -> Result<Self> {
		let name = dec.cursor().read_unicode(Padding::None)?;
		let class_id = read_key(dec)?;
		let offset = dec.cursor().read_u32()?;
		Ok(Self { name, class_id, offset })
	}

	fn write<W: Write>(&self, out: &mut W) -> Result<usize> {
		let mut written = write_unicode(out, &self.name, Padding::None)?;
		written += write_key(out, &self.class_id)?;
		written += write_u32(out, self.offset)?;
		Ok(written)
	}
}
