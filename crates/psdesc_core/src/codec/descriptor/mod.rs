use std::collections::HashMap;
use std::fmt;
use std::io::Write;

use crate::codec::bytes::{Padding, write_bytes, write_count, write_unicode};
use crate::codec::decode::PREALLOC_LIMIT;
use crate::codec::{Codec, Decoder, DescriptorError, Diagnostic, Element, Key, Result, read_key, write_key};

/// One descriptor entry. `value` is `None` only when a reader produced nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
	/// Entry key, unique within its descriptor.
	pub key: Key,
	/// Entry value.
	pub value: Option<Element>,
}

/// Smallest entry on the wire: a one-byte long-form key and a tag whose reader consumed nothing.
const MIN_ENTRY_LEN: usize = 9;

/// Named, classified, ordered key to value map.
#[derive(Clone, Default)]
pub struct Descriptor {
	/// Display name, often empty.
	pub name: String,
	/// Class identifier.
	pub class_id: Key,
	entries: Vec<Entry>,
	index: HashMap<Key, usize>,
}

impl Descriptor {
	/// Empty descriptor.
	pub fn new(name: impl Into<String>, class_id: impl Into<Key>) -> Self {
		Self {
			name: name.into(),
			class_id: class_id.into(),
			entries: Vec::new(),
			index: HashMap::new(),
		}
	}

	/// Builder-style [`Descriptor::insert`].
	pub fn with(mut self, key: impl Into<Key>, value: Element) -> Self {
		self.insert(key, value);
		self
	}

	/// Insert or replace a value.
	///
	/// A new key is appended; an existing key keeps its position and the previous value is returned.
	pub fn insert(&mut self, key: impl Into<Key>, value: Element) -> Option<Element> {
		self.put(key.into(), Some(value))
	}

	/// Value stored under `key`, matched on key bytes.
	pub fn get(&self, key: impl AsRef<[u8]>) -> Option<&Element> {
		self.entry(key).and_then(|entry| entry.value.as_ref())
	}

	/// Entry stored under `key`, including entries without a value.
	pub fn entry(&self, key: impl AsRef<[u8]>) -> Option<&Entry> {
		self.index.get(key.as_ref()).map(|&idx| &self.entries[idx])
	}

	/// Remove and return the entry under `key`, preserving the order of the rest.
	pub fn remove(&mut self, key: impl AsRef<[u8]>) -> Option<Entry> {
		let idx = self.index.remove(key.as_ref())?;
		for slot in self.index.values_mut() {
			if *slot > idx {
				*slot -= 1;
			}
		}
		Some(self.entries.remove(idx))
	}

	/// Entries in insertion order.
	pub fn entries(&self) -> &[Entry] {
		&self.entries
	}

	/// Keys in insertion order.
	pub fn keys(&self) -> impl Iterator<Item = &Key> {
		self.entries.iter().map(|entry| &entry.key)
	}

	/// `(key, value)` pairs in insertion order, skipping entries without a value.
	pub fn iter(&self) -> impl Iterator<Item = (&Key, &Element)> {
		self.entries.iter().filter_map(|entry| entry.value.as_ref().map(|value| (&entry.key, value)))
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the descriptor has no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	fn put(&mut self, key: Key, value: Option<Element>) -> Option<Element> {
		match self.index.get(&key) {
			Some(&idx) => std::mem::replace(&mut self.entries[idx].value, value),
			None => {
				self.index.insert(key.clone(), self.entries.len());
				self.entries.push(Entry { key, value });
				None
			}
		}
	}
}

impl PartialEq for Descriptor {
	fn eq(&self, other: &Self) -> bool {
		self.name == other.name && self.class_id == other.class_id && self.entries == other.entries
	}
}

impl fmt::Debug for Descriptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Descriptor")
			.field("name", &self.name)
			.field("class_id", &self.class_id)
			.field("entries", &self.entries)
			.finish()
	}
}

impl Codec for Descriptor {
	fn read(dec: &mut Decoder<'_>) -> Result<Self> {
		dec.nested(|dec| {
			let name = dec.cursor().read_unicode(Padding::Align4)?;
			let class_id = read_key(dec)?;
			let count = dec.cursor().read_count(MIN_ENTRY_LEN)?;

			let reserve = count.min(PREALLOC_LIMIT);
			let mut out = Self {
				name,
				class_id,
				entries: Vec::with_capacity(reserve),
				index: HashMap::with_capacity(reserve),
			};
			for _ in 0..count {
				let at = dec.cursor().pos();
				let key = read_key(dec)?;
				let (tag, value) = dec.read_value()?;
				if value.is_none() {
					dec.warn(Diagnostic::MissingValue { key: key.clone(), tag });
				}
				if out.index.contains_key(&key) {
					dec.warn(Diagnostic::DuplicateKey { key: key.clone(), at });
				}
				out.put(key, value);
			}
			Ok(out)
		})
	}

	fn write<W: Write>(&self, out: &mut W) -> Result<usize> {
		let mut written = write_unicode(out, &self.name, Padding::Align4)?;
		written += write_key(out, &self.class_id)?;
		written += write_count(out, "descriptor", self.entries.len())?;
		for entry in &self.entries {
			let value = entry.value.as_ref().ok_or_else(|| DescriptorError::MissingValue { key: entry.key.to_string() })?;
			written += write_key(out, &entry.key)?;
			written += write_bytes(out, &value.tag().code())?;
			written += value.write(out)?;
		}
		Ok(written)
	}
}
