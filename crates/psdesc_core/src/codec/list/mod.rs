use std::io::Write;

use crate::codec::bytes::{write_bytes, write_count};
use crate::codec::decode::PREALLOC_LIMIT;
use crate::codec::{Codec, Decoder, Diagnostic, Element, Result};

/// Smallest item on the wire: a tag whose reader consumed nothing.
const MIN_ITEM_LEN: usize = 4;

/// Ordered sequence of heterogeneous elements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct List {
	/// Items in stream order.
	pub items: Vec<Element>,
}

impl List {
	/// List over `items`.
	pub fn new(items: Vec<Element>) -> Self {
		Self { items }
	}

	/// Append an item.
	pub fn push(&mut self, item: Element) {
		self.items.push(item);
	}

	/// Item at `index`.
	pub fn get(&self, index: usize) -> Option<&Element> {
		self.items.get(index)
	}

	/// Items in order.
	pub fn iter(&self) -> std::slice::Iter<'_, Element> {
		self.items.iter()
	}

	/// Number of items.
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Whether the list is empty.
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}
}

impl From<Vec<Element>> for List {
	fn from(items: Vec<Element>) -> Self {
		Self::new(items)
	}
}

impl<'a> IntoIterator for &'a List {
	type Item = &'a Element;
	type IntoIter = std::slice::Iter<'a, Element>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.iter()
	}
}

impl Codec for List {
	fn read(dec: &mut Decoder<'_>) -> Result<Self> {
		dec.nested(|dec| {
			let count = dec.cursor().read_count(MIN_ITEM_LEN)?;
			let mut items = Vec::with_capacity(count.min(PREALLOC_LIMIT));
			for index in 0..count {
				match dec.read_value()? {
					(_, Some(item)) => items.push(item),
					(tag, None) => dec.warn(Diagnostic::MissingListItem { index, tag }),
				}
			}
			Ok(Self { items })
		})
	}

	fn write<W: Write>(&self, out: &mut W) -> Result<usize> {
		let mut written = write_count(out, "list", self.items.len())?;
		for item in &self.items {
			written += write_bytes(out, &item.tag().code())?;
			written += item.write(out)?;
		}
		Ok(written)
	}
}
