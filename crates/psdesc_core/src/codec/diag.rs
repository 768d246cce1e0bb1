use std::fmt;

use crate::codec::{Key, Tag};

/// Recoverable anomaly observed while decoding.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
	/// Compact key code outside the well-known table; kept as raw bytes.
	UnknownKeyCode {
		/// Offset of the four-byte code.
		at: usize,
		/// The unresolved code.
		code: [u8; 4],
	},
	/// A registered reader produced no value for a descriptor entry.
	MissingValue {
		/// Entry key.
		key: Key,
		/// Tag the entry declared.
		tag: Tag,
	},
	/// A registered reader produced no value for a list item; the item was dropped.
	MissingListItem {
		/// Item position in the stream.
		index: usize,
		/// Tag the item declared.
		tag: Tag,
	},
	/// A descriptor repeated a key; the later value replaced the earlier one in place.
	DuplicateKey {
		/// Repeated key.
		key: Key,
		/// Offset of the repeated entry.
		at: usize,
	},
}

impl fmt::Display for Diagnostic {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::UnknownKeyCode { at, code } => write!(f, "unknown key code {:?} at offset {at}", String::from_utf8_lossy(code)),
			Self::MissingValue { key, tag } => write!(f, "entry {key} ({tag}) decoded to no value"),
			Self::MissingListItem { index, tag } => write!(f, "list item {index} ({tag}) decoded to no value"),
			Self::DuplicateKey { key, at } => write!(f, "duplicate key {key} at offset {at}"),
		}
	}
}
