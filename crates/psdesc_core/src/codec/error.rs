use thiserror::Error;

use crate::codec::Tag;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, DescriptorError>;

/// Coarse error classification shared by every [`DescriptorError`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
	/// The byte stream is not a well-formed descriptor stream.
	Format,
	/// A value tag was not present in the type registry.
	UnknownTag,
	/// An in-memory value cannot be serialized in the wire format.
	Unrepresentable,
	/// The output sink failed.
	Io,
}

/// Errors produced while decoding and encoding descriptor streams.
#[derive(Debug, Error)]
pub enum DescriptorError {
	/// Output sink failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Not enough bytes remained for a requested read.
	#[error("unexpected eof at offset {at}, need {need} bytes, remaining {rem}")]
	UnexpectedEof {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Value tag has no registered decoder.
	#[error("unknown value tag {tag:?} at offset {at}")]
	UnknownTag {
		/// Four-byte tag as read from the stream.
		tag: [u8; 4],
		/// Byte offset of the tag.
		at: usize,
	},
	/// Unit code of a unit float is not a known unit.
	#[error("unknown unit {unit:?} at offset {at}")]
	UnknownUnit {
		/// Four-byte unit code as read from the stream.
		unit: [u8; 4],
		/// Byte offset of the unit code.
		at: usize,
	},
	/// UTF-16 payload contained an unpaired surrogate.
	#[error("invalid utf-16 string at offset {at}")]
	InvalidUtf16 {
		/// Byte offset of the string's length prefix.
		at: usize,
	},
	/// Composite nesting exceeded the configured limit.
	#[error("decode depth exceeded (max={max_depth})")]
	DecodeDepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Bytes were left over after the root descriptor in strict mode.
	#[error("trailing bytes after descriptor at offset {at}: leftover={leftover}")]
	TrailingBytes {
		/// Offset where the root descriptor ended.
		at: usize,
		/// Unconsumed bytes.
		leftover: usize,
	},
	/// Descriptor block carried an unsupported version prefix.
	#[error("unsupported descriptor version {version} (expected 16)")]
	UnsupportedVersion {
		/// Parsed version.
		version: u32,
	},
	/// Requested start offset lies beyond the input.
	#[error("offset {offset} out of range for input of {len} bytes")]
	OffsetOutOfRange {
		/// Requested offset.
		offset: usize,
		/// Input length.
		len: usize,
	},
	/// A length or count does not fit its 32-bit wire field.
	#[error("{what} length {len} exceeds u32 range")]
	LengthOverflow {
		/// Field being written.
		what: &'static str,
		/// Actual length.
		len: usize,
	},
	/// Descriptor entry has no value to encode.
	#[error("descriptor entry {key} has no value")]
	MissingValue {
		/// Rendered entry key.
		key: String,
	},
	/// A standalone body read through a registry produced no value.
	#[error("reader for tag {tag} produced no value")]
	NoValue {
		/// Tag whose reader was invoked.
		tag: Tag,
	},
}

impl DescriptorError {
	/// Classify this error.
	pub fn kind(&self) -> ErrorKind {
		match self {
			Self::Io(_) => ErrorKind::Io,
			Self::UnknownTag { .. } => ErrorKind::UnknownTag,
			Self::LengthOverflow { .. } | Self::MissingValue { .. } => ErrorKind::Unrepresentable,
			Self::UnexpectedEof { .. }
			| Self::UnknownUnit { .. }
			| Self::InvalidUtf16 { .. }
			| Self::DecodeDepthExceeded { .. }
			| Self::TrailingBytes { .. }
			| Self::UnsupportedVersion { .. }
			| Self::OffsetOutOfRange { .. }
			| Self::NoValue { .. } => ErrorKind::Format,
		}
	}
}
