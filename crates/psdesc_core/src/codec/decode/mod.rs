use std::io::Write;

use crate::codec::bytes::Cursor;
use crate::codec::{Codec, Descriptor, DescriptorError, Diagnostic, Element, Registry, Result, Tag};

/// Upper bound on slots reserved from a declared count before any item is read.
pub(crate) const PREALLOC_LIMIT: usize = 1024;

/// Runtime limits for descriptor decoding.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Maximum descriptor/list nesting depth, root included.
	pub max_depth: u32,
	/// Error when bytes remain after the root descriptor.
	pub reject_trailing: bool,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			max_depth: 64,
			reject_trailing: false,
		}
	}
}

/// Decoded root descriptor plus everything observed along the way.
#[derive(Debug, Clone)]
pub struct DecodeReport {
	/// Root descriptor.
	pub descriptor: Descriptor,
	/// Recoverable anomalies in stream order.
	pub diagnostics: Vec<Diagnostic>,
	/// Bytes consumed from the input.
	pub consumed: usize,
}

/// Decoding state for one pass over one input.
pub struct Decoder<'a> {
	cursor: Cursor<'a>,
	registry: &'a Registry,
	options: DecodeOptions,
	depth: u32,
	diagnostics: Vec<Diagnostic>,
}

impl<'a> Decoder<'a> {
	/// Decoder over `bytes` with the standard registry and default options.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self::with_registry(bytes, Registry::standard(), DecodeOptions::default())
	}

	/// Decoder over `bytes` with the standard registry.
	pub fn with_options(bytes: &'a [u8], options: DecodeOptions) -> Self {
		Self::with_registry(bytes, Registry::standard(), options)
	}

	/// Decoder over `bytes` dispatching through `registry`.
	pub fn with_registry(bytes: &'a [u8], registry: &'a Registry, options: DecodeOptions) -> Self {
		Self {
			cursor: Cursor::new(bytes),
			registry,
			options,
			depth: 0,
			diagnostics: Vec::new(),
		}
	}

	/// Underlying cursor.
	pub fn cursor(&mut self) -> &mut Cursor<'a> {
		&mut self.cursor
	}

	/// Diagnostics recorded so far.
	pub fn diagnostics(&self) -> &[Diagnostic] {
		&self.diagnostics
	}

	/// Record a recoverable anomaly and continue.
	pub fn warn(&mut self, diagnostic: Diagnostic) {
		tracing::warn!(target: "psdesc::decode", %diagnostic, "recoverable descriptor anomaly");
		self.diagnostics.push(diagnostic);
	}

	/// Read a four-byte tag and decode the body it names.
	pub fn read_value(&mut self) -> Result<(Tag, Option<Element>)> {
		let at = self.cursor.pos();
		let code = self.cursor.read_code4()?;
		let registration = self.registry.dispatch(code, at)?;
		tracing::trace!(target: "psdesc::decode", tag = %registration.tag, at, "dispatch");
		let value = (registration.read)(self)?;
		Ok((registration.tag, value))
	}

	/// Run `read` one composite level deeper.
	pub fn nested<T>(&mut self, read: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
		if self.depth >= self.options.max_depth {
			return Err(DescriptorError::DecodeDepthExceeded {
				max_depth: self.options.max_depth,
			});
		}

		self.depth += 1;
		let out = read(self);
		self.depth -= 1;
		out
	}

	/// Close the pass over a decoded root.
	pub fn finish(self, descriptor: Descriptor) -> Result<DecodeReport> {
		let consumed = self.cursor.pos();
		let leftover = self.cursor.remaining();
		if self.options.reject_trailing && leftover > 0 {
			return Err(DescriptorError::TrailingBytes { at: consumed, leftover });
		}

		Ok(DecodeReport {
			descriptor,
			diagnostics: self.diagnostics,
			consumed,
		})
	}
}

/// Decode a root descriptor body from `bytes`.
pub fn decode(bytes: &[u8]) -> Result<Descriptor> {
	Ok(decode_with(bytes, &DecodeOptions::default())?.descriptor)
}

/// Decode a root descriptor body with explicit options.
pub fn decode_with(bytes: &[u8], options: &DecodeOptions) -> Result<DecodeReport> {
	decode_with_registry(bytes, Registry::standard(), options)
}

/// Decode a root descriptor body through a caller-built registry.
pub fn decode_with_registry(bytes: &[u8], registry: &Registry, options: &DecodeOptions) -> Result<DecodeReport> {
	let mut dec = Decoder::with_registry(bytes, registry, options.clone());
	let descriptor = Descriptor::read(&mut dec)?;
	dec.finish(descriptor)
}

/// Encode a root descriptor body and return the number of bytes written.
pub fn encode<W: Write>(descriptor: &Descriptor, out: &mut W) -> Result<usize> {
	descriptor.write(out)
}

#[cfg(test)]
mod tests;
