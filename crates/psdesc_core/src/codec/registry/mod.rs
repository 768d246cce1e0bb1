use std::collections::HashMap;
use std::sync::OnceLock;

use crate::codec::bytes::Padding;
use crate::codec::{
	ClassRef, Codec, DecodeOptions, Decoder, Descriptor, DescriptorError, EnumeratedRef, Enumerated, Element, List, OffsetRef, PropertyRef, Result, Tag, UnitFloat, UnitFloats,
};

/// Body decoder for one tag. `None` marks a reader that produced no value.
pub type ReadFn = fn(&mut Decoder<'_>) -> Result<Option<Element>>;

/// One registry row.
#[derive(Debug, Clone, Copy)]
pub struct Registration {
	/// Tag this row decodes.
	pub tag: Tag,
	/// Body decoder.
	pub read: ReadFn,
}

/// Mapping from four-byte tag codes to body decoders.
#[derive(Debug, Clone, Default)]
pub struct Registry {
	rows: HashMap<[u8; 4], Registration>,
}

static STANDARD: OnceLock<Registry> = OnceLock::new();

impl Registry {
	/// Empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Shared registry covering every [`Tag`]; built on first use and read-only afterwards.
	pub fn standard() -> &'static Registry {
		STANDARD.get_or_init(build_standard)
	}

	/// Associate `tag` with `read`, replacing any earlier row for the same tag.
	pub fn register(&mut self, tag: Tag, read: ReadFn) -> &mut Self {
		self.rows.insert(tag.code(), Registration { tag, read });
		self
	}

	/// Find the decoder for a tag code read at offset `at`.
	pub fn dispatch(&self, code: [u8; 4], at: usize) -> Result<Registration> {
		self.rows.get(&code).copied().ok_or(DescriptorError::UnknownTag { tag: code, at })
	}

	/// Decode one body of `tag` from the start of `bytes`.
	pub fn read_element(&self, tag: Tag, bytes: &[u8]) -> Result<Element> {
		let registration = self.dispatch(tag.code(), 0)?;
		let mut dec = Decoder::with_registry(bytes, self, DecodeOptions::default());
		(registration.read)(&mut dec)?.ok_or(DescriptorError::NoValue { tag })
	}

	/// Whether `code` has a decoder.
	pub fn contains(&self, code: [u8; 4]) -> bool {
		self.rows.contains_key(&code)
	}

	/// Registered tags in [`Tag::ALL`] order.
	pub fn tags(&self) -> impl Iterator<Item = Tag> + '_ {
		Tag::ALL.iter().copied().filter(|tag| self.contains(tag.code()))
	}

	/// Number of registered tags.
	pub fn len(&self) -> usize {
		self.rows.len()
	}

	/// Whether no tag is registered.
	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}
}

fn build_standard() -> Registry {
	let mut registry = Registry::new();
	registry
		.register(Tag::Descriptor, |dec| Ok(Some(Element::Descriptor(Descriptor::read(dec)?))))
		.register(Tag::GlobalObject, |dec| Ok(Some(Element::GlobalObject(Descriptor::read(dec)?))))
		.register(Tag::ObjectArray, |dec| Ok(Some(Element::ObjectArray(Descriptor::read(dec)?))))
		.register(Tag::List, |dec| Ok(Some(Element::List(List::read(dec)?))))
		.register(Tag::Reference, |dec| Ok(Some(Element::Reference(List::read(dec)?))))
		.register(Tag::Double, |dec| Ok(Some(Element::Double(dec.cursor().read_f64()?))))
		.register(Tag::UnitFloat, |dec| Ok(Some(Element::UnitFloat(UnitFloat::read(dec)?))))
		.register(Tag::UnitFloats, |dec| Ok(Some(Element::UnitFloats(UnitFloats::read(dec)?))))
		.register(Tag::String, |dec| Ok(Some(Element::String(dec.cursor().read_unicode(Padding::Align4)?))))
		.register(Tag::Name, |dec| Ok(Some(Element::Name(dec.cursor().read_unicode(Padding::Align4)?))))
		.register(Tag::Enumerated, |dec| Ok(Some(Element::Enumerated(Enumerated::read(dec)?))))
		.register(Tag::Integer, |dec| Ok(Some(Element::Integer(dec.cursor().read_i32()?))))
		.register(Tag::Identifier, |dec| Ok(Some(Element::Identifier(dec.cursor().read_i32()?))))
		.register(Tag::Index, |dec| Ok(Some(Element::Index(dec.cursor().read_i32()?))))
		.register(Tag::LargeInteger, |dec| Ok(Some(Element::LargeInteger(dec.cursor().read_i64()?))))
		.register(Tag::Boolean, |dec| Ok(Some(Element::Boolean(dec.cursor().read_u8()? != 0))))
		.register(Tag::Class1, |dec| Ok(Some(Element::Class1(ClassRef::read(dec)?))))
		.register(Tag::Class2, |dec| Ok(Some(Element::Class2(ClassRef::read(dec)?))))
		.register(Tag::Class3, |dec| Ok(Some(Element::Class3(ClassRef::read(dec)?))))
		.register(Tag::RawData, |dec| Ok(Some(Element::RawData(dec.cursor().read_length_block()?.to_vec()))))
		.register(Tag::Alias, |dec| Ok(Some(Element::Alias(dec.cursor().read_length_block()?.to_vec()))))
		.register(Tag::Path, |dec| Ok(Some(Element::Path(dec.cursor().read_length_block()?.to_vec()))))
		.register(Tag::Property, |dec| Ok(Some(Element::Property(PropertyRef::read(dec)?))))
		.register(Tag::EnumeratedReference, |dec| Ok(Some(Element::EnumeratedReference(EnumeratedRef::read(dec)?))))
		.register(Tag::Offset, |dec| Ok(Some(Element::Offset(OffsetRef::read(dec)?))));
	registry
}

#[cfg(test)]
mod tests;
