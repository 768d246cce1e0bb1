use std::io::Write;

use crate::codec::bytes::{Padding, write_bytes, write_f64, write_i32, write_i64, write_length_block, write_unicode};
use crate::codec::{
	ClassRef, Decoder, Descriptor, EnumeratedRef, Enumerated, List, OffsetRef, PropertyRef, Registry, Result, Tag, UnitFloat, UnitFloats,
};

/// Read/write capability shared by every element body.
pub trait Codec: Sized {
	/// Decode one body at the decoder's position.
	fn read(dec: &mut Decoder<'_>) -> Result<Self>;

	/// Encode the body and return the number of bytes written.
	fn write<W: Write>(&self, out: &mut W) -> Result<usize>;

	/// Decode one body from the start of `bytes`.
	fn from_bytes(bytes: &[u8]) -> Result<Self> {
		Self::read(&mut Decoder::new(bytes))
	}

	/// Encode the body into a fresh buffer.
	fn to_bytes(&self) -> Result<Vec<u8>> {
		let mut out = Vec::new();
		self.write(&mut out)?;
		Ok(out)
	}
}

/// Container shape of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
	/// Wraps one primitive value.
	Scalar,
	/// Ordered sequence of tagged children.
	List,
	/// Ordered key to tagged-child map.
	Map,
	/// Fixed record of names and keys.
	Structure,
}

/// Borrowed primitive wrapped by a scalar element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScalarRef<'a> {
	/// `doub`.
	F64(f64),
	/// `long`, `Idnt`, `indx`.
	I32(i32),
	/// `comp`.
	I64(i64),
	/// `bool`.
	Bool(bool),
	/// `TEXT`, `name`.
	Str(&'a str),
	/// `tdta`, `alis`, `Pth `.
	Bytes(&'a [u8]),
}

/// One typed value in a descriptor tree.
///
/// Tags that share a wire shape are distinct variants over the same body type,
/// so every element writes back under the tag it was read with.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum Element {
	Descriptor(Descriptor),
	GlobalObject(Descriptor),
	ObjectArray(Descriptor),
	List(List),
	Reference(List),
	Double(f64),
	UnitFloat(UnitFloat),
	UnitFloats(UnitFloats),
	String(String),
	Name(String),
	Enumerated(Enumerated),
	Integer(i32),
	Identifier(i32),
	Index(i32),
	LargeInteger(i64),
	Boolean(bool),
	Class1(ClassRef),
	Class2(ClassRef),
	Class3(ClassRef),
	RawData(Vec<u8>),
	Alias(Vec<u8>),
	Path(Vec<u8>),
	Property(PropertyRef),
	EnumeratedReference(EnumeratedRef),
	Offset(OffsetRef),
}

impl Element {
	/// Tag written in front of this element's body.
	pub fn tag(&self) -> Tag {
		match self {
			Self::Descriptor(_) => Tag::Descriptor,
			Self::GlobalObject(_) => Tag::GlobalObject,
			Self::ObjectArray(_) => Tag::ObjectArray,
			Self::List(_) => Tag::List,
			Self::Reference(_) => Tag::Reference,
			Self::Double(_) => Tag::Double,
			Self::UnitFloat(_) => Tag::UnitFloat,
			Self::UnitFloats(_) => Tag::UnitFloats,
			Self::String(_) => Tag::String,
			Self::Name(_) => Tag::Name,
			Self::Enumerated(_) => Tag::Enumerated,
			Self::Integer(_) => Tag::Integer,
			Self::Identifier(_) => Tag::Identifier,
			Self::Index(_) => Tag::Index,
			Self::LargeInteger(_) => Tag::LargeInteger,
			Self::Boolean(_) => Tag::Boolean,
			Self::Class1(_) => Tag::Class1,
			Self::Class2(_) => Tag::Class2,
			Self::Class3(_) => Tag::Class3,
			Self::RawData(_) => Tag::RawData,
			Self::Alias(_) => Tag::Alias,
			Self::Path(_) => Tag::Path,
			Self::Property(_) => Tag::Property,
			Self::EnumeratedReference(_) => Tag::EnumeratedReference,
			Self::Offset(_) => Tag::Offset,
		}
	}

	/// Container shape of this element.
	pub fn shape(&self) -> Shape {
		match self {
			Self::Descriptor(_) | Self::GlobalObject(_) | Self::ObjectArray(_) => Shape::Map,
			Self::List(_) | Self::Reference(_) => Shape::List,
			Self::Double(_)
			| Self::String(_)
			| Self::Name(_)
			| Self::Integer(_)
			| Self::Identifier(_)
			| Self::Index(_)
			| Self::LargeInteger(_)
			| Self::Boolean(_)
			| Self::RawData(_)
			| Self::Alias(_)
			| Self::Path(_) => Shape::Scalar,
			Self::UnitFloat(_)
			| Self::UnitFloats(_)
			| Self::Enumerated(_)
			| Self::Class1(_)
			| Self::Class2(_)
			| Self::Class3(_)
			| Self::Property(_)
			| Self::EnumeratedReference(_)
			| Self::Offset(_) => Shape::Structure,
		}
	}

	/// Wrapped primitive of a scalar element.
	pub fn as_scalar(&self) -> Option<ScalarRef<'_>> {
		match self {
			Self::Double(v) => Some(ScalarRef::F64(*v)),
			Self::Integer(v) | Self::Identifier(v) | Self::Index(v) => Some(ScalarRef::I32(*v)),
			Self::LargeInteger(v) => Some(ScalarRef::I64(*v)),
			Self::Boolean(v) => Some(ScalarRef::Bool(*v)),
			Self::String(v) | Self::Name(v) => Some(ScalarRef::Str(v)),
			Self::RawData(v) | Self::Alias(v) | Self::Path(v) => Some(ScalarRef::Bytes(v)),
			_ => None,
		}
	}

	/// Children of a list-shaped element.
	pub fn as_list(&self) -> Option<&List> {
		match self {
			Self::List(list) | Self::Reference(list) => Some(list),
			_ => None,
		}
	}

	/// Entries of a map-shaped element.
	pub fn as_descriptor(&self) -> Option<&Descriptor> {
		match self {
			Self::Descriptor(desc) | Self::GlobalObject(desc) | Self::ObjectArray(desc) => Some(desc),
			_ => None,
		}
	}

	/// Encode the body (without tag) and return the number of bytes written.
	pub fn write<W: Write>(&self, out: &mut W) -> Result<usize> {
		match self {
			Self::Descriptor(desc) | Self::GlobalObject(desc) | Self::ObjectArray(desc) => desc.write(out),
			Self::List(list) | Self::Reference(list) => list.write(out),
			Self::Double(v) => write_f64(out, *v),
			Self::UnitFloat(v) => v.write(out),
			Self::UnitFloats(v) => v.write(out),
			Self::String(v) | Self::Name(v) => write_unicode(out, v, Padding::Align4),
			Self::Enumerated(v) => v.write(out),
			Self::Integer(v) | Self::Identifier(v) | Self::Index(v) => write_i32(out, *v),
			Self::LargeInteger(v) => write_i64(out, *v),
			Self::Boolean(v) => write_bytes(out, &[u8::from(*v)]),
			Self::Class1(v) | Self::Class2(v) | Self::Class3(v) => v.write(out),
			Self::RawData(v) | Self::Alias(v) | Self::Path(v) => write_length_block(out, v),
			Self::Property(v) => v.write(out),
			Self::EnumeratedReference(v) => v.write(out),
			Self::Offset(v) => v.write(out),
		}
	}

	/// Decode a body of the given tag from the start of `bytes`.
	pub fn from_bytes(tag: Tag, bytes: &[u8]) -> Result<Self> {
		Registry::standard().read_element(tag, bytes)
	}

	/// Encode the body (without tag) into a fresh buffer.
	pub fn to_bytes(&self) -> Result<Vec<u8>> {
		let mut out = Vec::new();
		self.write(&mut out)?;
		Ok(out)
	}
}
