use psdesc_testkit::StreamBuilder;

use crate::codec::{Decoder, DescriptorError, Element, ErrorKind, Registry, Tag};

#[test]
fn standard_registry_covers_every_tag() {
	let registry = Registry::standard();
	assert_eq!(registry.len(), Tag::ALL.len());
	for tag in Tag::ALL {
		let row = registry.dispatch(tag.code(), 0).expect("tag is registered");
		assert_eq!(row.tag, *tag);
	}
	assert_eq!(registry.tags().collect::<Vec<_>>(), Tag::ALL.to_vec());
}

#[test]
fn tag_codes_are_unique_and_reversible() {
	for tag in Tag::ALL {
		assert_eq!(Tag::from_code(tag.code()), Some(*tag), "{}", tag.name());
	}
	assert_eq!(Tag::from_code(*b"zzzz"), None);
}

#[test]
fn dispatch_rejects_unregistered_code() {
	let err = Registry::standard().dispatch(*b"XXXX", 12).expect_err("not registered");
	assert!(matches!(err, DescriptorError::UnknownTag { tag, at: 12 } if tag == *b"XXXX"));
	assert_eq!(err.kind(), ErrorKind::UnknownTag);
}

#[test]
fn custom_registry_only_knows_what_it_registers() {
	let mut registry = Registry::new();
	assert!(registry.is_empty());
	registry.register(Tag::Integer, |dec| Ok(Some(Element::Integer(dec.cursor().read_i32()? * 2))));

	let bytes = StreamBuilder::new().tag(b"long").i32(21).tag(b"doub").f64(1.0).build();
	let mut dec = Decoder::with_registry(&bytes, &registry, Default::default());
	let (tag, value) = dec.read_value().expect("long is registered");
	assert_eq!(tag, Tag::Integer);
	assert_eq!(value, Some(Element::Integer(42)));

	let err = dec.read_value().expect_err("doub is not registered here");
	assert!(matches!(err, DescriptorError::UnknownTag { at: 8, .. }));
}

#[test]
fn register_replaces_existing_row() {
	let mut registry = Registry::new();
	registry.register(Tag::Boolean, |_| Ok(None));
	registry.register(Tag::Boolean, |dec| Ok(Some(Element::Boolean(dec.cursor().read_u8()? == 0))));
	assert_eq!(registry.len(), 1);

	let bytes = [b'b', b'o', b'o', b'l', 0];
	let mut dec = Decoder::with_registry(&bytes, &registry, Default::default());
	assert_eq!(dec.read_value().expect("reads").1, Some(Element::Boolean(true)));
}

#[test]
fn read_element_reports_reader_without_value() {
	let mut registry = Registry::new();
	registry.register(Tag::RawData, |dec| {
		dec.cursor().read_length_block()?;
		Ok(None)
	});
	registry.register(Tag::Integer, |dec| Ok(Some(Element::Integer(dec.cursor().read_i32()?))));

	let err = registry.read_element(Tag::RawData, &StreamBuilder::new().u32(0).build()).expect_err("reader yields nothing");
	assert_eq!(err.kind(), ErrorKind::Format);
	assert!(matches!(err, DescriptorError::NoValue { tag: Tag::RawData }));
	assert_eq!(err.to_string(), "reader for tag tdta produced no value");

	let value = registry.read_element(Tag::Integer, &StreamBuilder::new().i32(-2).build()).expect("decodes");
	assert_eq!(value, Element::Integer(-2));
}
