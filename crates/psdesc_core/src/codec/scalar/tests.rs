use psdesc_testkit::StreamBuilder;

use crate::codec::{Codec, DescriptorError, Element, ErrorKind, Tag, Unit, UnitFloat, UnitFloats};

#[test]
fn unit_float_layout_is_code_then_double() {
	let value = UnitFloat {
		unit: Unit::Pixels,
		value: 12.25,
	};
	let bytes = value.to_bytes().expect("encodes");
	assert_eq!(bytes, StreamBuilder::new().raw(b"#Pxl").f64(12.25).build());
	assert_eq!(UnitFloat::from_bytes(&bytes).expect("decodes"), value);
}

#[test]
fn unknown_unit_is_format_error() {
	let bytes = StreamBuilder::new().raw(b"#Foo").f64(1.0).build();
	let err = UnitFloat::from_bytes(&bytes).expect_err("unknown unit");
	assert!(matches!(err, DescriptorError::UnknownUnit { unit, at: 0 } if unit == *b"#Foo"));
	assert_eq!(err.kind(), ErrorKind::Format);
}

#[test]
fn unit_floats_carry_count_and_values() {
	let value = UnitFloats {
		unit: Unit::Angle,
		values: vec![0.0, 90.0, -45.5],
	};
	let bytes = value.to_bytes().expect("encodes");
	assert_eq!(bytes, StreamBuilder::new().raw(b"#Ang").u32(3).f64(0.0).f64(90.0).f64(-45.5).build());
	assert_eq!(UnitFloats::from_bytes(&bytes).expect("decodes"), value);
}

#[test]
fn unit_floats_count_is_checked_against_input() {
	let bytes = StreamBuilder::new().raw(b"#Prc").u32(4).f64(1.0).build();
	let err = UnitFloats::from_bytes(&bytes).expect_err("three values missing");
	assert!(matches!(err, DescriptorError::UnexpectedEof { at: 4, need: 32, rem: 8 }));
}

#[test]
fn unit_codes_are_reversible() {
	for unit in Unit::ALL {
		assert_eq!(Unit::from_code(unit.code()), Some(*unit));
	}
}

#[test]
fn fixed_width_scalars_have_expected_layout() {
	let cases = [
		(Element::Double(-0.5), StreamBuilder::new().f64(-0.5).build()),
		(Element::Integer(-7), StreamBuilder::new().i32(-7).build()),
		(Element::LargeInteger(1 << 50), StreamBuilder::new().i64(1 << 50).build()),
		(Element::Boolean(true), vec![1]),
		(Element::Boolean(false), vec![0]),
	];
	for (element, bytes) in cases {
		assert_eq!(element.to_bytes().expect("encodes"), bytes, "{element:?}");
		assert_eq!(Element::from_bytes(element.tag(), &bytes).expect("decodes"), element);
	}
}

#[test]
fn nonzero_boolean_byte_reads_true() {
	assert_eq!(Element::from_bytes(Tag::Boolean, &[0x7F]).expect("decodes"), Element::Boolean(true));
}

#[test]
fn string_payload_is_padded() {
	let element = Element::String("odd".into());
	let bytes = element.to_bytes().expect("encodes");
	assert_eq!(bytes, StreamBuilder::new().unicode_padded("odd").build());
	assert_eq!(bytes.len(), 12);
}

#[test]
fn aliased_tags_share_layout_but_keep_identity() {
	let pairs = [
		(Element::Identifier(3), Element::Integer(3)),
		(Element::Index(3), Element::Integer(3)),
		(Element::Name("n".into()), Element::String("n".into())),
		(Element::Alias(vec![1, 2]), Element::RawData(vec![1, 2])),
		(Element::Path(vec![1, 2]), Element::RawData(vec![1, 2])),
	];
	for (alias, parent) in pairs {
		assert_eq!(alias.to_bytes().expect("alias"), parent.to_bytes().expect("parent"));
		assert_ne!(alias.tag(), parent.tag());
		assert_eq!(alias.as_scalar(), parent.as_scalar());
	}
}

#[test]
fn raw_data_is_length_prefixed() {
	let element = Element::RawData(b"\x00\xffabc".to_vec());
	let bytes = element.to_bytes().expect("encodes");
	assert_eq!(bytes, StreamBuilder::new().u32(5).raw(b"\x00\xffabc").build());
	assert_eq!(Element::from_bytes(Tag::RawData, &bytes).expect("decodes"), element);
}
