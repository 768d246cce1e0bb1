use psdesc_testkit::StreamBuilder;

use crate::codec::{Codec, DecodeOptions, Decoder, Descriptor, DescriptorError, Diagnostic, Element, Enumerated, KnownId, List, decode_with, encode};

#[test]
fn diagnostics_from_nested_levels_are_collected_in_order() {
	let bytes = StreamBuilder::new()
		.unicode_padded("")
		.compact_key(b"AAAA")
		.u32(1)
		.long_key(b"list")
		.tag(b"VlLs")
		.u32(1)
		.tag(b"enum")
		.compact_key(b"BBBB")
		.compact_key(b"CCCC")
		.build();

	let report = decode_with(&bytes, &DecodeOptions::default()).expect("decodes");
	let codes: Vec<[u8; 4]> = report
		.diagnostics
		.iter()
		.filter_map(|item| match item {
			Diagnostic::UnknownKeyCode { code, .. } => Some(*code),
			_ => None,
		})
		.collect();
	assert_eq!(codes, [*b"AAAA", *b"BBBB", *b"CCCC"]);

	let list = report.descriptor.get("list").and_then(Element::as_list).expect("list");
	let Some(Element::Enumerated(Enumerated { type_id, value })) = list.get(0) else {
		panic!("expected enum item");
	};
	assert_eq!(type_id.as_bytes(), b"BBBB");
	assert_eq!(value.as_bytes(), b"CCCC");
}

#[test]
fn nested_restores_depth_after_error() {
	let bytes = [0_u8; 0];
	let mut dec = Decoder::with_options(
		&bytes,
		DecodeOptions {
			max_depth: 1,
			..DecodeOptions::default()
		},
	);
	let err = dec.nested(|dec| dec.nested(|_| Ok(()))).expect_err("second level exceeds");
	assert!(matches!(err, DescriptorError::DecodeDepthExceeded { max_depth: 1 }));
	dec.nested(|_| Ok(())).expect("depth was restored");
}

#[test]
fn encode_reports_bytes_written_to_sink() {
	let desc = Descriptor::new("name", KnownId::Null).with(
		"list",
		Element::List(List::new(vec![Element::String("abc".into()), Element::RawData(vec![1, 2, 3])])),
	);
	let mut sink = std::io::Cursor::new(Vec::new());
	let written = encode(&desc, &mut sink).expect("encodes");
	assert_eq!(written, sink.get_ref().len());
	assert_eq!(sink.into_inner(), desc.to_bytes().expect("encodes"));
}

#[test]
fn failing_sink_surfaces_io_error() {
	struct Full;
	impl std::io::Write for Full {
		fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
			Err(std::io::Error::new(std::io::ErrorKind::StorageFull, "full"))
		}
		fn flush(&mut self) -> std::io::Result<()> {
			Ok(())
		}
	}

	let err = encode(&Descriptor::default(), &mut Full).expect_err("sink refuses");
	assert!(matches!(err, DescriptorError::Io(_)));
}
