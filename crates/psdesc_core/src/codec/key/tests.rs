use std::collections::HashSet;

use psdesc_testkit::StreamBuilder;

use crate::codec::{Decoder, Diagnostic, Key, KnownId, read_key, write_key};

#[test]
fn compact_known_code_resolves_to_identifier() {
	let bytes = StreamBuilder::new().compact_key(b"null").build();
	let mut dec = Decoder::new(&bytes);
	let key = read_key(&mut dec).expect("key reads");
	assert!(matches!(key, Key::Known(KnownId::Null)));
	assert!(dec.diagnostics().is_empty());
}

#[test]
fn compact_unknown_code_falls_back_to_bytes_with_diagnostic() {
	let bytes = StreamBuilder::new().compact_key(b"Zq9!").u32(7).build();
	let mut dec = Decoder::new(&bytes);
	let key = read_key(&mut dec).expect("fallback is not fatal");
	assert!(matches!(&key, Key::Bytes(raw) if raw == b"Zq9!"));
	assert_eq!(dec.diagnostics(), &[Diagnostic::UnknownKeyCode { at: 4, code: *b"Zq9!" }]);
	assert_eq!(dec.cursor().read_u32().expect("stream stays aligned"), 7);
}

#[test]
fn length_prefixed_key_reads_exact_bytes() {
	let bytes = StreamBuilder::new().long_key(b"textKey").build();
	let mut dec = Decoder::new(&bytes);
	let key = read_key(&mut dec).expect("key reads");
	assert_eq!(key.as_bytes(), b"textKey");
	assert_eq!(key.known(), None);
	assert_eq!(dec.cursor().remaining(), 0);
}

#[test]
fn known_identifier_writes_compact_form() {
	let mut out = Vec::new();
	let written = write_key(&mut out, &Key::Known(KnownId::RGBColor)).expect("write");
	assert_eq!(written, 8);
	assert_eq!(out, StreamBuilder::new().compact_key(b"RGBC").build());
}

#[test]
fn raw_bytes_spelling_known_code_are_canonicalized() {
	let mut out = Vec::new();
	write_key(&mut out, &Key::from(b"null")).expect("write");
	assert_eq!(out, StreamBuilder::new().compact_key(b"null").build());
	assert!(matches!(Key::from(b"null").canonical(), Key::Known(KnownId::Null)));
}

#[test]
fn arbitrary_bytes_write_length_prefix() {
	let mut out = Vec::new();
	let written = write_key(&mut out, &Key::from("layerID")).expect("write");
	assert_eq!(written, 11);
	assert_eq!(out, StreamBuilder::new().long_key(b"layerID").build());
}

#[test]
fn unknown_four_byte_key_keeps_length_prefix_on_write() {
	let mut out = Vec::new();
	write_key(&mut out, &Key::from(b"Zq9!")).expect("write");
	assert_eq!(out, StreamBuilder::new().long_key(b"Zq9!").build());
}

#[test]
fn equality_and_hash_follow_effective_bytes() {
	assert_eq!(Key::Known(KnownId::Name), Key::from("Nm  "));
	assert_ne!(Key::Known(KnownId::Name), Key::from("Nm"));

	let mut set = HashSet::new();
	set.insert(Key::Known(KnownId::Opacity));
	assert!(set.contains(&Key::from(b"Opct")));
}

#[test]
fn known_table_lookups_are_consistent() {
	for id in KnownId::ALL {
		assert_eq!(KnownId::from_code(id.code()), Some(*id), "{}", id.name());
		assert_eq!(KnownId::from_name(id.name()), Some(*id));
	}
	let codes: HashSet<_> = KnownId::ALL.iter().map(|id| id.code()).collect();
	assert_eq!(codes.len(), KnownId::ALL.len(), "codes are unique");
}

#[test]
fn display_uses_identifier_name_or_quoted_bytes() {
	assert_eq!(Key::Known(KnownId::Null).to_string(), "Null");
	assert_eq!(Key::from("abc").to_string(), "\"abc\"");
}
