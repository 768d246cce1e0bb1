use psdesc::codec::{Codec, Descriptor, Element, KnownId, List};

use crate::cmd::test_support::{run_psdesc_error, run_psdesc_json, scratch_descriptor, scratch_file};

fn sample() -> Descriptor {
	Descriptor::new("", KnownId::Null)
		.with(b"Nm  ", Element::String("Layer 1".into()))
		.with("items", Element::List(List::new(vec![Element::Integer(5), Element::Boolean(true)])))
}

#[test]
fn show_json_output_is_valid_and_structured() {
	let file = scratch_descriptor("show_plain.bin", &[], &sample(), false);
	let json = run_psdesc_json(&["show", &file, "--json"]);

	assert_eq!(json["consumed"], sample().to_bytes().expect("encodes").len());
	assert_eq!(json["descriptor"]["class"]["known"], "Null");
	assert_eq!(json["descriptor"]["items"][0]["value"], "Layer 1");
	assert_eq!(json["descriptor"]["items"][1]["tag"], "VlLs");
	assert!(json["diagnostics"].as_array().is_some_and(Vec::is_empty));
}

#[test]
fn show_honours_offset_and_version_prefix() {
	let file = scratch_descriptor("show_versioned.bin", &[0xAB; 3], &sample(), true);
	let json = run_psdesc_json(&["show", &file, "--offset", "3", "--versioned", "--json"]);
	assert_eq!(json["offset"], 3);
	assert_eq!(json["descriptor"]["items"][0]["key"]["known"], "Name");
}

#[test]
fn roundtrip_reports_identical_bytes() {
	let file = scratch_descriptor("roundtrip.bin", &[], &sample(), false);
	let json = run_psdesc_json(&["roundtrip", &file]);
	assert_eq!(json["identical"], true);
	assert_eq!(json["consumed"], json["written"]);
	assert!(json.get("first_difference").is_none());
}

#[test]
fn roundtrip_reports_canonicalized_key() {
	let mut bytes = Vec::new();
	bytes.extend_from_slice(&0_u32.to_be_bytes());
	bytes.extend_from_slice(&4_u32.to_be_bytes());
	bytes.extend_from_slice(b"null");
	bytes.extend_from_slice(&0_u32.to_be_bytes());
	let file = scratch_file("roundtrip_canonical.bin", &bytes);

	let json = run_psdesc_json(&["roundtrip", &file]);
	assert_eq!(json["identical"], false);
	assert_eq!(json["first_difference"], 7);
}

#[test]
fn tags_json_lists_registry() {
	let json = run_psdesc_json(&["tags", "--json"]);
	let rows = json.as_array().expect("array");
	assert_eq!(rows.len(), 25);
	assert_eq!(rows[0]["code"], "Objc");
	assert!(rows.iter().any(|row| row["name"] == "EnumeratedReference"));
}

#[test]
fn unknown_tag_fails_with_message() {
	let mut bytes = Vec::new();
	for word in [0_u32, 0] {
		bytes.extend_from_slice(&word.to_be_bytes());
	}
	bytes.extend_from_slice(b"null");
	bytes.extend_from_slice(&1_u32.to_be_bytes());
	bytes.extend_from_slice(&1_u32.to_be_bytes());
	bytes.extend_from_slice(b"k");
	bytes.extend_from_slice(b"????");
	let file = scratch_file("unknown_tag.bin", &bytes);

	let error = run_psdesc_error(&["show", &file]);
	assert_eq!(error, "error: unknown value tag [63, 63, 63, 63] at offset 21");
}
