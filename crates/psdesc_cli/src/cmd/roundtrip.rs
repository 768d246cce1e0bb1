use std::path::PathBuf;

use psdesc::codec::{Codec, DecodeOptions, DescriptorBlock};

use crate::cmd::util::{decode_input, emit_json, read_input};

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	#[arg(long, default_value_t = 0)]
	pub offset: usize,
	#[arg(long)]
	pub versioned: bool,
}

/// Decode, re-encode, and compare against the consumed input bytes.
pub fn run(args: Args) -> psdesc::codec::Result<()> {
	let bytes = read_input(&args.file, args.offset)?;
	let report = decode_input(&bytes, args.versioned, DecodeOptions::default())?;

	let encoded = if args.versioned {
		DescriptorBlock::from(report.descriptor).to_bytes()?
	} else {
		report.descriptor.to_bytes()?
	};
	let original = &bytes[..report.consumed];
	let first_difference = original.iter().zip(&encoded).position(|(a, b)| a != b).or_else(|| {
		if original.len() == encoded.len() {
			None
		} else {
			Some(original.len().min(encoded.len()))
		}
	});
	if let Some(at) = first_difference {
		tracing::info!(at, "re-encoded bytes differ from input");
	}

	emit_json(&RoundtripJson {
		path: args.file.display().to_string(),
		consumed: report.consumed,
		written: encoded.len(),
		identical: first_difference.is_none(),
		first_difference,
		diagnostics: report.diagnostics.len(),
	});
	Ok(())
}

#[derive(serde::Serialize)]
struct RoundtripJson {
	path: String,
	consumed: usize,
	written: usize,
	identical: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	first_difference: Option<usize>,
	diagnostics: usize,
}
