use std::path::PathBuf;

use psdesc::codec::DecodeOptions;

use crate::cmd::print::{PrintOptions, descriptor_to_json, render_descriptor};
use crate::cmd::util::{decode_input, emit_json, read_input};

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	#[arg(long, default_value_t = 0)]
	pub offset: usize,
	#[arg(long)]
	pub versioned: bool,
	#[arg(long)]
	pub json: bool,
	#[arg(long = "max-depth")]
	pub max_depth: Option<u32>,
	#[arg(long)]
	pub strict: bool,
}

/// Decode one descriptor and print it as text or JSON.
pub fn run(args: Args) -> psdesc::codec::Result<()> {
	let Args {
		file: path,
		offset,
		versioned,
		json,
		max_depth,
		strict,
	} = args;

	let mut decode = DecodeOptions {
		reject_trailing: strict,
		..DecodeOptions::default()
	};
	if let Some(max_depth) = max_depth {
		decode.max_depth = max_depth;
	}

	let bytes = read_input(&path, offset)?;
	let report = decode_input(&bytes, versioned, decode)?;
	tracing::debug!(path = %path.display(), consumed = report.consumed, "decoded descriptor");

	if json {
		emit_json(&ShowJson {
			path: path.display().to_string(),
			offset,
			consumed: report.consumed,
			diagnostics: report.diagnostics.iter().map(ToString::to_string).collect(),
			descriptor: descriptor_to_json(&report.descriptor),
		});
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("offset: {offset}");
	println!("consumed: {}", report.consumed);
	for diagnostic in &report.diagnostics {
		println!("warning: {diagnostic}");
	}
	for line in render_descriptor(&report.descriptor, PrintOptions::default()) {
		println!("{line}");
	}
	Ok(())
}

#[derive(serde::Serialize)]
struct ShowJson {
	path: String,
	offset: usize,
	consumed: usize,
	diagnostics: Vec<String>,
	descriptor: serde_json::Value,
}

#[cfg(test)]
mod tests;
