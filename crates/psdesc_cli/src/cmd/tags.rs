use psdesc::codec::Registry;

use crate::cmd::util::{emit_json, render_code};

/// List every registered value tag.
pub fn run(json: bool) -> psdesc::codec::Result<()> {
	let rows: Vec<TagJson> = Registry::standard()
		.tags()
		.map(|tag| TagJson {
			code: render_code(&tag.code()),
			name: tag.name(),
		})
		.collect();

	if json {
		emit_json(&rows);
		return Ok(());
	}

	for row in &rows {
		println!("{:<6}{}", row.code, row.name);
	}
	Ok(())
}

#[derive(serde::Serialize)]
struct TagJson {
	code: String,
	name: &'static str,
}
