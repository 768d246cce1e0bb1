use psdesc::codec::{Descriptor, Element, Key};

use crate::cmd::util::render_code;

/// Output truncation limits for decoded trees.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of entries printed for a single descriptor.
	pub max_entries: usize,
	/// Maximum number of Unicode scalar values printed for strings.
	pub max_string_len: usize,
	/// Maximum number of items printed for lists and arrays.
	pub max_items: usize,
	/// Maximum recursive print depth for nested containers.
	pub max_print_depth: u32,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_entries: 80,
			max_string_len: 200,
			max_items: 16,
			max_print_depth: 8,
		}
	}
}

/// Render a descriptor tree as indented text lines.
pub fn render_descriptor(desc: &Descriptor, options: PrintOptions) -> Vec<String> {
	let mut out = Vec::new();
	descriptor_lines(desc, 0, 0, options, &mut out);
	out
}

fn descriptor_lines(desc: &Descriptor, indent: usize, depth: u32, options: PrintOptions, out: &mut Vec<String>) {
	let pad = " ".repeat(indent);
	let header = format!("{}({})", render_key(&desc.class_id), truncate(&desc.name, options.max_string_len));
	if depth >= options.max_print_depth {
		out.push(format!("{pad}{header} {{ ... {} entries }}", desc.len()));
		return;
	}

	out.push(format!("{pad}{header} {{"));
	for entry in desc.entries().iter().take(options.max_entries) {
		let label = format!("{pad}  {}", render_key(&entry.key));
		match &entry.value {
			Some(value) => element_lines(label, value, indent + 2, depth + 1, options, out),
			None => out.push(format!("{label} = <none>")),
		}
	}
	if desc.len() > options.max_entries {
		out.push(format!("{pad}  ... {} more entries", desc.len() - options.max_entries));
	}
	out.push(format!("{pad}}}"));
}

fn element_lines(label: String, value: &Element, indent: usize, depth: u32, options: PrintOptions, out: &mut Vec<String>) {
	let tag = render_code(&value.tag().code());
	if let Some(desc) = value.as_descriptor() {
		out.push(format!("{label}: {tag} ="));
		descriptor_lines(desc, indent + 2, depth, options, out);
		return;
	}

	if let Some(list) = value.as_list() {
		if depth >= options.max_print_depth {
			out.push(format!("{label}: {tag} = [... {} items]", list.len()));
			return;
		}
		out.push(format!("{label}: {tag} = ["));
		let pad = " ".repeat(indent + 2);
		for (idx, item) in list.iter().take(options.max_items).enumerate() {
			element_lines(format!("{pad}[{idx}]"), item, indent + 2, depth + 1, options, out);
		}
		if list.len() > options.max_items {
			out.push(format!("{pad}... {} more", list.len() - options.max_items));
		}
		out.push(format!("{}]", " ".repeat(indent)));
		return;
	}

	out.push(format!("{label}: {tag} = {}", render_leaf(value, options)));
}

fn render_leaf(value: &Element, options: PrintOptions) -> String {
	match value {
		Element::Double(v) => v.to_string(),
		Element::Integer(v) | Element::Identifier(v) | Element::Index(v) => v.to_string(),
		Element::LargeInteger(v) => v.to_string(),
		Element::Boolean(v) => v.to_string(),
		Element::String(v) | Element::Name(v) => format!("\"{}\"", truncate(v, options.max_string_len)),
		Element::RawData(v) | Element::Alias(v) | Element::Path(v) => format!("bytes[{}]", v.len()),
		Element::UnitFloat(v) => format!("{} {}", v.value, render_code(&v.unit.code())),
		Element::UnitFloats(v) => {
			let shown: Vec<String> = v.values.iter().take(options.max_items).map(f64::to_string).collect();
			let more = if v.values.len() > options.max_items { ", ..." } else { "" };
			format!("[{}{more}] {}", shown.join(", "), render_code(&v.unit.code()))
		}
		Element::Enumerated(v) => format!("{}.{}", render_key(&v.type_id), render_key(&v.value)),
		Element::Class1(v) | Element::Class2(v) | Element::Class3(v) => format!("class {} \"{}\"", render_key(&v.class_id), v.name),
		Element::Property(v) => format!("{}.{} \"{}\"", render_key(&v.class_id), render_key(&v.key_id), v.name),
		Element::EnumeratedReference(v) => format!(
			"{} {}.{} \"{}\"",
			render_key(&v.class_id),
			render_key(&v.type_id),
			render_key(&v.value),
			v.name
		),
		Element::Offset(v) => format!("{} +{} \"{}\"", render_key(&v.class_id), v.offset, v.name),
		Element::Descriptor(_) | Element::GlobalObject(_) | Element::ObjectArray(_) | Element::List(_) | Element::Reference(_) => String::new(),
	}
}

/// Render a key as its well-known name or its quoted bytes.
pub fn render_key(key: &Key) -> String {
	match key.known() {
		Some(id) => id.name().to_owned(),
		None => format!("'{}'", render_code(key.as_bytes())),
	}
}

/// Convert a descriptor tree into order-preserving JSON.
pub fn descriptor_to_json(desc: &Descriptor) -> serde_json::Value {
	let items: Vec<serde_json::Value> = desc
		.entries()
		.iter()
		.map(|entry| {
			let (tag, value) = match &entry.value {
				Some(value) => (serde_json::json!(render_code(&value.tag().code())), element_to_json(value)),
				None => (serde_json::Value::Null, serde_json::Value::Null),
			};
			serde_json::json!({ "key": key_to_json(&entry.key), "tag": tag, "value": value })
		})
		.collect();

	serde_json::json!({
		"name": desc.name,
		"class": key_to_json(&desc.class_id),
		"items": items,
	})
}

fn key_to_json(key: &Key) -> serde_json::Value {
	match key.known() {
		Some(id) => serde_json::json!({ "known": id.name(), "code": render_code(id.code()) }),
		None => serde_json::json!({ "bytes": render_code(key.as_bytes()) }),
	}
}

/// Convert one element into JSON.
pub fn element_to_json(value: &Element) -> serde_json::Value {
	use serde_json::json;

	match value {
		Element::Descriptor(v) | Element::GlobalObject(v) | Element::ObjectArray(v) => descriptor_to_json(v),
		Element::List(v) | Element::Reference(v) => {
			let items: Vec<serde_json::Value> = v
				.iter()
				.map(|item| json!({ "tag": render_code(&item.tag().code()), "value": element_to_json(item) }))
				.collect();
			serde_json::Value::Array(items)
		}
		Element::Double(v) => json!(v),
		Element::Integer(v) | Element::Identifier(v) | Element::Index(v) => json!(v),
		Element::LargeInteger(v) => json!(v),
		Element::Boolean(v) => json!(v),
		Element::String(v) | Element::Name(v) => json!(v),
		Element::RawData(v) | Element::Alias(v) | Element::Path(v) => json!(v),
		Element::UnitFloat(v) => json!({ "unit": render_code(&v.unit.code()), "value": v.value }),
		Element::UnitFloats(v) => json!({ "unit": render_code(&v.unit.code()), "values": v.values }),
		Element::Enumerated(v) => json!({ "type": key_to_json(&v.type_id), "enum": key_to_json(&v.value) }),
		Element::Class1(v) | Element::Class2(v) | Element::Class3(v) => json!({ "name": v.name, "class": key_to_json(&v.class_id) }),
		Element::Property(v) => json!({ "name": v.name, "class": key_to_json(&v.class_id), "key": key_to_json(&v.key_id) }),
		Element::EnumeratedReference(v) => json!({
			"name": v.name,
			"class": key_to_json(&v.class_id),
			"type": key_to_json(&v.type_id),
			"enum": key_to_json(&v.value),
		}),
		Element::Offset(v) => json!({ "name": v.name, "class": key_to_json(&v.class_id), "offset": v.offset }),
	}
}

fn truncate(input: &str, max_len: usize) -> String {
	if input.chars().count() <= max_len {
		return input.to_owned();
	}
	let out: String = input.chars().take(max_len).collect();
	format!("{out}...")
}
