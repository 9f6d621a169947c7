use std::fmt::Write;

use pack::codec::Value;

use crate::cmd::util::hex;

/// Output truncation limits for printed value trees.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of fields printed for a single struct.
	pub max_fields_per_struct: usize,
	/// Maximum number of Unicode scalar values printed for strings.
	pub max_string_len: usize,
	/// Maximum number of elements printed for lists.
	pub max_list_items: usize,
	/// Maximum number of bytes shown for byte strings.
	pub max_bytes_shown: usize,
	/// Maximum recursive print depth for nested lists/structs.
	pub max_print_depth: usize,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_fields_per_struct: 80,
			max_string_len: 200,
			max_list_items: 16,
			max_bytes_shown: 65,
			max_print_depth: 8,
		}
	}
}

impl PrintOptions {
	/// Preset for a quick look at large payloads.
	pub fn compact() -> Self {
		Self {
			max_fields_per_struct: 20,
			max_string_len: 60,
			max_list_items: 4,
			max_bytes_shown: 16,
			max_print_depth: 3,
		}
	}
}

/// Print one value tree to stdout.
pub fn print_value(value: &Value, indent: usize, options: PrintOptions) {
	let mut out = String::new();
	render_value(&mut out, value, indent, 0, options);
	print!("{out}");
}

/// Render one value tree as indented text, one line per scalar.
pub fn render_value(out: &mut String, value: &Value, indent: usize, depth: usize, options: PrintOptions) {
	let pad = " ".repeat(indent);
	match value {
		Value::Bool(v) => line(out, &pad, format_args!("bool {v}")),
		Value::U8(v) => line(out, &pad, format_args!("u8 {v}")),
		Value::U16(v) => line(out, &pad, format_args!("u16 {v}")),
		Value::U32(v) => line(out, &pad, format_args!("u32 {v}")),
		Value::U64(v) => line(out, &pad, format_args!("u64 {v}")),
		Value::U128(v) => line(out, &pad, format_args!("u128 {v}")),
		Value::U256(v) => line(out, &pad, format_args!("u256 {v}")),
		Value::String(v) => line(out, &pad, format_args!("string {:?}", truncate(v, options.max_string_len))),
		Value::Bytes(v) => line(out, &pad, format_args!("bytes[{}] {}", v.len(), truncate_bytes(v, options.max_bytes_shown))),
		Value::Bytes32(v) => line(out, &pad, format_args!("bytes32 {}", truncate_bytes(v, options.max_bytes_shown))),
		Value::Bytes65(v) => line(out, &pad, format_args!("bytes65 {}", truncate_bytes(v, options.max_bytes_shown))),
		Value::List(items) => {
			if depth >= options.max_print_depth {
				line(out, &pad, format_args!("list[{}] [ ... ]", items.len()));
				return;
			}
			line(out, &pad, format_args!("list[{}] [", items.len()));
			for item in items.iter().take(options.max_list_items) {
				render_value(out, item, indent + 2, depth + 1, options);
			}
			if items.len() > options.max_list_items {
				line(out, &pad, format_args!("  ... {} more", items.len() - options.max_list_items));
			}
			line(out, &pad, format_args!("]"));
		}
		Value::Struct(item) => {
			if depth >= options.max_print_depth {
				line(out, &pad, format_args!("struct[{}] {{ ... }}", item.len()));
				return;
			}
			line(out, &pad, format_args!("struct[{}] {{", item.len()));
			for field in item.fields.iter().take(options.max_fields_per_struct) {
				let _ = write!(out, "{pad}  {} = ", field.name);
				if matches!(field.value, Value::Struct(_) | Value::List(_)) {
					out.push('\n');
					render_value(out, &field.value, indent + 4, depth + 1, options);
				} else {
					render_value(out, &field.value, 0, depth + 1, options);
				}
			}
			if item.len() > options.max_fields_per_struct {
				line(out, &pad, format_args!("  ... {} more fields", item.len() - options.max_fields_per_struct));
			}
			line(out, &pad, format_args!("}}"));
		}
	}
}

fn line(out: &mut String, pad: &str, args: std::fmt::Arguments<'_>) {
	let _ = writeln!(out, "{pad}{args}");
}

fn truncate(input: &str, max_len: usize) -> String {
	if input.chars().count() <= max_len {
		return input.to_owned();
	}
	let out: String = input.chars().take(max_len).collect();
	format!("{out}...")
}

fn truncate_bytes(bytes: &[u8], max_len: usize) -> String {
	if bytes.len() <= max_len {
		return hex(bytes);
	}
	format!("{}...", hex(&bytes[..max_len]))
}
