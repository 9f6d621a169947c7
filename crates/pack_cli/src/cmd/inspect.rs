use std::path::PathBuf;

use pack::codec::{DecodeOptions, PackError, decode_prefix};
use tracing::debug;

use crate::cmd::json::JsonValue;
use crate::cmd::print::{PrintOptions, print_value};
use crate::cmd::util::{hex, parse_hex, read_input};
use crate::error::Result;

#[derive(clap::Args)]
pub struct Args {
	/// Payload file, or `-` for stdin.
	pub path: PathBuf,
	/// Input is hex text rather than raw bytes.
	#[arg(long)]
	pub hex: bool,
	/// Print typed JSON instead of indented text.
	#[arg(long)]
	pub json: bool,
	/// Fail when bytes remain after the value.
	#[arg(long)]
	pub exact: bool,
	/// Shorter text output for large payloads.
	#[arg(long)]
	pub compact: bool,
	#[arg(long = "max-depth")]
	pub max_depth: Option<usize>,
	#[arg(long = "max-len")]
	pub max_len: Option<usize>,
}

#[derive(serde::Serialize)]
struct InspectJson {
	len: usize,
	consumed: usize,
	canonical: String,
	value: JsonValue,
}

/// Decode one payload and print its value tree.
pub fn run(args: Args) -> Result<()> {
	let Args {
		path,
		hex: hex_input,
		json,
		exact,
		compact,
		max_depth,
		max_len,
	} = args;

	let raw = read_input(&path)?;
	let bytes = if hex_input { parse_hex(&String::from_utf8_lossy(&raw))? } else { raw };

	let mut decode = DecodeOptions::default();
	if let Some(max_depth) = max_depth {
		decode.max_depth = max_depth;
	}
	if let Some(max_len) = max_len {
		decode.max_len = max_len;
	}

	let (value, consumed) = decode_prefix(&bytes, &decode)?;
	debug!(len = bytes.len(), consumed, kind = %value.kind(), "decoded payload");
	if exact && consumed != bytes.len() {
		return Err(PackError::TrailingBytes { consumed, len: bytes.len() }.into());
	}

	if json {
		let out = InspectJson {
			len: bytes.len(),
			consumed,
			canonical: hex(&bytes[..consumed]),
			value: JsonValue::from(&value),
		};
		println!("{}", serde_json::to_string_pretty(&out)?);
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("len: {}", bytes.len());
	println!("kind: {}", value.kind());
	println!("depth: {}", value.depth());
	if consumed != bytes.len() {
		println!("trailing: {}", bytes.len() - consumed);
	}
	println!("value:");
	let print = if compact { PrintOptions::compact() } else { PrintOptions::default() };
	print_value(&value, 2, print);
	Ok(())
}
