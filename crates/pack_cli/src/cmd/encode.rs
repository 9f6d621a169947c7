use std::path::PathBuf;

use pack::codec::{Value, encode};
use tracing::debug;

use crate::cmd::json::JsonValue;
use crate::cmd::util::{hex, read_input};
use crate::error::Result;

#[derive(clap::Args)]
pub struct Args {
	/// Typed JSON file, or `-` for stdin.
	pub path: PathBuf,
	/// Write raw payload bytes here instead of printing hex.
	#[arg(long)]
	pub out: Option<PathBuf>,
}

/// Encode one typed JSON value.
pub fn run(args: Args) -> Result<()> {
	let Args { path, out } = args;

	let json: JsonValue = serde_json::from_slice(&read_input(&path)?)?;
	let value = Value::try_from(json)?;
	let bytes = encode(&value)?;
	debug!(len = bytes.len(), kind = %value.kind(), "encoded payload");

	match out {
		Some(out) => std::fs::write(out, &bytes)?,
		None => println!("{}", hex(&bytes)),
	}
	Ok(())
}
