use std::io::Read;
use std::path::Path;

use crate::error::{CliError, Result};

/// Read a whole file, or stdin when `path` is `-`.
pub(crate) fn read_input(path: &Path) -> Result<Vec<u8>> {
	if path.as_os_str() == "-" {
		let mut out = Vec::new();
		std::io::stdin().lock().read_to_end(&mut out)?;
		return Ok(out);
	}
	Ok(std::fs::read(path)?)
}

/// Parse hex text with an optional `0x` prefix. ASCII whitespace is ignored.
pub(crate) fn parse_hex(text: &str) -> Result<Vec<u8>> {
	let text = text.trim();
	let text = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")).unwrap_or(text);
	let digits: Vec<u8> = text.bytes().filter(|byte| !byte.is_ascii_whitespace()).collect();
	if digits.len() % 2 != 0 {
		return Err(CliError::InvalidHex {
			reason: format!("odd number of digits ({})", digits.len()),
		});
	}

	digits
		.chunks_exact(2)
		.map(|pair| Ok((hex_digit(pair[0])? << 4) | hex_digit(pair[1])?))
		.collect()
}

fn hex_digit(byte: u8) -> Result<u8> {
	match byte {
		b'0'..=b'9' => Ok(byte - b'0'),
		b'a'..=b'f' => Ok(byte - b'a' + 10),
		b'A'..=b'F' => Ok(byte - b'A' + 10),
		_ => Err(CliError::InvalidHex {
			reason: format!("unexpected character {:?}", char::from(byte)),
		}),
	}
}

/// Render bytes as `0x`-prefixed lowercase hex.
pub(crate) fn hex(bytes: &[u8]) -> String {
	let mut out = String::with_capacity(2 + bytes.len() * 2);
	out.push_str("0x");
	for byte in bytes {
		out.push_str(&format!("{byte:02x}"));
	}
	out
}

#[cfg(test)]
mod tests;
