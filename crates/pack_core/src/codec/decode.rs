use tracing::debug;

use crate::codec::bytes::Cursor;
use crate::codec::{FieldValue, Kind, PackError, Result, StructValue, U256, Value};

/// Resource limits applied while decoding untrusted payloads.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Maximum nesting depth, counted as in [`Value::depth`].
	pub max_depth: usize,
	/// Maximum accepted length or count prefix.
	pub max_len: usize,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			max_depth: 256,
			max_len: 64 * 1024 * 1024,
		}
	}
}

impl DecodeOptions {
	/// Preset that only stops at the end of input.
	pub fn unbounded() -> Self {
		Self {
			max_depth: usize::MAX,
			max_len: usize::MAX,
		}
	}
}

/// Decode one value from the start of `bytes` with default limits.
///
/// Trailing bytes after the value are ignored; use [`decode_prefix`] to learn
/// how many bytes were consumed.
pub fn decode_value(bytes: &[u8]) -> Result<Value> {
	decode_value_with(bytes, &DecodeOptions::default())
}

/// Decode one value from the start of `bytes`.
pub fn decode_value_with(bytes: &[u8], opt: &DecodeOptions) -> Result<Value> {
	decode_prefix(bytes, opt).map(|(value, _)| value)
}

/// Decode one value and return it together with the number of bytes consumed.
pub fn decode_prefix(bytes: &[u8], opt: &DecodeOptions) -> Result<(Value, usize)> {
	let mut decoder = Decoder {
		cursor: Cursor::new(bytes),
		opt,
	};
	match decoder.read_value(1) {
		Ok(value) => Ok((value, decoder.cursor.pos())),
		Err(err) => {
			debug!(len = bytes.len(), error = %err, "rejected pack payload");
			Err(err)
		}
	}
}

struct Decoder<'a, 'o> {
	cursor: Cursor<'a>,
	opt: &'o DecodeOptions,
}

impl Decoder<'_, '_> {
	fn read_value(&mut self, depth: usize) -> Result<Value> {
		if depth > self.opt.max_depth {
			return Err(PackError::DepthExceeded {
				max_depth: self.opt.max_depth,
			});
		}

		let at = self.cursor.pos();
		let tag = self.cursor.read_u8()?;
		let kind = Kind::from_tag(tag).ok_or(PackError::UnknownTag { tag, at })?;

		Ok(match kind {
			Kind::Bool => {
				let at = self.cursor.pos();
				match self.cursor.read_u8()? {
					0 => Value::Bool(false),
					1 => Value::Bool(true),
					byte => return Err(PackError::InvalidBool { at, byte }),
				}
			}
			Kind::U8 => Value::U8(self.cursor.read_u8()?),
			Kind::U16 => Value::U16(self.cursor.read_u16_be()?),
			Kind::U32 => Value::U32(self.cursor.read_u32_be()?),
			Kind::U64 => Value::U64(self.cursor.read_u64_be()?),
			Kind::U128 => Value::U128(self.cursor.read_u128_be()?),
			Kind::U256 => Value::U256(U256::from_be_bytes(self.cursor.read_array()?)),
			Kind::String => Value::String(self.read_string()?),
			Kind::Bytes => {
				let len = self.read_len()?;
				Value::Bytes(self.cursor.read_exact(len)?.to_vec())
			}
			Kind::Bytes32 => Value::Bytes32(self.cursor.read_array()?),
			Kind::Bytes65 => Value::Bytes65(self.cursor.read_array()?),
			Kind::Struct => Value::Struct(self.read_struct(depth)?),
			Kind::List => Value::List(self.read_list(depth)?),
		})
	}

	fn read_struct(&mut self, depth: usize) -> Result<StructValue> {
		let count = self.read_len()?;
		let mut fields = Vec::with_capacity(count.min(self.cursor.remaining()));
		for _ in 0..count {
			let name = self.read_string()?;
			let value = self.read_value(depth + 1).map_err(|err| err.in_field(name.as_str()))?;
			fields.push(FieldValue { name, value });
		}
		Ok(StructValue { fields })
	}

	fn read_list(&mut self, depth: usize) -> Result<Vec<Value>> {
		let count = self.read_len()?;
		let mut items = Vec::with_capacity(count.min(self.cursor.remaining()));
		for index in 0..count {
			items.push(self.read_value(depth + 1).map_err(|err| err.at_index(index))?);
		}
		Ok(items)
	}

	fn read_string(&mut self) -> Result<String> {
		let len = self.read_len()?;
		let at = self.cursor.pos();
		let raw = self.cursor.read_exact(len)?;
		String::from_utf8(raw.to_vec()).map_err(|_| PackError::InvalidUtf8 { at })
	}

	fn read_len(&mut self) -> Result<usize> {
		let at = self.cursor.pos();
		let len = self.cursor.read_u32_be()? as usize;
		if len > self.opt.max_len {
			return Err(PackError::LengthOverflow {
				at,
				len,
				max: self.opt.max_len,
			});
		}
		Ok(len)
	}
}
