use pack::codec::{Kind, StructValue, U256, Value};
use serde::{Deserialize, Serialize};

use crate::cmd::util::{hex, parse_hex};
use crate::error::{CliError, Result};

/// Externally tagged JSON form of a [`Value`].
///
/// Integers up to 64 bits are JSON numbers. `u128` and `u256` are strings
/// holding a decimal or `0x` hex literal, since JSON numbers cannot carry them
/// exactly. Byte strings are `0x` hex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JsonValue {
	/// `{"bool": true}`.
	Bool(bool),
	/// `{"u8": 1}`.
	U8(u8),
	/// `{"u16": 1}`.
	U16(u16),
	/// `{"u32": 1}`.
	U32(u32),
	/// `{"u64": 1}`.
	U64(u64),
	/// `{"u128": "123"}`.
	U128(String),
	/// `{"u256": "0x7b"}`.
	U256(String),
	/// `{"string": "text"}`.
	String(String),
	/// `{"bytes": "0x0102"}`.
	Bytes(String),
	/// `{"bytes32": "0x.."}` with exactly 32 bytes.
	Bytes32(String),
	/// `{"bytes65": "0x.."}` with exactly 65 bytes.
	Bytes65(String),
	/// `{"struct": [{"name": "x", "value": {...}}]}`.
	Struct(Vec<JsonField>),
	/// `{"list": [...]}`.
	List(Vec<JsonValue>),
}

/// One named struct member in [`JsonValue::Struct`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonField {
	/// Wire name.
	pub name: String,
	/// Member value.
	pub value: JsonValue,
}

impl From<&Value> for JsonValue {
	fn from(value: &Value) -> Self {
		match value {
			Value::Bool(v) => Self::Bool(*v),
			Value::U8(v) => Self::U8(*v),
			Value::U16(v) => Self::U16(*v),
			Value::U32(v) => Self::U32(*v),
			Value::U64(v) => Self::U64(*v),
			Value::U128(v) => Self::U128(v.to_string()),
			Value::U256(v) => Self::U256(format!("{v:#x}")),
			Value::String(v) => Self::String(v.clone()),
			Value::Bytes(v) => Self::Bytes(hex(v)),
			Value::Bytes32(v) => Self::Bytes32(hex(v)),
			Value::Bytes65(v) => Self::Bytes65(hex(v)),
			Value::Struct(item) => Self::Struct(
				item.fields
					.iter()
					.map(|field| JsonField {
						name: field.name.clone(),
						value: Self::from(&field.value),
					})
					.collect(),
			),
			Value::List(items) => Self::List(items.iter().map(Self::from).collect()),
		}
	}
}

impl TryFrom<JsonValue> for Value {
	type Error = CliError;

	fn try_from(value: JsonValue) -> Result<Self> {
		Ok(match value {
			JsonValue::Bool(v) => Value::Bool(v),
			JsonValue::U8(v) => Value::U8(v),
			JsonValue::U16(v) => Value::U16(v),
			JsonValue::U32(v) => Value::U32(v),
			JsonValue::U64(v) => Value::U64(v),
			JsonValue::U128(text) => Value::U128(parse_u128(&text)?),
			JsonValue::U256(text) => Value::U256(parse_u256(&text)?),
			JsonValue::String(v) => Value::String(v),
			JsonValue::Bytes(text) => Value::Bytes(parse_hex(&text)?),
			JsonValue::Bytes32(text) => Value::Bytes32(fixed(Kind::Bytes32, &text)?),
			JsonValue::Bytes65(text) => Value::Bytes65(fixed(Kind::Bytes65, &text)?),
			JsonValue::Struct(fields) => {
				let mut item = StructValue::new();
				for field in fields {
					item.push(field.name, Value::try_from(field.value)?);
				}
				Value::Struct(item)
			}
			JsonValue::List(items) => Value::List(items.into_iter().map(Value::try_from).collect::<Result<_>>()?),
		})
	}
}

fn parse_u128(text: &str) -> Result<u128> {
	let trimmed = text.trim();
	let parsed = match trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
		Some(digits) => u128::from_str_radix(digits, 16),
		None => trimmed.parse::<u128>(),
	};
	parsed.map_err(|_| CliError::InvalidNumber {
		kind: Kind::U128,
		value: text.to_owned(),
	})
}

fn parse_u256(text: &str) -> Result<U256> {
	text.trim().parse::<U256>().map_err(|_| CliError::InvalidNumber {
		kind: Kind::U256,
		value: text.to_owned(),
	})
}

fn fixed<const N: usize>(kind: Kind, text: &str) -> Result<[u8; N]> {
	let bytes = parse_hex(text)?;
	let found = bytes.len();
	<[u8; N]>::try_from(bytes).map_err(|_| CliError::WrongLength { kind, expected: N, found })
}

#[cfg(test)]
mod tests;
