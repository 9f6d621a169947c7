use crate::codec::Value;

/// Serialize a value tree into a fresh buffer.
///
/// Encoding is total: every length that reaches this point was checked by the
/// builder. Field and element order is exactly the tree order.
pub fn encode_value(value: &Value) -> Vec<u8> {
	let mut out = Vec::with_capacity(encoded_len(value));
	write_value(value, &mut out);
	out
}

/// Append the canonical encoding of `value` to `out`.
pub fn write_value(value: &Value, out: &mut Vec<u8>) {
	out.push(value.kind().tag());
	match value {
		Value::Bool(v) => out.push(u8::from(*v)),
		Value::U8(v) => out.push(*v),
		Value::U16(v) => out.extend_from_slice(&v.to_be_bytes()),
		Value::U32(v) => out.extend_from_slice(&v.to_be_bytes()),
		Value::U64(v) => out.extend_from_slice(&v.to_be_bytes()),
		Value::U128(v) => out.extend_from_slice(&v.to_be_bytes()),
		Value::U256(v) => out.extend_from_slice(v.as_be_bytes()),
		Value::String(v) => write_prefixed(v.as_bytes(), out),
		Value::Bytes(v) => write_prefixed(v, out),
		Value::Bytes32(v) => out.extend_from_slice(v),
		Value::Bytes65(v) => out.extend_from_slice(v),
		Value::Struct(item) => {
			write_len(item.fields.len(), out);
			for field in &item.fields {
				write_prefixed(field.name.as_bytes(), out);
				write_value(&field.value, out);
			}
		}
		Value::List(items) => {
			write_len(items.len(), out);
			for item in items {
				write_value(item, out);
			}
		}
	}
}

/// Exact number of bytes [`encode_value`] produces for `value`.
pub fn encoded_len(value: &Value) -> usize {
	1 + match value {
		Value::String(v) => 4 + v.len(),
		Value::Bytes(v) => 4 + v.len(),
		Value::Struct(item) => {
			4 + item
				.fields
				.iter()
				.map(|field| 4 + field.name.len() + encoded_len(&field.value))
				.sum::<usize>()
		}
		Value::List(items) => 4 + items.iter().map(encoded_len).sum::<usize>(),
		scalar => scalar.kind().fixed_width().unwrap_or(0),
	}
}

fn write_prefixed(bytes: &[u8], out: &mut Vec<u8>) {
	write_len(bytes.len(), out);
	out.extend_from_slice(bytes);
}

fn write_len(len: usize, out: &mut Vec<u8>) {
	// Built trees never carry lengths above u32::MAX; raw trees saturate.
	let len = u32::try_from(len).unwrap_or(u32::MAX);
	out.extend_from_slice(&len.to_be_bytes());
}
