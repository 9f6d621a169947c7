use crate::codec::{FieldValue, Kind, OmitPolicy, Pack, PackError, Record, Result, StructValue, Value, encode_value, resolve};

/// Largest length or count the wire format can carry.
pub(crate) const MAX_WIRE_LEN: usize = u32::MAX as usize;

/// Build the value tree of any [`Pack`] type.
pub fn build<T: Pack + ?Sized>(value: &T) -> Result<Value> {
	value.build()
}

/// Build then encode.
pub fn encode<T: Pack + ?Sized>(value: &T) -> Result<Vec<u8>> {
	Ok(encode_value(&value.build()?))
}

/// Build a struct value from a [`Record`] by walking its resolved descriptors.
///
/// `OmitIfZero` fields holding their zero value are left out. Field failures
/// carry the field's wire name.
pub fn build_record<R: Record + 'static>(record: &R) -> Result<Value> {
	let descriptors = resolve::<R>()?;
	let mut fields = Vec::with_capacity(descriptors.len());
	for desc in descriptors.iter() {
		let Some(field) = record.field(desc.index) else {
			continue;
		};
		if desc.policy == OmitPolicy::OmitIfZero && field.is_zero() {
			continue;
		}

		let value = field.build().map_err(|err| err.in_field(desc.wire_name))?;
		fields.push(FieldValue {
			name: desc.wire_name.to_owned(),
			value,
		});
	}
	Ok(Value::Struct(StructValue { fields }))
}

/// Build each element of a homogeneous sequence into a list.
pub(crate) fn build_list<T: Pack>(items: &[T]) -> Result<Value> {
	check_sequence_len(Kind::List, items.len())?;
	let mut out = Vec::with_capacity(items.len());
	for (index, item) in items.iter().enumerate() {
		out.push(item.build().map_err(|err| err.at_index(index))?);
	}
	Ok(Value::List(out))
}

/// Reject empty and oversized variable-length sequences.
pub(crate) fn check_sequence_len(kind: Kind, len: usize) -> Result<()> {
	if len == 0 {
		return Err(PackError::EmptySequence { kind });
	}
	check_wire_len(len)
}

pub(crate) fn check_wire_len(len: usize) -> Result<()> {
	if len > MAX_WIRE_LEN {
		return Err(PackError::LengthOverflow {
			at: 0,
			len,
			max: MAX_WIRE_LEN,
		});
	}
	Ok(())
}

/// Check that an already-built tree could have come out of the builder.
pub(crate) fn validate(value: &Value) -> Result<()> {
	match value {
		Value::Bytes(bytes) => check_sequence_len(Kind::Bytes, bytes.len()),
		Value::String(text) => check_wire_len(text.len()),
		Value::Struct(item) => validate_struct(item),
		Value::List(items) => {
			check_sequence_len(Kind::List, items.len())?;
			for (index, item) in items.iter().enumerate() {
				validate(item).map_err(|err| err.at_index(index))?;
			}
			Ok(())
		}
		Value::Bool(_)
		| Value::U8(_)
		| Value::U16(_)
		| Value::U32(_)
		| Value::U64(_)
		| Value::U128(_)
		| Value::U256(_)
		| Value::Bytes32(_)
		| Value::Bytes65(_) => Ok(()),
	}
}

pub(crate) fn validate_struct(item: &StructValue) -> Result<()> {
	check_wire_len(item.fields.len())?;
	for field in &item.fields {
		check_wire_len(field.name.len()).map_err(|err| err.in_field(field.name.as_str()))?;
		validate(&field.value).map_err(|err| err.in_field(field.name.as_str()))?;
	}
	Ok(())
}

#[cfg(test)]
mod tests;
