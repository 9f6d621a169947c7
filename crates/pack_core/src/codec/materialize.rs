use crate::codec::{DecodeOptions, Kind, Pack, PackError, Record, Result, Value, decode_prefix, decode_value, resolve};

/// Decode `bytes` and replace `dest` with the result.
///
/// `dest` is only written when the whole payload decodes and materializes.
pub fn decode_into<T: Pack + Default>(dest: &mut T, bytes: &[u8]) -> Result<()> {
	*dest = decode(bytes)?;
	Ok(())
}

/// Decode `bytes` into a fresh `T::default()`.
pub fn decode<T: Pack + Default>(bytes: &[u8]) -> Result<T> {
	let mut out = T::default();
	out.materialize(decode_value(bytes)?)?;
	Ok(out)
}

/// Like [`decode`], but fails when bytes remain after the value.
pub fn decode_exact<T: Pack + Default>(bytes: &[u8]) -> Result<T> {
	let (value, consumed) = decode_prefix(bytes, &DecodeOptions::default())?;
	if consumed != bytes.len() {
		return Err(PackError::TrailingBytes { consumed, len: bytes.len() });
	}
	let mut out = T::default();
	out.materialize(value)?;
	Ok(out)
}

/// Replace a [`Record`] with the contents of a struct value.
///
/// Members are materialized into a fresh `R::default()`, which is committed
/// to `record` only once every member succeeded. Each descriptor takes the
/// first incoming member with its wire name. Members unknown to `R` are
/// ignored; descriptors with no incoming member and skipped fields keep
/// their default.
pub fn materialize_record<R: Record + Default + 'static>(record: &mut R, value: Value) -> Result<()> {
	let Value::Struct(item) = value else {
		return Err(PackError::TypeMismatch {
			expected: Kind::Struct,
			found: value.kind(),
		});
	};

	let descriptors = resolve::<R>()?;
	let mut out = R::default();
	let mut incoming: Vec<Option<_>> = item.fields.into_iter().map(Some).collect();
	for desc in descriptors.iter() {
		let Some(slot) = incoming
			.iter_mut()
			.find(|slot| slot.as_ref().is_some_and(|field| field.name == desc.wire_name))
		else {
			continue;
		};
		let Some(field) = slot.take() else {
			continue;
		};
		let Some(dest) = out.field_mut(desc.index) else {
			continue;
		};
		dest.materialize(field.value).map_err(|err| err.in_field(desc.wire_name))?;
	}
	*record = out;
	Ok(())
}

/// Reject a value whose variant differs from `expected`.
pub(crate) fn mismatch(expected: Kind, found: &Value) -> PackError {
	PackError::TypeMismatch {
		expected,
		found: found.kind(),
	}
}

#[cfg(test)]
mod tests;
