use std::ops::{Deref, DerefMut};

use crate::codec::build::{build_list, check_sequence_len, check_wire_len, validate, validate_struct};
use crate::codec::materialize::mismatch;
use crate::codec::{Kind, Pack, PackError, Result, StructValue, U256, Value};

/// Variable-length byte sequence, encoded as [`Value::Bytes`].
///
/// `Vec<u8>` encodes as a list of `u8` values; wrap it in `Bytes` to get the
/// compact byte-string encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Bytes(pub Vec<u8>);

impl Bytes {
	/// Unwrap the byte vector.
	pub fn into_inner(self) -> Vec<u8> {
		self.0
	}
}

impl Deref for Bytes {
	type Target = Vec<u8>;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl DerefMut for Bytes {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.0
	}
}

impl From<Vec<u8>> for Bytes {
	fn from(value: Vec<u8>) -> Self {
		Self(value)
	}
}

impl From<&[u8]> for Bytes {
	fn from(value: &[u8]) -> Self {
		Self(value.to_vec())
	}
}

macro_rules! impl_pack_copy {
	($($native:ty => $variant:ident, $zero:expr);* $(;)?) => {
		$(
			impl Pack for $native {
				fn build(&self) -> Result<Value> {
					Ok(Value::$variant(*self))
				}

				fn materialize(&mut self, value: Value) -> Result<()> {
					match value {
						Value::$variant(v) => {
							*self = v;
							Ok(())
						}
						other => Err(mismatch(Kind::$variant, &other)),
					}
				}

				fn is_zero(&self) -> bool {
					*self == $zero
				}
			}
		)*
	};
}

impl_pack_copy! {
	bool => Bool, false;
	u8 => U8, 0;
	u16 => U16, 0;
	u32 => U32, 0;
	u64 => U64, 0;
	u128 => U128, 0;
	U256 => U256, U256::ZERO;
	[u8; 32] => Bytes32, [0; 32];
	[u8; 65] => Bytes65, [0; 65];
}

impl Pack for String {
	fn build(&self) -> Result<Value> {
		check_wire_len(self.len())?;
		Ok(Value::String(self.clone()))
	}

	fn materialize(&mut self, value: Value) -> Result<()> {
		match value {
			Value::String(v) => {
				*self = v;
				Ok(())
			}
			other => Err(mismatch(Kind::String, &other)),
		}
	}

	fn is_zero(&self) -> bool {
		self.is_empty()
	}
}

impl Pack for Bytes {
	fn build(&self) -> Result<Value> {
		check_sequence_len(Kind::Bytes, self.0.len())?;
		Ok(Value::Bytes(self.0.clone()))
	}

	fn materialize(&mut self, value: Value) -> Result<()> {
		match value {
			Value::Bytes(v) => {
				self.0 = v;
				Ok(())
			}
			other => Err(mismatch(Kind::Bytes, &other)),
		}
	}

	fn is_zero(&self) -> bool {
		self.0.is_empty()
	}
}

impl<T: Pack + Default> Pack for Vec<T> {
	fn build(&self) -> Result<Value> {
		build_list(self)
	}

	fn materialize(&mut self, value: Value) -> Result<()> {
		let Value::List(items) = value else {
			return Err(mismatch(Kind::List, &value));
		};

		let mut out = Vec::with_capacity(items.len());
		for (index, item) in items.into_iter().enumerate() {
			let mut slot = T::default();
			slot.materialize(item).map_err(|err| err.at_index(index))?;
			out.push(slot);
		}
		*self = out;
		Ok(())
	}

	fn is_zero(&self) -> bool {
		self.is_empty()
	}
}

/// `None` has no wire form: pair optional fields with `omitempty`.
impl<T: Pack + Default> Pack for Option<T> {
	fn build(&self) -> Result<Value> {
		match self {
			Some(inner) => inner.build(),
			None => Err(PackError::UnsupportedKind { kind: "Option::None" }),
		}
	}

	fn materialize(&mut self, value: Value) -> Result<()> {
		let mut inner = T::default();
		inner.materialize(value)?;
		*self = Some(inner);
		Ok(())
	}

	fn is_zero(&self) -> bool {
		self.is_none()
	}
}

impl<T: Pack + ?Sized> Pack for Box<T> {
	fn build(&self) -> Result<Value> {
		(**self).build()
	}

	fn materialize(&mut self, value: Value) -> Result<()> {
		(**self).materialize(value)
	}

	fn is_zero(&self) -> bool {
		(**self).is_zero()
	}
}

impl Pack for str {
	fn build(&self) -> Result<Value> {
		check_wire_len(self.len())?;
		Ok(Value::String(self.to_owned()))
	}

	fn materialize(&mut self, _value: Value) -> Result<()> {
		Err(PackError::UnsupportedKind { kind: "str destination" })
	}

	fn is_zero(&self) -> bool {
		self.is_empty()
	}
}

/// Build-only: a slice cannot change length, so it cannot be decoded into.
impl<T: Pack> Pack for [T] {
	fn build(&self) -> Result<Value> {
		build_list(self)
	}

	fn materialize(&mut self, _value: Value) -> Result<()> {
		Err(PackError::UnsupportedKind { kind: "slice destination" })
	}

	fn is_zero(&self) -> bool {
		self.is_empty()
	}
}

/// Build-only: shared references delegate encoding and refuse decoding.
impl<T: Pack + ?Sized> Pack for &T {
	fn build(&self) -> Result<Value> {
		(**self).build()
	}

	fn materialize(&mut self, _value: Value) -> Result<()> {
		Err(PackError::UnsupportedKind { kind: "shared reference destination" })
	}

	fn is_zero(&self) -> bool {
		(**self).is_zero()
	}
}

/// Identity: building validates and clones, materializing replaces.
impl Pack for Value {
	fn build(&self) -> Result<Value> {
		validate(self)?;
		Ok(self.clone())
	}

	fn materialize(&mut self, value: Value) -> Result<()> {
		*self = value;
		Ok(())
	}

	fn is_zero(&self) -> bool {
		false
	}
}

impl Pack for StructValue {
	fn build(&self) -> Result<Value> {
		validate_struct(self)?;
		Ok(Value::Struct(self.clone()))
	}

	fn materialize(&mut self, value: Value) -> Result<()> {
		match value {
			Value::Struct(item) => {
				*self = item;
				Ok(())
			}
			other => Err(mismatch(Kind::Struct, &other)),
		}
	}

	fn is_zero(&self) -> bool {
		false
	}
}
