use crate::codec::{FieldTag, Result, Value};

/// Native type with a pack representation.
///
/// The trait is object safe so struct fields can be reached through
/// `&dyn Pack` by index; see [`Record`].
pub trait Pack {
	/// Build the canonical value tree for `self`.
	fn build(&self) -> Result<Value>;

	/// Replace `self` with the native form of a decoded value tree.
	///
	/// Either the whole value materializes or `self` is left as it was. Parts
	/// with no counterpart in `value` (absent struct members, skipped fields)
	/// end up at their default.
	fn materialize(&mut self, value: Value) -> Result<()>;

	/// Whether `self` equals the default value of its type, for `omitempty` fields.
	fn is_zero(&self) -> bool;
}

/// Native struct whose fields are described by annotations.
///
/// Implemented by `#[derive(Pack)]`. `TAGS` lists every declared field in
/// declaration order, including skipped ones; the index into `TAGS` is the
/// access path accepted by [`Record::field`] and [`Record::field_mut`].
pub trait Record: Pack {
	/// Declared fields and their annotations.
	const TAGS: &'static [FieldTag];

	/// Borrow the field at a declaration index; `None` for skipped or unknown indices.
	fn field(&self, index: usize) -> Option<&dyn Pack>;

	/// Mutably borrow the field at a declaration index; `None` for skipped or unknown indices.
	fn field_mut(&mut self, index: usize) -> Option<&mut dyn Pack>;
}
