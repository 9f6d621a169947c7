use std::fmt;

use crate::codec::U256;

/// Canonical value tree node.
///
/// The variant set is closed: every encoder, decoder, and printer matches all
/// thirteen variants exhaustively.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
	/// Boolean scalar.
	Bool(bool),
	/// 8-bit unsigned integer.
	U8(u8),
	/// 16-bit unsigned integer.
	U16(u16),
	/// 32-bit unsigned integer.
	U32(u32),
	/// 64-bit unsigned integer.
	U64(u64),
	/// 128-bit unsigned integer.
	U128(u128),
	/// 256-bit unsigned integer.
	U256(U256),
	/// UTF-8 text.
	String(String),
	/// Variable-length byte sequence.
	Bytes(Vec<u8>),
	/// Fixed 32-byte array.
	Bytes32([u8; 32]),
	/// Fixed 65-byte array.
	Bytes65([u8; 65]),
	/// Ordered named fields.
	Struct(StructValue),
	/// Ordered elements, not necessarily of one kind.
	List(Vec<Value>),
}

/// Ordered sequence of named values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StructValue {
	/// Fields in wire order.
	pub fields: Vec<FieldValue>,
}

/// One named struct member.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldValue {
	/// Wire name.
	pub name: String,
	/// Member payload.
	pub value: Value,
}

/// Variant discriminant of a [`Value`], one-to-one with wire tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Kind {
	/// [`Value::Bool`].
	Bool = 1,
	/// [`Value::U8`].
	U8 = 2,
	/// [`Value::U16`].
	U16 = 3,
	/// [`Value::U32`].
	U32 = 4,
	/// [`Value::U64`].
	U64 = 5,
	/// [`Value::U128`].
	U128 = 6,
	/// [`Value::U256`].
	U256 = 7,
	/// [`Value::String`].
	String = 8,
	/// [`Value::Bytes`].
	Bytes = 9,
	/// [`Value::Bytes32`].
	Bytes32 = 10,
	/// [`Value::Bytes65`].
	Bytes65 = 11,
	/// [`Value::Struct`].
	Struct = 12,
	/// [`Value::List`].
	List = 13,
}

impl Kind {
	/// Every kind in tag order.
	pub const ALL: [Kind; 13] = [
		Kind::Bool,
		Kind::U8,
		Kind::U16,
		Kind::U32,
		Kind::U64,
		Kind::U128,
		Kind::U256,
		Kind::String,
		Kind::Bytes,
		Kind::Bytes32,
		Kind::Bytes65,
		Kind::Struct,
		Kind::List,
	];

	/// Wire tag byte.
	pub fn tag(self) -> u8 {
		self as u8
	}

	/// Map a wire tag back to its kind.
	pub fn from_tag(tag: u8) -> Option<Self> {
		Self::ALL.get(usize::from(tag).checked_sub(1)?).copied()
	}

	/// Stable lowercase label.
	pub fn name(self) -> &'static str {
		match self {
			Kind::Bool => "bool",
			Kind::U8 => "u8",
			Kind::U16 => "u16",
			Kind::U32 => "u32",
			Kind::U64 => "u64",
			Kind::U128 => "u128",
			Kind::U256 => "u256",
			Kind::String => "string",
			Kind::Bytes => "bytes",
			Kind::Bytes32 => "bytes32",
			Kind::Bytes65 => "bytes65",
			Kind::Struct => "struct",
			Kind::List => "list",
		}
	}

	/// Payload width for fixed-size kinds, `None` for length-prefixed and container kinds.
	pub fn fixed_width(self) -> Option<usize> {
		match self {
			Kind::Bool | Kind::U8 => Some(1),
			Kind::U16 => Some(2),
			Kind::U32 => Some(4),
			Kind::U64 => Some(8),
			Kind::U128 => Some(16),
			Kind::U256 | Kind::Bytes32 => Some(32),
			Kind::Bytes65 => Some(65),
			Kind::String | Kind::Bytes | Kind::Struct | Kind::List => None,
		}
	}
}

impl fmt::Display for Kind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl Value {
	/// Variant of this value.
	pub fn kind(&self) -> Kind {
		match self {
			Value::Bool(_) => Kind::Bool,
			Value::U8(_) => Kind::U8,
			Value::U16(_) => Kind::U16,
			Value::U32(_) => Kind::U32,
			Value::U64(_) => Kind::U64,
			Value::U128(_) => Kind::U128,
			Value::U256(_) => Kind::U256,
			Value::String(_) => Kind::String,
			Value::Bytes(_) => Kind::Bytes,
			Value::Bytes32(_) => Kind::Bytes32,
			Value::Bytes65(_) => Kind::Bytes65,
			Value::Struct(_) => Kind::Struct,
			Value::List(_) => Kind::List,
		}
	}

	/// Nesting depth: 1 for scalars and empty containers.
	pub fn depth(&self) -> usize {
		match self {
			Value::Struct(item) => 1 + item.fields.iter().map(|field| field.value.depth()).max().unwrap_or(0),
			Value::List(items) => 1 + items.iter().map(Value::depth).max().unwrap_or(0),
			_ => 1,
		}
	}

	/// Borrow the struct payload if this is a struct.
	pub fn as_struct(&self) -> Option<&StructValue> {
		match self {
			Value::Struct(item) => Some(item),
			_ => None,
		}
	}

	/// Borrow the list payload if this is a list.
	pub fn as_list(&self) -> Option<&[Value]> {
		match self {
			Value::List(items) => Some(items),
			_ => None,
		}
	}
}

/// Placeholder destination for materialization; every decode overwrites it.
impl Default for Value {
	fn default() -> Self {
		Value::Bool(false)
	}
}

impl StructValue {
	/// Empty struct.
	pub fn new() -> Self {
		Self::default()
	}

	/// Append a member at the end of the wire order.
	pub fn push(&mut self, name: impl Into<String>, value: Value) {
		self.fields.push(FieldValue::new(name, value));
	}

	/// Builder-style [`StructValue::push`].
	pub fn with(mut self, name: impl Into<String>, value: Value) -> Self {
		self.push(name, value);
		self
	}

	/// First member named `name`.
	pub fn get(&self, name: &str) -> Option<&Value> {
		self.fields.iter().find(|field| field.name == name).map(|field| &field.value)
	}

	/// Number of members.
	pub fn len(&self) -> usize {
		self.fields.len()
	}

	/// Whether the struct has no members.
	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}
}

impl FieldValue {
	/// Create a named member.
	pub fn new(name: impl Into<String>, value: Value) -> Self {
		Self { name: name.into(), value }
	}
}

macro_rules! impl_from_scalar {
	($($native:ty => $variant:ident),* $(,)?) => {
		$(
			impl From<$native> for Value {
				fn from(value: $native) -> Self {
					Value::$variant(value)
				}
			}
		)*
	};
}

impl_from_scalar! {
	bool => Bool,
	u8 => U8,
	u16 => U16,
	u32 => U32,
	u64 => U64,
	u128 => U128,
	U256 => U256,
	String => String,
	[u8; 32] => Bytes32,
	[u8; 65] => Bytes65,
	StructValue => Struct,
	Vec<Value> => List,
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::String(value.to_owned())
	}
}
