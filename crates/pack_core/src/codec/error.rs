use thiserror::Error;

use crate::codec::Kind;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, PackError>;

/// Errors produced while building, encoding, decoding, and materializing pack values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackError {
	/// A variable-length sequence with zero elements was asked to build.
	#[error("empty {kind} cannot be encoded")]
	EmptySequence {
		/// Kind of the empty sequence.
		kind: Kind,
	},
	/// Native value has no pack representation.
	#[error("unsupported kind: {kind}")]
	UnsupportedKind {
		/// Description of the native value.
		kind: &'static str,
	},
	/// Field annotations of a native struct could not be resolved.
	#[error("field resolution failed for {type_name}: {reason}")]
	FieldResolution {
		/// Rust type name of the struct.
		type_name: &'static str,
		/// What was wrong with the annotations.
		reason: String,
	},
	/// Leading tag byte is outside the closed variant set.
	#[error("unknown tag 0x{tag:02x} at offset {at}")]
	UnknownTag {
		/// Raw tag byte.
		tag: u8,
		/// Byte offset of the tag.
		at: usize,
	},
	/// Not enough bytes remained for a requested read.
	#[error("unexpected eof at offset {at}, need {need} bytes, remaining {rem}")]
	UnexpectedEof {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Length or count prefix exceeded what may be represented or accepted.
	#[error("length {len} at offset {at} exceeds limit {max}")]
	LengthOverflow {
		/// Byte offset of the prefix, or 0 when building.
		at: usize,
		/// Declared or actual length.
		len: usize,
		/// Maximum accepted length.
		max: usize,
	},
	/// Destination kind disagrees with the decoded value.
	#[error("type mismatch: expected {expected}, found {found}")]
	TypeMismatch {
		/// Kind the destination accepts.
		expected: Kind,
		/// Kind that was decoded.
		found: Kind,
	},
	/// String or field name bytes are not UTF-8.
	#[error("invalid utf-8 at offset {at}")]
	InvalidUtf8 {
		/// Byte offset of the string payload.
		at: usize,
	},
	/// Bool payload byte was neither 0 nor 1.
	#[error("invalid bool byte 0x{byte:02x} at offset {at}")]
	InvalidBool {
		/// Byte offset of the payload.
		at: usize,
		/// Offending byte.
		byte: u8,
	},
	/// Container nesting exceeded the decoder limit.
	#[error("decode depth exceeded (max={max_depth})")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: usize,
	},
	/// Exact decode left bytes unconsumed.
	#[error("trailing bytes: consumed {consumed} of {len}")]
	TrailingBytes {
		/// Bytes consumed by the value.
		consumed: usize,
		/// Input length.
		len: usize,
	},
	/// Error raised inside a struct field.
	#[error("field {field}: {source}")]
	InField {
		/// Wire name of the field.
		field: String,
		/// Underlying failure.
		source: Box<PackError>,
	},
	/// Error raised inside a list element.
	#[error("index {index}: {source}")]
	AtIndex {
		/// Element position.
		index: usize,
		/// Underlying failure.
		source: Box<PackError>,
	},
}

impl PackError {
	/// Attach a struct field name to an error.
	pub fn in_field(self, field: impl Into<String>) -> Self {
		Self::InField {
			field: field.into(),
			source: Box::new(self),
		}
	}

	/// Attach a list element index to an error.
	pub fn at_index(self, index: usize) -> Self {
		Self::AtIndex {
			index,
			source: Box::new(self),
		}
	}

	/// Innermost error, past every field and index annotation.
	pub fn root(&self) -> &PackError {
		match self {
			Self::InField { source, .. } | Self::AtIndex { source, .. } => source.root(),
			other => other,
		}
	}

	/// Location of the innermost error, e.g. `inner.list[2].name`.
	pub fn path(&self) -> String {
		let mut out = String::new();
		let mut cur = self;
		loop {
			match cur {
				Self::InField { field, source } => {
					if !out.is_empty() {
						out.push('.');
					}
					out.push_str(field);
					cur = source;
				}
				Self::AtIndex { index, source } => {
					out.push_str(&format!("[{index}]"));
					cur = source;
				}
				_ => return out,
			}
		}
	}
}
