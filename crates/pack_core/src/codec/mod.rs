mod build;
mod bytes;
mod decode;
mod encode;
mod error;
mod materialize;
mod native;
mod resolve;
mod traits;
mod value;
mod wide;

/// Native to value-tree conversion entry points.
pub use build::{build, build_record, encode};
/// Canonical decoder entry points and limits.
pub use decode::{DecodeOptions, decode_prefix, decode_value, decode_value_with};
/// Canonical encoder entry points.
pub use encode::{encode_value, encoded_len, write_value};
/// Error and result aliases.
pub use error::{PackError, Result};
/// Value-tree to native conversion entry points.
pub use materialize::{decode, decode_exact, decode_into, materialize_record};
/// Variable-length byte sequence native type.
pub use native::Bytes;
/// Field metadata resolution and its per-type cache.
pub use resolve::{FieldDescriptor, FieldTag, OmitPolicy, resolve};
/// Native binding traits.
pub use traits::{Pack, Record};
/// Canonical value tree.
pub use value::{FieldValue, Kind, StructValue, Value};
/// 256-bit unsigned integer.
pub use wide::{ParseU256Error, U256};

/// Derive `Pack` and `Record` for structs with named fields.
pub use pack_derive::Pack;
