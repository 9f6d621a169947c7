use pack::codec::{Kind, PackError};
use thiserror::Error;

/// Result alias for command handlers.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors reported by the `pack` binary.
#[derive(Debug, Error)]
pub enum CliError {
	/// Codec failure.
	#[error(transparent)]
	Pack(#[from] PackError),
	/// Input or output file failure.
	#[error("io error: {0}")]
	Io(#[from] std::io::Error),
	/// Typed JSON did not parse.
	#[error("invalid json: {0}")]
	Json(#[from] serde_json::Error),
	/// Hex text contained a non-hex digit or an odd number of digits.
	#[error("invalid hex: {reason}")]
	InvalidHex {
		/// What was wrong with the text.
		reason: String,
	},
	/// Decimal or hex integer literal did not parse for its kind.
	#[error("invalid {kind} literal: {value}")]
	InvalidNumber {
		/// Destination kind.
		kind: Kind,
		/// Offending literal.
		value: String,
	},
	/// Fixed-width byte array had the wrong number of bytes.
	#[error("{kind} expects {expected} bytes, found {found}")]
	WrongLength {
		/// Destination kind.
		kind: Kind,
		/// Required byte count.
		expected: usize,
		/// Decoded byte count.
		found: usize,
	},
}
