use super::{hex, parse_hex};
use crate::error::CliError;

#[test]
fn hex_accepts_prefix_case_and_whitespace() {
	assert_eq!(parse_hex("0xDEad").expect("valid"), vec![0xde, 0xad]);
	assert_eq!(parse_hex("  01 02\n03 ").expect("valid"), vec![1, 2, 3]);
	assert_eq!(parse_hex("").expect("empty is valid"), Vec::<u8>::new());
}

#[test]
fn hex_rejects_bad_digits() {
	assert!(matches!(parse_hex("0x123"), Err(CliError::InvalidHex { .. })));
	assert!(matches!(parse_hex("zz"), Err(CliError::InvalidHex { .. })));
}

#[test]
fn hex_renders_lowercase_with_prefix() {
	assert_eq!(hex(&[0, 0xab, 0x10]), "0x00ab10");
	assert_eq!(hex(&[]), "0x");
}
