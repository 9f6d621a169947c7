use pack::codec::{Kind, StructValue, U256, Value};

use super::JsonValue;
use crate::error::CliError;

fn parse(text: &str) -> Result<Value, CliError> {
	let json: JsonValue = serde_json::from_str(text).expect("typed json parses");
	Value::try_from(json)
}

#[test]
fn tags_are_snake_case_variant_names() {
	let json = serde_json::to_value(JsonValue::from(&Value::Bytes32([0; 32]))).expect("serializes");
	assert!(json.get("bytes32").is_some(), "{json}");
	let json = serde_json::to_value(JsonValue::from(&Value::U128(5))).expect("serializes");
	assert_eq!(json, serde_json::json!({"u128": "5"}));
}

#[test]
fn wide_integers_accept_decimal_and_hex() {
	assert_eq!(parse(r#"{"u128": "340282366920938463463374607431768211455"}"#).expect("max"), Value::U128(u128::MAX));
	assert_eq!(parse(r#"{"u128": "0xff"}"#).expect("hex"), Value::U128(255));
	assert_eq!(parse(r#"{"u256": "0x7b"}"#).expect("hex"), Value::U256(U256::from(123_u64)));
	assert_eq!(parse(r#"{"u256": "123"}"#).expect("decimal"), Value::U256(U256::from(123_u64)));
	assert!(matches!(parse(r#"{"u128": "-1"}"#), Err(CliError::InvalidNumber { kind: Kind::U128, .. })));
}

#[test]
fn fixed_arrays_check_their_width() {
	let err = parse(r#"{"bytes32": "0x0102"}"#).expect_err("too short");
	assert!(matches!(
		err,
		CliError::WrongLength {
			kind: Kind::Bytes32,
			expected: 32,
			found: 2,
		}
	));
}

#[test]
fn nested_values_convert_both_ways() {
	let value = Value::Struct(
		StructValue::new()
			.with("name", Value::from("pack"))
			.with("raw", Value::Bytes(vec![0xca, 0xfe]))
			.with("wide", Value::U256(U256::MAX))
			.with("items", Value::List(vec![Value::Bool(true), Value::U16(7)])),
	);
	let text = serde_json::to_string(&JsonValue::from(&value)).expect("serializes");
	assert_eq!(parse(&text).expect("parses back"), value);
}

#[test]
fn unknown_tags_are_rejected_by_serde() {
	assert!(serde_json::from_str::<JsonValue>(r#"{"i32": 1}"#).is_err());
	assert!(serde_json::from_str::<JsonValue>(r#"{"u8": 256}"#).is_err());
}
