use crate::codec::{Bytes, Kind, Pack, PackError, StructValue, Value, decode, decode_exact, decode_into, encode, encode_value};

#[derive(Pack, Default, Debug, Clone, PartialEq)]
struct Target {
	#[pack(name = "a")]
	a: u16,
	#[pack(name = "b")]
	b: String,
	#[pack(skip)]
	local: u32,
	tail: Vec<u8>,
}

#[test]
fn fields_match_by_wire_name_in_any_order() {
	let value = Value::Struct(
		StructValue::new()
			.with("tail", Value::List(vec![Value::U8(9)]))
			.with("b", Value::from("bee"))
			.with("a", Value::U16(12)),
	);
	let mut out = Target::default();
	out.materialize(value).expect("materializes");
	assert_eq!(
		out,
		Target {
			a: 12,
			b: "bee".to_owned(),
			local: 0,
			tail: vec![9],
		}
	);
}

#[test]
fn absent_and_skipped_fields_reset_to_default() {
	let mut out = Target {
		a: 1,
		b: "stale".to_owned(),
		local: 77,
		tail: vec![3],
	};
	let value = Value::Struct(StructValue::new().with("a", Value::U16(2)).with("local", Value::U32(5)));
	out.materialize(value).expect("materializes");
	assert_eq!(
		out,
		Target {
			a: 2,
			..Target::default()
		}
	);
}

#[test]
fn failed_record_materialize_leaves_destination_untouched() {
	let before = Target {
		a: 1,
		b: "keep".to_owned(),
		local: 7,
		tail: vec![3],
	};
	let mut out = before.clone();
	let value = Value::Struct(StructValue::new().with("a", Value::U16(99)).with("b", Value::U8(0)));
	let err = out.materialize(value).expect_err("u8 into string");
	assert_eq!(err.path(), "b");
	assert_eq!(out, before);

	let bytes = encode_value(&Value::Struct(StructValue::new().with("a", Value::U16(99)).with("tail", Value::List(vec![Value::U8(1), Value::U32(2)]))));
	let err = decode_into(&mut out, &bytes).expect_err("u32 in u8 list");
	assert_eq!(err.path(), "tail[1]");
	assert_eq!(out, before);
}

#[test]
fn failed_list_and_option_materialize_leave_destination_untouched() {
	let mut list = vec![7_u32, 8, 9];
	let err = list.materialize(Value::List(vec![Value::U32(1), Value::U8(2)])).expect_err("u8 in u32 list");
	assert_eq!(err.path(), "[1]");
	assert_eq!(list, vec![7, 8, 9]);

	let mut maybe: Option<u16> = None;
	assert!(maybe.materialize(Value::from("x")).is_err());
	assert_eq!(maybe, None);

	let mut maybe = Some(Target::default());
	assert!(maybe.materialize(Value::U8(1)).is_err());
	assert_eq!(maybe, Some(Target::default()));
}

#[test]
fn unknown_members_are_ignored() {
	let value = Value::Struct(StructValue::new().with("zzz", Value::Bool(true)).with("a", Value::U16(4)));
	let mut out = Target::default();
	out.materialize(value).expect("unknown member ignored");
	assert_eq!(out.a, 4);
}

#[test]
fn first_duplicate_member_wins() {
	let value = Value::Struct(StructValue::new().with("a", Value::U16(1)).with("a", Value::U16(2)));
	let mut out = Target::default();
	out.materialize(value).expect("materializes");
	assert_eq!(out.a, 1);
}

#[test]
fn kind_mismatch_is_reported_with_field_path() {
	let value = Value::Struct(StructValue::new().with("a", Value::U32(1)));
	let err = Target::default().materialize(value).expect_err("u32 into u16");
	assert_eq!(err.path(), "a");
	assert_eq!(
		err.root(),
		&PackError::TypeMismatch {
			expected: Kind::U16,
			found: Kind::U32,
		}
	);

	let err = Target::default().materialize(Value::U8(1)).expect_err("scalar into struct");
	assert_eq!(
		err,
		PackError::TypeMismatch {
			expected: Kind::Struct,
			found: Kind::U8,
		}
	);
}

#[test]
fn list_element_mismatch_carries_index() {
	let value = Value::Struct(StructValue::new().with("tail", Value::List(vec![Value::U8(1), Value::from("x")])));
	let err = Target::default().materialize(value).expect_err("string in u8 list");
	assert_eq!(err.path(), "tail[1]");
}

#[test]
fn decoded_empty_sequences_materialize() {
	let bytes = encode_value(&Value::List(Vec::new()));
	assert_eq!(decode::<Vec<u64>>(&bytes).expect("empty list"), Vec::<u64>::new());

	let bytes = encode_value(&Value::Bytes(Vec::new()));
	assert_eq!(decode::<Bytes>(&bytes).expect("empty bytes"), Bytes::default());
}

#[test]
fn list_materialize_replaces_previous_contents() {
	let mut out = vec![1_u32, 2, 3];
	decode_into(&mut out, &encode(&vec![9_u32]).expect("encodes")).expect("decodes");
	assert_eq!(out, vec![9]);
}

#[test]
fn exact_decode_rejects_trailing_bytes() {
	let mut bytes = encode(&5_u8).expect("encodes");
	assert_eq!(decode_exact::<u8>(&bytes), Ok(5));
	bytes.push(0);
	assert_eq!(decode::<u8>(&bytes), Ok(5));
	assert_eq!(decode_exact::<u8>(&bytes), Err(PackError::TrailingBytes { consumed: 2, len: 3 }));
}
