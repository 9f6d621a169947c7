use crate::codec::{Bytes, Kind, Pack, PackError, StructValue, Value, build, encode};

#[derive(Pack, Default, Clone)]
struct Leaf {
	#[pack(name = "x")]
	x: u8,
	#[pack(name = "z", omitempty)]
	omit: u32,
	#[pack(skip)]
	dash: u64,
	unnamed: u64,
}

#[derive(Pack, Default, Clone)]
struct Outer {
	#[pack(name = "foo")]
	foo: String,
	#[pack(name = "bar")]
	bar: Bytes,
	#[pack(name = "inner")]
	inner: Leaf,
	#[pack(name = "list")]
	list: Vec<u64>,
}

fn outer() -> Outer {
	Outer {
		foo: "hello".to_owned(),
		bar: Bytes(vec![1, 2]),
		inner: Leaf {
			x: 1,
			omit: 0,
			dash: 99,
			unnamed: 5,
		},
		list: vec![10, 20],
	}
}

#[test]
fn scalars_map_one_to_one() {
	assert_eq!(build(&true).expect("bool"), Value::Bool(true));
	assert_eq!(build(&7_u32).expect("u32"), Value::U32(7));
	assert_eq!(build(&u128::MAX).expect("u128"), Value::U128(u128::MAX));
	assert_eq!(build(&"s".to_owned()).expect("string"), Value::from("s"));
	assert_eq!(build(&[4_u8; 32]).expect("bytes32"), Value::Bytes32([4; 32]));
	assert_eq!(build(&Bytes(vec![1])).expect("bytes"), Value::Bytes(vec![1]));
}

#[test]
fn struct_fields_follow_descriptor_order_and_policies() {
	let value = build(&outer()).expect("builds");
	let inner = StructValue::new().with("x", Value::U8(1)).with("unnamed", Value::U64(5));
	let expected = StructValue::new()
		.with("foo", Value::from("hello"))
		.with("bar", Value::Bytes(vec![1, 2]))
		.with("inner", Value::Struct(inner))
		.with("list", Value::List(vec![Value::U64(10), Value::U64(20)]));
	assert_eq!(value, Value::Struct(expected));
}

#[test]
fn omitempty_keeps_non_zero_values() {
	let mut leaf = outer().inner;
	leaf.omit = 3;
	let value = build(&leaf).expect("builds");
	assert_eq!(value.as_struct().and_then(|item| item.get("z")), Some(&Value::U32(3)));
}

#[test]
fn empty_sequences_fail_to_build() {
	assert_eq!(build(&Bytes::default()), Err(PackError::EmptySequence { kind: Kind::Bytes }));
	assert_eq!(build(&Vec::<u64>::new()), Err(PackError::EmptySequence { kind: Kind::List }));
	assert_eq!(encode(&Vec::<String>::new()), Err(PackError::EmptySequence { kind: Kind::List }));
}

#[test]
fn empty_field_error_names_the_field() {
	let mut item = outer();
	item.bar = Bytes::default();
	let err = encode(&item).expect_err("empty bytes field");
	assert_eq!(err.root(), &PackError::EmptySequence { kind: Kind::Bytes });
	assert_eq!(err.path(), "bar");
	assert_eq!(err.to_string(), "field bar: empty bytes cannot be encoded");
}

#[test]
fn list_failures_carry_the_element_index() {
	let nested = vec![vec![1_u8], vec![2], Vec::new()];
	let err = build(&nested).expect_err("third element is empty");
	assert_eq!(err.path(), "[2]");
	assert_eq!(err.root(), &PackError::EmptySequence { kind: Kind::List });
}

#[test]
fn abstract_values_pass_through_after_validation() {
	let value = Value::List(vec![Value::U8(1), Value::Struct(StructValue::new().with("a", Value::from("b")))]);
	assert_eq!(build(&value).expect("valid tree"), value);

	let bad = Value::Struct(StructValue::new().with("inner", Value::List(vec![Value::Bytes(Vec::new())])));
	let err = build(&bad).expect_err("empty bytes deep inside");
	assert_eq!(err.path(), "inner[0]");
	assert_eq!(build(&Value::List(Vec::new())), Err(PackError::EmptySequence { kind: Kind::List }));
}

#[test]
fn none_is_unsupported_unless_omitted() {
	#[derive(Pack, Default)]
	struct Optional {
		#[pack(omitempty)]
		maybe: Option<u8>,
		always: Option<u8>,
	}

	let err = build(&Optional::default()).expect_err("always is None");
	assert_eq!(err.path(), "always");
	assert_eq!(err.root(), &PackError::UnsupportedKind { kind: "Option::None" });

	let value = build(&Optional {
		maybe: None,
		always: Some(3),
	})
	.expect("maybe is omitted");
	assert_eq!(value, Value::Struct(StructValue::new().with("always", Value::U8(3))));
}

#[test]
fn zero_scalars_still_encode() {
	assert_eq!(encode(&0_u128).expect("zero encodes"), [[6_u8].as_slice(), &[0; 16]].concat());
}
