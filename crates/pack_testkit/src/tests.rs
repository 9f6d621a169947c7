use pack::codec::Value;

use crate::{GenerateOptions, ValueGenerator, generate, truncations};

fn has_empty_sequence(value: &Value) -> bool {
	match value {
		Value::Bytes(bytes) => bytes.is_empty(),
		Value::List(items) => items.is_empty() || items.iter().any(has_empty_sequence),
		Value::Struct(item) => item.fields.iter().any(|field| has_empty_sequence(&field.value)),
		_ => false,
	}
}

#[test]
fn same_seed_same_tree() {
	assert_eq!(generate(7, 4, false, true), generate(7, 4, false, true));
}

#[test]
fn depth_never_exceeds_limit() {
	for max_depth in 0..5 {
		let mut generator = ValueGenerator::seeded(
			max_depth as u64,
			GenerateOptions {
				max_depth,
				..GenerateOptions::default()
			},
		);
		for _ in 0..200 {
			let value = generator.value();
			assert!(value.depth() <= max_depth.max(1), "depth {} > {max_depth}", value.depth());
		}
	}
}

#[test]
fn no_empty_sequences_unless_allowed() {
	let mut generator = ValueGenerator::seeded(11, GenerateOptions::default());
	for _ in 0..500 {
		let value = generator.value();
		assert!(!has_empty_sequence(&value), "generated empty sequence: {value:?}");
	}
}

#[test]
fn empty_sequences_appear_when_allowed() {
	let mut generator = ValueGenerator::seeded(
		3,
		GenerateOptions {
			allow_empty_sequences: true,
			max_len: 1,
			..GenerateOptions::default()
		},
	);
	assert!((0..500).any(|_| has_empty_sequence(&generator.value())));
}

#[test]
fn non_recursive_containers_hold_scalars() {
	let mut generator = ValueGenerator::seeded(
		5,
		GenerateOptions {
			max_depth: 6,
			allow_recursive_structs: false,
			..GenerateOptions::default()
		},
	);
	for _ in 0..200 {
		assert!(generator.value().depth() <= 2);
	}
}

#[test]
fn truncations_are_strict_prefixes() {
	let bytes = [1_u8, 2, 3];
	let prefixes: Vec<&[u8]> = truncations(&bytes).collect();
	assert_eq!(prefixes, vec![&[][..], &[1][..], &[1, 2][..]]);
}
