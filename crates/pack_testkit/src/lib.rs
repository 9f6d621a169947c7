//! Shared test helpers for workspace crates.

use pack::codec::{FieldValue, Kind, StructValue, U256, Value};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Shape limits for generated value trees.
#[derive(Debug, Clone, Copy)]
pub struct GenerateOptions {
	/// Maximum [`Value::depth`] of generated trees; 0 behaves as 1.
	pub max_depth: usize,
	/// Allow `Bytes` and `List` values with zero elements.
	pub allow_empty_sequences: bool,
	/// Allow containers inside containers.
	pub allow_recursive_structs: bool,
	/// Maximum elements per container and bytes per byte string.
	pub max_len: usize,
}

impl Default for GenerateOptions {
	fn default() -> Self {
		Self {
			max_depth: 4,
			allow_empty_sequences: false,
			allow_recursive_structs: true,
			max_len: 6,
		}
	}
}

/// Random value-tree generator over any RNG.
pub struct ValueGenerator<R> {
	rng: R,
	opt: GenerateOptions,
}

impl ValueGenerator<StdRng> {
	/// Deterministic generator seeded from `seed`.
	pub fn seeded(seed: u64, opt: GenerateOptions) -> Self {
		Self::new(StdRng::seed_from_u64(seed), opt)
	}
}

impl<R: Rng> ValueGenerator<R> {
	/// Wrap an existing RNG.
	pub fn new(rng: R, opt: GenerateOptions) -> Self {
		Self { rng, opt }
	}

	/// Generate one value tree.
	pub fn value(&mut self) -> Value {
		self.value_at(self.opt.max_depth.max(1))
	}

	fn value_at(&mut self, budget: usize) -> Value {
		let containers = budget > 1;
		let kinds: &[Kind] = if containers { &Kind::ALL } else { &Kind::ALL[..11] };
		let kind = kinds[self.rng.random_range(0..kinds.len())];
		match kind {
			Kind::Bool => Value::Bool(self.rng.random()),
			Kind::U8 => Value::U8(self.rng.random()),
			Kind::U16 => Value::U16(self.rng.random()),
			Kind::U32 => Value::U32(self.rng.random()),
			Kind::U64 => Value::U64(self.rng.random()),
			Kind::U128 => Value::U128(self.rng.random()),
			Kind::U256 => Value::U256(U256::from_be_bytes(self.array())),
			Kind::String => Value::String(self.text()),
			Kind::Bytes => {
				let len = self.seq_len();
				let mut out = vec![0_u8; len];
				self.rng.fill(&mut out[..]);
				Value::Bytes(out)
			}
			Kind::Bytes32 => Value::Bytes32(self.array()),
			Kind::Bytes65 => Value::Bytes65(self.array()),
			Kind::Struct => {
				let count = self.rng.random_range(0..=self.opt.max_len);
				let mut item = StructValue::new();
				for idx in 0..count {
					let value = self.child(budget);
					item.fields.push(FieldValue::new(format!("f{idx}_{}", self.text()), value));
				}
				Value::Struct(item)
			}
			Kind::List => {
				let len = self.seq_len();
				let items = (0..len).map(|_| self.child(budget)).collect();
				Value::List(items)
			}
		}
	}

	fn child(&mut self, budget: usize) -> Value {
		if self.opt.allow_recursive_structs {
			self.value_at(budget - 1)
		} else {
			self.value_at(1)
		}
	}

	fn array<const N: usize>(&mut self) -> [u8; N] {
		let mut out = [0_u8; N];
		self.rng.fill(&mut out[..]);
		out
	}

	fn seq_len(&mut self) -> usize {
		let min = usize::from(!self.opt.allow_empty_sequences);
		self.rng.random_range(min..=self.opt.max_len.max(min))
	}

	fn text(&mut self) -> String {
		let len = self.rng.random_range(0..=self.opt.max_len);
		(0..len)
			.map(|_| {
				if self.rng.random_bool(0.8) {
					char::from(self.rng.random_range(b'a'..=b'z'))
				} else {
					['é', 'ß', '→', '😀'][self.rng.random_range(0..4)]
				}
			})
			.collect()
	}
}

/// Generate one value tree from `seed`.
///
/// The tree's depth never exceeds `max_depth`; with `allow_empty_sequences`
/// unset no `Bytes` or `List` is empty, so the result encodes as-is.
pub fn generate(seed: u64, max_depth: usize, allow_empty_sequences: bool, allow_recursive_structs: bool) -> Value {
	ValueGenerator::seeded(
		seed,
		GenerateOptions {
			max_depth,
			allow_empty_sequences,
			allow_recursive_structs,
			..GenerateOptions::default()
		},
	)
	.value()
}

/// Every strict prefix of `bytes`, shortest first.
pub fn truncations(bytes: &[u8]) -> impl Iterator<Item = &[u8]> {
	(0..bytes.len()).map(move |len| &bytes[..len])
}

#[cfg(test)]
mod tests;
