use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// 256-bit unsigned integer stored as a 32-byte big-endian magnitude.
///
/// The byte layout is the wire layout, so encoding is a copy. Arithmetic is
/// checked: nothing wraps silently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct U256([u8; 32]);

/// Failure to parse a [`U256`] from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseU256Error {
	/// Input had no digits.
	#[error("empty integer literal")]
	Empty,
	/// Input contained a character outside the radix.
	#[error("invalid digit {ch:?} in integer literal")]
	InvalidDigit {
		/// Offending character.
		ch: char,
	},
	/// Value does not fit in 256 bits.
	#[error("integer literal exceeds 256 bits")]
	Overflow,
}

impl U256 {
	/// Zero.
	pub const ZERO: Self = Self([0; 32]);
	/// `2^256 - 1`.
	pub const MAX: Self = Self([0xff; 32]);

	/// Wrap a big-endian magnitude.
	pub const fn from_be_bytes(bytes: [u8; 32]) -> Self {
		Self(bytes)
	}

	/// Copy out the big-endian magnitude.
	pub const fn to_be_bytes(self) -> [u8; 32] {
		self.0
	}

	/// Borrow the big-endian magnitude.
	pub fn as_be_bytes(&self) -> &[u8; 32] {
		&self.0
	}

	/// Whether the value is zero.
	pub fn is_zero(&self) -> bool {
		self.0.iter().all(|byte| *byte == 0)
	}

	/// `self + rhs`, or `None` on overflow.
	pub fn checked_add(self, rhs: Self) -> Option<Self> {
		let (a, b) = (self.limbs(), rhs.limbs());
		let mut out = [0_u64; 4];
		let mut carry = false;
		for idx in (0..4).rev() {
			let (sum, c1) = a[idx].overflowing_add(b[idx]);
			let (sum, c2) = sum.overflowing_add(u64::from(carry));
			out[idx] = sum;
			carry = c1 || c2;
		}
		if carry { None } else { Some(Self::from_limbs(out)) }
	}

	/// `self - rhs`, or `None` on underflow.
	pub fn checked_sub(self, rhs: Self) -> Option<Self> {
		let (a, b) = (self.limbs(), rhs.limbs());
		let mut out = [0_u64; 4];
		let mut borrow = false;
		for idx in (0..4).rev() {
			let (diff, b1) = a[idx].overflowing_sub(b[idx]);
			let (diff, b2) = diff.overflowing_sub(u64::from(borrow));
			out[idx] = diff;
			borrow = b1 || b2;
		}
		if borrow { None } else { Some(Self::from_limbs(out)) }
	}

	/// `self * rhs`, or `None` on overflow.
	pub fn checked_mul_u64(self, rhs: u64) -> Option<Self> {
		let limbs = self.limbs();
		let mut out = [0_u64; 4];
		let mut carry = 0_u128;
		for idx in (0..4).rev() {
			let product = u128::from(limbs[idx]) * u128::from(rhs) + carry;
			out[idx] = product as u64;
			carry = product >> 64;
		}
		if carry != 0 { None } else { Some(Self::from_limbs(out)) }
	}

	/// Divide by a non-zero `u64`, returning quotient and remainder.
	fn div_rem_u64(self, divisor: u64) -> (Self, u64) {
		let limbs = self.limbs();
		let mut out = [0_u64; 4];
		let mut rem = 0_u128;
		for idx in 0..4 {
			let acc = (rem << 64) | u128::from(limbs[idx]);
			out[idx] = (acc / u128::from(divisor)) as u64;
			rem = acc % u128::from(divisor);
		}
		(Self::from_limbs(out), rem as u64)
	}

	fn limbs(self) -> [u64; 4] {
		let mut out = [0_u64; 4];
		for (idx, chunk) in self.0.chunks_exact(8).enumerate() {
			let mut buf = [0_u8; 8];
			buf.copy_from_slice(chunk);
			out[idx] = u64::from_be_bytes(buf);
		}
		out
	}

	fn from_limbs(limbs: [u64; 4]) -> Self {
		let mut out = [0_u8; 32];
		for (idx, limb) in limbs.iter().enumerate() {
			out[idx * 8..idx * 8 + 8].copy_from_slice(&limb.to_be_bytes());
		}
		Self(out)
	}

	fn parse_hex(digits: &str) -> Result<Self, ParseU256Error> {
		if digits.is_empty() {
			return Err(ParseU256Error::Empty);
		}
		let digits = digits.trim_start_matches('0');
		if digits.len() > 64 {
			return Err(ParseU256Error::Overflow);
		}

		let mut out = [0_u8; 32];
		for (idx, ch) in digits.chars().rev().enumerate() {
			let nibble = ch.to_digit(16).ok_or(ParseU256Error::InvalidDigit { ch })? as u8;
			out[31 - idx / 2] |= nibble << (4 * (idx % 2));
		}
		Ok(Self(out))
	}

	fn parse_decimal(digits: &str) -> Result<Self, ParseU256Error> {
		if digits.is_empty() {
			return Err(ParseU256Error::Empty);
		}

		let mut out = Self::ZERO;
		for ch in digits.chars() {
			let digit = ch.to_digit(10).ok_or(ParseU256Error::InvalidDigit { ch })?;
			out = out
				.checked_mul_u64(10)
				.and_then(|value| value.checked_add(Self::from(digit)))
				.ok_or(ParseU256Error::Overflow)?;
		}
		Ok(out)
	}
}

macro_rules! impl_from_uint {
	($($native:ty),*) => {
		$(
			impl From<$native> for U256 {
				fn from(value: $native) -> Self {
					let mut out = [0_u8; 32];
					let raw = value.to_be_bytes();
					out[32 - raw.len()..].copy_from_slice(&raw);
					Self(out)
				}
			}
		)*
	};
}

impl_from_uint!(u8, u16, u32, u64, u128);

impl TryFrom<U256> for u128 {
	type Error = U256;

	fn try_from(value: U256) -> Result<Self, Self::Error> {
		if value.0[..16].iter().any(|byte| *byte != 0) {
			return Err(value);
		}
		let mut buf = [0_u8; 16];
		buf.copy_from_slice(&value.0[16..]);
		Ok(u128::from_be_bytes(buf))
	}
}

impl FromStr for U256 {
	type Err = ParseU256Error;

	/// Parse decimal digits, or hex digits after a `0x`/`0X` prefix.
	fn from_str(input: &str) -> Result<Self, Self::Err> {
		match input.strip_prefix("0x").or_else(|| input.strip_prefix("0X")) {
			Some(hex) => Self::parse_hex(hex),
			None => Self::parse_decimal(input),
		}
	}
}

impl fmt::Display for U256 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		const CHUNK: u64 = 10_000_000_000_000_000_000;

		if self.is_zero() {
			return f.pad_integral(true, "", "0");
		}

		let mut chunks = Vec::new();
		let mut rest = *self;
		while !rest.is_zero() {
			let (quotient, rem) = rest.div_rem_u64(CHUNK);
			chunks.push(rem);
			rest = quotient;
		}

		let mut out = String::with_capacity(chunks.len() * 19);
		for (idx, chunk) in chunks.iter().rev().enumerate() {
			if idx == 0 {
				out.push_str(&chunk.to_string());
			} else {
				out.push_str(&format!("{chunk:019}"));
			}
		}
		f.pad_integral(true, "", &out)
	}
}

impl fmt::LowerHex for U256 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut out = String::with_capacity(64);
		for byte in self.0 {
			out.push_str(&format!("{byte:02x}"));
		}
		let trimmed = out.trim_start_matches('0');
		f.pad_integral(true, "0x", if trimmed.is_empty() { "0" } else { trimmed })
	}
}
