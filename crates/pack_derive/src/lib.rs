//! Derive macro for the `pack` codec.
//!
//! See [`Pack`](derive_pack).

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static PACK_ATTRIBUTE_NAME: &str = "pack";

mod attributes;
mod record;

/// # Derive `Pack` and `Record`
///
/// Applies to structs with named fields (and unit structs, which encode as an
/// empty struct). Fields are encoded in declaration order, each one under its
/// wire name. Every non-skipped field type must implement `Pack`, and the
/// struct itself must implement `Default`: decoding fills a fresh default
/// value and only replaces the destination once every field succeeded.
///
/// Field types map to wire kinds as follows:
///
/// - `bool`, `u8` to `u128`, `U256`, `String`: the matching scalar kind.
/// - `[u8; 32]` and `[u8; 65]`: `bytes32` and `bytes65`.
/// - `pack::codec::Bytes`: `bytes`, the compact byte string.
/// - `Vec<T>`: `list`. This includes `Vec<u8>`, which becomes a list of `u8`
///   values rather than a byte string; wrap it in `Bytes` for that.
/// - `Option<T>`: `T` when `Some`. `None` cannot be encoded, so mark the
///   field `omitempty`.
/// - `Box<T>`, `Value`, `StructValue`, and any other `#[derive(Pack)]` struct.
///
/// ## Field attributes
///
/// ```rust, ignore
/// #[derive(Pack, Default)]
/// struct Transfer {
///     // Wire name `to` instead of `recipient`.
///     #[pack(name = "to")]
///     recipient: [u8; 32],
///     // Left out of the payload while zero.
///     #[pack(name = "memo", omitempty)]
///     memo: String,
///     // Never encoded, never decoded; keeps its default on decode.
///     #[pack(skip)]
///     cached_hash: Option<u64>,
///     // No annotation: wire name is `amount`.
///     amount: pack::codec::U256,
/// }
/// ```
///
/// - `name = "..."`: explicit wire name.
/// - `omitempty`: skip the field on encode while it holds its zero value.
/// - `skip`: drop the field entirely. Wins over `name` and `omitempty`, and the
///   field type does not need to implement `Pack`.
///
/// Options may be combined in one attribute or spread over several.
#[proc_macro_derive(Pack, attributes(pack))]
pub fn derive_pack(input: TokenStream) -> TokenStream {
	let ast = parse_macro_input!(input as DeriveInput);

	match record::impl_pack(&ast) {
		Ok(tokens) => tokens.into(),
		Err(err) => err.into_compile_error().into(),
	}
}
