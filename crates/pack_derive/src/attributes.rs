//! Parsing of `#[pack(...)]` field attributes.

use syn::{Attribute, LitStr};

use crate::PACK_ATTRIBUTE_NAME;

/// Options collected from every `#[pack(...)]` attribute on one field.
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
	/// `name = "..."`.
	pub name: Option<LitStr>,
	/// `omitempty`.
	pub omitempty: bool,
	/// `skip`.
	pub skip: bool,
}

impl FieldAttributes {
	pub(crate) fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
		let mut out = Self::default();
		let mut errors: Option<syn::Error> = None;

		for attr in attrs.iter().filter(|attr| attr.path().is_ident(PACK_ATTRIBUTE_NAME)) {
			let parsed = attr.parse_nested_meta(|meta| {
				if meta.path.is_ident("name") {
					let lit: LitStr = meta.value()?.parse()?;
					if out.name.is_some() {
						return Err(meta.error("duplicate `name` option"));
					}
					out.name = Some(lit);
				} else if meta.path.is_ident("omitempty") {
					if out.omitempty {
						return Err(meta.error("duplicate `omitempty` option"));
					}
					out.omitempty = true;
				} else if meta.path.is_ident("skip") {
					if out.skip {
						return Err(meta.error("duplicate `skip` option"));
					}
					out.skip = true;
				} else {
					return Err(meta.error("unknown pack option, expected `name`, `omitempty`, or `skip`"));
				}
				Ok(())
			});

			if let Err(err) = parsed {
				match errors.as_mut() {
					Some(all) => all.combine(err),
					None => errors = Some(err),
				}
			}
		}

		match errors {
			Some(err) => Err(err),
			None => Ok(out),
		}
	}
}
