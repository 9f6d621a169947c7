//! Code generation for `Record` and `Pack` impls.

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, Ident, Type, WherePredicate, parse_quote};

use crate::attributes::FieldAttributes;

struct FieldData<'a> {
	ident: &'a Ident,
	ty: &'a Type,
	attrs: FieldAttributes,
}

pub(crate) fn impl_pack(ast: &DeriveInput) -> syn::Result<TokenStream> {
	let fields = collect_fields(ast)?;
	let ident = &ast.ident;

	let mut generics = ast.generics.clone();
	let where_clause = generics.make_where_clause();
	where_clause.predicates.push(parse_quote!(Self: 'static));
	// Concrete field types are checked at their use sites; bounding them here
	// would make self-referential records (`Box<Self>` fields) cyclic.
	if ast.generics.type_params().next().is_some() {
		where_clause.predicates.push(parse_quote!(Self: ::core::default::Default));
		for field in fields.iter().filter(|field| !field.attrs.skip) {
			let ty = field.ty;
			let bound: WherePredicate = parse_quote!(#ty: ::pack::codec::Pack);
			where_clause.predicates.push(bound);
		}
	}
	let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

	let tags = fields.iter().map(|field| {
		let ident = field.ident.unraw().to_string();
		let name = match &field.attrs.name {
			Some(lit) => quote!(::core::option::Option::Some(#lit)),
			None => quote!(::core::option::Option::None),
		};
		let omitempty = field.attrs.omitempty;
		let skip = field.attrs.skip;
		quote! {
			::pack::codec::FieldTag {
				ident: #ident,
				name: #name,
				omitempty: #omitempty,
				skip: #skip,
			}
		}
	});

	let packed: Vec<(usize, &Ident)> = fields
		.iter()
		.enumerate()
		.filter(|(_, field)| !field.attrs.skip)
		.map(|(index, field)| (index, field.ident))
		.collect();
	let field_arms = packed.iter().map(|(index, member)| {
		quote!(#index => ::core::option::Option::Some(&self.#member as &dyn ::pack::codec::Pack))
	});
	let field_mut_arms = packed.iter().map(|(index, member)| {
		quote!(#index => ::core::option::Option::Some(&mut self.#member as &mut dyn ::pack::codec::Pack))
	});
	let zero_checks = packed.iter().map(|(_, member)| {
		quote!(&& ::pack::codec::Pack::is_zero(&self.#member))
	});

	Ok(quote! {
		impl #impl_generics ::pack::codec::Record for #ident #ty_generics #where_clause {
			const TAGS: &'static [::pack::codec::FieldTag] = &[#(#tags),*];

			fn field(&self, index: usize) -> ::core::option::Option<&dyn ::pack::codec::Pack> {
				match index {
					#(#field_arms,)*
					_ => ::core::option::Option::None,
				}
			}

			fn field_mut(&mut self, index: usize) -> ::core::option::Option<&mut dyn ::pack::codec::Pack> {
				match index {
					#(#field_mut_arms,)*
					_ => ::core::option::Option::None,
				}
			}
		}

		impl #impl_generics ::pack::codec::Pack for #ident #ty_generics #where_clause {
			fn build(&self) -> ::pack::codec::Result<::pack::codec::Value> {
				::pack::codec::build_record(self)
			}

			fn materialize(&mut self, value: ::pack::codec::Value) -> ::pack::codec::Result<()> {
				::pack::codec::materialize_record(self, value)
			}

			fn is_zero(&self) -> bool {
				true #(#zero_checks)*
			}
		}
	})
}

fn collect_fields(ast: &DeriveInput) -> syn::Result<Vec<FieldData<'_>>> {
	let data = match &ast.data {
		Data::Struct(data) => data,
		Data::Enum(data) => return Err(syn::Error::new(data.enum_token.span, "Pack cannot be derived for enums")),
		Data::Union(data) => return Err(syn::Error::new(data.union_token.span, "Pack cannot be derived for unions")),
	};

	let named = match &data.fields {
		Fields::Named(named) => named,
		Fields::Unit => return Ok(Vec::new()),
		Fields::Unnamed(unnamed) => {
			return Err(syn::Error::new_spanned(unnamed, "Pack requires named fields; tuple structs have no wire names"));
		}
	};

	let mut out = Vec::with_capacity(named.named.len());
	let mut errors: Option<syn::Error> = None;
	for field in &named.named {
		let Some(ident) = field.ident.as_ref() else {
			continue;
		};
		match FieldAttributes::parse_attrs(&field.attrs) {
			Ok(attrs) => out.push(FieldData { ident, ty: &field.ty, attrs }),
			Err(err) => match errors.as_mut() {
				Some(all) => all.combine(err),
				None => errors = Some(err),
			},
		}
	}

	match errors {
		Some(err) => Err(err),
		None => Ok(out),
	}
}
