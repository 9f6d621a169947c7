use std::any::{TypeId, type_name};
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use parking_lot::RwLock;
use tracing::debug;

use crate::codec::{PackError, Record, Result};

/// Inclusion policy of a struct field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OmitPolicy {
	/// Always present on the wire.
	Always,
	/// Absent when the field holds its zero value.
	OmitIfZero,
	/// Never read on encode, never written on decode.
	Never,
}

/// Annotations of one declared struct field, as written in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldTag {
	/// Declared identifier.
	pub ident: &'static str,
	/// Explicit wire name from `#[pack(name = "...")]`.
	pub name: Option<&'static str>,
	/// `#[pack(omitempty)]`.
	pub omitempty: bool,
	/// `#[pack(skip)]`.
	pub skip: bool,
}

impl FieldTag {
	/// Field with no annotations.
	pub const fn plain(ident: &'static str) -> Self {
		Self {
			ident,
			name: None,
			omitempty: false,
			skip: false,
		}
	}

	/// Wire name: the explicit name, else the declared identifier.
	pub fn wire_name(&self) -> &'static str {
		self.name.unwrap_or(self.ident)
	}

	/// Policy after precedence: `skip` beats `omitempty`.
	pub fn policy(&self) -> OmitPolicy {
		if self.skip {
			OmitPolicy::Never
		} else if self.omitempty {
			OmitPolicy::OmitIfZero
		} else {
			OmitPolicy::Always
		}
	}
}

/// Resolved wire description of one serialized field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
	/// Name used on the wire.
	pub wire_name: &'static str,
	/// Declaration index passed to [`Record::field`] and [`Record::field_mut`].
	pub index: usize,
	/// [`OmitPolicy::Always`] or [`OmitPolicy::OmitIfZero`].
	pub policy: OmitPolicy,
}

type DescriptorCache = RwLock<HashMap<TypeId, Arc<[FieldDescriptor]>>>;

static CACHE: LazyLock<DescriptorCache> = LazyLock::new(|| RwLock::new(HashMap::new()));

/// Field descriptors of `R` in declaration order, skipped fields removed.
///
/// Results are computed once per type and shared for the life of the process.
/// Failed resolutions are reported every time and never cached.
pub fn resolve<R: Record + 'static>() -> Result<Arc<[FieldDescriptor]>> {
	let key = TypeId::of::<R>();
	if let Some(found) = CACHE.read().get(&key) {
		return Ok(Arc::clone(found));
	}

	let resolved: Arc<[FieldDescriptor]> = resolve_tags(type_name::<R>(), R::TAGS)?.into();
	let mut cache = CACHE.write();
	let entry = cache.entry(key).or_insert_with(|| {
		debug!(type_name = type_name::<R>(), fields = resolved.len(), "resolved pack field descriptors");
		Arc::clone(&resolved)
	});
	Ok(Arc::clone(entry))
}

fn resolve_tags(type_name: &'static str, tags: &[FieldTag]) -> Result<Vec<FieldDescriptor>> {
	let mut out: Vec<FieldDescriptor> = Vec::with_capacity(tags.len());
	for (index, tag) in tags.iter().enumerate() {
		let policy = tag.policy();
		if policy == OmitPolicy::Never {
			continue;
		}

		let wire_name = tag.wire_name();
		if wire_name.is_empty() {
			return Err(PackError::FieldResolution {
				type_name,
				reason: format!("field {} has an empty wire name", tag.ident),
			});
		}
		if let Some(prev) = out.iter().find(|item| item.wire_name == wire_name) {
			return Err(PackError::FieldResolution {
				type_name,
				reason: format!("wire name {wire_name:?} used by fields {} and {}", tags[prev.index].ident, tag.ident),
			});
		}

		out.push(FieldDescriptor { wire_name, index, policy });
	}
	Ok(out)
}
