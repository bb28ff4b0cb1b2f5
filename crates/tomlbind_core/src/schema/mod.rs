use std::borrow::Cow;

/// Compile-time description of a bindable model type.
///
/// Instances are `static`s emitted by [`crate::bindable!`]; nothing here is
/// inspected through reflection at bind time.
#[derive(Debug, PartialEq, Eq)]
pub struct ModelSchema {
	/// Rust type name of the model.
	pub type_name: &'static str,
	/// Declared fields in source order.
	pub fields: &'static [FieldSchema],
}

impl ModelSchema {
	/// Look up a field by its Rust name.
	pub fn field(&self, name: &str) -> Option<&FieldSchema> {
		self.fields.iter().find(|field| field.name == name)
	}

	/// Table keys the model reads, in declaration order.
	pub fn keys(&self) -> impl Iterator<Item = Cow<'static, str>> + '_ {
		self.fields.iter().map(FieldSchema::key)
	}
}

/// One declared field of a [`ModelSchema`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSchema {
	/// Rust field name.
	pub name: &'static str,
	/// Literal key override from the key-rename marker.
	pub rename: Option<&'static str>,
	/// Whether a missing key is reported.
	pub required: bool,
}

impl FieldSchema {
	/// Describe a field.
	pub const fn new(name: &'static str, rename: Option<&'static str>, required: bool) -> Self {
		Self { name, rename, required }
	}

	/// Table key for this field: the rename override, or the derived key.
	pub fn key(&self) -> Cow<'static, str> {
		match self.rename {
			Some(key) => Cow::Borrowed(key),
			None => derive_key(self.name),
		}
	}
}

/// Compile-time description of a bindable enumeration.
#[derive(Debug, PartialEq, Eq)]
pub struct EnumSchema {
	/// Rust type name of the enum.
	pub type_name: &'static str,
	/// Variant names in declaration order.
	pub symbols: &'static [&'static str],
}

impl EnumSchema {
	/// Index of the symbol equal to `text`, ignoring case.
	///
	/// Matching is exact apart from case: no trimming, prefixes, or numeric forms.
	pub fn find_symbol(&self, text: &str) -> Option<usize> {
		self.symbols.iter().position(|symbol| eq_ignore_case(symbol, text))
	}
}

fn eq_ignore_case(left: &str, right: &str) -> bool {
	left.eq_ignore_ascii_case(right) || left.chars().flat_map(char::to_lowercase).eq(right.chars().flat_map(char::to_lowercase))
}

/// Default table key for a field name.
///
/// Strips a raw-identifier prefix and converts to snake_case, so `TimeoutSeconds`
/// and `timeout_seconds` both map to `timeout_seconds`.
pub fn derive_key(name: &'static str) -> Cow<'static, str> {
	let name = name.strip_prefix("r#").unwrap_or(name);
	if !name.chars().any(char::is_uppercase) {
		return Cow::Borrowed(name);
	}

	let chars: Vec<char> = name.chars().collect();
	let mut out = String::with_capacity(name.len() + 4);
	for (idx, &ch) in chars.iter().enumerate() {
		if !ch.is_uppercase() {
			out.push(ch);
			continue;
		}

		let prev = idx.checked_sub(1).and_then(|prev| chars.get(prev)).copied();
		let next = chars.get(idx + 1).copied();
		let boundary = match prev {
			Some(prev) if prev.is_lowercase() || prev.is_ascii_digit() => true,
			Some(prev) if prev.is_uppercase() => next.is_some_and(char::is_lowercase),
			_ => false,
		};
		if boundary {
			out.push('_');
		}
		out.extend(ch.to_lowercase());
	}
	Cow::Owned(out)
}

#[cfg(test)]
mod tests;
