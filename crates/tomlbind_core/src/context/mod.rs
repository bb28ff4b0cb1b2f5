use std::borrow::Cow;
use std::fmt::{self, Write as _};

use crate::coerce::coerce;
use crate::{BindEnum, BindField, BindOptions, Diagnostic, DiagnosticKind, Diagnostics, FieldSchema, Registry, Scalar, Table, TargetType, TypeKey, Value};

/// One step of a diagnostic location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
	/// Table key.
	Key(Cow<'static, str>),
	/// Array position.
	Index(usize),
}

impl fmt::Display for Segment {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Key(key) => f.write_str(key),
			Self::Index(idx) => write!(f, "[{idx}]"),
		}
	}
}

/// State threaded through one bind call.
///
/// Carries the registry used for nested lookups, the caller's options, the
/// current location, and the diagnostics accumulated so far.
pub struct BindContext<'a> {
	registry: &'a Registry,
	options: &'a BindOptions,
	diagnostics: Diagnostics,
	path: Vec<Segment>,
}

impl<'a> BindContext<'a> {
	/// Context rooted at an empty path.
	pub fn new(registry: &'a Registry, options: &'a BindOptions) -> Self {
		Self {
			registry,
			options,
			diagnostics: Diagnostics::new(),
			path: Vec::new(),
		}
	}

	/// Registry used for nested models.
	pub fn registry(&self) -> &'a Registry {
		self.registry
	}

	/// Options for this call.
	pub fn options(&self) -> &'a BindOptions {
		self.options
	}

	/// Diagnostics reported so far.
	pub fn diagnostics(&self) -> &Diagnostics {
		&self.diagnostics
	}

	/// Finish the call and take the diagnostics.
	pub fn into_diagnostics(self) -> Diagnostics {
		self.diagnostics
	}

	/// Current location rendered as `a.b[2].c`.
	pub fn path(&self) -> String {
		let mut out = String::new();
		for segment in &self.path {
			match segment {
				Segment::Key(key) => {
					if !out.is_empty() {
						out.push('.');
					}
					out.push_str(key);
				}
				Segment::Index(idx) => {
					let _ = write!(out, "[{idx}]");
				}
			}
		}
		out
	}

	/// Record `kind` at the current location.
	pub fn report(&mut self, kind: DiagnosticKind) {
		let diagnostic = Diagnostic::new(kind, self.path());
		self.diagnostics.push(diagnostic);
	}

	/// Run `f` with `key` appended to the location.
	pub fn with_key<R>(&mut self, key: impl Into<Cow<'static, str>>, f: impl FnOnce(&mut Self) -> R) -> R {
		self.path.push(Segment::Key(key.into()));
		let out = f(self);
		self.path.pop();
		out
	}

	/// Run `f` with `idx` appended to the location.
	pub fn with_index<R>(&mut self, idx: usize, f: impl FnOnce(&mut Self) -> R) -> R {
		self.path.push(Segment::Index(idx));
		let out = f(self);
		self.path.pop();
		out
	}

	/// Read one declared field of `table` into `slot`.
	///
	/// `slot` is only written when the whole value converts.
	pub fn read_field<T: BindField>(&mut self, table: &Table, field: &FieldSchema, slot: &mut T) {
		let key = field.key();
		match table.get(&key) {
			None | Some(Value::Absent) => {
				if field.required {
					self.with_key(key, |cx| cx.report(DiagnosticKind::MissingKey));
				}
			}
			Some(value) => {
				if let Some(out) = self.with_key(key, |cx| T::read_value(value, cx)) {
					*slot = out;
				}
			}
		}
	}

	/// Build a nested model from `table` through the registry.
	pub fn read_nested<T: 'static>(&mut self, table: &Table) -> Option<T> {
		let key = TypeKey::of::<T>();
		let Some(adapter) = self.registry.try_get(key) else {
			self.report(DiagnosticKind::MissingAdapter { type_name: key.name() });
			return None;
		};
		adapter.read_any(table, self).downcast::<T>().ok().map(|model| *model)
	}

	/// Build a nested model from `value`, which must be a table.
	pub fn read_nested_value<T: 'static>(&mut self, value: &Value) -> Option<T> {
		match value {
			Value::Table(table) => self.read_nested(table),
			other => {
				self.report(DiagnosticKind::UnexpectedShape {
					expected: "table".to_owned(),
					found: other.kind(),
				});
				None
			}
		}
	}

	/// Coerce a leaf `value` to `target` and unpack it with `extract`.
	///
	/// Containers produce a shape diagnostic; a failed coercion or an
	/// `extract` that rejects the result produces a conversion diagnostic.
	pub fn read_leaf<T>(&mut self, value: &Value, target: &TargetType, extract: impl FnOnce(Scalar) -> Option<T>) -> Option<T> {
		let Some(scalar) = Scalar::from_value(value) else {
			self.report(DiagnosticKind::UnexpectedShape {
				expected: target.to_string(),
				found: value.kind(),
			});
			return None;
		};
		let out = coerce(&scalar, target, self.options).and_then(extract);
		if out.is_none() {
			self.report(DiagnosticKind::Conversion {
				from: scalar.kind(),
				to: target.to_string(),
				value: scalar.to_string(),
			});
		}
		out
	}

	/// Read an enumeration symbol from `value`.
	pub fn read_enum<T: BindEnum>(&mut self, value: &Value) -> Option<T> {
		let schema = T::schema();
		self.read_leaf(value, &TargetType::Enum(schema), |scalar| match scalar {
			Scalar::Enum(symbol) if symbol.schema() == schema => T::from_index(symbol.index()),
			_ => None,
		})
	}
}

impl fmt::Debug for BindContext<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("BindContext")
			.field("path", &self.path())
			.field("diagnostics", &self.diagnostics.len())
			.finish_non_exhaustive()
	}
}
