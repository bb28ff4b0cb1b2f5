use std::fmt;

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
	/// Data was tolerated; the affected field kept its default.
	Warning,
	/// Data could not be bound.
	Error,
}

impl Severity {
	/// Lowercase label.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Warning => "warning",
			Self::Error => "error",
		}
	}
}

impl fmt::Display for Severity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Which layer of binding raised a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
	/// Missing keys, wrong shapes, unregistered nested types.
	Structural,
	/// Leaf values that could not be coerced.
	Conversion,
}

impl Tier {
	/// Lowercase label.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Structural => "structural",
			Self::Conversion => "conversion",
		}
	}
}

impl fmt::Display for Tier {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// What went wrong at one location.
#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticKind {
	/// Required key is absent from its table.
	MissingKey,
	/// Value has a different shape than the field expects.
	UnexpectedShape {
		/// Shape the field accepts.
		expected: String,
		/// Shape actually present.
		found: &'static str,
	},
	/// No adapter is registered for a nested model type.
	MissingAdapter {
		/// Rust type name of the nested model.
		type_name: &'static str,
	},
	/// Leaf value could not be coerced into the field type.
	Conversion {
		/// Kind of the source value.
		from: &'static str,
		/// Requested target type.
		to: String,
		/// Rendered source value.
		value: String,
	},
}

impl DiagnosticKind {
	/// Layer this kind belongs to.
	pub fn tier(&self) -> Tier {
		match self {
			Self::Conversion { .. } => Tier::Conversion,
			Self::MissingKey | Self::UnexpectedShape { .. } | Self::MissingAdapter { .. } => Tier::Structural,
		}
	}

	/// Default severity for this kind.
	pub fn severity(&self) -> Severity {
		match self {
			Self::MissingKey => Severity::Warning,
			Self::UnexpectedShape { .. } | Self::MissingAdapter { .. } | Self::Conversion { .. } => Severity::Error,
		}
	}

	fn message(&self) -> String {
		match self {
			Self::MissingKey => "missing required key".to_owned(),
			Self::UnexpectedShape { expected, found } => format!("expected {expected}, found {found}"),
			Self::MissingAdapter { type_name } => format!("no adapter registered for {type_name}"),
			Self::Conversion { from, to, value } => format!("cannot convert {from} {value} to {to}"),
		}
	}
}

/// One binding problem with its location.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
	/// Severity assigned at creation.
	pub severity: Severity,
	/// Structured cause.
	pub kind: DiagnosticKind,
	/// Location such as `groups.default.platforms[2].weight`; empty at the root.
	pub path: Box<str>,
	/// Human-readable description.
	pub message: Box<str>,
}

impl Diagnostic {
	/// Diagnostic for `kind` at `path`, using the kind's default severity.
	pub fn new(kind: DiagnosticKind, path: impl Into<Box<str>>) -> Self {
		Self {
			severity: kind.severity(),
			message: kind.message().into_boxed_str(),
			kind,
			path: path.into(),
		}
	}

	/// Layer that raised this diagnostic.
	pub fn tier(&self) -> Tier {
		self.kind.tier()
	}
}

impl fmt::Display for Diagnostic {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.path.is_empty() {
			write!(f, "{}: {}", self.severity, self.message)
		} else {
			write!(f, "{}: {}: {}", self.severity, self.path, self.message)
		}
	}
}

/// Ordered, append-only diagnostic list for one bind call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
	items: Vec<Diagnostic>,
}

impl Diagnostics {
	/// Empty list.
	pub fn new() -> Self {
		Self::default()
	}

	/// Append one diagnostic.
	pub fn push(&mut self, diagnostic: Diagnostic) {
		self.items.push(diagnostic);
	}

	/// Number of diagnostics.
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Whether nothing was reported.
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Diagnostics in report order.
	pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
		self.items.iter()
	}

	/// Whether any diagnostic has [`Severity::Error`].
	pub fn has_errors(&self) -> bool {
		self.items.iter().any(|item| item.severity == Severity::Error)
	}

	/// Number of diagnostics with exactly `severity`.
	pub fn count(&self, severity: Severity) -> usize {
		self.items.iter().filter(|item| item.severity == severity).count()
	}

	/// Diagnostics recorded under `path`.
	pub fn at<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a Diagnostic> + 'a {
		self.items.iter().filter(move |item| &*item.path == path)
	}

	/// Owned diagnostics in report order.
	pub fn into_vec(self) -> Vec<Diagnostic> {
		self.items
	}
}

impl IntoIterator for Diagnostics {
	type Item = Diagnostic;
	type IntoIter = std::vec::IntoIter<Diagnostic>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.into_iter()
	}
}

impl<'a> IntoIterator for &'a Diagnostics {
	type Item = &'a Diagnostic;
	type IntoIter = std::slice::Iter<'a, Diagnostic>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.iter()
	}
}

impl fmt::Display for Diagnostics {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (idx, item) in self.items.iter().enumerate() {
			if idx > 0 {
				f.write_str("\n")?;
			}
			write!(f, "{item}")?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests;
