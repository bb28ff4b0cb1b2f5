use tracing::debug;

use crate::{BindContext, BindError, BindOptions, Diagnostic, Diagnostics, Model, Registry, Result, Severity, Table, TypeKey};

/// Successfully bound model with the diagnostics the policy tolerated.
#[derive(Debug)]
pub struct Bound<T> {
	/// Bound model; fields that failed keep their defaults.
	pub model: T,
	/// Every diagnostic accumulated during the bind.
	pub diagnostics: Diagnostics,
}

impl<T> Bound<T> {
	/// Drop the diagnostics.
	pub fn into_model(self) -> T {
		self.model
	}
}

/// Caller-owned decision on which diagnostics reject a bind.
pub trait SeverityPolicy {
	/// Whether `diagnostic` rejects the bind.
	fn is_fatal(&self, diagnostic: &Diagnostic) -> bool;
}

/// Reject on any [`Severity::Error`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FailOnError;

/// Reject on any diagnostic at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailOnWarning;

/// Never reject; always return the model.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverFail;

impl SeverityPolicy for FailOnError {
	fn is_fatal(&self, diagnostic: &Diagnostic) -> bool {
		diagnostic.severity >= Severity::Error
	}
}

impl SeverityPolicy for FailOnWarning {
	fn is_fatal(&self, diagnostic: &Diagnostic) -> bool {
		diagnostic.severity >= Severity::Warning
	}
}

impl SeverityPolicy for NeverFail {
	fn is_fatal(&self, _diagnostic: &Diagnostic) -> bool {
		false
	}
}

impl<F> SeverityPolicy for F
where
	F: Fn(&Diagnostic) -> bool,
{
	fn is_fatal(&self, diagnostic: &Diagnostic) -> bool {
		self(diagnostic)
	}
}

/// Bind `table` as `T` using an explicit registry and policy.
///
/// Fails with [`BindError::AdapterNotRegistered`] when `registry` has no
/// adapter for `T`, and with [`BindError::Rejected`] when `policy` marks any
/// diagnostic as fatal.
pub fn try_bind_with<T: 'static>(registry: &Registry, table: &Table, options: &BindOptions, policy: &dyn SeverityPolicy) -> Result<Bound<T>> {
	let key = TypeKey::of::<T>();
	let adapter = registry
		.try_get(key)
		.ok_or(BindError::AdapterNotRegistered { type_name: key.name() })?;

	let mut cx = BindContext::new(registry, options);
	let model = adapter
		.read_any(table, &mut cx)
		.downcast::<T>()
		.map_err(|_| BindError::AdapterTypeMismatch { type_name: key.name() })?;
	let diagnostics = cx.into_diagnostics();

	let fatal = diagnostics.iter().filter(|item| policy.is_fatal(item)).count();
	debug!(
		type_name = key.short_name(),
		diagnostics = diagnostics.len(),
		fatal,
		"bind finished"
	);
	if fatal > 0 {
		return Err(BindError::Rejected {
			type_name: key.name(),
			fatal,
			diagnostics,
		});
	}

	Ok(Bound { model: *model, diagnostics })
}

/// Bind `table` as `T` with the global registry, rejecting on errors.
pub fn try_bind<T: 'static>(table: &Table, options: &BindOptions) -> Result<Bound<T>> {
	try_bind_with(Registry::global(), table, options, &FailOnError)
}

/// Register `T` in the global registry if needed, then [`try_bind`].
pub fn bind<T: Model>(table: &Table, options: &BindOptions) -> Result<Bound<T>> {
	Registry::global().register_model::<T>();
	try_bind(table, options)
}
