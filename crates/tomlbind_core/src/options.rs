use std::fmt;
use std::sync::Arc;

use crate::{Scalar, TargetType};

/// Caller-supplied last-resort conversion.
///
/// Receives the original value and the requested target; returning `None`
/// means the hook declines.
pub type ConvertHook = dyn Fn(&Scalar, &TargetType) -> Option<Scalar> + Send + Sync;

/// Per-call binding configuration.
///
/// Threaded by reference through one bind call; never global.
#[derive(Clone, Default)]
pub struct BindOptions {
	hook: Option<Arc<ConvertHook>>,
}

impl BindOptions {
	/// Options with no hook.
	pub fn new() -> Self {
		Self::default()
	}

	/// Options carrying `hook` as the custom conversion.
	pub fn with_hook<F>(hook: F) -> Self
	where
		F: Fn(&Scalar, &TargetType) -> Option<Scalar> + Send + Sync + 'static,
	{
		Self { hook: Some(Arc::new(hook)) }
	}

	/// Configured conversion hook.
	pub fn hook(&self) -> Option<&ConvertHook> {
		self.hook.as_deref()
	}

	/// Whether a conversion hook is configured.
	pub fn has_hook(&self) -> bool {
		self.hook.is_some()
	}
}

impl fmt::Debug for BindOptions {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("BindOptions").field("hook", &self.hook.as_ref().map(|_| "<fn>")).finish()
	}
}
