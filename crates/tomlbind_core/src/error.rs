use thiserror::Error;

use crate::Diagnostics;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, BindError>;

/// Errors produced by bind entry points and descriptor parsing.
///
/// Expected data-shape problems never surface here; they are accumulated as
/// [`Diagnostics`] instead. The only data-driven variant is [`BindError::Rejected`],
/// raised when the caller's severity policy classifies a diagnostic as fatal.
#[derive(Debug, Error)]
pub enum BindError {
	/// No adapter is registered for the requested root type.
	#[error("no adapter registered for {type_name}")]
	AdapterNotRegistered {
		/// Rust type name of the requested model.
		type_name: &'static str,
	},
	/// Registered adapter produced a model of a different type.
	#[error("adapter registered for {type_name} produced a different model type")]
	AdapterTypeMismatch {
		/// Rust type name of the requested model.
		type_name: &'static str,
	},
	/// Severity policy rejected the bind result.
	#[error("bind of {type_name} rejected: {fatal} fatal diagnostic(s)")]
	Rejected {
		/// Rust type name of the requested model.
		type_name: &'static str,
		/// Number of diagnostics the policy classified as fatal.
		fatal: usize,
		/// Every diagnostic accumulated during the bind.
		diagnostics: Diagnostics,
	},
	/// Primitive descriptor name was not recognized.
	#[error("unknown primitive type: {name}")]
	UnknownPrimitive {
		/// User-provided type name.
		name: String,
	},
	/// Text could not be parsed as a TOML-style timestamp.
	#[error("invalid timestamp: {input}")]
	InvalidTimestamp {
		/// Original input text.
		input: String,
	},
}

impl BindError {
	/// Diagnostics carried by a rejected bind, if any.
	pub fn diagnostics(&self) -> Option<&Diagnostics> {
		match self {
			Self::Rejected { diagnostics, .. } => Some(diagnostics),
			_ => None,
		}
	}
}
