use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tomlbind::BindError;

pub(crate) type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub(crate) enum CliError {
	#[error("failed to read {}: {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("invalid TOML: {0}")]
	Toml(#[from] toml::de::Error),
	#[error(transparent)]
	Bind(#[from] BindError),
	#[error("expected a scalar literal, found {found}")]
	NotScalar { found: &'static str },
	#[error("cannot coerce {from} {value} to {to}")]
	CoercionFailed { from: &'static str, to: String, value: String },
	#[error("failed to encode JSON: {0}")]
	Json(#[from] serde_json::Error),
}
