use tomlbind::Scalar;
use tomlbind::coerce::coerce;

use crate::cmd::util::{emit_json, parse_target};
use crate::error::{CliError, Result};
use crate::{hooks, source};

#[derive(clap::Args)]
pub struct Args {
	/// TOML literal; text that does not parse is taken as a bare string.
	#[arg(allow_hyphen_values = true)]
	pub literal: String,
	/// Target type: a Rust primitive name, `strategy`, or `option<...>`.
	#[arg(long)]
	pub to: String,
	/// Accept duration strings such as `10m` for integer targets.
	#[arg(long)]
	pub hook: bool,
	#[arg(long)]
	pub json: bool,
}

/// Coerce one literal and print the result.
pub fn run(args: Args) -> Result<()> {
	let Args { literal, to, hook, json } = args;

	let target = parse_target(&to)?;
	let value = source::parse_literal(&literal)?;
	let scalar = Scalar::from_value(&value).ok_or(CliError::NotScalar { found: value.kind() })?;
	let options = hooks::options(hook);

	let out = coerce(&scalar, &target, &options).ok_or_else(|| CliError::CoercionFailed {
		from: scalar.kind(),
		to: target.to_string(),
		value: scalar.to_string(),
	})?;

	if json {
		return emit_json(&CoerceJson {
			from: scalar.kind(),
			input: scalar.to_string(),
			to: target.to_string(),
			kind: out.kind(),
			value: out.to_string(),
		});
	}
	println!("{out} ({})", out.kind());
	Ok(())
}

#[derive(serde::Serialize)]
struct CoerceJson {
	from: &'static str,
	input: String,
	to: String,
	kind: &'static str,
	value: String,
}
