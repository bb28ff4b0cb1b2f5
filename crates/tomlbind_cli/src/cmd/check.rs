use std::path::PathBuf;

use tomlbind::{Diagnostics, FailOnError, FailOnWarning, NeverFail, Registry, SeverityPolicy, try_bind_with};

use crate::cmd::util::{DiagnosticJson, emit_json};
use crate::error::Result;
use crate::model::{self, RootConfig};
use crate::{hooks, source};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long, value_enum, default_value_t = Policy::Default)]
	pub policy: Policy,
	/// Accept duration strings such as `10m` for integer fields.
	#[arg(long)]
	pub hook: bool,
	#[arg(long)]
	pub json: bool,
}

/// Which diagnostics reject the bind.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum Policy {
	/// Reject on warnings and errors.
	Strict,
	/// Reject on errors.
	#[default]
	Default,
	/// Never reject.
	Lenient,
}

impl Policy {
	fn severity_policy(self) -> &'static dyn SeverityPolicy {
		match self {
			Self::Strict => &FailOnWarning,
			Self::Default => &FailOnError,
			Self::Lenient => &NeverFail,
		}
	}
}

/// Bind the proxy configuration at `path` and print the model and diagnostics.
pub fn run(args: Args) -> Result<()> {
	let Args { path, policy, hook, json } = args;

	let table = source::load(&path)?;
	let registry = Registry::global();
	model::register(registry);
	let options = hooks::options(hook);

	match try_bind_with::<RootConfig>(registry, &table, &options, policy.severity_policy()) {
		Ok(bound) => {
			if json {
				print_json(&path, Some(&bound.model), &bound.diagnostics)
			} else {
				print_text(Some(&bound.model), &bound.diagnostics);
				Ok(())
			}
		}
		Err(err) => {
			if let Some(diagnostics) = err.diagnostics() {
				if json {
					print_json(&path, None, diagnostics)?;
				} else {
					print_text(None, diagnostics);
				}
			}
			Err(err.into())
		}
	}
}

#[derive(serde::Serialize)]
struct CheckJson<'a> {
	path: String,
	ok: bool,
	model: Option<&'a RootConfig>,
	diagnostics: Vec<DiagnosticJson>,
}

fn print_json(path: &std::path::Path, model: Option<&RootConfig>, diagnostics: &Diagnostics) -> Result<()> {
	emit_json(&CheckJson {
		path: path.display().to_string(),
		ok: model.is_some(),
		model,
		diagnostics: diagnostics.iter().map(DiagnosticJson::from).collect(),
	})
}

fn print_text(model: Option<&RootConfig>, diagnostics: &Diagnostics) {
	for item in diagnostics {
		println!("{item}");
	}

	let Some(model) = model else {
		return;
	};
	if let Some(server) = &model.server {
		println!("server: {} strategy={:?} timeout={}s", server.listen, server.strategy, server.timeout_seconds);
	}
	if let Some(health) = &model.health {
		println!("health: cooldown={}s", health.cooldown_seconds);
	}
	for (name, group) in &model.groups {
		println!("group {name}: strategy={:?} max_failover={}", group.strategy, group.max_failover);
	}
	println!("platforms: {}", model.platforms.len());
	for platform in &model.platforms {
		let state = if platform.enabled { "enabled" } else { "disabled" };
		println!("  {} [{}] group={} weight={} {state}", platform.name, platform.key_type, platform.group, platform.weight);
	}
}
