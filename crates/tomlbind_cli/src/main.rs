#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;
mod error;
mod hooks;
mod model;
mod source;

#[derive(Parser)]
#[command(name = "tomlbind", about = "Bind TOML documents onto typed models")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Bind a proxy configuration file and report diagnostics.
	Check(cmd::check::Args),
	/// Print the value tree parsed from a TOML file.
	Tree(cmd::tree::Args),
	/// Coerce one TOML literal into a target type.
	Coerce(cmd::coerce::Args),
}

fn main() {
	init_tracing();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn init_tracing() {
	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()))
		.with_writer(std::io::stderr)
		.init();
}

fn run() -> error::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Check(args) => cmd::check::run(args),
		Commands::Tree(args) => cmd::tree::run(args),
		Commands::Coerce(args) => cmd::coerce::run(args),
	}
}
