use std::path::PathBuf;

use tomlbind::{Table, Value};

use crate::cmd::util::{emit_json, value_json};
use crate::error::Result;
use crate::source;

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
}

/// Print the value tree parsed from the TOML file at `path`.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json } = args;

	let table = source::load(&path)?;
	if json {
		return emit_json(&value_json(&Value::Table(table)));
	}

	let mut out = String::new();
	render_table(&table, 0, &mut out);
	print!("{out}");
	Ok(())
}

fn render_table(table: &Table, depth: usize, out: &mut String) {
	for (key, value) in table.iter() {
		render_entry(key, value, depth, out);
	}
}

fn render_entry(label: &str, value: &Value, depth: usize, out: &mut String) {
	let indent = "  ".repeat(depth);
	match value {
		Value::Table(table) => {
			out.push_str(&format!("{indent}{label}: table ({})\n", table.len()));
			render_table(table, depth + 1, out);
		}
		Value::Array(items) => {
			out.push_str(&format!("{indent}{label}: array ({})\n", items.len()));
			for (idx, item) in items.iter().enumerate() {
				render_entry(&format!("[{idx}]"), item, depth + 1, out);
			}
		}
		Value::TableArray(tables) => {
			out.push_str(&format!("{indent}{label}: table array ({})\n", tables.len()));
			for (idx, table) in tables.iter().enumerate() {
				out.push_str(&format!("{indent}  [{idx}]: table ({})\n", table.len()));
				render_table(table, depth + 2, out);
			}
		}
		Value::String(text) => out.push_str(&format!("{indent}{label}: string = {text:?}\n")),
		Value::Integer(value) => out.push_str(&format!("{indent}{label}: integer = {value}\n")),
		Value::Float(value) => out.push_str(&format!("{indent}{label}: float = {value}\n")),
		Value::Boolean(value) => out.push_str(&format!("{indent}{label}: boolean = {value}\n")),
		Value::Timestamp(value) => out.push_str(&format!("{indent}{label}: timestamp = {value}\n")),
		Value::Absent => out.push_str(&format!("{indent}{label}: absent\n")),
	}
}
