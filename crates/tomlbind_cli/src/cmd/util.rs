use serde::Serialize;
use tomlbind::{Diagnostic, Primitive, TargetType, Value};

use crate::error::Result;
use crate::model::Strategy;

/// Print `payload` as pretty JSON on stdout.
pub(crate) fn emit_json<T: Serialize>(payload: &T) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(payload)?);
	Ok(())
}

#[derive(Serialize)]
pub(crate) struct DiagnosticJson {
	severity: &'static str,
	tier: &'static str,
	path: String,
	message: String,
}

impl From<&Diagnostic> for DiagnosticJson {
	fn from(item: &Diagnostic) -> Self {
		Self {
			severity: item.severity.as_str(),
			tier: item.tier().as_str(),
			path: item.path.to_string(),
			message: item.message.to_string(),
		}
	}
}

/// Natural JSON form of a value tree node; timestamps render as RFC 3339 text.
pub(crate) fn value_json(value: &Value) -> serde_json::Value {
	match value {
		Value::Table(table) => serde_json::Value::Object(table.iter().map(|(key, value)| (key.to_owned(), value_json(value))).collect()),
		Value::Array(items) => serde_json::Value::Array(items.iter().map(value_json).collect()),
		Value::TableArray(tables) => serde_json::Value::Array(
			tables
				.iter()
				.map(|table| serde_json::Value::Object(table.iter().map(|(key, value)| (key.to_owned(), value_json(value))).collect()))
				.collect(),
		),
		Value::String(text) => serde_json::Value::from(&**text),
		Value::Integer(value) => serde_json::Value::from(*value),
		Value::Float(value) => serde_json::Value::from(*value),
		Value::Boolean(value) => serde_json::Value::from(*value),
		Value::Timestamp(value) => serde_json::Value::from(value.to_string()),
		Value::Absent => serde_json::Value::Null,
	}
}

/// Parse a target type name: a primitive, `strategy`, or `option<...>`.
pub(crate) fn parse_target(name: &str) -> Result<TargetType> {
	let name = name.trim();
	let lower = name.to_ascii_lowercase();
	if let Some(inner) = lower.strip_prefix("option<").and_then(|rest| rest.strip_suffix('>')) {
		return Ok(TargetType::optional(parse_target(inner)?));
	}
	if lower == "strategy" {
		return Ok(TargetType::Enum(<Strategy as tomlbind::BindEnum>::schema()));
	}
	Ok(TargetType::Primitive(name.parse::<Primitive>()?))
}
