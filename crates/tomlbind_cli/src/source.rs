//! Bridge from the `toml` crate's document model into a [`tomlbind::Value`] tree.

use std::fs;
use std::path::Path;

use tomlbind::{Table, Value};

use crate::error::{CliError, Result};

/// Read and convert the TOML document at `path`.
pub(crate) fn load(path: &Path) -> Result<Table> {
	let text = fs::read_to_string(path).map_err(|source| CliError::Io {
		path: path.to_path_buf(),
		source,
	})?;
	parse_document(&text)
}

/// Parse a full TOML document.
pub(crate) fn parse_document(text: &str) -> Result<Table> {
	let document: toml::Table = text.parse()?;
	convert_table(&document)
}

/// Parse a single TOML literal such as `42`, `"text"`, or `1979-05-27`.
///
/// Text that is not a valid literal is taken as a bare string.
pub(crate) fn parse_literal(text: &str) -> Result<Value> {
	let Ok(document) = format!("value = {text}").parse::<toml::Table>() else {
		return Ok(Value::from(text));
	};
	match document.get("value") {
		Some(value) => convert_value(value),
		None => Ok(Value::from(text)),
	}
}

fn convert_table(table: &toml::Table) -> Result<Table> {
	table.iter().map(|(key, value)| Ok((key.as_str(), convert_value(value)?))).collect()
}

fn convert_value(value: &toml::Value) -> Result<Value> {
	Ok(match value {
		toml::Value::String(text) => Value::from(text.as_str()),
		toml::Value::Integer(value) => Value::Integer(*value),
		toml::Value::Float(value) => Value::Float(*value),
		toml::Value::Boolean(value) => Value::Boolean(*value),
		toml::Value::Datetime(value) => Value::Timestamp(value.to_string().parse()?),
		toml::Value::Array(items) if !items.is_empty() && items.iter().all(toml::Value::is_table) => Value::TableArray(
			items
				.iter()
				.filter_map(toml::Value::as_table)
				.map(convert_table)
				.collect::<Result<_>>()?,
		),
		toml::Value::Array(items) => Value::Array(items.iter().map(convert_value).collect::<Result<_>>()?),
		toml::Value::Table(table) => Value::Table(convert_table(table)?),
	})
}

#[cfg(test)]
mod tests {
	use tomlbind::{Timestamp, Value};

	use super::{parse_document, parse_literal};

	#[test]
	fn tables_keep_document_order() {
		let table = parse_document("zeta = 1\nalpha = 2\n[mid]\nx = true\n").expect("document parses");
		assert_eq!(table.keys().collect::<Vec<_>>(), ["zeta", "alpha", "mid"]);
		assert!(table.get("mid").and_then(Value::as_table).is_some());
	}

	#[test]
	fn arrays_of_tables_become_table_arrays() {
		let table = parse_document("[[items]]\nname = \"a\"\n[[items]]\nname = \"b\"\n").expect("document parses");
		let Some(Value::TableArray(items)) = table.get("items") else {
			panic!("expected table array");
		};
		assert_eq!(items.len(), 2);

		let mixed = parse_document("values = [1, 2]\nempty = []\n").expect("document parses");
		assert!(matches!(mixed.get("values"), Some(Value::Array(items)) if items.len() == 2));
		assert!(matches!(mixed.get("empty"), Some(Value::Array(items)) if items.is_empty()));
	}

	#[test]
	fn datetimes_become_timestamps() {
		let table = parse_document("a = 1979-05-27T07:32:00Z\nb = 1979-05-27\nc = 07:32:00\nd = 1979-05-27T07:32:00\n").expect("document parses");
		assert!(matches!(table.get("a"), Some(Value::Timestamp(Timestamp::OffsetDateTime(_)))));
		assert!(matches!(table.get("b"), Some(Value::Timestamp(Timestamp::LocalDate(_)))));
		assert!(matches!(table.get("c"), Some(Value::Timestamp(Timestamp::LocalTime(_)))));
		assert!(matches!(table.get("d"), Some(Value::Timestamp(Timestamp::LocalDateTime(_)))));
	}

	#[test]
	fn literals_fall_back_to_bare_strings() {
		assert!(matches!(parse_literal("-1").expect("literal"), Value::Integer(-1)));
		assert_eq!(parse_literal("\"weighted\"").expect("literal").as_str(), Some("weighted"));
		assert_eq!(parse_literal("10m").expect("literal").as_str(), Some("10m"));
	}
}
