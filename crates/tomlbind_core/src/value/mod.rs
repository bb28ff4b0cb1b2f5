use crate::Timestamp;

/// One node of a parsed value tree.
///
/// Trees are produced once by an external parser and only read by the binder.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// String-keyed mapping with insertion order preserved.
	Table(Table),
	/// Ordered sequence of arbitrary values.
	Array(Vec<Value>),
	/// Ordered sequence of tables, as produced by `[[name]]` sections.
	TableArray(Vec<Table>),
	/// UTF-8 text.
	String(Box<str>),
	/// 64-bit signed integer.
	Integer(i64),
	/// 64-bit float.
	Float(f64),
	/// Boolean.
	Boolean(bool),
	/// Date, time, or date-time.
	Timestamp(Timestamp),
	/// Explicitly missing value.
	Absent,
}

impl Value {
	/// Short lowercase name of the node kind, used in diagnostics.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Table(_) => "table",
			Self::Array(_) => "array",
			Self::TableArray(_) => "table array",
			Self::String(_) => "string",
			Self::Integer(_) => "integer",
			Self::Float(_) => "float",
			Self::Boolean(_) => "boolean",
			Self::Timestamp(_) => "timestamp",
			Self::Absent => "absent",
		}
	}

	/// Whether this node is [`Value::Absent`].
	pub fn is_absent(&self) -> bool {
		matches!(self, Self::Absent)
	}

	/// Borrow the table payload.
	pub fn as_table(&self) -> Option<&Table> {
		match self {
			Self::Table(table) => Some(table),
			_ => None,
		}
	}

	/// Borrow the string payload.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(text) => Some(text),
			_ => None,
		}
	}

	/// Return the integer payload.
	pub fn as_integer(&self) -> Option<i64> {
		match self {
			Self::Integer(value) => Some(*value),
			_ => None,
		}
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::String(value.into())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Self::String(value.into_boxed_str())
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Self::Integer(value)
	}
}

impl From<i32> for Value {
	fn from(value: i32) -> Self {
		Self::Integer(i64::from(value))
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Self::Float(value)
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Self::Boolean(value)
	}
}

impl From<Timestamp> for Value {
	fn from(value: Timestamp) -> Self {
		Self::Timestamp(value)
	}
}

impl From<Table> for Value {
	fn from(value: Table) -> Self {
		Self::Table(value)
	}
}

impl From<Vec<Value>> for Value {
	fn from(value: Vec<Value>) -> Self {
		Self::Array(value)
	}
}

/// String-keyed table preserving insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
	entries: Vec<TableEntry>,
}

/// One key/value pair of a [`Table`].
#[derive(Debug, Clone, PartialEq)]
pub struct TableEntry {
	/// Entry key.
	pub key: Box<str>,
	/// Entry value.
	pub value: Value,
}

impl Table {
	/// Create an empty table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Create an empty table with room for `capacity` entries.
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			entries: Vec::with_capacity(capacity),
		}
	}

	/// Insert or replace an entry.
	///
	/// A replaced entry keeps its original position; the previous value is returned.
	pub fn insert(&mut self, key: impl Into<Box<str>>, value: impl Into<Value>) -> Option<Value> {
		let key = key.into();
		let value = value.into();
		if let Some(entry) = self.entries.iter_mut().find(|entry| entry.key == key) {
			return Some(std::mem::replace(&mut entry.value, value));
		}
		self.entries.push(TableEntry { key, value });
		None
	}

	/// Look up a value by key.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.entries.iter().find(|entry| entry.key.as_ref() == key).map(|entry| &entry.value)
	}

	/// Whether `key` is present.
	pub fn contains_key(&self, key: &str) -> bool {
		self.get(key).is_some()
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the table has no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterate entries in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.entries.iter().map(|entry| (entry.key.as_ref(), &entry.value))
	}

	/// Iterate keys in insertion order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.entries.iter().map(|entry| entry.key.as_ref())
	}

	/// Borrow the raw entries.
	pub fn entries(&self) -> &[TableEntry] {
		&self.entries
	}
}

impl<K, V> FromIterator<(K, V)> for Table
where
	K: Into<Box<str>>,
	V: Into<Value>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut table = Self::new();
		for (key, value) in iter {
			table.insert(key, value);
		}
		table
	}
}
