use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::{BindContext, DiagnosticKind, EnumSchema, Primitive, Registry, Scalar, Table, TargetType, Timestamp, Value};

/// Field type a generated adapter can fill.
pub trait BindField: Sized + 'static {
	/// Whether a missing key is reported.
	const REQUIRED: bool = true;

	/// Shape name used in diagnostics.
	fn expected() -> String;

	/// Convert `value`; `None` means a diagnostic was reported.
	fn read_value(value: &Value, cx: &mut BindContext<'_>) -> Option<Self>;

	/// Convert an element of a table array.
	fn read_table(_table: &Table, cx: &mut BindContext<'_>) -> Option<Self> {
		cx.report(DiagnosticKind::UnexpectedShape {
			expected: Self::expected(),
			found: "table",
		});
		None
	}

	/// Register adapters for bindable types this field reaches.
	fn register_graph(_registry: &Registry) {}
}

/// Enumeration bindable from its symbol names, implemented by [`crate::bindable_enum!`].
pub trait BindEnum: Sized + 'static {
	/// Declared symbols.
	fn schema() -> &'static EnumSchema;

	/// Variant at declaration `index`.
	fn from_index(index: usize) -> Option<Self>;

	/// Variant name.
	fn symbol(&self) -> &'static str;
}

macro_rules! leaf_field {
	($($ty:ty => $primitive:ident;)*) => {$(
		impl BindField for $ty {
			fn expected() -> String {
				Primitive::$primitive.name().to_owned()
			}

			fn read_value(value: &Value, cx: &mut BindContext<'_>) -> Option<Self> {
				cx.read_leaf(value, &TargetType::Primitive(Primitive::$primitive), |scalar| match scalar {
					Scalar::$primitive(out) => Some(out),
					_ => None,
				})
			}
		}
	)*};
}

leaf_field! {
	bool => Bool;
	char => Char;
	i8 => I8;
	i16 => I16;
	i32 => I32;
	i64 => I64;
	u8 => U8;
	u16 => U16;
	u32 => U32;
	u64 => U64;
	f32 => F32;
	f64 => F64;
	String => String;
	Timestamp => Timestamp;
}

impl<T: BindField> BindField for Option<T> {
	const REQUIRED: bool = false;

	fn expected() -> String {
		format!("optional {}", T::expected())
	}

	fn read_value(value: &Value, cx: &mut BindContext<'_>) -> Option<Self> {
		if value.is_absent() {
			return Some(None);
		}
		T::read_value(value, cx).map(Some)
	}

	fn read_table(table: &Table, cx: &mut BindContext<'_>) -> Option<Self> {
		T::read_table(table, cx).map(Some)
	}

	fn register_graph(registry: &Registry) {
		T::register_graph(registry);
	}
}

impl<T: BindField> BindField for Vec<T> {
	const REQUIRED: bool = false;

	fn expected() -> String {
		format!("array of {}", T::expected())
	}

	fn read_value(value: &Value, cx: &mut BindContext<'_>) -> Option<Self> {
		match value {
			Value::Array(items) => Some(
				items
					.iter()
					.enumerate()
					.filter_map(|(idx, item)| cx.with_index(idx, |cx| T::read_value(item, cx)))
					.collect(),
			),
			Value::TableArray(tables) => Some(
				tables
					.iter()
					.enumerate()
					.filter_map(|(idx, table)| cx.with_index(idx, |cx| T::read_table(table, cx)))
					.collect(),
			),
			other => shape_error(Self::expected(), other, cx),
		}
	}

	fn register_graph(registry: &Registry) {
		T::register_graph(registry);
	}
}

impl<T: BindField> BindField for BTreeMap<String, T> {
	const REQUIRED: bool = false;

	fn expected() -> String {
		format!("table of {}", T::expected())
	}

	fn read_value(value: &Value, cx: &mut BindContext<'_>) -> Option<Self> {
		match value {
			Value::Table(table) => Self::read_table(table, cx),
			other => shape_error(Self::expected(), other, cx),
		}
	}

	fn read_table(table: &Table, cx: &mut BindContext<'_>) -> Option<Self> {
		Some(read_entries(table, cx).into_iter().collect())
	}

	fn register_graph(registry: &Registry) {
		T::register_graph(registry);
	}
}

impl<T, S> BindField for HashMap<String, T, S>
where
	T: BindField,
	S: BuildHasher + Default + 'static,
{
	const REQUIRED: bool = false;

	fn expected() -> String {
		format!("table of {}", T::expected())
	}

	fn read_value(value: &Value, cx: &mut BindContext<'_>) -> Option<Self> {
		match value {
			Value::Table(table) => Self::read_table(table, cx),
			other => shape_error(Self::expected(), other, cx),
		}
	}

	fn read_table(table: &Table, cx: &mut BindContext<'_>) -> Option<Self> {
		Some(read_entries(table, cx).into_iter().collect())
	}

	fn register_graph(registry: &Registry) {
		T::register_graph(registry);
	}
}

fn shape_error<T>(expected: String, value: &Value, cx: &mut BindContext<'_>) -> Option<T> {
	cx.report(DiagnosticKind::UnexpectedShape {
		expected,
		found: value.kind(),
	});
	None
}

/// Entries of `table` that convert, keyed by their table key.
fn read_entries<T: BindField>(table: &Table, cx: &mut BindContext<'_>) -> Vec<(String, T)> {
	let mut out = Vec::with_capacity(table.len());
	for (key, value) in table.iter() {
		if let Some(item) = cx.with_key(key.to_owned(), |cx| T::read_value(value, cx)) {
			out.push((key.to_owned(), item));
		}
	}
	out
}

#[cfg(test)]
mod tests;
