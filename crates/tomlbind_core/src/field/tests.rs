use std::collections::{BTreeMap, HashMap};

use super::{BindEnum, BindField};
use crate::{BindContext, BindOptions, DiagnosticKind, FieldSchema, Registry, Table, Timestamp, Value};

crate::bindable_enum! {
	#[derive(Debug, Clone, Copy, PartialEq)]
	enum Level {
		Low,
		High,
	}
}

fn read<T: BindField>(value: &Value) -> (Option<T>, Vec<String>) {
	let registry = Registry::new();
	let options = BindOptions::new();
	let mut cx = BindContext::new(&registry, &options);
	let out = T::read_value(value, &mut cx);
	let paths = cx.into_diagnostics().into_iter().map(|item| item.path.to_string()).collect();
	(out, paths)
}

#[test]
fn leaves_coerce_from_natural_values() {
	assert_eq!(read::<u8>(&Value::from(200_i64)), (Some(200), vec![]));
	assert_eq!(read::<f32>(&Value::from(2_i64)), (Some(2.0), vec![]));
	assert_eq!(read::<String>(&Value::from(true)), (Some("true".to_owned()), vec![]));
	assert_eq!(read::<char>(&Value::from("x")), (Some('x'), vec![]));

	let (stamp, _) = read::<Timestamp>(&Value::from("1979-05-27T07:32:00Z"));
	assert!(matches!(stamp, Some(Timestamp::OffsetDateTime(_))));
}

#[test]
fn leaf_failure_reports_at_current_path() {
	assert_eq!(read::<u8>(&Value::from(-1_i64)), (None, vec![String::new()]));
}

#[test]
fn enum_reads_symbols_case_insensitively() {
	assert_eq!(read::<Level>(&Value::from("HIGH")), (Some(Level::High), vec![]));
	assert_eq!(read::<Level>(&Value::from("hi")).0, None);
	assert_eq!(Level::schema().symbols, ["Low", "High"]);
	assert_eq!(Level::High.symbol(), "High");
	assert_eq!(Level::from_index(2), None);
}

#[test]
fn option_accepts_absent_and_inner() {
	assert_eq!(read::<Option<i32>>(&Value::Absent), (Some(None), vec![]));
	assert_eq!(read::<Option<i32>>(&Value::from(4_i64)), (Some(Some(4)), vec![]));
	assert_eq!(read::<Option<i32>>(&Value::from("four")).0, None);
	assert!(!<Option<i32> as BindField>::REQUIRED);
	assert!(<i32 as BindField>::REQUIRED);
}

#[test]
fn vec_drops_failed_elements_with_indexed_paths() {
	let value = Value::from(vec![Value::from(1_i64), Value::from("two"), Value::from(3_i64)]);
	let (out, paths) = read::<Vec<u16>>(&value);
	assert_eq!(out, Some(vec![1, 3]));
	assert_eq!(paths, ["[1]"]);
}

#[test]
fn vec_rejects_scalars() {
	let (out, _) = read::<Vec<u16>>(&Value::from(1_i64));
	assert_eq!(out, None);
	assert_eq!(<Vec<u16> as BindField>::expected(), "array of u16");
}

#[test]
fn table_array_of_leaves_is_a_shape_error() {
	let value = Value::TableArray(vec![Table::new()]);
	let registry = Registry::new();
	let options = BindOptions::new();
	let mut cx = BindContext::new(&registry, &options);

	assert_eq!(<Vec<u16> as BindField>::read_value(&value, &mut cx), Some(vec![]));
	let item = cx.diagnostics().iter().next().expect("one diagnostic");
	assert_eq!(
		item.kind,
		DiagnosticKind::UnexpectedShape {
			expected: "u16".to_owned(),
			found: "table",
		}
	);
	assert_eq!(&*item.path, "[0]");
}

#[test]
fn maps_read_every_entry_in_order() {
	let table: Table = [("b", Value::from(2_i64)), ("a", Value::from(1_i64)), ("c", Value::from("x"))].into_iter().collect();
	let value = Value::Table(table);

	let (tree, paths) = read::<BTreeMap<String, i64>>(&value);
	let tree = tree.expect("map binds");
	assert_eq!(tree.len(), 2);
	assert_eq!(tree.get("a"), Some(&1));
	assert_eq!(paths, ["c"]);

	let (hashed, _) = read::<HashMap<String, i64>>(&value);
	assert_eq!(hashed.expect("map binds").get("b"), Some(&2));
}

#[test]
fn maps_reject_non_tables() {
	let (out, _) = read::<BTreeMap<String, i64>>(&Value::Array(Vec::new()));
	assert_eq!(out, None);
}

#[test]
fn vec_field_binds_surviving_elements() {
	let registry = Registry::new();
	let options = BindOptions::new();
	let mut cx = BindContext::new(&registry, &options);
	let ports = Value::from(vec![Value::from(1_i64), Value::from("x"), Value::from(3_i64)]);
	let table: Table = [("ports", ports)].into_iter().collect();
	let field = FieldSchema::new("ports", None, false);
	let mut slot = vec![9_u16];

	cx.read_field(&table, &field, &mut slot);

	assert_eq!(slot, [1, 3]);
	let diagnostics = cx.into_diagnostics();
	assert_eq!(diagnostics.len(), 1);
	let item = diagnostics.iter().next().expect("one diagnostic");
	assert_eq!(&*item.path, "ports[1]");
	assert!(matches!(item.kind, DiagnosticKind::Conversion { .. }));

	let mut cx = BindContext::new(&registry, &options);
	let table: Table = [("ports", Value::from("80"))].into_iter().collect();
	let mut slot = vec![9_u16];
	cx.read_field(&table, &field, &mut slot);
	assert_eq!(slot, [9]);
	assert_eq!(cx.diagnostics().len(), 1);
}
