use std::sync::Arc;
use std::thread;

use super::Registry;
use crate::{BindContext, BindOptions, ModelAdapter, ModelSchema, Table, TypeKey};

#[derive(Debug, Default, PartialEq)]
struct Probe {
	label: &'static str,
}

static PROBE: ModelSchema = ModelSchema {
	type_name: "Probe",
	fields: &[],
};

struct LabelAdapter(&'static str);

impl ModelAdapter for LabelAdapter {
	type Model = Probe;

	fn schema(&self) -> &'static ModelSchema {
		&PROBE
	}

	fn read(&self, _table: &Table, _cx: &mut BindContext<'_>) -> Probe {
		Probe { label: self.0 }
	}
}

fn run(registry: &Registry) -> Probe {
	let adapter = registry.try_get_for::<Probe>().expect("adapter registered");
	let options = BindOptions::new();
	let mut cx = BindContext::new(registry, &options);
	*adapter.read_any(&Table::new(), &mut cx).downcast::<Probe>().expect("probe model")
}

#[test]
fn lookup_returns_registered_adapter() {
	let registry = Registry::new();
	assert!(registry.is_empty());
	assert!(registry.try_get(TypeKey::of::<Probe>()).is_none());

	assert!(registry.register(LabelAdapter("a")).is_none());
	assert!(registry.contains::<Probe>());
	assert_eq!(registry.len(), 1);
	assert_eq!(run(&registry), Probe { label: "a" });
	assert_eq!(registry.try_get(TypeKey::of::<Probe>()).expect("present").target(), TypeKey::of::<Probe>());
}

#[test]
fn last_registration_wins() {
	let registry = Registry::new();
	registry.register(LabelAdapter("a"));
	let previous = registry.register(LabelAdapter("b"));

	assert!(previous.is_some());
	assert_eq!(registry.len(), 1);
	assert_eq!(run(&registry), Probe { label: "b" });
}

#[test]
fn isolated_registries_do_not_share_entries() {
	let left = Registry::new();
	let right = Registry::new();
	left.register(LabelAdapter("left"));
	assert!(!right.contains::<Probe>());
}

#[test]
fn concurrent_registration_and_lookup() {
	let registry = Arc::new(Registry::new());
	let labels = ["t0", "t1", "t2", "t3", "t4", "t5", "t6", "t7"];
	let handles: Vec<_> = labels
		.into_iter()
		.map(|label| {
			let registry = Arc::clone(&registry);
			thread::spawn(move || {
				registry.register(LabelAdapter(label));
				run(&registry)
			})
		})
		.collect();

	for handle in handles {
		let seen = handle.join().expect("thread completes");
		assert!(labels.contains(&seen.label));
	}
	assert_eq!(registry.len(), 1);
	assert!(labels.contains(&run(&registry).label));
}

#[test]
fn debug_lists_type_names() {
	let registry = Registry::new();
	registry.register(LabelAdapter("a"));
	assert!(format!("{registry:?}").contains("Probe"));
}
