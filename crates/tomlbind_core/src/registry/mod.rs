use std::any::TypeId;
use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;
use once_cell::sync::Lazy;
use tracing::debug;

use crate::{DynAdapter, GeneratedAdapter, Model, ModelAdapter, TypeKey};

static GLOBAL: Lazy<Registry> = Lazy::new(Registry::new);

/// Thread-safe map from model type identity to its adapter.
///
/// Entries are never removed. Registering for a type that is already present
/// replaces the previous adapter.
#[derive(Default)]
pub struct Registry {
	adapters: DashMap<TypeId, Arc<dyn DynAdapter>>,
}

impl Registry {
	/// Empty registry, independent of [`Registry::global`].
	pub fn new() -> Self {
		Self::default()
	}

	/// Process-wide registry.
	pub fn global() -> &'static Registry {
		&GLOBAL
	}

	/// Insert `adapter`, returning the adapter it replaced.
	pub fn register<A: ModelAdapter>(&self, adapter: A) -> Option<Arc<dyn DynAdapter>> {
		self.register_arc(Arc::new(adapter))
	}

	/// Insert an already shared adapter, returning the adapter it replaced.
	pub fn register_arc(&self, adapter: Arc<dyn DynAdapter>) -> Option<Arc<dyn DynAdapter>> {
		let target = adapter.target();
		let previous = self.adapters.insert(target.id(), adapter);
		if previous.is_some() {
			debug!(type_name = target.name(), "adapter replaced");
		} else {
			debug!(type_name = target.name(), "adapter registered");
		}
		previous
	}

	/// Register the generated adapter for `T` and every bindable type its
	/// fields reach. Types already present are left untouched.
	pub fn register_model<T: Model>(&self) {
		if self.contains::<T>() {
			return;
		}
		self.register(GeneratedAdapter::<T>::new());
		T::register_fields(self);
	}

	/// Adapter registered for `key`.
	pub fn try_get(&self, key: TypeKey) -> Option<Arc<dyn DynAdapter>> {
		self.adapters.get(&key.id()).map(|entry| Arc::clone(entry.value()))
	}

	/// Adapter registered for `T`.
	pub fn try_get_for<T: 'static>(&self) -> Option<Arc<dyn DynAdapter>> {
		self.try_get(TypeKey::of::<T>())
	}

	/// Whether an adapter for `T` is registered.
	pub fn contains<T: 'static>(&self) -> bool {
		self.adapters.contains_key(&TypeId::of::<T>())
	}

	/// Number of registered adapters.
	pub fn len(&self) -> usize {
		self.adapters.len()
	}

	/// Whether no adapter is registered.
	pub fn is_empty(&self) -> bool {
		self.adapters.is_empty()
	}

	/// Registered model type names, sorted.
	pub fn type_names(&self) -> Vec<&'static str> {
		let mut names: Vec<_> = self.adapters.iter().map(|entry| entry.value().target().name()).collect();
		names.sort_unstable();
		names
	}
}

impl fmt::Debug for Registry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Registry").field("adapters", &self.type_names()).finish()
	}
}

#[cfg(test)]
mod tests;
