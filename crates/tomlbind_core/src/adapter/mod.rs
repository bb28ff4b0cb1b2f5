use std::any::Any;
use std::fmt;
use std::marker::PhantomData;

use crate::{BindContext, ModelSchema, Registry, Table, TypeKey};

/// Conversion logic bound to one model type.
///
/// Implementations must not panic on bad data: problems are reported through
/// the context and the affected fields keep their defaults.
pub trait ModelAdapter: Send + Sync + 'static {
	/// Type this adapter produces.
	type Model: 'static;

	/// Declared shape of the model.
	fn schema(&self) -> &'static ModelSchema;

	/// Build a model from `table`.
	fn read(&self, table: &Table, cx: &mut BindContext<'_>) -> Self::Model;
}

/// Object-safe form of [`ModelAdapter`] stored by the [`Registry`].
pub trait DynAdapter: Send + Sync {
	/// Identity of the produced model type.
	fn target(&self) -> TypeKey;

	/// Declared shape of the model.
	fn schema(&self) -> &'static ModelSchema;

	/// Build a model from `table`, boxed as [`Any`].
	fn read_any(&self, table: &Table, cx: &mut BindContext<'_>) -> Box<dyn Any>;
}

impl<A: ModelAdapter> DynAdapter for A {
	fn target(&self) -> TypeKey {
		TypeKey::of::<A::Model>()
	}

	fn schema(&self) -> &'static ModelSchema {
		ModelAdapter::schema(self)
	}

	fn read_any(&self, table: &Table, cx: &mut BindContext<'_>) -> Box<dyn Any> {
		Box::new(self.read(table, cx))
	}
}

impl fmt::Debug for dyn DynAdapter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DynAdapter").field("target", &self.target().name()).finish()
	}
}

/// Model type with a compile-time field list, implemented by [`crate::bindable!`].
pub trait Model: Default + 'static {
	/// Declared shape.
	fn schema() -> &'static ModelSchema;

	/// Overwrite fields from `table`; fields that fail keep their current value.
	fn read_fields(&mut self, table: &Table, cx: &mut BindContext<'_>);

	/// Register adapters for bindable types reachable from the fields.
	fn register_fields(registry: &Registry);
}

/// Adapter that starts from `T::default()` and reads each declared field.
pub struct GeneratedAdapter<T>(PhantomData<fn() -> T>);

impl<T> GeneratedAdapter<T> {
	/// Adapter for `T`.
	pub const fn new() -> Self {
		Self(PhantomData)
	}
}

impl<T> Default for GeneratedAdapter<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> fmt::Debug for GeneratedAdapter<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "GeneratedAdapter<{}>", std::any::type_name::<T>())
	}
}

impl<T: Model> ModelAdapter for GeneratedAdapter<T> {
	type Model = T;

	fn schema(&self) -> &'static ModelSchema {
		T::schema()
	}

	fn read(&self, table: &Table, cx: &mut BindContext<'_>) -> T {
		let mut model = T::default();
		model.read_fields(table, cx);
		model
	}
}
