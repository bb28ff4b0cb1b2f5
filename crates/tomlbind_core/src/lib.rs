//! Reflection-free binding of parsed TOML value trees onto typed models.
//!
//! A parser produces a [`Value`] tree. Model types declared with
//! [`bindable!`] get a compile-time field list and a generated adapter; the
//! [`Registry`] maps each model type to its adapter, and scalar leaves go
//! through the [`coerce`](coerce::coerce) chain. Bad data never panics: every
//! problem becomes a [`Diagnostic`] and the affected field keeps its default.

mod adapter;
mod bind;
/// Leaf coercion chain and its individual strategies.
pub mod coerce;
mod context;
mod diagnostic;
mod error;
mod field;
mod macros;
mod options;
mod registry;
mod scalar;
mod schema;
mod target;
mod timestamp;
mod value;

/// Adapter traits and the generated adapter.
pub use adapter::{DynAdapter, GeneratedAdapter, Model, ModelAdapter};
/// Bind entry points and severity policies.
pub use bind::{Bound, FailOnError, FailOnWarning, NeverFail, SeverityPolicy, bind, try_bind, try_bind_with};
/// Per-call binding state.
pub use context::{BindContext, Segment};
/// Diagnostic records.
pub use diagnostic::{Diagnostic, DiagnosticKind, Diagnostics, Severity, Tier};
/// Error type and result alias.
pub use error::{BindError, Result};
/// Field kinds a generated adapter can fill.
pub use field::{BindEnum, BindField};
/// Binding options and the conversion hook signature.
pub use options::{BindOptions, ConvertHook};
/// Adapter registry.
pub use registry::Registry;
/// Host leaf values.
pub use scalar::{EnumValue, Scalar};
/// Compile-time model and enum descriptions.
pub use schema::{EnumSchema, FieldSchema, ModelSchema, derive_key};
/// Coercion target descriptors.
pub use target::{Primitive, PrimitiveKind, Signedness, TargetType, TypeKey};
/// TOML-style date/time leaf.
pub use timestamp::Timestamp;
/// Parsed value tree.
pub use value::{Table, TableEntry, Value};
