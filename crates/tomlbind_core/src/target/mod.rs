use std::any::{TypeId, type_name};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::{BindError, EnumSchema};

/// Host leaf type a coercion can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
	/// `bool`
	Bool,
	/// `char`
	Char,
	/// `i8`
	I8,
	/// `i16`
	I16,
	/// `i32`
	I32,
	/// `i64`
	I64,
	/// `u8`
	U8,
	/// `u16`
	U16,
	/// `u32`
	U32,
	/// `u64`
	U64,
	/// `f32`
	F32,
	/// `f64`
	F64,
	/// `String`
	String,
	/// [`crate::Timestamp`]
	Timestamp,
}

/// Coarse classification of a [`Primitive`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
	/// Boolean.
	Bool,
	/// Unicode scalar value.
	Char,
	/// Fixed-width integer.
	Integer,
	/// IEEE 754 float.
	Float,
	/// Owned text.
	String,
	/// Date/time.
	Timestamp,
}

/// Integer sign interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signedness {
	/// Two's complement signed.
	Signed,
	/// Unsigned.
	Unsigned,
}

impl Primitive {
	/// Every primitive, integers ordered by width.
	pub const ALL: [Primitive; 14] = [
		Self::Bool,
		Self::Char,
		Self::I8,
		Self::I16,
		Self::I32,
		Self::I64,
		Self::U8,
		Self::U16,
		Self::U32,
		Self::U64,
		Self::F32,
		Self::F64,
		Self::String,
		Self::Timestamp,
	];

	/// Rust spelling of the type.
	pub const fn name(self) -> &'static str {
		match self {
			Self::Bool => "bool",
			Self::Char => "char",
			Self::I8 => "i8",
			Self::I16 => "i16",
			Self::I32 => "i32",
			Self::I64 => "i64",
			Self::U8 => "u8",
			Self::U16 => "u16",
			Self::U32 => "u32",
			Self::U64 => "u64",
			Self::F32 => "f32",
			Self::F64 => "f64",
			Self::String => "String",
			Self::Timestamp => "Timestamp",
		}
	}

	/// Coarse kind.
	pub const fn kind(self) -> PrimitiveKind {
		match self {
			Self::Bool => PrimitiveKind::Bool,
			Self::Char => PrimitiveKind::Char,
			Self::I8 | Self::I16 | Self::I32 | Self::I64 | Self::U8 | Self::U16 | Self::U32 | Self::U64 => PrimitiveKind::Integer,
			Self::F32 | Self::F64 => PrimitiveKind::Float,
			Self::String => PrimitiveKind::String,
			Self::Timestamp => PrimitiveKind::Timestamp,
		}
	}

	/// Bit width of numeric primitives.
	pub const fn bit_width(self) -> Option<u32> {
		match self {
			Self::I8 | Self::U8 => Some(8),
			Self::I16 | Self::U16 => Some(16),
			Self::I32 | Self::U32 | Self::F32 => Some(32),
			Self::I64 | Self::U64 | Self::F64 => Some(64),
			_ => None,
		}
	}

	/// Signedness of integer primitives.
	pub const fn signedness(self) -> Option<Signedness> {
		match self {
			Self::I8 | Self::I16 | Self::I32 | Self::I64 => Some(Signedness::Signed),
			Self::U8 | Self::U16 | Self::U32 | Self::U64 => Some(Signedness::Unsigned),
			_ => None,
		}
	}

	/// Integer primitive with the given width and signedness.
	pub const fn integer(bits: u32, signedness: Signedness) -> Option<Self> {
		match (bits, signedness) {
			(8, Signedness::Signed) => Some(Self::I8),
			(16, Signedness::Signed) => Some(Self::I16),
			(32, Signedness::Signed) => Some(Self::I32),
			(64, Signedness::Signed) => Some(Self::I64),
			(8, Signedness::Unsigned) => Some(Self::U8),
			(16, Signedness::Unsigned) => Some(Self::U16),
			(32, Signedness::Unsigned) => Some(Self::U32),
			(64, Signedness::Unsigned) => Some(Self::U64),
			_ => None,
		}
	}
}

impl fmt::Display for Primitive {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Primitive {
	type Err = BindError;

	fn from_str(name: &str) -> Result<Self, Self::Err> {
		if let Some(found) = Self::ALL.into_iter().find(|item| item.name().eq_ignore_ascii_case(name)) {
			return Ok(found);
		}
		match name.to_ascii_lowercase().as_str() {
			"str" => Ok(Self::String),
			"datetime" => Ok(Self::Timestamp),
			_ => Err(BindError::UnknownPrimitive { name: name.to_owned() }),
		}
	}
}

/// Runtime identity of a Rust type used as a registry key.
#[derive(Debug, Clone, Copy)]
pub struct TypeKey {
	id: TypeId,
	name: &'static str,
}

impl TypeKey {
	/// Key for `T`.
	pub fn of<T: ?Sized + 'static>() -> Self {
		Self {
			id: TypeId::of::<T>(),
			name: type_name::<T>(),
		}
	}

	/// Underlying [`TypeId`].
	pub fn id(self) -> TypeId {
		self.id
	}

	/// Fully qualified type name.
	pub fn name(self) -> &'static str {
		self.name
	}

	/// Type name with the module path stripped.
	pub fn short_name(self) -> &'static str {
		self.name.rsplit("::").next().unwrap_or(self.name)
	}
}

impl PartialEq for TypeKey {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.id.hash(state);
	}
}

/// Shape of a host field or type a value is converted into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetType {
	/// Scalar leaf.
	Primitive(Primitive),
	/// Optional wrapper around another target.
	Optional(Box<TargetType>),
	/// Enumeration with a fixed symbol set.
	Enum(&'static EnumSchema),
	/// Bindable model resolved through the registry.
	Nested(TypeKey),
}

impl TargetType {
	/// Wrap `inner` as optional.
	pub fn optional(inner: TargetType) -> Self {
		Self::Optional(Box::new(inner))
	}

	/// Nested model target for `T`.
	pub fn nested<T: 'static>() -> Self {
		Self::Nested(TypeKey::of::<T>())
	}
}

impl From<Primitive> for TargetType {
	fn from(value: Primitive) -> Self {
		Self::Primitive(value)
	}
}

impl fmt::Display for TargetType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Primitive(primitive) => f.write_str(primitive.name()),
			Self::Optional(inner) => write!(f, "Option<{inner}>"),
			Self::Enum(schema) => f.write_str(schema.type_name),
			Self::Nested(key) => f.write_str(key.short_name()),
		}
	}
}
