use std::fmt;

use crate::{EnumSchema, Primitive, TargetType, Timestamp, Value};

/// Host-side representation of one leaf value.
///
/// This is what the coercion engine consumes and produces. [`Scalar::Absent`]
/// doubles as the empty optional.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
	/// Missing value / empty optional.
	Absent,
	/// `bool`
	Bool(bool),
	/// `char`
	Char(char),
	/// `i8`
	I8(i8),
	/// `i16`
	I16(i16),
	/// `i32`
	I32(i32),
	/// `i64`
	I64(i64),
	/// `u8`
	U8(u8),
	/// `u16`
	U16(u16),
	/// `u32`
	U32(u32),
	/// `u64`
	U64(u64),
	/// `f32`
	F32(f32),
	/// `f64`
	F64(f64),
	/// Owned text.
	String(String),
	/// Date/time.
	Timestamp(Timestamp),
	/// Enumeration symbol.
	Enum(EnumValue),
}

/// Symbol of a bindable enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumValue {
	schema: &'static EnumSchema,
	index: usize,
}

impl EnumValue {
	/// Symbol at `index` of `schema`, if in range.
	pub fn new(schema: &'static EnumSchema, index: usize) -> Option<Self> {
		(index < schema.symbols.len()).then_some(Self { schema, index })
	}

	/// Owning enum schema.
	pub fn schema(self) -> &'static EnumSchema {
		self.schema
	}

	/// Declaration index of the symbol.
	pub fn index(self) -> usize {
		self.index
	}

	/// Symbol name.
	pub fn symbol(self) -> &'static str {
		self.schema.symbols.get(self.index).copied().unwrap_or_default()
	}
}

impl Scalar {
	/// Lift a leaf [`Value`]; tables and arrays are not scalars.
	pub fn from_value(value: &Value) -> Option<Self> {
		Some(match value {
			Value::String(text) => Self::String(text.to_string()),
			Value::Integer(value) => Self::I64(*value),
			Value::Float(value) => Self::F64(*value),
			Value::Boolean(value) => Self::Bool(*value),
			Value::Timestamp(value) => Self::Timestamp(*value),
			Value::Absent => Self::Absent,
			Value::Table(_) | Value::Array(_) | Value::TableArray(_) => return None,
		})
	}

	/// Primitive this value is an instance of.
	pub fn primitive(&self) -> Option<Primitive> {
		Some(match self {
			Self::Bool(_) => Primitive::Bool,
			Self::Char(_) => Primitive::Char,
			Self::I8(_) => Primitive::I8,
			Self::I16(_) => Primitive::I16,
			Self::I32(_) => Primitive::I32,
			Self::I64(_) => Primitive::I64,
			Self::U8(_) => Primitive::U8,
			Self::U16(_) => Primitive::U16,
			Self::U32(_) => Primitive::U32,
			Self::U64(_) => Primitive::U64,
			Self::F32(_) => Primitive::F32,
			Self::F64(_) => Primitive::F64,
			Self::String(_) => Primitive::String,
			Self::Timestamp(_) => Primitive::Timestamp,
			Self::Absent | Self::Enum(_) => return None,
		})
	}

	/// Descriptor this value satisfies as-is; `None` for [`Scalar::Absent`].
	pub fn target_type(&self) -> Option<TargetType> {
		match self {
			Self::Enum(value) => Some(TargetType::Enum(value.schema)),
			other => other.primitive().map(TargetType::Primitive),
		}
	}

	/// Whether this value already has the representation `target` asks for.
	pub fn satisfies(&self, target: &TargetType) -> bool {
		match (self, target) {
			(Self::Absent, TargetType::Optional(_)) => true,
			(_, TargetType::Optional(inner)) => self.satisfies(inner),
			(Self::Enum(value), TargetType::Enum(schema)) => value.schema == *schema,
			(_, TargetType::Primitive(primitive)) => self.primitive() == Some(*primitive),
			_ => false,
		}
	}

	/// Short type label used in diagnostics.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Absent => "absent",
			Self::Enum(value) => value.schema.type_name,
			other => other.primitive().map_or("absent", Primitive::name),
		}
	}
}

impl fmt::Display for Scalar {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Absent => f.write_str("<absent>"),
			Self::Bool(value) => write!(f, "{value}"),
			Self::Char(value) => write!(f, "{value:?}"),
			Self::I8(value) => write!(f, "{value}"),
			Self::I16(value) => write!(f, "{value}"),
			Self::I32(value) => write!(f, "{value}"),
			Self::I64(value) => write!(f, "{value}"),
			Self::U8(value) => write!(f, "{value}"),
			Self::U16(value) => write!(f, "{value}"),
			Self::U32(value) => write!(f, "{value}"),
			Self::U64(value) => write!(f, "{value}"),
			Self::F32(value) => write!(f, "{value}"),
			Self::F64(value) => write!(f, "{value}"),
			Self::String(value) => write!(f, "{value:?}"),
			Self::Timestamp(value) => write!(f, "{value}"),
			Self::Enum(value) => f.write_str(value.symbol()),
		}
	}
}
