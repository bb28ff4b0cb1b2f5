//! Reflection-free leaf coercion.
//!
//! A value is pushed through a fixed chain of strategies. Each strategy either
//! produces the converted value, declines so the next one runs, or fails the
//! whole coercion:
//!
//! ```text
//! identity → optional → enum-from-text → reinterpret → convert → hook
//! ```
//!
//! Bit reinterpretation runs before the generic conversion so that a negative
//! signed value reaches an unsigned target of the same width as its bit pattern
//! instead of failing the range check.

use tracing::trace;

use crate::{BindOptions, EnumValue, Primitive, PrimitiveKind, Scalar, TargetType, Timestamp};

/// Outcome of one coercion strategy.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
	/// Conversion succeeded.
	Done(Scalar),
	/// Strategy does not apply; try the next one.
	Skip,
	/// Conversion failed; stop the chain.
	Fail,
}

type StepFn = fn(&Scalar, &TargetType, &BindOptions) -> Step;

/// Strategies in precedence order.
const CHAIN: [(&str, StepFn); 6] = [
	("identity", identity),
	("optional", unwrap_optional),
	("enum", enum_from_text),
	("reinterpret", reinterpret_same_width),
	("convert", convert),
	("hook", hook),
];

/// Convert `value` into the representation `target` asks for.
///
/// Returns `None` when no strategy succeeds; nothing is partially converted.
pub fn coerce(value: &Scalar, target: &TargetType, options: &BindOptions) -> Option<Scalar> {
	match coerce_step(value, target, options) {
		Step::Done(value) => Some(value),
		Step::Skip | Step::Fail => None,
	}
}

/// Run the chain and return the deciding outcome; never [`Step::Skip`].
pub fn coerce_step(value: &Scalar, target: &TargetType, options: &BindOptions) -> Step {
	for (name, strategy) in CHAIN {
		match strategy(value, target, options) {
			Step::Skip => continue,
			outcome => {
				trace!(strategy = name, from = value.kind(), to = %target, done = matches!(outcome, Step::Done(_)), "coercion decided");
				return outcome;
			}
		}
	}
	Step::Fail
}

fn identity(value: &Scalar, target: &TargetType, _options: &BindOptions) -> Step {
	if value.satisfies(target) { Step::Done(value.clone()) } else { Step::Skip }
}

fn unwrap_optional(value: &Scalar, target: &TargetType, options: &BindOptions) -> Step {
	let TargetType::Optional(inner) = target else {
		return Step::Skip;
	};
	if matches!(value, Scalar::Absent) {
		return Step::Done(Scalar::Absent);
	}
	coerce_step(value, inner, options)
}

fn enum_from_text(value: &Scalar, target: &TargetType, _options: &BindOptions) -> Step {
	let (TargetType::Enum(schema), Scalar::String(text)) = (target, value) else {
		return Step::Skip;
	};
	match schema.find_symbol(text).and_then(|index| EnumValue::new(schema, index)) {
		Some(symbol) => Step::Done(Scalar::Enum(symbol)),
		None => Step::Fail,
	}
}

/// Same-width signed/unsigned pairs keep their bit pattern (`-1_i32` → `u32::MAX`).
fn reinterpret_same_width(value: &Scalar, target: &TargetType, _options: &BindOptions) -> Step {
	let TargetType::Primitive(primitive) = target else {
		return Step::Skip;
	};
	let out = match (value, primitive) {
		(Scalar::I8(v), Primitive::U8) => Scalar::U8(*v as u8),
		(Scalar::U8(v), Primitive::I8) => Scalar::I8(*v as i8),
		(Scalar::I16(v), Primitive::U16) => Scalar::U16(*v as u16),
		(Scalar::U16(v), Primitive::I16) => Scalar::I16(*v as i16),
		(Scalar::I32(v), Primitive::U32) => Scalar::U32(*v as u32),
		(Scalar::U32(v), Primitive::I32) => Scalar::I32(*v as i32),
		(Scalar::I64(v), Primitive::U64) => Scalar::U64(*v as u64),
		(Scalar::U64(v), Primitive::I64) => Scalar::I64(*v as i64),
		_ => return Step::Skip,
	};
	Step::Done(out)
}

fn convert(value: &Scalar, target: &TargetType, options: &BindOptions) -> Step {
	let converted = match target {
		TargetType::Primitive(primitive) => convert_primitive(value, *primitive),
		_ => None,
	};
	match converted {
		Some(value) => Step::Done(value),
		None if options.has_hook() => Step::Skip,
		None => Step::Fail,
	}
}

fn hook(value: &Scalar, target: &TargetType, options: &BindOptions) -> Step {
	let Some(hook) = options.hook() else {
		return Step::Fail;
	};
	trace!(from = value.kind(), to = %target, "conversion hook engaged");
	match hook(value, target) {
		Some(Scalar::Absent) if !matches!(target, TargetType::Optional(_)) => Step::Fail,
		Some(value) => Step::Done(value),
		None => Step::Fail,
	}
}

fn convert_primitive(value: &Scalar, primitive: Primitive) -> Option<Scalar> {
	match primitive.kind() {
		PrimitiveKind::Bool => to_bool(value).map(Scalar::Bool),
		PrimitiveKind::Char => to_char(value).map(Scalar::Char),
		PrimitiveKind::Integer => to_integer(value, primitive),
		PrimitiveKind::Float => to_float(value, primitive),
		PrimitiveKind::String => to_text(value).map(Scalar::String),
		PrimitiveKind::Timestamp => match value {
			Scalar::String(text) => text.parse::<Timestamp>().ok().map(Scalar::Timestamp),
			_ => None,
		},
	}
}

fn to_bool(value: &Scalar) -> Option<bool> {
	match value {
		Scalar::String(text) => {
			let text = text.trim();
			if text.eq_ignore_ascii_case("true") {
				Some(true)
			} else if text.eq_ignore_ascii_case("false") {
				Some(false)
			} else {
				None
			}
		}
		Scalar::F32(v) => Some(*v != 0.0),
		Scalar::F64(v) => Some(*v != 0.0),
		other => exact_integer(other).map(|wide| wide != 0),
	}
}

fn to_char(value: &Scalar) -> Option<char> {
	match value {
		Scalar::String(text) => {
			let mut chars = text.chars();
			let first = chars.next()?;
			chars.next().is_none().then_some(first)
		}
		Scalar::Bool(_) => None,
		other => {
			let code = u32::try_from(exact_integer(other)?).ok()?;
			char::from_u32(code)
		}
	}
}

fn to_integer(value: &Scalar, primitive: Primitive) -> Option<Scalar> {
	let wide = match value {
		Scalar::F32(v) => round_float(f64::from(*v))?,
		Scalar::F64(v) => round_float(*v)?,
		Scalar::String(text) => text.trim().parse::<i128>().ok()?,
		other => exact_integer(other)?,
	};
	Some(match primitive {
		Primitive::I8 => Scalar::I8(i8::try_from(wide).ok()?),
		Primitive::I16 => Scalar::I16(i16::try_from(wide).ok()?),
		Primitive::I32 => Scalar::I32(i32::try_from(wide).ok()?),
		Primitive::I64 => Scalar::I64(i64::try_from(wide).ok()?),
		Primitive::U8 => Scalar::U8(u8::try_from(wide).ok()?),
		Primitive::U16 => Scalar::U16(u16::try_from(wide).ok()?),
		Primitive::U32 => Scalar::U32(u32::try_from(wide).ok()?),
		Primitive::U64 => Scalar::U64(u64::try_from(wide).ok()?),
		_ => return None,
	})
}

fn to_float(value: &Scalar, primitive: Primitive) -> Option<Scalar> {
	let wide = match value {
		Scalar::F32(v) => f64::from(*v),
		Scalar::F64(v) => *v,
		Scalar::String(text) => text.trim().parse::<f64>().ok()?,
		Scalar::Char(_) => return None,
		other => exact_integer(other)? as f64,
	};
	match primitive {
		Primitive::F32 => Some(Scalar::F32(wide as f32)),
		Primitive::F64 => Some(Scalar::F64(wide)),
		_ => None,
	}
}

fn to_text(value: &Scalar) -> Option<String> {
	match value {
		Scalar::Absent => None,
		Scalar::Char(v) => Some(v.to_string()),
		Scalar::String(v) => Some(v.clone()),
		other => Some(other.to_string()),
	}
}

/// Integer-like scalars widened losslessly; bool maps to 1/0, char to its code point.
fn exact_integer(value: &Scalar) -> Option<i128> {
	Some(match value {
		Scalar::Bool(v) => i128::from(*v),
		Scalar::Char(v) => i128::from(u32::from(*v)),
		Scalar::I8(v) => i128::from(*v),
		Scalar::I16(v) => i128::from(*v),
		Scalar::I32(v) => i128::from(*v),
		Scalar::I64(v) => i128::from(*v),
		Scalar::U8(v) => i128::from(*v),
		Scalar::U16(v) => i128::from(*v),
		Scalar::U32(v) => i128::from(*v),
		Scalar::U64(v) => i128::from(*v),
		_ => return None,
	})
}

/// Round half to even; non-finite input has no integer value.
fn round_float(value: f64) -> Option<i128> {
	let rounded = value.round_ties_even();
	rounded.is_finite().then_some(rounded as i128)
}
