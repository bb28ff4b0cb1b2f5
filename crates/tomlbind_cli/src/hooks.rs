//! Conversion hooks selectable from the command line.

use tomlbind::{BindOptions, PrimitiveKind, Scalar, TargetType};

/// Options for a command, with the duration hook when `enabled`.
pub(crate) fn options(enabled: bool) -> BindOptions {
	if enabled { BindOptions::with_hook(duration_seconds) } else { BindOptions::new() }
}

/// Convert strings like `90s`, `10m`, `2h`, `1d` into whole seconds for integer targets.
pub(crate) fn duration_seconds(value: &Scalar, target: &TargetType) -> Option<Scalar> {
	let Scalar::String(text) = value else {
		return None;
	};
	let TargetType::Primitive(primitive) = target else {
		return None;
	};
	if primitive.kind() != PrimitiveKind::Integer {
		return None;
	}

	let seconds = i64::try_from(parse_duration(text)?).ok()?;
	tomlbind::coerce::coerce(&Scalar::I64(seconds), target, &BindOptions::new())
}

fn parse_duration(text: &str) -> Option<u64> {
	let text = text.trim();
	let split = text.find(|ch: char| !ch.is_ascii_digit())?;
	let (digits, unit) = text.split_at(split);
	let amount: u64 = digits.parse().ok()?;
	let scale = match unit {
		"s" => 1,
		"m" => 60,
		"h" => 60 * 60,
		"d" => 24 * 60 * 60,
		_ => return None,
	};
	amount.checked_mul(scale)
}
