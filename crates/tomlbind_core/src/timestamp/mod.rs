use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat};

use crate::BindError;

const LOCAL_DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const LOCAL_DATE_FORMAT: &str = "%Y-%m-%d";
const LOCAL_TIME_FORMAT: &str = "%H:%M:%S%.f";

/// TOML-style date/time leaf value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timestamp {
	/// Date-time with a fixed UTC offset.
	OffsetDateTime(DateTime<FixedOffset>),
	/// Date-time without offset.
	LocalDateTime(NaiveDateTime),
	/// Calendar date only.
	LocalDate(NaiveDate),
	/// Time of day only.
	LocalTime(NaiveTime),
}

impl Default for Timestamp {
	fn default() -> Self {
		Self::LocalDateTime(NaiveDateTime::default())
	}
}

impl FromStr for Timestamp {
	type Err = BindError;

	/// Parse RFC 3339 text; a space may replace the `T` separator.
	fn from_str(input: &str) -> Result<Self, Self::Err> {
		let text = input.trim();
		let normalized = normalize_separator(text);

		if let Ok(value) = DateTime::parse_from_rfc3339(&normalized) {
			return Ok(Self::OffsetDateTime(value));
		}
		if let Ok(value) = NaiveDateTime::parse_from_str(&normalized, LOCAL_DATE_TIME_FORMAT) {
			return Ok(Self::LocalDateTime(value));
		}
		if let Ok(value) = NaiveDate::parse_from_str(text, LOCAL_DATE_FORMAT) {
			return Ok(Self::LocalDate(value));
		}
		if let Ok(value) = NaiveTime::parse_from_str(text, LOCAL_TIME_FORMAT) {
			return Ok(Self::LocalTime(value));
		}

		Err(BindError::InvalidTimestamp { input: input.to_owned() })
	}
}

impl fmt::Display for Timestamp {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::OffsetDateTime(value) => f.write_str(&value.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
			Self::LocalDateTime(value) => write!(f, "{}", value.format(LOCAL_DATE_TIME_FORMAT)),
			Self::LocalDate(value) => write!(f, "{}", value.format(LOCAL_DATE_FORMAT)),
			Self::LocalTime(value) => write!(f, "{}", value.format(LOCAL_TIME_FORMAT)),
		}
	}
}

fn normalize_separator(text: &str) -> String {
	match text.as_bytes().get(10) {
		Some(b' ' | b't') => format!("{}T{}", &text[..10], &text[11..]),
		_ => text.to_owned(),
	}
}

#[cfg(test)]
mod tests;
