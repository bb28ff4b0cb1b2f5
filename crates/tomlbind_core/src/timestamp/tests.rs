use chrono::{Datelike, Timelike};

use super::Timestamp;

#[test]
fn offset_date_time_parses_and_displays_with_z() {
	let value: Timestamp = "1979-05-27T07:32:00Z".parse().expect("offset date-time parses");
	let Timestamp::OffsetDateTime(inner) = value else {
		panic!("expected offset date-time, got {value:?}");
	};
	assert_eq!(inner.hour(), 7);
	assert_eq!(value.to_string(), "1979-05-27T07:32:00Z");
}

#[test]
fn space_separator_is_accepted() {
	let value: Timestamp = "1979-05-27 00:32:00-07:00".parse().expect("space separated date-time parses");
	assert!(matches!(value, Timestamp::OffsetDateTime(_)));
}

#[test]
fn local_date_time_has_no_offset() {
	let value: Timestamp = "1979-05-27T07:32:00".parse().expect("local date-time parses");
	let Timestamp::LocalDateTime(inner) = value else {
		panic!("expected local date-time, got {value:?}");
	};
	assert_eq!(inner.minute(), 32);
}

#[test]
fn local_date_round_trips_text() {
	let value: Timestamp = "1979-05-27".parse().expect("local date parses");
	let Timestamp::LocalDate(inner) = value else {
		panic!("expected local date, got {value:?}");
	};
	assert_eq!(inner.year(), 1979);
	assert_eq!(value.to_string(), "1979-05-27");
}

#[test]
fn local_time_parses() {
	let value: Timestamp = "07:32:00.5".parse().expect("local time parses");
	assert!(matches!(value, Timestamp::LocalTime(_)));
}

#[test]
fn garbage_is_rejected() {
	let err = "yesterday".parse::<Timestamp>().expect_err("free text is not a timestamp");
	assert!(err.to_string().contains("yesterday"));
}
