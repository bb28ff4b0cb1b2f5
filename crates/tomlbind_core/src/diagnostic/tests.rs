use super::{Diagnostic, DiagnosticKind, Diagnostics, Severity, Tier};

fn conversion(path: &str) -> Diagnostic {
	Diagnostic::new(
		DiagnosticKind::Conversion {
			from: "String",
			to: "Strategy".to_owned(),
			value: "\"bogus\"".to_owned(),
		},
		path,
	)
}

#[test]
fn kinds_carry_default_severity_and_tier() {
	let missing = Diagnostic::new(DiagnosticKind::MissingKey, "server.port");
	assert_eq!(missing.severity, Severity::Warning);
	assert_eq!(missing.tier(), Tier::Structural);

	let shape = DiagnosticKind::UnexpectedShape {
		expected: "table".to_owned(),
		found: "integer",
	};
	assert_eq!(shape.severity(), Severity::Error);
	assert_eq!(shape.tier(), Tier::Structural);

	assert_eq!(conversion("strategy").tier(), Tier::Conversion);
	assert!(Severity::Error > Severity::Warning);
}

#[test]
fn display_includes_severity_path_and_message() {
	assert_eq!(conversion("strategy").to_string(), "error: strategy: cannot convert String \"bogus\" to Strategy");
	let root = Diagnostic::new(DiagnosticKind::MissingAdapter { type_name: "Root" }, "");
	assert_eq!(root.to_string(), "error: no adapter registered for Root");
}

#[test]
fn list_preserves_order_and_counts() {
	let mut diagnostics = Diagnostics::new();
	assert!(diagnostics.is_empty());
	diagnostics.push(Diagnostic::new(DiagnosticKind::MissingKey, "a"));
	diagnostics.push(conversion("b"));
	diagnostics.push(conversion("b"));

	assert_eq!(diagnostics.len(), 3);
	assert!(diagnostics.has_errors());
	assert_eq!(diagnostics.count(Severity::Warning), 1);
	assert_eq!(diagnostics.count(Severity::Error), 2);
	assert_eq!(diagnostics.at("b").count(), 2);

	let paths: Vec<_> = diagnostics.iter().map(|item| item.path.to_string()).collect();
	assert_eq!(paths, ["a", "b", "b"]);
	assert_eq!(diagnostics.to_string().lines().count(), 3);
	assert_eq!(diagnostics.into_vec().len(), 3);
}

#[test]
fn warnings_only_is_not_an_error() {
	let mut diagnostics = Diagnostics::new();
	diagnostics.push(Diagnostic::new(DiagnosticKind::MissingKey, "a"));
	assert!(!diagnostics.has_errors());
}
