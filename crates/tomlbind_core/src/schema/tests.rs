use std::borrow::Cow;

use super::{EnumSchema, FieldSchema, ModelSchema, derive_key};

static STRATEGY: EnumSchema = EnumSchema {
	type_name: "Strategy",
	symbols: &["Weighted", "Failover"],
};

#[test]
fn snake_case_names_are_borrowed() {
	assert!(matches!(derive_key("timeout_seconds"), Cow::Borrowed("timeout_seconds")));
}

#[test]
fn pascal_case_names_become_snake_case() {
	assert_eq!(derive_key("TimeoutSeconds"), "timeout_seconds");
	assert_eq!(derive_key("MaxRequestBodyBytes"), "max_request_body_bytes");
	assert_eq!(derive_key("HTTPServer"), "http_server");
	assert_eq!(derive_key("Ipv4Addr"), "ipv4_addr");
}

#[test]
fn raw_identifier_prefix_is_stripped() {
	assert_eq!(derive_key("r#type"), "type");
}

#[test]
fn rename_overrides_derived_key() {
	let field = FieldSchema::new("key_kind", Some("key_type"), true);
	assert_eq!(field.key(), "key_type");

	let derived = FieldSchema::new("key_kind", None, true);
	assert_eq!(derived.key(), "key_kind");
}

#[test]
fn model_schema_lists_keys_in_order() {
	static FIELDS: [FieldSchema; 2] = [FieldSchema::new("name", None, true), FieldSchema::new("base", Some("base_url"), true)];
	let schema = ModelSchema {
		type_name: "Platform",
		fields: &FIELDS,
	};

	let keys: Vec<_> = schema.keys().collect();
	assert_eq!(keys, ["name", "base_url"]);
	assert_eq!(schema.field("base").and_then(|field| field.rename), Some("base_url"));
}

#[test]
fn enum_symbols_match_case_insensitively() {
	assert_eq!(STRATEGY.find_symbol("weighted"), Some(0));
	assert_eq!(STRATEGY.find_symbol("FAILOVER"), Some(1));
}

#[test]
fn enum_symbols_require_exact_match() {
	assert_eq!(STRATEGY.find_symbol("weighte"), None);
	assert_eq!(STRATEGY.find_symbol(" weighted"), None);
	assert_eq!(STRATEGY.find_symbol("0"), None);
}
