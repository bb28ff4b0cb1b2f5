#![allow(missing_docs)]

use std::process::{Command, Output};

use serde_json::Value;
use tomlbind_testkit::{fixture_path, fixture_text};

#[test]
fn proxy_config_binds_without_diagnostics() {
	let json = run_json(&["check", &fixture("proxy.toml"), "--json"]);

	assert_eq!(json["ok"], true);
	assert_eq!(json["diagnostics"].as_array().map(Vec::len), Some(0));
	assert_eq!(json["model"]["server"]["timeout_seconds"], 600);
	assert_eq!(json["model"]["server"]["default_group"], "default");
	assert_eq!(json["model"]["server"]["strategy"], "weighted");
	assert_eq!(json["model"]["health"]["cooldown_seconds"], 60);
	assert_eq!(json["model"]["groups"]["default"]["strategy"], "failover");

	let platforms = json["model"]["platforms"].as_array().expect("platforms array");
	let expected = [
		("88code-Codex", "openai"),
		("PackyCode-Codex", "openai"),
		("88code-Claude", "claude"),
		("PackyCode-Claude", "claude"),
		("Privnode-Claude", "claude"),
		("Cubence-Claude", "claude"),
		("Local-Claude", "claude"),
	];
	assert_eq!(platforms.len(), expected.len());
	for (platform, (name, key_type)) in platforms.iter().zip(expected) {
		assert_eq!(platform["name"], name);
		assert_eq!(platform["key_type"], key_type);
	}
}

#[test]
fn bad_values_are_rejected_with_located_diagnostics() {
	let output = run(&["check", &fixture("bad_strategy.toml"), "--json"]);
	assert!(!output.status.success(), "default policy should reject");

	let json: Value = serde_json::from_slice(&output.stdout).expect("stdout should be valid json");
	assert_eq!(json["ok"], false);
	assert!(json["model"].is_null());

	let diagnostics = json["diagnostics"].as_array().expect("diagnostics array");
	let at = |path: &str| diagnostics.iter().find(|item| item["path"] == path).cloned().unwrap_or(Value::Null);
	assert_eq!(at("server.strategy")["tier"], "conversion");
	assert_eq!(at("server.strategy")["severity"], "error");
	assert_eq!(at("server.auth_key")["severity"], "warning");
	assert_eq!(at("health.cooldown_seconds")["tier"], "conversion");
	assert_eq!(at("platforms[0].weight")["severity"], "error");
	assert!(String::from_utf8_lossy(&output.stderr).contains("rejected"));
}

#[test]
fn lenient_policy_keeps_defaults() {
	let json = run_json(&["check", &fixture("bad_strategy.toml"), "--policy", "lenient", "--json"]);

	assert_eq!(json["ok"], true);
	assert_eq!(json["model"]["server"]["strategy"], "failover");
	assert_eq!(json["model"]["server"]["listen"], "http://127.0.0.1:7085");
	assert_eq!(json["model"]["platforms"][0]["weight"], 0);
	assert_eq!(json["model"]["platforms"][0]["name"], "only");
}

#[test]
fn strict_policy_rejects_warnings() {
	let output = run(&["check", &fixture("durations.toml"), "--hook", "--policy", "strict", "--json"]);
	assert!(output.status.success(), "durations fixture has no missing keys");

	let output = run(&["check", &fixture("bad_strategy.toml"), "--policy", "strict"]);
	assert!(!output.status.success());
}

#[test]
fn duration_hook_converts_text_to_seconds() {
	let json = run_json(&["check", &fixture("durations.toml"), "--hook", "--json"]);

	assert_eq!(json["model"]["server"]["timeout_seconds"], 600);
	assert_eq!(json["model"]["health"]["cooldown_seconds"], 90);
	assert_eq!(json["model"]["groups"]["default"]["timeout_seconds"], 7200);

	let output = run(&["check", &fixture("durations.toml"), "--json"]);
	assert!(!output.status.success(), "durations need the hook");
}

#[test]
fn tree_json_mirrors_document() {
	let json = run_json(&["tree", &fixture("statuses.toml"), "--json"]);

	let statuses = json["statuses"].as_array().expect("statuses array");
	assert_eq!(statuses.len(), fixture_text("statuses.toml").matches("[[statuses]]").count());
	assert_eq!(statuses.len(), 2);
	assert_eq!(statuses[0]["created_at"], "2014-08-31T00:29:15Z");
	assert_eq!(statuses[1]["posted_on"], "2014-08-31");
	assert_eq!(statuses[1]["user"]["screen_name"], "RT_EXPLORE_NEWS");
	assert_eq!(json["search_metadata"]["count"], 2);
}

#[test]
fn coerce_reinterprets_and_parses() {
	let json = run_json(&["coerce", "-1", "--to", "u64", "--json"]);
	assert_eq!(json["value"], "18446744073709551615");
	assert_eq!(json["kind"], "u64");

	let json = run_json(&["coerce", "\"WEIGHTED\"", "--to", "strategy", "--json"]);
	assert_eq!(json["value"], "Weighted");

	let json = run_json(&["coerce", "10m", "--to", "option<u32>", "--hook", "--json"]);
	assert_eq!(json["value"], "600");
}

#[test]
fn coerce_failure_exits_nonzero() {
	let output = run(&["coerce", "300", "--to", "u8"]);
	assert!(!output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr).contains("cannot coerce"));

	let output = run(&["coerce", "\"weighte\"", "--to", "strategy"]);
	assert!(!output.status.success());
}

fn fixture(name: &str) -> String {
	fixture_path(name).display().to_string()
}

fn run(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_tomlbind")).args(args).output().expect("command executes")
}

fn run_json(args: &[&str]) -> Value {
	let output = run(args);
	assert!(
		output.status.success(),
		"tomlbind command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}
