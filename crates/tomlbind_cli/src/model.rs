//! Proxy gateway configuration bound by `tomlbind check`.

use std::collections::BTreeMap;

use tomlbind::Registry;

tomlbind::bindable_enum! {
	#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize)]
	#[serde(rename_all = "lowercase")]
	pub enum Strategy {
		#[default]
		Failover,
		Weighted,
	}
}

tomlbind::bindable! {
	#[derive(Debug, Default, serde::Serialize)]
	pub struct RootConfig {
		pub server: Option<ServerConfig>,
		pub health: Option<HealthConfig>,
		pub groups: BTreeMap<String, GroupConfig>,
		pub platforms: Vec<PlatformConfig>,
	}
}

tomlbind::bindable! {
	#[derive(Debug, Default, serde::Serialize)]
	pub struct ServerConfig {
		pub listen: String,
		pub auth_key: String,
		pub default_group: String,
		pub strategy: Strategy,
		pub timeout_seconds: u32,
		pub max_failover: u32,
		pub max_request_body_bytes: u64,
	}
}

tomlbind::bindable! {
	#[derive(Debug, Default, serde::Serialize)]
	pub struct HealthConfig {
		pub cooldown_seconds: u32,
	}
}

tomlbind::bindable! {
	#[derive(Debug, Default, serde::Serialize)]
	pub struct GroupConfig {
		pub strategy: Strategy,
		pub max_failover: u32,
		pub timeout_seconds: u32,
	}
}

tomlbind::bindable! {
	#[derive(Debug, Default, serde::Serialize)]
	pub struct PlatformConfig {
		pub name: String,
		pub base_url: String,
		pub api_key: String,
		pub group: String,
		pub weight: u32,
		pub priority: i32,
		pub key_type: String,
		pub enabled: bool,
	}
}

/// Register the configuration models with `registry`.
pub(crate) fn register(registry: &Registry) {
	registry.register_model::<RootConfig>();
}
