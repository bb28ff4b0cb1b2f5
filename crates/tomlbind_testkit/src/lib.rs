//! Fixture lookup for workspace tests.

use std::path::{Path, PathBuf};

/// Workspace root, two levels above this crate's manifest.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	let root = manifest_dir.ancestors().nth(2).unwrap_or(manifest_dir);
	root.canonicalize().unwrap_or_else(|_| root.to_path_buf())
}

/// Path of a TOML document under `<workspace>/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join("fixtures").join(name)
}

/// Contents of a fixture document; panics with the path when it cannot be read.
pub fn fixture_text(name: &str) -> String {
	let path = fixture_path(name);
	std::fs::read_to_string(&path).unwrap_or_else(|err| panic!("fixture {} unreadable: {err}", path.display()))
}
