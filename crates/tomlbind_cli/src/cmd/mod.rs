/// Bind a configuration file and report diagnostics.
pub mod check;
/// Coerce a single literal.
pub mod coerce;
/// Dump a parsed value tree.
pub mod tree;
/// Shared rendering helpers.
pub mod util;
