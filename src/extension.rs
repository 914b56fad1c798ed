//! File extension to module-type label.
//!
//! Generic script extensions say nothing about the module system inside, so
//! they stay unset and the content gets sniffed. Everything else is the
//! extension without its leading dot, unless the override table says
//! otherwise.

use std::path::Path;

/// Extensions whose label is not their literal spelling.
const OVERRIDES: &[(&str, &str)] = &[
    ("styl", "stylus"),
    ("cjs", "commonjs"),
    ("mts", "ts"),
    ("cts", "ts"),
];

/// Extensions that must be sniffed from content.
const SNIFFED: &[&str] = &["js", "jsx"];

/// Classify a file path into a module-type label.
///
/// The label is not validated against the registry: an unknown label simply
/// finds no detective later on.
pub fn classify(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?;

    if let Some((_, label)) = OVERRIDES.iter().find(|(from, _)| *from == ext) {
        tracing::debug!(ext, label, "converting extension through override table");
        return Some((*label).to_string());
    }

    if SNIFFED.contains(&ext) {
        tracing::debug!(ext, "leaving type unset so the content gets sniffed");
        return None;
    }

    tracing::debug!(ext, "using the extension as the type");
    Some(ext.to_string())
}
