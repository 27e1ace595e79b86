//! Tracer name resolution.
//!
//! Rust-side tracers declare `pub const TRACER_NAME: &str = "...";`. When the
//! declaration is missing the header is named after the source file.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

/// Name used when neither a declaration nor a file stem is available.
pub const DEFAULT_TRACER_NAME: &str = "tracer";

static NAME_PATTERN: OnceLock<Regex> = OnceLock::new();

fn name_pattern() -> &'static Regex {
    NAME_PATTERN.get_or_init(|| {
        Regex::new(r#"TRACER_NAME:\s*&str\s*=\s*"([^"]+)""#).expect("tracer name pattern is valid")
    })
}

/// Find the first `TRACER_NAME` declaration in tracer source text.
#[must_use]
pub fn extract_tracer_name(content: &str) -> Option<&str> {
    name_pattern()
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Name derived from the input path: its file stem (`mytracer.src` -> `mytracer`).
#[must_use]
pub fn fallback_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| DEFAULT_TRACER_NAME.to_string())
}

/// Resolve the tracer name for `path`, preferring the declared name.
#[must_use]
pub fn resolve_tracer_name(path: &Path, content: &str) -> String {
    if let Some(name) = extract_tracer_name(content) {
        debug!(name, "found TRACER_NAME declaration");
        return name.to_string();
    }
    let name = fallback_name(path);
    debug!(path = %path.display(), name = %name, "no TRACER_NAME declaration, using file stem");
    name
}
