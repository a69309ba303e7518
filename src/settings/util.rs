use std::collections::HashSet;
use std::path::Path;

/// Trim, lower-case and deduplicate sensitive key patterns, keeping the first
/// occurrence of each.
pub(super) fn sanitize_patterns(values: Vec<String>) -> Vec<String> {
	let mut seen = HashSet::new();
	let mut cleaned = Vec::new();
	for value in values {
		let normalized = value.trim().to_lowercase();
		if normalized.is_empty() {
			continue;
		}
		if seen.insert(normalized.clone()) {
			cleaned.push(normalized);
		}
	}
	cleaned
}

/// Name shown for the local file in headers and messages.
pub(super) fn file_label(path: &Path) -> String {
	path.file_name().map_or_else(
		|| path.display().to_string(),
		|name| name.to_string_lossy().into_owned(),
	)
}

/// Treat blank filter directives as "logging disabled".
pub(super) fn non_blank(value: Option<String>) -> Option<String> {
	value
		.map(|value| value.trim().to_string())
		.filter(|value| !value.is_empty())
}
