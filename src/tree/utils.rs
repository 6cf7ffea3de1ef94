//! Shared utility functions for tree walking

use glob::Pattern;

/// Check if an entry name should be ignored based on the ignore patterns.
pub fn should_ignore_name(name: &str, ignore_patterns: &[String]) -> bool {
    // Always ignore VCS and dependency directories
    if name == ".git" || name == "node_modules" {
        return true;
    }

    ignore_patterns
        .iter()
        .any(|pattern| name == pattern || glob_match(pattern, name))
}

/// Match a glob pattern against a name.
pub fn glob_match(pattern: &str, name: &str) -> bool {
    Pattern::new(pattern)
        .map(|p| p.matches(name))
        .unwrap_or(false)
}
