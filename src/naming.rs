//! File naming conventions
//!
//! Entry points are script files carrying the `.entrypoint` marker
//! (`about.entrypoint.tsx`). Their base name is mapped onto a route path
//! segment:
//!
//! | base name  | segment  |
//! |------------|----------|
//! | `_private` | none     |
//! | `$`        | `*`      |
//! | `$id`      | `:id`    |
//! | `(lang)`   | `lang?`  |
//! | `($id)`    | `:id?`   |
//! | `about`    | `about`  |

use std::sync::LazyLock;

use regex::Regex;

/// Base name of the file whose entry point wraps its directory.
pub const LAYOUT_NAME: &str = "_layout";
/// Base name of the file rendered at its directory's own path.
pub const INDEX_NAME: &str = "_index";

static ENTRY_POINT_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.entrypoint\.(t|j)sx?$").expect("valid regex"));

static SCRIPT_EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.(t|j)sx?$").expect("valid regex"));

/// Result of parsing a single file or directory name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    /// Name with the entry point suffix or script extension removed.
    pub name: String,
    /// Route path segment, `None` for reserved (underscore) names.
    pub route_path: Option<String>,
    pub is_entry_point: bool,
}

/// Parse a file name into its logical name and route path segment.
pub fn parse_file_name(file_name: &str) -> FileInfo {
    if let Some(m) = ENTRY_POINT_SUFFIX.find(file_name) {
        return file_info(&file_name[..m.start()], true);
    }

    if let Some(m) = SCRIPT_EXTENSION.find(file_name) {
        return file_info(&file_name[..m.start()], false);
    }

    file_info(file_name, false)
}

fn file_info(name: &str, is_entry_point: bool) -> FileInfo {
    FileInfo {
        name: name.to_string(),
        route_path: route_path_for_name(name),
        is_entry_point,
    }
}

/// Whether a file takes part in route generation at all.
///
/// Only entry points are routable, the scanner and the incremental updater
/// both filter with this rule.
pub fn is_routable_file(file_name: &str) -> bool {
    ENTRY_POINT_SUFFIX.is_match(file_name)
}

/// Map a base name onto a route path segment.
pub fn route_path_for_name(name: &str) -> Option<String> {
    if name.starts_with('_') {
        return None;
    }
    if name == "$" {
        return Some("*".to_string());
    }

    if let Some(inner) = name.strip_prefix('(').and_then(|n| n.strip_suffix(')')) {
        return route_path_for_name(inner).map(|segment| format!("{}?", segment));
    }

    if let Some(param) = name.strip_prefix('$') {
        return Some(format!(":{}", param));
    }

    Some(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_path_mapping() {
        assert_eq!(route_path_for_name("_foo"), None);
        assert_eq!(route_path_for_name("$"), Some("*".to_string()));
        assert_eq!(route_path_for_name("(bar)"), Some("bar?".to_string()));
        assert_eq!(route_path_for_name("$id"), Some(":id".to_string()));
        assert_eq!(route_path_for_name("plain"), Some("plain".to_string()));
        assert_eq!(route_path_for_name("($id)"), Some(":id?".to_string()));
    }

    #[test]
    fn test_route_path_optional_reserved_name() {
        // The wrapped name is mapped first, a reserved name stays reserved
        assert_eq!(route_path_for_name("(_draft)"), None);
        assert_eq!(route_path_for_name("($)"), Some("*?".to_string()));
    }

    #[test]
    fn test_route_path_unbalanced_parens_are_literal() {
        assert_eq!(route_path_for_name("(open"), Some("(open".to_string()));
        assert_eq!(route_path_for_name("close)"), Some("close)".to_string()));
    }

    #[test]
    fn test_parse_entry_point() {
        for ext in ["js", "jsx", "ts", "tsx"] {
            let info = parse_file_name(&format!("$id.entrypoint.{}", ext));
            assert_eq!(info.name, "$id");
            assert_eq!(info.route_path.as_deref(), Some(":id"));
            assert!(info.is_entry_point, "{} should be an entry point", ext);
        }
    }

    #[test]
    fn test_parse_plain_script() {
        let info = parse_file_name("helpers.ts");
        assert_eq!(info.name, "helpers");
        assert_eq!(info.route_path.as_deref(), Some("helpers"));
        assert!(!info.is_entry_point);
    }

    #[test]
    fn test_parse_other_file_and_directory_names() {
        let info = parse_file_name("users");
        assert_eq!(info.name, "users");
        assert_eq!(info.route_path.as_deref(), Some("users"));
        assert!(!info.is_entry_point);

        let info = parse_file_name("README.md");
        assert_eq!(info.name, "README.md");
        assert!(!info.is_entry_point);
    }

    #[test]
    fn test_parse_reserved_names() {
        let layout = parse_file_name("_layout.entrypoint.tsx");
        assert_eq!(layout.name, LAYOUT_NAME);
        assert_eq!(layout.route_path, None);

        let index = parse_file_name("_index.entrypoint.js");
        assert_eq!(index.name, INDEX_NAME);
        assert_eq!(index.route_path, None);
    }

    #[test]
    fn test_is_routable_file() {
        assert!(is_routable_file("about.entrypoint.tsx"));
        assert!(is_routable_file("_layout.entrypoint.js"));
        assert!(!is_routable_file("about.tsx"));
        assert!(!is_routable_file("about.entrypoint.css"));
        assert!(!is_routable_file("entrypoint.tsx"));
    }
}
