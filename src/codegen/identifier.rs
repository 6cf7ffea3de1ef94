//! Import binding names

use std::sync::LazyLock;

use regex::{Captures, Regex};

static DASH_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-(\w)").expect("valid regex"));

static ILLEGAL_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^$_a-zA-Z0-9]").expect("valid regex"));

/// Words that cannot be used as a binding, or would shadow a global.
const RESERVED_WORDS: &[&str] = &[
    "arguments", "await", "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "enum", "eval", "export", "extends", "false", "finally",
    "for", "function", "if", "implements", "import", "in", "instanceof", "interface", "let",
    "new", "null", "package", "private", "protected", "public", "return", "static", "super",
    "switch", "this", "throw", "true", "try", "typeof", "undefined", "var", "void", "while",
    "with", "yield", "Infinity", "NaN", "Object", "Function", "Array", "String", "Number",
    "Boolean", "Symbol", "Error", "Math", "Date", "RegExp", "JSON", "Promise", "Map", "Set",
    "Proxy", "Reflect",
];

/// Turn a relative entry point id into a legal JavaScript identifier.
///
/// `users/my-page.entrypoint.tsx` becomes `users_myPage_entrypoint_tsx`.
/// Distinct ids can still collide (`a-b` and `aB`), callers must check.
pub fn make_legal_identifier(id: &str) -> String {
    let camel = DASH_WORD.replace_all(id, |caps: &Captures| caps[1].to_uppercase());
    let identifier = ILLEGAL_CHARS.replace_all(&camel, "_").into_owned();

    if identifier.is_empty() {
        return "_".to_string();
    }

    let leading_digit = identifier.starts_with(|c: char| c.is_ascii_digit());
    if leading_digit || RESERVED_WORDS.contains(&identifier.as_str()) {
        format!("_{}", identifier)
    } else {
        identifier
    }
}
