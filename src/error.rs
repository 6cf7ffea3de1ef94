//! Error type shared by the scanner, the route passes and the watcher

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Reserved per-directory roles that may appear at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialFileKind {
    Layout,
    Index,
}

impl fmt::Display for SpecialFileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecialFileKind::Layout => f.write_str("layout"),
            SpecialFileKind::Index => f.write_str("index"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Two files in one directory claim the same reserved role.
    #[error("Directory '{directory}' has more than one {kind} file: '{first}' and '{second}'")]
    DuplicateSpecialFile {
        kind: SpecialFileKind,
        directory: String,
        first: String,
        second: String,
    },

    /// Two entry points sanitize to the same import binding.
    #[error("Import identifier `{identifier}` is generated by both '{first}' and '{second}'")]
    IdentifierCollision {
        identifier: String,
        first: String,
        second: String,
    },

    #[error("Unexpected {kind} route '{id}' in the children of '{directory}'")]
    Structural {
        kind: &'static str,
        id: String,
        directory: String,
    },

    #[error("Invalid event path: {}", .0.display())]
    InvalidEventPath(PathBuf),

    #[error("No apps configured")]
    NoApps,

    #[error("Unknown app: {0}")]
    UnknownApp(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Watch error: {0}")]
    Watch(#[from] notify::Error),
}

impl RouteError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        RouteError::Io {
            path: path.into(),
            source,
        }
    }

    /// Errors caused by the files in an app rather than by IO or internal state.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            RouteError::DuplicateSpecialFile { .. } | RouteError::IdentifierCollision { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, RouteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_errors_are_distinct_from_io() {
        let duplicate = RouteError::DuplicateSpecialFile {
            kind: SpecialFileKind::Layout,
            directory: "users".to_string(),
            first: "users/_layout.entrypoint.jsx".to_string(),
            second: "users/_layout.entrypoint.tsx".to_string(),
        };
        assert!(duplicate.is_configuration_error());
        assert!(duplicate.to_string().contains("more than one layout file"));

        let io = RouteError::io("/missing", io::Error::from(io::ErrorKind::NotFound));
        assert!(!io.is_configuration_error());
        assert!(io.to_string().starts_with("IO error at /missing"));
    }
}
