use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the patchers
#[derive(Error, Debug)]
pub enum PatchError {
    #[error("IO error: {source}")]
    Io {
        source: std::io::Error,
        path: Option<PathBuf>,
    },

    #[error("Invalid structural pattern: {source}")]
    InvalidPattern {
        #[from]
        source: regex::Error,
    },

    #[error("Invalid glob pattern {pattern}: {message}")]
    Pattern { pattern: String, message: String },

    #[error("Invalid file path: {path}")]
    InvalidPath { path: String },
}

impl PatchError {
    /// Create a new IO error with path context
    pub fn io_error(err: std::io::Error, path: Option<impl Into<PathBuf>>) -> Self {
        Self::Io {
            source: err,
            path: path.map(|p| p.into()),
        }
    }

    /// Create a new glob pattern error
    pub fn pattern_error(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    /// Create a new invalid path error
    pub fn invalid_path(path: impl Into<String>) -> Self {
        Self::InvalidPath { path: path.into() }
    }

    /// Path the error refers to, if any
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            PatchError::Io { path, .. } => path.as_deref(),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PatchError {
    fn from(error: std::io::Error) -> Self {
        PatchError::io_error(error, None::<PathBuf>)
    }
}

/// Result type alias using PatchError
pub type PatchResult<T> = Result<T, PatchError>;

/// Contextual error mapping function
pub fn map_io_err<P: Into<PathBuf>>(path: P) -> impl FnOnce(std::io::Error) -> PatchError {
    let path = path.into();
    move |err| PatchError::io_error(err, Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_io_err_keeps_path() {
        let err = map_io_err("a/b.ts")(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(err.path(), Some(std::path::Path::new("a/b.ts")));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_regex_error_converts() {
        let err: PatchError = regex::Regex::new("(").unwrap_err().into();
        assert!(matches!(err, PatchError::InvalidPattern { .. }));
    }
}
