use std::num::ParseIntError;
use std::path::PathBuf;

/// Failure to interpret the `version_code` field of a manifest.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("no `version_code: <n> ` field found")]
    MissingField,
    #[error("version_code `{digits}` is not a valid integer")]
    InvalidNumber {
        digits: String,
        #[source]
        source: ParseIntError,
    },
    #[error("version_code {0} has no successor")]
    Overflow(u64),
}

/// Failure of a file-level operation.
#[derive(Debug, thiserror::Error)]
pub enum BumpError {
    #[error("I/O error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed manifest {}", .path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: FormatError,
    },
}

impl BumpError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn format(path: impl Into<PathBuf>, source: FormatError) -> Self {
        Self::Format {
            path: path.into(),
            source,
        }
    }

    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format { .. })
    }
}
