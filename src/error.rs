use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a check run before or during scanning.
///
/// Spelling mismatches are never errors; they are reported as findings in a
/// [`CheckResult`](crate::CheckResult). Everything here propagates up to the
/// caller unchanged, with no retry or partial results.
#[derive(Debug, Error)]
pub enum CheckError {
    /// A required configuration key is absent from the option map.
    #[error("missing required option `{0}`")]
    MissingOption(String),

    /// A configured path does not resolve to an existing file.
    #[error("configured file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// A configured placeholder pattern is not a valid regex.
    #[error("invalid placeholder pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A configured file exists but could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The base dictionary file could not be turned into a word set.
    #[error("failed to build dictionary from {}: {source}", .path.display())]
    Dictionary {
        path: PathBuf,
        #[source]
        source: fst::Error,
    },

    /// An options file exists but is not valid TOML.
    #[error("failed to parse options file {}: {source}", .path.display())]
    ParseOptions {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Unbalanced curly braces found while masking placeholders in a source
    /// string. Fails the whole run for the diff collection.
    #[error("unbalanced placeholder braces in source string: {0:?}")]
    MalformedPlaceholder(String),
}

impl CheckError {
    /// True for the configuration class of errors, which are raised before
    /// any text is examined.
    pub fn is_config(&self) -> bool {
        !matches!(self, CheckError::MalformedPlaceholder(_))
    }
}
