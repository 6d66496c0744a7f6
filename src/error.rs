use thiserror::Error;

/// Classifies rule loading errors for programmatic matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadErrorKind {
    /// File open/read failure
    FileError,
    /// Fetching the list over HTTP failed
    DownloadFailed,
    /// Loaded content could not be turned into rules
    InvalidData,
}

/// PSL engine error types
#[derive(Error, Debug)]
pub enum PslError {
    #[error("Invalid domain encoding: {0}")]
    InvalidDomainEncoding(String),

    #[error("Unknown section: {0}")]
    UnknownSection(String),

    #[error("Domain cannot contain a public suffix: {0}")]
    NotMatchable(String),

    #[error("Public suffix '{suffix}' is not a suffix of '{domain}'")]
    PublicSuffixMismatch { domain: String, suffix: String },

    #[error("Invalid rule: {0}")]
    InvalidRule(String),

    #[error("Parse error at line {line}: {message}")]
    ParseErrorAtLine { line: usize, message: String },

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Load error: {message}")]
    LoadError {
        kind: LoadErrorKind,
        message: String,
    },

    #[error("Rule data error: {0}")]
    RuleDataError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PslError>;
