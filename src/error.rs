use thiserror::Error;

/// A version string that is not dotted-numeric.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("invalid version format: '{version}'")]
    InvalidFormat { version: String },
}

/// A rule list that cannot be compiled.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("rule #{index} has an invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        index: usize,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Inconsistent browser catalog data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("short code '{0}' appears more than once in the catalog")]
    DuplicateShortCode(String),
    #[error("short code '{0}' is not exactly two characters")]
    MalformedShortCode(String),
}
