//! Error types for `gen4.toml` loading and validation.

/// Errors that can occur when loading or validating a `gen4.toml` file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read gen4.toml: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML, or has keys outside the known tables.
    #[error("malformed gen4.toml: {0}")]
    Syntax(String),

    /// A `[pll]` value is out of range.
    #[error("invalid [pll] {field} in gen4.toml: {reason}")]
    InvalidPll {
        /// The offending key within `[pll]`.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}
