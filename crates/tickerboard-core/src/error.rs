use thiserror::Error;

/// Validation errors raised while parsing ticker symbols.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol must start with an ASCII letter: '{ch}'")]
    SymbolInvalidStart { ch: char },
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },
    #[error("duplicate symbol '{value}' in request")]
    DuplicateSymbol { value: String },
}

/// Configuration errors raised while reading environment-driven settings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable {name} must not be empty")]
    EmptyEnvVar { name: String },
    #[error("endpoint must be an http(s) URL: '{value}'")]
    InvalidEndpoint { value: String },
    #[error("refresh interval must be greater than zero")]
    ZeroRefreshInterval,
    #[error("request timeout must be greater than zero")]
    ZeroTimeout,
}
