//! Provider contract used by the retriever.
//!
//! A [`QuoteProvider`] turns one symbol into one live [`QuoteRecord`] or a
//! [`SourceError`]. Errors never leave the retriever: they select the
//! synthetic fallback for that symbol.

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use crate::{QuoteRecord, Symbol};

/// Adapter-level error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceErrorKind {
    /// Transport failed or upstream answered with a non-success status.
    Unavailable,
    /// Upstream answered but the body carries no usable quote.
    InvalidResponse,
}

impl SourceErrorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unavailable => "unavailable",
            Self::InvalidResponse => "invalid_response",
        }
    }
}

/// Structured provider error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    kind: SourceErrorKind,
    message: String,
}

impl SourceError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Unavailable,
            message: message.into(),
        }
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::InvalidResponse,
            message: message.into(),
        }
    }

    pub const fn kind(&self) -> SourceErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind.as_str(), self.message)
    }
}

impl std::error::Error for SourceError {}

/// Remote quote provider.
pub trait QuoteProvider: Send + Sync {
    /// Short provider name used in logs.
    fn name(&self) -> &'static str;

    fn fetch_quote<'a>(
        &'a self,
        symbol: &'a Symbol,
    ) -> Pin<Box<dyn Future<Output = Result<QuoteRecord, SourceError>> + Send + 'a>>;
}

/// Provider that never reaches the network, so every record is synthetic.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineProvider;

impl QuoteProvider for OfflineProvider {
    fn name(&self) -> &'static str {
        "offline"
    }

    fn fetch_quote<'a>(
        &'a self,
        symbol: &'a Symbol,
    ) -> Pin<Box<dyn Future<Output = Result<QuoteRecord, SourceError>> + Send + 'a>> {
        Box::pin(async move {
            Err(SourceError::unavailable(format!(
                "offline mode; no remote quote for {symbol}"
            )))
        })
    }
}
