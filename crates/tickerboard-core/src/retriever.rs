//! Quote retrieval with per-symbol synthetic fallback.
//!
//! [`QuoteRetriever::retrieve`] issues one provider call per symbol, all
//! concurrently, and waits for every one of them. The output always has the
//! same length and order as the input. Any failure for a symbol (transport,
//! status, payload, or a panicked task) is replaced by a synthetic record for
//! that symbol; nothing is retried.

use std::sync::Arc;

use crate::data_source::{QuoteProvider, SourceError};
use crate::synthetic::SyntheticQuoteGenerator;
use crate::{QuoteBatch, QuoteRecord, Symbol};

#[derive(Clone)]
pub struct QuoteRetriever {
    provider: Arc<dyn QuoteProvider>,
    generator: Arc<SyntheticQuoteGenerator>,
}

impl QuoteRetriever {
    pub fn new(provider: Arc<dyn QuoteProvider>) -> Self {
        Self::with_generator(provider, SyntheticQuoteGenerator::new())
    }

    pub fn with_generator(
        provider: Arc<dyn QuoteProvider>,
        generator: SyntheticQuoteGenerator,
    ) -> Self {
        Self {
            provider,
            generator: Arc::new(generator),
        }
    }

    /// Fetch one record per symbol. Never fails.
    ///
    /// Must be called from within a tokio runtime.
    pub async fn retrieve(&self, symbols: &[Symbol]) -> QuoteBatch {
        let handles = symbols
            .iter()
            .cloned()
            .map(|symbol| {
                let provider = Arc::clone(&self.provider);
                let generator = Arc::clone(&self.generator);
                tokio::spawn(async move {
                    let outcome = provider.fetch_quote(&symbol).await;
                    resolve(provider.name(), &generator, &symbol, outcome)
                })
            })
            .collect::<Vec<_>>();

        let mut records = Vec::with_capacity(symbols.len());
        for (symbol, handle) in symbols.iter().zip(handles) {
            let record = match handle.await {
                Ok(record) => record,
                Err(error) => {
                    tracing::warn!(
                        symbol = %symbol,
                        error = %error,
                        "quote task failed; using synthetic quote"
                    );
                    self.generator.generate(symbol)
                }
            };
            records.push(record);
        }

        let batch = QuoteBatch::new(records);
        tracing::info!(
            provider = self.provider.name(),
            total = batch.len(),
            synthetic = batch.synthetic_count(),
            "retrieval cycle complete"
        );
        batch
    }
}

fn resolve(
    provider: &str,
    generator: &SyntheticQuoteGenerator,
    symbol: &Symbol,
    outcome: Result<QuoteRecord, SourceError>,
) -> QuoteRecord {
    match outcome {
        Ok(record) if &record.symbol == symbol => record,
        Ok(record) => {
            tracing::warn!(
                provider,
                symbol = %symbol,
                returned = %record.symbol,
                "provider returned a different symbol; using synthetic quote"
            );
            generator.generate(symbol)
        }
        Err(error) => {
            tracing::warn!(
                provider,
                symbol = %symbol,
                error = %error,
                "remote quote unusable; using synthetic quote"
            );
            generator.generate(symbol)
        }
    }
}
