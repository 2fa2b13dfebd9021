use serde::Serialize;

use crate::{Symbol, UtcDateTime};

/// Where a record's numbers came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteSource {
    /// Parsed from the remote quote endpoint.
    Live,
    /// Generated locally because remote data was unusable.
    Synthetic,
}

impl QuoteSource {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Synthetic => "synthetic",
        }
    }
}

/// Latest known quote for one stock.
///
/// Records are fully populated on construction and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRecord {
    pub symbol: Symbol,
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub volume: u64,
    pub source: QuoteSource,
}

impl QuoteRecord {
    pub fn is_synthetic(&self) -> bool {
        self.source == QuoteSource::Synthetic
    }
}

/// All records produced by one retrieval cycle, in request order.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteBatch {
    pub records: Vec<QuoteRecord>,
    pub retrieved_at: UtcDateTime,
}

impl QuoteBatch {
    pub fn new(records: Vec<QuoteRecord>) -> Self {
        Self {
            records,
            retrieved_at: UtcDateTime::now(),
        }
    }

    /// Batch with no records, shown when a cycle fails outright.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn synthetic_count(&self) -> usize {
        self.records.iter().filter(|record| record.is_synthetic()).count()
    }
}
