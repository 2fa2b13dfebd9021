//! Random quote generator used whenever remote data is unusable.

use std::ops::Range;
use std::sync::{Mutex, PoisonError};

use crate::{company_name, QuoteRecord, QuoteSource, Symbol};

pub const PRICE_RANGE: Range<f64> = 50.0..550.0;
pub const CHANGE_RANGE: Range<f64> = -10.0..10.0;
pub const VOLUME_RANGE: Range<u64> = 100_000..10_100_000;

/// Produces internally consistent random quotes.
///
/// `change_percent` is always `change / price * 100`. Generation cannot fail.
#[derive(Debug)]
pub struct SyntheticQuoteGenerator {
    rng: Mutex<fastrand::Rng>,
}

impl SyntheticQuoteGenerator {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(fastrand::Rng::new()),
        }
    }

    /// Deterministic generator for reproducible output.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(fastrand::Rng::with_seed(seed)),
        }
    }

    pub fn generate(&self, symbol: &Symbol) -> QuoteRecord {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let price = uniform(&mut rng, PRICE_RANGE);
        let change = uniform(&mut rng, CHANGE_RANGE);
        let volume = rng.u64(VOLUME_RANGE);

        QuoteRecord {
            symbol: symbol.clone(),
            name: company_name(symbol),
            price,
            change,
            change_percent: change / price * 100.0,
            volume,
            source: QuoteSource::Synthetic,
        }
    }
}

impl Default for SyntheticQuoteGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn uniform(rng: &mut fastrand::Rng, range: Range<f64>) -> f64 {
    let value = range.start + rng.f64() * (range.end - range.start);
    // Rounding can land exactly on the open upper bound.
    if value >= range.end {
        range.start
    } else {
        value
    }
}
