//! # Domain Models
//!
//! Canonical types shared by the retriever and the view model.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Symbol`] | Validated uppercase ticker |
//! | [`QuoteRecord`] | One stock's normalized quote |
//! | [`QuoteBatch`] | Records from one retrieval cycle |
//! | [`QuoteSource`] | Provenance flag (`live` / `synthetic`) |
//! | [`UtcDateTime`] | UTC timestamp |
//!
//! Company names come from a static table; see [`company_name`].

mod company;
mod quote;
mod symbol;
mod timestamp;

pub use company::{company_name, COMPANY_NAMES, DEFAULT_SYMBOLS};
pub use quote::{QuoteBatch, QuoteRecord, QuoteSource};
pub use symbol::Symbol;
pub use timestamp::UtcDateTime;
