//! # Tickerboard Core
//!
//! Quote retrieval and dashboard view logic for the tickerboard stock
//! dashboard.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Alpha Vantage `GLOBAL_QUOTE` adapter |
//! | [`config`] | Endpoint/credential and refresh settings |
//! | [`dashboard`] | Refresh driver, rendering and notification seams |
//! | [`data_source`] | Provider trait and provider errors |
//! | [`domain`] | Symbol, quote record and batch types |
//! | [`error`] | Core error types |
//! | [`format`] | Price, change, percent and volume formatting |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`retriever`] | Concurrent per-symbol retrieval with fallback |
//! | [`synthetic`] | Random quote generator |
//! | [`view`] | Filter, sort and summary statistics |
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────┐  tick   ┌──────────────────┐
//! │ Refresh schedule │────────▶│ Dashboard        │──▶ DashboardSurface
//! └──────────────────┘         └────────┬─────────┘──▶ NotificationSink
//!                                       │
//!                                       ▼
//!                              ┌──────────────────┐     ┌──────────────────┐
//!                              │ QuoteRetriever   │────▶│ QuoteProvider    │
//!                              │ (one task/symbol)│     │ (Alpha Vantage)  │
//!                              └────────┬─────────┘     └──────────────────┘
//!                                       │ on any failure
//!                                       ▼
//!                              ┌──────────────────┐
//!                              │ Synthetic quotes │
//!                              └──────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tickerboard_core::{AlphaVantageAdapter, QuoteApiConfig, QuoteRetriever, Symbol, ViewModel};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let adapter = AlphaVantageAdapter::new(QuoteApiConfig::from_env()?);
//!     let retriever = QuoteRetriever::new(Arc::new(adapter));
//!
//!     let symbols = Symbol::parse_distinct(["AAPL", "MSFT"])?;
//!     let batch = retriever.retrieve(&symbols).await;
//!
//!     let view = ViewModel::default().present(&batch);
//!     println!("gainers: {}", view.stats.gainers);
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod config;
pub mod dashboard;
pub mod data_source;
pub mod domain;
pub mod error;
pub mod format;
pub mod http_client;
pub mod retriever;
pub mod synthetic;
pub mod view;

pub use adapters::AlphaVantageAdapter;

pub use config::{DashboardConfig, QuoteApiConfig};

pub use dashboard::{
    spawn_refresh, BatchLoader, CycleOutcome, Dashboard, DashboardSnapshot, DashboardSurface,
    Notification, NotificationSink, RefreshHandle, RefreshSchedule, Severity,
    LOAD_FAILURE_MESSAGE,
};

pub use data_source::{OfflineProvider, QuoteProvider, SourceError, SourceErrorKind};

pub use domain::{
    company_name, QuoteBatch, QuoteRecord, QuoteSource, Symbol, UtcDateTime, COMPANY_NAMES,
    DEFAULT_SYMBOLS,
};

pub use error::{ConfigError, ValidationError};

pub use http_client::{HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient};

pub use retriever::QuoteRetriever;

pub use synthetic::SyntheticQuoteGenerator;

pub use view::{
    filter_records, sort_records, DashboardView, DerivedStats, SortDirection, SortField, SortSpec,
    ViewModel,
};
