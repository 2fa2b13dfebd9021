use crate::Symbol;

/// Display names for the tickers the dashboard tracks by default.
pub const COMPANY_NAMES: &[(&str, &str)] = &[
    ("AAPL", "Apple Inc."),
    ("GOOGL", "Alphabet Inc."),
    ("MSFT", "Microsoft Corporation"),
    ("TSLA", "Tesla, Inc."),
    ("AMZN", "Amazon.com, Inc."),
    ("NVDA", "NVIDIA Corporation"),
    ("META", "Meta Platforms, Inc."),
    ("NFLX", "Netflix, Inc."),
];

/// Default symbol set refreshed by the dashboard.
pub const DEFAULT_SYMBOLS: &[&str] = &[
    "AAPL", "GOOGL", "MSFT", "TSLA", "AMZN", "NVDA", "META", "NFLX",
];

/// Resolve a company name, falling back to `"<symbol> Corporation"`.
pub fn company_name(symbol: &Symbol) -> String {
    COMPANY_NAMES
        .iter()
        .find(|(ticker, _)| *ticker == symbol.as_str())
        .map(|(_, name)| (*name).to_owned())
        .unwrap_or_else(|| format!("{symbol} Corporation"))
}
