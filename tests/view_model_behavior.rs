//! Behavior-driven tests for the dashboard view model
//!
//! These tests verify HOW search, sorting and summary statistics present a
//! batch, independent of where its records came from.

use tickerboard_core::format::{format_summary_volume, format_table_volume};
use tickerboard_core::{
    filter_records, sort_records, DerivedStats, QuoteBatch, QuoteRecord, QuoteSource,
    SortDirection, SortField, SortSpec, Symbol, ViewModel,
};

fn record(symbol: &str, name: &str, price: f64, change_percent: f64, volume: u64) -> QuoteRecord {
    QuoteRecord {
        symbol: Symbol::parse(symbol).expect("valid symbol"),
        name: name.to_owned(),
        price,
        change: price * change_percent / 100.0,
        change_percent,
        volume,
        source: QuoteSource::Live,
    }
}

fn sample_records() -> Vec<QuoteRecord> {
    vec![
        record("AAPL", "Apple Inc.", 189.43, 1.06, 51_234_567),
        record("MSFT", "Microsoft Corporation", 410.12, -0.56, 19_876_543),
        record("NVDA", "NVIDIA Corporation", 875.00, 1.45, 41_000_000),
        record("TSLA", "Tesla, Inc.", 171.05, -2.31, 88_000_000),
    ]
}

fn symbols_of(records: &[QuoteRecord]) -> Vec<&str> {
    records.iter().map(|record| record.symbol.as_str()).collect()
}

// =============================================================================
// View Model: search
// =============================================================================

#[test]
fn when_search_matches_name_or_symbol_case_insensitively_rows_are_kept() {
    // Given: A batch of four quotes
    let records = sample_records();

    // When: The user searches for "corp"
    let filtered = filter_records(&records, "corp");

    // Then: Only rows whose name contains the text remain, in batch order
    assert_eq!(symbols_of(&filtered), vec!["MSFT", "NVDA"]);

    // And: Symbol matches count too
    assert_eq!(symbols_of(&filter_records(&records, "tsl")), vec!["TSLA"]);
}

#[test]
fn when_filter_is_applied_twice_result_is_unchanged() {
    // Given: A filtered set of rows
    let records = sample_records();
    let once = filter_records(&records, "a");

    // When: The same filter runs again
    let twice = filter_records(&once, "a");

    // Then: Filtering is idempotent
    assert_eq!(once, twice);
}

#[test]
fn when_query_is_empty_every_row_is_shown() {
    // Given / When: An empty query
    let records = sample_records();
    let filtered = filter_records(&records, "");

    // Then: Nothing is removed
    assert_eq!(filtered.len(), records.len());
}

// =============================================================================
// View Model: sorting
// =============================================================================

#[test]
fn when_sort_direction_flips_order_is_exactly_reversed() {
    // Given: Rows with distinct prices
    let mut ascending = sample_records();
    let mut descending = sample_records();

    // When: The rows are sorted by price both ways
    sort_records(&mut ascending, SortSpec::new(SortField::Price, SortDirection::Ascending));
    sort_records(&mut descending, SortSpec::new(SortField::Price, SortDirection::Descending));

    // Then: One is the reverse of the other
    assert_eq!(symbols_of(&ascending), vec!["TSLA", "AAPL", "MSFT", "NVDA"]);
    descending.reverse();
    assert_eq!(ascending, descending);
}

#[test]
fn when_same_column_is_selected_again_direction_toggles() {
    // Given: The default view sorted by symbol ascending
    let mut view_model = ViewModel::default();
    assert_eq!(view_model.sort(), SortSpec::ascending(SortField::Symbol));

    // When: The symbol column is selected twice, then volume once
    view_model.toggle_sort(SortField::Symbol);
    let after_repeat = view_model.sort();
    view_model.toggle_sort(SortField::Volume);

    // Then: Repeat selection flips direction; a new column starts ascending
    assert_eq!(after_repeat.direction, SortDirection::Descending);
    assert_eq!(view_model.sort(), SortSpec::ascending(SortField::Volume));
}

#[test]
fn when_sorting_by_name_comparison_ignores_case() {
    // Given: Names that differ in case
    let mut records = vec![
        record("BBB", "beta", 1.0, 0.0, 1),
        record("AAA", "Alpha", 1.0, 0.0, 1),
        record("CCC", "Gamma", 1.0, 0.0, 1),
    ];

    // When: Sorted by name ascending
    sort_records(&mut records, SortSpec::ascending(SortField::Name));

    // Then: Alphabetical order, not byte order
    assert_eq!(symbols_of(&records), vec!["AAA", "BBB", "CCC"]);
}

// =============================================================================
// View Model: summary statistics
// =============================================================================

#[test]
fn when_batch_is_empty_stats_are_all_zero() {
    // Given / When: Stats for an empty batch
    let stats = DerivedStats::from_records(&[]);

    // Then: Everything is zero, including shares
    assert_eq!(stats, DerivedStats::default());
    assert_eq!(stats.avg_change, 0.0);
    assert_eq!(stats.gainers_share(), 0.0);
    assert_eq!(stats.losers_share(), 0.0);
}

#[test]
fn when_one_gainer_and_one_loser_average_is_midpoint() {
    // Given: AAPL at 150 up 2% and TSLA at 200 down 1%
    let records = vec![
        record("AAPL", "Apple Inc.", 150.0, 2.0, 10),
        record("TSLA", "Tesla, Inc.", 200.0, -1.0, 20),
    ];

    // When: Stats are derived
    let stats = DerivedStats::from_records(&records);

    // Then: Counts, totals and the average change agree
    assert_eq!(stats.count, 2);
    assert_eq!(stats.gainers, 1);
    assert_eq!(stats.losers, 1);
    assert_eq!(stats.total_value, 350.0);
    assert_eq!(stats.total_volume, 30);
    assert!((stats.avg_change - 0.5).abs() < 1e-12);
    assert_eq!(stats.gainers_share(), 50.0);
}

#[test]
fn when_search_hides_rows_stats_still_cover_whole_batch() {
    // Given: A view model searching for a single symbol
    let batch = QuoteBatch::new(sample_records());
    let view_model = ViewModel::new("nvda", SortSpec::default());

    // When: The batch is presented
    let view = view_model.present(&batch);

    // Then: Rows are filtered but stats are not
    assert_eq!(symbols_of(&view.rows), vec!["NVDA"]);
    assert_eq!(view.stats.count, 4);
    assert!(!view.is_empty_match());
}

#[test]
fn when_nothing_matches_view_reports_empty_match() {
    // Given: A search that matches no row
    let batch = QuoteBatch::new(sample_records());
    let view_model = ViewModel::new("zzz", SortSpec::default());

    // When: The batch is presented
    let view = view_model.present(&batch);

    // Then: The empty-match state is flagged
    assert!(view.rows.is_empty());
    assert!(view.is_empty_match());
}

// =============================================================================
// Formatting
// =============================================================================

#[test]
fn when_volume_is_billions_summary_and_table_use_different_scales() {
    // Given / When / Then: 1.5 billion shares
    assert_eq!(format_summary_volume(1_500_000_000), "1.5B");
    assert_eq!(format_table_volume(1_500_000_000), "1500.0M");
}
