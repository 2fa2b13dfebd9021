//! Search, sort and summary statistics over a quote batch.
//!
//! The filtered and sorted rows depend on the view state ([`ViewModel`]);
//! [`DerivedStats`] are always computed over the full, unfiltered batch.

use std::cmp::Ordering;

use serde::Serialize;

use crate::{QuoteBatch, QuoteRecord};

/// Column a table can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Symbol,
    Name,
    Price,
    Change,
    ChangePercent,
    Volume,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub const fn reversed(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub const fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub const fn ascending(field: SortField) -> Self {
        Self::new(field, SortDirection::Ascending)
    }

    /// Selecting the current field flips direction; a new field starts ascending.
    pub fn toggle(self, field: SortField) -> Self {
        if self.field == field {
            Self::new(field, self.direction.reversed())
        } else {
            Self::ascending(field)
        }
    }

    pub fn compare(&self, left: &QuoteRecord, right: &QuoteRecord) -> Ordering {
        let ordering = match self.field {
            SortField::Symbol => locale_compare(left.symbol.as_str(), right.symbol.as_str()),
            SortField::Name => locale_compare(&left.name, &right.name),
            SortField::Price => left.price.total_cmp(&right.price),
            SortField::Change => left.change.total_cmp(&right.change),
            SortField::ChangePercent => left.change_percent.total_cmp(&right.change_percent),
            SortField::Volume => left.volume.cmp(&right.volume),
        };
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        Self::ascending(SortField::Symbol)
    }
}

/// Case-insensitive ordering; on a case-only tie lowercase sorts first.
fn locale_compare(left: &str, right: &str) -> Ordering {
    left.to_lowercase()
        .cmp(&right.to_lowercase())
        .then_with(|| right.cmp(left))
}

/// Keep records whose symbol or name contains `query`, ignoring case.
pub fn filter_records(records: &[QuoteRecord], query: &str) -> Vec<QuoteRecord> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| {
            needle.is_empty()
                || record.symbol.as_str().to_lowercase().contains(&needle)
                || record.name.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Order records in place. Equal keys keep no particular order.
pub fn sort_records(records: &mut [QuoteRecord], spec: SortSpec) {
    records.sort_unstable_by(|left, right| spec.compare(left, right));
}

/// Summary statistics over a whole batch. All zero when the batch is empty.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedStats {
    pub count: usize,
    pub total_value: f64,
    pub gainers: usize,
    pub losers: usize,
    pub avg_change: f64,
    pub total_volume: u64,
}

impl DerivedStats {
    pub fn from_records(records: &[QuoteRecord]) -> Self {
        if records.is_empty() {
            return Self::default();
        }

        let count = records.len();
        let total_value = records.iter().map(|record| record.price).sum();
        let gainers = records.iter().filter(|r| r.change_percent > 0.0).count();
        let losers = records.iter().filter(|r| r.change_percent < 0.0).count();
        let avg_change =
            records.iter().map(|record| record.change_percent).sum::<f64>() / count as f64;
        let total_volume = records
            .iter()
            .fold(0_u64, |acc, record| acc.saturating_add(record.volume));

        Self {
            count,
            total_value,
            gainers,
            losers,
            avg_change,
            total_volume,
        }
    }

    /// Gainers as a percentage of the batch.
    pub fn gainers_share(&self) -> f64 {
        share(self.gainers, self.count)
    }

    /// Losers as a percentage of the batch.
    pub fn losers_share(&self) -> f64 {
        share(self.losers, self.count)
    }
}

fn share(part: usize, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        part as f64 / count as f64 * 100.0
    }
}

/// Everything a rendering surface needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub rows: Vec<QuoteRecord>,
    pub stats: DerivedStats,
    pub query: String,
    pub sort: SortSpec,
}

impl DashboardView {
    /// The batch has records but none match the query.
    pub fn is_empty_match(&self) -> bool {
        self.rows.is_empty() && self.stats.count > 0
    }
}

/// Search text and sort order chosen by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewModel {
    query: String,
    sort: SortSpec,
}

impl ViewModel {
    pub fn new(query: impl Into<String>, sort: SortSpec) -> Self {
        Self {
            query: query.into(),
            sort,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    pub fn toggle_sort(&mut self, field: SortField) {
        self.sort = self.sort.toggle(field);
    }

    pub fn present(&self, batch: &QuoteBatch) -> DashboardView {
        let mut rows = filter_records(&batch.records, &self.query);
        sort_records(&mut rows, self.sort);
        DashboardView {
            rows,
            stats: DerivedStats::from_records(&batch.records),
            query: self.query.clone(),
            sort: self.sort,
        }
    }
}
