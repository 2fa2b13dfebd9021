pub mod surface;

use serde::Serialize;

use tickerboard_core::format::{
    format_change, format_percent, format_price, format_share, format_summary_volume,
    format_table_volume,
};
use tickerboard_core::{
    DashboardSnapshot, DashboardView, DerivedStats, QuoteRecord, SortDirection, SortField,
    SortSpec, ViewModel,
};

use crate::cli::OutputFormat;
use crate::error::CliError;

pub const NO_MATCHES_MESSAGE: &str = "No stocks found matching your search.";

const COLUMNS: [(SortField, &str); 6] = [
    (SortField::Symbol, "Symbol"),
    (SortField::Name, "Company"),
    (SortField::Price, "Price"),
    (SortField::Change, "Change"),
    (SortField::ChangePercent, "Change %"),
    (SortField::Volume, "Volume"),
];

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DashboardPayload<'a> {
    retrieved_at: String,
    error: Option<&'a str>,
    query: &'a str,
    sort: SortSpec,
    stats: DerivedStats,
    quotes: &'a [QuoteRecord],
}

/// Render one completed refresh in the requested format.
pub fn render(
    snapshot: &DashboardSnapshot,
    view_model: &ViewModel,
    format: OutputFormat,
    pretty: bool,
) -> Result<String, CliError> {
    let view = view_model.present(&snapshot.batch);
    match format {
        OutputFormat::Table => Ok(render_table(snapshot, &view)),
        OutputFormat::Json => render_json(snapshot, &view, pretty),
    }
}

pub fn render_json(
    snapshot: &DashboardSnapshot,
    view: &DashboardView,
    pretty: bool,
) -> Result<String, CliError> {
    let payload = DashboardPayload {
        retrieved_at: snapshot.batch.retrieved_at.format_rfc3339(),
        error: snapshot.error.as_deref(),
        query: &view.query,
        sort: view.sort,
        stats: view.stats,
        quotes: &view.rows,
    };

    let rendered = if pretty {
        serde_json::to_string_pretty(&payload)?
    } else {
        serde_json::to_string(&payload)?
    };
    Ok(rendered)
}

pub fn render_table(snapshot: &DashboardSnapshot, view: &DashboardView) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Stock Market Dashboard (updated {} UTC)\n",
        snapshot.batch.retrieved_at.format_clock()
    ));

    if let Some(error) = &snapshot.error {
        out.push_str(&format!("! {error}\n"));
    }

    out.push('\n');
    render_summary(&mut out, &view.stats);
    out.push('\n');

    if view.is_empty_match() {
        out.push_str(NO_MATCHES_MESSAGE);
        out.push('\n');
        return out;
    }

    let cells = view.rows.iter().map(row_cells).collect::<Vec<_>>();
    let headers = COLUMNS.map(|(field, label)| header_label(field, label, view.sort));

    let mut widths = headers.clone().map(|header| header.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    push_row(&mut out, &headers, &widths);
    let rule = widths
        .iter()
        .map(|width| "-".repeat(*width))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(&rule);
    out.push('\n');
    for row in &cells {
        push_row(&mut out, row, &widths);
    }

    out
}

fn render_summary(out: &mut String, stats: &DerivedStats) {
    out.push_str(&format!(
        "Portfolio Value  {}\n",
        format_price(stats.total_value)
    ));
    out.push_str(&format!(
        "Gainers          {} ({})\n",
        stats.gainers,
        format_share(stats.gainers_share())
    ));
    out.push_str(&format!(
        "Losers           {} ({})\n",
        stats.losers,
        format_share(stats.losers_share())
    ));
    out.push_str(&format!(
        "Avg Change       {} (Volume: {})\n",
        format_percent(stats.avg_change),
        format_summary_volume(stats.total_volume)
    ));
}

fn header_label(field: SortField, label: &str, sort: SortSpec) -> String {
    if field != sort.field {
        return label.to_owned();
    }
    let arrow = match sort.direction {
        SortDirection::Ascending => '▲',
        SortDirection::Descending => '▼',
    };
    format!("{label} {arrow}")
}

fn row_cells(record: &QuoteRecord) -> [String; 6] {
    [
        record.symbol.to_string(),
        record.name.clone(),
        format_price(record.price),
        format_change(record.change),
        format_percent(record.change_percent),
        format_table_volume(record.volume),
    ]
}

// Text columns are left-aligned, numeric columns right-aligned.
fn push_row(out: &mut String, cells: &[String; 6], widths: &[usize; 6]) {
    let line = cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(index, (cell, &width))| {
            if index < 2 {
                format!("{cell:<width$}")
            } else {
                format!("{cell:>width$}")
            }
        })
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}
