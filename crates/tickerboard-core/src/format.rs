//! Display formatting shared by the summary and table widgets.
//!
//! The two volume formatters intentionally differ: the summary uses a
//! B/M/K three-tier scale, the table a M/K scale with bare integers below
//! one thousand.

/// `$189.43`
pub fn format_price(price: f64) -> String {
    format!("${}", to_fixed(price, 2))
}

/// `+$1.99` or `-$0.42`
pub fn format_change(change: f64) -> String {
    let sign = if change >= 0.0 { '+' } else { '-' };
    format!("{sign}${}", to_fixed(change.abs(), 2))
}

/// `+1.06%` or `-0.45%`
pub fn format_percent(percent: f64) -> String {
    let sign = if percent >= 0.0 { "+" } else { "" };
    format!("{sign}{}%", to_fixed(percent, 2))
}

/// Summary widget volume: `1.5B`, `12.3M`, `950.0K`.
pub fn format_summary_volume(volume: u64) -> String {
    let value = volume as f64;
    if value >= 1_000_000_000.0 {
        format!("{}B", to_fixed(value / 1_000_000_000.0, 1))
    } else if value >= 1_000_000.0 {
        format!("{}M", to_fixed(value / 1_000_000.0, 1))
    } else {
        format!("{}K", to_fixed(value / 1_000.0, 1))
    }
}

/// Table volume: `1500.0M`, `950.0K`, `999`.
pub fn format_table_volume(volume: u64) -> String {
    let value = volume as f64;
    if value >= 1_000_000.0 {
        format!("{}M", to_fixed(value / 1_000_000.0, 1))
    } else if value >= 1_000.0 {
        format!("{}K", to_fixed(value / 1_000.0, 1))
    } else {
        volume.to_string()
    }
}

/// `37.5% of stocks`
pub fn format_share(share: f64) -> String {
    format!("{}% of stocks", to_fixed(share, 1))
}

/// Fixed-point text with exact halfway values rounded away from zero.
///
/// `{:.N}` breaks exact binary ties toward even (`1.25` -> `1.2`); this
/// renders `1.3`. Zero never carries a minus sign.
pub fn to_fixed(value: f64, digits: usize) -> String {
    let value = value + 0.0;
    let value = if is_halfway(value, digits) {
        value + value.signum() * 0.25 * 10f64.powi(-(digits as i32))
    } else {
        value
    };
    format!("{value:.digits$}")
}

// Any non-tie f64 at or above half a unit shows a nonzero digit within this window.
const TIE_WINDOW: usize = 25;

fn is_halfway(value: f64, digits: usize) -> bool {
    if !value.is_finite() {
        return false;
    }
    let expanded = format!("{:.*}", digits + TIE_WINDOW, value.abs());
    let tail = &expanded[expanded.len() - TIE_WINDOW..];
    tail.starts_with('5') && tail[1..].bytes().all(|digit| digit == b'0')
}
