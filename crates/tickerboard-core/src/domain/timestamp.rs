use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::OffsetDateTime;

/// Wall-clock instant a batch was produced, always in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UtcDateTime(OffsetDateTime);

impl UtcDateTime {
    pub fn now() -> Self {
        Self(OffsetDateTime::now_utc())
    }

    pub fn format_rfc3339(self) -> String {
        self.0
            .format(&Rfc3339)
            .unwrap_or_else(|_| String::from("<unformattable>"))
    }

    /// `HH:MM:SS` in UTC, used for the "last updated" line of the dashboard.
    pub fn format_clock(self) -> String {
        self.0
            .format(format_description!("[hour]:[minute]:[second]"))
            .unwrap_or_else(|_| String::from("--:--:--"))
    }
}
