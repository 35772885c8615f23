//! CSV export of waitlist entries.

use chrono::{DateTime, SecondsFormat};
use scedge_types::WaitlistEntry;

/// Suggested name for the downloaded file.
pub const CSV_FILE_NAME: &str = "scedge_waitlist.csv";

const HEADER: &str = "Email,Timestamp";

/// Renders `entries` as CSV with an `Email,Timestamp` header. Timestamps are
/// RFC 3339 in UTC with millisecond precision. Rows are joined by `\n` with no
/// trailing newline.
pub fn export_csv(entries: &[WaitlistEntry]) -> String {
    std::iter::once(HEADER.to_string())
        .chain(entries.iter().map(|entry| {
            format!(
                "{},{}",
                csv_field(&entry.email),
                format_timestamp(entry.timestamp)
            )
        }))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_timestamp(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis)
        .map(|at| at.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_else(|| millis.to_string())
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
