//! Formatting utilities for status text

use crate::catalog::IngestReport;
use num_format::{Locale, ToFormattedString};
use std::time::Duration;

/// Format a count with thousands separators ("12,972")
#[must_use]
pub fn thousands(n: usize) -> String {
    n.to_formatted_string(&Locale::en)
}

fn plural(n: u64, unit: &str) -> String {
    if n == 1 {
        format!("{n} {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

/// Human-readable elapsed time, e.g. "1 hour, 2 minutes, 3.250 seconds"
///
/// Sub-second parts are shown as fractional seconds. A zero duration gives
/// "0 seconds".
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    let days = total / 86_400;
    let hours = total % 86_400 / 3_600;
    let minutes = total % 3_600 / 60;
    let seconds = total % 60;
    let millis = elapsed.subsec_millis();

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(plural(days, "day"));
    }
    if hours > 0 {
        parts.push(plural(hours, "hour"));
    }
    if minutes > 0 {
        parts.push(plural(minutes, "minute"));
    }
    if millis > 0 {
        parts.push(format!("{seconds}.{millis:03} seconds"));
    } else if seconds > 0 || parts.is_empty() {
        parts.push(plural(seconds, "second"));
    }

    parts.join(", ")
}

/// Status line shown after ingesting one source
#[must_use]
pub fn ingest_status(
    report: &IngestReport,
    source: &str,
    elapsed: Duration,
    total: usize,
) -> String {
    let mut status = format!(
        "Added {} words and skipped {} words from \"{source}\" in {} for a total of {}.",
        thousands(report.added),
        thousands(report.skipped),
        format_elapsed(elapsed),
        thousands(total),
    );
    if report.cancelled {
        status.push_str(" Ingestion was cancelled.");
    }
    status
}

/// Status line shown after a search
#[must_use]
pub fn search_status(count: usize) -> String {
    match count {
        1 => "There is 1 result.".to_string(),
        n => format!("There are {} results.", thousands(n)),
    }
}
