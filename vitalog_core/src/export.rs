//! CSV export codec.
//!
//! Produces the exact text of the `vitamin-history.csv` artifact: a header
//! line with units embedded from the metric registry, then one line per
//! reading with values rounded to one decimal and dates in the dashboard's
//! display form. The codec's contract ends at producing the text; saving it
//! to a file is the caller's concern. There is no decode path.

use crate::{registry, MetricKey, Reading};
use chrono::NaiveDate;

/// Encode a reading subset as CSV text
///
/// Deterministic: one header line followed by one line per row, joined with
/// newlines, no trailing newline. The header's units come from the registry
/// at encode time, so a unit change there is reflected in the export.
pub fn encode(rows: &[Reading]) -> String {
    let header = [
        "Date".to_string(),
        column_heading(MetricKey::VitaminD),
        column_heading(MetricKey::Calcium),
        column_heading(MetricKey::Thiamine),
        "Notes".to_string(),
    ]
    .iter()
    .map(|field| escape_field(field))
    .collect::<Vec<_>>()
    .join(", ");

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(header);

    for row in rows {
        let fields = [
            format_display_date(row.date),
            format_tenths(MetricKey::VitaminD.value(row)),
            format_tenths(MetricKey::Calcium.value(row)),
            format_tenths(MetricKey::Thiamine.value(row)),
            row.notes.clone().unwrap_or_default(),
        ];
        lines.push(
            fields
                .iter()
                .map(|field| escape_field(field))
                .collect::<Vec<_>>()
                .join(","),
        );
    }

    tracing::debug!("Encoded {} readings to CSV", rows.len());
    lines.join("\n")
}

/// Column heading for a metric: label with the registry unit in parentheses
fn column_heading(key: MetricKey) -> String {
    let descriptor = registry().describe(key);
    format!("{} ({})", descriptor.label, descriptor.unit)
}

/// Wrap a field in double quotes if it contains a comma, quote, or newline
///
/// Internal double quotes are doubled. Applied uniformly to header and data
/// fields.
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Render a date in the dashboard's human display form (M/D/YYYY)
///
/// The export must match what the user sees on screen, not the raw ISO
/// string.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Render a value rounded to the nearest tenth, halves away from zero
///
/// Shared by the codec and by presentation rounding of deltas; the
/// away-from-zero rule applies to both signs.
pub fn format_tenths(value: f64) -> String {
    let tenths = (value * 10.0).round() as i64;
    let sign = if tenths < 0 { "-" } else { "" };
    let tenths = tenths.abs();
    format!("{}{}.{}", sign, tenths / 10, tenths % 10)
}
