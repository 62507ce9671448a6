//! Stable multi-field ordering over reading subsets.
//!
//! The comparator is chosen by declared field tag, never by inspecting a
//! runtime field name. Numeric fields compare numerically; text fields
//! compare lexicographically by code point. A descending sort is defined as
//! the exact reversal of the ascending order, which preserves the stability
//! guarantee in mirror image.

use crate::Reading;
use std::cmp::Ordering;

/// Field a reading subset can be ordered by
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortField {
    Date,
    VitaminD,
    Calcium,
    Thiamine,
    Notes,
}

/// Sort direction; `Desc` reverses the `Asc` ordering
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Ascending comparison for one field
///
/// An absent note compares as if it were the empty string; this equivalence
/// holds only here, inside the sort policy.
fn compare(a: &Reading, b: &Reading, field: SortField) -> Ordering {
    match field {
        SortField::Date => a.date.cmp(&b.date),
        SortField::VitaminD => a.vitamin_d.total_cmp(&b.vitamin_d),
        SortField::Calcium => a.calcium.total_cmp(&b.calcium),
        SortField::Thiamine => a.thiamine.total_cmp(&b.thiamine),
        SortField::Notes => note_text(a).cmp(note_text(b)),
    }
}

fn note_text(reading: &Reading) -> &str {
    reading.notes.as_deref().unwrap_or("")
}

/// Stable sort of a reading subset by one field
///
/// Returns a new sequence; rows comparing equal on the field keep their
/// input order (ascending) or its exact mirror (descending).
pub fn sort_readings(
    rows: &[Reading],
    field: SortField,
    direction: SortDirection,
) -> Vec<Reading> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| compare(a, b, field));

    if direction == SortDirection::Desc {
        sorted.reverse();
    }

    sorted
}
