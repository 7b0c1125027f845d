// Positional alignment of per-day metric series into table rows.

use crate::models::{AlignedRow, TimedValue};

/// One contributing metric column for a (day, kind) table.
#[derive(Debug, Clone, Copy)]
pub struct AlignInput<'a> {
    pub column: &'a str,
    pub entries: &'a [TimedValue],
}

/// Zips the contributing series by index into rows.
///
/// Row count is the maximum series length. Each row's time label comes from
/// the first listed series that still has that index (callers list CPU
/// first); each column holds the series's i-th value or an empty cell once
/// the series is exhausted.
///
/// This is deliberate positional zipping, not a timestamp join: when series
/// lengths differ (a metric scraped fewer points), the tail rows pair one
/// series's label with empty cells for the others rather than re-matching by
/// time.
pub fn align(inputs: &[AlignInput<'_>]) -> Vec<AlignedRow> {
    let row_count = inputs.iter().map(|i| i.entries.len()).max().unwrap_or(0);
    let mut rows = Vec::with_capacity(row_count);

    for i in 0..row_count {
        let label = inputs
            .iter()
            .find_map(|input| input.entries.get(i))
            .map(|tv| tv.label.clone())
            .unwrap_or_default();
        let values = inputs
            .iter()
            .map(|input| input.entries.get(i).map(|tv| tv.value))
            .collect();
        rows.push(AlignedRow { label, values });
    }

    rows
}
