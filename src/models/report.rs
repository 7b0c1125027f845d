// Assembled per-day report models handed to the xlsx renderer

/// One table row: time label plus one cell per metric column.
/// `None` is an empty cell, produced when this row's index is beyond the
/// end of that metric's series.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedRow {
    pub label: String,
    pub values: Vec<Option<f64>>,
}

/// One data sheet: a host kind's aligned metric columns for one day.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportTable {
    pub sheet_name: String,
    /// Column headers: "Timestamp" followed by one name per metric.
    pub columns: Vec<String>,
    pub rows: Vec<AlignedRow>,
}

/// One bar chart, placed on its own sheet, referencing a data sheet by range.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub data_sheet: String,
    pub chart_sheet: String,
    pub series_name: String,
    /// Zero-based column of the metric values on the data sheet.
    pub value_col: u16,
    /// Number of data rows (headers excluded).
    pub row_count: u32,
    pub value_axis: String,
}

/// Everything needed to write one day's workbook.
#[derive(Debug, Clone, PartialEq)]
pub struct DayReport {
    /// DayKey, "YYYY-MM-DD".
    pub day: String,
    pub tables: Vec<ReportTable>,
    pub charts: Vec<ChartSpec>,
}
