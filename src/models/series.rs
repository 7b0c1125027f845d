// Fetched series, host classification and bucketed point models

use std::fmt;

/// One sample of a range query: epoch seconds + parsed value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricPoint {
    pub ts: i64,
    pub value: f64,
}

/// Ordered samples for one (instance, metric) pair, time ascending as delivered.
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceSeries {
    pub instance: String,
    pub points: Vec<MetricPoint>,
}

/// Result of a range query. `Absent` means the backend reported a non-success
/// status; it is distinct from a successful query that matched nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesFetch {
    Available(Vec<InstanceSeries>),
    Absent,
}

impl SeriesFetch {
    pub fn into_series(self) -> Vec<InstanceSeries> {
        match self {
            SeriesFetch::Available(series) => series,
            SeriesFetch::Absent => Vec::new(),
        }
    }
}

/// Host OS classification derived from an instance's reporting job label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HostKind {
    Linux,
    Windows,
    Unknown,
}

impl HostKind {
    /// The data sheet name used for this kind in the report workbook.
    pub fn sheet_name(&self) -> &'static str {
        match self {
            HostKind::Linux => "Linux",
            HostKind::Windows => "Windows",
            HostKind::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for HostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sheet_name())
    }
}

/// One downsampled point after day bucketing: "%H:%M" label + value.
#[derive(Debug, Clone, PartialEq)]
pub struct TimedValue {
    pub label: String,
    pub value: f64,
}
