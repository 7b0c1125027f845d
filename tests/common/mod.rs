// Shared test helpers
#![allow(dead_code)]

use chrono::FixedOffset;
use promreport::classifier::HostClassifier;
use promreport::models::{InstanceSeries, MetricPoint};

/// 2025-06-10T00:00:00Z as epoch seconds.
pub const DAY_START: i64 = 1_749_513_600;

pub fn utc() -> FixedOffset {
    FixedOffset::east_opt(0).unwrap()
}

pub fn series(instance: &str, points: &[(i64, f64)]) -> InstanceSeries {
    InstanceSeries {
        instance: instance.into(),
        points: points
            .iter()
            .map(|&(ts, value)| MetricPoint { ts, value })
            .collect(),
    }
}

/// Points every 60s from DAY_START, values 1.0, 2.0, ...
pub fn minute_series(instance: &str, count: usize) -> InstanceSeries {
    let points: Vec<(i64, f64)> = (0..count)
        .map(|i| (DAY_START + (i as i64) * 60, (i + 1) as f64))
        .collect();
    series(instance, &points)
}

pub fn fleet_classifier() -> HostClassifier {
    HostClassifier::from_labels(
        [
            ("lin-01:9100", "node_exporter"),
            ("lin-02:9100", "node_exporter"),
            ("win-01:9182", "win_exporter"),
            ("mystery:9999", "push_gateway"),
        ],
        "node_exporter",
        "win_exporter",
    )
}
