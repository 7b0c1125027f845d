// Day bucketing tests: calendar grouping, labels, ordering, unknown drops

mod common;

use chrono::FixedOffset;
use common::*;
use promreport::classifier::HostClassifier;
use promreport::models::HostKind;
use promreport::pipeline::bucket_series;

#[test]
fn unknown_instance_is_dropped_and_reported() {
    let series_list = vec![
        minute_series("mystery:9999", 3),
        minute_series("lin-01:9100", 3),
    ];
    let out = bucket_series(&series_list, &fleet_classifier(), 1, utc());

    assert_eq!(out.skipped, vec!["mystery:9999".to_string()]);
    let kinds = &out.buckets["2025-06-10"];
    assert!(kinds.contains_key(&HostKind::Linux));
    assert_eq!(kinds.len(), 1);
}

#[test]
fn all_unknown_yields_empty_buckets() {
    let series_list = vec![minute_series("lin-01:9100", 3)];
    let out = bucket_series(&series_list, &HostClassifier::empty(), 1, utc());
    assert!(out.buckets.is_empty());
    assert_eq!(out.skipped.len(), 1);
}

#[test]
fn points_group_by_calendar_day() {
    let s = series(
        "lin-01:9100",
        &[(DAY_START + 60, 1.0), (DAY_START + 86_400 + 60, 2.0)],
    );
    let out = bucket_series(&[s], &fleet_classifier(), 1, utc());

    assert_eq!(out.buckets.len(), 2);
    assert_eq!(out.buckets["2025-06-10"][&HostKind::Linux].entries.len(), 1);
    assert_eq!(out.buckets["2025-06-11"][&HostKind::Linux].entries.len(), 1);
}

#[test]
fn labels_are_hour_minute() {
    let s = series("lin-01:9100", &[(DAY_START + 3 * 3600 + 25 * 60, 0.5)]);
    let out = bucket_series(&[s], &fleet_classifier(), 1, utc());
    let entry = &out.buckets["2025-06-10"][&HostKind::Linux].entries[0];
    assert_eq!(entry.label, "03:25");
    assert_eq!(entry.value, 0.5);
}

#[test]
fn order_within_bucket_follows_input() {
    let out = bucket_series(&[minute_series("lin-01:9100", 5)], &fleet_classifier(), 1, utc());
    let values: Vec<f64> = out.buckets["2025-06-10"][&HostKind::Linux]
        .entries
        .iter()
        .map(|e| e.value)
        .collect();
    assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
}

#[test]
fn stride_applies_before_bucketing() {
    let out = bucket_series(&[minute_series("lin-01:9100", 25)], &fleet_classifier(), 10, utc());
    let entries = &out.buckets["2025-06-10"][&HostKind::Linux].entries;
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].value, 1.0);
    assert_eq!(entries[1].value, 11.0);
    assert_eq!(entries[2].value, 21.0);
}

#[test]
fn configured_offset_shifts_day_boundary() {
    // 2025-06-09T23:00:00Z is already 2025-06-10 07:00 at +08:00.
    let s = series("lin-01:9100", &[(DAY_START - 3600, 1.0)]);
    let plus_eight = FixedOffset::east_opt(8 * 3600).unwrap();
    let out = bucket_series(&[s], &fleet_classifier(), 1, plus_eight);

    let entry = &out.buckets["2025-06-10"][&HostKind::Linux].entries[0];
    assert_eq!(entry.label, "07:00");
}

#[test]
fn linux_and_windows_bucket_separately() {
    let series_list = vec![
        minute_series("lin-01:9100", 2),
        minute_series("win-01:9182", 2),
    ];
    let out = bucket_series(&series_list, &fleet_classifier(), 1, utc());
    let kinds = &out.buckets["2025-06-10"];
    assert_eq!(kinds[&HostKind::Linux].entries.len(), 2);
    assert_eq!(kinds[&HostKind::Windows].entries.len(), 2);
}

#[test]
fn contributing_instances_recorded_per_bucket() {
    let series_list = vec![
        minute_series("lin-01:9100", 2),
        minute_series("lin-02:9100", 2),
    ];
    let out = bucket_series(&series_list, &fleet_classifier(), 1, utc());
    let bucket = &out.buckets["2025-06-10"][&HostKind::Linux];
    assert!(bucket.instances.contains("lin-01:9100"));
    assert!(bucket.instances.contains("lin-02:9100"));
}
