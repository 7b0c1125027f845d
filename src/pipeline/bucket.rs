// Calendar-day bucketing of downsampled points, grouped by host kind.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{FixedOffset, TimeZone};
use tracing::warn;

use crate::classifier::HostClassifier;
use crate::models::{HostKind, InstanceSeries, TimedValue};
use crate::pipeline::downsample;

/// One (day, kind) bucket: labeled values in input order, plus the set of
/// instances that contributed (consumed by chart titles).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BucketSeries {
    pub entries: Vec<TimedValue>,
    pub instances: BTreeSet<String>,
}

pub type KindBuckets = BTreeMap<HostKind, BucketSeries>;

/// DayKey ("YYYY-MM-DD") -> per-kind buckets. BTreeMap keeps days ordered.
pub type DayBuckets = BTreeMap<String, KindBuckets>;

/// Buckets plus the instances dropped as Unknown, for callers that want to
/// surface the skips beyond the warn logged here.
#[derive(Debug, Clone, Default)]
pub struct BucketOutcome {
    pub buckets: DayBuckets,
    pub skipped: Vec<String>,
}

/// Downsamples each series at `stride` and appends its points to the
/// (calendar day, host kind) buckets. Days are derived from the timestamp in
/// `offset`; labels are "%H:%M". Order within a bucket follows input order.
/// Unknown-classified series are dropped with one diagnostic per series.
pub fn bucket_series(
    series: &[InstanceSeries],
    classifier: &HostClassifier,
    stride: usize,
    offset: FixedOffset,
) -> BucketOutcome {
    let mut outcome = BucketOutcome::default();

    for s in series {
        let kind = classifier.classify(&s.instance);
        if kind == HostKind::Unknown {
            warn!(instance = %s.instance, "cannot identify host kind, dropping series");
            outcome.skipped.push(s.instance.clone());
            continue;
        }

        for point in downsample(&s.points, stride) {
            let Some(ts) = offset.timestamp_opt(point.ts, 0).single() else {
                continue;
            };
            let day = ts.format("%Y-%m-%d").to_string();
            let bucket = outcome
                .buckets
                .entry(day)
                .or_default()
                .entry(kind)
                .or_default();
            bucket.entries.push(TimedValue {
                label: ts.format("%H:%M").to_string(),
                value: point.value,
            });
            bucket.instances.insert(s.instance.clone());
        }
    }

    outcome
}
