// Per-day table and chart assembly. Rendering stays in report::xlsx.

pub mod xlsx;

use std::collections::{BTreeMap, BTreeSet};

use crate::models::{ChartSpec, DayReport, HostKind, ReportTable};
use crate::pipeline::{AlignInput, BucketSeries, DayBuckets, align};

pub const TIMESTAMP_COL: &str = "Timestamp";
pub const CPU_COL: &str = "CPU_Usage";
pub const LOAD1_COL: &str = "Load1";
pub const MEM_COL: &str = "Mem_Usage";

/// Per-metric day buckets feeding one assembly pass.
#[derive(Debug, Clone, Copy)]
pub struct MetricBuckets<'a> {
    pub cpu: &'a DayBuckets,
    pub load1: &'a DayBuckets,
    pub mem: &'a DayBuckets,
}

/// Builds one `DayReport` per calendar day present in any metric's buckets.
///
/// Per day and host kind, the contributing metrics (those with a non-empty
/// bucket) are positionally aligned into a single table, CPU column first,
/// and each metric column gets a bar chart descriptor. Kinds with no
/// contributing metric produce nothing; a day where every kind is empty is
/// skipped entirely.
pub fn assemble(
    buckets: MetricBuckets<'_>,
    core_counts: &BTreeMap<String, u64>,
) -> Vec<DayReport> {
    let mut days: BTreeSet<&String> = BTreeSet::new();
    days.extend(buckets.cpu.keys());
    days.extend(buckets.load1.keys());
    days.extend(buckets.mem.keys());

    let linux_metrics = [
        (CPU_COL, buckets.cpu),
        (LOAD1_COL, buckets.load1),
        (MEM_COL, buckets.mem),
    ];
    let windows_metrics = [(CPU_COL, buckets.cpu), (MEM_COL, buckets.mem)];

    let mut reports = Vec::new();
    for day in days {
        let mut tables = Vec::new();
        let mut charts = Vec::new();

        for kind in [HostKind::Linux, HostKind::Windows] {
            let metrics: &[(&str, &DayBuckets)] = match kind {
                HostKind::Linux => &linux_metrics,
                _ => &windows_metrics,
            };

            let contributing: Vec<(&str, &BucketSeries)> = metrics
                .iter()
                .filter_map(|(column, day_buckets)| {
                    let bucket = day_buckets.get(day.as_str())?.get(&kind)?;
                    (!bucket.entries.is_empty()).then_some((*column, bucket))
                })
                .collect();
            if contributing.is_empty() {
                continue;
            }

            let inputs: Vec<AlignInput<'_>> = contributing
                .iter()
                .map(|&(column, bucket)| AlignInput {
                    column,
                    entries: &bucket.entries,
                })
                .collect();
            let rows = align(&inputs);
            let row_count = rows.len() as u32;

            let mut columns = vec![TIMESTAMP_COL.to_string()];
            columns.extend(contributing.iter().map(|(c, _)| c.to_string()));

            let mut instances: BTreeSet<&String> = BTreeSet::new();
            for (_, bucket) in &contributing {
                instances.extend(bucket.instances.iter());
            }
            let cores = uniform_core_count(&instances, core_counts);

            for (idx, &(column, _)) in contributing.iter().enumerate() {
                charts.push(ChartSpec {
                    title: chart_title(kind, column, day, cores),
                    data_sheet: kind.sheet_name().to_string(),
                    chart_sheet: format!("Chart_{}_{}", kind.sheet_name(), column),
                    series_name: series_name(kind, column),
                    value_col: (idx + 1) as u16,
                    row_count,
                    value_axis: value_axis(column).to_string(),
                });
            }

            tables.push(ReportTable {
                sheet_name: kind.sheet_name().to_string(),
                columns,
                rows,
            });
        }

        if !tables.is_empty() {
            reports.push(DayReport {
                day: day.clone(),
                tables,
                charts,
            });
        }
    }

    reports
}

/// Core count shared by every contributing instance, if they all report the
/// same known value. Mixed or missing counts leave the title bare.
fn uniform_core_count(
    instances: &BTreeSet<&String>,
    core_counts: &BTreeMap<String, u64>,
) -> Option<u64> {
    let mut uniform = None;
    for instance in instances {
        let count = core_counts.get(instance.as_str())?;
        match uniform {
            None => uniform = Some(*count),
            Some(seen) if seen == *count => {}
            Some(_) => return None,
        }
    }
    uniform
}

fn chart_title(kind: HostKind, column: &str, day: &str, cores: Option<u64>) -> String {
    let cores_suffix = match (kind, cores) {
        (HostKind::Linux, Some(n)) => format!(" ({} cores)", n),
        _ => String::new(),
    };
    match column {
        CPU_COL => format!("CPU Peak - {}{} - {}", kind, cores_suffix, day),
        LOAD1_COL => format!("Load Average (1min) - {} - {}", kind, day),
        _ => format!("Memory Usage - {} - {}", kind, day),
    }
}

fn series_name(kind: HostKind, column: &str) -> String {
    match column {
        CPU_COL => kind.to_string(),
        LOAD1_COL => format!("{} Load1", kind),
        _ => format!("{} Memory", kind),
    }
}

fn value_axis(column: &str) -> &'static str {
    match column {
        CPU_COL => "CPU Usage (%)",
        LOAD1_COL => "Load1",
        _ => "Memory Usage (%)",
    }
}
