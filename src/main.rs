use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;
use promreport::*;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

/// Series selector for the instance/job listing used by classification.
const SERIES_MATCH: &str = r#"up{job=~".*"}"#;

/// Flattens one metric's fetch result. Transport errors degrade to an absent
/// series with a diagnostic; the run keeps going on whatever else arrived.
fn fetched_series(
    metric: &'static str,
    fetched: std::result::Result<models::SeriesFetch, prom_repo::PromError>,
) -> Vec<models::InstanceSeries> {
    match fetched {
        Ok(fetch) => fetch.into_series(),
        Err(e) => {
            tracing::warn!(metric, error = %e, "range query failed; treating series as absent");
            Vec::new()
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .init();

    let app_config = config::AppConfig::load()?;
    let offset = app_config.report.offset()?;
    let repo = prom_repo::PromRepo::new(&app_config.prometheus)?;

    tracing::info!(
        version = version::VERSION,
        start = %app_config.prometheus.start,
        end = %app_config.prometheus.end,
        step = %app_config.prometheus.step,
        "querying prometheus for fleet metrics"
    );

    let q = &app_config.queries;
    let (labels, linux_cpu, windows_cpu, linux_load1, linux_mem, windows_mem, cores) = tokio::join!(
        repo.series_labels(SERIES_MATCH),
        repo.query_range("linux_cpu", &q.linux_cpu),
        repo.query_range("windows_cpu", &q.windows_cpu),
        repo.query_range("linux_load1", &q.linux_load1),
        repo.query_range("linux_mem", &q.linux_mem),
        repo.query_range("windows_mem", &q.windows_mem),
        repo.instant_counts("linux_cores", &q.linux_cores),
    );

    let classifier = match labels {
        Ok(pairs) => classifier::HostClassifier::from_labels(pairs, &q.linux_job, &q.windows_job),
        Err(e) => {
            tracing::warn!(error = %e, "series metadata fetch failed; all instances classify as unknown");
            classifier::HostClassifier::empty()
        }
    };
    if classifier.is_empty() {
        tracing::warn!("no instance metadata; every fetched series will be dropped as unknown");
    }

    let mut cpu_series = fetched_series("linux_cpu", linux_cpu);
    cpu_series.extend(fetched_series("windows_cpu", windows_cpu));
    let load1_series = fetched_series("linux_load1", linux_load1);
    let mut mem_series = fetched_series("linux_mem", linux_mem);
    mem_series.extend(fetched_series("windows_mem", windows_mem));

    if cpu_series.is_empty() && load1_series.is_empty() && mem_series.is_empty() {
        anyhow::bail!("no usable series returned for any metric; nothing to report");
    }

    let stride = app_config.report.sample_stride;
    tracing::info!(
        stride,
        instances = classifier.len(),
        "classifying and bucketing series"
    );
    let cpu = pipeline::bucket_series(&cpu_series, &classifier, stride, offset);
    let load1 = pipeline::bucket_series(&load1_series, &classifier, stride, offset);
    let mem = pipeline::bucket_series(&mem_series, &classifier, stride, offset);

    let core_counts = match cores {
        Ok(counts) => counts,
        Err(e) => {
            tracing::warn!(error = %e, "core count query failed; chart titles omit core counts");
            BTreeMap::new()
        }
    };

    let reports = report::assemble(
        report::MetricBuckets {
            cpu: &cpu.buckets,
            load1: &load1.buckets,
            mem: &mem.buckets,
        },
        &core_counts,
    );
    if reports.is_empty() {
        tracing::info!("no rows survived classification; no report files written");
        return Ok(());
    }

    let out_dir = Path::new(&app_config.report.output_dir);
    std::fs::create_dir_all(out_dir)?;
    let written = report::xlsx::write_all(&reports, out_dir);
    tracing::info!(written, days = reports.len(), "report run complete");

    Ok(())
}
