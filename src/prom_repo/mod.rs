// Prometheus HTTP API client. Fetch and decode only; classification,
// bucketing and alignment live in the pipeline.

pub mod wire;

use std::collections::BTreeMap;
use std::time::Duration;

use tracing::{instrument, warn};

use crate::config::PrometheusConfig;
use crate::models::{InstanceSeries, MetricPoint, SeriesFetch};

#[derive(Debug, thiserror::Error)]
pub enum PromError {
    #[error("prometheus request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("prometheus response decode failed: {0}")]
    Decode(#[from] serde_json::Error),
}

pub struct PromRepo {
    client: reqwest::Client,
    base_url: String,
    start: String,
    end: String,
    step: String,
}

impl PromRepo {
    /// Builds a client for one run's fixed query window.
    pub fn new(config: &PrometheusConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            start: config.start.clone(),
            end: config.end.clone(),
            step: config.step.clone(),
        })
    }

    /// Series listing: (instance, job) label pairs for every series matching
    /// `selector`. A non-success status yields an empty listing, not an error;
    /// callers then classify every instance Unknown.
    #[instrument(skip(self), fields(repo = "prom", operation = "series_labels"))]
    pub async fn series_labels(&self, selector: &str) -> Result<Vec<(String, String)>, PromError> {
        let url = format!("{}/api/v1/series", self.base_url);
        let body = self
            .client
            .get(&url)
            .query(&[("match[]", selector)])
            .send()
            .await?
            .text()
            .await?;
        parse_series_body(&body)
    }

    /// Range query for one metric. A non-success status is reported as
    /// `SeriesFetch::Absent` so callers cannot mistake it for an empty match.
    #[instrument(skip(self, query), fields(repo = "prom", operation = "query_range"))]
    pub async fn query_range(&self, metric: &str, query: &str) -> Result<SeriesFetch, PromError> {
        let url = format!("{}/api/v1/query_range", self.base_url);
        let body = self
            .client
            .get(&url)
            .query(&[
                ("query", query),
                ("start", &self.start),
                ("end", &self.end),
                ("step", &self.step),
            ])
            .send()
            .await?
            .text()
            .await?;
        parse_range_body(metric, &body)
    }

    /// Instant query mapping instance -> integer count (logical cores).
    /// Failures degrade to an empty map; chart titles then omit core counts.
    #[instrument(skip(self, query), fields(repo = "prom", operation = "instant_counts"))]
    pub async fn instant_counts(
        &self,
        metric: &str,
        query: &str,
    ) -> Result<BTreeMap<String, u64>, PromError> {
        let url = format!("{}/api/v1/query", self.base_url);
        let body = self
            .client
            .get(&url)
            .query(&[("query", query)])
            .send()
            .await?
            .text()
            .await?;
        parse_instant_counts_body(metric, &body)
    }
}

/// Decodes a series-listing body into (instance, job) pairs.
pub fn parse_series_body(body: &str) -> Result<Vec<(String, String)>, PromError> {
    let resp: wire::SeriesResponse = serde_json::from_str(body)?;
    if resp.status != "success" {
        warn!(
            status = %resp.status,
            error = resp.error.as_deref().unwrap_or("unknown error"),
            "series listing failed"
        );
        return Ok(Vec::new());
    }
    Ok(resp
        .data
        .into_iter()
        .filter_map(|labels| {
            let instance = labels.get("instance")?.clone();
            let job = labels.get("job").cloned().unwrap_or_default();
            Some((instance, job))
        })
        .collect())
}

/// Decodes a range-query body. Series without an instance label and samples
/// whose value does not parse as a finite number are dropped.
pub fn parse_range_body(metric: &str, body: &str) -> Result<SeriesFetch, PromError> {
    let resp: wire::RangeResponse = serde_json::from_str(body)?;
    if resp.status != "success" {
        warn!(
            metric,
            status = %resp.status,
            error = resp.error.as_deref().unwrap_or("unknown error"),
            "range query failed"
        );
        return Ok(SeriesFetch::Absent);
    }
    let result = resp.data.map(|d| d.result).unwrap_or_default();
    let series = result
        .into_iter()
        .filter_map(|r| {
            let instance = r.metric.get("instance")?.clone();
            let points = r
                .values
                .iter()
                .filter_map(|(ts, raw)| {
                    let value = raw.parse::<f64>().ok().filter(|v| v.is_finite())?;
                    Some(MetricPoint {
                        ts: *ts as i64,
                        value,
                    })
                })
                .collect();
            Some(InstanceSeries { instance, points })
        })
        .collect();
    Ok(SeriesFetch::Available(series))
}

/// Decodes an instant-query body into an instance -> count map.
pub fn parse_instant_counts_body(
    metric: &str,
    body: &str,
) -> Result<BTreeMap<String, u64>, PromError> {
    let resp: wire::InstantResponse = serde_json::from_str(body)?;
    if resp.status != "success" {
        warn!(
            metric,
            status = %resp.status,
            error = resp.error.as_deref().unwrap_or("unknown error"),
            "instant query failed"
        );
        return Ok(BTreeMap::new());
    }
    let result = resp.data.map(|d| d.result).unwrap_or_default();
    Ok(result
        .into_iter()
        .filter_map(|r| {
            let instance = r.metric.get("instance")?.clone();
            let count = r.value.1.parse::<f64>().ok().filter(|v| v.is_finite())?;
            Some((instance, count.round() as u64))
        })
        .collect())
}
