// Serde shapes for the Prometheus HTTP API v1 responses.

use std::collections::HashMap;

use serde::Deserialize;

/// `/api/v1/query_range` body.
#[derive(Debug, Deserialize)]
pub struct RangeResponse {
    pub status: String,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub data: Option<RangeData>,
}

#[derive(Debug, Deserialize)]
pub struct RangeData {
    #[serde(default)]
    pub result: Vec<RangeResult>,
}

#[derive(Debug, Deserialize)]
pub struct RangeResult {
    #[serde(default)]
    pub metric: HashMap<String, String>,
    /// [epoch seconds, stringified value] pairs, time ascending.
    #[serde(default)]
    pub values: Vec<(f64, String)>,
}

/// `/api/v1/series` body: one label set per matched series.
#[derive(Debug, Deserialize)]
pub struct SeriesResponse {
    pub status: String,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub data: Vec<HashMap<String, String>>,
}

/// `/api/v1/query` (instant) body.
#[derive(Debug, Deserialize)]
pub struct InstantResponse {
    pub status: String,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub data: Option<InstantData>,
}

#[derive(Debug, Deserialize)]
pub struct InstantData {
    #[serde(default)]
    pub result: Vec<InstantResult>,
}

#[derive(Debug, Deserialize)]
pub struct InstantResult {
    #[serde(default)]
    pub metric: HashMap<String, String>,
    pub value: (f64, String),
}
