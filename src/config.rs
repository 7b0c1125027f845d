use chrono::FixedOffset;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub prometheus: PrometheusConfig,
    pub queries: QueriesConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PrometheusConfig {
    pub base_url: String,
    /// Range query window start, RFC 3339 (e.g. "2025-06-10T00:00:00Z").
    pub start: String,
    pub end: String,
    /// Range query resolution step (e.g. "60s").
    pub step: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize)]
pub struct QueriesConfig {
    pub linux_cpu: String,
    pub windows_cpu: String,
    pub linux_load1: String,
    pub linux_mem: String,
    pub windows_mem: String,
    /// Instant query mapping instance -> logical core count (Linux chart titles).
    pub linux_cores: String,
    #[serde(default = "default_linux_job")]
    pub linux_job: String,
    #[serde(default = "default_windows_job")]
    pub windows_job: String,
}

fn default_linux_job() -> String {
    "node_exporter".into()
}

fn default_windows_job() -> String {
    "win_exporter".into()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub output_dir: String,
    /// Keep every Nth point of each fetched series (1 = keep all).
    #[serde(default = "default_sample_stride")]
    pub sample_stride: usize,
    /// UTC offset used to derive calendar days, e.g. "+08:00".
    /// Defaults to the offset the process is running under.
    #[serde(default = "default_utc_offset")]
    pub utc_offset: String,
}

fn default_sample_stride() -> usize {
    10
}

fn default_utc_offset() -> String {
    chrono::Local::now().format("%:z").to_string()
}

impl ReportConfig {
    /// Parsed day-bucketing offset.
    pub fn offset(&self) -> anyhow::Result<FixedOffset> {
        self.utc_offset
            .parse::<FixedOffset>()
            .map_err(|e| anyhow::anyhow!("report.utc_offset {:?}: {}", self.utc_offset, e))
    }
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            !self.prometheus.base_url.is_empty(),
            "prometheus.base_url must be non-empty"
        );
        anyhow::ensure!(
            !self.prometheus.start.is_empty() && !self.prometheus.end.is_empty(),
            "prometheus.start and prometheus.end must be non-empty"
        );
        anyhow::ensure!(
            !self.prometheus.step.is_empty(),
            "prometheus.step must be non-empty"
        );
        anyhow::ensure!(
            self.prometheus.timeout_secs > 0,
            "prometheus.timeout_secs must be > 0, got {}",
            self.prometheus.timeout_secs
        );
        anyhow::ensure!(
            !self.queries.linux_job.is_empty() && !self.queries.windows_job.is_empty(),
            "queries.linux_job and queries.windows_job must be non-empty"
        );
        anyhow::ensure!(
            !self.report.output_dir.is_empty(),
            "report.output_dir must be non-empty"
        );
        anyhow::ensure!(
            self.report.sample_stride > 0,
            "report.sample_stride must be > 0, got {}",
            self.report.sample_stride
        );
        self.report.offset()?;
        Ok(())
    }
}
