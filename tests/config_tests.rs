// Config loading and validation tests

use promreport::config::AppConfig;

const VALID_CONFIG: &str = r#"
[prometheus]
base_url = "http://localhost:9090"
start = "2025-06-10T00:00:00Z"
end = "2025-06-13T23:59:59Z"
step = "60s"

[queries]
linux_cpu = '1 - avg(rate(node_cpu_seconds_total{mode="idle"}[1m])) by (instance)'
windows_cpu = '100 - (avg by (instance) (rate(windows_cpu_time_total{mode="idle"}[1m])) * 100)'
linux_load1 = 'avg(node_load1) by (instance)'
linux_mem = '(1 - (node_memory_MemAvailable_bytes / node_memory_MemTotal_bytes)) * 100'
windows_mem = '100 - ((windows_os_physical_memory_free_bytes / windows_cs_physical_memory_bytes) * 100)'
linux_cores = 'count by (instance) (node_cpu_seconds_total{mode="idle"})'

[report]
output_dir = "./cpu_exports"
sample_stride = 10
utc_offset = "+08:00"
"#;

#[test]
fn test_config_loads_from_str() {
    let config = AppConfig::load_from_str(VALID_CONFIG).expect("load_from_str");
    assert_eq!(config.prometheus.base_url, "http://localhost:9090");
    assert_eq!(config.prometheus.step, "60s");
    assert_eq!(config.report.output_dir, "./cpu_exports");
    assert_eq!(config.report.sample_stride, 10);
    assert_eq!(config.report.utc_offset, "+08:00");
}

#[test]
fn test_config_defaults_applied() {
    let config = AppConfig::load_from_str(VALID_CONFIG).expect("load_from_str");
    assert_eq!(config.prometheus.timeout_secs, 30);
    assert_eq!(config.queries.linux_job, "node_exporter");
    assert_eq!(config.queries.windows_job, "win_exporter");
}

#[test]
fn test_sample_stride_defaults_to_ten() {
    let no_stride = VALID_CONFIG.replace("sample_stride = 10\n", "");
    let config = AppConfig::load_from_str(&no_stride).expect("load_from_str");
    assert_eq!(config.report.sample_stride, 10);
}

#[test]
fn test_offset_parses() {
    let config = AppConfig::load_from_str(VALID_CONFIG).expect("load_from_str");
    let offset = config.report.offset().expect("offset");
    assert_eq!(offset.local_minus_utc(), 8 * 3600);
}

#[test]
fn test_config_validation_rejects_empty_base_url() {
    let bad = VALID_CONFIG.replace("base_url = \"http://localhost:9090\"", "base_url = \"\"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("prometheus.base_url"));
}

#[test]
fn test_config_validation_rejects_stride_zero() {
    let bad = VALID_CONFIG.replace("sample_stride = 10", "sample_stride = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("sample_stride"));
}

#[test]
fn test_config_validation_rejects_empty_output_dir() {
    let bad = VALID_CONFIG.replace("output_dir = \"./cpu_exports\"", "output_dir = \"\"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("report.output_dir"));
}

#[test]
fn test_config_validation_rejects_bad_offset() {
    let bad = VALID_CONFIG.replace("utc_offset = \"+08:00\"", "utc_offset = \"somewhere\"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("utc_offset"));
}

#[test]
fn test_config_validation_rejects_empty_step() {
    let bad = VALID_CONFIG.replace("step = \"60s\"", "step = \"\"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("prometheus.step"));
}
