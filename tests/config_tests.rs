//! Integration tests for configuration loading

use salesdash::prelude::*;

#[test]
fn test_config_loads_from_a_yaml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dashboard.yaml");
    std::fs::write(
        &path,
        r#"
latency:
  enabled: false
  dashboard_ms: 50
metrics:
  conversion_rate: 0.05
"#,
    )
    .unwrap();

    let config = DashboardConfig::from_yaml_file(path.to_str().unwrap()).unwrap();

    assert!(!config.latency.enabled);
    assert_eq!(config.latency.dashboard_ms, 50);
    // Fields missing from the file keep their defaults
    assert_eq!(config.latency.export_ms, 100);
    assert_eq!(config.metrics.conversion_rate, 0.05);
}

#[test]
fn test_missing_config_file_is_an_error() {
    assert!(DashboardConfig::from_yaml_file("/definitely/not/here.yaml").is_err());
}

#[test]
fn test_malformed_yaml_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.yaml");
    std::fs::write(&path, "latency: [this, is, not, a, map]").unwrap();

    assert!(DashboardConfig::from_yaml_file(path.to_str().unwrap()).is_err());
}

#[tokio::test]
async fn test_configured_dashboard_runs_end_to_end() {
    let config = DashboardConfig::from_yaml_str("latency:\n  enabled: false\n").unwrap();

    let dashboard = Dashboard::seeded(config);
    let page = dashboard
        .orders()
        .list(&OrderQuery::default())
        .await
        .unwrap();

    assert_eq!(page.pagination.total, 5);
}
