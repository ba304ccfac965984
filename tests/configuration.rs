//! Configuration tests: credentials from the environment and tunables
//! from a TOML file, as seen by the benchmark runner.

use std::collections::HashMap;
use std::io::Write;

use toon_bench::config::REQUIRED_ENV;
use toon_bench::{AzureConfig, BenchError, BenchSettings, Config, Dataset, Format};

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

/// Nothing set: every variable is named in one error
#[test]
fn test_no_credentials() {
    let err = AzureConfig::from_lookup(env(&[])).unwrap_err();
    match &err {
        BenchError::MissingConfig { missing } => assert_eq!(missing.len(), REQUIRED_ENV.len()),
        other => panic!("unexpected error: {other}"),
    }

    let message = err.to_string();
    assert!(message.starts_with("Missing one or more Azure env vars:"));
    for name in REQUIRED_ENV {
        assert!(message.contains(name));
    }
}

/// A blank deployment is as bad as an unset one
#[test]
fn test_blank_deployment() {
    let err = AzureConfig::from_lookup(env(&[
        ("AZURE_OPENAI_API_KEY", "secret"),
        ("AZURE_OPENAI_ENDPOINT", "https://demo.openai.azure.com"),
        ("AZURE_OPENAI_API_VERSION", "2024-10-21"),
        ("AZURE_OPENAI_DEPLOYMENT", ""),
    ]))
    .unwrap_err();

    match err {
        BenchError::MissingConfig { missing } => {
            assert_eq!(missing, vec!["AZURE_OPENAI_DEPLOYMENT".to_string()]);
        },
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_complete_credentials() {
    let azure = AzureConfig::from_lookup(env(&[
        ("AZURE_OPENAI_API_KEY", "secret"),
        ("AZURE_OPENAI_ENDPOINT", "https://demo.openai.azure.com/"),
        ("AZURE_OPENAI_API_VERSION", "2024-10-21"),
        ("AZURE_OPENAI_DEPLOYMENT", "gpt-4o"),
    ]))
    .unwrap();

    assert_eq!(
        azure.completions_url(),
        "https://demo.openai.azure.com/openai/deployments/gpt-4o/chat/completions?api-version=2024-10-21"
    );
    assert!(!format!("{azure:?}").contains("secret"));
}

/// File values reach the requests and results the runner builds
#[test]
fn test_config_file_drives_settings() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[pricing]
input_per_1k = 0.005
output_per_1k = 0.015

[request]
temperature = 0.2
max_tokens = 256
system_prompt = "Be brief."

[report]
preview_chars = 80
"#
    )
    .unwrap();

    let config = Config::from_file(file.path())
        .unwrap()
        .with_env_overrides(env(&[("TOON_BENCH_OUTPUT_COST_PER_1K", "0.02")]));
    let settings = BenchSettings::from(&config);

    assert!((settings.pricing.input_per_1k - 0.005).abs() < 1e-12);
    assert!((settings.pricing.output_per_1k - 0.02).abs() < 1e-12);
    assert_eq!(settings.preview_chars, 80);

    let data = Dataset::sample().to_value().unwrap();
    let request = settings.request(&data, Format::Json).unwrap();
    assert_eq!(request.max_tokens, Some(256));
    assert!((request.temperature - 0.2).abs() < f32::EPSILON);
    assert_eq!(request.messages[0].content.as_deref(), Some("Be brief."));

    let body = serde_json::to_value(&request).unwrap();
    assert_eq!(body["max_tokens"], 256);
    assert!(body.get("model").is_none());
}

#[test]
fn test_invalid_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[pricing]\ninput_per_1k = \"cheap\"").unwrap();

    let err = Config::from_file(file.path()).unwrap_err();
    assert!(matches!(err, BenchError::Config(_)));
}
