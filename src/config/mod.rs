//! Configuration management.
//!
//! Two sources feed a benchmark run:
//! - Azure credentials, read from the environment (a `.env` file is loaded
//!   by the binary first). All four values are required for live runs.
//! - Tunables (pricing, request parameters, report options), read from an
//!   optional TOML file and overridden by `TOON_BENCH_*` environment values.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cost::Pricing;
use crate::error::{BenchError, Result};

/// Azure OpenAI API key
pub const ENV_API_KEY: &str = "AZURE_OPENAI_API_KEY";
/// Azure resource endpoint, e.g. `https://my-resource.openai.azure.com`
pub const ENV_ENDPOINT: &str = "AZURE_OPENAI_ENDPOINT";
/// REST API version, e.g. `2024-10-21`
pub const ENV_API_VERSION: &str = "AZURE_OPENAI_API_VERSION";
/// Deployment name of the model to call
pub const ENV_DEPLOYMENT: &str = "AZURE_OPENAI_DEPLOYMENT";

/// Every variable a live run requires, in reporting order.
pub const REQUIRED_ENV: [&str; 4] = [ENV_API_KEY, ENV_ENDPOINT, ENV_API_VERSION, ENV_DEPLOYMENT];

const ENV_INPUT_COST: &str = "TOON_BENCH_INPUT_COST_PER_1K";
const ENV_OUTPUT_COST: &str = "TOON_BENCH_OUTPUT_COST_PER_1K";
const ENV_TIMEOUT: &str = "TOON_BENCH_TIMEOUT_SECS";

/// Credentials and addressing for an Azure OpenAI deployment.
#[derive(Clone, PartialEq, Eq)]
pub struct AzureConfig {
    /// API key sent in the `api-key` header
    pub api_key: String,
    /// Resource endpoint, without trailing slash
    pub endpoint: String,
    /// `api-version` query parameter
    pub api_version: String,
    /// Deployment name (doubles as the model identifier)
    pub deployment: String,
}

impl AzureConfig {
    /// Read credentials from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read credentials through an arbitrary lookup function.
    ///
    /// Unset and blank values both count as missing; every missing name is
    /// reported in a single [`BenchError::MissingConfig`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let missing: Vec<String> = REQUIRED_ENV
            .iter()
            .filter(|&&name| read(name).is_none())
            .map(|name| (*name).to_string())
            .collect();
        if !missing.is_empty() {
            return Err(BenchError::MissingConfig { missing });
        }

        let endpoint = read(ENV_ENDPOINT).unwrap_or_default();
        Ok(Self {
            api_key: read(ENV_API_KEY).unwrap_or_default(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_version: read(ENV_API_VERSION).unwrap_or_default(),
            deployment: read(ENV_DEPLOYMENT).unwrap_or_default(),
        })
    }

    /// Full chat-completions URL for this deployment
    pub fn completions_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.endpoint, self.deployment, self.api_version
        )
    }
}

impl std::fmt::Debug for AzureConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AzureConfig")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("api_version", &self.api_version)
            .field("deployment", &self.deployment)
            .finish()
    }
}

/// Benchmark tunables
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Token pricing used for cost estimates
    #[serde(default)]
    pub pricing: Pricing,

    /// Chat-completion request parameters
    #[serde(default)]
    pub request: RequestConfig,

    /// Report rendering options
    #[serde(default)]
    pub report: ReportConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| BenchError::Config(format!("Failed to read config file: {e}")))?;

        toml::from_str(&content)
            .map_err(|e| BenchError::Config(format!("Failed to parse config: {e}")))
    }

    /// Default config file location (`<config dir>/toon-bench/config.toml`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("toon-bench").join("config.toml"))
    }

    /// Resolve configuration: explicit file, else the default file when it
    /// exists, else built-in defaults; then environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let base = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path().filter(|p| p.is_file()) {
                Some(path) => {
                    tracing::debug!("Using config file {}", path.display());
                    Self::from_file(path)?
                },
                None => Self::default(),
            },
        };

        Ok(base.with_env_overrides(|key| std::env::var(key).ok()))
    }

    /// Apply `TOON_BENCH_*` overrides. Unparseable values are logged and ignored.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(rate) = parse_env::<f64, _>(&lookup, ENV_INPUT_COST) {
            self.pricing.input_per_1k = rate;
        }
        if let Some(rate) = parse_env::<f64, _>(&lookup, ENV_OUTPUT_COST) {
            self.pricing.output_per_1k = rate;
        }
        if let Some(secs) = parse_env::<u64, _>(&lookup, ENV_TIMEOUT) {
            self.request.timeout_secs = secs;
        }
        self
    }
}

fn parse_env<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring {key}: cannot parse {raw:?}");
            None
        },
    }
}

/// Chat-completion request parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestConfig {
    /// Sampling temperature
    pub temperature: f32,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Optional cap on completion tokens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    /// System message sent ahead of every prompt
    pub system_prompt: String,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            temperature: 0.0,
            timeout_secs: 120,
            max_tokens: None,
            system_prompt: crate::prompt::SYSTEM_PROMPT.to_string(),
        }
    }
}

/// Report rendering options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Maximum characters of model output shown per run
    pub preview_chars: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            preview_chars: crate::report::PREVIEW_CHARS,
        }
    }
}
