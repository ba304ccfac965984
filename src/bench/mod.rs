//! Benchmark runner.
//!
//! Renders the data once per format, sends each prompt through a
//! [`ChatBackend`] and turns the reported usage into [`RunResult`]s. The
//! JSON run always completes before the TOON run starts.

use std::time::Instant;

use serde_json::Value;

use crate::client::{ChatBackend, ChatRequest};
use crate::codec::{EncodeOptions, Format, ToonEncoder};
use crate::config::Config;
use crate::cost::Pricing;
use crate::error::{BenchError, Result};
use crate::prompt::{messages, render_prompt_with};
use crate::report::{Comparison, Estimate, EstimateRow, RunResult};
use crate::tokenizer::{Encoding, TokenCounter};

/// Parameters shared by both runs
#[derive(Debug, Clone, PartialEq)]
pub struct BenchSettings {
    /// Rates for cost estimates
    pub pricing: Pricing,
    /// Sampling temperature
    pub temperature: f32,
    /// Optional completion cap
    pub max_tokens: Option<u32>,
    /// System message
    pub system_prompt: String,
    /// Preview length in characters
    pub preview_chars: usize,
    /// TOON encoder options
    pub toon: EncodeOptions,
}

impl Default for BenchSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for BenchSettings {
    fn from(config: &Config) -> Self {
        Self {
            pricing: config.pricing,
            temperature: config.request.temperature,
            max_tokens: config.request.max_tokens,
            system_prompt: config.request.system_prompt.clone(),
            preview_chars: config.report.preview_chars,
            toon: EncodeOptions::default(),
        }
    }
}

impl BenchSettings {
    /// Prompt text for `format`
    pub fn prompt(&self, data: &Value, format: Format) -> Result<String> {
        render_prompt_with(data, format, &ToonEncoder::with_options(self.toon))
    }

    /// Full request for `format`
    pub fn request(&self, data: &Value, format: Format) -> Result<ChatRequest> {
        let prompt = self.prompt(data, format)?;
        Ok(ChatRequest {
            messages: messages(&self.system_prompt, &prompt),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        })
    }
}

/// Sequential JSON-then-TOON benchmark against one backend
pub struct Benchmark {
    backend: Box<dyn ChatBackend>,
    settings: BenchSettings,
}

impl Benchmark {
    /// Create a runner
    pub fn new(backend: Box<dyn ChatBackend>, settings: BenchSettings) -> Self {
        Self { backend, settings }
    }

    /// Send the prompt for one format and collect its usage.
    pub async fn run_format(&self, data: &Value, format: Format) -> Result<RunResult> {
        let request = self.settings.request(data, format)?;

        tracing::info!("Running {format} run...");
        let started = Instant::now();
        let response = self.backend.complete(&request).await?;
        let elapsed = started.elapsed();

        let usage = response.usage.ok_or_else(|| {
            BenchError::InvalidResponse(format!("{format} response carried no usage statistics"))
        })?;
        let output = response.content().unwrap_or_default();
        if output.is_empty() {
            tracing::warn!("{format} run returned no text");
        }

        tracing::debug!(
            format = %format,
            prompt_tokens = usage.prompt_tokens,
            completion_tokens = usage.completion_tokens,
            latency_ms = elapsed.as_millis() as u64,
            "Run complete"
        );

        Ok(RunResult::from_usage(
            format,
            usage,
            &self.settings.pricing,
            output,
            self.settings.preview_chars,
        ))
    }

    /// Run JSON, then TOON, and compare.
    pub async fn run(&self, data: &Value) -> Result<Comparison> {
        let baseline = self.run_format(data, Format::Json).await?;
        let candidate = self.run_format(data, Format::Toon).await?;
        Ok(Comparison::new(self.backend.model(), baseline, candidate))
    }
}

/// Count prompt tokens locally for both formats; no network access.
pub fn estimate(data: &Value, settings: &BenchSettings, encoding: Encoding) -> Result<Estimate> {
    let counter = TokenCounter::new(encoding);
    let row = |format: Format| -> Result<EstimateRow> {
        let prompt = settings.prompt(data, format)?;
        let prompt_tokens = counter.count_many(&[settings.system_prompt.as_str(), prompt.as_str()]);
        let billed = u32::try_from(prompt_tokens).unwrap_or(u32::MAX);
        Ok(EstimateRow {
            format,
            bytes: prompt.len(),
            prompt_tokens,
            input_cost_usd: settings.pricing.input_cost(billed),
        })
    };

    Ok(Estimate {
        encoding,
        baseline: row(Format::Json)?,
        candidate: row(Format::Toon)?,
    })
}
