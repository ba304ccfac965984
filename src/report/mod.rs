//! Benchmark results and their presentation.
//!
//! A [`RunResult`] is produced per model invocation; a [`Comparison`] pairs
//! the JSON baseline with the TOON candidate and derives the reductions.
//! Both render to the plain-text report printed by the CLI, or to JSON via
//! [`Comparison::to_report`].

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::client::Usage;
use crate::codec::Format;
use crate::cost::{percent_reduction, Pricing};
use crate::tokenizer::Encoding;

/// Default preview length in characters
pub const PREVIEW_CHARS: usize = 400;

/// Appended to previews that were cut
pub const TRUNCATION_MARKER: &str = "...\n[truncated]";

const RULE: &str = "===================================================================";

/// Cut `text` to `limit` characters, appending [`TRUNCATION_MARKER`].
///
/// Text of `limit` characters or fewer is returned unchanged. Limits count
/// Unicode scalar values, so multibyte characters are never split.
pub fn truncate_preview(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}{TRUNCATION_MARKER}", &text[..cut]),
        None => text.to_string(),
    }
}

/// Outcome of one model invocation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunResult {
    /// Encoding of the embedded data
    pub format: Format,
    /// Input tokens billed
    pub prompt_tokens: u32,
    /// Output tokens generated
    pub completion_tokens: u32,
    /// Total as reported by the API
    pub total_tokens: u32,
    /// Estimated cost in USD
    pub cost_usd: f64,
    /// Possibly truncated model output
    pub preview: String,
}

impl RunResult {
    /// Build a result from API usage and the generated text.
    pub fn from_usage(
        format: Format,
        usage: Usage,
        pricing: &Pricing,
        output: &str,
        preview_chars: usize,
    ) -> Self {
        Self {
            format,
            prompt_tokens: usage.prompt_tokens,
            completion_tokens: usage.completion_tokens,
            total_tokens: usage.total_tokens,
            cost_usd: pricing.cost(usage.prompt_tokens, usage.completion_tokens),
            preview: truncate_preview(output, preview_chars),
        }
    }

    fn write_text(&self, out: &mut String) {
        let _ = writeln!(out, "\n--- {} INPUT ---", self.format);
        let _ = writeln!(out, "Prompt tokens    : {}", self.prompt_tokens);
        let _ = writeln!(out, "Completion tokens: {}", self.completion_tokens);
        let _ = writeln!(out, "Total tokens     : {}", self.total_tokens);
        let _ = writeln!(out, "Estimated cost   : ${:.6}", self.cost_usd);
        let _ = writeln!(out, "Sample output    :");
        let _ = writeln!(out, "{}", self.preview);
    }
}

/// Reductions of the candidate relative to the baseline, in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    /// Prompt-token reduction
    pub prompt_token_reduction_pct: f64,
    /// Total-token reduction
    pub total_token_reduction_pct: f64,
    /// Estimated cost reduction
    pub cost_reduction_pct: f64,
}

/// JSON baseline vs TOON candidate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    /// Deployment or model the runs were sent to
    pub model: String,
    /// Baseline run (JSON)
    pub baseline: RunResult,
    /// Candidate run (TOON)
    pub candidate: RunResult,
}

impl Comparison {
    /// Pair two runs
    pub fn new(model: impl Into<String>, baseline: RunResult, candidate: RunResult) -> Self {
        Self {
            model: model.into(),
            baseline,
            candidate,
        }
    }

    /// Prompt-token reduction in percent
    pub fn prompt_reduction_pct(&self) -> f64 {
        percent_reduction(
            self.baseline.prompt_tokens as f64,
            self.candidate.prompt_tokens as f64,
        )
    }

    /// Total-token reduction in percent
    pub fn total_reduction_pct(&self) -> f64 {
        percent_reduction(
            self.baseline.total_tokens as f64,
            self.candidate.total_tokens as f64,
        )
    }

    /// Estimated cost reduction in percent
    pub fn cost_reduction_pct(&self) -> f64 {
        percent_reduction(self.baseline.cost_usd, self.candidate.cost_usd)
    }

    /// All three reductions
    pub fn summary(&self) -> Summary {
        Summary {
            prompt_token_reduction_pct: self.prompt_reduction_pct(),
            total_token_reduction_pct: self.total_reduction_pct(),
            cost_reduction_pct: self.cost_reduction_pct(),
        }
    }

    /// Plain-text report
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "\n==================== {} vs {} ({} on Azure) ====================",
            self.baseline.format, self.candidate.format, self.model
        );

        self.baseline.write_text(&mut out);
        self.candidate.write_text(&mut out);

        let _ = writeln!(
            out,
            "\n======================== COMPARISON SUMMARY ========================"
        );
        let _ = writeln!(out, "Prompt token reduction : {:.2}%", self.prompt_reduction_pct());
        let _ = writeln!(out, "Total token reduction  : {:.2}%", self.total_reduction_pct());
        let _ = writeln!(out, "Cost reduction (est.)  : {:.2}%", self.cost_reduction_pct());
        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(
            out,
            "\nNote: Pricing numbers are approximate. Set [pricing] in the config file \
             (or --input-cost/--output-cost) to match your actual Azure pricing."
        );
        out
    }

    /// Serializable report stamped with the current time
    pub fn to_report(&self) -> ComparisonReport<'_> {
        ComparisonReport {
            generated_at: Utc::now(),
            comparison: self,
            summary: self.summary(),
        }
    }
}

/// JSON report envelope
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport<'a> {
    /// When the report was produced
    pub generated_at: DateTime<Utc>,
    /// The two runs
    #[serde(flatten)]
    pub comparison: &'a Comparison,
    /// Derived reductions
    pub summary: Summary,
}

/// Offline measurement of one rendered prompt
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateRow {
    /// Encoding of the embedded data
    pub format: Format,
    /// Prompt size in bytes
    pub bytes: usize,
    /// Locally counted prompt tokens (system + user message)
    pub prompt_tokens: usize,
    /// Input-side cost at the configured rate
    pub input_cost_usd: f64,
}

/// Offline JSON vs TOON comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Estimate {
    /// Tokenizer used for counting
    pub encoding: Encoding,
    /// JSON prompt
    pub baseline: EstimateRow,
    /// TOON prompt
    pub candidate: EstimateRow,
}

impl Estimate {
    /// Prompt-token reduction in percent
    pub fn token_reduction_pct(&self) -> f64 {
        percent_reduction(
            self.baseline.prompt_tokens as f64,
            self.candidate.prompt_tokens as f64,
        )
    }

    /// Prompt-size reduction in percent
    pub fn byte_reduction_pct(&self) -> f64 {
        percent_reduction(self.baseline.bytes as f64, self.candidate.bytes as f64)
    }

    /// Plain-text table
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "\nOffline estimate ({} tokenizer)", self.encoding);
        let _ = writeln!(out, "  +--------+----------+----------+--------------+");
        let _ = writeln!(out, "  | Format |    Bytes |   Tokens | Input cost   |");
        let _ = writeln!(out, "  +--------+----------+----------+--------------+");
        for row in [&self.baseline, &self.candidate] {
            let _ = writeln!(
                out,
                "  | {:<6} | {:>8} | {:>8} | ${:>11.6} |",
                row.format.name(),
                row.bytes,
                row.prompt_tokens,
                row.input_cost_usd
            );
        }
        let _ = writeln!(out, "  +--------+----------+----------+--------------+");
        let _ = writeln!(out, "Prompt token reduction : {:.2}%", self.token_reduction_pct());
        let _ = writeln!(out, "Prompt size reduction  : {:.2}%", self.byte_reduction_pct());
        out
    }
}
