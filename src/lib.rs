//! # toon-bench - JSON vs TOON prompt benchmark
//!
//! Measures what it costs to embed the same structured data in an LLM
//! prompt as pretty-printed JSON versus TOON (Token-Oriented Object
//! Notation), using the token counts reported by a hosted chat-completion
//! API (Azure OpenAI).
//!
//! ## Pipeline
//!
//! ```text
//!  dataset ──> codec (JSON | TOON) ──> prompt ──> ChatBackend ──> RunResult
//!                                                  (JSON, then TOON)    │
//!                                                                       v
//!                                        report <── Comparison <── cost
//! ```
//!
//! The two requests run strictly one after the other. Nothing is persisted.
//!
//! ## Example: TOON rendering
//!
//! ```
//! use toon_bench::codec::{render, Format};
//! use toon_bench::dataset::Dataset;
//!
//! let data = Dataset::sample().to_value().unwrap();
//! let toon = render(&data, Format::Toon).unwrap();
//! assert!(toon.contains("listings[4]{mls_id,price,beds,baths,"));
//! ```
//!
//! ## Example: live run
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use toon_bench::{AzureChatClient, AzureConfig, BenchSettings, Benchmark, Config, Dataset};
//!
//! let config = Config::load(None)?;
//! let client = AzureChatClient::new(AzureConfig::from_env()?, Duration::from_secs(120))?;
//! let bench = Benchmark::new(Box::new(client), BenchSettings::from(&config));
//! let comparison = bench.run(&Dataset::sample().to_value()?).await?;
//! println!("{}", comparison.render_text());
//! ```
//!
//! ## Modules
//!
//! - [`codec`]: JSON and TOON rendering
//! - [`prompt`]: prompt templates
//! - [`client`]: chat-completion wire types and the Azure client
//! - [`bench`]: the sequential runner and offline estimate
//! - [`cost`]: pricing and reduction formulas
//! - [`report`]: results and text/JSON reports
//! - [`tokenizer`]: local token counting
//! - [`dataset`]: sample data
//! - [`config`]: configuration management
//! - [`error`]: error types and result aliases

pub mod bench;
pub mod client;
pub mod codec;
pub mod config;
pub mod cost;
pub mod dataset;
pub mod error;
pub mod prompt;
pub mod report;
pub mod tokenizer;

// Re-exports for convenience
pub use bench::{estimate, BenchSettings, Benchmark};
pub use client::{AzureChatClient, ChatBackend, ChatMessage, ChatRequest, ChatResponse, Usage};
pub use codec::{render, Format, ToonEncoder};
pub use config::{AzureConfig, Config};
pub use cost::{percent_reduction, Pricing};
pub use dataset::Dataset;
pub use error::{BenchError, Result};
pub use report::{truncate_preview, Comparison, Estimate, RunResult};
pub use tokenizer::{Encoding, TokenCounter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
