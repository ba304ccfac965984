//! toon-bench CLI binary.
//!
//! Compares JSON and TOON prompt encodings against an Azure OpenAI
//! deployment.
//!
//! # Commands
//!
//! - `run` - Send both prompts to Azure and compare reported usage and cost
//! - `estimate` - Compare prompt token counts locally, without any API call
//! - `render` - Print the encoded data (or the full prompt) for one format
//!
//! # Usage
//! ```bash
//! AZURE_OPENAI_API_KEY=... AZURE_OPENAI_ENDPOINT=https://my-resource.openai.azure.com \
//! AZURE_OPENAI_API_VERSION=2024-10-21 AZURE_OPENAI_DEPLOYMENT=gpt-4o \
//!     toon-bench run
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use serde_json::Value;
use toon_bench::{
    bench::{estimate, BenchSettings, Benchmark},
    client::AzureChatClient,
    codec::{Delimiter, Format},
    config::{AzureConfig, Config, ENV_DEPLOYMENT},
    dataset::{self, Dataset},
    tokenizer::Encoding,
    VERSION,
};

#[derive(Parser)]
#[command(name = "toon-bench")]
#[command(version = VERSION)]
#[command(about = "Benchmark JSON vs TOON prompt encodings on Azure OpenAI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run both prompts against Azure OpenAI and compare usage
    Run {
        /// Config file (default: <config dir>/toon-bench/config.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// JSON file to benchmark instead of the built-in sample
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Input cost per 1K prompt tokens (USD)
        #[arg(long)]
        input_cost: Option<f64>,

        /// Output cost per 1K completion tokens (USD)
        #[arg(long)]
        output_cost: Option<f64>,

        /// TOON delimiter (comma, tab, pipe)
        #[arg(long, default_value = "comma")]
        delimiter: String,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,

        /// Emit logs as JSON lines
        #[arg(long)]
        log_json: bool,
    },

    /// Count prompt tokens locally for both formats
    Estimate {
        /// Config file (default: <config dir>/toon-bench/config.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// JSON file to benchmark instead of the built-in sample
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Model or deployment name used to pick the tokenizer
        /// (default: $AZURE_OPENAI_DEPLOYMENT, else gpt-4o)
        #[arg(short, long)]
        model: Option<String>,

        /// Tokenizer override (cl100k_base, o200k_base, heuristic)
        #[arg(short, long)]
        encoding: Option<String>,

        /// Input cost per 1K prompt tokens (USD)
        #[arg(long)]
        input_cost: Option<f64>,

        /// TOON delimiter (comma, tab, pipe)
        #[arg(long, default_value = "comma")]
        delimiter: String,

        /// Emit the estimate as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the encoded data for one format
    Render {
        /// Format to render (json, toon)
        format: String,

        /// JSON file to render instead of the built-in sample
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Print the full prompt instead of just the data block
        #[arg(short, long)]
        prompt: bool,

        /// TOON delimiter (comma, tab, pipe)
        #[arg(long, default_value = "comma")]
        delimiter: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    // A missing .env is fine; variables may come from the shell.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            data,
            input_cost,
            output_cost,
            delimiter,
            json,
            output,
            verbose,
            log_json,
        } => cmd_run(
            config.as_deref(),
            data.as_deref(),
            input_cost,
            output_cost,
            &delimiter,
            json,
            output,
            verbose,
            log_json,
        ),

        Commands::Estimate {
            config,
            data,
            model,
            encoding,
            input_cost,
            delimiter,
            json,
        } => cmd_estimate(
            config.as_deref(),
            data.as_deref(),
            model,
            encoding.as_deref(),
            input_cost,
            &delimiter,
            json,
        ),

        Commands::Render {
            format,
            data,
            prompt,
            delimiter,
            output,
        } => cmd_render(&format, data.as_deref(), prompt, &delimiter, output),
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_run(
    config_path: Option<&Path>,
    data: Option<&Path>,
    input_cost: Option<f64>,
    output_cost: Option<f64>,
    delimiter: &str,
    json: bool,
    output: Option<PathBuf>,
    verbose: bool,
    log_json: bool,
) -> anyhow::Result<()> {
    init_logging(verbose, log_json);

    // Fail on missing credentials before doing anything else
    let azure = AzureConfig::from_env()?;

    let mut config = Config::load(config_path)?;
    if let Some(rate) = input_cost {
        config.pricing.input_per_1k = rate;
    }
    if let Some(rate) = output_cost {
        config.pricing.output_per_1k = rate;
    }

    let settings = settings_for(&config, delimiter)?;
    let data = load_data(data)?;

    tracing::info!(
        "Benchmarking deployment {} (api-version {})",
        azure.deployment,
        azure.api_version
    );

    let client = AzureChatClient::new(azure, Duration::from_secs(config.request.timeout_secs))?;
    let bench = Benchmark::new(Box::new(client), settings);

    let runtime = tokio::runtime::Runtime::new()?;
    let comparison = runtime.block_on(bench.run(&data))?;

    let rendered = if json {
        serde_json::to_string_pretty(&comparison.to_report())?
    } else {
        comparison.render_text()
    };
    write_output(output, &rendered)
}

fn cmd_estimate(
    config_path: Option<&Path>,
    data: Option<&Path>,
    model: Option<String>,
    encoding: Option<&str>,
    input_cost: Option<f64>,
    delimiter: &str,
    json: bool,
) -> anyhow::Result<()> {
    init_logging(false, false);

    let mut config = Config::load(config_path)?;
    if let Some(rate) = input_cost {
        config.pricing.input_per_1k = rate;
    }

    let encoding = match encoding {
        Some(name) => name.parse::<Encoding>().map_err(|e| anyhow::anyhow!(e))?,
        None => {
            let model = model
                .or_else(|| std::env::var(ENV_DEPLOYMENT).ok())
                .unwrap_or_else(|| "gpt-4o".to_string());
            Encoding::infer_from_model(&model)
        },
    };

    let settings = settings_for(&config, delimiter)?;
    let data = load_data(data)?;
    let estimate = estimate(&data, &settings, encoding)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&estimate)?);
    } else {
        println!("{}", estimate.render_text());
    }
    Ok(())
}

fn cmd_render(
    format: &str,
    data: Option<&Path>,
    prompt: bool,
    delimiter: &str,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let format = format.parse::<Format>().map_err(|e| anyhow::anyhow!(e))?;
    let settings = settings_for(&Config::default(), delimiter)?;
    let data = load_data(data)?;

    let content = if prompt {
        settings.prompt(&data, format)?
    } else {
        let encoder = toon_bench::ToonEncoder::with_options(settings.toon);
        toon_bench::codec::render_with(&data, format, &encoder)?
    };
    write_output(output, &content)
}

// Helper functions

fn init_logging(verbose: bool, json: bool) {
    let log_level = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    // Reports go to stdout, logs to stderr
    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn settings_for(config: &Config, delimiter: &str) -> anyhow::Result<BenchSettings> {
    let mut settings = BenchSettings::from(config);
    settings.toon.delimiter = delimiter
        .parse::<Delimiter>()
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok(settings)
}

fn load_data(path: Option<&Path>) -> anyhow::Result<Value> {
    match path {
        Some(path) => Ok(dataset::load_json(path)?),
        None => Ok(Dataset::sample().to_value()?),
    }
}

fn write_output(output: Option<PathBuf>, content: &str) -> anyhow::Result<()> {
    if let Some(path) = output {
        std::fs::write(path, content)?;
    } else {
        println!("{content}");
    }
    Ok(())
}
